//! Order book performance lab
//!
//! Runs latency tests followed by a scripted trading session showing
//! placement, a market sweep and cancellation.

use orderbook::{Decimal, OrderBook, Side};


/// Main entry point - runs performance tests and demo.
fn main() -> Result<(), orderbook::OrderBookError> {
    println!("=== Order Book Performance Lab ===");

    latency_test::run_latency_tests()?;
    latency_test::run_throughput_test()?;

    println!("\n=== Basic Demo ===");
    run_basic_demo()
}

/// Walks one session through every book operation.
fn run_basic_demo() -> Result<(), orderbook::OrderBookError> {
    let mut ob = OrderBook::new();
    ob.initialize(Decimal::from(100))?;
    println!("Initialized at mid-price {}", ob.mid_price()?);

    let bid = ob.place_limit_order(Side::Bid, Decimal::from(99), Decimal::from(5))?;
    println!("Resting bid 5 @ 99: {}", bid);
    let ask = ob.place_limit_order(Side::Ask, Decimal::from(101), Decimal::from(3))?;
    println!("Resting ask 3 @ 101: {}", ask);
    println!("Mid-price {} spread {}", ob.mid_price()?, ob.spread());

    // Buy over the mid-price: rejected, limit orders never cross.
    if let Err(err) = ob.place_limit_order(Side::Bid, Decimal::from(102), Decimal::ONE) {
        println!("Rejected: {}", err);
    }

    let fill = ob.place_market_order(Side::Bid, Decimal::from(2))?;
    println!("Market buy {} filled, last price {}", fill.quantity, fill.last_price);

    ob.cancel_limit_order(bid, Decimal::from(99))?;
    println!("Cancelled {}", bid);

    println!("\n{}", ob);
    Ok(())
}
