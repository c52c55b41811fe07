use clap::{Parser, Subcommand};
use orderbook::{Decimal, OrderId, Side};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "limitx-cli")]
#[command(about = "Command line client for the exchange simulator")]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the book around a mid-price
    Init {
        #[arg(short, long)]
        mid_price: Decimal,
    },
    /// Rest a limit order
    Limit {
        #[arg(long, value_parser = parse_side)]
        side: Side,
        #[arg(short, long)]
        price: Decimal,
        #[arg(short, long)]
        qty: Decimal,
    },
    /// Cancel a resting order
    Cancel {
        #[arg(short, long)]
        id: OrderId,
        #[arg(short, long)]
        price: Decimal,
    },
    /// Execute a market order
    Market {
        #[arg(long, value_parser = parse_side)]
        side: Side,
        #[arg(short, long)]
        qty: Decimal,
    },
    /// Print the book
    Data,
    Health,
}

#[derive(Serialize)]
struct InitRequest {
    mid_price: Decimal,
}

#[derive(Serialize)]
struct LimitOrderRequest {
    #[serde(rename = "type")]
    is_buy: bool,
    price: Decimal,
    qty: Decimal,
}

#[derive(Deserialize)]
struct LimitOrderResponse {
    order_id: OrderId,
}

#[derive(Serialize)]
struct CancelOrderRequest {
    id: OrderId,
    price: Decimal,
}

#[derive(Serialize)]
struct MarketOrderRequest {
    #[serde(rename = "type")]
    is_buy: bool,
    qty: Decimal,
}

#[derive(Deserialize)]
struct MarketOrderResponse {
    qty: Decimal,
    price: Decimal,
}

#[derive(Deserialize)]
struct LimitData {
    price: Decimal,
    volume: Decimal,
}

#[derive(Deserialize)]
struct BookData {
    buy_limits: Vec<LimitData>,
    sell_limits: Vec<LimitData>,
    price: Decimal,
    spread: Decimal,
    midprice: Decimal,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_lowercase().as_str() {
        "bid" | "buy" => Ok(Side::Bid),
        "ask" | "sell" => Ok(Side::Ask),
        _ => Err(format!("Invalid side: {}. Use 'buy' or 'sell'", s)),
    }
}

async fn print_error(response: reqwest::Response) -> Result<(), reqwest::Error> {
    println!("Error: {}", response.status());
    println!("{}", response.text().await?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Init { mid_price } => {
            let response = client
                .post(format!("{}/init", cli.server))
                .json(&InitRequest { mid_price })
                .send()
                .await?;

            if response.status().is_success() {
                println!("Book initialized at mid-price {}", mid_price);
            } else {
                print_error(response).await?;
            }
        }

        Commands::Limit { side, price, qty } => {
            let request = LimitOrderRequest {
                is_buy: side.is_buy(),
                price,
                qty,
            };
            let response = client
                .post(format!("{}/limit_order", cli.server))
                .json(&request)
                .send()
                .await?;

            if response.status().is_success() {
                let result: LimitOrderResponse = response.json().await?;
                println!("Order ID: {}", result.order_id);
            } else {
                print_error(response).await?;
            }
        }

        Commands::Cancel { id, price } => {
            let response = client
                .post(format!("{}/cancel_order", cli.server))
                .json(&CancelOrderRequest { id, price })
                .send()
                .await?;

            if response.status().is_success() {
                println!("Cancelled {}", id);
            } else {
                print_error(response).await?;
            }
        }

        Commands::Market { side, qty } => {
            let request = MarketOrderRequest {
                is_buy: side.is_buy(),
                qty,
            };
            let response = client
                .post(format!("{}/market_order", cli.server))
                .json(&request)
                .send()
                .await?;

            if response.status().is_success() {
                let fill: MarketOrderResponse = response.json().await?;
                println!("Filled {} @ last price {}", fill.qty, fill.price);
            } else {
                print_error(response).await?;
            }
        }

        Commands::Data => {
            let response = client
                .get(format!("{}/get_data", cli.server))
                .send()
                .await?;

            if response.status().is_success() {
                let data: BookData = response.json().await?;

                println!("Asks:");
                for level in data.sell_limits.iter().rev() {
                    println!("  {} @ {}", level.volume, level.price);
                }
                println!("Bids:");
                for level in &data.buy_limits {
                    println!("  {} @ {}", level.volume, level.price);
                }
                println!();
                println!("Last price: {}", data.price);
                println!("Spread: {}", data.spread);
                println!("Mid-price: {}", data.midprice);
            } else {
                print_error(response).await?;
            }
        }

        Commands::Health => {
            let response = client
                .get(format!("{}/health", cli.server))
                .send()
                .await?;

            if response.status().is_success() {
                let health: serde_json::Value = response.json().await?;
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                print_error(response).await?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sides_loosely() {
        assert_eq!(parse_side("BUY"), Ok(Side::Bid));
        assert_eq!(parse_side("ask"), Ok(Side::Ask));
        assert!(parse_side("hold").is_err());
    }

    #[test]
    fn limit_request_uses_wire_names() {
        let request = LimitOrderRequest {
            is_buy: Side::Bid.is_buy(),
            price: Decimal::from(99),
            qty: Decimal::from(5),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["type"], true);
        assert_eq!(json["price"].as_f64(), Some(99.0));
    }
}
