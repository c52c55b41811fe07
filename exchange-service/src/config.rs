use clap::{Parser, ValueEnum};
use orderbook::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Service configuration, from command line arguments or environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "exchange-service")]
#[command(about = "Single-instrument exchange simulator over HTTP")]
pub struct Config {
    /// TCP port to listen on.
    #[arg(env = "LIMITX_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Interface to bind to.
    #[arg(long, env = "LIMITX_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Default tracing filter, overridden by RUST_LOG when set.
    #[arg(long, env = "LIMITX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LIMITX_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Initialize the book around this mid-price at startup.
    #[arg(long, env = "LIMITX_MID_PRICE")]
    pub mid_price: Option<Decimal>,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_port() {
        let cfg = Config::try_parse_from(["exchange-service"]).expect("defaults parse");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.addr(), "0.0.0.0:8080");
        assert_eq!(cfg.log_format, LogFormat::Compact);
        assert!(cfg.mid_price.is_none());
    }

    #[test]
    fn positional_port_and_flags() {
        let cfg = Config::try_parse_from([
            "exchange-service",
            "9000",
            "--host",
            "127.0.0.1",
            "--log-format",
            "json",
            "--mid-price",
            "100.5",
        ])
        .expect("valid args");
        assert_eq!(cfg.addr(), "127.0.0.1:9000");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.mid_price, Some(Decimal::new(1005, 1)));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Config::try_parse_from(["exchange-service", "not-a-port"]).is_err());
    }
}
