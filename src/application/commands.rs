//! CLI commands
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "swapquote")]
#[command(version, about = "Swap route quotes and trade projections for EVM chains")]
pub struct Cli {
    /// Path to config file (optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the best route and print the trade summary as JSON
    Quote {
        /// Chain id (1 = Ethereum, 137 = Polygon, ...)
        #[arg(long)]
        chain_id: u64,

        /// Input token address, or "native"
        #[arg(long)]
        from: String,

        /// Input token decimals (ignored for native)
        #[arg(long, default_value_t = 18)]
        from_decimals: u8,

        /// Output token address, or "native"
        #[arg(long)]
        to: String,

        /// Output token decimals (ignored for native)
        #[arg(long, default_value_t = 18)]
        to_decimals: u8,

        /// Amount in smallest units of the input token
        #[arg(long)]
        amount: String,

        /// Gas price (overrides config)
        #[arg(long)]
        gas_price: Option<f64>,

        /// Slippage tolerance in percent, e.g. 0.5 (overrides config)
        #[arg(long)]
        slippage: Option<String>,

        /// Recipient address (overrides config)
        #[arg(long)]
        recipient: Option<String>,

        /// Pin the quote to a block
        #[arg(long)]
        block_number: Option<u64>,

        /// Quoting service base URL (overrides config)
        #[arg(long)]
        swap_url: Option<String>,

        /// Price service base URL (overrides config)
        #[arg(long)]
        prices_url: Option<String>,

        /// Skip price lookup; gas cost is then not reported
        #[arg(long)]
        no_prices: bool,
    },

    /// Load tokens from a JSON file, skipping ones already stored
    LoadTokens {
        /// JSON array of {chainId, address, symbol, name, decimals}
        #[arg(long)]
        file: PathBuf,

        /// SQLite database path (overrides config)
        #[arg(long)]
        database: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_command() {
        let cli = Cli::try_parse_from([
            "swapquote",
            "quote",
            "--chain-id",
            "1",
            "--from",
            "native",
            "--to",
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "--to-decimals",
            "6",
            "--amount",
            "1000000000000000000",
            "--slippage",
            "0.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Quote { chain_id, from, to_decimals, slippage, no_prices, .. } => {
                assert_eq!(chain_id, 1);
                assert_eq!(from, "native");
                assert_eq!(to_decimals, 6);
                assert_eq!(slippage.as_deref(), Some("0.5"));
                assert!(!no_prices);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_load_tokens_with_global_config() {
        let cli = Cli::try_parse_from([
            "swapquote",
            "load-tokens",
            "--file",
            "tokens.json",
            "--config",
            "Config.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("Config.toml")));
        assert!(matches!(cli.command, Commands::LoadTokens { database: None, .. }));
    }
}
