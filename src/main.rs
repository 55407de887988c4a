use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swapquote::app::{self, AppCfg, QuoteParams};
use swapquote::application::{Cli, Commands};
use swapquote::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    // Priority: CLI args > Config file > Defaults
    let base_config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    let mut app_cfg = AppCfg::from_config(base_config);

    match cli.command {
        Commands::Quote {
            chain_id,
            from,
            from_decimals,
            to,
            to_decimals,
            amount,
            gas_price,
            slippage,
            recipient,
            block_number,
            swap_url,
            prices_url,
            no_prices,
        } => {
            if let Some(gas_price) = gas_price {
                app_cfg.gas_price = gas_price;
            }
            if let Some(slippage) = slippage {
                app_cfg.slippage_percentage = slippage.parse()?;
            }
            if let Some(recipient) = recipient {
                app_cfg.recipient = Some(recipient);
            }
            if let Some(swap_url) = swap_url {
                app_cfg.swap_url = swap_url;
            }
            if let Some(prices_url) = prices_url {
                app_cfg.prices_url = prices_url;
            }

            let params = QuoteParams {
                chain_id,
                from,
                from_decimals,
                to,
                to_decimals,
                amount,
                block_number,
                with_prices: !no_prices,
            };
            app::run_quote(&app_cfg, params).await
        }
        Commands::LoadTokens { file, database } => {
            if let Some(database) = database {
                app_cfg.database_path = database;
            }
            app::run_load_tokens(&app_cfg, &file)
        }
    }
}
