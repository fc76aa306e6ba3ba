use clap::{Parser, Subcommand};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "fraud-ledger")]
#[command(about = "Fraud Ledger - transaction intake, risk scoring and query API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print and validate the resolved configuration
    Config,
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Validating configuration...");

    println!("Configuration:");
    println!("  Listen Address: {}", config.socket_addr());
    println!(
        "  List Max Limit: {}",
        config
            .list_max_limit
            .map(|limit| limit.to_string())
            .unwrap_or_else(|| "uncapped".to_string())
    );
    println!(
        "  CORS Origins: {}",
        if config.cors_allowed_origins.is_empty() {
            "* (permissive)".to_string()
        } else {
            config.cors_allowed_origins.join(", ")
        }
    );
    println!("  Log Format: {:?}", config.log_format);
    println!("  Log Request Body: {}", config.log_request_body);

    if config.server_port == 0 {
        tracing::warn!("SERVER_PORT is 0; the OS will pick an ephemeral port");
    }

    tracing::info!("Configuration is valid");
    println!("✓ Configuration is valid");

    Ok(())
}
