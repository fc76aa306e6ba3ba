use clap::Parser;
use fraud_ledger::cli::{self, Cli, Commands};
use fraud_ledger::config::{Config, LogFormat};
use fraud_ledger::middleware::{cors_layer, RequestLogging};
use fraud_ledger::{create_app_with_logging, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Config => cli::handle_config_validate(&config),
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config);
    let logging = RequestLogging {
        log_body: config.log_request_body,
    };

    let app = create_app_with_logging(state, logging).layer(cors_layer(&config.cors_allowed_origins));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        list_max_limit = ?config.list_max_limit,
        "Transaction API listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
