use anyhow::Context;
use books_demo::{cli_args::CliArgs, config::ServerConfig, server::Server, telemetry::Telemetry};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,books_demo=trace,tower_http=trace");
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!(config_file = %args.config_file, "Starting ...");

    let mut config = ServerConfig::from_config_file(&args.config_file)
        .await
        .with_context(|| format!("Failed to load {}", args.config_file))?;

    if let Some(socket_address) = args.socket_address {
        config.socket_address = socket_address;
    }

    let telemetry = Telemetry::install()?;

    Server::new(config, telemetry).run().await?;

    Ok(())
}
