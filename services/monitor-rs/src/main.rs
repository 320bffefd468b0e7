use dotenvy::dotenv;
use sales_monitor::{broker, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    info!("Sales monitor up, queue '{}'", config.queue);

    let connection = broker::connect(&config).await?;
    let channel = broker::open_channel(&connection, &config.queue).await?;
    broker::consume(&channel, &config.queue).await?;

    Ok(())
}
