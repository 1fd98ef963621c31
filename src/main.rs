use engagement_service::infrastructure::telemetry;
use engagement_service::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init(&config)?;
    config.print_summary();

    server::run(config).await
}
