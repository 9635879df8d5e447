use anyhow::Result;
use bullion_monitor::config::Config;
use bullion_monitor::services::ApiService;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("🔧 启动价格API服务...");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    let api_service = ApiService::new(config).await?;
    api_service.start().await?;

    Ok(())
}
