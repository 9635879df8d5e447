use crate::{
    api::{create_router, ApiState},
    config::Config,
    database::Database,
    services::PriceService,
};
use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

pub struct ApiService {
    config: Config,
    price_service: Arc<PriceService>,
}

impl ApiService {
    pub async fn new(config: Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        let database = Database::new(pool);
        database.create_tables().await?;
        info!("Database connected and tables created");

        let price_service = Arc::new(PriceService::new(Arc::new(database), &config.pricing)?);

        Ok(Self {
            config,
            price_service,
        })
    }

    pub async fn start(&self) -> Result<()> {
        info!("🚀 启动API服务...");

        let api_state = ApiState::new(Arc::clone(&self.price_service));

        let app = create_router(api_state);
        let address = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = tokio::net::TcpListener::bind(&address).await?;

        info!("API Server starting on {}", address);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
