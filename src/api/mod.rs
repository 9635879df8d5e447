pub mod handlers;
pub mod routes;

pub use routes::create_router;

use crate::services::PriceService;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiState {
    pub price_service: Arc<PriceService>,
}

impl ApiState {
    pub fn new(price_service: Arc<PriceService>) -> Self {
        Self { price_service }
    }
}
