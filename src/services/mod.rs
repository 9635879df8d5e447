pub mod api_service;
pub mod price_service;

pub use api_service::ApiService;
pub use price_service::PriceService;
