pub mod price_handlers;
pub mod status_handlers;

pub use price_handlers::*;
pub use status_handlers::*;
