pub mod api;
pub mod config;
pub mod database;
pub mod pricing;
pub mod services;
pub mod types;

pub use config::Config;
pub use database::Database;
pub use types::*;
