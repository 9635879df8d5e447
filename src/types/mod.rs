pub mod price_record;
pub mod purity;
pub mod quote;

pub use price_record::*;
pub use purity::*;
pub use quote::*;
