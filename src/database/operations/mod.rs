pub mod price_operations;
pub mod system_operations;

pub use price_operations::*;
pub use system_operations::*;
