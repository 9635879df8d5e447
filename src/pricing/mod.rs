//! 价格换算核心
//!
//! 纯函数，无共享状态，可在任意请求线程中并发调用

pub mod aggregator;
pub mod currency_converter;
pub mod error;
pub mod history;
pub mod rate_card;
pub mod unit_converter;

pub use aggregator::{percent_change, ChangeBasis, PriceAggregator};
pub use currency_converter::CurrencyConverter;
pub use error::{ConversionError, ConversionResult};
pub use history::HistorySeriesBuilder;
pub use rate_card::RateCardBuilder;
pub use unit_converter::{UnitConverter, TROY_OUNCE_GRAMS};
