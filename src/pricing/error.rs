use rust_decimal::Decimal;
use thiserror::Error;

/// 单次换算失败，只影响对应的那一个数值
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 参考单位克数 <= 0
    #[error("Invalid reference unit: {grams} g")]
    InvalidUnit { grams: Decimal },

    /// 汇率 <= 0
    #[error("Invalid exchange rate: {rate}")]
    InvalidRate { rate: Decimal },

    /// 存储价格 <= 0
    #[error("Invalid stored price: {price}")]
    InvalidPrice { price: Decimal },

    /// 十进制运算溢出
    #[error("Decimal overflow in {operation}")]
    Overflow { operation: &'static str },
}

pub type ConversionResult<T> = Result<T, ConversionError>;
