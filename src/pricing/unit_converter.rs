//! 质量单位与成色换算
//!
//! 所有每盎司价格都从这里的常量推导，不要在别处重复 31.1034768

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{ConversionError, ConversionResult};
use crate::types::{Metal, RawPriceRecord};

/// 1 金衡盎司 = 31.1034768 g
pub const TROY_OUNCE_GRAMS: Decimal = dec!(31.1034768);

/// 单位换算工具
pub struct UnitConverter;

impl UnitConverter {
    /// 参考单位价格 -> 每盎司价格
    ///
    /// `(price_per_reference_unit / reference_unit_grams) * 31.1034768`
    pub fn price_per_ounce(
        price_per_reference_unit: Decimal,
        reference_unit_grams: Decimal,
    ) -> ConversionResult<Decimal> {
        if reference_unit_grams <= Decimal::ZERO {
            return Err(ConversionError::InvalidUnit {
                grams: reference_unit_grams,
            });
        }
        price_per_reference_unit
            .checked_div(reference_unit_grams)
            .and_then(|per_gram| per_gram.checked_mul(TROY_OUNCE_GRAMS))
            .ok_or(ConversionError::Overflow {
                operation: "price_per_ounce",
            })
    }

    /// 每盎司价格 -> 每克价格
    pub fn price_per_gram(price_per_ounce: Decimal) -> ConversionResult<Decimal> {
        price_per_ounce
            .checked_div(TROY_OUNCE_GRAMS)
            .ok_or(ConversionError::Overflow {
                operation: "price_per_gram",
            })
    }

    pub fn apply_purity(
        base_price_per_gram: Decimal,
        purity_fraction: Decimal,
    ) -> ConversionResult<Decimal> {
        base_price_per_gram
            .checked_mul(purity_fraction)
            .ok_or(ConversionError::Overflow {
                operation: "apply_purity",
            })
    }

    /// 每克价格 -> 指定克数（1g、10g、100g、1kg...）的价格
    pub fn scale_to_unit(
        price_per_gram: Decimal,
        target_unit_grams: Decimal,
    ) -> ConversionResult<Decimal> {
        price_per_gram
            .checked_mul(target_unit_grams)
            .ok_or(ConversionError::Overflow {
                operation: "scale_to_unit",
            })
    }

    /// 记录中某金属的 INR 每盎司价格，存储价格必须为正
    pub fn ounce_price_inr(record: &RawPriceRecord, metal: Metal) -> ConversionResult<Decimal> {
        let stored = record.stored_price(metal);
        if stored <= Decimal::ZERO {
            return Err(ConversionError::InvalidPrice { price: stored });
        }
        Self::price_per_ounce(stored, metal.reference_unit_grams())
    }
}
