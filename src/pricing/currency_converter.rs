//! 汇率换算
//!
//! 存储的汇率表示 1 INR 可兑换的目标币种数量，换算一律为乘法

use rust_decimal::Decimal;

use super::error::{ConversionError, ConversionResult};

pub struct CurrencyConverter;

impl CurrencyConverter {
    pub fn convert(amount_in_base: Decimal, rate: Decimal) -> ConversionResult<Decimal> {
        Self::check_rate(rate)?;
        amount_in_base
            .checked_mul(rate)
            .ok_or(ConversionError::Overflow { operation: "convert" })
    }

    /// 逐个换算，保持长度和顺序
    pub fn convert_series(amounts: &[Decimal], rate: Decimal) -> ConversionResult<Vec<Decimal>> {
        Self::check_rate(rate)?;
        amounts
            .iter()
            .map(|amount| Self::convert(*amount, rate))
            .collect()
    }

    fn check_rate(rate: Decimal) -> ConversionResult<()> {
        if rate <= Decimal::ZERO {
            return Err(ConversionError::InvalidRate { rate });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identity_rate() {
        for amount in [dec!(0), dec!(1), dec!(223945.03296), dec!(-5.5)] {
            assert_eq!(CurrencyConverter::convert(amount, Decimal::ONE), Ok(amount));
        }
    }

    #[test]
    fn test_convert_multiplies() {
        assert_eq!(
            CurrencyConverter::convert(dec!(2643.795528), dec!(0.012)),
            Ok(dec!(31.725546336))
        );
    }

    #[test]
    fn test_invalid_rate() {
        assert_eq!(
            CurrencyConverter::convert(dec!(100), Decimal::ZERO),
            Err(ConversionError::InvalidRate { rate: Decimal::ZERO })
        );
        assert!(CurrencyConverter::convert(dec!(100), dec!(-0.01)).is_err());
        assert!(CurrencyConverter::convert_series(&[dec!(1)], Decimal::ZERO).is_err());
    }

    #[test]
    fn test_convert_overflow() {
        assert_eq!(
            CurrencyConverter::convert(Decimal::MAX, dec!(1.5)),
            Err(ConversionError::Overflow { operation: "convert" })
        );
        assert!(CurrencyConverter::convert_series(&[dec!(1), Decimal::MAX], dec!(2)).is_err());
    }

    #[test]
    fn test_convert_series_preserves_order_and_length() {
        let amounts = vec![dec!(3), dec!(1), dec!(2)];
        let converted = CurrencyConverter::convert_series(&amounts, dec!(2)).unwrap();
        assert_eq!(converted, vec![dec!(6), dec!(2), dec!(4)]);

        let empty = CurrencyConverter::convert_series(&[], dec!(2)).unwrap();
        assert!(empty.is_empty());
    }
}
