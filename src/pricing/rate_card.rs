//! 成色价格表：指定币种、指定克数下各成色的价格

use rust_decimal::Decimal;
use tracing::warn;

use super::currency_converter::CurrencyConverter;
use super::error::{ConversionError, ConversionResult};
use super::unit_converter::UnitConverter;
use crate::types::{Currency, Metal, Purity, PurityRate, RateCard, RawPriceRecord};

/// 展示用小数位
const DISPLAY_DP: u32 = 2;

pub struct RateCardBuilder;

impl RateCardBuilder {
    /// `unit_grams` 必须为正，且换算结果不能溢出；存储价格或汇率无效时各行价格为空
    pub fn build(
        record: &RawPriceRecord,
        metal: Metal,
        currency: Currency,
        unit_grams: Decimal,
    ) -> ConversionResult<RateCard> {
        if unit_grams <= Decimal::ZERO {
            return Err(ConversionError::InvalidUnit { grams: unit_grams });
        }

        let tiers = Purity::tiers_for(metal);
        let prices = match Self::base_price_per_gram(record, metal) {
            Ok(per_gram) => Self::tier_prices(record, currency, per_gram, unit_grams, tiers)?,
            Err(e) => {
                warn!("⚠️ {} 成色价格表不可用: {}", metal.as_str(), e);
                vec![None; tiers.len()]
            }
        };

        let rates = tiers
            .iter()
            .zip(prices)
            .map(|(purity, price)| PurityRate {
                purity: *purity,
                fraction: purity.fraction(),
                price,
            })
            .collect();

        Ok(RateCard {
            metal,
            currency,
            unit_grams,
            as_of: record.created_at,
            rates,
        })
    }

    fn base_price_per_gram(record: &RawPriceRecord, metal: Metal) -> ConversionResult<Decimal> {
        UnitConverter::price_per_gram(UnitConverter::ounce_price_inr(record, metal)?)
    }

    /// 按克数缩放时的溢出直接返回错误，汇率无效时各行为空
    fn tier_prices(
        record: &RawPriceRecord,
        currency: Currency,
        per_gram: Decimal,
        unit_grams: Decimal,
        tiers: &[Purity],
    ) -> ConversionResult<Vec<Option<Decimal>>> {
        let inr_prices = tiers
            .iter()
            .map(|purity| {
                let pure = UnitConverter::apply_purity(per_gram, purity.fraction())?;
                UnitConverter::scale_to_unit(pure, unit_grams)
            })
            .collect::<ConversionResult<Vec<Decimal>>>()?;

        match CurrencyConverter::convert_series(&inr_prices, record.rate_for(currency)) {
            Ok(converted) => Ok(converted
                .into_iter()
                .map(|price| Some(price.round_dp(DISPLAY_DP)))
                .collect()),
            Err(e @ ConversionError::Overflow { .. }) => Err(e),
            Err(e) => {
                warn!("⚠️ {} 成色价格表不可用: {}", currency.code(), e);
                Ok(vec![None; tiers.len()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gold_card_per_10g_inr() {
        let record = RawPriceRecord::fallback(Utc::now());
        let card = RateCardBuilder::build(&record, Metal::Gold, Currency::Inr, dec!(10)).unwrap();

        let prices: Vec<Option<Decimal>> = card.rates.iter().map(|r| r.price).collect();
        assert_eq!(
            prices,
            vec![Some(dec!(72000)), Some(dec!(65952)), Some(dec!(63000)), Some(dec!(54000))]
        );
        assert_eq!(card.rates[1].purity, Purity::K22);
    }

    #[test]
    fn test_silver_card_per_gram_usd() {
        let record = RawPriceRecord::fallback(Utc::now());
        let card = RateCardBuilder::build(&record, Metal::Silver, Currency::Usd, dec!(1)).unwrap();

        assert_eq!(card.rates.len(), 2);
        // 85 INR/g * 0.012
        assert_eq!(card.rates[0].price, Some(dec!(1.02)));
        // 85 * 0.925 * 0.012 = 0.9435
        assert_eq!(card.rates[1].price, Some(dec!(0.94)));
    }

    #[test]
    fn test_rejects_non_positive_unit() {
        let record = RawPriceRecord::fallback(Utc::now());
        assert_eq!(
            RateCardBuilder::build(&record, Metal::Gold, Currency::Inr, Decimal::ZERO),
            Err(ConversionError::InvalidUnit { grams: Decimal::ZERO })
        );
    }

    #[test]
    fn test_oversized_unit_is_overflow_error() {
        let record = RawPriceRecord::fallback(Utc::now());
        let result = RateCardBuilder::build(
            &record,
            Metal::Gold,
            Currency::Inr,
            dec!(100000000000000000000000000),
        );
        assert_eq!(
            result,
            Err(ConversionError::Overflow {
                operation: "scale_to_unit"
            })
        );
    }

    #[test]
    fn test_overflowing_stored_price_nulls_rows() {
        let mut record = RawPriceRecord::fallback(Utc::now());
        record.gold_price_per_10g = dec!(30000000000000000000000000000);
        let card = RateCardBuilder::build(&record, Metal::Gold, Currency::Inr, dec!(1)).unwrap();

        assert!(card.rates.iter().all(|r| r.price.is_none()));
    }

    #[test]
    fn test_invalid_rate_nulls_rows() {
        let mut record = RawPriceRecord::fallback(Utc::now());
        record.inr_to_usd = Decimal::ZERO;
        let card = RateCardBuilder::build(&record, Metal::Gold, Currency::Usd, dec!(1)).unwrap();

        assert_eq!(card.rates.len(), 4);
        assert!(card.rates.iter().all(|r| r.price.is_none()));
    }
}
