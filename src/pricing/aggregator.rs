//! 当前报价聚合
//!
//! 从最新一条记录推导 金属 × 币种 的每盎司价格。单个数值换算失败只置空该数值，
//! 不影响其他金属和币种。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use super::currency_converter::CurrencyConverter;
use super::error::ConversionResult;
use super::unit_converter::UnitConverter;
use crate::types::{Currency, Metal, NormalizedQuote, QuoteEntry, QuoteSet, RawPriceRecord};

/// `change_percent` 的比较基准
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeBasis {
    /// 保留字段，恒为 0
    #[default]
    Reserved,
    /// 与最新记录之前的一条记录比较
    PreviousRecord,
}

impl FromStr for ChangeBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "reserved" => Ok(ChangeBasis::Reserved),
            "previous" | "previous_record" => Ok(ChangeBasis::PreviousRecord),
            other => Err(format!("unknown change basis: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceAggregator {
    change_basis: ChangeBasis,
}

impl PriceAggregator {
    pub fn new(change_basis: ChangeBasis) -> Self {
        Self { change_basis }
    }

    pub fn change_basis(&self) -> ChangeBasis {
        self.change_basis
    }

    /// 没有记录时返回默认价格记录
    pub fn resolve_latest(latest: Option<&RawPriceRecord>, now: DateTime<Utc>) -> RawPriceRecord {
        match latest {
            Some(record) => record.clone(),
            None => RawPriceRecord::fallback(now),
        }
    }

    /// 构建完整报价；`previous` 仅在 `ChangeBasis::PreviousRecord` 下使用
    pub fn aggregate(
        &self,
        latest: Option<&RawPriceRecord>,
        previous: Option<&RawPriceRecord>,
        now: DateTime<Utc>,
    ) -> QuoteSet {
        let record = Self::resolve_latest(latest, now);
        let mut quotes = QuoteSet::default();

        for metal in Metal::ALL {
            let change = self.change_percent(&record, previous, metal);
            for currency in Currency::ALL {
                let entry = match Self::quote(&record, metal, currency, change) {
                    Ok(quote) => QuoteEntry::from(&quote),
                    Err(e) => {
                        let (metal, currency) = (metal.as_str(), currency.code());
                        warn!("⚠️ {} {} 报价不可用: {}", metal, currency, e);
                        QuoteEntry::unavailable()
                    }
                };
                *quotes.metal_mut(metal).get_mut(currency) = entry;
            }
        }

        quotes
    }

    /// 单个 金属 × 币种 的每盎司报价
    pub fn quote(
        record: &RawPriceRecord,
        metal: Metal,
        currency: Currency,
        change_percent: Decimal,
    ) -> ConversionResult<NormalizedQuote> {
        let ounce_inr = UnitConverter::ounce_price_inr(record, metal)?;
        let rate = record.rate_for(currency);
        let price_per_ounce = CurrencyConverter::convert(ounce_inr, rate)?;

        Ok(NormalizedQuote {
            metal,
            currency,
            price_per_ounce,
            change_percent,
        })
    }

    /// 各币种使用同一汇率乘数，百分比与币种无关，按 INR 计算即可
    fn change_percent(
        &self,
        record: &RawPriceRecord,
        previous: Option<&RawPriceRecord>,
        metal: Metal,
    ) -> Decimal {
        let previous = match (self.change_basis, previous) {
            (ChangeBasis::PreviousRecord, Some(previous)) => previous,
            _ => return Decimal::ZERO,
        };

        let current = UnitConverter::ounce_price_inr(record, metal);
        let prior = UnitConverter::ounce_price_inr(previous, metal);
        match (current, prior) {
            (Ok(current), Ok(prior)) => {
                percent_change(current, prior).unwrap_or(Decimal::ZERO)
            }
            _ => Decimal::ZERO,
        }
    }
}

/// 计算价格变化百分比
pub fn percent_change(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous <= Decimal::ZERO || current < Decimal::ZERO {
        return None;
    }
    current
        .checked_sub(previous)?
        .checked_div(previous)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn record(gold: Decimal, silver: Decimal) -> RawPriceRecord {
        RawPriceRecord {
            gold_price_per_10g: gold,
            silver_price_per_1kg: silver,
            inr_to_usd: dec!(0.012),
            inr_to_eur: dec!(0.011),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_aggregate_default_record_values() {
        let latest = record(dec!(72000), dec!(85000));
        let quotes = PriceAggregator::default().aggregate(Some(&latest), None, Utc::now());

        assert_eq!(quotes.gold.inr.price, Some(dec!(223945.03296)));
        assert_eq!(quotes.gold.usd.price, Some(dec!(2687.34039552)));
        assert_eq!(quotes.gold.eur.price, Some(dec!(2463.39536256)));
        assert_eq!(quotes.silver.inr.price, Some(dec!(2643.795528)));
        assert_eq!(quotes.silver.usd.price, Some(dec!(31.725546336)));
        assert_eq!(quotes.silver.eur.price, Some(dec!(29.081750808)));
    }

    #[test]
    fn test_missing_record_uses_fallback() {
        let now = Utc::now();
        let aggregator = PriceAggregator::default();
        let from_none = aggregator.aggregate(None, None, now);
        let from_fallback = aggregator.aggregate(Some(&RawPriceRecord::fallback(now)), None, now);

        assert_eq!(from_none, from_fallback);
        assert!(from_none.gold.usd.is_available());
    }

    #[test]
    fn test_zero_gold_price_only_affects_gold() {
        let latest = record(Decimal::ZERO, dec!(85000));
        let quotes = PriceAggregator::default().aggregate(Some(&latest), None, Utc::now());

        for currency in Currency::ALL {
            assert_eq!(quotes.gold.get(currency), &QuoteEntry::unavailable());
            assert!(quotes.silver.get(currency).is_available());
        }
    }

    #[test]
    fn test_overflowing_gold_price_only_affects_gold() {
        let latest = record(dec!(30000000000000000000000000000), dec!(85000));
        let quotes = PriceAggregator::default().aggregate(Some(&latest), None, Utc::now());

        for currency in Currency::ALL {
            assert_eq!(quotes.gold.get(currency), &QuoteEntry::unavailable());
        }
        assert_eq!(quotes.silver.inr.price, Some(dec!(2643.795528)));
        assert_eq!(quotes.silver.usd.price, Some(dec!(31.725546336)));
        assert!(quotes.silver.eur.is_available());
    }

    #[test]
    fn test_invalid_rate_only_affects_that_currency() {
        let mut latest = record(dec!(72000), dec!(85000));
        latest.inr_to_eur = Decimal::ZERO;
        let quotes = PriceAggregator::default().aggregate(Some(&latest), None, Utc::now());

        for metal in Metal::ALL {
            let metal_quotes = quotes.metal(metal);
            assert!(metal_quotes.inr.is_available());
            assert!(metal_quotes.usd.is_available());
            assert!(!metal_quotes.eur.is_available());
        }
    }

    #[test]
    fn test_reserved_change_is_zero() {
        let latest = record(dec!(80000), dec!(90000));
        let previous = record(dec!(72000), dec!(85000));
        let quotes = PriceAggregator::new(ChangeBasis::Reserved).aggregate(
            Some(&latest),
            Some(&previous),
            Utc::now(),
        );

        assert_eq!(quotes.gold.inr.change_percent, Some(Decimal::ZERO));
        assert_eq!(quotes.silver.usd.change_percent, Some(Decimal::ZERO));
    }

    #[test]
    fn test_previous_record_change() {
        let latest = record(dec!(79200), dec!(85000));
        let previous = record(dec!(72000), dec!(85000));
        let quotes = PriceAggregator::new(ChangeBasis::PreviousRecord).aggregate(
            Some(&latest),
            Some(&previous),
            Utc::now(),
        );

        for currency in Currency::ALL {
            assert_eq!(quotes.gold.get(currency).change_percent, Some(dec!(10)));
            assert_eq!(quotes.silver.get(currency).change_percent, Some(Decimal::ZERO));
        }
    }

    #[test]
    fn test_previous_record_change_without_previous() {
        let latest = record(dec!(79200), dec!(85000));
        let quotes = PriceAggregator::new(ChangeBasis::PreviousRecord).aggregate(
            Some(&latest),
            None,
            Utc::now(),
        );
        assert_eq!(quotes.gold.inr.change_percent, Some(Decimal::ZERO));
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(dec!(110), dec!(100)), Some(dec!(10)));
        assert_eq!(percent_change(dec!(90), dec!(100)), Some(dec!(-10)));
        assert_eq!(percent_change(dec!(90), Decimal::ZERO), None);
        assert_eq!(percent_change(Decimal::MAX, dec!(0.0000000001)), None);
    }

    #[test]
    fn test_parse_change_basis() {
        assert_eq!("none".parse::<ChangeBasis>(), Ok(ChangeBasis::Reserved));
        assert_eq!("Previous".parse::<ChangeBasis>(), Ok(ChangeBasis::PreviousRecord));
        assert!("24h".parse::<ChangeBasis>().is_err());
    }
}
