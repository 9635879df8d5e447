// RawPriceRecord, Metal, Currency
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 管理员录入的原始价格记录（INR计价）
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct RawPriceRecord {
    /// 黄金价格，INR / 10g
    pub gold_price_per_10g: Decimal,
    /// 白银价格，INR / 1kg
    pub silver_price_per_1kg: Decimal,
    /// 1 INR 可兑换的 USD
    pub inr_to_usd: Decimal,
    /// 1 INR 可兑换的 EUR
    pub inr_to_eur: Decimal,
    pub created_at: DateTime<Utc>,
}

impl RawPriceRecord {
    pub const FALLBACK_GOLD_PER_10G: Decimal = dec!(72000);
    pub const FALLBACK_SILVER_PER_1KG: Decimal = dec!(85000);
    pub const FALLBACK_INR_TO_USD: Decimal = dec!(0.012);
    pub const FALLBACK_INR_TO_EUR: Decimal = dec!(0.011);

    /// 尚无任何记录时使用的默认价格
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            gold_price_per_10g: Self::FALLBACK_GOLD_PER_10G,
            silver_price_per_1kg: Self::FALLBACK_SILVER_PER_1KG,
            inr_to_usd: Self::FALLBACK_INR_TO_USD,
            inr_to_eur: Self::FALLBACK_INR_TO_EUR,
            created_at: now,
        }
    }

    /// 按金属取存储价格（参考单位见 `Metal::reference_unit_grams`）
    pub fn stored_price(&self, metal: Metal) -> Decimal {
        match metal {
            Metal::Gold => self.gold_price_per_10g,
            Metal::Silver => self.silver_price_per_1kg,
        }
    }

    /// INR -> 目标币种的乘数，INR 本身为 1
    pub fn rate_for(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Inr => Decimal::ONE,
            Currency::Usd => self.inr_to_usd,
            Currency::Eur => self.inr_to_eur,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    pub const ALL: [Metal; 2] = [Metal::Gold, Metal::Silver];

    /// 存储价格对应的克数：黄金 10g，白银 1000g
    pub fn reference_unit_grams(self) -> Decimal {
        match self {
            Metal::Gold => dec!(10),
            Metal::Silver => dec!(1000),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
        }
    }
}

impl std::str::FromStr for Metal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" => Ok(Metal::Gold),
            "silver" => Ok(Metal::Silver),
            other => Err(format!("unknown metal: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Inr, Currency::Usd, Currency::Eur];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(format!("unknown currency: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_record_values() {
        let now = Utc::now();
        let record = RawPriceRecord::fallback(now);

        assert_eq!(record.gold_price_per_10g, dec!(72000));
        assert_eq!(record.silver_price_per_1kg, dec!(85000));
        assert_eq!(record.inr_to_usd, dec!(0.012));
        assert_eq!(record.inr_to_eur, dec!(0.011));
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_inr_rate_is_identity() {
        let record = RawPriceRecord::fallback(Utc::now());
        assert_eq!(record.rate_for(Currency::Inr), Decimal::ONE);
        assert_eq!(record.rate_for(Currency::Usd), dec!(0.012));
    }

    #[test]
    fn test_parse_metal_and_currency() {
        assert_eq!("Gold".parse::<Metal>(), Ok(Metal::Gold));
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::Usd));
        assert!("platinum".parse::<Metal>().is_err());
        assert!("GBP".parse::<Currency>().is_err());
    }
}
