// NormalizedQuote, QuoteEntry, MetalQuotes, HistoryPoint, HistorySeries, PriceDashboard, RateCard
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Currency, Metal, Purity};

/// 单个金属在单个币种下的每盎司报价
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuote {
    pub metal: Metal,
    pub currency: Currency,
    pub price_per_ounce: Decimal,
    pub change_percent: Decimal,
}

/// 对外输出的报价，`None` 表示该数值不可用
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteEntry {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub change_percent: Option<Decimal>,
}

impl QuoteEntry {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        self.price.is_some()
    }
}

impl From<&NormalizedQuote> for QuoteEntry {
    fn from(quote: &NormalizedQuote) -> Self {
        Self {
            price: Some(quote.price_per_ounce),
            change_percent: Some(quote.change_percent),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetalQuotes {
    #[serde(rename = "INR")]
    pub inr: QuoteEntry,
    #[serde(rename = "USD")]
    pub usd: QuoteEntry,
    #[serde(rename = "EUR")]
    pub eur: QuoteEntry,
}

impl MetalQuotes {
    pub fn get(&self, currency: Currency) -> &QuoteEntry {
        match currency {
            Currency::Inr => &self.inr,
            Currency::Usd => &self.usd,
            Currency::Eur => &self.eur,
        }
    }

    pub fn get_mut(&mut self, currency: Currency) -> &mut QuoteEntry {
        match currency {
            Currency::Inr => &mut self.inr,
            Currency::Usd => &mut self.usd,
            Currency::Eur => &mut self.eur,
        }
    }
}

/// 当前报价：金属 × 币种
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSet {
    pub gold: MetalQuotes,
    pub silver: MetalQuotes,
}

impl QuoteSet {
    pub fn metal(&self, metal: Metal) -> &MetalQuotes {
        match metal {
            Metal::Gold => &self.gold,
            Metal::Silver => &self.silver,
        }
    }

    pub fn metal_mut(&mut self, metal: Metal) -> &mut MetalQuotes {
        match metal {
            Metal::Gold => &mut self.gold,
            Metal::Silver => &mut self.silver,
        }
    }
}

/// 图表数据点，价格均为每盎司
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// unix 秒
    pub timestamp: i64,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub gold: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub silver: Option<Decimal>,
}

/// 三个币种的历史序列，长度一致且按下标对齐
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySeries {
    #[serde(rename = "INR")]
    pub inr: Vec<HistoryPoint>,
    #[serde(rename = "USD")]
    pub usd: Vec<HistoryPoint>,
    #[serde(rename = "EUR")]
    pub eur: Vec<HistoryPoint>,
}

impl HistorySeries {
    pub fn series(&self, currency: Currency) -> &[HistoryPoint] {
        match currency {
            Currency::Inr => &self.inr,
            Currency::Usd => &self.usd,
            Currency::Eur => &self.eur,
        }
    }

    pub fn series_mut(&mut self, currency: Currency) -> &mut Vec<HistoryPoint> {
        match currency {
            Currency::Inr => &mut self.inr,
            Currency::Usd => &mut self.usd,
            Currency::Eur => &mut self.eur,
        }
    }

    pub fn len(&self) -> usize {
        self.inr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inr.is_empty()
    }
}

/// `GET /api/prices` 的响应体，字段名由前端依赖，不可更改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDashboard {
    pub gold: MetalQuotes,
    pub silver: MetalQuotes,
    pub history: HistorySeries,
}

impl PriceDashboard {
    pub fn new(quotes: QuoteSet, history: HistorySeries) -> Self {
        Self {
            gold: quotes.gold,
            silver: quotes.silver,
            history,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurityRate {
    pub purity: Purity,
    #[serde(with = "rust_decimal::serde::float")]
    pub fraction: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

/// 指定币种、指定克数下各成色的价格表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub metal: Metal,
    pub currency: Currency,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_grams: Decimal,
    pub as_of: DateTime<Utc>,
    pub rates: Vec<PurityRate>,
}
