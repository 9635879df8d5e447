//! 历史价格序列
//!
//! 非 INR 序列统一使用最新记录的汇率换算（历史汇率不单独保存）。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use super::currency_converter::CurrencyConverter;
use super::unit_converter::UnitConverter;
use crate::types::{Currency, HistoryPoint, HistorySeries, Metal, RawPriceRecord};

pub struct HistorySeriesBuilder {
    window_size: usize,
}

impl Default for HistorySeriesBuilder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl HistorySeriesBuilder {
    pub const DEFAULT_WINDOW: usize = 24;

    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// 构建三币种历史序列
    ///
    /// # 参数
    /// * `records` - 最近的原始记录，顺序任意
    /// * `latest` - 最新记录（无数据时为默认记录），提供汇率及空序列时的占位点
    /// * `now` - 占位点的时间戳
    pub fn build(
        &self,
        records: &[RawPriceRecord],
        latest: &RawPriceRecord,
        now: DateTime<Utc>,
    ) -> HistorySeries {
        let mut ordered: Vec<&RawPriceRecord> = records.iter().collect();
        ordered.sort_by_key(|record| record.created_at);
        if ordered.len() > self.window_size {
            let excess = ordered.len() - self.window_size;
            ordered.drain(..excess);
        }

        let inr: Vec<HistoryPoint> = if ordered.is_empty() {
            vec![Self::inr_point(latest, now.timestamp())]
        } else {
            ordered
                .iter()
                .map(|record| Self::inr_point(record, record.created_at.timestamp()))
                .collect()
        };

        let mut series = HistorySeries::default();
        for currency in [Currency::Usd, Currency::Eur] {
            let rate = latest.rate_for(currency);
            *series.series_mut(currency) = Self::scale_points(&inr, rate, currency);
        }
        series.inr = inr;
        series
    }

    fn inr_point(record: &RawPriceRecord, timestamp: i64) -> HistoryPoint {
        HistoryPoint {
            timestamp,
            gold: Self::ounce_price_or_none(record, Metal::Gold, timestamp),
            silver: Self::ounce_price_or_none(record, Metal::Silver, timestamp),
        }
    }

    fn ounce_price_or_none(
        record: &RawPriceRecord,
        metal: Metal,
        timestamp: i64,
    ) -> Option<Decimal> {
        match UnitConverter::ounce_price_inr(record, metal) {
            Ok(price) => Some(price),
            Err(e) => {
                let metal = metal.as_str();
                warn!("⚠️ 历史点 {} 的 {} 价格不可用: {}", timestamp, metal, e);
                None
            }
        }
    }

    fn scale_points(inr: &[HistoryPoint], rate: Decimal, currency: Currency) -> Vec<HistoryPoint> {
        let gold: Vec<Option<Decimal>> = inr.iter().map(|point| point.gold).collect();
        let silver: Vec<Option<Decimal>> = inr.iter().map(|point| point.silver).collect();
        let gold = Self::scale_column(&gold, rate, currency);
        let silver = Self::scale_column(&silver, rate, currency);

        inr.iter()
            .zip(gold.into_iter().zip(silver))
            .map(|(point, (gold, silver))| HistoryPoint {
                timestamp: point.timestamp,
                gold,
                silver,
            })
            .collect()
    }

    /// 逐点换算一列数值，缺失或换算失败的位置为空
    fn scale_column(
        values: &[Option<Decimal>],
        rate: Decimal,
        currency: Currency,
    ) -> Vec<Option<Decimal>> {
        values
            .iter()
            .map(|value| {
                let amount = (*value)?;
                match CurrencyConverter::convert(amount, rate) {
                    Ok(converted) => Some(converted),
                    Err(e) => {
                        warn!("⚠️ {} 历史点不可用: {}", currency.code(), e);
                        None
                    }
                }
            })
            .collect()
    }
}
