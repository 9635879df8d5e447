use crate::config::PricingConfig;
use crate::database::PriceRecordSource;
use crate::pricing::{HistorySeriesBuilder, PriceAggregator, RateCardBuilder};
use crate::types::{Currency, Metal, PriceDashboard, RateCard, RawPriceRecord};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, warn};

/// 读侧价格服务：每次请求重新读取并计算，不做缓存
pub struct PriceService {
    source: Arc<dyn PriceRecordSource>,
    aggregator: PriceAggregator,
    history: HistorySeriesBuilder,
    /// 单次读取的记录条数，至少 2 条以便取到上一条记录
    record_limit: i64,
}

impl PriceService {
    pub fn new(source: Arc<dyn PriceRecordSource>, pricing: &PricingConfig) -> Result<Self> {
        let history = HistorySeriesBuilder::new(pricing.history_window);
        let record_limit = i64::try_from(history.window_size().max(2))?;

        Ok(Self {
            source,
            aggregator: PriceAggregator::new(pricing.change_basis()?),
            history,
            record_limit,
        })
    }

    /// 获取首页价格数据：当前报价 + 历史序列
    pub async fn get_dashboard(&self) -> Result<PriceDashboard> {
        self.get_dashboard_at(Utc::now()).await
    }

    /// 只读取一次存储：最新记录取自同一批记录中时间最晚的一条
    pub async fn get_dashboard_at(&self, now: DateTime<Utc>) -> Result<PriceDashboard> {
        let recent = self.source.recent_price_records(self.record_limit).await?;
        let latest = recent.iter().max_by_key(|record| record.created_at);

        if latest.is_none() {
            warn!("⚠️ 暂无价格记录，使用默认价格");
        }

        let resolved = PriceAggregator::resolve_latest(latest, now);
        let previous = latest.and_then(|latest| Self::previous_record(latest, &recent));

        let quotes = self.aggregator.aggregate(latest, previous, now);
        let history = self.history.build(&recent, &resolved, now);

        debug!(
            "价格数据已生成: 历史点数 {}, 记录时间 {}",
            history.len(),
            resolved.created_at
        );

        Ok(PriceDashboard::new(quotes, history))
    }

    /// 获取指定金属、币种、克数的成色价格表
    pub async fn get_rate_card(
        &self,
        metal: Metal,
        currency: Currency,
        unit_grams: Decimal,
    ) -> Result<RateCard> {
        let latest = self.source.latest_price_record().await?;
        let record = PriceAggregator::resolve_latest(latest.as_ref(), Utc::now());
        Ok(RateCardBuilder::build(&record, metal, currency, unit_grams)?)
    }

    pub async fn check_storage(&self) -> Result<()> {
        self.source.ping().await
    }

    /// 最新记录之前的一条
    fn previous_record<'a>(
        latest: &RawPriceRecord,
        recent: &'a [RawPriceRecord],
    ) -> Option<&'a RawPriceRecord> {
        recent
            .iter()
            .filter(|record| record.created_at < latest.created_at)
            .max_by_key(|record| record.created_at)
    }
}
