pub mod operations;

use crate::types::RawPriceRecord;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

pub use operations::*;

/// 价格记录的只读来源
#[async_trait]
pub trait PriceRecordSource: Send + Sync {
    /// 最新一条记录，无数据时为 `None`
    async fn latest_price_record(&self) -> Result<Option<RawPriceRecord>>;

    /// 最近 `limit` 条记录，顺序不作保证
    async fn recent_price_records(&self, limit: i64) -> Result<Vec<RawPriceRecord>>;

    /// 存储连通性检查
    async fn ping(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create_tables(&self) -> Result<()> {
        SystemOperations::create_tables(&self.pool).await
    }
}

#[async_trait]
impl PriceRecordSource for Database {
    async fn latest_price_record(&self) -> Result<Option<RawPriceRecord>> {
        PriceOperations::get_latest_price_record(&self.pool).await
    }

    async fn recent_price_records(&self, limit: i64) -> Result<Vec<RawPriceRecord>> {
        PriceOperations::get_recent_price_records(&self.pool, limit).await
    }

    async fn ping(&self) -> Result<()> {
        SystemOperations::ping(&self.pool).await
    }
}
