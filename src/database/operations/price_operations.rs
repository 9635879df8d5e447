use crate::types::RawPriceRecord;
use anyhow::Result;
use sqlx::PgPool;

pub struct PriceOperations;

impl PriceOperations {
    /// 获取最新价格记录
    pub async fn get_latest_price_record(pool: &PgPool) -> Result<Option<RawPriceRecord>> {
        let record = sqlx::query_as::<_, RawPriceRecord>(
            r#"
            SELECT gold_price_per_10g, silver_price_per_1kg, inr_to_usd, inr_to_eur, created_at
            FROM price_records
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// 获取最近的价格记录（按时间倒序返回）
    pub async fn get_recent_price_records(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<RawPriceRecord>> {
        let records = sqlx::query_as::<_, RawPriceRecord>(
            r#"
            SELECT gold_price_per_10g, silver_price_per_1kg, inr_to_usd, inr_to_eur, created_at
            FROM price_records
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
