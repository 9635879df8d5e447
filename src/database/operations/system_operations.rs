use anyhow::Result;
use sqlx::PgPool;

pub struct SystemOperations;

impl SystemOperations {
    pub async fn create_tables(pool: &PgPool) -> Result<()> {
        // Create price_records table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS price_records (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                gold_price_per_10g DECIMAL(18, 4) NOT NULL,
                silver_price_per_1kg DECIMAL(18, 4) NOT NULL,
                inr_to_usd DECIMAL(18, 8) NOT NULL,
                inr_to_eur DECIMAL(18, 8) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_price_records_created_at
            ON price_records (created_at DESC)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn ping(pool: &PgPool) -> Result<()> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
