// MySQL-backed query executor for revenue aggregation
//
// - Lazily creates the pool on first initialize(); later calls reuse it
// - Each session holds one pooled connection, returned to the pool on drop
// - Queries are tenant-scoped aggregates over the reservations table

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::mysql::MySql;
use sqlx::pool::PoolConnection;
use sqlx::MySqlPool;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::core::traits::{AggregateQuery, AggregateRow, QueryExecutor, QuerySession};
use crate::core::{AppError, Result};

const REVENUE_IN_RANGE_SQL: &str = r#"
    SELECT
        COALESCE(SUM(total_amount), 0) AS total,
        COUNT(*) AS reservation_count
    FROM reservations
    WHERE property_id = ?
      AND tenant_id = ?
      AND check_in_date >= ?
      AND check_in_date < ?
"#;

const REVENUE_BY_PROPERTY_SQL: &str = r#"
    SELECT
        property_id,
        SUM(total_amount) AS total,
        COUNT(*) AS reservation_count
    FROM reservations
    WHERE property_id = ? AND tenant_id = ?
    GROUP BY property_id
"#;

/// Query executor over a MySQL reservations store
pub struct MySqlQueryExecutor {
    config: Option<DatabaseConfig>,
    pool: OnceCell<MySqlPool>,
}

impl MySqlQueryExecutor {
    /// Executor that connects on the first `initialize()`
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config: Some(config),
            pool: OnceCell::new(),
        }
    }

    /// Executor over an already connected pool
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self {
            config: None,
            pool: OnceCell::new_with(Some(pool)),
        }
    }
}

#[async_trait]
impl QueryExecutor for MySqlQueryExecutor {
    async fn initialize(&self) -> Result<()> {
        self.pool
            .get_or_try_init(|| async {
                let config = self.config.as_ref().ok_or_else(|| {
                    AppError::pool_unavailable("no database configuration to connect with")
                })?;

                let pool = config.create_pool().await?;
                info!(
                    "Database pool initialized ({} connections)",
                    config.max_connections
                );
                Ok::<_, AppError>(pool)
            })
            .await?;

        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.pool.get().is_some_and(|pool| !pool.is_closed())
    }

    async fn session(&self) -> Result<Box<dyn QuerySession>> {
        let pool = self
            .pool
            .get()
            .ok_or_else(|| AppError::pool_unavailable("MySQL pool not initialized"))?;

        let conn = pool.acquire().await?;
        Ok(Box::new(MySqlSession { conn }))
    }
}

/// One pooled connection, released when the session is dropped
struct MySqlSession {
    conn: PoolConnection<MySql>,
}

/// Row shape shared by both aggregation queries
#[derive(sqlx::FromRow)]
struct AggregateRecord {
    total: Option<Decimal>,
    reservation_count: i64,
}

impl From<AggregateRecord> for AggregateRow {
    fn from(record: AggregateRecord) -> Self {
        AggregateRow::new(record.total.unwrap_or(Decimal::ZERO), record.reservation_count)
    }
}

#[async_trait]
impl QuerySession for MySqlSession {
    async fn fetch_aggregate(&mut self, query: &AggregateQuery<'_>) -> Result<Option<AggregateRow>> {
        debug!(
            "Running revenue aggregate for {} (tenant: {})",
            query.property_id(),
            query.tenant_id()
        );

        let record = match *query {
            AggregateQuery::RevenueInRange {
                property_id,
                tenant_id,
                start,
                end,
            } => {
                sqlx::query_as::<_, AggregateRecord>(REVENUE_IN_RANGE_SQL)
                    .bind(property_id)
                    .bind(tenant_id)
                    .bind(start)
                    .bind(end)
                    .fetch_optional(&mut *self.conn)
                    .await?
            }
            AggregateQuery::RevenueByProperty {
                property_id,
                tenant_id,
            } => {
                sqlx::query_as::<_, AggregateRecord>(REVENUE_BY_PROPERTY_SQL)
                    .bind(property_id)
                    .bind(tenant_id)
                    .fetch_optional(&mut *self.conn)
                    .await?
            }
        };

        Ok(record.map(AggregateRow::from))
    }
}
