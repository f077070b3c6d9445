use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::core::Result;

/// Aggregation queries the revenue calculators issue against reservations.
///
/// Every variant carries both `property_id` and `tenant_id`; there is no way to
/// express an aggregation that is not tenant-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateQuery<'a> {
    /// `COALESCE(SUM(total_amount), 0)` for check-ins in `[start, end)`
    RevenueInRange {
        property_id: &'a str,
        tenant_id: &'a str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// All-time `SUM(total_amount)` and `COUNT(*)`, grouped by property
    RevenueByProperty {
        property_id: &'a str,
        tenant_id: &'a str,
    },
}

impl AggregateQuery<'_> {
    pub fn property_id(&self) -> &str {
        match self {
            AggregateQuery::RevenueInRange { property_id, .. }
            | AggregateQuery::RevenueByProperty { property_id, .. } => property_id,
        }
    }

    pub fn tenant_id(&self) -> &str {
        match self {
            AggregateQuery::RevenueInRange { tenant_id, .. }
            | AggregateQuery::RevenueByProperty { tenant_id, .. } => tenant_id,
        }
    }
}

/// Single result row of an aggregation query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    /// Exact sum of `total_amount`
    pub total: Decimal,
    /// Number of reservations that contributed to `total`
    pub reservation_count: i64,
}

impl AggregateRow {
    pub fn new(total: Decimal, reservation_count: i64) -> Self {
        Self {
            total,
            reservation_count,
        }
    }
}

/// Source of query sessions over the reservation store.
///
/// Every step is fallible. Callers must treat an error from any method, or
/// `is_ready() == false` after `initialize()`, as the store being unavailable.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Prepare the session source. Calling it again once ready is a no-op.
    async fn initialize(&self) -> Result<()>;

    /// Whether a usable session source exists
    fn is_ready(&self) -> bool;

    /// Acquire a session. The underlying connection is released when the
    /// returned session is dropped.
    async fn session(&self) -> Result<Box<dyn QuerySession>>;
}

/// Scoped session able to run one aggregation query at a time
#[async_trait]
pub trait QuerySession: Send {
    /// Execute `query` and return at most one row
    async fn fetch_aggregate(&mut self, query: &AggregateQuery<'_>) -> Result<Option<AggregateRow>>;
}
