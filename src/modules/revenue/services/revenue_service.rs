use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::traits::{AggregateQuery, QueryExecutor, QuerySession};
use crate::core::{AppError, Currency, Result};
use crate::modules::revenue::models::{ReportingPeriod, RevenueSummary};
use crate::modules::revenue::services::FallbackTable;

/// Tenant-scoped revenue figures for dashboard and reporting callers.
///
/// Both operations try the live reservation store first and resolve to the
/// fallback table when any step of the live path fails. Neither returns an
/// error: live failures are reported through `tracing::warn!` and absorbed.
pub struct RevenueService {
    executor: Arc<dyn QueryExecutor>,
    fallback: Arc<FallbackTable>,
}

impl RevenueService {
    /// Create a revenue service backed by the built-in fallback table
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self::with_fallback(executor, FallbackTable::builtin())
    }

    pub fn with_fallback(executor: Arc<dyn QueryExecutor>, fallback: Arc<FallbackTable>) -> Self {
        Self { executor, fallback }
    }

    /// Revenue for reservations checking in during `period`.
    ///
    /// Live: `SUM(total_amount)` over `[period.start(), period.end())` for the
    /// tenant's property, zero when nothing matches.
    ///
    /// Fallback: the table's monthly figure for the tenant's property,
    /// regardless of `period`, or zero when the pair is unknown.
    pub async fn calculate_monthly_revenue(
        &self,
        property_id: &str,
        tenant_id: &str,
        period: ReportingPeriod,
    ) -> Decimal {
        let resolution = self
            .live_monthly_revenue(property_id, tenant_id, &period)
            .await
            .map_err(|e| {
                warn!(
                    "[calculate_monthly_revenue] DB error for {}/{} {}: {}",
                    property_id, tenant_id, period, e
                );
                self.fallback.resolve(tenant_id, property_id).monthly_total
            });

        settle(resolution)
    }

    /// All-time revenue and reservation count for the tenant's property.
    ///
    /// Live: a property with no reservations yields total `"0.00"`, count 0.
    ///
    /// Fallback: the table's figures, or total `"0.000"`, count 0 when the
    /// pair is unknown.
    pub async fn calculate_total_revenue(&self, property_id: &str, tenant_id: &str) -> RevenueSummary {
        let resolution = self
            .live_total_revenue(property_id, tenant_id)
            .await
            .map_err(|e| {
                warn!(
                    "Database error for {} (tenant: {}): {}",
                    property_id, tenant_id, e
                );
                let figures = self.fallback.resolve(tenant_id, property_id);
                RevenueSummary::new(property_id, tenant_id, figures.total, figures.reservation_count)
            });

        settle(resolution)
    }

    /// Whether the live store can currently hand out sessions
    pub async fn is_store_ready(&self) -> bool {
        self.executor.initialize().await.is_ok() && self.executor.is_ready()
    }

    async fn live_monthly_revenue(
        &self,
        property_id: &str,
        tenant_id: &str,
        period: &ReportingPeriod,
    ) -> Result<Decimal> {
        let mut session = self.acquire_session().await?;

        let row = session
            .fetch_aggregate(&AggregateQuery::RevenueInRange {
                property_id,
                tenant_id,
                start: period.start(),
                end: period.end(),
            })
            .await?;

        let total = row.map(|row| row.total).unwrap_or(Decimal::ZERO);
        debug!(
            "Monthly revenue for {}/{} {}: {}",
            property_id, tenant_id, period, total
        );

        Ok(total)
    }

    async fn live_total_revenue(&self, property_id: &str, tenant_id: &str) -> Result<RevenueSummary> {
        let mut session = self.acquire_session().await?;

        let row = session
            .fetch_aggregate(&AggregateQuery::RevenueByProperty {
                property_id,
                tenant_id,
            })
            .await?;

        let summary = match row {
            Some(row) => RevenueSummary::new(property_id, tenant_id, row.total, row.reservation_count),
            None => {
                debug!(
                    "No reservations for {} (tenant: {})",
                    property_id, tenant_id
                );
                RevenueSummary::new(property_id, tenant_id, Currency::REPORTING.zero(), 0)
            }
        };

        Ok(summary)
    }

    /// Initialize the executor and open a session, treating a not-ready
    /// executor as unavailable
    async fn acquire_session(&self) -> Result<Box<dyn QuerySession>> {
        self.executor.initialize().await?;

        if !self.executor.is_ready() {
            return Err(AppError::pool_unavailable(
                "query executor has no active session source",
            ));
        }

        self.executor.session().await
    }
}

/// Collapse a live (`Ok`) or fallback (`Err`) resolution into one value
fn settle<T>(resolution: std::result::Result<T, T>) -> T {
    match resolution {
        Ok(value) | Err(value) => value,
    }
}
