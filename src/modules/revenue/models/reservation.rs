use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::AggregateQuery;

/// Read-only view of a row in the `reservations` table.
///
/// Reservations are owned by the booking domain; revenue reporting never
/// writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: String,
    pub property_id: String,
    pub tenant_id: String,
    pub total_amount: Decimal,
    pub check_in_date: NaiveDateTime,
}

impl Reservation {
    /// Whether this reservation is counted by `query`.
    ///
    /// Mirrors the SQL `WHERE` clauses: property and tenant must both match,
    /// and ranged queries use `start <= check_in_date < end`.
    pub fn is_counted_by(&self, query: &AggregateQuery<'_>) -> bool {
        if self.property_id != query.property_id() || self.tenant_id != query.tenant_id() {
            return false;
        }

        match query {
            AggregateQuery::RevenueInRange { start, end, .. } => {
                *start <= self.check_in_date && self.check_in_date < *end
            }
            AggregateQuery::RevenueByProperty { .. } => true,
        }
    }
}
