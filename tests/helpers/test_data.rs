// Test Data
//
// Rust mirror of tests/fixtures/seed.sql. Keep the two in sync: the MySQL
// tests load the SQL, everything else uses these values.

use chrono::NaiveDateTime;
use property_revenue::revenue::Reservation;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const TENANT_A: &str = "tenant-a";
pub const TENANT_B: &str = "tenant-b";

/// Build a reservation from string literals
///
/// # Example
/// ```ignore
/// let res = reservation("res-001", "prop-001", "tenant-a", "100.000", "2024-06-01 00:00:00");
/// ```
pub fn reservation(
    id: &str,
    property_id: &str,
    tenant_id: &str,
    total_amount: &str,
    check_in: &str,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        property_id: property_id.to_string(),
        tenant_id: tenant_id.to_string(),
        total_amount: Decimal::from_str(total_amount).unwrap(),
        check_in_date: NaiveDateTime::parse_from_str(check_in, "%Y-%m-%d %H:%M:%S").unwrap(),
    }
}

/// The seeded reservations for tenant-a and tenant-b
pub fn seed_reservations() -> Vec<Reservation> {
    vec![
        reservation("res-tz-1", "prop-001", TENANT_A, "1250.000", "2024-02-29 23:30:00"),
        reservation("res-dec-1", "prop-001", TENANT_A, "333.333", "2024-12-01 00:00:00"),
        reservation("res-dec-2", "prop-001", TENANT_A, "333.333", "2024-12-15 14:00:00"),
        reservation("res-dec-3", "prop-001", TENANT_A, "333.334", "2024-12-31 23:59:59"),
        reservation("res-004", "prop-002", TENANT_A, "1243.875", "2024-05-31 23:59:59"),
        reservation("res-005", "prop-002", TENANT_A, "1243.875", "2024-06-01 00:00:00"),
        reservation("res-006", "prop-002", TENANT_A, "1243.875", "2024-06-15 12:00:00"),
        reservation("res-007", "prop-002", TENANT_A, "1243.875", "2024-07-01 00:00:00"),
        reservation("res-008", "prop-003", TENANT_A, "3050.250", "2024-03-10 15:00:00"),
        reservation("res-009", "prop-003", TENANT_A, "3050.250", "2024-08-20 15:00:00"),
        reservation("res-010", "prop-004", TENANT_B, "444.125", "2024-06-03 10:00:00"),
        reservation("res-011", "prop-004", TENANT_B, "444.125", "2024-06-20 10:00:00"),
        reservation("res-012", "prop-004", TENANT_B, "444.125", "2024-07-05 10:00:00"),
        reservation("res-013", "prop-004", TENANT_B, "444.125", "2025-01-01 00:00:00"),
        reservation("res-014", "prop-005", TENANT_B, "1085.333", "2024-12-30 16:00:00"),
        reservation("res-015", "prop-005", TENANT_B, "1085.333", "2025-01-02 16:00:00"),
        reservation("res-016", "prop-005", TENANT_B, "1085.334", "2025-01-15 16:00:00"),
    ]
}
