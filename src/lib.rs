//! Property revenue reporting library
//!
//! Tenant-scoped revenue figures for rental properties, computed from the
//! reservations store with a deterministic fallback when the store is down.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::revenue;
pub use modules::revenue::{ReportingPeriod, RevenueService, RevenueSummary};
