pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ReportingPeriod, Reservation, RevenueSummary};
pub use repositories::MySqlQueryExecutor;
pub use services::{FallbackFigures, FallbackTable, RevenueService};
