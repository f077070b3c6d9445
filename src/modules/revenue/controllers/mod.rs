mod revenue_controller;

pub use revenue_controller::{MonthlyRevenueQuery, MonthlyRevenueResponse, TENANT_HEADER};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    revenue_controller::configure(cfg);
}
