mod reporting_period;
mod reservation;
mod revenue_summary;

pub use reporting_period::ReportingPeriod;
pub use reservation::Reservation;
pub use revenue_summary::RevenueSummary;
