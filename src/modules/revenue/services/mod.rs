mod fallback;
mod revenue_service;

pub use fallback::{FallbackFigures, FallbackTable};
pub use revenue_service::RevenueService;
