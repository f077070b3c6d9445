use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{AppError, Currency, Result};
use crate::modules::revenue::models::ReportingPeriod;
use crate::modules::revenue::services::RevenueService;

/// Header carrying the tenant every revenue figure is scoped to
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Query parameters for the monthly revenue endpoint
#[derive(Debug, Deserialize)]
pub struct MonthlyRevenueQuery {
    /// Calendar month, 1-12
    pub month: u32,
    pub year: i32,
}

/// Response body for the monthly revenue endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyRevenueResponse {
    pub property_id: String,
    pub tenant_id: String,
    pub period: String, // Format: YYYY-MM
    pub total: String,  // Decimal as string for JSON precision
    pub currency: Currency,
}

/// GET /api/properties/{property_id}/revenue
///
/// All-time revenue and reservation count for the property within the
/// caller's tenant.
pub async fn get_total_revenue(
    req: HttpRequest,
    path: web::Path<String>,
    service: web::Data<RevenueService>,
) -> Result<HttpResponse> {
    let tenant_id = tenant_id(&req)?;
    let property_id = path.into_inner();

    info!(
        "Total revenue requested: property={}, tenant={}",
        property_id, tenant_id
    );

    let summary = service
        .calculate_total_revenue(&property_id, &tenant_id)
        .await;

    Ok(HttpResponse::Ok().json(summary))
}

/// GET /api/properties/{property_id}/revenue/monthly?month=&year=
pub async fn get_monthly_revenue(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<MonthlyRevenueQuery>,
    service: web::Data<RevenueService>,
) -> Result<HttpResponse> {
    let tenant_id = tenant_id(&req)?;
    let property_id = path.into_inner();
    let period = ReportingPeriod::new(query.year, query.month)?;

    info!(
        "Monthly revenue requested: property={}, tenant={}, period={}",
        property_id, tenant_id, period
    );

    let total = service
        .calculate_monthly_revenue(&property_id, &tenant_id, period)
        .await;

    Ok(HttpResponse::Ok().json(MonthlyRevenueResponse {
        property_id,
        tenant_id,
        period: period.label(),
        total: total.to_string(),
        currency: Currency::REPORTING,
    }))
}

fn tenant_id(req: &HttpRequest) -> Result<String> {
    req.headers()
        .get(TENANT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::validation(format!("{} header is required", TENANT_HEADER)))
}

/// Configure routes for the revenue module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/properties")
            .route("/{property_id}/revenue", web::get().to(get_total_revenue))
            .route(
                "/{property_id}/revenue/monthly",
                web::get().to(get_monthly_revenue),
            ),
    );
}
