//! Contract tests for the revenue HTTP endpoints
//!
//! Validates response shape, tenant header handling, and that store outages
//! surface as fallback figures rather than 5xx responses.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use helpers::*;
use property_revenue::middleware::{ErrorHandler, RequestId};
use property_revenue::modules::{health, revenue};
use property_revenue::revenue::controllers::{MonthlyRevenueResponse, TENANT_HEADER};
use property_revenue::{RevenueService, RevenueSummary};
use serde_json::Value;

fn service_data(executor: InMemoryQueryExecutor) -> web::Data<RevenueService> {
    web::Data::new(RevenueService::new(Arc::new(executor)))
}

macro_rules! init_app {
    ($executor:expr) => {
        test::init_service(
            App::new()
                .wrap(ErrorHandler)
                .wrap(RequestId)
                .app_data(service_data($executor))
                .configure(health::configure)
                .configure(revenue::controllers::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_total_revenue_response_shape() {
    let app = init_app!(InMemoryQueryExecutor::seeded());

    let req = test::TestRequest::get()
        .uri("/api/properties/prop-001/revenue")
        .insert_header((TENANT_HEADER, TENANT_A))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "property_id": "prop-001",
            "tenant_id": "tenant-a",
            "total": "2250.000",
            "currency": "USD",
            "count": 4
        })
    );
}

#[actix_web::test]
async fn test_total_revenue_outage_serves_fallback() {
    let app = init_app!(InMemoryQueryExecutor::seeded_with(ExecutorMode::InitFails));

    let req = test::TestRequest::get()
        .uri("/api/properties/prop-001/revenue")
        .insert_header((TENANT_HEADER, TENANT_B))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: RevenueSummary = test::read_body_json(resp).await;
    assert_eq!(body.total, "0.000");
    assert_eq!(body.count, 0);
    assert_eq!(body.tenant_id, "tenant-b");
}

#[actix_web::test]
async fn test_monthly_revenue_response() {
    let app = init_app!(InMemoryQueryExecutor::seeded());

    let req = test::TestRequest::get()
        .uri("/api/properties/prop-002/revenue/monthly?month=6&year=2024")
        .insert_header((TENANT_HEADER, TENANT_A))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: MonthlyRevenueResponse = test::read_body_json(resp).await;
    assert_eq!(body.property_id, "prop-002");
    assert_eq!(body.tenant_id, "tenant-a");
    assert_eq!(body.period, "2024-06");
    assert_eq!(body.total, "2487.750");
    assert_eq!(body.currency.to_string(), "USD");
}

#[actix_web::test]
async fn test_missing_tenant_header_rejected() {
    let app = init_app!(InMemoryQueryExecutor::seeded());

    let req = test::TestRequest::get()
        .uri("/api/properties/prop-001/revenue")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_blank_tenant_header_rejected() {
    let app = init_app!(InMemoryQueryExecutor::seeded());

    let req = test::TestRequest::get()
        .uri("/api/properties/prop-001/revenue")
        .insert_header((TENANT_HEADER, "   "))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_month_out_of_range_rejected() {
    let app = init_app!(InMemoryQueryExecutor::seeded());

    let req = test::TestRequest::get()
        .uri("/api/properties/prop-001/revenue/monthly?month=13&year=2024")
        .insert_header((TENANT_HEADER, TENANT_A))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_readiness_reflects_store() {
    let ready_app = init_app!(InMemoryQueryExecutor::seeded());
    let resp = test::call_service(
        &ready_app,
        test::TestRequest::get().uri("/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let down_app = init_app!(InMemoryQueryExecutor::seeded_with(ExecutorMode::NotReady));
    let resp = test::call_service(
        &down_app,
        test::TestRequest::get().uri("/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
