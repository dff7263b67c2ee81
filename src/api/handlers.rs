//! Route handlers.
//!
//! `v1` handlers proxy the upstream payload as-is, without caching.
//! `v2` handlers go through the resource services.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use super::error::ApiError;
use super::routes::AppState;
use super::types::{ApiResponse, HealthResponse, ServiceInfo};
use crate::adapters::cache::CacheStats;
use crate::domain::models::{Customer, Payment, ResourceKind};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

fn parse_id(resource: &'static str, raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId {
        resource,
        raw: raw.to_string(),
    })
}

pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        api_versions: ["v1", "v2"],
        health: format!("{}/health", state.api_prefix()),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.uptime().as_secs(),
    })
}

pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

// v1: raw passthrough

pub async fn raw_customers(State(state): State<AppState>) -> ApiResult<Value> {
    let data = state
        .upstream
        .fetch_collection(ResourceKind::Customers)
        .await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn raw_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id("customer", &raw_id)?;
    let data = state
        .upstream
        .fetch_by_id(ResourceKind::Customers, id)
        .await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn raw_payments(State(state): State<AppState>) -> ApiResult<Value> {
    let data = state
        .upstream
        .fetch_collection(ResourceKind::Payments)
        .await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn raw_payment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id("payment", &raw_id)?;
    let data = state
        .upstream
        .fetch_by_id(ResourceKind::Payments, id)
        .await?;
    Ok(Json(ApiResponse::ok(data)))
}

// v2: transformed, cached

pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Vec<Customer>> {
    let customers = state.customers.get_all().await?;
    Ok(Json(ApiResponse::ok(customers)))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Customer> {
    let id = parse_id("customer", &raw_id)?;
    let customer = state.customers.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(customer)))
}

pub async fn list_payments(State(state): State<AppState>) -> ApiResult<Vec<Payment>> {
    let payments = state.payments.get_all().await?;
    Ok(Json(ApiResponse::ok(payments)))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Payment> {
    let id = parse_id("payment", &raw_id)?;
    let payment = state.payments.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(payment)))
}
