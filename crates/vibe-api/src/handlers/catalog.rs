// ============================================================================
// Vibe API - Catalog Handlers
// File: crates/vibe-api/src/handlers/catalog.rs
// ============================================================================
//! Flat catalog listings and slug lookups.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use vibe_core::domain::{Course, DanceProfession, Event, Level, OrganizationRole, Product};
use vibe_core::services::{CatalogFilter, CatalogService};

use crate::error::ApiError;
use crate::response::ApiResponse;

type Catalog = State<Arc<CatalogService>>;
type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub async fn list_levels(State(catalog): Catalog) -> ApiResult<Vec<Level>> {
    Ok(Json(ApiResponse::success(catalog.list_levels().await?)))
}

pub async fn get_level(State(catalog): Catalog, Path(slug): Path<String>) -> ApiResult<Level> {
    Ok(Json(ApiResponse::success(catalog.get_level(&slug).await?)))
}

pub async fn list_professions(State(catalog): Catalog) -> ApiResult<Vec<DanceProfession>> {
    Ok(Json(ApiResponse::success(catalog.list_professions().await?)))
}

pub async fn get_profession(State(catalog): Catalog, Path(slug): Path<String>) -> ApiResult<DanceProfession> {
    Ok(Json(ApiResponse::success(catalog.get_profession(&slug).await?)))
}

pub async fn list_roles(State(catalog): Catalog) -> ApiResult<Vec<OrganizationRole>> {
    Ok(Json(ApiResponse::success(catalog.list_roles().await?)))
}

pub async fn get_role(State(catalog): Catalog, Path(slug): Path<String>) -> ApiResult<OrganizationRole> {
    Ok(Json(ApiResponse::success(catalog.get_role(&slug).await?)))
}

/// Active courses with their weekly schedule.
pub async fn list_courses(State(catalog): Catalog) -> ApiResult<Vec<Course>> {
    Ok(Json(ApiResponse::success(catalog.list_courses().await?)))
}

pub async fn get_course(State(catalog): Catalog, Path(slug): Path<String>) -> ApiResult<Course> {
    Ok(Json(ApiResponse::success(catalog.get_course(&slug).await?)))
}

/// GET /api/v1/events?upcoming=true
pub async fn list_events(State(catalog): Catalog, Query(filter): Query<CatalogFilter>) -> ApiResult<Vec<Event>> {
    Ok(Json(ApiResponse::success(catalog.list_events(&filter).await?)))
}

pub async fn get_event(State(catalog): Catalog, Path(slug): Path<String>) -> ApiResult<Event> {
    Ok(Json(ApiResponse::success(catalog.get_event(&slug).await?)))
}

/// GET /api/v1/shop/products?in_stock=true
pub async fn list_products(State(catalog): Catalog, Query(filter): Query<CatalogFilter>) -> ApiResult<Vec<Product>> {
    Ok(Json(ApiResponse::success(catalog.list_products(&filter).await?)))
}

pub async fn get_product(State(catalog): Catalog, Path(slug): Path<String>) -> ApiResult<Product> {
    Ok(Json(ApiResponse::success(catalog.get_product(&slug).await?)))
}
