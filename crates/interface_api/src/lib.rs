//! HTTP API Layer
//!
//! This crate provides the REST API for the property management system
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for billing and the property directory
//! - **Middleware**: Authentication, audit logging, tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_billing::BillingService;
use domain_property::DirectoryService;
use infra_db::{PgBillStore, PgDirectoryStore};

use crate::config::ApiConfig;
use crate::handlers::{billing, health, lease, property, tenant, unit};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
///
/// The services are constructed once here, against the pool owned by the
/// process entry point; handlers receive them ready-made.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
    pub billing: BillingService<PgBillStore>,
    pub directory: DirectoryService<PgDirectoryStore>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState {
        billing: BillingService::new(PgBillStore::new(pool.clone())),
        directory: DirectoryService::new(PgDirectoryStore::new(pool.clone())),
        pool,
        config,
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Bill routes
    let bill_routes = Router::new()
        .route("/", get(billing::list_bills))
        .route("/", post(billing::create_bill))
        .route("/:id", get(billing::get_bill))
        .route("/:id", patch(billing::update_bill))
        .route("/:id/items", get(billing::list_items))
        .route("/:id/items", post(billing::create_item));

    // Property routes
    let property_routes = Router::new()
        .route("/", get(property::list_properties))
        .route("/", post(property::create_property));

    // Unit routes
    let unit_routes = Router::new()
        .route("/", get(unit::list_units))
        .route("/", post(unit::create_unit))
        .route("/:id", get(unit::get_unit))
        .route("/:id", patch(unit::update_unit))
        .route("/:id", delete(unit::delete_unit));

    // Tenant routes
    let tenant_routes = Router::new()
        .route("/", get(tenant::list_tenants))
        .route("/", post(tenant::create_tenant))
        .route("/:id", get(tenant::get_tenant))
        .route("/:id", patch(tenant::update_tenant))
        .route("/:id", delete(tenant::delete_tenant));

    // Lease routes
    let lease_routes = Router::new()
        .route("/", get(lease::list_leases))
        .route("/", post(lease::create_lease))
        .route("/:id", get(lease::get_lease))
        .route("/:id", patch(lease::update_lease))
        .route("/:id", delete(lease::delete_lease));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/bills", bill_routes)
        .nest("/properties", property_routes)
        .nest("/units", unit_routes)
        .nest("/tenants", tenant_routes)
        .nest("/leases", lease_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
