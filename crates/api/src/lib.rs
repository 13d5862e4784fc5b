//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST routes for expenses and the dashboard
//! - Authentication middleware for hosted access tokens
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tally_core::dashboard::ExpenseAggregator;
use tally_core::expense::ExpenseStore;
use tally_shared::JwtService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Expense storage backend.
    pub expenses: Arc<dyn ExpenseStore>,
    /// Verifier for hosted access tokens.
    pub jwt_service: Arc<JwtService>,
    /// Zone whose calendar day bounds the dashboard windows.
    pub timezone: Tz,
    /// Dashboard aggregator.
    pub aggregator: ExpenseAggregator,
}

impl AppState {
    /// Creates the state with a fresh aggregator.
    #[must_use]
    pub fn new(expenses: Arc<dyn ExpenseStore>, jwt_service: Arc<JwtService>, timezone: Tz) -> Self {
        Self {
            expenses,
            jwt_service,
            timezone,
            aggregator: ExpenseAggregator::new(),
        }
    }

    /// Current instant in the configured zone.
    #[must_use]
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }

    /// Today's date in the configured zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
