//! Dashboard routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expenses::ExpenseResponse;
use crate::error::{ApiError, ApiResult};
use crate::{AppState, middleware::AuthUser};
use tally_core::dashboard::{ExpenseSummary, TimeWindow};
use tally_core::expense::Category;

/// Creates the dashboard routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// `today`, `week` or `month` (default).
    pub window: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Dashboard summary for one window.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Window query name.
    pub window: TimeWindow,
    /// Window label.
    pub label: &'static str,
    /// Reference day in the configured zone.
    pub today: NaiveDate,
    /// First day covered by the window.
    pub since: NaiveDate,
    /// Total spent, two decimal places.
    pub total: String,
    /// Exact average per day.
    pub average_per_day: String,
    /// Average per day rounded to cents.
    pub average_per_day_rounded: String,
    /// Number of expenses in the window.
    pub transaction_count: usize,
    /// Number of categories with spending.
    pub category_count: usize,
    /// Amount per category.
    pub by_category: BTreeMap<Category, String>,
    /// Category slices, largest first.
    pub breakdown: Vec<CategoryShareResponse>,
    /// Expenses in the window.
    pub expenses: Vec<ExpenseResponse>,
}

/// One category slice.
#[derive(Debug, Serialize)]
pub struct CategoryShareResponse {
    /// Category display name.
    pub category: Category,
    /// Amount, two decimal places.
    pub amount: String,
    /// Percent of the window total.
    pub percent: String,
}

impl From<ExpenseSummary> for DashboardResponse {
    fn from(summary: ExpenseSummary) -> Self {
        let breakdown = summary
            .breakdown()
            .into_iter()
            .map(|share| CategoryShareResponse {
                category: share.category,
                amount: share.amount.to_string(),
                percent: format!("{:.2}", share.percent),
            })
            .collect();

        Self {
            window: summary.window,
            label: summary.window.label(),
            today: summary.today,
            since: summary.since,
            total: summary.total.to_string(),
            average_per_day: summary.average_per_day.normalize().to_string(),
            average_per_day_rounded: summary.rounded_average().to_string(),
            transaction_count: summary.transaction_count(),
            category_count: summary.category_count(),
            by_category: summary
                .by_category
                .iter()
                .map(|(&category, amount)| (category, amount.to_string()))
                .collect(),
            breakdown,
            expenses: summary
                .expenses
                .into_iter()
                .map(ExpenseResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/dashboard` - Totals for the requested window over a fresh snapshot.
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    WithRejection(Query(query), _): WithRejection<Query<DashboardQuery>, ApiError>,
) -> ApiResult<Json<DashboardResponse>> {
    let window = match query.window.as_deref() {
        Some(raw) => raw
            .parse::<TimeWindow>()
            .map_err(|e| ApiError::validation(e.to_string()))?,
        None => TimeWindow::default(),
    };

    let expenses = state.expenses.list_expenses(auth.user_id()).await?;
    let summary = state.aggregator.aggregate(&expenses, window, &state.now());

    Ok(Json(summary.into()))
}
