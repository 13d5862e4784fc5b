//! Expense management routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::{AppState, middleware::AuthUser};
use tally_core::expense::{Category, Expense, ExpenseUpdate, NewExpense};
use tally_shared::types::{ExpenseId, Money};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).patch(update_expense).delete(delete_expense),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Title.
    pub title: String,
    /// Amount as a decimal string, e.g. `"12.50"`.
    pub amount: String,
    /// Category display name, e.g. `"Food & Dining"`.
    pub category: String,
    /// Day of the expense (YYYY-MM-DD); defaults to today.
    pub date: Option<NaiveDate>,
    /// Optional notes.
    pub notes: Option<String>,
}

/// Request body for updating an expense. Omitted fields stay unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    /// New title.
    pub title: Option<String>,
    /// New amount as a decimal string.
    pub amount: Option<String>,
    /// New category display name.
    pub category: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New notes; `null` clears them.
    #[serde(default, deserialize_with = "present_or_null")]
    pub notes: Option<Option<String>>,
}

/// Distinguishes an explicit `null` from an absent field.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response for an expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Amount with two decimal places.
    pub amount: String,
    /// Category display name.
    pub category: Category,
    /// Day of the expense.
    pub date: NaiveDate,
    /// Notes.
    pub notes: Option<String>,
    /// Created at timestamp.
    pub created_at: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id.into_inner(),
            title: expense.title,
            amount: expense.amount.to_string(),
            category: expense.category,
            date: expense.date,
            notes: expense.notes,
            created_at: expense.created_at.to_rfc3339(),
        }
    }
}

fn parse_amount(raw: &str) -> ApiResult<Money> {
    Money::from_str(raw)
        .map_err(|_| ApiError::validation(format!("Amount is not a valid number: {raw}")))
}

fn parse_category(raw: &str) -> ApiResult<Category> {
    Ok(Category::from_str(raw.trim())?)
}

impl CreateExpenseRequest {
    fn into_new_expense(self, today: NaiveDate) -> ApiResult<NewExpense> {
        Ok(NewExpense {
            amount: parse_amount(&self.amount)?,
            category: parse_category(&self.category)?,
            date: self.date.unwrap_or(today),
            title: self.title,
            notes: self.notes,
        })
    }
}

impl UpdateExpenseRequest {
    fn into_update(self) -> ApiResult<ExpenseUpdate> {
        Ok(ExpenseUpdate {
            title: self.title,
            amount: self.amount.as_deref().map(parse_amount).transpose()?,
            category: self.category.as_deref().map(parse_category).transpose()?,
            date: self.date,
            notes: self.notes,
        })
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/expenses` - List the caller's expenses, newest first.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<impl IntoResponse> {
    let expenses = state.expenses.list_expenses(auth.user_id()).await?;
    let items: Vec<ExpenseResponse> = expenses.into_iter().map(ExpenseResponse::from).collect();

    Ok(Json(json!({ "expenses": items })))
}

/// POST `/expenses` - Record a new expense.
async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    WithRejection(Json(payload), _): WithRejection<Json<CreateExpenseRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.into_new_expense(state.today())?;
    let expense = state.expenses.create_expense(auth.user_id(), input).await?;

    info!(
        expense_id = %expense.id,
        user_id = %auth.user_id(),
        "Expense created"
    );

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}

/// GET `/expenses/{id}` - Fetch one expense.
async fn get_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> ApiResult<Json<ExpenseResponse>> {
    let expense = state
        .expenses
        .get_expense(auth.user_id(), ExpenseId::from_uuid(id))
        .await?;

    Ok(Json(expense.into()))
}

/// PATCH `/expenses/{id}` - Change some fields of an expense.
async fn update_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateExpenseRequest>, ApiError>,
) -> ApiResult<Json<ExpenseResponse>> {
    let update = payload.into_update()?;
    let expense = state
        .expenses
        .update_expense(auth.user_id(), ExpenseId::from_uuid(id), update)
        .await?;

    Ok(Json(expense.into()))
}

/// DELETE `/expenses/{id}` - Remove an expense.
async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> ApiResult<StatusCode> {
    let id = ExpenseId::from_uuid(id);
    state.expenses.delete_expense(auth.user_id(), id).await?;

    info!(expense_id = %id, user_id = %auth.user_id(), "Expense deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_update_notes_absent_null_and_value() {
        let absent: UpdateExpenseRequest = serde_json::from_str("{}").unwrap();
        let null: UpdateExpenseRequest = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        let value: UpdateExpenseRequest = serde_json::from_str(r#"{"notes": "hi"}"#).unwrap();

        assert_eq!(absent.notes, None);
        assert_eq!(null.notes, Some(None));
        assert_eq!(value.notes, Some(Some("hi".to_string())));
    }

    #[test]
    fn test_create_defaults_date_to_today() {
        let request = CreateExpenseRequest {
            title: "Bus".to_string(),
            amount: "2.75".to_string(),
            category: "Transportation".to_string(),
            date: None,
            notes: None,
        };
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let input = request.into_new_expense(today).unwrap();

        assert_eq!(input.date, today);
        assert_eq!(input.amount, Money::new(dec!(2.75)));
        assert_eq!(input.category, Category::Transportation);
    }

    #[test]
    fn test_bad_amount_and_category_are_rejected() {
        assert!(parse_amount("twelve").is_err());
        assert!(parse_amount("1_000").is_err());
        assert_eq!(parse_amount(" 12.50 ").unwrap(), Money::new(dec!(12.50)));
        assert!(parse_category("Groceries").is_err());
        assert_eq!(parse_category(" Other ").unwrap(), Category::Other);
    }
}
