use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::errors::TrackerError;
use crate::core::services::{ExpenseService, SummaryService};
use crate::domain::{
    CategoryRegistry, CategoryUsage, Dashboard, Expense, ExpensePatch, NewExpense, Report, Stats,
};
use crate::export::ExportFormat;
use crate::utils::build_info;
use crate::web::{ApiError, AppState};

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// Edit form; absent or empty fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseUpdateForm {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameForm {
    pub new_name: String,
}

#[derive(Debug, Serialize)]
pub struct ExpenseListing {
    pub expenses: Vec<Expense>,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct EditView {
    pub expense: Expense,
    pub categories: CategoryRegistry,
}

impl ExpenseForm {
    fn into_new_expense(self) -> Result<NewExpense, TrackerError> {
        let amount = ExpenseService::parse_amount(&self.amount)?;
        let mut input = NewExpense::new(amount, self.category, self.description.trim());
        if let Some(raw) = non_empty(&self.date) {
            input = input.on(ExpenseService::parse_date(raw)?);
        }
        Ok(input)
    }
}

impl ExpenseUpdateForm {
    fn into_patch(self) -> Result<ExpensePatch, TrackerError> {
        let amount = match self.amount.as_deref().and_then(non_empty) {
            Some(raw) => Some(ExpenseService::parse_amount(raw)?),
            None => None,
        };
        let date = match self.date.as_deref().and_then(non_empty) {
            Some(raw) => Some(ExpenseService::parse_date(raw)?),
            None => None,
        };
        Ok(ExpensePatch {
            amount,
            category: self.category,
            description: self.description,
            date,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub async fn health() -> String {
    format!(
        "Expense tracker is running ({})",
        build_info::current().label()
    )
}

pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<Dashboard>> {
    Ok(Json(state.tracker()?.dashboard()?))
}

pub async fn list_expenses(State(state): State<AppState>) -> ApiResult<Json<ExpenseListing>> {
    let expenses = state.tracker()?.list()?;
    let total = SummaryService::total(&expenses);
    Ok(Json(ExpenseListing { expenses, total }))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> ApiResult<Redirect> {
    let input = form.into_new_expense()?;
    state.tracker()?.add_expense(input)?;
    Ok(Redirect::to("/expenses"))
}

pub async fn edit_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EditView>> {
    let tracker = state.tracker()?;
    let expense = tracker.expense(&id)?;
    let categories = tracker.categories()?;
    Ok(Json(EditView {
        expense,
        categories,
    }))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ExpenseUpdateForm>,
) -> ApiResult<Redirect> {
    let patch = form.into_patch()?;
    state.tracker()?.edit_expense(&id, patch)?;
    Ok(Redirect::to("/expenses"))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.tracker()?.delete_expense(&id)?;
    Ok(Json(json!({ "success": true })))
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryUsage>>> {
    Ok(Json(state.tracker()?.category_usage()?))
}

pub async fn create_category(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> ApiResult<Redirect> {
    state.tracker()?.add_category(&form.name)?;
    Ok(Redirect::to("/categories"))
}

pub async fn rename_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<RenameForm>,
) -> ApiResult<Redirect> {
    state.tracker()?.rename_category(&name, &form.new_name)?;
    Ok(Redirect::to("/categories"))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Value>> {
    let removal = state.tracker()?.delete_category(&name)?;
    Ok(Json(json!({ "success": true, "relabeled": removal.relabeled })))
}

pub async fn reports(State(state): State<AppState>) -> ApiResult<Json<Report>> {
    Ok(Json(state.tracker()?.report()?))
}

pub async fn export_csv(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    export(&state, ExportFormat::Csv)
}

pub async fn export_json(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    export(&state, ExportFormat::Json)
}

fn export(state: &AppState, format: ExportFormat) -> ApiResult<impl IntoResponse> {
    let expenses = state.tracker()?.expenses()?;
    let body = format.render(&expenses)?;
    let disposition = format!("attachment; filename=\"expenses.{}\"", format.extension());
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

pub async fn api_expenses(State(state): State<AppState>) -> ApiResult<Json<Vec<Expense>>> {
    Ok(Json(state.tracker()?.expenses()?))
}

pub async fn api_categories(State(state): State<AppState>) -> ApiResult<Json<CategoryRegistry>> {
    Ok(Json(state.tracker()?.categories()?))
}

pub async fn api_stats(State(state): State<AppState>) -> ApiResult<Json<Stats>> {
    Ok(Json(state.tracker()?.stats()?))
}
