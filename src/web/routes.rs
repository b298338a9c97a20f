use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::web::{handlers, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/expenses/:id/edit", get(handlers::edit_expense))
        .route(
            "/expenses/:id",
            post(handlers::update_expense).delete(handlers::delete_expense),
        )
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/categories/:name/rename", post(handlers::rename_category))
        .route("/categories/:name", delete(handlers::delete_category))
        .route("/reports", get(handlers::reports))
        .route("/export/csv", get(handlers::export_csv))
        .route("/export/json", get(handlers::export_json))
        .merge(api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/expenses", get(handlers::api_expenses))
        .route("/api/categories", get(handlers::api_categories))
        .route("/api/stats", get(handlers::api_stats))
}
