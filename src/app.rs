use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route(
            "/api/subjects",
            post(handlers::add_subject).delete(handlers::delete_subject),
        )
        .route("/api/subjects/select", post(handlers::select_subject))
        .route("/api/attendance", post(handlers::mark_attendance))
        .route("/api/attendance/:date", get(handlers::get_status))
        .route("/api/month", get(handlers::get_month))
        .with_state(state)
}
