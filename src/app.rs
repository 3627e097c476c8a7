use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/customers", get(handlers::list_customers).post(handlers::create_customer))
        .route("/api/customers/:id", get(handlers::customer_detail))
        .route("/api/customers/:id/visits", post(handlers::record_visit))
        .with_state(state)
}
