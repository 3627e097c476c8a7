use crate::errors::AppError;
use crate::models::{
    AddCustomerRequest, Customer, CustomerBook, CustomerCard, CustomerDetailResponse,
    CustomersResponse, HistoryEntry, LoginRequest, SessionResponse, User, VisitResponse,
};
use crate::state::AppState;
use crate::stats::{customer_stats, sort_visits_desc};
use crate::storage::{clear_user, persist_customers, persist_user};
use crate::store;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let user = state.user.lock().await.clone();
    Json(SessionResponse { user })
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let provider = payload.provider.trim();
    if provider != "google" && provider != "apple" {
        return Err(AppError::bad_request("provider must be 'google' or 'apple'"));
    }

    let email = if provider == "google" {
        "john.driver@gmail.com"
    } else {
        "john.driver@icloud.com"
    };
    let user = User {
        id: format!("{provider}_{}", Utc::now().timestamp_millis()),
        name: "John Driver".to_string(),
        email: email.to_string(),
        avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=2".to_string(),
        provider: provider.to_string(),
    };

    if let Err(err) = persist_user(&state.user_path, &user).await {
        error!("failed to persist user: {}", err.message);
    }
    *state.user.lock().await = Some(user.clone());

    Ok(Json(user))
}

/// Ends the session. The customers blob is left untouched so the data
/// reappears on the next login.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    if let Err(err) = clear_user(&state.user_path).await {
        error!("failed to clear user: {}", err.message);
    }
    *state.user.lock().await = None;
    StatusCode::NO_CONTENT
}

pub async fn list_customers(State(state): State<AppState>) -> Json<CustomersResponse> {
    let today = today_string();
    let book = state.customers.lock().await;
    Json(to_cards(&book, &today))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<AddCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    if payload.name.trim().is_empty() || payload.location.trim().is_empty() {
        return Err(AppError::bad_request("name and location are required"));
    }

    let mut book = state.customers.lock().await;
    let customer = store::add_customer(&mut book, &payload.name, &payload.location, Utc::now());
    persist_best_effort(&state, &book).await;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Records a visit for today. An unknown id responds 200 with a null
/// customer: the miss is a defined no-op, not an error.
pub async fn record_visit(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Json<VisitResponse> {
    let today = today_string();
    let mut book = state.customers.lock().await;
    let card = store::record_visit(&mut book, &customer_id, &today)
        .map(|customer| to_card(customer, &today));

    if card.is_some() {
        persist_best_effort(&state, &book).await;
    }

    Json(VisitResponse { customer: card })
}

pub async fn customer_detail(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerDetailResponse>, AppError> {
    let today = today_string();
    let book = state.customers.lock().await;
    let customer = store::find_customer(&book, &customer_id)
        .ok_or_else(|| AppError::not_found("no such customer"))?;

    let history = sort_visits_desc(&customer.visits)
        .into_iter()
        .map(|visit| HistoryEntry {
            is_today: visit.date == today,
            date: visit.date,
            count: visit.count,
        })
        .collect();

    Ok(Json(CustomerDetailResponse {
        id: customer.id.clone(),
        name: customer.name.clone(),
        location: customer.location.clone(),
        stats: customer_stats(customer, &today),
        history,
    }))
}

/// Write failures keep the in-memory collection authoritative; the next
/// mutation retries the persist implicitly.
async fn persist_best_effort(state: &AppState, book: &CustomerBook) {
    if let Err(err) = persist_customers(&state.customers_path, book).await {
        error!("failed to persist customers: {}", err.message);
    }
}

fn to_cards(book: &CustomerBook, today: &str) -> CustomersResponse {
    CustomersResponse {
        count: book.customers.len(),
        customers: book
            .customers
            .iter()
            .map(|customer| to_card(customer, today))
            .collect(),
    }
}

fn to_card(customer: &Customer, today: &str) -> CustomerCard {
    CustomerCard {
        id: customer.id.clone(),
        name: customer.name.clone(),
        location: customer.location.clone(),
        stats: customer_stats(customer, today),
    }
}

fn today_string() -> String {
    Utc::now().date_naive().to_string()
}
