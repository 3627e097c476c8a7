use serde::{Deserialize, Serialize};

/// Visits aggregated per calendar day. A customer never holds two entries
/// with the same `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub location: String,
    pub visits: Vec<Visit>,
    pub created_at: String,
}

/// The full persisted collection. Serializes as a bare JSON array of
/// customers, which is the on-disk format of the customers blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CustomerBook {
    pub customers: Vec<Customer>,
}

/// Mock session profile persisted under the user blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerStats {
    pub total_visits: u64,
    pub total_days: u64,
    pub today_visit: Option<Visit>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub provider: String,
}

#[derive(Debug, Deserialize)]
pub struct AddCustomerRequest {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

/// One customer card: the record plus its display aggregates for today.
#[derive(Debug, Serialize)]
pub struct CustomerCard {
    pub id: String,
    pub name: String,
    pub location: String,
    pub stats: CustomerStats,
}

#[derive(Debug, Serialize)]
pub struct CustomersResponse {
    pub count: usize,
    pub customers: Vec<CustomerCard>,
}

#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub customer: Option<CustomerCard>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub date: String,
    pub count: u64,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
pub struct CustomerDetailResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub stats: CustomerStats,
    pub history: Vec<HistoryEntry>,
}
