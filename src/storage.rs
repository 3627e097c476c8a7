use crate::errors::AppError;
use crate::models::{CustomerBook, User};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const CUSTOMERS_FILE: &str = "driver-customers.json";
pub const USER_FILE: &str = "driver-user.json";

pub fn resolve_data_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    Ok(PathBuf::from("data"))
}

pub fn customers_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CUSTOMERS_FILE)
}

pub fn user_path(data_dir: &Path) -> PathBuf {
    data_dir.join(USER_FILE)
}

/// Loads the customers blob. Missing, unreadable, or malformed data all fall
/// back to an empty collection; the condition is logged and never surfaced.
pub async fn load_customers(path: &Path) -> CustomerBook {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(book) => book,
            Err(err) => {
                error!("failed to parse customers file: {err}");
                CustomerBook::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => CustomerBook::default(),
        Err(err) => {
            error!("failed to read customers file: {err}");
            CustomerBook::default()
        }
    }
}

/// Loads the persisted session, if any. Same soft-fail discipline as
/// `load_customers`: a broken user blob means no session.
pub async fn load_user(path: &Path) -> Option<User> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(err) => {
                error!("failed to parse user file: {err}");
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read user file: {err}");
            None
        }
    }
}

pub async fn persist_customers(path: &Path, book: &CustomerBook) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(book).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn persist_user(path: &Path, user: &User) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(user).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn clear_user(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Visit};

    fn sample_book() -> CustomerBook {
        CustomerBook {
            customers: vec![Customer {
                id: "1700000000000".to_string(),
                name: "Acme Store".to_string(),
                location: "5th Ave".to_string(),
                visits: vec![Visit {
                    date: "2024-01-15".to_string(),
                    count: 2,
                }],
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
            }],
        }
    }

    #[test]
    fn book_round_trips_by_value() {
        let book = sample_book();
        let bytes = serde_json::to_vec(&book).unwrap();
        let reloaded: CustomerBook = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reloaded, book);

        let empty = CustomerBook::default();
        let bytes = serde_json::to_vec(&empty).unwrap();
        let reloaded: CustomerBook = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(reloaded, empty);
    }

    #[test]
    fn book_serializes_as_bare_array_with_camel_case_fields() {
        let json = serde_json::to_value(sample_book()).unwrap();
        let array = json.as_array().expect("top-level array");
        assert_eq!(array.len(), 1);
        assert!(array[0].get("createdAt").is_some());
        assert_eq!(array[0]["visits"][0]["date"], "2024-01-15");
        assert_eq!(array[0]["visits"][0]["count"], 2);
    }

    #[tokio::test]
    async fn malformed_customers_blob_loads_empty() {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "driver_tracker_storage_{}_{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, b"{not json").await.unwrap();

        let book = load_customers(&path).await;
        assert!(book.customers.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_customers_blob_loads_empty() {
        let path = std::env::temp_dir().join("driver_tracker_does_not_exist.json");
        let book = load_customers(&path).await;
        assert!(book.customers.is_empty());
    }
}
