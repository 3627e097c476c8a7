use crate::models::{CustomerBook, User};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub customers_path: PathBuf,
    pub user_path: PathBuf,
    pub customers: Arc<Mutex<CustomerBook>>,
    pub user: Arc<Mutex<Option<User>>>,
}

impl AppState {
    pub fn new(
        customers_path: PathBuf,
        user_path: PathBuf,
        customers: CustomerBook,
        user: Option<User>,
    ) -> Self {
        Self {
            customers_path,
            user_path,
            customers: Arc::new(Mutex::new(customers)),
            user: Arc::new(Mutex::new(user)),
        }
    }
}
