use std::sync::Arc;

use sqlx::PgPool;
use crm_core::repositories::CustomerRepository;
use crm_core::services::CustomerService;

pub type SharedCustomerService = Arc<CustomerService<dyn CustomerRepository>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub customers: SharedCustomerService,
}

impl AppState {
    pub fn new(db: PgPool, customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self {
            db,
            customers: Arc::new(CustomerService::new(customer_repo)),
        }
    }
}
