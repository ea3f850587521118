//! Business logic services

pub mod customers;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub customers: customers::CustomerService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            customers: customers::CustomerService::new(repository.clone()),
            repository,
        }
    }

    /// Database connectivity probe for the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
