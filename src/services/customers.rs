//! Customer service

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer, UpdateCustomer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomerService {
    repository: Repository,
}

impl CustomerService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreateCustomer) -> AppResult<Customer> {
        self.repository.customers.create(data).await
    }

    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Customer>> {
        self.repository.customers.list(search).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    pub async fn update(&self, id: i64, data: &UpdateCustomer) -> AppResult<Customer> {
        self.repository.customers.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.customers.delete(id).await
    }
}
