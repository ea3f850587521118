//! Repository layer for database operations

pub mod customers;

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub customers: customers::CustomersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            customers: customers::CustomersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create any missing tables. Idempotent, safe to run on every startup.
    pub async fn init_schema(&self) -> AppResult<()> {
        self.customers.init_schema().await
    }

    /// Connectivity probe used by the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
