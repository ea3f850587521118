//! Customer model and its request/response views

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Customer record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Create customer request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Update customer request
///
/// Fields left out of the request body are not touched. Fields carrying an
/// empty value are treated the same as absent ones (see the update operation).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Customer list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CustomerQuery {
    /// Case-insensitive substring matched against name, email and phone
    pub q: Option<String>,
}
