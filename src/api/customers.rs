//! Customer API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
};

/// Delete acknowledgment body
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub detail: String,
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 200, description = "Customer created", body = Customer),
        (status = 422, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn create_customer(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateCustomer>, AppError>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.create(&data).await?;
    Ok(Json(customer))
}

/// List customers, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    params(CustomerQuery),
    responses(
        (status = 200, description = "Customer list", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.list(query.q.as_deref()).await?;
    Ok(Json(customers))
}

/// Get a customer by id
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "No customer with this id", body = ErrorResponse)
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get_by_id(id).await?;
    Ok(Json(customer))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "No customer with this id", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateCustomer>, AppError>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.update(id, &data).await?;
    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted", body = DeleteResponse),
        (status = 404, description = "No customer with this id", body = ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.customers.delete(id).await?;
    Ok(Json(DeleteResponse {
        detail: "deleted successfully".to_string(),
    }))
}
