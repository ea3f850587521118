//! Data models for the Clientele service

pub mod customer;

// Re-export commonly used types
pub use customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer};
