//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod employees;

pub use employees::{
    create_employee, delete_employee, get_employee, list_employees, search_employees,
    update_employee,
};
