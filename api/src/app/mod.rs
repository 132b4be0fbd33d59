//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod employee_service;

pub use employee_service::EmployeeService;
