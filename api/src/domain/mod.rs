//! Domain layer
//!
//! The employee model and the storage port it is persisted through.
//! - `entities`: the `Employee` record and its create/update inputs
//! - `ports`: the `EmployeeRepository` trait implemented by adapters

pub mod entities;
pub mod ports;
