//! Test utilities
//!
//! In-memory repository and test fixtures for unit and HTTP tests.
//!
//! The in-memory repository behaves like the real table (IDs assigned on
//! insert, no unique constraint on email). For interaction checks such as
//! "insert is never called", use `MockEmployeeRepository` from mockall instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
