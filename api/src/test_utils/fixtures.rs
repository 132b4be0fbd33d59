//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};

/// Create a persisted test employee with ID 1
pub fn test_employee() -> Employee {
    Employee {
        id: EmployeeId(1),
        first_name: "Fan".to_string(),
        last_name: "Jups".to_string(),
        email: "fjk@gmail.com".to_string(),
    }
}

/// Create a persisted test employee with a specific ID and email
pub fn test_employee_with(id: i64, email: &str) -> Employee {
    Employee {
        id: EmployeeId(id),
        first_name: format!("first-{}", id),
        last_name: format!("last-{}", id),
        email: email.to_string(),
    }
}

/// Create a create-candidate
pub fn new_employee(first_name: &str, last_name: &str, email: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
    }
}
