//! Employee domain entity
//!
//! The only resource exposed by the API.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted employee
///
/// Email addresses are unique across employees at creation time. The table
/// itself carries no unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Overwrite all mutable fields, keeping the identifier
    pub fn apply(&mut self, changes: EmployeeChanges) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.email = changes.email;
    }
}

/// Data needed to create a new employee
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Replacement values for an existing employee
///
/// Every field is overwritten; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<NewEmployee> for EmployeeChanges {
    fn from(employee: NewEmployee) -> Self {
        Self {
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
        }
    }
}
