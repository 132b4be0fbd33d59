//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::error::DomainError;

/// Repository for Employee entities
///
/// The repository does not enforce email uniqueness; callers that need it
/// must check with `find_by_email` first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Find the first employee with both the given first and last name
    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DomainError>;

    /// List every employee
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Insert a new employee, assigning its ID
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Overwrite an existing employee row
    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError>;

    /// Delete an employee. Deleting a missing ID is a no-op.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DomainError>;
}
