//! Employee service
//!
//! Create, read, update and delete for employees. The only business rule is
//! that two employees may not be created with the same email.

use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeChanges, EmployeeId, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::error::{AppError, DomainError};

/// Service for managing employees
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    employees: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(employees: Arc<ER>) -> Self {
        Self { employees }
    }

    /// Create a new employee
    ///
    /// Fails with `DomainError::Conflict` when an employee with the same email
    /// already exists; nothing is written in that case.
    ///
    /// The lookup and the insert are separate statements, so two concurrent
    /// creates with one email can both succeed.
    pub async fn create(&self, candidate: &NewEmployee) -> Result<Employee, AppError> {
        if self
            .employees
            .find_by_email(&candidate.email)
            .await?
            .is_some()
        {
            tracing::warn!(email = %candidate.email, "Rejected employee with duplicate email");
            return Err(AppError::Domain(DomainError::Conflict(format!(
                "Employee already exists with given email: {}",
                candidate.email
            ))));
        }

        let employee = self.employees.create(candidate).await?;
        tracing::info!(employee_id = %employee.id, "Created employee");

        Ok(employee)
    }

    /// List all employees
    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.find_all().await?)
    }

    /// Find an employee by ID
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, AppError> {
        Ok(self.employees.find_by_id(id).await?)
    }

    /// Find an employee by first and last name
    pub async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, AppError> {
        Ok(self
            .employees
            .find_by_full_name(first_name, last_name)
            .await?)
    }

    /// Overwrite an employee previously loaded with `get_by_id`
    ///
    /// Email uniqueness is not re-checked here.
    pub async fn update(
        &self,
        mut existing: Employee,
        changes: EmployeeChanges,
    ) -> Result<Employee, AppError> {
        existing.apply(changes);

        let employee = self.employees.save(&existing).await?;
        tracing::info!(employee_id = %employee.id, "Updated employee");

        Ok(employee)
    }

    /// Delete an employee. Missing IDs are not an error.
    pub async fn delete(&self, id: EmployeeId) -> Result<(), AppError> {
        self.employees.delete_by_id(id).await?;
        tracing::info!(employee_id = %id, "Deleted employee");

        Ok(())
    }
}
