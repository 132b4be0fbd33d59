//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            employees: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an employee for testing
    pub fn with_employee(self, employee: Employee) -> Self {
        self.next_id.fetch_max(employee.id.0 + 1, Ordering::SeqCst);
        self.employees
            .write()
            .unwrap()
            .insert(employee.id, employee);
        self
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.values().find(|e| e.email == email).cloned())
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.values().cloned().collect())
    }

    async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, DomainError> {
        let employee = Employee {
            id: EmployeeId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            first_name: new_employee.first_name.clone(),
            last_name: new_employee.last_name.clone(),
            email: new_employee.email.clone(),
        };

        let mut employees = self.employees.write().unwrap();
        employees.insert(employee.id, employee.clone());

        Ok(employee)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();
        match employees.get_mut(&employee.id) {
            Some(stored) => {
                *stored = employee.clone();
                Ok(employee.clone())
            }
            None => Err(DomainError::Database(format!(
                "Employee {} was not updated",
                employee.id
            ))),
        }
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DomainError> {
        let mut employees = self.employees.write().unwrap();
        employees.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_employee, test_employee_with};

    #[tokio::test]
    async fn with_employee_advances_next_id() {
        let repo = InMemoryEmployeeRepository::new().with_employee(test_employee_with(7, "a@b.c"));

        let created = repo
            .create(&new_employee("Fan", "Jups", "fjk@gmail.com"))
            .await
            .unwrap();

        assert_eq!(created.id, EmployeeId(8));
    }

    #[tokio::test]
    async fn save_missing_row_fails() {
        let repo = InMemoryEmployeeRepository::new();

        let result = repo.save(&test_employee_with(3, "a@b.c")).await;

        assert!(matches!(result, Err(DomainError::Database(_))));
    }
}
