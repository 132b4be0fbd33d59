//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, Statement,
};

use crate::domain::entities::{Employee, EmployeeId, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::entity::employees;
use crate::error::DomainError;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, DomainError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT * FROM employees WHERE first_name = $1 AND last_name = $2 ORDER BY id LIMIT 1",
            [first_name.into(), last_name.into()],
        );

        let result = employees::Entity::find()
            .from_raw_sql(stmt)
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let model = employees::ActiveModel {
            id: NotSet,
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
        };

        let result = model.insert(&self.db).await?;

        Ok(result.into())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let result = employees::ActiveModel {
            id: Set(employee.id.0),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
        }
        .update(&self.db)
        .await?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DomainError> {
        employees::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(())
    }
}
