//! Table creation for fresh databases

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::employees;
use crate::error::DomainError;

/// Create the `employees` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(employees::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    tracing::debug!("employees table ready");

    Ok(())
}
