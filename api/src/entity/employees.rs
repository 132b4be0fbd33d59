//! `employees` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Employee, EmployeeId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    // No unique index; see `EmployeeService::create`.
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        Self {
            id: EmployeeId(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
        }
    }
}
