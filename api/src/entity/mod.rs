//! SeaORM entities
//!
//! Table mappings used by the PostgreSQL adapters. These are separate from the
//! domain entities in `domain::entities`.

pub mod employees;
