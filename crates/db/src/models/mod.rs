//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! List and detail queries that join in referenced names get their own
//! `*With*` row structs rather than nesting.

pub mod crop;
pub mod location;
pub mod sensor;
pub mod sensor_data;
pub mod user;
pub mod variety;
