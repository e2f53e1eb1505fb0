//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods on per-user data
//! take the owning `user_id` explicitly; a row belonging to another user
//! behaves exactly like a row that does not exist.

pub mod crop_repo;
pub mod location_repo;
pub mod sensor_data_repo;
pub mod sensor_repo;
pub mod user_repo;
pub mod variety_repo;

pub use crop_repo::CropRepo;
pub use location_repo::LocationRepo;
pub use sensor_data_repo::SensorDataRepo;
pub use sensor_repo::SensorRepo;
pub use user_repo::UserRepo;
pub use variety_repo::VarietyRepo;
