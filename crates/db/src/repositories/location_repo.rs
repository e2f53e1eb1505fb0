//! Repository for the `locations` table.

use agrisense_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, UpdateLocation};

/// Column list for `locations` queries.
const COLUMNS: &str =
    "id, user_id, name, location_type, description, address, created_at, updated_at";

/// Provides CRUD operations for a user's locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateLocation,
    ) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (user_id, name, location_type, description, address)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.location_type)
            .bind(input.description.as_deref())
            .bind(input.address.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List a user's locations ordered by name.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM locations
             WHERE user_id = $1
             ORDER BY name"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a user's location. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if the row does not exist or belongs to another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = COALESCE($3, name),
                location_type = COALESCE($4, location_type),
                description = COALESCE($5, description),
                address = COALESCE($6, address),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.name.as_deref())
            .bind(input.location_type.as_deref())
            .bind(input.description.as_deref())
            .bind(input.address.as_deref())
            .fetch_optional(pool)
            .await
    }
}
