/// Primary key type shared by every table (BIGSERIAL on the Postgres side).
pub type DbId = i64;

/// The one timestamp type used across the workspace; columns are TIMESTAMPTZ
/// and everything is kept in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
