//! Profile persistence against the external Postgres store. One row per
//! user holding the serialized canonical profile; no engine, no schema
//! management beyond the migration file, just row mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::error::PipelineError;
use crate::models::profile::CanonicalProfile;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub profile: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Writes the serialized profile for `user_id`, replacing any existing row.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    profile: &CanonicalProfile,
) -> Result<(), PipelineError> {
    let value =
        serde_json::to_value(profile).map_err(|e| PipelineError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO profiles (user_id, profile, updated_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (user_id)
        DO UPDATE SET profile = EXCLUDED.profile, updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(&value)
    .execute(pool)
    .await?;

    info!("Saved profile for user {user_id}");
    Ok(())
}

/// Loads the profile for `user_id`, or `None` when the user has never saved
/// one.
pub async fn fetch_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CanonicalProfile>, PipelineError> {
    let row: Option<ProfileRow> =
        sqlx::query_as("SELECT user_id, profile, updated_at FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    row.map(|row| serde_json::from_value(row.profile))
        .transpose()
        .map_err(|e| PipelineError::Internal(e.into()))
}
