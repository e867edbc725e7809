use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileRow, ProfileUpdate, StoredProfile};

/// Profile document persistence: one document per user, merge-style writes,
/// last write wins per field. Carried in `AppState` as `Arc<dyn ProfileStore>`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load(&self, user_id: Uuid) -> Result<Option<StoredProfile>, AppError>;

    /// Merges the present fields of `update` into the user's document, creating it if needed.
    async fn merge(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<StoredProfile, AppError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<StoredProfile>, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT user_id, data, updated_at FROM user_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StoredProfile::try_from)
            .transpose()
            .map_err(|e| AppError::Internal(e.into()))
    }

    async fn merge(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<StoredProfile, AppError> {
        let patch = serde_json::to_value(update).map_err(|e| AppError::Internal(e.into()))?;

        // JSONB `||` overwrites only the keys present in the patch.
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO user_profiles (user_id, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id) DO UPDATE
                SET data = user_profiles.data || EXCLUDED.data,
                    updated_at = NOW()
            RETURNING user_id, data, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&patch)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved profile for user {user_id}");

        StoredProfile::try_from(row).map_err(|e| AppError::Internal(e.into()))
    }
}
