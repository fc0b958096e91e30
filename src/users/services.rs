use sqlx::PgPool;
use tracing::error;

use crate::{error::AppError, users::dto::UserSummary};

/// Full snapshot of all users. No ordering or pagination is promised.
pub async fn get_all_users(db: &PgPool) -> Result<Vec<UserSummary>, AppError> {
    let users = sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, name, email, role, created_at, updated_at
        FROM users
        "#,
    )
    .fetch_all(db)
    .await
    .map_err(|e| {
        error!(error = %e, "listing users failed");
        AppError::Database(e)
    })?;
    Ok(users)
}
