use sqlx::PgPool;
use uuid::Uuid;

/// Fetch the account-level privacy flag. `None` means no such user.
pub async fn is_private(pool: &PgPool, user_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT is_private
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
