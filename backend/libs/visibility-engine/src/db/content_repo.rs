use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ContentRecord;

/// Fetch the content row with its state flags.
///
/// Soft-deleted rows are returned with `is_deleted = true` rather than
/// filtered out: the policy distinguishes DELETED from NOT_FOUND, so the
/// query must not collapse the two.
pub async fn get_content(
    pool: &PgPool,
    content_id: Uuid,
) -> Result<Option<ContentRecord>, sqlx::Error> {
    sqlx::query_as::<_, ContentRecord>(
        r#"
        SELECT id, user_id AS owner_id,
               (soft_delete IS NOT NULL) AS is_deleted,
               is_hidden, visibility
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await
}
