use sqlx::PgPool;

use crate::models::ShareLinkRecord;

/// Fetch a share link by its public code.
pub async fn find_by_code(
    pool: &PgPool,
    code: &str,
) -> Result<Option<ShareLinkRecord>, sqlx::Error> {
    sqlx::query_as::<_, ShareLinkRecord>(
        r#"
        SELECT code, post_id, is_disabled, expires_at
        FROM post_share_links
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}
