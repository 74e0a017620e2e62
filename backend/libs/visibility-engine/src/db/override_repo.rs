use sqlx::PgPool;
use uuid::Uuid;

/// Fetch the raw override rule for a (content, viewer) pair, if any.
///
/// At most one row exists per pair; the stored value is parsed by the
/// policy crate so an unrecognized rule degrades to "no rule" instead of
/// failing the load.
pub async fn get_rule(
    pool: &PgPool,
    content_id: Uuid,
    viewer_id: Uuid,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT rule
        FROM post_visibility_rules
        WHERE post_id = $1 AND viewer_id = $2
        "#,
    )
    .bind(content_id)
    .bind(viewer_id)
    .fetch_optional(pool)
    .await
}
