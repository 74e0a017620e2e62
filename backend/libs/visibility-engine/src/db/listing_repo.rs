/// Paginated repost/like listing queries
///
/// Both listings page by keyset over `(created_at, id)` descending. The
/// engine refills pages after visibility filtering, so these queries accept
/// an optional continuation cursor rather than an offset.
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ListingCursor, ListingRow};

/// Get a page of reposts of a post.
pub async fn reposts_page(
    pool: &PgPool,
    post_id: Uuid,
    cursor: Option<ListingCursor>,
    limit: i64,
) -> Result<Vec<ListingRow>, sqlx::Error> {
    sqlx::query_as::<_, ListingRow>(
        r#"
        SELECT id, user_id, created_at
        FROM post_reposts
        WHERE post_id = $1
          AND ($2::timestamptz IS NULL OR (created_at, id) < ($2::timestamptz, $3::uuid))
        ORDER BY created_at DESC, id DESC
        LIMIT $4
        "#,
    )
    .bind(post_id)
    .bind(cursor.map(|c| c.created_at))
    .bind(cursor.map(|c| c.id))
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Get a page of likes on a post.
pub async fn likes_page(
    pool: &PgPool,
    post_id: Uuid,
    cursor: Option<ListingCursor>,
    limit: i64,
) -> Result<Vec<ListingRow>, sqlx::Error> {
    sqlx::query_as::<_, ListingRow>(
        r#"
        SELECT id, user_id, created_at
        FROM likes
        WHERE post_id = $1
          AND ($2::timestamptz IS NULL OR (created_at, id) < ($2::timestamptz, $3::uuid))
        ORDER BY created_at DESC, id DESC
        LIMIT $4
        "#,
    )
    .bind(post_id)
    .bind(cursor.map(|c| c.created_at))
    .bind(cursor.map(|c| c.id))
    .bind(limit)
    .fetch_all(pool)
    .await
}
