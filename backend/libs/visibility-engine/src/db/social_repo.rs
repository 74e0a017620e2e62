/// Follow-edge and block-relation fact queries
use sqlx::PgPool;
use uuid::Uuid;

/// Check if user A follows user B.
pub async fn is_following(
    pool: &PgPool,
    follower_id: Uuid,
    followed_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM follows
            WHERE follower_id = $1 AND followed_id = $2
        )
        "#,
    )
    .bind(follower_id)
    .bind(followed_id)
    .fetch_one(pool)
    .await
}

/// Check for a block relation in either direction between two identities.
///
/// A block is a unilateral declaration, but the operative predicate is
/// always bidirectional; nothing in the engine ever checks one direction
/// alone.
pub async fn is_blocked_either_way(pool: &PgPool, a: Uuid, b: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM blocks
            WHERE (blocker_id = $1 AND blocked_id = $2)
               OR (blocker_id = $2 AND blocked_id = $1)
        )
        "#,
    )
    .bind(a)
    .bind(b)
    .fetch_one(pool)
    .await
}
