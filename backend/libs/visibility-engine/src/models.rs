use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content row as the fact queries project it: identity, ownership, the
/// soft-delete/hidden flags and the raw visibility tag.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub is_deleted: bool,
    pub is_hidden: bool,
    pub visibility: String,
}

/// Share link row. Lifecycle is independent of the content's visibility but
/// gates access before any content rule is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShareLinkRecord {
    pub code: String,
    pub post_id: Uuid,
    pub is_disabled: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// One row of a repost/like listing: the listed identity plus the keyset
/// ordering columns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ListingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Keyset cursor over `(created_at, id)` descending. Cursors handed to
/// callers are derived from visible rows only, so a blocked identity's
/// presence can never leak through cursor behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl ListingCursor {
    pub fn from_row(row: &ListingRow) -> Self {
        Self {
            created_at: row.created_at,
            id: row.id,
        }
    }
}
