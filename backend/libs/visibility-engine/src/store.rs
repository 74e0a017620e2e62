//! The fact-store seam between decision orchestration and storage.
//!
//! All reads the decision services need sit behind one trait, so the loader
//! and services are testable with a mocked store and the full query set
//! stays visible in a single contract.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use visibility_policy::OverrideRule;

use crate::db;
use crate::error::EngineResult;
use crate::models::{ContentRecord, ListingCursor, ListingRow, ShareLinkRecord};

/// Read-only fact source for the visibility decision services.
///
/// Implementations never mutate state and never treat "not found" as an
/// error; absence is a reportable fact. Errors are reserved for
/// infrastructure failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactStore: Send + Sync {
    async fn get_content(&self, content_id: Uuid) -> EngineResult<Option<ContentRecord>>;

    async fn is_following(&self, follower_id: Uuid, followed_id: Uuid) -> EngineResult<bool>;

    async fn override_rule(
        &self,
        content_id: Uuid,
        viewer_id: Uuid,
    ) -> EngineResult<Option<OverrideRule>>;

    async fn is_blocked_either_way(&self, a: Uuid, b: Uuid) -> EngineResult<bool>;

    async fn is_chat_member(&self, conversation_id: Uuid, user_id: Uuid) -> EngineResult<bool>;

    async fn share_link(&self, code: &str) -> EngineResult<Option<ShareLinkRecord>>;

    /// Account privacy flag; `None` means no such account.
    async fn account_is_private(&self, user_id: Uuid) -> EngineResult<Option<bool>>;

    async fn reposts_page(
        &self,
        post_id: Uuid,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<Vec<ListingRow>>;

    async fn likes_page(
        &self,
        post_id: Uuid,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<Vec<ListingRow>>;
}

/// Postgres-backed fact store over the fixed queries in `db`.
#[derive(Clone)]
pub struct PgFactStore {
    pool: PgPool,
}

impl PgFactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FactStore for PgFactStore {
    async fn get_content(&self, content_id: Uuid) -> EngineResult<Option<ContentRecord>> {
        Ok(db::content_repo::get_content(&self.pool, content_id).await?)
    }

    async fn is_following(&self, follower_id: Uuid, followed_id: Uuid) -> EngineResult<bool> {
        Ok(db::social_repo::is_following(&self.pool, follower_id, followed_id).await?)
    }

    async fn override_rule(
        &self,
        content_id: Uuid,
        viewer_id: Uuid,
    ) -> EngineResult<Option<OverrideRule>> {
        let raw = db::override_repo::get_rule(&self.pool, content_id, viewer_id).await?;
        Ok(raw.as_deref().and_then(OverrideRule::parse))
    }

    async fn is_blocked_either_way(&self, a: Uuid, b: Uuid) -> EngineResult<bool> {
        Ok(db::social_repo::is_blocked_either_way(&self.pool, a, b).await?)
    }

    async fn is_chat_member(&self, conversation_id: Uuid, user_id: Uuid) -> EngineResult<bool> {
        Ok(db::chat_repo::is_member(&self.pool, conversation_id, user_id).await?)
    }

    async fn share_link(&self, code: &str) -> EngineResult<Option<ShareLinkRecord>> {
        Ok(db::share_link_repo::find_by_code(&self.pool, code).await?)
    }

    async fn account_is_private(&self, user_id: Uuid) -> EngineResult<Option<bool>> {
        Ok(db::account_repo::is_private(&self.pool, user_id).await?)
    }

    async fn reposts_page(
        &self,
        post_id: Uuid,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<Vec<ListingRow>> {
        Ok(db::listing_repo::reposts_page(&self.pool, post_id, cursor, limit).await?)
    }

    async fn likes_page(
        &self,
        post_id: Uuid,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<Vec<ListingRow>> {
        Ok(db::listing_repo::likes_page(&self.pool, post_id, cursor, limit).await?)
    }
}
