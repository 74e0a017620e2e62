//! External share-link resolution.
//!
//! The link row is fetched first; when no link exists the content is never
//! loaded, so a bad code cannot be used to probe content state. For a live
//! link the regular fact set is loaded and the link policy variant decides.

use chrono::Utc;
use uuid::Uuid;
use visibility_policy::{decide_share_link, Decision, LinkFacts, ShareLinkFacts};

use crate::error::EngineResult;
use crate::services::facts::load_visibility_facts;
use crate::services::visibility::VisibilityService;
use crate::store::FactStore;

impl<S: FactStore> VisibilityService<S> {
    /// Resolve an external share link for an optional viewer.
    pub async fn decide_share_link(
        &self,
        code: &str,
        viewer_id: Option<Uuid>,
    ) -> EngineResult<Decision> {
        let facts = match self.store.share_link(code).await? {
            None => ShareLinkFacts {
                link: None,
                item: None,
                viewer: None,
            },
            Some(record) => {
                let base = load_visibility_facts(&self.store, record.post_id, viewer_id).await?;
                ShareLinkFacts {
                    link: Some(LinkFacts {
                        is_disabled: record.is_disabled,
                        expires_at: record.expires_at,
                    }),
                    item: base.item,
                    viewer: base.viewer,
                }
            }
        };

        let decision = decide_share_link(&facts, Utc::now());
        tracing::debug!(
            code,
            viewer_id = ?viewer_id,
            reason = %decision.reason,
            "share-link resolved"
        );
        Ok(decision)
    }
}
