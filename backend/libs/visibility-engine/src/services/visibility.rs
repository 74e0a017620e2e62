//! The decision service consumed by every content-read call site.
//!
//! Thin orchestration only: load facts through the store, hand them to the
//! pure policy, log the outcome. Secondary effects triggered by an allow
//! (notifications, audit) belong to the call site and are best-effort there;
//! nothing in here may fail the decision on their behalf.

use uuid::Uuid;
use visibility_policy::{decide, decide_share_create, ChatFacts, Decision, ShareCreateFacts};

use crate::error::EngineResult;
use crate::services::facts::load_visibility_facts;
use crate::store::FactStore;

/// Decision oracle over a fact store. Pure orchestration, no shared mutable
/// state; one instance serves unlimited concurrent calls.
#[derive(Clone)]
pub struct VisibilityService<S> {
    pub(crate) store: S,
}

impl<S: FactStore> VisibilityService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decide whether `viewer_id` (or an anonymous viewer) may see the item.
    pub async fn decide_visibility(
        &self,
        content_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> EngineResult<Decision> {
        let facts = load_visibility_facts(&self.store, content_id, viewer_id).await?;
        let decision = decide(&facts);
        tracing::debug!(
            %content_id,
            viewer_id = ?viewer_id,
            reason = %decision.reason,
            can_view = decision.can_view,
            "visibility decided"
        );
        Ok(decision)
    }

    /// Decide whether `actor_id` may create a share of the item, optionally
    /// into a conversation. The membership read runs concurrently with the
    /// base fact load; the two are independent.
    pub async fn decide_share_create(
        &self,
        content_id: Uuid,
        actor_id: Uuid,
        target_chat_id: Option<Uuid>,
    ) -> EngineResult<Decision> {
        let facts = match target_chat_id {
            None => ShareCreateFacts {
                base: load_visibility_facts(&self.store, content_id, Some(actor_id)).await?,
                chat: None,
            },
            Some(chat_id) => {
                let (base, is_member) = tokio::try_join!(
                    load_visibility_facts(&self.store, content_id, Some(actor_id)),
                    self.store.is_chat_member(chat_id, actor_id),
                )?;
                ShareCreateFacts {
                    base,
                    chat: Some(ChatFacts { is_member }),
                }
            }
        };
        let decision = decide_share_create(&facts);
        tracing::debug!(
            %content_id,
            %actor_id,
            chat_id = ?target_chat_id,
            reason = %decision.reason,
            "share-create decided"
        );
        Ok(decision)
    }

    /// Bidirectional block predicate, re-exposed for call sites that gate on
    /// relationships alone (messaging, comments, tagging, mention lookups).
    pub async fn is_blocked_either_way(&self, a: Uuid, b: Uuid) -> EngineResult<bool> {
        self.store.is_blocked_either_way(a, b).await
    }
}
