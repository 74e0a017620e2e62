//! Relationship fact loader.
//!
//! Gathers everything the core policy needs for one (content, viewer) pair.
//! The content row is fetched first since the owner id gates the relational
//! reads; the relational reads themselves are independent of each other and
//! are issued concurrently, so total latency is bounded by the slowest
//! single read. The loader never mutates state and never errors on "not
//! found": absence is a reportable fact.

use uuid::Uuid;
use visibility_policy::{ItemFacts, ViewerFacts, VisibilityFacts, VisibilityMode};

use crate::error::EngineResult;
use crate::store::FactStore;

/// Load the fact set for one (content, viewer) pair.
///
/// Short-circuits to the null-item context when the row is missing. For the
/// owner no relational reads are issued: self-blocks and self-rules cannot
/// exist, and the follow edge is irrelevant above the owner bypass.
pub async fn load_visibility_facts<S: FactStore>(
    store: &S,
    content_id: Uuid,
    viewer_id: Option<Uuid>,
) -> EngineResult<VisibilityFacts> {
    let record = match store.get_content(content_id).await? {
        None => return Ok(VisibilityFacts::absent()),
        Some(record) => record,
    };

    let item = ItemFacts {
        owner_id: record.owner_id,
        is_deleted: record.is_deleted,
        is_hidden: record.is_hidden,
        mode: VisibilityMode::parse(&record.visibility),
    };

    let viewer = match viewer_id {
        None => None,
        Some(viewer_id) if viewer_id == item.owner_id => Some(ViewerFacts {
            viewer_id,
            is_follower: false,
            override_rule: None,
            blocked_either_way: false,
        }),
        Some(viewer_id) => {
            let (is_follower, override_rule, blocked_either_way) = tokio::try_join!(
                store.is_following(viewer_id, item.owner_id),
                store.override_rule(content_id, viewer_id),
                store.is_blocked_either_way(viewer_id, item.owner_id),
            )?;
            Some(ViewerFacts {
                viewer_id,
                is_follower,
                override_rule,
                blocked_either_way,
            })
        }
    };

    Ok(VisibilityFacts {
        item: Some(item),
        viewer,
    })
}
