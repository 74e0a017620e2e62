//! Visibility filtering for repost/like listings.
//!
//! Rows whose listed identity is blocked either way against the viewer are
//! filtered out of the page, never surfaced as an error. Pages are refilled
//! from the source until the requested count of visible rows is reached or
//! the listing is exhausted, and the continuation cursor is always taken
//! from the last visible row: cursor behavior must not leak a blocked
//! identity's presence.

use futures::future::try_join_all;
use uuid::Uuid;
use visibility_policy::{decide, listing_row_visible, Decision};

use crate::error::EngineResult;
use crate::models::{ListingCursor, ListingRow};
use crate::services::facts::load_visibility_facts;
use crate::services::visibility::VisibilityService;
use crate::store::FactStore;

/// Source fetch size per refill round.
const LISTING_BATCH: i64 = 50;

/// A visibility-filtered listing page.
///
/// `decision` is the viewer's decision on the underlying post; when it
/// denies, `rows` is empty and the caller maps the reason as usual.
#[derive(Debug, Clone)]
pub struct VisibleListing {
    pub decision: Decision,
    pub rows: Vec<ListingRow>,
    pub next_cursor: Option<ListingCursor>,
}

enum ListingKind {
    Reposts,
    Likes,
}

impl<S: FactStore> VisibilityService<S> {
    /// Page of users who reposted the post, filtered for the viewer.
    pub async fn visible_reposts(
        &self,
        post_id: Uuid,
        viewer_id: Option<Uuid>,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<VisibleListing> {
        self.visible_listing(ListingKind::Reposts, post_id, viewer_id, cursor, limit)
            .await
    }

    /// Page of users who liked the post, filtered for the viewer.
    pub async fn visible_likes(
        &self,
        post_id: Uuid,
        viewer_id: Option<Uuid>,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<VisibleListing> {
        self.visible_listing(ListingKind::Likes, post_id, viewer_id, cursor, limit)
            .await
    }

    async fn visible_listing(
        &self,
        kind: ListingKind,
        post_id: Uuid,
        viewer_id: Option<Uuid>,
        cursor: Option<ListingCursor>,
        limit: i64,
    ) -> EngineResult<VisibleListing> {
        let limit = limit.max(1);

        // The listing surface is gated by the post itself first.
        let facts = load_visibility_facts(&self.store, post_id, viewer_id).await?;
        let decision = decide(&facts);
        if !decision.can_view {
            return Ok(VisibleListing {
                decision,
                rows: Vec::new(),
                next_cursor: None,
            });
        }

        let mut rows: Vec<ListingRow> = Vec::new();
        let mut next_cursor: Option<ListingCursor> = None;
        let mut fetch_cursor = cursor;

        'fill: loop {
            let batch = match kind {
                ListingKind::Reposts => {
                    self.store
                        .reposts_page(post_id, fetch_cursor, LISTING_BATCH)
                        .await?
                }
                ListingKind::Likes => {
                    self.store
                        .likes_page(post_id, fetch_cursor, LISTING_BATCH)
                        .await?
                }
            };
            if batch.is_empty() {
                next_cursor = None;
                break;
            }
            let exhausted = (batch.len() as i64) < LISTING_BATCH;
            // Internal refill cursor advances over the raw source; only
            // cursors derived from visible rows are ever returned.
            fetch_cursor = batch.last().map(ListingCursor::from_row);

            let blocked = match viewer_id {
                None => vec![false; batch.len()],
                Some(viewer) => {
                    try_join_all(
                        batch
                            .iter()
                            .map(|row| self.store.is_blocked_either_way(viewer, row.user_id)),
                    )
                    .await?
                }
            };

            for (row, blocked_with_lister) in batch.into_iter().zip(blocked) {
                if !listing_row_visible(&decision, blocked_with_lister) {
                    continue;
                }
                next_cursor = Some(ListingCursor::from_row(&row));
                rows.push(row);
                if rows.len() as i64 >= limit {
                    break 'fill;
                }
            }
            if exhausted {
                next_cursor = None;
                break;
            }
        }

        tracing::debug!(
            %post_id,
            viewer_id = ?viewer_id,
            returned = rows.len(),
            has_more = next_cursor.is_some(),
            "listing filtered"
        );

        Ok(VisibleListing {
            decision,
            rows,
            next_cursor,
        })
    }
}
