//! Core priority-ordered visibility decision.
//!
//! The ordering is fixed and first-match-wins:
//!
//! 1. item absent        -> deny NOT_FOUND
//! 2. item soft-deleted  -> deny DELETED
//! 3. item hidden        -> deny HIDDEN
//! 4. blocked either way -> deny BLOCKED
//!    (extension slot: variant gates run here, before the owner bypass)
//! 5. viewer is owner    -> allow OWNER
//! 6. override EXCLUDE   -> deny EXCLUDED
//! 7. override INCLUDE   -> allow OK
//! 8. mode switch        -> PUBLIC / FOLLOWERS / CUSTOM / PRIVATE / Unknown
//!
//! Variants (share creation, share links) reuse this skeleton through
//! `decide_with_gate` and `base_state_denial` instead of copying the switch,
//! so the base ordering cannot drift between call sites.

use crate::facts::{ItemFacts, OverrideRule, ViewerFacts, VisibilityFacts, VisibilityMode};
use crate::reason::{Decision, ReasonCode};

/// Steps 1-4: item-state and block vetoes shared by every policy variant.
///
/// Errs with the denial if one of the vetoes fires; otherwise hands back the
/// item for the steps below.
pub(crate) fn base_state_denial<'a>(
    item: Option<&'a ItemFacts>,
    viewer: Option<&ViewerFacts>,
) -> Result<&'a ItemFacts, Decision> {
    let item = match item {
        None => return Err(Decision::deny(ReasonCode::NotFound)),
        Some(item) => item,
    };
    if item.is_deleted {
        return Err(Decision::deny(ReasonCode::Deleted));
    }
    if item.is_hidden {
        return Err(Decision::deny(ReasonCode::Hidden));
    }
    if viewer.map(|v| v.blocked_either_way).unwrap_or(false) {
        return Err(Decision::deny(ReasonCode::Blocked));
    }
    Ok(item)
}

/// Core ordering with the single named extension slot (after the block veto,
/// before the owner bypass). The slot is the only place a variant may insert
/// an extra gate.
pub(crate) fn decide_with_gate(
    facts: &VisibilityFacts,
    after_block_gate: impl FnOnce() -> Option<Decision>,
) -> Decision {
    let item = match base_state_denial(facts.item.as_ref(), facts.viewer.as_ref()) {
        Ok(item) => item,
        Err(denied) => return denied,
    };

    if let Some(decision) = after_block_gate() {
        return decision;
    }

    if let Some(viewer) = &facts.viewer {
        if viewer.viewer_id == item.owner_id {
            return Decision::allow(ReasonCode::Owner);
        }
        match viewer.override_rule {
            Some(OverrideRule::Exclude) => return Decision::deny(ReasonCode::Excluded),
            Some(OverrideRule::Include) => return Decision::allow(ReasonCode::Ok),
            None => {}
        }
    }

    match item.mode {
        VisibilityMode::Public => Decision::allow(ReasonCode::Ok),
        VisibilityMode::Followers => {
            let is_follower = facts.viewer.as_ref().map(|v| v.is_follower).unwrap_or(false);
            if is_follower {
                Decision::allow(ReasonCode::Ok)
            } else {
                Decision::deny(ReasonCode::NotFollower)
            }
        }
        // CUSTOM requires an explicit INCLUDE rule; none matched above.
        VisibilityMode::Custom => Decision::deny(ReasonCode::NotInCustomList),
        VisibilityMode::Private => Decision::deny(ReasonCode::PrivatePost),
        VisibilityMode::Unknown => Decision::deny(ReasonCode::VisibilityDenied),
    }
}

/// Decide whether the viewer may see the content item.
///
/// Pure and side-effect-free; safe for unlimited concurrent use. Callable
/// with an anonymous viewer (`facts.viewer == None`), in which case only
/// `PUBLIC` content can allow.
pub fn decide(facts: &VisibilityFacts) -> Decision {
    decide_with_gate(facts, || None)
}

/// Row predicate for repost/like listings: the row stays in the page iff the
/// viewer may see the underlying content and no block exists either way
/// between viewer and the listed identity.
pub fn listing_row_visible(content_decision: &Decision, blocked_with_lister: bool) -> bool {
    content_decision.can_view && !blocked_with_lister
}
