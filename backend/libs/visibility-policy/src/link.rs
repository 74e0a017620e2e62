//! External share-link policy variant.
//!
//! Link lifecycle is evaluated strictly before any content rule: a dead link
//! never leaks whether the target still exists. After the link is confirmed
//! active, the shared item-state/block prefix runs, then a reduced mode
//! switch: `CUSTOM` always denies (a link carries no per-viewer allow-list)
//! and `PRIVATE`/unknown deny with `ACCOUNT_PRIVATE`, a distinct user-facing
//! message. There is no owner bypass: a link is a public artifact, not an
//! owner session.

use chrono::{DateTime, Utc};

use crate::decision::base_state_denial;
use crate::facts::{ItemFacts, ViewerFacts, VisibilityMode};
use crate::reason::{Decision, ReasonCode};

/// Lifecycle state of the share link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkFacts {
    pub is_disabled: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Fact set for resolving an external share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinkFacts {
    /// `None` when no link exists for the requested code.
    pub link: Option<LinkFacts>,
    pub item: Option<ItemFacts>,
    pub viewer: Option<ViewerFacts>,
}

/// Resolve link access at instant `now`.
///
/// The clock is an argument so the function stays pure; the engine passes
/// `Utc::now()`.
pub fn decide_share_link(facts: &ShareLinkFacts, now: DateTime<Utc>) -> Decision {
    let link = match &facts.link {
        None => return Decision::deny(ReasonCode::NotFound),
        Some(link) => link,
    };
    if link.is_disabled {
        return Decision::deny(ReasonCode::LinkDisabled);
    }
    if link.expires_at.map(|at| at <= now).unwrap_or(false) {
        return Decision::deny(ReasonCode::LinkExpired);
    }

    let item = match base_state_denial(facts.item.as_ref(), facts.viewer.as_ref()) {
        Ok(item) => item,
        Err(denied) => return denied,
    };

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
        // No override concept for link access, so CUSTOM can never allow.
        VisibilityMode::Custom => Decision::deny(ReasonCode::VisibilityDenied),
        VisibilityMode::Private | VisibilityMode::Unknown => {
            Decision::deny(ReasonCode::AccountPrivate)
        }
    }
}
