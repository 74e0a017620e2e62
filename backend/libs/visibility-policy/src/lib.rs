//! Content visibility decision policy
//!
//! The single source of truth for "may this viewer see this content item".
//! Every read path on the platform (feed hydration, single-post fetch, share
//! creation, external share links, repost/like listings) goes through the
//! priority-ordered policy in this crate instead of re-implementing its own
//! switch.
//!
//! Everything here is pure: the policy operates on already-loaded facts and
//! performs no I/O. Fact loading lives in `visibility-engine`, which keeps
//! the policy unit-testable without a database.
//!
//! # Modules
//!
//! - `reason`: decision outcome and the stable reason codes callers map to
//!   transport responses
//! - `facts`: the fact set the policies consume
//! - `decision`: the core priority-ordered policy and its extension slot
//! - `share`: share-creation variant (chat membership gate)
//! - `link`: external share-link variant (link lifecycle gates)
//! - `account`: account-level privacy resolver (listing-surface gate)

pub mod account;
pub mod decision;
pub mod facts;
pub mod link;
pub mod reason;
pub mod share;

pub use account::{resolve_account, AccountFacts, AccountScope, AccountVisibility};
pub use decision::{decide, listing_row_visible};
pub use facts::{ItemFacts, OverrideRule, ViewerFacts, VisibilityFacts, VisibilityMode};
pub use link::{decide_share_link, LinkFacts, ShareLinkFacts};
pub use reason::{Decision, ReasonCode};
pub use share::{decide_share_create, ChatFacts, ShareCreateFacts};
