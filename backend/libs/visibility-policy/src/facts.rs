use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content-level access policy tag.
///
/// Stored as text; anything unrecognized parses to `Unknown` and fails
/// closed in the mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityMode {
    Public,
    Followers,
    Custom,
    Private,
    Unknown,
}

impl VisibilityMode {
    /// Parse the stored column value. Unrecognized values map to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "public" => VisibilityMode::Public,
            "followers" => VisibilityMode::Followers,
            "custom" => VisibilityMode::Custom,
            "private" => VisibilityMode::Private,
            _ => VisibilityMode::Unknown,
        }
    }
}

/// Per-viewer exception to the content's visibility mode.
///
/// At most one rule exists per (content, viewer) pair; it overrides the mode
/// switch but stays subordinate to the block/delete/hidden vetoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverrideRule {
    Include,
    Exclude,
}

impl OverrideRule {
    /// Parse the stored column value; unknown values are treated as no rule.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "include" => Some(OverrideRule::Include),
            "exclude" => Some(OverrideRule::Exclude),
            _ => None,
        }
    }
}

/// State of the content item itself, independent of any viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFacts {
    pub owner_id: Uuid,
    pub is_deleted: bool,
    pub is_hidden: bool,
    pub mode: VisibilityMode,
}

/// Relationship between a concrete viewer and the item's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerFacts {
    pub viewer_id: Uuid,
    /// Follow edge viewer -> owner.
    pub is_follower: bool,
    pub override_rule: Option<OverrideRule>,
    /// Block relation in either direction between viewer and owner.
    pub blocked_either_way: bool,
}

/// The full fact set the core policy consumes.
///
/// `item: None` is the null-item context the loader returns for a missing
/// row; `viewer: None` is an anonymous viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityFacts {
    pub item: Option<ItemFacts>,
    pub viewer: Option<ViewerFacts>,
}

impl VisibilityFacts {
    /// Null-item context: the item does not exist, all relational facts are
    /// absent by construction.
    pub fn absent() -> Self {
        Self {
            item: None,
            viewer: None,
        }
    }
}
