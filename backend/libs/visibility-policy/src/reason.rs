use serde::{Deserialize, Serialize};

/// Stable reason codes explaining a visibility decision.
///
/// Callers map these to transport outcomes: `NotFound` to a 404-equivalent,
/// `LinkDisabled`/`LinkExpired` to a 410-equivalent, every other deny to a
/// 403-equivalent. `Ok` and `Owner` are the only allow reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Ok,
    Owner,
    NotFound,
    Deleted,
    Hidden,
    Blocked,
    Excluded,
    NotFollower,
    NotInCustomList,
    PrivatePost,
    VisibilityDenied,
    NotChatMember,
    LinkDisabled,
    LinkExpired,
    AccountPrivate,
}

impl ReasonCode {
    /// Wire/log form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Ok => "OK",
            ReasonCode::Owner => "OWNER",
            ReasonCode::NotFound => "NOT_FOUND",
            ReasonCode::Deleted => "DELETED",
            ReasonCode::Hidden => "HIDDEN",
            ReasonCode::Blocked => "BLOCKED",
            ReasonCode::Excluded => "EXCLUDED",
            ReasonCode::NotFollower => "NOT_FOLLOWER",
            ReasonCode::NotInCustomList => "NOT_IN_CUSTOM_LIST",
            ReasonCode::PrivatePost => "PRIVATE_POST",
            ReasonCode::VisibilityDenied => "VISIBILITY_DENIED",
            ReasonCode::NotChatMember => "NOT_CHAT_MEMBER",
            ReasonCode::LinkDisabled => "LINK_DISABLED",
            ReasonCode::LinkExpired => "LINK_EXPIRED",
            ReasonCode::AccountPrivate => "ACCOUNT_PRIVATE",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a visibility evaluation.
///
/// "Cannot view" is a normal return value, never an error; infrastructure
/// failures during fact loading surface separately in `visibility-engine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub can_view: bool,
    pub reason: ReasonCode,
}

impl Decision {
    pub fn allow(reason: ReasonCode) -> Self {
        Self {
            can_view: true,
            reason,
        }
    }

    pub fn deny(reason: ReasonCode) -> Self {
        Self {
            can_view: false,
            reason,
        }
    }
}
