//! Share-creation policy variant.
//!
//! Same priority skeleton as the core decision, with one extra gate in the
//! after-block slot: sharing into a conversation requires membership, and
//! the gate applies to the content owner too.

use crate::decision::decide_with_gate;
use crate::facts::VisibilityFacts;
use crate::reason::{Decision, ReasonCode};

/// Membership of the share actor in the target conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatFacts {
    pub is_member: bool,
}

/// Fact set for a share-create evaluation. `chat: None` means the share
/// target is not a conversation and no membership gate applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCreateFacts {
    pub base: VisibilityFacts,
    pub chat: Option<ChatFacts>,
}

/// Decide whether the actor may create the share.
///
/// Identical to the core ordering except for the chat-membership gate, which
/// runs after the block veto and before the owner bypass: ownership does not
/// excuse a non-member from the gate.
pub fn decide_share_create(facts: &ShareCreateFacts) -> Decision {
    decide_with_gate(&facts.base, || match facts.chat {
        Some(chat) if !chat.is_member => Some(Decision::deny(ReasonCode::NotChatMember)),
        _ => None,
    })
}
