//! Account-level privacy resolver.
//!
//! Orthogonal to any single item's visibility mode: this gates whether a
//! viewer may browse an account's content listing surface at all. Individual
//! items are still evaluated per item by the core policy afterwards.

use serde::{Deserialize, Serialize};

/// Browsing scope granted by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountScope {
    Public,
    #[serde(rename = "self")]
    SelfView,
}

/// Outcome of the account-surface gate. `scope` is present only on allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountVisibility {
    pub can_view: bool,
    pub scope: Option<AccountScope>,
}

impl AccountVisibility {
    pub fn allow(scope: AccountScope) -> Self {
        Self {
            can_view: true,
            scope: Some(scope),
        }
    }

    pub fn deny() -> Self {
        Self {
            can_view: false,
            scope: None,
        }
    }
}

/// Facts for one account-surface evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountFacts {
    /// Viewer and target are the same identity.
    pub is_self: bool,
    pub is_private: bool,
    /// An authenticated viewer is present at all.
    pub viewer_present: bool,
    /// Follow edge viewer -> target.
    pub is_follower: bool,
}

/// Resolve whether the viewer may browse the target account's listing
/// surface. Self-view always allows; a public account allows everyone; a
/// private account requires an authenticated follower, who then browses with
/// self-equivalent scope (item-level rules still apply per item).
pub fn resolve_account(facts: &AccountFacts) -> AccountVisibility {
    if facts.is_self {
        return AccountVisibility::allow(AccountScope::SelfView);
    }
    if !facts.is_private {
        return AccountVisibility::allow(AccountScope::Public);
    }
    if facts.viewer_present && facts.is_follower {
        return AccountVisibility::allow(AccountScope::SelfView);
    }
    AccountVisibility::deny()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_view_always_allows() {
        let facts = AccountFacts {
            is_self: true,
            is_private: true,
            viewer_present: true,
            is_follower: false,
        };
        assert_eq!(
            resolve_account(&facts),
            AccountVisibility::allow(AccountScope::SelfView)
        );
    }

    #[test]
    fn public_account_allows_anyone() {
        for (viewer_present, is_follower) in [(false, false), (true, false), (true, true)] {
            let facts = AccountFacts {
                is_self: false,
                is_private: false,
                viewer_present,
                is_follower,
            };
            assert_eq!(
                resolve_account(&facts),
                AccountVisibility::allow(AccountScope::Public)
            );
        }
    }

    #[test]
    fn private_account_denies_anonymous() {
        let facts = AccountFacts {
            is_self: false,
            is_private: true,
            viewer_present: false,
            is_follower: false,
        };
        assert_eq!(resolve_account(&facts), AccountVisibility::deny());
    }

    #[test]
    fn private_account_denies_non_follower() {
        let facts = AccountFacts {
            is_self: false,
            is_private: true,
            viewer_present: true,
            is_follower: false,
        };
        assert_eq!(resolve_account(&facts), AccountVisibility::deny());
    }

    #[test]
    fn private_account_allows_follower_with_self_scope() {
        let facts = AccountFacts {
            is_self: false,
            is_private: true,
            viewer_present: true,
            is_follower: true,
        };
        assert_eq!(
            resolve_account(&facts),
            AccountVisibility::allow(AccountScope::SelfView)
        );
    }

    #[test]
    fn scope_serializes_to_public_or_self() {
        assert_eq!(
            serde_json::to_string(&AccountScope::Public).unwrap(),
            "\"public\""
        );
        assert_eq!(
            serde_json::to_string(&AccountScope::SelfView).unwrap(),
            "\"self\""
        );
    }
}
