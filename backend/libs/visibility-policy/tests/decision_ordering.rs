//! Cross-variant ordering consistency.
//!
//! The core decision, the share-create variant and the share-link variant
//! (once the link is active) must agree on the shared priority prefix:
//! not-found, deleted, hidden and blocked produce identical reasons for
//! identical fact sets. A drift between variants here is a privacy bug, so
//! this is pinned as its own test target.

use chrono::Utc;
use uuid::Uuid;
use visibility_policy::{
    decide, decide_share_create, decide_share_link, ChatFacts, ItemFacts, LinkFacts, ReasonCode,
    ShareCreateFacts, ShareLinkFacts, ViewerFacts, VisibilityFacts, VisibilityMode,
};

fn viewer(blocked: bool) -> ViewerFacts {
    ViewerFacts {
        viewer_id: Uuid::new_v4(),
        is_follower: false,
        override_rule: None,
        blocked_either_way: blocked,
    }
}

fn active_link() -> LinkFacts {
    LinkFacts {
        is_disabled: false,
        expires_at: None,
    }
}

/// Fact sets that must trip the shared prefix, with the expected reason.
fn prefix_cases() -> Vec<(VisibilityFacts, ReasonCode)> {
    let public = ItemFacts {
        owner_id: Uuid::new_v4(),
        is_deleted: false,
        is_hidden: false,
        mode: VisibilityMode::Public,
    };
    let deleted = ItemFacts {
        is_deleted: true,
        ..public.clone()
    };
    let hidden = ItemFacts {
        is_hidden: true,
        ..public.clone()
    };

    vec![
        (
            VisibilityFacts {
                item: None,
                viewer: None,
            },
            ReasonCode::NotFound,
        ),
        (
            VisibilityFacts {
                item: Some(deleted),
                viewer: Some(viewer(false)),
            },
            ReasonCode::Deleted,
        ),
        (
            VisibilityFacts {
                item: Some(hidden),
                viewer: Some(viewer(false)),
            },
            ReasonCode::Hidden,
        ),
        (
            VisibilityFacts {
                item: Some(public),
                viewer: Some(viewer(true)),
            },
            ReasonCode::Blocked,
        ),
    ]
}

#[test]
fn core_and_share_create_agree_on_the_prefix() {
    for (facts, expected) in prefix_cases() {
        let core = decide(&facts);
        assert_eq!(core.reason, expected);
        assert!(!core.can_view);

        // With and without a chat target: the prefix outranks the gate.
        for chat in [None, Some(ChatFacts { is_member: false })] {
            let share = decide_share_create(&ShareCreateFacts {
                base: facts.clone(),
                chat,
            });
            assert_eq!(share, core, "share-create drifted for {expected:?}");
        }
    }
}

#[test]
fn active_share_link_agrees_on_the_prefix() {
    for (facts, expected) in prefix_cases() {
        let link = decide_share_link(
            &ShareLinkFacts {
                link: Some(active_link()),
                item: facts.item.clone(),
                viewer: facts.viewer.clone(),
            },
            Utc::now(),
        );
        assert_eq!(link.reason, expected, "share-link drifted for {expected:?}");
        assert!(!link.can_view);
    }
}

#[test]
fn link_lifecycle_outranks_the_prefix() {
    // A dead link reports its own state even over a deleted or blocked item;
    // content state must not leak through a dead link.
    for (facts, _) in prefix_cases() {
        let disabled = decide_share_link(
            &ShareLinkFacts {
                link: Some(LinkFacts {
                    is_disabled: true,
                    expires_at: None,
                }),
                item: facts.item.clone(),
                viewer: facts.viewer.clone(),
            },
            Utc::now(),
        );
        assert_eq!(disabled.reason, ReasonCode::LinkDisabled);
    }
}

#[test]
fn allow_reasons_are_exactly_ok_and_owner() {
    let item = ItemFacts {
        owner_id: Uuid::new_v4(),
        is_deleted: false,
        is_hidden: false,
        mode: VisibilityMode::Public,
    };
    let owner = ViewerFacts {
        viewer_id: item.owner_id,
        is_follower: false,
        override_rule: None,
        blocked_either_way: false,
    };

    let as_owner = decide(&VisibilityFacts {
        item: Some(item.clone()),
        viewer: Some(owner),
    });
    assert_eq!(as_owner.reason, ReasonCode::Owner);
    assert!(as_owner.can_view);

    let as_anon = decide(&VisibilityFacts {
        item: Some(item),
        viewer: None,
    });
    assert_eq!(as_anon.reason, ReasonCode::Ok);
    assert!(as_anon.can_view);
}
