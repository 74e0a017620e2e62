//! Account-level privacy resolution.
//!
//! Gates the listing surface of an account, not individual items; callers
//! still run the per-item policy on whatever the surface exposes.

use uuid::Uuid;
use visibility_policy::{resolve_account, AccountFacts, AccountScope, AccountVisibility};

use crate::error::EngineResult;
use crate::services::visibility::VisibilityService;
use crate::store::FactStore;

impl<S: FactStore> VisibilityService<S> {
    /// Resolve whether the viewer may browse the account's content listing.
    pub async fn resolve_account_visibility(
        &self,
        account_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> EngineResult<AccountVisibility> {
        if viewer_id == Some(account_id) {
            return Ok(AccountVisibility::allow(AccountScope::SelfView));
        }

        let Some(is_private) = self.store.account_is_private(account_id).await? else {
            // Unknown account: nothing to browse.
            return Ok(AccountVisibility::deny());
        };

        // The follow edge only matters for a private target.
        let is_follower = match viewer_id {
            Some(viewer) if is_private => self.store.is_following(viewer, account_id).await?,
            _ => false,
        };

        let resolution = resolve_account(&AccountFacts {
            is_self: false,
            is_private,
            viewer_present: viewer_id.is_some(),
            is_follower,
        });
        tracing::debug!(
            %account_id,
            viewer_id = ?viewer_id,
            can_view = resolution.can_view,
            "account surface resolved"
        );
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockFactStore;

    #[tokio::test]
    async fn self_view_skips_all_reads() {
        let account = Uuid::new_v4();
        let store = MockFactStore::new();
        let service = VisibilityService::new(store);

        let resolution = service
            .resolve_account_visibility(account, Some(account))
            .await
            .unwrap();
        assert_eq!(resolution, AccountVisibility::allow(AccountScope::SelfView));
    }

    #[tokio::test]
    async fn public_account_allows_anonymous_browsing() {
        let mut store = MockFactStore::new();
        store
            .expect_account_is_private()
            .returning(|_| Ok(Some(false)));
        let service = VisibilityService::new(store);

        let resolution = service
            .resolve_account_visibility(Uuid::new_v4(), None)
            .await
            .unwrap();
        assert_eq!(resolution, AccountVisibility::allow(AccountScope::Public));
    }

    #[tokio::test]
    async fn private_account_denies_anonymous() {
        let mut store = MockFactStore::new();
        store
            .expect_account_is_private()
            .returning(|_| Ok(Some(true)));
        let service = VisibilityService::new(store);

        let resolution = service
            .resolve_account_visibility(Uuid::new_v4(), None)
            .await
            .unwrap();
        assert_eq!(resolution, AccountVisibility::deny());
    }

    #[tokio::test]
    async fn private_account_requires_follow_edge() {
        let account = Uuid::new_v4();
        let viewer = Uuid::new_v4();

        let mut store = MockFactStore::new();
        store
            .expect_account_is_private()
            .returning(|_| Ok(Some(true)));
        store
            .expect_is_following()
            .withf(move |f, t| *f == viewer && *t == account)
            .returning(|_, _| Ok(false));
        let service = VisibilityService::new(store);

        let resolution = service
            .resolve_account_visibility(account, Some(viewer))
            .await
            .unwrap();
        assert_eq!(resolution, AccountVisibility::deny());
    }

    #[tokio::test]
    async fn private_account_follower_browses_with_self_scope() {
        let mut store = MockFactStore::new();
        store
            .expect_account_is_private()
            .returning(|_| Ok(Some(true)));
        store.expect_is_following().returning(|_, _| Ok(true));
        let service = VisibilityService::new(store);

        let resolution = service
            .resolve_account_visibility(Uuid::new_v4(), Some(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(resolution, AccountVisibility::allow(AccountScope::SelfView));
    }

    #[tokio::test]
    async fn unknown_account_denies() {
        let mut store = MockFactStore::new();
        store.expect_account_is_private().returning(|_| Ok(None));
        let service = VisibilityService::new(store);

        let resolution = service
            .resolve_account_visibility(Uuid::new_v4(), Some(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(resolution, AccountVisibility::deny());
    }
}
