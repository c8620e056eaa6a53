use serenity::model::id::RoleId;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The two in-memory role allow-lists configuring the duo flow.
///
/// Each set is replaced wholesale by its configuration command and is empty
/// again after a restart; nothing here is persisted.
#[derive(Clone, Default)]
pub struct RoleRegistry {
    channel_admin_roles: Arc<RwLock<HashSet<RoleId>>>,
    duo_allowed_roles: Arc<RwLock<HashSet<RoleId>>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the channel-admin set, used at startup for `ADMIN_ROLE_ID`.
    pub async fn seed_channel_admin_role(&self, role: RoleId) {
        self.channel_admin_roles.write().await.insert(role);
    }

    /// Replace the set of roles granted visibility into duo channels.
    pub async fn set_channel_admin_roles(&self, roles: Vec<RoleId>) {
        let mut guard = self.channel_admin_roles.write().await;
        guard.clear();
        guard.extend(roles);
    }

    /// Roles granted visibility into duo channels, in no particular order.
    pub async fn channel_admin_roles(&self) -> Vec<RoleId> {
        self.channel_admin_roles.read().await.iter().copied().collect()
    }

    /// Replace the set of roles allowed to invoke `/duo`.
    pub async fn set_duo_allowed_roles(&self, roles: Vec<RoleId>) {
        let mut guard = self.duo_allowed_roles.write().await;
        guard.clear();
        guard.extend(roles);
    }

    /// Whether a member holding `member_roles` may invoke `/duo`.
    ///
    /// An empty allow-list means the command is open to everyone.
    pub async fn is_duo_allowed(&self, member_roles: &[RoleId]) -> bool {
        let allowed = self.duo_allowed_roles.read().await;
        allowed.is_empty() || member_roles.iter().any(|role| allowed.contains(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_allow_list_permits_everyone() {
        let registry = RoleRegistry::new();
        assert!(registry.is_duo_allowed(&[]).await);
        assert!(registry.is_duo_allowed(&[RoleId(1)]).await);
    }

    #[tokio::test]
    async fn test_allow_list_gates_by_membership() {
        let registry = RoleRegistry::new();
        registry
            .set_duo_allowed_roles(vec![RoleId(10), RoleId(20)])
            .await;

        assert!(registry.is_duo_allowed(&[RoleId(20), RoleId(99)]).await);
        assert!(!registry.is_duo_allowed(&[RoleId(99)]).await);
        assert!(!registry.is_duo_allowed(&[]).await);
    }

    #[tokio::test]
    async fn test_sets_replaced_wholesale() {
        let registry = RoleRegistry::new();
        registry.set_channel_admin_roles(vec![RoleId(1), RoleId(2)]).await;
        registry.set_channel_admin_roles(vec![RoleId(3)]).await;

        let roles = registry.channel_admin_roles().await;
        assert_eq!(roles, vec![RoleId(3)]);
    }

    #[tokio::test]
    async fn test_seed_adds_without_clearing() {
        let registry = RoleRegistry::new();
        registry.seed_channel_admin_role(RoleId(7)).await;
        registry.seed_channel_admin_role(RoleId(8)).await;

        let mut roles = registry.channel_admin_roles().await;
        roles.sort();
        assert_eq!(roles, vec![RoleId(7), RoleId(8)]);
    }
}
