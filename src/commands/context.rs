//! Shared context for command handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add ChannelLockManager for the /close command
//! - 1.0.0: Initial implementation with core shared state

use crate::features::duo::RoleRegistry;
use crate::features::locks::ChannelLockManager;
use serenity::model::id::GuildId;

/// Shared context for all command handlers
///
/// Contains the state every handler may need:
/// - the configured guild (this bot serves exactly one),
/// - the RoleRegistry holding the two duo allow-lists,
/// - the ChannelLockManager tracking `/close` locks,
/// - bot start time for latency/uptime reporting.
///
/// The registry and lock manager are the only mutable state in the process;
/// both are in-memory and reset on restart.
#[derive(Clone)]
pub struct CommandContext {
    pub guild_id: GuildId,
    pub role_registry: RoleRegistry,
    pub lock_manager: ChannelLockManager,
    pub start_time: std::time::Instant,
}

impl CommandContext {
    /// Create a new CommandContext for the configured guild
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            role_registry: RoleRegistry::new(),
            lock_manager: ChannelLockManager::new(),
            start_time: std::time::Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_context_clone() {
        // CommandContext should be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        use serenity::model::id::RoleId;

        let context = CommandContext::new(GuildId(1));
        let clone = context.clone();
        clone.role_registry.seed_channel_admin_role(RoleId(9)).await;

        assert_eq!(
            context.role_registry.channel_admin_roles().await,
            vec![RoleId(9)]
        );
    }
}
