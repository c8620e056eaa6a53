//! Permission and role-hierarchy checks shared by the moderation handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from duplicate checks across the moderation handlers

use anyhow::Result;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::guild::Role;
use serenity::model::id::{GuildId, RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::collections::HashMap;

/// The bot's standing in a guild: its identity, aggregated permissions, the
/// position of its highest role, and the guild role table for looking up
/// target positions.
pub struct BotGuildContext {
    pub user_id: UserId,
    pub permissions: Permissions,
    pub top_role_position: i64,
    pub roles: HashMap<RoleId, Role>,
}

impl BotGuildContext {
    /// Position of the highest role among `member_roles`.
    pub fn member_position(&self, member_roles: &[RoleId]) -> i64 {
        highest_role_position(&self.roles, member_roles)
    }
}

/// Fetch the bot's member record and the guild role table, and reduce them
/// to the values every hierarchy check needs.
pub async fn bot_guild_context(ctx: &Context, guild_id: GuildId) -> Result<BotGuildContext> {
    let bot_id = ctx.cache.current_user_id();
    let member = guild_id.member(&ctx.http, bot_id).await?;
    let roles = guild_id.roles(&ctx.http).await?;

    Ok(BotGuildContext {
        user_id: bot_id,
        permissions: aggregate_permissions(&roles, guild_id, &member.roles),
        top_role_position: highest_role_position(&roles, &member.roles),
        roles,
    })
}

/// Position of the highest role among `member_roles`, or 0 (the `@everyone`
/// position) when the member has none.
pub fn highest_role_position(roles: &HashMap<RoleId, Role>, member_roles: &[RoleId]) -> i64 {
    member_roles
        .iter()
        .filter_map(|id| roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

/// Union of the `@everyone` role's permissions and every role the member
/// holds. Administrator implies everything.
pub fn aggregate_permissions(
    roles: &HashMap<RoleId, Role>,
    guild_id: GuildId,
    member_roles: &[RoleId],
) -> Permissions {
    let everyone = RoleId(guild_id.0);
    let mut permissions = roles
        .get(&everyone)
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    for id in member_roles {
        if let Some(role) = roles.get(id) {
            permissions |= role.permissions;
        }
    }

    if permissions.administrator() {
        Permissions::all()
    } else {
        permissions
    }
}

/// True when a principal whose highest role sits at `actor_top` may act on a
/// target at `target_top`. Equal positions do not outrank each other.
pub fn outranks(actor_top: i64, target_top: i64) -> bool {
    actor_top > target_top
}

/// True when the bot (top role at `bot_top`) may assign, remove, or delete a
/// role at `role_position`.
pub fn can_manage_role(bot_top: i64, role_position: i64) -> bool {
    role_position < bot_top
}

/// Permission check against the member snapshot Discord attaches to the
/// interaction. Fails closed outside a guild.
pub fn invoker_has(command: &ApplicationCommandInteraction, required: Permissions) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .map(|permissions| permissions.administrator() || permissions.contains(required))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outranks_strictly_above() {
        assert!(outranks(5, 3));
        assert!(!outranks(3, 5));
    }

    #[test]
    fn test_outranks_equal_positions_rejected() {
        // A target at the same height as the bot's top role must be refused.
        assert!(!outranks(4, 4));
    }

    #[test]
    fn test_can_manage_role_below_top() {
        assert!(can_manage_role(10, 9));
        assert!(can_manage_role(10, 0));
    }

    #[test]
    fn test_can_manage_role_at_or_above_top_rejected() {
        assert!(!can_manage_role(10, 10));
        assert!(!can_manage_role(10, 11));
    }

    #[test]
    fn test_highest_role_position_empty_is_everyone() {
        let roles = HashMap::new();
        assert_eq!(highest_role_position(&roles, &[]), 0);
        // Roles the table does not know about contribute nothing.
        assert_eq!(highest_role_position(&roles, &[RoleId(42)]), 0);
    }
}
