//! Role management command handlers
//!
//! Handles: promote, createrole, addrole, removerole, deleterole
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::guild::Role;
use serenity::model::id::{RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_role_option, get_string_option, get_user_option};
use crate::core::permissions::{bot_guild_context, can_manage_role, invoker_has, BotGuildContext};
use crate::core::{respond, respond_ephemeral};

/// Handler for the role management commands
pub struct RoleHandler;

#[async_trait]
impl SlashCommandHandler for RoleHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["promote", "createrole", "addrole", "removerole", "deleterole"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        if !invoker_has(command, Permissions::MANAGE_ROLES) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You do not have permission to manage roles.",
            )
            .await;
        }

        let bot = bot_guild_context(serenity_ctx, ctx.guild_id).await?;
        if !bot.permissions.contains(Permissions::MANAGE_ROLES) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "I do not have permission to manage roles.",
            )
            .await;
        }

        let request_id = Uuid::new_v4();
        match command.data.name.as_str() {
            "promote" => self.handle_promote(&ctx, serenity_ctx, command, &bot, request_id).await,
            "createrole" => self.handle_createrole(&ctx, serenity_ctx, command, &bot, request_id).await,
            "addrole" => {
                self.handle_membership(&ctx, serenity_ctx, command, &bot, request_id, Membership::Add)
                    .await
            }
            "removerole" => {
                self.handle_membership(&ctx, serenity_ctx, command, &bot, request_id, Membership::Remove)
                    .await
            }
            "deleterole" => self.handle_deleterole(&ctx, serenity_ctx, command, &bot, request_id).await,
            _ => Ok(()),
        }
    }
}

enum Membership {
    Add,
    Remove,
}

impl RoleHandler {
    /// Hierarchy gate for a target role: both the bot and the invoker must
    /// sit above it. Sends the explanatory reply on failure.
    async fn check_role_hierarchy(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        bot: &BotGuildContext,
        role: &Role,
    ) -> Result<bool> {
        if !can_manage_role(bot.top_role_position, role.position) {
            respond_ephemeral(
                &serenity_ctx.http,
                command,
                format!("I cannot manage **{}**: it is at or above my highest role.", role.name),
            )
            .await?;
            return Ok(false);
        }

        let invoker_position = command
            .member
            .as_ref()
            .map(|member| bot.member_position(&member.roles))
            .unwrap_or(0);
        if !can_manage_role(invoker_position, role.position) {
            respond_ephemeral(
                &serenity_ctx.http,
                command,
                format!(
                    "You cannot manage **{}**: it is at or above your highest role.",
                    role.name
                ),
            )
            .await?;
            return Ok(false);
        }

        Ok(true)
    }

    fn required_role<'a>(
        &self,
        command: &ApplicationCommandInteraction,
        bot: &'a BotGuildContext,
    ) -> Result<&'a Role> {
        let role_id = get_role_option(&command.data.options, "role")
            .map(RoleId)
            .ok_or_else(|| anyhow::anyhow!("Missing role parameter"))?;
        bot.roles
            .get(&role_id)
            .ok_or_else(|| anyhow::anyhow!("Role {role_id} not found in guild"))
    }

    /// Handle /promote - strip manageable roles, then grant the new one
    async fn handle_promote(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        bot: &BotGuildContext,
        request_id: Uuid,
    ) -> Result<()> {
        let role = self.required_role(command, bot)?;
        if !self.check_role_hierarchy(serenity_ctx, command, bot, role).await? {
            return Ok(());
        }

        let target_id = get_user_option(&command.data.options, "user")
            .map(UserId)
            .ok_or_else(|| anyhow::anyhow!("Missing user parameter"))?;
        let member = ctx.guild_id.member(&serenity_ctx.http, target_id).await?;

        // Only roles the bot can actually manage are removed; managed
        // (integration) roles and anything above the bot stay put.
        let removable: Vec<RoleId> = member
            .roles
            .iter()
            .copied()
            .filter(|id| {
                bot.roles
                    .get(id)
                    .map(|r| !r.managed && can_manage_role(bot.top_role_position, r.position))
                    .unwrap_or(false)
            })
            .collect();

        let mut member = member;
        if !removable.is_empty() {
            if let Err(e) = member.remove_roles(&serenity_ctx.http, &removable).await {
                warn!("[{request_id}] Failed to remove roles during promote: {e}");
                return respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to remove the member's old roles: {e}"),
                )
                .await;
            }
        }

        match member.add_role(&serenity_ctx.http, role.id).await {
            Ok(()) => {
                info!("[{request_id}] Promoted {target_id} to role {}", role.id);
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("⬆️ <@{target_id}> has been promoted to **{}**.", role.name),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Promote of {target_id} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to assign **{}**: {e}", role.name),
                )
                .await
            }
        }
    }

    /// Handle /createrole - copy settings from an existing role
    async fn handle_createrole(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        bot: &BotGuildContext,
        request_id: Uuid,
    ) -> Result<()> {
        let name = get_string_option(&command.data.options, "name")
            .ok_or_else(|| anyhow::anyhow!("Missing name parameter"))?;
        let source_id = get_role_option(&command.data.options, "copy_from")
            .map(RoleId)
            .ok_or_else(|| anyhow::anyhow!("Missing copy_from parameter"))?;
        let source = bot
            .roles
            .get(&source_id)
            .ok_or_else(|| anyhow::anyhow!("Role {source_id} not found in guild"))?;

        let result = ctx
            .guild_id
            .create_role(&serenity_ctx.http, |role| {
                role.name(&name)
                    .permissions(source.permissions)
                    .colour(source.colour.0 as u64)
                    .hoist(source.hoist)
                    .mentionable(source.mentionable)
            })
            .await;

        match result {
            Ok(role) => {
                info!("[{request_id}] Created role {} copied from {}", role.id, source_id);
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("✨ Created role **{name}** with settings copied from **{}**.", source.name),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] createrole failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to create the role: {e}"),
                )
                .await
            }
        }
    }

    /// Handle /addrole and /removerole
    async fn handle_membership(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        bot: &BotGuildContext,
        request_id: Uuid,
        action: Membership,
    ) -> Result<()> {
        let role = self.required_role(command, bot)?;
        if !self.check_role_hierarchy(serenity_ctx, command, bot, role).await? {
            return Ok(());
        }

        let target_id = get_user_option(&command.data.options, "user")
            .map(UserId)
            .ok_or_else(|| anyhow::anyhow!("Missing user parameter"))?;
        let mut member = ctx.guild_id.member(&serenity_ctx.http, target_id).await?;

        let (result, verb) = match action {
            Membership::Add => (member.add_role(&serenity_ctx.http, role.id).await, "added to"),
            Membership::Remove => (
                member.remove_role(&serenity_ctx.http, role.id).await,
                "removed from",
            ),
        };

        match result {
            Ok(()) => {
                info!("[{request_id}] Role {} {verb} {target_id}", role.id);
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("✅ **{}** has been {verb} <@{target_id}>.", role.name),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Role update for {target_id} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to update roles for <@{target_id}>: {e}"),
                )
                .await
            }
        }
    }

    /// Handle /deleterole
    async fn handle_deleterole(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        bot: &BotGuildContext,
        request_id: Uuid,
    ) -> Result<()> {
        let role = self.required_role(command, bot)?;
        if !self.check_role_hierarchy(serenity_ctx, command, bot, role).await? {
            return Ok(());
        }

        match ctx.guild_id.delete_role(&serenity_ctx.http, role.id).await {
            Ok(()) => {
                info!("[{request_id}] Deleted role {}", role.id);
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("🗑️ Role **{}** has been deleted.", role.name),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] deleterole failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to delete **{}**: {e}", role.name),
                )
                .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_handler_commands() {
        let handler = RoleHandler;
        let names = handler.command_names();

        assert!(names.contains(&"promote"));
        assert!(names.contains(&"createrole"));
        assert!(names.contains(&"addrole"));
        assert!(names.contains(&"removerole"));
        assert!(names.contains(&"deleterole"));
        assert_eq!(names.len(), 5);
    }
}
