//! Moderation command handlers
//!
//! Handles: ban, kick, warn, purge
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::id::{GuildId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_integer_option, get_string_option, get_user_option};
use crate::core::embeds::warning_embed;
use crate::core::permissions::{bot_guild_context, invoker_has, outranks};
use crate::core::{respond, respond_ephemeral};

/// Reply used when a purge amount falls outside the accepted range
pub const PURGE_RANGE_MESSAGE: &str = "You can only purge between 1 and 100 messages.";

/// Whether a purge amount is acceptable to the bulk-delete endpoint.
pub fn purge_amount_valid(amount: i64) -> bool {
    (1..=100).contains(&amount)
}

/// Handler for the moderation commands
pub struct ModerationHandler;

#[async_trait]
impl SlashCommandHandler for ModerationHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ban", "kick", "warn", "purge"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        match command.data.name.as_str() {
            "ban" => self.handle_ban(&ctx, serenity_ctx, command, request_id).await,
            "kick" => self.handle_kick(&ctx, serenity_ctx, command, request_id).await,
            "warn" => self.handle_warn(&ctx, serenity_ctx, command, request_id).await,
            "purge" => self.handle_purge(serenity_ctx, command, request_id).await,
            _ => Ok(()),
        }
    }
}

impl ModerationHandler {
    /// Permission, hierarchy, and self-target checks shared by ban and kick.
    ///
    /// Returns the target id when every precondition holds; otherwise the
    /// explanatory reply has already been sent.
    async fn check_member_action(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        guild_id: GuildId,
        required: Permissions,
        action: &str,
    ) -> Result<Option<UserId>> {
        if !invoker_has(command, required) {
            respond_ephemeral(
                &serenity_ctx.http,
                command,
                format!("You do not have permission to {action} members."),
            )
            .await?;
            return Ok(None);
        }

        let target_id = get_user_option(&command.data.options, "user")
            .map(UserId)
            .ok_or_else(|| anyhow::anyhow!("Missing user parameter"))?;

        let bot = bot_guild_context(serenity_ctx, guild_id).await?;
        if !bot.permissions.contains(required) {
            respond_ephemeral(
                &serenity_ctx.http,
                command,
                format!("I do not have permission to {action} members."),
            )
            .await?;
            return Ok(None);
        }

        if target_id == bot.user_id {
            respond_ephemeral(&serenity_ctx.http, command, "I cannot do that to myself.").await?;
            return Ok(None);
        }

        // Hierarchy check against the target's highest role. A target who is
        // no longer a member has no position to compare.
        if let Ok(target_member) = guild_id.member(&serenity_ctx.http, target_id).await {
            let target_position = bot.member_position(&target_member.roles);
            if !outranks(bot.top_role_position, target_position) {
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    "I cannot moderate that member: their highest role is above mine.",
                )
                .await?;
                return Ok(None);
            }

            let invoker_position = command
                .member
                .as_ref()
                .map(|member| bot.member_position(&member.roles))
                .unwrap_or(0);
            if !outranks(invoker_position, target_position) {
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    "You cannot moderate that member: their highest role is above yours.",
                )
                .await?;
                return Ok(None);
            }
        }

        Ok(Some(target_id))
    }

    /// Handle /ban command
    async fn handle_ban(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let target_id = match self
            .check_member_action(serenity_ctx, command, ctx.guild_id, Permissions::BAN_MEMBERS, "ban")
            .await?
        {
            Some(id) => id,
            None => return Ok(()),
        };

        let reason = get_string_option(&command.data.options, "reason")
            .unwrap_or_else(|| "No reason provided".to_string());
        let target = target_id.to_user(&serenity_ctx.http).await?;

        match ctx
            .guild_id
            .ban_with_reason(&serenity_ctx.http, target_id, 0, &reason)
            .await
        {
            Ok(()) => {
                info!("[{request_id}] Banned {} ({target_id})", target.tag());
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("🔨 **{}** has been banned. Reason: {reason}", target.tag()),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Ban of {target_id} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to ban **{}**: {e}", target.tag()),
                )
                .await
            }
        }
    }

    /// Handle /kick command
    async fn handle_kick(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let target_id = match self
            .check_member_action(serenity_ctx, command, ctx.guild_id, Permissions::KICK_MEMBERS, "kick")
            .await?
        {
            Some(id) => id,
            None => return Ok(()),
        };

        let reason = get_string_option(&command.data.options, "reason")
            .unwrap_or_else(|| "No reason provided".to_string());
        let target = target_id.to_user(&serenity_ctx.http).await?;

        match ctx
            .guild_id
            .kick_with_reason(&serenity_ctx.http, target_id, &reason)
            .await
        {
            Ok(()) => {
                info!("[{request_id}] Kicked {} ({target_id})", target.tag());
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("👢 **{}** has been kicked. Reason: {reason}", target.tag()),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Kick of {target_id} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to kick **{}**: {e}", target.tag()),
                )
                .await
            }
        }
    }

    /// Handle /warn command - delivers the warning as a DM embed
    async fn handle_warn(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        if !invoker_has(command, Permissions::MODERATE_MEMBERS) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You do not have permission to warn members.",
            )
            .await;
        }

        let target_id = get_user_option(&command.data.options, "user")
            .map(UserId)
            .ok_or_else(|| anyhow::anyhow!("Missing user parameter"))?;
        let reason = get_string_option(&command.data.options, "reason")
            .ok_or_else(|| anyhow::anyhow!("Missing reason parameter"))?;

        let target = target_id.to_user(&serenity_ctx.http).await?;
        let guild_name = ctx
            .guild_id
            .to_partial_guild(&serenity_ctx.http)
            .await
            .map(|guild| guild.name)
            .unwrap_or_else(|_| "this server".to_string());

        let dm_result = target
            .create_dm_channel(&serenity_ctx.http)
            .await?
            .send_message(&serenity_ctx.http, |message| {
                message.set_embed(warning_embed(&guild_name, &command.user, &reason))
            })
            .await;

        match dm_result {
            Ok(_) => {
                info!("[{request_id}] Warned {} ({target_id})", target.tag());
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("⚠️ **{}** has been warned. Reason: {reason}", target.tag()),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Warn DM to {target_id} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!(
                        "Failed to warn **{}**. They may have DMs disabled.",
                        target.tag()
                    ),
                )
                .await
            }
        }
    }

    /// Handle /purge command - bulk delete recent messages
    async fn handle_purge(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        if !invoker_has(command, Permissions::MANAGE_MESSAGES) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You do not have permission to manage messages.",
            )
            .await;
        }

        let amount = get_integer_option(&command.data.options, "amount")
            .ok_or_else(|| anyhow::anyhow!("Missing amount parameter"))?;

        // Range check happens before any delete request is issued.
        if !purge_amount_valid(amount) {
            return respond_ephemeral(&serenity_ctx.http, command, PURGE_RANGE_MESSAGE).await;
        }

        let messages = command
            .channel_id
            .messages(&serenity_ctx.http, |retriever| retriever.limit(amount as u64))
            .await?;

        // The bulk endpoint refuses fewer than two messages.
        let delete_result = match messages.len() {
            0 => {
                return respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    "There are no messages to delete.",
                )
                .await;
            }
            1 => {
                command
                    .channel_id
                    .delete_message(&serenity_ctx.http, messages[0].id)
                    .await
            }
            _ => {
                let ids: Vec<_> = messages.iter().map(|message| message.id).collect();
                command
                    .channel_id
                    .delete_messages(&serenity_ctx.http, ids)
                    .await
            }
        };

        match delete_result {
            Ok(()) => {
                info!(
                    "[{request_id}] Purged {} messages in channel {}",
                    messages.len(),
                    command.channel_id
                );
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("🧹 Deleted {} messages.", messages.len()),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Purge in {} failed: {e}", command.channel_id);
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to delete messages: {e}"),
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
    fn test_moderation_handler_commands() {
        let handler = ModerationHandler;
        let names = handler.command_names();

        assert!(names.contains(&"ban"));
        assert!(names.contains(&"kick"));
        assert!(names.contains(&"warn"));
        assert!(names.contains(&"purge"));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_purge_amount_bounds() {
        assert!(purge_amount_valid(1));
        assert!(purge_amount_valid(50));
        assert!(purge_amount_valid(100));

        assert!(!purge_amount_valid(0));
        assert!(!purge_amount_valid(101));
        assert!(!purge_amount_valid(150));
        assert!(!purge_amount_valid(-5));
    }

    #[test]
    fn test_purge_range_message_wording() {
        assert_eq!(
            PURGE_RANGE_MESSAGE,
            "You can only purge between 1 and 100 messages."
        );
    }
}
