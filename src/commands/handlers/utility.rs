//! Utility command handlers
//!
//! Handles: ping, avatar, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::get_user_option;
use crate::core::embeds::avatar_embed;
use crate::core::{respond, respond_embed};

/// Handler for utility commands: ping, avatar, help
pub struct UtilityHandler;

#[async_trait]
impl SlashCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["ping", "avatar", "help"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "ping" => self.handle_ping(&ctx, serenity_ctx, command).await,
            "avatar" => self.handle_avatar(serenity_ctx, command).await,
            "help" => self.handle_help(serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl UtilityHandler {
    /// Handle /ping command
    async fn handle_ping(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let uptime = ctx.start_time.elapsed();
        let hours = uptime.as_secs() / 3600;
        let minutes = (uptime.as_secs() % 3600) / 60;

        respond(
            &serenity_ctx.http,
            command,
            format!("🏓 Pong! Up for {hours}h {minutes}m."),
        )
        .await?;

        info!("Ping command completed for user {}", command.user.id);
        Ok(())
    }

    /// Handle /avatar command
    async fn handle_avatar(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user = match get_user_option(&command.data.options, "user") {
            Some(id) => UserId(id).to_user(&serenity_ctx.http).await?,
            None => command.user.clone(),
        };

        respond_embed(&serenity_ctx.http, command, avatar_embed(&user)).await
    }

    /// Handle /help command
    async fn handle_help(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let help_text = r#"**Available Slash Commands:**
`/duo <user>` - Send a duo request with Accept/Decline buttons
`/duobotrole <roles>` - Set which roles can see duo channels
`/duo_allowed_role <roles>` - Set which roles may use /duo
`/ban <user> [reason]` - Ban a user from the server
`/kick <user> [reason]` - Kick a user from the server
`/warn <user> <reason>` - Warn a user by DM
`/purge <amount>` - Delete 1-100 recent messages
`/promote <user> <role>` - Replace a user's roles with a new one
`/createrole <name> <copy_from>` - Create a role copied from another
`/addrole <user> <role>` - Add a role to a user
`/removerole <user> <role>` - Remove a role from a user
`/deleterole <role>` - Delete a role
`/createchannel <name> [copy_from]` - Create a text channel
`/createcategory <name> [copy_from]` - Create a category
`/close [channel]` - Lock a channel for 24 hours
`/msgserver <channel> <msg>` - Send a message to a channel
`/embed <channel> <title> <description> ...` - Send a custom embed
`/suggestion` - Submit a suggestion to the server owner
`/tryouts` - Post the tryout announcement
`/ping` - Check that the bot is responsive
`/avatar [user]` - Show a user's avatar
`/help` - Show this help message"#;

        respond(&serenity_ctx.http, command, help_text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_handler_commands() {
        let handler = UtilityHandler;
        let names = handler.command_names();

        assert!(names.contains(&"ping"));
        assert!(names.contains(&"avatar"));
        assert!(names.contains(&"help"));
        assert_eq!(names.len(), 3);
    }
}
