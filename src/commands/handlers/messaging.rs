//! Messaging command handlers
//!
//! Handles: msgserver, embed
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::id::ChannelId;
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_bool_option, get_channel_option, get_string_option};
use crate::core::embeds::{custom_embed, parse_hex_color, EmbedSpec};
use crate::core::permissions::invoker_has;
use crate::core::respond_ephemeral;

/// Handler for the messaging commands
pub struct MessagingHandler;

#[async_trait]
impl SlashCommandHandler for MessagingHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["msgserver", "embed"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        if !invoker_has(command, Permissions::MANAGE_MESSAGES) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You do not have permission to send messages as the bot.",
            )
            .await;
        }

        let request_id = Uuid::new_v4();
        match command.data.name.as_str() {
            "msgserver" => self.handle_msgserver(serenity_ctx, command, request_id).await,
            "embed" => self.handle_embed(serenity_ctx, command, request_id).await,
            _ => Ok(()),
        }
    }
}

impl MessagingHandler {
    /// Handle /msgserver - relay a plain message to a channel
    async fn handle_msgserver(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let channel = get_channel_option(&command.data.options, "channel")
            .map(ChannelId)
            .ok_or_else(|| anyhow::anyhow!("Missing channel parameter"))?;
        let msg = get_string_option(&command.data.options, "msg")
            .ok_or_else(|| anyhow::anyhow!("Missing msg parameter"))?;

        match channel.say(&serenity_ctx.http, &msg).await {
            Ok(_) => {
                info!("[{request_id}] Relayed message to channel {channel}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("📨 Message sent to <#{channel}>."),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] msgserver to {channel} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to send the message to <#{channel}>: {e}"),
                )
                .await
            }
        }
    }

    /// Handle /embed - build and send a fully caller-specified embed
    async fn handle_embed(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let options = &command.data.options;
        let channel = get_channel_option(options, "channel")
            .map(ChannelId)
            .ok_or_else(|| anyhow::anyhow!("Missing channel parameter"))?;

        // The color option is validated before anything is sent.
        let color = match get_string_option(options, "color") {
            Some(input) => match parse_hex_color(&input) {
                Some(color) => Some(color),
                None => {
                    return respond_ephemeral(
                        &serenity_ctx.http,
                        command,
                        format!("`{input}` is not a valid hex color. Use the form `#FF0000`."),
                    )
                    .await;
                }
            },
            None => None,
        };

        let spec = EmbedSpec {
            title: get_string_option(options, "title")
                .ok_or_else(|| anyhow::anyhow!("Missing title parameter"))?,
            description: get_string_option(options, "description")
                .ok_or_else(|| anyhow::anyhow!("Missing description parameter"))?,
            color,
            author_name: get_string_option(options, "author_name"),
            author_url: get_string_option(options, "author_url"),
            author_icon_url: get_string_option(options, "author_icon_url"),
            thumbnail_url: get_string_option(options, "thumbnail_url"),
            image_url: get_string_option(options, "image_url"),
            footer_text: get_string_option(options, "footer_text"),
            footer_icon_url: get_string_option(options, "footer_icon_url"),
            timestamp: get_bool_option(options, "timestamp").unwrap_or(false),
        };

        let send_result = channel
            .send_message(&serenity_ctx.http, |message| {
                message.set_embed(custom_embed(&spec))
            })
            .await;

        match send_result {
            Ok(_) => {
                info!("[{request_id}] Sent custom embed to channel {channel}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("📨 Embed sent to <#{channel}>."),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] embed to {channel} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to send the embed to <#{channel}>: {e}"),
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
    fn test_messaging_handler_commands() {
        let handler = MessagingHandler;
        let names = handler.command_names();

        assert!(names.contains(&"msgserver"));
        assert!(names.contains(&"embed"));
        assert_eq!(names.len(), 2);
    }
}
