//! Channel management command handlers
//!
//! Handles: createchannel, createcategory, close
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::channel::{Channel, ChannelType, GuildChannel, PermissionOverwriteType};
use serenity::model::id::{ChannelId, RoleId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_channel_option, get_string_option};
use crate::core::permissions::{bot_guild_context, invoker_has};
use crate::core::{respond, respond_ephemeral};
use crate::features::locks::{
    allow_send, capture_overwrite, deny_send, is_send_locked, restore_channel, schedule_restore,
};

/// Handler for the channel management commands
pub struct ChannelHandler;

#[async_trait]
impl SlashCommandHandler for ChannelHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["createchannel", "createcategory", "close"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        if !invoker_has(command, Permissions::MANAGE_CHANNELS) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You do not have permission to manage channels.",
            )
            .await;
        }

        let request_id = Uuid::new_v4();
        match command.data.name.as_str() {
            "createchannel" => {
                self.handle_create(&ctx, serenity_ctx, command, request_id, ChannelType::Text)
                    .await
            }
            "createcategory" => {
                self.handle_create(&ctx, serenity_ctx, command, request_id, ChannelType::Category)
                    .await
            }
            "close" => self.handle_close(&ctx, serenity_ctx, command, request_id).await,
            _ => Ok(()),
        }
    }
}

impl ChannelHandler {
    async fn fetch_guild_channel(
        &self,
        serenity_ctx: &Context,
        channel_id: ChannelId,
    ) -> Result<Option<GuildChannel>> {
        match channel_id.to_channel(&serenity_ctx.http).await? {
            Channel::Guild(channel) => Ok(Some(channel)),
            _ => Ok(None),
        }
    }

    /// Handle /createchannel and /createcategory
    async fn handle_create(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
        kind: ChannelType,
    ) -> Result<()> {
        let bot = bot_guild_context(serenity_ctx, ctx.guild_id).await?;
        if !bot.permissions.contains(Permissions::MANAGE_CHANNELS) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "I do not have permission to manage channels.",
            )
            .await;
        }

        let name = get_string_option(&command.data.options, "name")
            .ok_or_else(|| anyhow::anyhow!("Missing name parameter"))?;

        // Optionally copy permission overwrites from an existing channel.
        let mut overwrites = None;
        if let Some(source_id) = get_channel_option(&command.data.options, "copy_from") {
            match self
                .fetch_guild_channel(serenity_ctx, ChannelId(source_id))
                .await?
            {
                Some(source) => overwrites = Some(source.permission_overwrites),
                None => {
                    return respond_ephemeral(
                        &serenity_ctx.http,
                        command,
                        "I could not find the channel to copy permissions from.",
                    )
                    .await;
                }
            }
        }

        let label = match kind {
            ChannelType::Category => "category",
            _ => "channel",
        };

        let result = ctx
            .guild_id
            .create_channel(&serenity_ctx.http, |channel| {
                channel.name(&name).kind(kind);
                if let Some(overwrites) = overwrites {
                    channel.permissions(overwrites);
                }
                channel
            })
            .await;

        match result {
            Ok(created) => {
                info!("[{request_id}] Created {label} {} ({})", created.name, created.id);
                respond(
                    &serenity_ctx.http,
                    command,
                    format!("📁 Created {label} **{name}**."),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] create{label} failed: {e}");
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to create the {label}: {e}"),
                )
                .await
            }
        }
    }

    /// Handle /close - lock a channel and schedule the 24-hour restore
    async fn handle_close(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let target_id = get_channel_option(&command.data.options, "channel")
            .map(ChannelId)
            .unwrap_or(command.channel_id);

        let channel = match self.fetch_guild_channel(serenity_ctx, target_id).await? {
            Some(channel) => channel,
            None => {
                return respond_ephemeral(&serenity_ctx.http, command, "That channel cannot be locked.")
                    .await;
            }
        };

        let everyone = RoleId(ctx.guild_id.0);

        // Idempotence: a channel whose @everyone overwrite already denies
        // sending, or one the manager is tracking, is not locked again.
        if ctx.lock_manager.is_locked(target_id)
            || is_send_locked(&channel.permission_overwrites, everyone)
        {
            return respond_ephemeral(&serenity_ctx.http, command, "This channel is already locked.")
                .await;
        }

        let owner_id = ctx
            .guild_id
            .to_partial_guild(&serenity_ctx.http)
            .await?
            .owner_id;

        // Record the complete prior overwrite state for every principal the
        // lock touches, so the restore can re-apply exactly that.
        let mut principals = vec![
            PermissionOverwriteType::Role(everyone),
            PermissionOverwriteType::Member(command.user.id),
        ];
        if owner_id != command.user.id {
            principals.push(PermissionOverwriteType::Member(owner_id));
        }
        let saved: Vec<_> = principals
            .into_iter()
            .map(|kind| capture_overwrite(&channel.permission_overwrites, kind))
            .collect();

        if ctx.lock_manager.begin(target_id, saved.clone()).is_err() {
            return respond_ephemeral(&serenity_ctx.http, command, "This channel is already locked.")
                .await;
        }

        for entry in &saved {
            let overwrite = match entry.kind {
                PermissionOverwriteType::Role(_) => {
                    deny_send(entry.previous.as_ref(), entry.kind.clone())
                }
                _ => allow_send(entry.previous.as_ref(), entry.kind.clone()),
            };
            if let Err(e) = target_id.create_permission(&serenity_ctx.http, &overwrite).await {
                warn!("[{request_id}] Locking channel {target_id} failed: {e}");
                // Best-effort undo of whatever was already applied.
                let _ = restore_channel(&serenity_ctx.http, &ctx.lock_manager, target_id).await;
                return respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Failed to lock the channel: {e}"),
                )
                .await;
            }
        }

        schedule_restore(
            serenity_ctx.http.clone(),
            ctx.lock_manager.clone(),
            target_id,
        );

        info!("[{request_id}] Locked channel {target_id} for 24 hours");
        respond(
            &serenity_ctx.http,
            command,
            format!("🔒 <#{target_id}> has been locked. It will reopen automatically in 24 hours."),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_handler_commands() {
        let handler = ChannelHandler;
        let names = handler.command_names();

        assert!(names.contains(&"createchannel"));
        assert!(names.contains(&"createcategory"));
        assert!(names.contains(&"close"));
        assert_eq!(names.len(), 3);
    }
}
