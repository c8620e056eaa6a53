//! Duo command handlers
//!
//! Handles: duo, duobotrole, duo_allowed_role
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::id::{RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::slash::{get_role_option, get_user_option};
use crate::core::embeds::duo_request_embed;
use crate::core::permissions::invoker_has;
use crate::core::respond_ephemeral;
use crate::features::duo::DuoRequest;
use crate::message_components::MessageComponentHandler;

/// Handler for the duo matchmaking commands
pub struct DuoHandler;

#[async_trait]
impl SlashCommandHandler for DuoHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["duo", "duobotrole", "duo_allowed_role"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        match command.data.name.as_str() {
            "duo" => self.handle_duo(&ctx, serenity_ctx, command, request_id).await,
            "duobotrole" => {
                self.handle_role_config(&ctx, serenity_ctx, command, RoleList::ChannelAdmin)
                    .await
            }
            "duo_allowed_role" => {
                self.handle_role_config(&ctx, serenity_ctx, command, RoleList::DuoAllowed)
                    .await
            }
            _ => Ok(()),
        }
    }
}

/// Which of the two allow-lists a configuration command replaces.
enum RoleList {
    ChannelAdmin,
    DuoAllowed,
}

impl DuoHandler {
    /// Handle /duo - send a duo request to another user's DMs
    async fn handle_duo(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        request_id: Uuid,
    ) -> Result<()> {
        let member = match command.member.as_ref() {
            Some(member) => member,
            None => {
                return respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    "This command can only be used in a server.",
                )
                .await;
            }
        };

        if !ctx.role_registry.is_duo_allowed(&member.roles).await {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You do not have the required role to use this command.",
            )
            .await;
        }

        let target_id = get_user_option(&command.data.options, "username")
            .ok_or_else(|| anyhow::anyhow!("Missing username parameter"))?;

        let request = match DuoRequest::new(command.user.id, UserId(target_id)) {
            Ok(request) => request,
            Err(_) => {
                return respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    "You cannot send a duo request to yourself!",
                )
                .await;
            }
        };

        let target = UserId(target_id).to_user(&serenity_ctx.http).await?;

        // Deliver the request privately; the buttons carry the whole request.
        let dm_result = target
            .create_dm_channel(&serenity_ctx.http)
            .await?
            .send_message(&serenity_ctx.http, |message| {
                message
                    .set_embed(duo_request_embed(&command.user))
                    .set_components(MessageComponentHandler::create_duo_request_buttons(&request))
            })
            .await;

        match dm_result {
            Ok(_) => {
                info!(
                    "[{request_id}] Duo request sent from {} to {}",
                    command.user.id, target.id
                );
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!("Your duo request has been sent to <@{}>!", target.id),
                )
                .await
            }
            Err(e) => {
                warn!("[{request_id}] Failed to DM duo request to {}: {e}", target.id);
                respond_ephemeral(
                    &serenity_ctx.http,
                    command,
                    format!(
                        "Failed to send the duo request to <@{}>. They may have DMs disabled.",
                        target.id
                    ),
                )
                .await
            }
        }
    }

    /// Handle /duobotrole and /duo_allowed_role - wholesale allow-list replacement
    async fn handle_role_config(
        &self,
        ctx: &CommandContext,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
        list: RoleList,
    ) -> Result<()> {
        if !invoker_has(command, Permissions::MANAGE_GUILD) {
            return respond_ephemeral(
                &serenity_ctx.http,
                command,
                "You need the Manage Server permission to use this command.",
            )
            .await;
        }

        let mut roles: Vec<RoleId> = Vec::new();
        for option_name in ["role1", "role2", "role3"] {
            if let Some(id) = get_role_option(&command.data.options, option_name) {
                roles.push(RoleId(id));
            }
        }
        if roles.is_empty() {
            anyhow::bail!("Missing role1 parameter");
        }

        let guild_roles = ctx.guild_id.roles(&serenity_ctx.http).await?;
        let role_names = roles
            .iter()
            .filter_map(|id| guild_roles.get(id))
            .map(|role| role.name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        let content = match list {
            RoleList::ChannelAdmin => {
                ctx.role_registry.set_channel_admin_roles(roles).await;
                format!(
                    "Access to duo channels has been granted to the following roles: **{role_names}**. \
                     Note: This setting will be reset if the bot restarts."
                )
            }
            RoleList::DuoAllowed => {
                ctx.role_registry.set_duo_allowed_roles(roles).await;
                format!(
                    "Users with the following roles are now allowed to use the /duo command: **{role_names}**. \
                     Note: This setting will be reset if the bot restarts."
                )
            }
        };

        respond_ephemeral(&serenity_ctx.http, command, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duo_handler_commands() {
        let handler = DuoHandler;
        let names = handler.command_names();

        assert!(names.contains(&"duo"));
        assert!(names.contains(&"duobotrole"));
        assert!(names.contains(&"duo_allowed_role"));
        assert_eq!(names.len(), 3);
    }
}
