use anyhow::Result;
use log::{info, warn};
use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::channel::{ChannelType, PermissionOverwrite, PermissionOverwriteType};
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::core::embeds::suggestion_embed;
use crate::core::response::{component_respond_ephemeral, modal_respond_ephemeral};
use crate::features::duo::{DuoAction, DuoRequest, ACCEPT_PREFIX, DECLINE_PREFIX};
use crate::features::suggestions;

/// Handler for all message component interactions
pub struct MessageComponentHandler {
    context: Arc<CommandContext>,
}

impl MessageComponentHandler {
    pub fn new(context: Arc<CommandContext>) -> Self {
        Self { context }
    }

    /// Handle all types of component interactions
    pub async fn handle_component_interaction(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        let user_id = interaction.user.id;

        info!("Processing component interaction: {custom_id} from user: {user_id}");

        match custom_id.as_str() {
            id if id.starts_with(ACCEPT_PREFIX) || id.starts_with(DECLINE_PREFIX) => {
                self.handle_duo_button(ctx, interaction).await?;
            }
            _ => {
                component_respond_ephemeral(&ctx.http, interaction, "Unknown component interaction.")
                    .await?;
            }
        }

        Ok(())
    }

    /// Handle modal submit interactions
    pub async fn handle_modal_submit(
        &self,
        ctx: &Context,
        interaction: &ModalSubmitInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        let user_id = interaction.user.id;

        info!("Processing modal submit: {custom_id} from user: {user_id}");

        match custom_id.as_str() {
            suggestions::MODAL_ID => {
                self.handle_suggestion_modal(ctx, interaction).await?;
            }
            _ => {
                modal_respond_ephemeral(&ctx.http, interaction, "Unknown modal submission.").await?;
            }
        }

        Ok(())
    }

    /// Create the Accept/Decline button row for a duo request
    pub fn create_duo_request_buttons(request: &DuoRequest) -> CreateComponents {
        CreateComponents::default()
            .create_action_row(|row| {
                row.create_button(|button| {
                    button
                        .custom_id(request.accept_id())
                        .label("Accept")
                        .style(ButtonStyle::Success)
                })
                .create_button(|button| {
                    button
                        .custom_id(request.decline_id())
                        .label("Decline")
                        .style(ButtonStyle::Danger)
                })
            })
            .to_owned()
    }

    /// Handle a click on a duo request button
    async fn handle_duo_button(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let (action, request) = match DuoRequest::parse(&interaction.data.custom_id) {
            Some(parsed) => parsed,
            None => {
                return component_respond_ephemeral(
                    &ctx.http,
                    interaction,
                    "This duo request can no longer be read.",
                )
                .await;
            }
        };

        // Only the addressed target may act on the request.
        if !request.authorized(interaction.user.id) {
            return component_respond_ephemeral(&ctx.http, interaction, "This request is not for you!")
                .await;
        }

        match action {
            DuoAction::Accept => self.accept_duo(ctx, interaction, request).await,
            DuoAction::Decline => {
                self.update_request_message(ctx, interaction, "The duo request was declined.")
                    .await
            }
        }
    }

    /// Accept path: create the private channel and welcome both members
    async fn accept_duo(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        request: DuoRequest,
    ) -> Result<()> {
        let initiator = request.initiator.to_user(&ctx.http).await?;
        let target = request.target.to_user(&ctx.http).await?;

        // Visible only to the pair, plus the configured admin roles.
        let mut overwrites = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(self.context.guild_id.0.into()),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(request.initiator),
            },
            PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(request.target),
            },
        ];
        for role in self.context.role_registry.channel_admin_roles().await {
            overwrites.push(PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(role),
            });
        }

        let created = self
            .context
            .guild_id
            .create_channel(&ctx.http, |channel| {
                channel
                    .name(request.channel_name(&initiator.name, &target.name))
                    .kind(ChannelType::Text)
                    .permissions(overwrites)
            })
            .await;

        let channel = match created {
            Ok(channel) => channel,
            Err(e) => {
                warn!("Failed to create duo channel for {} and {}: {e}", initiator.id, target.id);
                return component_respond_ephemeral(
                    &ctx.http,
                    interaction,
                    format!("Failed to create the duo channel: {e}"),
                )
                .await;
            }
        };

        info!(
            "Created duo channel {} for {} and {}",
            channel.id, initiator.id, target.id
        );

        self.update_request_message(
            ctx,
            interaction,
            format!("Duo accepted! A new channel has been created: <#{}>", channel.id),
        )
        .await?;

        channel
            .say(
                &ctx.http,
                format!(
                    "Welcome to your private duo channel, <@{}> and <@{}>!",
                    initiator.id, target.id
                ),
            )
            .await?;

        Ok(())
    }

    /// Replace the request DM with an outcome line, dropping embed and buttons
    async fn update_request_message(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
        content: impl ToString,
    ) -> Result<()> {
        interaction
            .create_interaction_response(&ctx.http, |response| {
                response
                    .kind(InteractionResponseType::UpdateMessage)
                    .interaction_response_data(|message| {
                        message
                            .content(content)
                            .set_embeds(Vec::new())
                            .set_components(CreateComponents::default())
                    })
            })
            .await?;
        Ok(())
    }

    /// Deliver a submitted suggestion to the guild owner's DMs
    async fn handle_suggestion_modal(
        &self,
        ctx: &Context,
        interaction: &ModalSubmitInteraction,
    ) -> Result<()> {
        let suggestion = match suggestions::extract_suggestion(interaction) {
            Some(suggestion) => suggestion,
            None => {
                return modal_respond_ephemeral(
                    &ctx.http,
                    interaction,
                    "The suggestion form was incomplete.",
                )
                .await;
            }
        };

        let owner_id = self
            .context
            .guild_id
            .to_partial_guild(&ctx.http)
            .await?
            .owner_id;
        let owner = owner_id.to_user(&ctx.http).await?;

        let dm_result = owner
            .create_dm_channel(&ctx.http)
            .await?
            .send_message(&ctx.http, |message| {
                message.set_embed(suggestion_embed(
                    &interaction.user,
                    &suggestion.title,
                    &suggestion.body,
                ))
            })
            .await;

        match dm_result {
            Ok(_) => {
                info!(
                    "Suggestion from {} delivered to owner {owner_id}",
                    interaction.user.id
                );
                modal_respond_ephemeral(
                    &ctx.http,
                    interaction,
                    "✅ Your suggestion has been sent to the server owner. Thank you!",
                )
                .await
            }
            Err(e) => {
                warn!("Failed to DM suggestion to owner {owner_id}: {e}");
                modal_respond_ephemeral(
                    &ctx.http,
                    interaction,
                    "Failed to deliver your suggestion. The server owner may have DMs disabled.",
                )
                .await
            }
        }
    }
}
