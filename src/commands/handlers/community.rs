//! Community command handlers
//!
//! Handles: suggestion, tryouts
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::builder::CreateEmbed;
use serenity::model::application::component::InputTextStyle;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::core::embeds::ACCENT_COLOR;
use crate::core::respond_embed;
use crate::features::suggestions;

/// Handler for the community commands
pub struct CommunityHandler;

#[async_trait]
impl SlashCommandHandler for CommunityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["suggestion", "tryouts"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        match command.data.name.as_str() {
            "suggestion" => self.handle_suggestion(serenity_ctx, command).await,
            "tryouts" => self.handle_tryouts(serenity_ctx, command).await,
            _ => Ok(()),
        }
    }
}

impl CommunityHandler {
    /// Handle /suggestion - open the suggestion modal
    ///
    /// The submission itself arrives as a modal-submit interaction and is
    /// routed by the MessageComponentHandler.
    async fn handle_suggestion(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        command
            .create_interaction_response(&serenity_ctx.http, |response| {
                response
                    .kind(InteractionResponseType::Modal)
                    .interaction_response_data(|modal| {
                        modal
                            .custom_id(suggestions::MODAL_ID)
                            .title("Submit a suggestion")
                            .components(|components| {
                                components
                                    .create_action_row(|row| {
                                        row.create_input_text(|input| {
                                            input
                                                .custom_id(suggestions::TITLE_INPUT_ID)
                                                .label("Title")
                                                .style(InputTextStyle::Short)
                                                .required(true)
                                        })
                                    })
                                    .create_action_row(|row| {
                                        row.create_input_text(|input| {
                                            input
                                                .custom_id(suggestions::BODY_INPUT_ID)
                                                .label("Details")
                                                .style(InputTextStyle::Paragraph)
                                                .required(true)
                                        })
                                    })
                            })
                    })
            })
            .await?;
        Ok(())
    }

    /// Handle /tryouts - post the tryout-process announcement
    async fn handle_tryouts(
        &self,
        serenity_ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let mut embed = CreateEmbed::default();
        embed.color(ACCENT_COLOR);
        embed.title("Tryouts");
        embed.description(
            "Tryouts are now open! Here is how the process works:\n\n\
             1. Find a staff member or anyone with the tryout role.\n\
             2. Play your tryout matches - results are recorded by the staff member.\n\
             3. Staff review the results and assign your rank role.\n\n\
             Good luck!",
        );

        respond_embed(&serenity_ctx.http, command, embed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_handler_commands() {
        let handler = CommunityHandler;
        let names = handler.command_names();

        assert!(names.contains(&"suggestion"));
        assert!(names.contains(&"tryouts"));
        assert_eq!(names.len(), 2);
    }
}
