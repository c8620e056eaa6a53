//! Interaction reply helpers and Discord message utilities
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add component and modal ephemeral helpers
//! - 1.0.0: Extracted from duplicate reply closures across the handlers

use anyhow::Result;
use serenity::builder::CreateEmbed;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Reply to a slash command with plain content, visible to the channel.
pub async fn respond(
    http: &Http,
    command: &ApplicationCommandInteraction,
    content: impl ToString,
) -> Result<()> {
    command
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content))
        })
        .await?;
    Ok(())
}

/// Reply to a slash command with content only the invoker can see.
pub async fn respond_ephemeral(
    http: &Http,
    command: &ApplicationCommandInteraction,
    content: impl ToString,
) -> Result<()> {
    command
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(true))
        })
        .await?;
    Ok(())
}

/// Reply to a slash command with a single embed.
pub async fn respond_embed(
    http: &Http,
    command: &ApplicationCommandInteraction,
    embed: CreateEmbed,
) -> Result<()> {
    command
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.set_embed(embed))
        })
        .await?;
    Ok(())
}

/// Ephemeral reply to a button click without touching the original message.
pub async fn component_respond_ephemeral(
    http: &Http,
    interaction: &MessageComponentInteraction,
    content: impl ToString,
) -> Result<()> {
    interaction
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(true))
        })
        .await?;
    Ok(())
}

/// Ephemeral reply to a modal submission.
pub async fn modal_respond_ephemeral(
    http: &Http,
    interaction: &ModalSubmitInteraction,
    content: impl ToString,
) -> Result<()> {
    interaction
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(true))
        })
        .await?;
    Ok(())
}

/// Truncate text to fit the embed description limit, adding ellipsis if needed
pub fn truncate_for_embed(text: &str) -> String {
    truncate(text, EMBED_LIMIT)
}

/// Truncate text to fit the message content limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    truncate(text, MESSAGE_LIMIT)
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    // Find a safe UTF-8 boundary
    let mut end = limit - 3; // Room for "..."
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_for_embed("short text"), "short text");
        assert_eq!(truncate_for_message("short text"), "short text");
    }

    #[test]
    fn test_truncate_for_embed_long() {
        let text = "a".repeat(5000);
        let result = truncate_for_embed(&text);
        assert!(result.len() <= EMBED_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_for_message_long() {
        let text = "b".repeat(3000);
        let result = truncate_for_message(&text);
        assert!(result.len() <= MESSAGE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_utf8_safety() {
        let text = "世界".repeat(2000);
        let result = truncate_for_embed(&text);
        assert!(result.len() <= EMBED_LIMIT);
        // Constructing the String would have panicked on a split character.
        assert!(result.ends_with("..."));
    }
}
