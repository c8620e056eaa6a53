//! # Suggestions Feature
//!
//! Suggestion box: `/suggestion` opens a modal and the submission is
//! delivered to the guild owner as a DM embed.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//! - **Toggleable**: false

use serenity::model::application::component::ActionRowComponent;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;

/// Custom-id of the suggestion modal
pub const MODAL_ID: &str = "suggestion_modal";
/// Custom-id of the title input inside the modal
pub const TITLE_INPUT_ID: &str = "suggestion_title";
/// Custom-id of the details input inside the modal
pub const BODY_INPUT_ID: &str = "suggestion_body";

/// A submitted suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub body: String,
}

/// Pull the title and details fields out of a submitted suggestion modal.
///
/// Returns `None` when either input is missing, which only happens for a
/// modal this bot did not build.
pub fn extract_suggestion(modal: &ModalSubmitInteraction) -> Option<Suggestion> {
    let mut title = None;
    let mut body = None;

    for row in &modal.data.components {
        for component in &row.components {
            if let ActionRowComponent::InputText(input) = component {
                match input.custom_id.as_str() {
                    TITLE_INPUT_ID => title = Some(input.value.clone()),
                    BODY_INPUT_ID => body = Some(input.value.clone()),
                    _ => {}
                }
            }
        }
    }

    Some(Suggestion {
        title: title?,
        body: body?,
    })
}
