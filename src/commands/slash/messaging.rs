//! Messaging slash commands: /msgserver, /embed

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::permissions::Permissions;

/// Creates the messaging command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_msgserver_command(), create_embed_command()]
}

fn create_msgserver_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("msgserver")
        .description("Sends a message to a specific channel.")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .create_option(|option| {
            option
                .name("channel")
                .description("The channel to send the message to.")
                .kind(CommandOptionType::Channel)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("msg")
                .description("The message to send.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

fn create_embed_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("embed")
        .description("Sends a custom embed message.")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .create_option(|option| {
            option
                .name("channel")
                .description("The channel to send the embed to.")
                .kind(CommandOptionType::Channel)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("title")
                .description("The title of the embed.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("description")
                .description("The description of the embed.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("color")
                .description("The hex color of the embed (e.g., #FF0000).")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("author_name")
                .description("The name of the author.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("author_url")
                .description("A URL for the author's link.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("author_icon_url")
                .description("A URL for the author's icon.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("thumbnail_url")
                .description("A URL for the embed thumbnail.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("image_url")
                .description("A URL for the main image.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("footer_text")
                .description("The text for the footer.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("footer_icon_url")
                .description("A URL for the footer's icon.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("timestamp")
                .description("Show the current timestamp in the footer.")
                .kind(CommandOptionType::Boolean)
                .required(false)
        })
        .to_owned()
}
