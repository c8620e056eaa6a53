//! Channel management slash commands: /createchannel, /createcategory, /close

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::permissions::Permissions;

/// Creates the channel management command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_createchannel_command(),
        create_createcategory_command(),
        create_close_command(),
    ]
}

fn create_createchannel_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("createchannel")
        .description("Creates a new channel in the server.")
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .create_option(|option| {
            option
                .name("name")
                .description("The name for the new channel.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("copy_from")
                .description("The channel to copy permissions from.")
                .kind(CommandOptionType::Channel)
                .required(false)
        })
        .to_owned()
}

fn create_createcategory_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("createcategory")
        .description("Creates a new category in the server.")
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .create_option(|option| {
            option
                .name("name")
                .description("The name for the new category.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("copy_from")
                .description("The category to copy permissions from.")
                .kind(CommandOptionType::Channel)
                .required(false)
        })
        .to_owned()
}

fn create_close_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("close")
        .description("Locks a channel for 24 hours.")
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .create_option(|option| {
            option
                .name("channel")
                .description("The channel to lock (defaults to the current channel).")
                .kind(CommandOptionType::Channel)
                .required(false)
        })
        .to_owned()
}
