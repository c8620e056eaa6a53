//! Moderation slash commands: /ban, /kick, /warn, /purge

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::permissions::Permissions;

/// Creates the moderation command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_ban_command(),
        create_kick_command(),
        create_warn_command(),
        create_purge_command(),
    ]
}

fn create_ban_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("ban")
        .description("Bans a user from the server.")
        .default_member_permissions(Permissions::BAN_MEMBERS)
        .create_option(|option| {
            option
                .name("user")
                .description("The user to ban.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("reason")
                .description("The reason for the ban.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

fn create_kick_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("kick")
        .description("Kicks a user from the server.")
        .default_member_permissions(Permissions::KICK_MEMBERS)
        .create_option(|option| {
            option
                .name("user")
                .description("The user to kick.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("reason")
                .description("The reason for the kick.")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

fn create_warn_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("warn")
        .description("Warns a user.")
        .default_member_permissions(Permissions::MODERATE_MEMBERS)
        .create_option(|option| {
            option
                .name("user")
                .description("The user to warn.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("reason")
                .description("The reason for the warning.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

fn create_purge_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("purge")
        .description("Deletes a number of messages from the channel.")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .create_option(|option| {
            option
                .name("amount")
                .description("The number of messages to delete (1-100).")
                .kind(CommandOptionType::Integer)
                .required(true)
        })
        .to_owned()
}
