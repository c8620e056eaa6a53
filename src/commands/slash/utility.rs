//! Utility slash commands: /ping, /avatar, /help

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates the utility command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_ping_command(),
        create_avatar_command(),
        create_help_command(),
    ]
}

fn create_ping_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("ping")
        .description("Checks the bot's latency.")
        .to_owned()
}

fn create_avatar_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("avatar")
        .description("Displays a user's avatar.")
        .create_option(|option| {
            option
                .name("user")
                .description("The user to get the avatar of.")
                .kind(CommandOptionType::User)
                .required(false)
        })
        .to_owned()
}

fn create_help_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("help")
        .description("Lists all available commands.")
        .to_owned()
}
