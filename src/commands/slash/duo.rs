//! Duo slash commands: /duo, /duobotrole, /duo_allowed_role

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::permissions::Permissions;

/// Creates the duo command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_duo_command(),
        create_duobotrole_command(),
        create_duo_allowed_role_command(),
    ]
}

/// Creates the duo command - sends a duo request to another user
fn create_duo_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("duo")
        .description("Sends a duo request to another user.")
        .create_option(|option| {
            option
                .name("username")
                .description("The user to send the duo request to.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .to_owned()
}

/// Creates the duobotrole command (admin) - roles that can see duo channels
fn create_duobotrole_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("duobotrole")
        .description("Sets which roles can access duo channels.")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .create_option(|option| {
            option
                .name("role1")
                .description("The first role.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("role2")
                .description("The second role.")
                .kind(CommandOptionType::Role)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("role3")
                .description("The third role.")
                .kind(CommandOptionType::Role)
                .required(false)
        })
        .to_owned()
}

/// Creates the duo_allowed_role command (admin) - roles that may use /duo
fn create_duo_allowed_role_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("duo_allowed_role")
        .description("Sets which roles are allowed to use the /duo command.")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .create_option(|option| {
            option
                .name("role1")
                .description("The first role.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("role2")
                .description("The second role.")
                .kind(CommandOptionType::Role)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("role3")
                .description("The third role.")
                .kind(CommandOptionType::Role)
                .required(false)
        })
        .to_owned()
}
