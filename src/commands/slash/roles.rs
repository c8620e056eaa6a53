//! Role management slash commands: /promote, /createrole, /addrole, /removerole, /deleterole

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::permissions::Permissions;

/// Creates the role management command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_promote_command(),
        create_createrole_command(),
        create_addrole_command(),
        create_removerole_command(),
        create_deleterole_command(),
    ]
}

fn create_promote_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("promote")
        .description("Removes old roles and adds a new one to a user.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .create_option(|option| {
            option
                .name("user")
                .description("The user to promote.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("role")
                .description("The new role for the user.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .to_owned()
}

fn create_createrole_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("createrole")
        .description("Creates a new role with settings copied from an existing role.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .create_option(|option| {
            option
                .name("name")
                .description("The name for the new role.")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("copy_from")
                .description("The role to copy permissions, color, etc. from.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .to_owned()
}

fn create_addrole_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("addrole")
        .description("Adds a role to a user.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .create_option(|option| {
            option
                .name("user")
                .description("The user to add the role to.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("role")
                .description("The role to add.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .to_owned()
}

fn create_removerole_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("removerole")
        .description("Removes a role from a user.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .create_option(|option| {
            option
                .name("user")
                .description("The user to remove the role from.")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("role")
                .description("The role to remove.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .to_owned()
}

fn create_deleterole_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("deleterole")
        .description("Deletes a role from the server.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .create_option(|option| {
            option
                .name("role")
                .description("The role to delete.")
                .kind(CommandOptionType::Role)
                .required(true)
        })
        .to_owned()
}
