//! Community slash commands: /suggestion, /tryouts

use serenity::builder::CreateApplicationCommand;

/// Creates the community command family
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_suggestion_command(), create_tryouts_command()]
}

fn create_suggestion_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("suggestion")
        .description("Submits a suggestion to the server owner.")
        .to_owned()
}

fn create_tryouts_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("tryouts")
        .description("Starts the tryout process.")
        .to_owned()
}
