//! One-off slash command registration
//!
//! Pushes the command menu to the configured guild without starting the
//! gateway, the same job the bot performs in its `ready` handler. Useful
//! after editing command definitions when the bot itself is not running.

use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use serenity::http::Http;

use duobot::commands::register_guild_commands;
use duobot::core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Started refreshing application (/) commands.");

    let http = Http::new_with_application_id(&config.discord_token, config.application_id);
    register_guild_commands(&http, config.guild_id).await?;

    info!("Successfully reloaded application (/) commands.");
    Ok(())
}
