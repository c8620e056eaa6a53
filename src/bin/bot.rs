use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use duobot::command_handler::CommandHandler;
use duobot::commands::{register_guild_commands, CommandContext};
use duobot::core::Config;
use duobot::features::get_bot_version;
use duobot::http_server::start_liveness_server;
use duobot::message_components::MessageComponentHandler;

struct Handler {
    command_handler: Arc<CommandHandler>,
    component_handler: Arc<MessageComponentHandler>,
    guild_id: GuildId,
}

impl Handler {
    fn new(
        command_handler: CommandHandler,
        component_handler: MessageComponentHandler,
        guild_id: GuildId,
    ) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            component_handler: Arc::new(component_handler),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        // Guild-scoped registration propagates instantly, which is all a
        // single-guild bot needs.
        if let Err(e) = register_guild_commands(&ctx.http, self.guild_id).await {
            error!("❌ Failed to register guild slash commands: {e}");
        } else {
            info!("✅ Successfully registered slash commands for guild {}", self.guild_id);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                if let Err(e) = self
                    .command_handler
                    .handle_slash_command(&ctx, &command)
                    .await
                {
                    error!(
                        "Error handling slash command '{}': {}",
                        command.data.name, e
                    );

                    // Surface the failure to the invoker; if a response was
                    // already sent this is a no-op failure we ignore.
                    let _ = command
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message
                                        .content(format!("❌ Something went wrong: {e}"))
                                        .ephemeral(true)
                                })
                        })
                        .await;
                }
            }
            Interaction::MessageComponent(component) => {
                if let Err(e) = self
                    .component_handler
                    .handle_component_interaction(&ctx, &component)
                    .await
                {
                    error!(
                        "Error handling component interaction '{}': {}",
                        component.data.custom_id, e
                    );

                    let _ = component
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message
                                        .content(format!("❌ Something went wrong: {e}"))
                                        .ephemeral(true)
                                })
                        })
                        .await;
                }
            }
            Interaction::ModalSubmit(modal) => {
                if let Err(e) = self.component_handler.handle_modal_submit(&ctx, &modal).await {
                    error!("Error handling modal submit '{}': {}", modal.data.custom_id, e);

                    let _ = modal
                        .create_interaction_response(&ctx.http, |response| {
                            response
                                .kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|message| {
                                    message
                                        .content(format!("❌ Something went wrong: {e}"))
                                        .ephemeral(true)
                                })
                        })
                        .await;
                }
            }
            Interaction::Ping(_) => {
                info!("Ping interaction received - Discord health check");
                // Ping interactions are automatically handled by Serenity
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Duo Discord Bot v{}...", get_bot_version());

    let context = Arc::new(CommandContext::new(config.guild_id));

    // The optional privileged role gets duo-channel visibility from the start.
    if let Some(role) = config.admin_role_id {
        context.role_registry.seed_channel_admin_role(role).await;
        info!("Seeded duo channel admin role {role} from ADMIN_ROLE_ID");
    }

    let command_handler = CommandHandler::new(Arc::clone(&context));
    let component_handler = MessageComponentHandler::new(command_handler.context());

    // Keep-alive endpoint for the hosting platform's uptime checks.
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = start_liveness_server(port).await {
            error!("Liveness server exited: {e}");
        }
    });

    let handler = Handler::new(command_handler, component_handler, config.guild_id);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
