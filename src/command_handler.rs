//! Slash command dispatcher
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Registry-backed dispatch, one table from name to handler

use anyhow::Result;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::registry::CommandRegistry;
use crate::core::respond_ephemeral;

/// Dispatches slash command interactions to their registered handlers
#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    /// Create the dispatcher with every handler registered
    pub fn new(context: Arc<CommandContext>) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        CommandHandler { context, registry }
    }

    /// The shared context, for wiring into the component handler
    pub fn context(&self) -> Arc<CommandContext> {
        Arc::clone(&self.context)
    }

    /// Route a slash command to its handler
    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let user_id = command.user.id;
        let guild_id = command
            .guild_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "DM".to_string());

        info!(
            "[{}] 📥 Slash command received | Command: {} | User: {} | Channel: {} | Guild: {}",
            request_id, command.data.name, user_id, command.channel_id, guild_id
        );

        match self.registry.get(command.data.name.as_str()) {
            Some(handler) => {
                handler
                    .handle(Arc::clone(&self.context), ctx, command)
                    .await?;
                info!(
                    "[{}] ✅ Command {} completed for user {}",
                    request_id, command.data.name, user_id
                );
                Ok(())
            }
            None => {
                warn!(
                    "[{}] ❓ No handler registered for command: {}",
                    request_id, command.data.name
                );
                respond_ephemeral(&ctx.http, command, "Unknown command.").await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::id::GuildId;

    #[test]
    fn test_dispatcher_registers_all_commands() {
        let handler = CommandHandler::new(Arc::new(CommandContext::new(GuildId(1))));

        for name in ["duo", "ban", "purge", "close", "suggestion", "help"] {
            assert!(handler.registry.contains(name), "Missing handler for {name}");
        }
        assert!(!handler.registry.contains("settings"));
    }
}
