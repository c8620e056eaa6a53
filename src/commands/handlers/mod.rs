//! Per-command handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add ChannelHandler (createchannel, createcategory, close) and
//!   CommunityHandler (suggestion, tryouts)
//! - 1.0.0: Initial handlers (duo, moderation, roles, messaging, utility)

pub mod channels;
pub mod community;
pub mod duo;
pub mod messaging;
pub mod moderation;
pub mod roles;
pub mod utility;

use std::sync::Arc;

use super::handler::SlashCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(duo::DuoHandler),
        Arc::new(moderation::ModerationHandler),
        Arc::new(roles::RoleHandler),
        Arc::new(channels::ChannelHandler),
        Arc::new(messaging::MessagingHandler),
        Arc::new(community::CommunityHandler),
        Arc::new(utility::UtilityHandler),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;
    use crate::commands::slash::create_slash_commands;

    #[test]
    fn test_every_registered_command_has_a_handler() {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }

        for command in create_slash_commands() {
            let name = command.0.get("name").unwrap().as_str().unwrap();
            assert!(registry.contains(name), "No handler for command: {name}");
        }
        assert_eq!(registry.len(), create_slash_commands().len());
    }
}
