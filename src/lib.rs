// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// UI components
pub mod message_components;

// Application layer
pub mod command_handler;
pub mod commands;

// Process boundary - liveness endpoint for uptime monitors
pub mod http_server;

// Re-export core config for convenience
pub use core::Config;

// Re-export feature items
pub use features::{
    // Duo matchmaking
    DuoAction, DuoRequest, RoleRegistry,
    // Channel locks
    ChannelLockManager, LOCK_DURATION,
};
