//! # Core Module
//!
//! Core domain types, configuration, and shared Discord helpers.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add permissions module with hierarchy predicates
//! - 1.0.0: Initial creation with config, response, and embed modules

pub mod config;
pub mod embeds;
pub mod permissions;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{
    respond, respond_embed, respond_ephemeral, truncate_for_embed, truncate_for_message,
    EMBED_LIMIT, MESSAGE_LIMIT,
};
