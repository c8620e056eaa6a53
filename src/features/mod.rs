//! # Features Layer
//!
//! Domain state behind the command handlers: the duo matchmaking flow, the
//! timed channel locks, and the suggestion box.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add locks and suggestions
//! - 1.0.0: Initial creation with the duo feature

pub mod duo;
pub mod locks;
pub mod suggestions;

pub use duo::{DuoAction, DuoRequest, RoleRegistry};
pub use locks::{ChannelLockManager, LOCK_DURATION};

/// Crate version reported in logs
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
