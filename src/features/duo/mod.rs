//! # Duo Feature
//!
//! Duo request matchmaking: request → accept/decline → private channel.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod registry;
pub mod request;

pub use registry::RoleRegistry;
pub use request::{DuoAction, DuoRequest, ACCEPT_PREFIX, DECLINE_PREFIX};
