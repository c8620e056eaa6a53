//! # Channel Locks Feature
//!
//! Timed channel lock behind `/close`: deny Send Messages for `@everyone`,
//! re-permit the moderator and the owner, restore everything 24 hours later.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//! - **Toggleable**: false

pub mod manager;

pub use manager::{
    allow_send, capture_overwrite, deny_send, is_send_locked, restore_channel, schedule_restore,
    ChannelLock, ChannelLockManager, SavedOverwrite, LOCK_DURATION,
};
