use anyhow::{anyhow, bail, Result};
use dashmap::DashMap;
use log::{error, info};
use serenity::http::Http;
use serenity::model::channel::{PermissionOverwrite, PermissionOverwriteType};
use serenity::model::id::{ChannelId, RoleId};
use serenity::model::permissions::Permissions;
use std::sync::Arc;
use std::time::Duration;

/// How long a locked channel stays closed before the scheduled restore fires
pub const LOCK_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// A principal's overwrite state captured before the lock touched it.
///
/// `previous` is `None` when the principal had no overwrite on the channel;
/// restoration then deletes the overwrite the lock created instead of
/// re-applying anything.
#[derive(Debug, Clone)]
pub struct SavedOverwrite {
    pub kind: PermissionOverwriteType,
    pub previous: Option<PermissionOverwrite>,
}

/// The recorded state of one locked channel.
#[derive(Debug, Clone)]
pub struct ChannelLock {
    pub saved: Vec<SavedOverwrite>,
}

/// In-memory table of locked channels and the state to restore.
///
/// The table and its scheduled restore tasks are lost on restart: a channel
/// locked across a restart stays locked until someone intervenes manually.
#[derive(Clone, Default)]
pub struct ChannelLockManager {
    locks: Arc<DashMap<ChannelId, ChannelLock>>,
}

impl ChannelLockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lock. Fails when the channel is already tracked, which
    /// rejects a second `/close` without an intervening unlock.
    pub fn begin(&self, channel: ChannelId, saved: Vec<SavedOverwrite>) -> Result<()> {
        match self.locks.entry(channel) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                bail!("channel {channel} is already locked")
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(ChannelLock { saved });
                Ok(())
            }
        }
    }

    pub fn is_locked(&self, channel: ChannelId) -> bool {
        self.locks.contains_key(&channel)
    }

    /// Remove and return the recorded state for a channel.
    pub fn take(&self, channel: ChannelId) -> Option<ChannelLock> {
        self.locks.remove(&channel).map(|(_, lock)| lock)
    }
}

/// Whether the channel's `@everyone` overwrite already denies Send Messages.
pub fn is_send_locked(overwrites: &[PermissionOverwrite], everyone: RoleId) -> bool {
    overwrites.iter().any(|overwrite| {
        overwrite.kind == PermissionOverwriteType::Role(everyone)
            && overwrite.deny.contains(Permissions::SEND_MESSAGES)
    })
}

/// Capture the current overwrite for a principal, if any.
pub fn capture_overwrite(
    overwrites: &[PermissionOverwrite],
    kind: PermissionOverwriteType,
) -> SavedOverwrite {
    let previous = overwrites
        .iter()
        .find(|overwrite| overwrite.kind == kind)
        .cloned();
    SavedOverwrite { kind, previous }
}

/// Overwrite denying Send Messages for a principal, preserving any unrelated
/// bits of an existing overwrite.
pub fn deny_send(existing: Option<&PermissionOverwrite>, kind: PermissionOverwriteType) -> PermissionOverwrite {
    let (allow, deny) = existing
        .map(|overwrite| (overwrite.allow, overwrite.deny))
        .unwrap_or((Permissions::empty(), Permissions::empty()));
    PermissionOverwrite {
        allow: allow & !Permissions::SEND_MESSAGES,
        deny: deny | Permissions::SEND_MESSAGES,
        kind,
    }
}

/// Overwrite re-permitting Send Messages for a principal, preserving any
/// unrelated bits of an existing overwrite.
pub fn allow_send(existing: Option<&PermissionOverwrite>, kind: PermissionOverwriteType) -> PermissionOverwrite {
    let (allow, deny) = existing
        .map(|overwrite| (overwrite.allow, overwrite.deny))
        .unwrap_or((Permissions::empty(), Permissions::empty()));
    PermissionOverwrite {
        allow: allow | Permissions::SEND_MESSAGES,
        deny: deny & !Permissions::SEND_MESSAGES,
        kind,
    }
}

/// Re-apply the recorded permission state for a locked channel.
pub async fn restore_channel(
    http: &Http,
    manager: &ChannelLockManager,
    channel: ChannelId,
) -> Result<()> {
    let lock = manager
        .take(channel)
        .ok_or_else(|| anyhow!("no lock recorded for channel {channel}"))?;

    for saved in lock.saved {
        match saved.previous {
            Some(overwrite) => channel.create_permission(http, &overwrite).await?,
            None => channel.delete_permission(http, saved.kind).await?,
        }
    }
    Ok(())
}

/// Spawn the 24-hour restore task for a freshly locked channel.
///
/// The task only exists in this process. A failed restore is logged and
/// announced in the channel; it is not retried.
pub fn schedule_restore(http: Arc<Http>, manager: ChannelLockManager, channel: ChannelId) {
    tokio::spawn(async move {
        tokio::time::sleep(LOCK_DURATION).await;
        match restore_channel(&http, &manager, channel).await {
            Ok(()) => {
                info!("🔓 Restored permissions on channel {channel} after scheduled unlock");
                let _ = channel
                    .say(&http, "This channel has been reopened.")
                    .await;
            }
            Err(e) => {
                error!("❌ Failed to restore permissions on channel {channel}: {e}");
                let _ = channel
                    .say(
                        &http,
                        format!("Failed to automatically reopen this channel: {e}"),
                    )
                    .await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::id::UserId;

    fn overwrite(kind: PermissionOverwriteType, allow: Permissions, deny: Permissions) -> PermissionOverwrite {
        PermissionOverwrite { allow, deny, kind }
    }

    #[test]
    fn test_second_lock_rejected() {
        let manager = ChannelLockManager::new();
        assert!(manager.begin(ChannelId(1), Vec::new()).is_ok());
        assert!(manager.begin(ChannelId(1), Vec::new()).is_err());
        // Other channels are unaffected.
        assert!(manager.begin(ChannelId(2), Vec::new()).is_ok());
    }

    #[test]
    fn test_take_clears_the_entry() {
        let manager = ChannelLockManager::new();
        manager.begin(ChannelId(1), Vec::new()).unwrap();
        assert!(manager.is_locked(ChannelId(1)));

        assert!(manager.take(ChannelId(1)).is_some());
        assert!(!manager.is_locked(ChannelId(1)));
        assert!(manager.take(ChannelId(1)).is_none());
        // The channel can be locked again afterwards.
        assert!(manager.begin(ChannelId(1), Vec::new()).is_ok());
    }

    #[test]
    fn test_is_send_locked_detects_everyone_deny() {
        let everyone = RoleId(100);
        let locked = vec![overwrite(
            PermissionOverwriteType::Role(everyone),
            Permissions::empty(),
            Permissions::SEND_MESSAGES,
        )];
        assert!(is_send_locked(&locked, everyone));

        let unrelated = vec![overwrite(
            PermissionOverwriteType::Member(UserId(5)),
            Permissions::empty(),
            Permissions::SEND_MESSAGES,
        )];
        assert!(!is_send_locked(&unrelated, everyone));
        assert!(!is_send_locked(&[], everyone));
    }

    #[test]
    fn test_capture_overwrite_records_absence() {
        let kind = PermissionOverwriteType::Member(UserId(5));
        let captured = capture_overwrite(&[], kind.clone());
        assert!(captured.previous.is_none());

        let existing = vec![overwrite(
            kind.clone(),
            Permissions::VIEW_CHANNEL,
            Permissions::empty(),
        )];
        let captured = capture_overwrite(&existing, kind);
        assert_eq!(
            captured.previous.unwrap().allow,
            Permissions::VIEW_CHANNEL
        );
    }

    #[test]
    fn test_deny_send_preserves_unrelated_bits() {
        let kind = PermissionOverwriteType::Role(RoleId(100));
        let existing = overwrite(kind.clone(), Permissions::VIEW_CHANNEL, Permissions::MANAGE_MESSAGES);

        let locked = deny_send(Some(&existing), kind);
        assert!(locked.allow.contains(Permissions::VIEW_CHANNEL));
        assert!(locked.deny.contains(Permissions::MANAGE_MESSAGES));
        assert!(locked.deny.contains(Permissions::SEND_MESSAGES));
        assert!(!locked.allow.contains(Permissions::SEND_MESSAGES));
    }

    #[test]
    fn test_allow_send_clears_the_deny_bit() {
        let kind = PermissionOverwriteType::Member(UserId(5));
        let existing = overwrite(kind.clone(), Permissions::empty(), Permissions::SEND_MESSAGES);

        let opened = allow_send(Some(&existing), kind);
        assert!(opened.allow.contains(Permissions::SEND_MESSAGES));
        assert!(!opened.deny.contains(Permissions::SEND_MESSAGES));
    }
}
