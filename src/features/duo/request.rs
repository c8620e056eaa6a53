use anyhow::{bail, Result};
use serenity::model::id::UserId;

/// Custom-id prefix for the accept button of a duo request
pub const ACCEPT_PREFIX: &str = "duo_accept_";
/// Custom-id prefix for the decline button of a duo request
pub const DECLINE_PREFIX: &str = "duo_decline_";

/// What the clicked button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuoAction {
    Accept,
    Decline,
}

/// A pending duo request.
///
/// The request has no stored record: it lives entirely in the custom-ids of
/// the two buttons attached to the DM, so a process restart makes any
/// outstanding request unactionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuoRequest {
    pub initiator: UserId,
    pub target: UserId,
}

impl DuoRequest {
    /// Create a request, rejecting self-targeting before anything is sent.
    pub fn new(initiator: UserId, target: UserId) -> Result<Self> {
        if initiator == target {
            bail!("a duo request cannot target its own initiator");
        }
        Ok(Self { initiator, target })
    }

    /// Custom-id for the accept button.
    pub fn accept_id(&self) -> String {
        format!("{ACCEPT_PREFIX}{}_{}", self.initiator, self.target)
    }

    /// Custom-id for the decline button.
    pub fn decline_id(&self) -> String {
        format!("{DECLINE_PREFIX}{}_{}", self.initiator, self.target)
    }

    /// Parse a button custom-id back into the action and the request.
    ///
    /// Returns `None` for custom-ids that belong to other components.
    pub fn parse(custom_id: &str) -> Option<(DuoAction, Self)> {
        let (action, rest) = if let Some(rest) = custom_id.strip_prefix(ACCEPT_PREFIX) {
            (DuoAction::Accept, rest)
        } else if let Some(rest) = custom_id.strip_prefix(DECLINE_PREFIX) {
            (DuoAction::Decline, rest)
        } else {
            return None;
        };

        let (initiator, target) = rest.split_once('_')?;
        let initiator = UserId(initiator.parse().ok()?);
        let target = UserId(target.parse().ok()?);
        Some((action, Self { initiator, target }))
    }

    /// Only the addressed target may act on the request.
    pub fn authorized(&self, actor: UserId) -> bool {
        actor == self.target
    }

    /// Name for the private channel created on accept.
    pub fn channel_name(&self, initiator_name: &str, target_name: &str) -> String {
        format!("duo-{initiator_name}-{target_name}").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_targeted_request_rejected() {
        assert!(DuoRequest::new(UserId(42), UserId(42)).is_err());
    }

    #[test]
    fn test_custom_id_round_trip() {
        let request = DuoRequest::new(UserId(111), UserId(222)).unwrap();

        let (action, parsed) = DuoRequest::parse(&request.accept_id()).unwrap();
        assert_eq!(action, DuoAction::Accept);
        assert_eq!(parsed, request);

        let (action, parsed) = DuoRequest::parse(&request.decline_id()).unwrap();
        assert_eq!(action, DuoAction::Decline);
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_parse_rejects_foreign_custom_ids() {
        assert!(DuoRequest::parse("suggestion_modal").is_none());
        assert!(DuoRequest::parse("duo_accept_").is_none());
        assert!(DuoRequest::parse("duo_accept_123").is_none());
        assert!(DuoRequest::parse("duo_accept_abc_def").is_none());
    }

    #[test]
    fn test_only_target_is_authorized() {
        let request = DuoRequest::new(UserId(111), UserId(222)).unwrap();
        assert!(request.authorized(UserId(222)));
        assert!(!request.authorized(UserId(111)));
        assert!(!request.authorized(UserId(333)));
    }

    #[test]
    fn test_channel_name_is_lowercased() {
        let request = DuoRequest::new(UserId(1), UserId(2)).unwrap();
        assert_eq!(request.channel_name("Ash", "Brock"), "duo-ash-brock");
    }
}
