//! Domain entities for the Tradewind session domain
//!
//! Sessions track interactive logins; refresh tokens rotate within a family
//! bound to one session. Token exchanges, impersonation sessions, deny list
//! entries and idempotency records round out the operational state the token
//! endpoints persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use tradewind_common::{EntityId, EntityInfo, MappingError};

/// Session lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Revoked,
}

impl SessionStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            SessionStatus::Active => 1,
            SessionStatus::Revoked => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(SessionStatus::Active),
            2 => Ok(SessionStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "Session",
                field: "status",
                value,
            }),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Revoked => write!(f, "revoked"),
        }
    }
}

/// An interactive login session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub status: SessionStatus,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Reconstruct a session from previously persisted state
    #[allow(clippy::too_many_arguments)]
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        status: SessionStatus,
        ip_address: Option<String>,
        user_agent: Option<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        revoked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Session {
            info,
            user_id,
            status,
            ip_address,
            user_agent,
            issued_at,
            expires_at,
            revoked_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// Usable for authentication: active and not past its expiry
    pub fn is_valid(&self) -> bool {
        self.status == SessionStatus::Active && !self.is_expired()
    }
}

/// Refresh token lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshTokenStatus {
    Active,
    Used,
    Revoked,
}

impl RefreshTokenStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            RefreshTokenStatus::Active => 1,
            RefreshTokenStatus::Used => 2,
            RefreshTokenStatus::Revoked => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(RefreshTokenStatus::Active),
            2 => Ok(RefreshTokenStatus::Used),
            3 => Ok(RefreshTokenStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "RefreshToken",
                field: "status",
                value,
            }),
        }
    }
}

/// A rotating refresh token
///
/// Tokens in the same family share `family_id`; reuse of a `Used` token
/// upstream triggers family-wide revocation.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub info: EntityInfo,
    pub session_id: EntityId,
    pub token_hash: String,
    pub family_id: Uuid,
    pub status: RefreshTokenStatus,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshToken")
            .field("info", &self.info)
            .field("session_id", &self.session_id)
            .field("token_hash", &"[REDACTED]")
            .field("family_id", &self.family_id)
            .field("status", &self.status)
            .field("expires_at", &self.expires_at)
            .field("used_at", &self.used_at)
            .finish()
    }
}

impl RefreshToken {
    /// Reconstruct a refresh token from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        session_id: EntityId,
        token_hash: String,
        family_id: Uuid,
        status: RefreshTokenStatus,
        expires_at: DateTime<Utc>,
        used_at: Option<DateTime<Utc>>,
    ) -> Self {
        RefreshToken {
            info,
            session_id,
            token_hash,
            family_id,
            status,
            expires_at,
            used_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Audit record of an RFC 8693 token exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenExchange {
    pub info: EntityInfo,
    /// Service client acting on behalf of the subject
    pub actor_service_client_id: EntityId,
    pub subject_token_hash: String,
    pub issued_token_hash: String,
    pub exchanged_at: DateTime<Utc>,
}

impl TokenExchange {
    /// Reconstruct a token exchange from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        actor_service_client_id: EntityId,
        subject_token_hash: String,
        issued_token_hash: String,
        exchanged_at: DateTime<Utc>,
    ) -> Self {
        TokenExchange {
            info,
            actor_service_client_id,
            subject_token_hash,
            issued_token_hash,
            exchanged_at,
        }
    }
}

/// Impersonation session lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpersonationSessionStatus {
    Active,
    Ended,
}

impl ImpersonationSessionStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            ImpersonationSessionStatus::Active => 1,
            ImpersonationSessionStatus::Ended => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(ImpersonationSessionStatus::Active),
            2 => Ok(ImpersonationSessionStatus::Ended),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "ImpersonationSession",
                field: "status",
                value,
            }),
        }
    }
}

/// A support operator acting as a target user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpersonationSession {
    pub info: EntityInfo,
    pub operator_user_id: EntityId,
    pub target_user_id: EntityId,
    pub status: ImpersonationSessionStatus,
    /// Operator-supplied justification, kept for audit
    pub reason: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl ImpersonationSession {
    /// Reconstruct an impersonation session from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        operator_user_id: EntityId,
        target_user_id: EntityId,
        status: ImpersonationSessionStatus,
        reason: String,
        started_at: DateTime<Utc>,
        ended_at: Option<DateTime<Utc>>,
    ) -> Self {
        ImpersonationSession {
            info,
            operator_user_id,
            target_user_id,
            status,
            reason,
            started_at,
            ended_at,
        }
    }
}

/// What a deny list entry blocks, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenyListEntryType {
    /// A single token by its jti claim
    Jti,
    /// Every token of a user
    UserId,
}

impl DenyListEntryType {
    pub const fn ordinal(self) -> i16 {
        match self {
            DenyListEntryType::Jti => 1,
            DenyListEntryType::UserId => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(DenyListEntryType::Jti),
            2 => Ok(DenyListEntryType::UserId),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "DenyListEntry",
                field: "entry_type",
                value,
            }),
        }
    }
}

/// A token or principal barred from authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenyListEntry {
    pub info: EntityInfo,
    pub entry_type: DenyListEntryType,
    /// The denied jti or user id, as text
    pub value: String,
    pub reason: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl DenyListEntry {
    /// Reconstruct a deny list entry from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        entry_type: DenyListEntryType,
        value: String,
        reason: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        DenyListEntry {
            info,
            entry_type,
            value,
            reason,
            expires_at,
        }
    }
}

/// Stored outcome of a write request, keyed by the caller's idempotency key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdempotencyRecord {
    pub info: EntityInfo,
    pub idempotency_key: String,
    pub request_hash: String,
    /// Serialized response replayed on retry; absent while in flight
    pub response_snapshot: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl IdempotencyRecord {
    /// Reconstruct an idempotency record from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        idempotency_key: String,
        request_hash: String,
        response_snapshot: Option<String>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Self {
        IdempotencyRecord {
            info,
            idempotency_key,
            request_hash,
            response_snapshot,
            completed_at,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn entity_info() -> EntityInfo {
        EntityInfo::new(
            EntityId::new(Uuid::new_v4()),
            TenantCode::new(Uuid::new_v4()),
            EntityChangeInfo::new(
                "user-3",
                Utc::now(),
                CorrelationId::new(Uuid::new_v4()),
                "api",
                "session.login",
            ),
            None,
            RegistryVersion::new(1),
        )
    }

    fn session(status: SessionStatus, expires_at: DateTime<Utc>) -> Session {
        Session::from_existing(
            entity_info(),
            EntityId::new(Uuid::new_v4()),
            status,
            Some("203.0.113.9".to_string()),
            Some("Mozilla/5.0".to_string()),
            Utc::now(),
            expires_at,
            None,
        )
    }

    #[test]
    fn test_session_status_ordinals_round_trip() {
        for status in [SessionStatus::Active, SessionStatus::Revoked] {
            assert_eq!(SessionStatus::from_ordinal(status.ordinal()), Ok(status));
        }
        assert!(SessionStatus::from_ordinal(0).is_err());
    }

    #[test]
    fn test_refresh_token_status_ordinals() {
        assert_eq!(RefreshTokenStatus::Active.ordinal(), 1);
        assert_eq!(RefreshTokenStatus::Used.ordinal(), 2);
        assert_eq!(RefreshTokenStatus::Revoked.ordinal(), 3);
    }

    #[test]
    fn test_refresh_token_status_two_is_used() {
        assert_eq!(
            RefreshTokenStatus::from_ordinal(2),
            Ok(RefreshTokenStatus::Used)
        );
    }

    #[test]
    fn test_refresh_token_status_unknown_ordinal_rejected() {
        for bad in [0, 4, -3] {
            assert_eq!(
                RefreshTokenStatus::from_ordinal(bad),
                Err(MappingError::UnknownOrdinal {
                    entity: "RefreshToken",
                    field: "status",
                    value: bad,
                })
            );
        }
    }

    #[test]
    fn test_impersonation_status_ordinals_round_trip() {
        for status in [
            ImpersonationSessionStatus::Active,
            ImpersonationSessionStatus::Ended,
        ] {
            assert_eq!(
                ImpersonationSessionStatus::from_ordinal(status.ordinal()),
                Ok(status)
            );
        }
    }

    #[test]
    fn test_deny_list_entry_type_ordinals() {
        assert_eq!(DenyListEntryType::Jti.ordinal(), 1);
        assert_eq!(DenyListEntryType::UserId.ordinal(), 2);
        assert_eq!(
            DenyListEntryType::from_ordinal(2),
            Ok(DenyListEntryType::UserId)
        );
        assert!(DenyListEntryType::from_ordinal(3).is_err());
    }

    #[test]
    fn test_session_is_valid_states() {
        let active = session(SessionStatus::Active, Utc::now() + chrono::Duration::hours(8));
        assert!(active.is_valid());
        assert!(!active.is_expired());

        let revoked = session(
            SessionStatus::Revoked,
            Utc::now() + chrono::Duration::hours(8),
        );
        assert!(!revoked.is_valid());

        let expired = session(
            SessionStatus::Active,
            Utc::now() - chrono::Duration::seconds(5),
        );
        assert!(expired.is_expired());
        assert!(!expired.is_valid());
    }

    #[test]
    fn test_refresh_token_debug_redacts_hash() {
        let token = RefreshToken::from_existing(
            entity_info(),
            EntityId::new(Uuid::new_v4()),
            "deadbeef".to_string(),
            Uuid::new_v4(),
            RefreshTokenStatus::Active,
            Utc::now() + chrono::Duration::days(14),
            None,
        );

        let debug = format!("{token:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("deadbeef"));
    }

    #[test]
    fn test_idempotency_record_completion() {
        let pending = IdempotencyRecord::from_existing(
            entity_info(),
            "idem-123".to_string(),
            "sha256:abc".to_string(),
            None,
            None,
        );
        assert!(!pending.is_completed());

        let completed = IdempotencyRecord {
            response_snapshot: Some("{\"order\":\"ok\"}".to_string()),
            completed_at: Some(Utc::now()),
            ..pending
        };
        assert!(completed.is_completed());
    }

    #[test]
    fn test_session_serde_round_trip() {
        let session = session(SessionStatus::Active, Utc::now() + chrono::Duration::hours(1));
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
