//! Domain entities for the Tradewind account domain
//!
//! Users are the human principals of a tenant's storefront and back office.
//! The remaining entities are the credential trail persisted around them:
//! federated logins, login attempts, MFA setups, password history, reset
//! tokens and recovery codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use tradewind_common::{EntityId, EntityInfo, Error, MappingError};

/// User lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Blocked,
}

impl UserStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            UserStatus::Active => 1,
            UserStatus::Suspended => 2,
            UserStatus::Blocked => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(UserStatus::Active),
            2 => Ok(UserStatus::Suspended),
            3 => Ok(UserStatus::Blocked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "User",
                field: "status",
                value,
            }),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Suspended => write!(f, "suspended"),
            UserStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// User entity
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub info: EntityInfo,
    pub email: String,
    pub display_name: Option<String>,
    /// Absent for federated-only accounts
    pub password_hash: Option<String>,
    pub status: UserStatus,
    pub mfa_enabled: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("info", &self.info)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "[REDACTED]"))
            .field("status", &self.status)
            .field("mfa_enabled", &self.mfa_enabled)
            .field("last_login_at", &self.last_login_at)
            .finish()
    }
}

impl User {
    /// Reconstruct a user from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        email: String,
        display_name: Option<String>,
        password_hash: Option<String>,
        status: UserStatus,
        mfa_enabled: bool,
        last_login_at: Option<DateTime<Utc>>,
    ) -> Self {
        User {
            info,
            email,
            display_name,
            password_hash,
            status,
            mfa_enabled,
            last_login_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<(), Error> {
        // Validate email format (validator crate enforces RFC 5321 including length)
        if !self.email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if let Some(ref name) = self.display_name {
            if name.is_empty() || name.len() > 100 {
                return Err(Error::Validation(
                    "Display name must be 1-100 characters".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Federated identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginProvider(String);

impl LoginProvider {
    pub fn new(provider: impl Into<String>) -> Self {
        LoginProvider(provider.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LoginProvider {
    fn from(provider: String) -> Self {
        LoginProvider(provider)
    }
}

impl From<LoginProvider> for String {
    fn from(provider: LoginProvider) -> Self {
        provider.0
    }
}

impl fmt::Display for LoginProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A federated login linked to a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLogin {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub provider: LoginProvider,
    /// Subject identifier issued by the provider
    pub provider_subject: String,
    pub display_name: Option<String>,
    pub linked_at: DateTime<Utc>,
}

impl ExternalLogin {
    /// Reconstruct an external login from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        provider: LoginProvider,
        provider_subject: String,
        display_name: Option<String>,
        linked_at: DateTime<Utc>,
    ) -> Self {
        ExternalLogin {
            info,
            user_id,
            provider,
            provider_subject,
            display_name,
            linked_at,
        }
    }
}

/// One recorded authentication attempt
///
/// `user_id` is absent when the presented identifier matched no account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub info: EntityInfo,
    pub user_id: Option<EntityId>,
    /// The identifier the caller presented, usually an email address
    pub identifier: String,
    pub succeeded: bool,
    pub ip_address: Option<String>,
    pub failure_reason: Option<String>,
    pub attempted_at: DateTime<Utc>,
}

impl LoginAttempt {
    /// Reconstruct a login attempt from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: Option<EntityId>,
        identifier: String,
        succeeded: bool,
        ip_address: Option<String>,
        failure_reason: Option<String>,
        attempted_at: DateTime<Utc>,
    ) -> Self {
        LoginAttempt {
            info,
            user_id,
            identifier,
            succeeded,
            ip_address,
            failure_reason,
            attempted_at,
        }
    }
}

/// A user's multi-factor authentication enrollment
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct MfaSetup {
    pub info: EntityInfo,
    pub user_id: EntityId,
    /// Enrollment method, e.g. "totp"
    pub method: String,
    /// Shared secret, encrypted at rest by the storage layer
    pub secret: String,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for MfaSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MfaSetup")
            .field("info", &self.info)
            .field("user_id", &self.user_id)
            .field("method", &self.method)
            .field("secret", &"[REDACTED]")
            .field("confirmed_at", &self.confirmed_at)
            .finish()
    }
}

impl MfaSetup {
    /// Reconstruct an MFA setup from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        method: String,
        secret: String,
        confirmed_at: Option<DateTime<Utc>>,
    ) -> Self {
        MfaSetup {
            info,
            user_id,
            method,
            secret,
            confirmed_at,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }
}

/// A retired password hash, kept to block reuse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordHistory {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub password_hash: String,
    pub set_at: DateTime<Utc>,
}

impl PasswordHistory {
    /// Reconstruct a password history entry from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        password_hash: String,
        set_at: DateTime<Utc>,
    ) -> Self {
        PasswordHistory {
            info,
            user_id,
            password_hash,
            set_at,
        }
    }
}

/// A single-use password reset token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
}

impl PasswordResetToken {
    /// Reconstruct a password reset token from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        token_hash: String,
        expires_at: DateTime<Utc>,
        consumed_at: Option<DateTime<Utc>>,
    ) -> Self {
        PasswordResetToken {
            info,
            user_id,
            token_hash,
            expires_at,
            consumed_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// Usable: never consumed and not past its expiry
    pub fn is_usable(&self) -> bool {
        self.consumed_at.is_none() && !self.is_expired()
    }
}

/// A single-use MFA recovery code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryCode {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub code_hash: String,
    pub used_at: Option<DateTime<Utc>>,
}

impl RecoveryCode {
    /// Reconstruct a recovery code from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        code_hash: String,
        used_at: Option<DateTime<Utc>>,
    ) -> Self {
        RecoveryCode {
            info,
            user_id,
            code_hash,
            used_at,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }
}
