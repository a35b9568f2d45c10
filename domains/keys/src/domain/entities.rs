//! Domain entities for the Tradewind key material domain
//!
//! Signing keys back token signatures; key chains hold symmetric material
//! for encrypting stored secrets. Both keep their private material as an
//! opaque byte blob, already encrypted by the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use tradewind_common::{EntityInfo, MappingError};

/// Signing key lifecycle status, persisted as a small-integer ordinal
///
/// Rotated keys still verify old signatures but sign nothing new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningKeyStatus {
    Active,
    Rotated,
    Revoked,
}

impl SigningKeyStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            SigningKeyStatus::Active => 1,
            SigningKeyStatus::Rotated => 2,
            SigningKeyStatus::Revoked => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(SigningKeyStatus::Active),
            2 => Ok(SigningKeyStatus::Rotated),
            3 => Ok(SigningKeyStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "SigningKey",
                field: "status",
                value,
            }),
        }
    }
}

/// JOSE key id of a signing key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kid(String);

impl Kid {
    pub fn new(kid: impl Into<String>) -> Self {
        Kid(kid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Kid {
    fn from(kid: String) -> Self {
        Kid(kid)
    }
}

impl From<Kid> for String {
    fn from(kid: Kid) -> Self {
        kid.0
    }
}

impl fmt::Display for Kid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An asymmetric token-signing key
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SigningKey {
    pub info: EntityInfo,
    pub kid: Kid,
    /// JOSE algorithm name, e.g. "ES256"
    pub algorithm: String,
    /// Public half as JWK JSON text
    pub public_jwk: String,
    /// Private half, DER-encoded and encrypted at rest
    pub private_key_der: Vec<u8>,
    pub status: SigningKeyStatus,
    pub not_before: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("info", &self.info)
            .field("kid", &self.kid)
            .field("algorithm", &self.algorithm)
            .field("public_jwk", &self.public_jwk)
            .field("private_key_der", &"[REDACTED]")
            .field("status", &self.status)
            .field("not_before", &self.not_before)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl SigningKey {
    /// Reconstruct a signing key from previously persisted state
    #[allow(clippy::too_many_arguments)]
    pub fn from_existing(
        info: EntityInfo,
        kid: Kid,
        algorithm: String,
        public_jwk: String,
        private_key_der: Vec<u8>,
        status: SigningKeyStatus,
        not_before: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        SigningKey {
            info,
            kid,
            algorithm,
            public_jwk,
            private_key_der,
            status,
            not_before,
            expires_at,
        }
    }

    /// Whether the key currently signs new tokens
    pub fn signs(&self) -> bool {
        self.status == SigningKeyStatus::Active
    }

    /// Whether signatures made with this key are still accepted
    pub fn verifies(&self) -> bool {
        matches!(
            self.status,
            SigningKeyStatus::Active | SigningKeyStatus::Rotated
        )
    }
}

/// Key chain lifecycle status, persisted as a small-integer ordinal
///
/// DecryptOnly chains read existing ciphertext but encrypt nothing new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyChainStatus {
    Active,
    DecryptOnly,
}

impl KeyChainStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            KeyChainStatus::Active => 1,
            KeyChainStatus::DecryptOnly => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(KeyChainStatus::Active),
            2 => Ok(KeyChainStatus::DecryptOnly),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "KeyChain",
                field: "status",
                value,
            }),
        }
    }
}

/// Identifier of a key chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(key_id: impl Into<String>) -> Self {
        KeyId(key_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for KeyId {
    fn from(key_id: String) -> Self {
        KeyId(key_id)
    }
}

impl From<KeyId> for String {
    fn from(key_id: KeyId) -> Self {
        key_id.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A symmetric key generation used to encrypt stored secrets
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyChain {
    pub info: EntityInfo,
    pub key_id: KeyId,
    /// What the chain encrypts, e.g. "refresh-token-encryption"
    pub purpose: String,
    /// Wrapped key material
    pub material: Vec<u8>,
    pub status: KeyChainStatus,
    pub activated_at: DateTime<Utc>,
    pub retired_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for KeyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyChain")
            .field("info", &self.info)
            .field("key_id", &self.key_id)
            .field("purpose", &self.purpose)
            .field("material", &"[REDACTED]")
            .field("status", &self.status)
            .field("activated_at", &self.activated_at)
            .field("retired_at", &self.retired_at)
            .finish()
    }
}

impl KeyChain {
    /// Reconstruct a key chain from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        key_id: KeyId,
        purpose: String,
        material: Vec<u8>,
        status: KeyChainStatus,
        activated_at: DateTime<Utc>,
        retired_at: Option<DateTime<Utc>>,
    ) -> Self {
        KeyChain {
            info,
            key_id,
            purpose,
            material,
            status,
            activated_at,
            retired_at,
        }
    }

    /// Whether the chain may encrypt new values
    pub fn encrypts(&self) -> bool {
        self.status == KeyChainStatus::Active
    }
}
