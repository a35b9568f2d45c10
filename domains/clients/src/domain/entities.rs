//! Domain entities for the Tradewind service client domain
//!
//! Service clients are the machine principals of the platform (checkout
//! workers, fulfillment integrations, storefront backends). API keys and
//! DPoP keys are the credentials persisted against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use tradewind_common::{EntityId, EntityInfo, Error, MappingError};

/// Service client lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceClientStatus {
    Active,
    Revoked,
}

impl ServiceClientStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            ServiceClientStatus::Active => 1,
            ServiceClientStatus::Revoked => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(ServiceClientStatus::Active),
            2 => Ok(ServiceClientStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "ServiceClient",
                field: "status",
                value,
            }),
        }
    }
}

/// A machine principal registered with the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceClient {
    pub info: EntityInfo,
    pub name: String,
    /// Stable machine identifier, e.g. "svc-checkout"
    pub identifier: String,
    pub description: Option<String>,
    pub status: ServiceClientStatus,
}

impl ServiceClient {
    /// Reconstruct a service client from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        name: String,
        identifier: String,
        description: Option<String>,
        status: ServiceClientStatus,
    ) -> Self {
        ServiceClient {
            info,
            name,
            identifier,
            description,
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ServiceClientStatus::Active
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() || self.name.len() > 100 {
            return Err(Error::Validation(
                "Client name must be 1-100 characters".to_string(),
            ));
        }

        if self.identifier.is_empty() || self.identifier.len() > 64 {
            return Err(Error::Validation(
                "Client identifier must be 1-64 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// A claim granted to a service client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceClientClaim {
    pub info: EntityInfo,
    pub service_client_id: EntityId,
    pub claim_code: String,
    pub claim_value: String,
}

impl ServiceClientClaim {
    /// Reconstruct a service client claim from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        service_client_id: EntityId,
        claim_code: String,
        claim_value: String,
    ) -> Self {
        ServiceClientClaim {
            info,
            service_client_id,
            claim_code,
            claim_value,
        }
    }
}

/// An OAuth-style scope granted to a service client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceClientScope {
    pub info: EntityInfo,
    pub service_client_id: EntityId,
    /// Scope string, e.g. "orders:read"
    pub scope: String,
}

impl ServiceClientScope {
    /// Reconstruct a service client scope from previously persisted state
    pub fn from_existing(info: EntityInfo, service_client_id: EntityId, scope: String) -> Self {
        ServiceClientScope {
            info,
            service_client_id,
            scope,
        }
    }
}

/// API key lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    Active,
    Revoked,
}

impl ApiKeyStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            ApiKeyStatus::Active => 1,
            ApiKeyStatus::Revoked => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(ApiKeyStatus::Active),
            2 => Ok(ApiKeyStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "ApiKey",
                field: "status",
                value,
            }),
        }
    }
}

impl fmt::Display for ApiKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeyStatus::Active => write!(f, "active"),
            ApiKeyStatus::Revoked => write!(f, "revoked"),
        }
    }
}

/// API key entity
///
/// Only the prefix and the hash of the key are persisted; the raw key never
/// reaches this layer.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub info: EntityInfo,
    pub service_client_id: EntityId,
    pub key_prefix: String,
    pub key_hash: String,
    pub status: ApiKeyStatus,
    pub expires_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("info", &self.info)
            .field("service_client_id", &self.service_client_id)
            .field("key_prefix", &self.key_prefix)
            .field("key_hash", &"[REDACTED]")
            .field("status", &self.status)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl ApiKey {
    /// Reconstruct an API key from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        service_client_id: EntityId,
        key_prefix: String,
        key_hash: String,
        status: ApiKeyStatus,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        ApiKey {
            info,
            service_client_id,
            key_prefix,
            key_hash,
            status,
            expires_at,
        }
    }

    /// Check if key is usable (not revoked or expired)
    pub fn is_valid(&self) -> bool {
        if self.status == ApiKeyStatus::Revoked {
            return false;
        }

        if let Some(expires_at) = self.expires_at {
            if expires_at < Utc::now() {
                return false;
            }
        }

        true
    }
}

/// DPoP key lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DPoPKeyStatus {
    Active,
    Revoked,
}

impl DPoPKeyStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            DPoPKeyStatus::Active => 1,
            DPoPKeyStatus::Revoked => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(DPoPKeyStatus::Active),
            2 => Ok(DPoPKeyStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "DPoPKey",
                field: "status",
                value,
            }),
        }
    }
}

/// RFC 7638 thumbprint of a DPoP public key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JwkThumbprint(String);

impl JwkThumbprint {
    pub fn new(thumbprint: impl Into<String>) -> Self {
        JwkThumbprint(thumbprint.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JwkThumbprint {
    fn from(thumbprint: String) -> Self {
        JwkThumbprint(thumbprint)
    }
}

impl From<JwkThumbprint> for String {
    fn from(thumbprint: JwkThumbprint) -> Self {
        thumbprint.0
    }
}

impl fmt::Display for JwkThumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A DPoP proof-of-possession key bound to a user's sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DPoPKey {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub jwk_thumbprint: JwkThumbprint,
    /// Public key as JWK JSON text
    pub public_key_jwk: String,
    pub status: DPoPKeyStatus,
    pub first_seen_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl DPoPKey {
    /// Reconstruct a DPoP key from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        jwk_thumbprint: JwkThumbprint,
        public_key_jwk: String,
        status: DPoPKeyStatus,
        first_seen_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        DPoPKey {
            info,
            user_id,
            jwk_thumbprint,
            public_key_jwk,
            status,
            first_seen_at,
            expires_at,
        }
    }
}
