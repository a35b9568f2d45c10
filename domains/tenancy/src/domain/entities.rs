//! Domain entities for the Tradewind tenancy domain
//!
//! Tenants are the top-level partitioning unit of the platform; consent
//! terms and user consents track the legal documents a tenant publishes and
//! the per-user acceptance state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradewind_common::{EntityId, EntityInfo, Error, MappingError};

/// Tenant lifecycle status, persisted as a small-integer ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Suspended,
    Maintenance,
}

impl TenantStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            TenantStatus::Active => 1,
            TenantStatus::Suspended => 2,
            TenantStatus::Maintenance => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(TenantStatus::Active),
            2 => Ok(TenantStatus::Suspended),
            3 => Ok(TenantStatus::Maintenance),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "Tenant",
                field: "status",
                value,
            }),
        }
    }
}

impl std::fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenantStatus::Active => write!(f, "active"),
            TenantStatus::Suspended => write!(f, "suspended"),
            TenantStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// Commercial tier of a tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantTier {
    Basic,
    Professional,
    Enterprise,
}

impl TenantTier {
    pub const fn ordinal(self) -> i16 {
        match self {
            TenantTier::Basic => 1,
            TenantTier::Professional => 2,
            TenantTier::Enterprise => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(TenantTier::Basic),
            2 => Ok(TenantTier::Professional),
            3 => Ok(TenantTier::Enterprise),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "Tenant",
                field: "tier",
                value,
            }),
        }
    }
}

/// Tenant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub info: EntityInfo,
    pub name: String,
    pub status: TenantStatus,
    pub tier: TenantTier,
    pub primary_domain: Option<String>,
}

impl Tenant {
    /// Reconstruct a tenant from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        name: String,
        status: TenantStatus,
        tier: TenantTier,
        primary_domain: Option<String>,
    ) -> Self {
        Tenant {
            info,
            name,
            status,
            tier,
            primary_domain,
        }
    }

    /// Whether the tenant accepts traffic
    pub fn is_active(&self) -> bool {
        self.status == TenantStatus::Active
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() || self.name.len() > 200 {
            return Err(Error::Validation(
                "Tenant name must be 1-200 characters".to_string(),
            ));
        }

        if let Some(ref domain) = self.primary_domain {
            if domain.is_empty() || domain.len() > 253 {
                return Err(Error::Validation(
                    "Primary domain must be 1-253 characters".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Type of a published consent document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentTermType {
    TermsOfUse,
    PrivacyPolicy,
    Marketing,
}

impl ConsentTermType {
    pub const fn ordinal(self) -> i16 {
        match self {
            ConsentTermType::TermsOfUse => 1,
            ConsentTermType::PrivacyPolicy => 2,
            ConsentTermType::Marketing => 3,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(ConsentTermType::TermsOfUse),
            2 => Ok(ConsentTermType::PrivacyPolicy),
            3 => Ok(ConsentTermType::Marketing),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "ConsentTerm",
                field: "term_type",
                value,
            }),
        }
    }
}

/// A versioned consent document published by a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentTerm {
    pub info: EntityInfo,
    pub term_type: ConsentTermType,
    /// Human-readable document revision, e.g. "2026-03"
    pub version_label: String,
    pub document_url: String,
    pub published_at: DateTime<Utc>,
    /// Mandatory terms block login until accepted
    pub mandatory: bool,
}

impl ConsentTerm {
    /// Reconstruct a consent term from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        term_type: ConsentTermType,
        version_label: String,
        document_url: String,
        published_at: DateTime<Utc>,
        mandatory: bool,
    ) -> Self {
        ConsentTerm {
            info,
            term_type,
            version_label,
            document_url,
            published_at,
            mandatory,
        }
    }
}

/// Acceptance status of a user consent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserConsentStatus {
    Active,
    Revoked,
}

impl UserConsentStatus {
    pub const fn ordinal(self) -> i16 {
        match self {
            UserConsentStatus::Active => 1,
            UserConsentStatus::Revoked => 2,
        }
    }

    pub fn from_ordinal(value: i16) -> Result<Self, MappingError> {
        match value {
            1 => Ok(UserConsentStatus::Active),
            2 => Ok(UserConsentStatus::Revoked),
            _ => Err(MappingError::UnknownOrdinal {
                entity: "UserConsent",
                field: "status",
                value,
            }),
        }
    }
}

/// A user's acceptance of a specific consent term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConsent {
    pub info: EntityInfo,
    pub user_id: EntityId,
    pub consent_term_id: EntityId,
    pub status: UserConsentStatus,
    pub granted_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl UserConsent {
    /// Reconstruct a user consent from previously persisted state
    pub fn from_existing(
        info: EntityInfo,
        user_id: EntityId,
        consent_term_id: EntityId,
        status: UserConsentStatus,
        granted_at: DateTime<Utc>,
        revoked_at: Option<DateTime<Utc>>,
    ) -> Self {
        UserConsent {
            info,
            user_id,
            consent_term_id,
            status,
            granted_at,
            revoked_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserConsentStatus::Active
    }
}
