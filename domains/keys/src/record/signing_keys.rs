//! Signing key storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{Kid, SigningKey, SigningKeyStatus};

/// Flat storage shape of [`SigningKey`], column-for-column with `signing_keys`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SigningKeyRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub kid: String,
    pub algorithm: String,
    pub public_jwk: String,
    pub private_key_der: Vec<u8>,
    pub status: i16,
    pub not_before: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&SigningKey> for SigningKeyRecord {
    fn from(key: &SigningKey) -> Self {
        SigningKeyRecord {
            entity: EntityInfoRecord::from(&key.info),
            kid: key.kid.as_str().to_string(),
            algorithm: key.algorithm.clone(),
            public_jwk: key.public_jwk.clone(),
            private_key_der: key.private_key_der.clone(),
            status: key.status.ordinal(),
            not_before: key.not_before,
            expires_at: key.expires_at,
        }
    }
}

/// Rebuild a [`SigningKey`] from its storage record
pub fn signing_key_from_record(record: SigningKeyRecord) -> Result<SigningKey, MappingError> {
    Ok(SigningKey {
        info: EntityInfo::from_record(record.entity, "SigningKey")?,
        kid: Kid::new(record.kid),
        algorithm: record.algorithm,
        public_jwk: record.public_jwk,
        private_key_der: record.private_key_der,
        status: SigningKeyStatus::from_ordinal(record.status)?,
        not_before: record.not_before,
        expires_at: record.expires_at,
    })
}
