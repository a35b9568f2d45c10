//! Key chain storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{KeyChain, KeyChainStatus, KeyId};

/// Flat storage shape of [`KeyChain`], column-for-column with `key_chains`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct KeyChainRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub key_id: String,
    pub purpose: String,
    pub material: Vec<u8>,
    pub status: i16,
    pub activated_at: DateTime<Utc>,
    pub retired_at: Option<DateTime<Utc>>,
}

impl From<&KeyChain> for KeyChainRecord {
    fn from(chain: &KeyChain) -> Self {
        KeyChainRecord {
            entity: EntityInfoRecord::from(&chain.info),
            key_id: chain.key_id.as_str().to_string(),
            purpose: chain.purpose.clone(),
            material: chain.material.clone(),
            status: chain.status.ordinal(),
            activated_at: chain.activated_at,
            retired_at: chain.retired_at,
        }
    }
}

/// Rebuild a [`KeyChain`] from its storage record
pub fn key_chain_from_record(record: KeyChainRecord) -> Result<KeyChain, MappingError> {
    Ok(KeyChain {
        info: EntityInfo::from_record(record.entity, "KeyChain")?,
        key_id: KeyId::new(record.key_id),
        purpose: record.purpose,
        material: record.material,
        status: KeyChainStatus::from_ordinal(record.status)?,
        activated_at: record.activated_at,
        retired_at: record.retired_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{
        CorrelationId, EntityChangeInfo, EntityId, RegistryVersion, TenantCode,
    };
    use uuid::Uuid;

    fn sample_chain() -> KeyChain {
        KeyChain::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "key-manager",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "worker",
                    "key_chain.activate",
                ),
                None,
                RegistryVersion::new(1),
            ),
            KeyId::new("kc-2026-08"),
            "refresh-token-encryption".to_string(),
            vec![0xde, 0xad, 0xbe, 0xef],
            KeyChainStatus::Active,
            Utc::now(),
            None,
        )
    }

    #[test]
    fn test_key_chain_to_record_unwraps_key_id_and_copies_material() {
        let chain = sample_chain();
        let record = KeyChainRecord::from(&chain);

        assert_eq!(record.key_id, "kc-2026-08");
        assert_eq!(record.purpose, "refresh-token-encryption");
        assert_eq!(record.material, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(record.status, 1);
        assert!(record.retired_at.is_none());
    }

    #[test]
    fn test_key_chain_round_trip() {
        let chain = sample_chain();
        let rebuilt = key_chain_from_record(KeyChainRecord::from(&chain)).unwrap();
        assert_eq!(rebuilt, chain);
    }

    #[test]
    fn test_decrypt_only_ordinal_maps_back() {
        let mut record = KeyChainRecord::from(&sample_chain());
        record.status = 2;
        record.retired_at = Some(Utc::now());

        let chain = key_chain_from_record(record).unwrap();
        assert_eq!(chain.status, KeyChainStatus::DecryptOnly);
        assert!(!chain.encrypts());
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = KeyChainRecord::from(&sample_chain());
        record.status = 3;

        assert_eq!(
            key_chain_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "KeyChain",
                field: "status",
                value: 3,
            })
        );
    }
}
