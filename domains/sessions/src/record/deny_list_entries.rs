//! Deny list entry storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{DenyListEntry, DenyListEntryType};

/// Flat storage shape of [`DenyListEntry`], column-for-column with `deny_list_entries`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DenyListEntryRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub entry_type: i16,
    pub value: String,
    pub reason: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&DenyListEntry> for DenyListEntryRecord {
    fn from(entry: &DenyListEntry) -> Self {
        DenyListEntryRecord {
            entity: EntityInfoRecord::from(&entry.info),
            entry_type: entry.entry_type.ordinal(),
            value: entry.value.clone(),
            reason: entry.reason.clone(),
            expires_at: entry.expires_at,
        }
    }
}

/// Rebuild a [`DenyListEntry`] from its storage record
pub fn deny_list_entry_from_record(
    record: DenyListEntryRecord,
) -> Result<DenyListEntry, MappingError> {
    Ok(DenyListEntry {
        info: EntityInfo::from_record(record.entity, "DenyListEntry")?,
        entry_type: DenyListEntryType::from_ordinal(record.entry_type)?,
        value: record.value,
        reason: record.reason,
        expires_at: record.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{
        CorrelationId, EntityChangeInfo, EntityId, RegistryVersion, TenantCode,
    };
    use uuid::Uuid;

    fn sample_entry(entry_type: DenyListEntryType) -> DenyListEntry {
        DenyListEntry::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "sec-ops",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "deny_list.add",
                ),
                None,
                RegistryVersion::new(1),
            ),
            entry_type,
            Uuid::new_v4().to_string(),
            Some("credential stuffing".to_string()),
            Some(Utc::now() + chrono::Duration::hours(24)),
        )
    }

    #[test]
    fn test_jti_entry_maps_to_ordinal_one() {
        let record = DenyListEntryRecord::from(&sample_entry(DenyListEntryType::Jti));
        assert_eq!(record.entry_type, 1);
    }

    #[test]
    fn test_user_id_entry_maps_to_ordinal_two() {
        let record = DenyListEntryRecord::from(&sample_entry(DenyListEntryType::UserId));
        assert_eq!(record.entry_type, 2);
    }

    #[test]
    fn test_deny_list_entry_round_trip() {
        for entry_type in [DenyListEntryType::Jti, DenyListEntryType::UserId] {
            let entry = sample_entry(entry_type);
            let rebuilt = deny_list_entry_from_record(DenyListEntryRecord::from(&entry)).unwrap();
            assert_eq!(rebuilt, entry);
        }
    }

    #[test]
    fn test_unknown_entry_type_ordinal_is_fatal() {
        let mut record = DenyListEntryRecord::from(&sample_entry(DenyListEntryType::Jti));
        record.entry_type = 0;

        assert_eq!(
            deny_list_entry_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "DenyListEntry",
                field: "entry_type",
                value: 0,
            })
        );
    }
}
