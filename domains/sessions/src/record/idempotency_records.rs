//! Idempotency record storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::IdempotencyRecord;

/// Flat storage shape of [`IdempotencyRecord`], column-for-column with
/// `idempotency_records`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct IdempotencyRecordRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub idempotency_key: String,
    pub request_hash: String,
    pub response_snapshot: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&IdempotencyRecord> for IdempotencyRecordRecord {
    fn from(record: &IdempotencyRecord) -> Self {
        IdempotencyRecordRecord {
            entity: EntityInfoRecord::from(&record.info),
            idempotency_key: record.idempotency_key.clone(),
            request_hash: record.request_hash.clone(),
            response_snapshot: record.response_snapshot.clone(),
            completed_at: record.completed_at,
        }
    }
}

/// Rebuild an [`IdempotencyRecord`] from its storage record
pub fn idempotency_record_from_record(
    record: IdempotencyRecordRecord,
) -> Result<IdempotencyRecord, MappingError> {
    Ok(IdempotencyRecord {
        info: EntityInfo::from_record(record.entity, "IdempotencyRecord")?,
        idempotency_key: record.idempotency_key,
        request_hash: record.request_hash,
        response_snapshot: record.response_snapshot,
        completed_at: record.completed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{
        CorrelationId, EntityChangeInfo, EntityId, RegistryVersion, TenantCode,
    };
    use uuid::Uuid;

    fn sample_record() -> IdempotencyRecord {
        IdempotencyRecord::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "svc-checkout",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "idempotency.begin",
                ),
                None,
                RegistryVersion::new(1),
            ),
            "idem-7f3a".to_string(),
            "sha256:req".to_string(),
            None,
            None,
        )
    }

    #[test]
    fn test_in_flight_record_has_null_outcome_columns() {
        let record = IdempotencyRecordRecord::from(&sample_record());

        assert_eq!(record.idempotency_key, "idem-7f3a");
        assert_eq!(record.request_hash, "sha256:req");
        assert!(record.response_snapshot.is_none());
        assert!(record.completed_at.is_none());
    }

    #[test]
    fn test_completed_record_round_trip() {
        let mut entity = sample_record();
        entity.response_snapshot = Some(r#"{"status":"created"}"#.to_string());
        entity.completed_at = Some(Utc::now());

        let rebuilt =
            idempotency_record_from_record(IdempotencyRecordRecord::from(&entity)).unwrap();
        assert_eq!(rebuilt, entity);
        assert!(rebuilt.is_completed());
    }

    #[test]
    fn test_idempotency_round_trip_from_record() {
        let record = IdempotencyRecordRecord::from(&sample_record());
        let rebuilt =
            IdempotencyRecordRecord::from(&idempotency_record_from_record(record.clone()).unwrap());
        assert_eq!(rebuilt, record);
    }
}
