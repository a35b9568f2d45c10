//! Impersonation session storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{ImpersonationSession, ImpersonationSessionStatus};

/// Flat storage shape of [`ImpersonationSession`], column-for-column with
/// `impersonation_sessions`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ImpersonationSessionRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub operator_user_id: Uuid,
    pub target_user_id: Uuid,
    pub status: i16,
    pub reason: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl From<&ImpersonationSession> for ImpersonationSessionRecord {
    fn from(session: &ImpersonationSession) -> Self {
        ImpersonationSessionRecord {
            entity: EntityInfoRecord::from(&session.info),
            operator_user_id: session.operator_user_id.as_uuid(),
            target_user_id: session.target_user_id.as_uuid(),
            status: session.status.ordinal(),
            reason: session.reason.clone(),
            started_at: session.started_at,
            ended_at: session.ended_at,
        }
    }
}

/// Rebuild an [`ImpersonationSession`] from its storage record
pub fn impersonation_session_from_record(
    record: ImpersonationSessionRecord,
) -> Result<ImpersonationSession, MappingError> {
    Ok(ImpersonationSession {
        info: EntityInfo::from_record(record.entity, "ImpersonationSession")?,
        operator_user_id: EntityId::new(record.operator_user_id),
        target_user_id: EntityId::new(record.target_user_id),
        status: ImpersonationSessionStatus::from_ordinal(record.status)?,
        reason: record.reason,
        started_at: record.started_at,
        ended_at: record.ended_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradewind_common::{CorrelationId, EntityChangeInfo, RegistryVersion, TenantCode};

    fn sample_session() -> ImpersonationSession {
        ImpersonationSession::from_existing(
            EntityInfo::new(
                EntityId::new(Uuid::new_v4()),
                TenantCode::new(Uuid::new_v4()),
                EntityChangeInfo::new(
                    "support-11",
                    Utc::now(),
                    CorrelationId::new(Uuid::new_v4()),
                    "api",
                    "impersonation.start",
                ),
                None,
                RegistryVersion::new(1),
            ),
            EntityId::new(Uuid::new_v4()),
            EntityId::new(Uuid::new_v4()),
            ImpersonationSessionStatus::Active,
            "Ticket #4821: broken checkout".to_string(),
            Utc::now(),
            None,
        )
    }

    #[test]
    fn test_impersonation_to_record_copies_every_field() {
        let session = sample_session();
        let record = ImpersonationSessionRecord::from(&session);

        assert_eq!(record.operator_user_id, session.operator_user_id.as_uuid());
        assert_eq!(record.target_user_id, session.target_user_id.as_uuid());
        assert_eq!(record.status, 1);
        assert_eq!(record.reason, "Ticket #4821: broken checkout");
        assert!(record.ended_at.is_none());
    }

    #[test]
    fn test_ended_record_maps_back() {
        let mut record = ImpersonationSessionRecord::from(&sample_session());
        record.status = 2;
        record.ended_at = Some(Utc::now());

        let session = impersonation_session_from_record(record).unwrap();
        assert_eq!(session.status, ImpersonationSessionStatus::Ended);
        assert!(session.ended_at.is_some());
    }

    #[test]
    fn test_impersonation_round_trip() {
        let session = sample_session();
        let rebuilt =
            impersonation_session_from_record(ImpersonationSessionRecord::from(&session)).unwrap();
        assert_eq!(rebuilt, session);
    }

    #[test]
    fn test_unknown_status_ordinal_is_fatal() {
        let mut record = ImpersonationSessionRecord::from(&sample_session());
        record.status = 3;

        assert_eq!(
            impersonation_session_from_record(record),
            Err(MappingError::UnknownOrdinal {
                entity: "ImpersonationSession",
                field: "status",
                value: 3,
            })
        );
    }
}
