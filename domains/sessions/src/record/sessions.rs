//! Session storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{Session, SessionStatus};

/// Flat storage shape of [`Session`], column-for-column with `sessions`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SessionRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub status: i16,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        SessionRecord {
            entity: EntityInfoRecord::from(&session.info),
            user_id: session.user_id.as_uuid(),
            status: session.status.ordinal(),
            ip_address: session.ip_address.clone(),
            user_agent: session.user_agent.clone(),
            issued_at: session.issued_at,
            expires_at: session.expires_at,
            revoked_at: session.revoked_at,
        }
    }
}

/// Rebuild a [`Session`] from its storage record
pub fn session_from_record(record: SessionRecord) -> Result<Session, MappingError> {
    Ok(Session {
        info: EntityInfo::from_record(record.entity, "Session")?,
        user_id: EntityId::new(record.user_id),
        status: SessionStatus::from_ordinal(record.status)?,
        ip_address: record.ip_address,
        user_agent: record.user_agent,
        issued_at: record.issued_at,
        expires_at: record.expires_at,
        revoked_at: record.revoked_at,
    })
}
