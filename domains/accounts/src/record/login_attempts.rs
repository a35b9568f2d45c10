//! Login attempt storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::LoginAttempt;

/// Flat storage shape of [`LoginAttempt`], column-for-column with `login_attempts`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LoginAttemptRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Option<Uuid>,
    pub identifier: String,
    pub succeeded: bool,
    pub ip_address: Option<String>,
    pub failure_reason: Option<String>,
    pub attempted_at: DateTime<Utc>,
}

impl From<&LoginAttempt> for LoginAttemptRecord {
    fn from(attempt: &LoginAttempt) -> Self {
        LoginAttemptRecord {
            entity: EntityInfoRecord::from(&attempt.info),
            user_id: attempt.user_id.map(|id| id.as_uuid()),
            identifier: attempt.identifier.clone(),
            succeeded: attempt.succeeded,
            ip_address: attempt.ip_address.clone(),
            failure_reason: attempt.failure_reason.clone(),
            attempted_at: attempt.attempted_at,
        }
    }
}

/// Rebuild a [`LoginAttempt`] from its storage record
pub fn login_attempt_from_record(
    record: LoginAttemptRecord,
) -> Result<LoginAttempt, MappingError> {
    Ok(LoginAttempt {
        info: EntityInfo::from_record(record.entity, "LoginAttempt")?,
        user_id: record.user_id.map(EntityId::new),
        identifier: record.identifier,
        succeeded: record.succeeded,
        ip_address: record.ip_address,
        failure_reason: record.failure_reason,
        attempted_at: record.attempted_at,
    })
}
