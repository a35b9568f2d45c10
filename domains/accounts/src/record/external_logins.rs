//! External login storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::{ExternalLogin, LoginProvider};

/// Flat storage shape of [`ExternalLogin`], column-for-column with `external_logins`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ExternalLoginRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub user_id: Uuid,
    pub provider: String,
    pub provider_subject: String,
    pub display_name: Option<String>,
    pub linked_at: DateTime<Utc>,
}

impl From<&ExternalLogin> for ExternalLoginRecord {
    fn from(login: &ExternalLogin) -> Self {
        ExternalLoginRecord {
            entity: EntityInfoRecord::from(&login.info),
            user_id: login.user_id.as_uuid(),
            provider: login.provider.as_str().to_string(),
            provider_subject: login.provider_subject.clone(),
            display_name: login.display_name.clone(),
            linked_at: login.linked_at,
        }
    }
}

/// Rebuild an [`ExternalLogin`] from its storage record
pub fn external_login_from_record(
    record: ExternalLoginRecord,
) -> Result<ExternalLogin, MappingError> {
    Ok(ExternalLogin {
        info: EntityInfo::from_record(record.entity, "ExternalLogin")?,
        user_id: EntityId::new(record.user_id),
        provider: LoginProvider::new(record.provider),
        provider_subject: record.provider_subject,
        display_name: record.display_name,
        linked_at: record.linked_at,
    })
}
