//! User storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{User, UserStatus};

/// Flat storage shape of [`User`], column-for-column with `users`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
    pub status: i16,
    pub mfa_enabled: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        UserRecord {
            entity: EntityInfoRecord::from(&user.info),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            password_hash: user.password_hash.clone(),
            status: user.status.ordinal(),
            mfa_enabled: user.mfa_enabled,
            last_login_at: user.last_login_at,
        }
    }
}

/// Rebuild a [`User`] from its storage record
pub fn user_from_record(record: UserRecord) -> Result<User, MappingError> {
    Ok(User {
        info: EntityInfo::from_record(record.entity, "User")?,
        email: record.email,
        display_name: record.display_name,
        password_hash: record.password_hash,
        status: UserStatus::from_ordinal(record.status)?,
        mfa_enabled: record.mfa_enabled,
        last_login_at: record.last_login_at,
    })
}
