//! Account domain: users, external logins, login attempts, MFA setups,
//! password trail, recovery codes

pub mod domain;
pub mod record;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export record types and mapping factories
pub use record::{
    external_login_from_record, login_attempt_from_record, mfa_setup_from_record,
    password_history_from_record, password_reset_token_from_record, recovery_code_from_record,
    user_from_record, ExternalLoginRecord, LoginAttemptRecord, MfaSetupRecord,
    PasswordHistoryRecord, PasswordResetTokenRecord, RecoveryCodeRecord, UserRecord,
};
// Re-export repository types
pub use repository::{AccountsRepositories, PasswordResetTokenRepository, UserRepository};
