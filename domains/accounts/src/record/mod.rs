//! Storage records and mapping factories for the account domain

pub mod external_logins;
pub mod login_attempts;
pub mod mfa_setups;
pub mod password_history;
pub mod password_reset_tokens;
pub mod recovery_codes;
pub mod users;

pub use external_logins::{external_login_from_record, ExternalLoginRecord};
pub use login_attempts::{login_attempt_from_record, LoginAttemptRecord};
pub use mfa_setups::{mfa_setup_from_record, MfaSetupRecord};
pub use password_history::{password_history_from_record, PasswordHistoryRecord};
pub use password_reset_tokens::{password_reset_token_from_record, PasswordResetTokenRecord};
pub use recovery_codes::{recovery_code_from_record, RecoveryCodeRecord};
pub use users::{user_from_record, UserRecord};
