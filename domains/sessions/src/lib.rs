//! Session domain: sessions, refresh tokens, token exchanges, impersonation,
//! deny list entries, idempotency records

pub mod domain;
pub mod record;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export record types and mapping factories
pub use record::{
    deny_list_entry_from_record, idempotency_record_from_record,
    impersonation_session_from_record, refresh_token_from_record, session_from_record,
    token_exchange_from_record, DenyListEntryRecord, IdempotencyRecordRecord,
    ImpersonationSessionRecord, RefreshTokenRecord, SessionRecord, TokenExchangeRecord,
};
// Re-export repository types
pub use repository::{RefreshTokenRepository, SessionRepository, SessionsRepositories};
