//! Storage records and mapping factories for the session domain

pub mod deny_list_entries;
pub mod idempotency_records;
pub mod impersonation_sessions;
pub mod refresh_tokens;
pub mod sessions;
pub mod token_exchanges;

pub use deny_list_entries::{deny_list_entry_from_record, DenyListEntryRecord};
pub use idempotency_records::{idempotency_record_from_record, IdempotencyRecordRecord};
pub use impersonation_sessions::{
    impersonation_session_from_record, ImpersonationSessionRecord,
};
pub use refresh_tokens::{refresh_token_from_record, RefreshTokenRecord};
pub use sessions::{session_from_record, SessionRecord};
pub use token_exchanges::{token_exchange_from_record, TokenExchangeRecord};
