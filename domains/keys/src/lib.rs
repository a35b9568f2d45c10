//! Key material domain: signing keys and key chains

pub mod domain;
pub mod record;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export record types and mapping factories
pub use record::{
    key_chain_from_record, signing_key_from_record, KeyChainRecord, SigningKeyRecord,
};
// Re-export repository types
pub use repository::{KeysRepositories, SigningKeyRepository};
