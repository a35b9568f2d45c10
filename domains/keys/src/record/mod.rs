//! Storage records and mapping factories for the key material domain

pub mod key_chains;
pub mod signing_keys;

pub use key_chains::{key_chain_from_record, KeyChainRecord};
pub use signing_keys::{signing_key_from_record, SigningKeyRecord};
