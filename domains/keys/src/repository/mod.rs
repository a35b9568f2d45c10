//! Repository implementations for the key material domain

pub mod signing_keys;

use sqlx::{PgPool, Postgres, Transaction};

pub use signing_keys::SigningKeyRepository;

/// Combined repository access for the key material domain
#[derive(Clone)]
pub struct KeysRepositories {
    pool: PgPool,
    pub signing_keys: SigningKeyRepository,
}

impl KeysRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            signing_keys: SigningKeyRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    #[mutants::skip] // Thin delegation to sqlx; nothing to assert without a live pool
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
