//! Repository implementations for the access control domain

pub mod roles;

use sqlx::{PgPool, Postgres, Transaction};

pub use roles::RoleRepository;

/// Combined repository access for the access control domain
#[derive(Clone)]
pub struct AccessRepositories {
    pool: PgPool,
    pub roles: RoleRepository,
}

impl AccessRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            roles: RoleRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    #[mutants::skip] // Thin delegation to sqlx; nothing to assert without a live pool
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
