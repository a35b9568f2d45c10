//! Repository implementations for the tenancy domain

pub mod tenants;

use sqlx::{PgPool, Postgres, Transaction};

pub use tenants::TenantRepository;

/// Combined repository access for the tenancy domain
#[derive(Clone)]
pub struct TenancyRepositories {
    pool: PgPool,
    pub tenants: TenantRepository,
}

impl TenancyRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tenants: TenantRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    #[mutants::skip] // Thin delegation to sqlx; nothing to assert without a live pool
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
