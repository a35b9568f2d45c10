//! Repository implementations for the service client domain

pub mod api_keys;
pub mod service_clients;

use sqlx::{PgPool, Postgres, Transaction};

pub use api_keys::ApiKeyRepository;
pub use service_clients::ServiceClientRepository;

/// Combined repository access for the service client domain
#[derive(Clone)]
pub struct ClientsRepositories {
    pool: PgPool,
    pub service_clients: ServiceClientRepository,
    pub api_keys: ApiKeyRepository,
}

impl ClientsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service_clients: ServiceClientRepository::new(pool.clone()),
            api_keys: ApiKeyRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    #[mutants::skip] // Thin delegation to sqlx; nothing to assert without a live pool
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
