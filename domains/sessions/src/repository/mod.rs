//! Repository implementations for the session domain

pub mod refresh_tokens;
pub mod sessions;

use sqlx::{PgPool, Postgres, Transaction};

pub use refresh_tokens::RefreshTokenRepository;
pub use sessions::SessionRepository;

/// Combined repository access for the session domain
#[derive(Clone)]
pub struct SessionsRepositories {
    pool: PgPool,
    pub sessions: SessionRepository,
    pub refresh_tokens: RefreshTokenRepository,
}

impl SessionsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sessions: SessionRepository::new(pool.clone()),
            refresh_tokens: RefreshTokenRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    #[mutants::skip] // Thin delegation to sqlx; nothing to assert without a live pool
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
