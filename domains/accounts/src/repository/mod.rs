//! Repository implementations for the account domain

pub mod password_reset_tokens;
pub mod users;

use sqlx::{PgPool, Postgres, Transaction};

pub use password_reset_tokens::PasswordResetTokenRepository;
pub use users::UserRepository;

/// Combined repository access for the account domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pool: PgPool,
    pub users: UserRepository,
    pub password_reset_tokens: PasswordResetTokenRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            password_reset_tokens: PasswordResetTokenRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    #[mutants::skip] // Thin delegation to sqlx; nothing to assert without a live pool
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
