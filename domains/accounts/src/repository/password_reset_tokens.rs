//! Password reset token repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::PasswordResetToken;
use crate::record::password_reset_tokens::{
    password_reset_token_from_record, PasswordResetTokenRecord,
};

#[derive(Clone)]
pub struct PasswordResetTokenRepository {
    pool: PgPool,
}

impl PasswordResetTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an unconsumed, unexpired token by its stored hash
    pub async fn find_usable_by_hash(
        &self,
        tenant_code: Uuid,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>> {
        let record: Option<PasswordResetTokenRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   user_id, token_hash, expires_at, consumed_at
            FROM password_reset_tokens
            WHERE tenant_code = $1 AND token_hash = $2
              AND consumed_at IS NULL AND expires_at > NOW()
            "#,
        )
        .bind(tenant_code)
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| password_reset_token_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// Insert a new password reset token row
    pub async fn insert(&self, token: &PasswordResetToken) -> Result<()> {
        let record = PasswordResetTokenRecord::from(token);
        sqlx::query(
            r#"
            INSERT INTO password_reset_tokens (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                user_id, token_hash, expires_at, consumed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(record.entity.id)
        .bind(record.entity.tenant_code)
        .bind(record.entity.created_by)
        .bind(record.entity.created_at)
        .bind(record.entity.created_correlation_id)
        .bind(record.entity.created_execution_origin)
        .bind(record.entity.created_operation_code)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .bind(record.entity.version)
        .bind(record.user_id)
        .bind(record.token_hash)
        .bind(record.expires_at)
        .bind(record.consumed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a token row, enforcing the optimistic concurrency token
    pub async fn update(&self, token: &PasswordResetToken) -> Result<()> {
        let record = PasswordResetTokenRecord::from(token);
        let result = sqlx::query(
            r#"
            UPDATE password_reset_tokens SET
                consumed_at = $3,
                changed_by = $4,
                changed_at = $5,
                changed_correlation_id = $6,
                changed_execution_origin = $7,
                changed_operation_code = $8,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(record.entity.id)
        .bind(record.entity.version)
        .bind(record.consumed_at)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                token_id = %token.info.id,
                version = token.info.version.value(),
                "Password reset token update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
