//! Refresh token repository

use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::{RefreshToken, RefreshTokenStatus};
use crate::record::refresh_tokens::{refresh_token_from_record, RefreshTokenRecord};

#[derive(Clone)]
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a token by its stored hash
    pub async fn find_by_hash(
        &self,
        tenant_code: Uuid,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>> {
        let record: Option<RefreshTokenRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   session_id, token_hash, family_id, status, expires_at, used_at
            FROM refresh_tokens
            WHERE tenant_code = $1 AND token_hash = $2
            "#,
        )
        .bind(tenant_code)
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| refresh_token_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List every token in a rotation family, newest first
    pub async fn list_family(&self, family_id: Uuid) -> Result<Vec<RefreshToken>> {
        let records: Vec<RefreshTokenRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   session_id, token_hash, family_id, status, expires_at, used_at
            FROM refresh_tokens
            WHERE family_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(family_id)
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| refresh_token_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new refresh token row
    pub async fn insert(&self, token: &RefreshToken) -> Result<()> {
        let record = RefreshTokenRecord::from(token);
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                session_id, token_hash, family_id, status, expires_at, used_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19)
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
        .bind(record.session_id)
        .bind(record.token_hash)
        .bind(record.family_id)
        .bind(record.status)
        .bind(record.expires_at)
        .bind(record.used_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a refresh token row, enforcing the optimistic concurrency token
    pub async fn update(&self, token: &RefreshToken) -> Result<()> {
        let record = RefreshTokenRecord::from(token);
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens SET
                status = $3,
                used_at = $4,
                changed_by = $5,
                changed_at = $6,
                changed_correlation_id = $7,
                changed_execution_origin = $8,
                changed_operation_code = $9,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(record.entity.id)
        .bind(record.entity.version)
        .bind(record.status)
        .bind(record.used_at)
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
                "Refresh token update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }

    /// Revoke every still-active token in a family
    ///
    /// Used when a rotated-out token is presented again, which indicates
    /// theft of an older token in the family.
    pub async fn revoke_family(&self, family_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens SET
                status = $2,
                version = version + 1
            WHERE family_id = $1 AND status = $3
            "#,
        )
        .bind(family_id)
        .bind(RefreshTokenStatus::Revoked.ordinal())
        .bind(RefreshTokenStatus::Active.ordinal())
        .execute(&self.pool)
        .await?;

        let revoked = result.rows_affected();
        if revoked > 0 {
            warn!(%family_id, revoked, "Revoked refresh token family");
        }

        Ok(revoked)
    }
}
