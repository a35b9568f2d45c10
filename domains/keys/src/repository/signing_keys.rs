//! Signing key repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::{SigningKey, SigningKeyStatus};
use crate::record::signing_keys::{signing_key_from_record, SigningKeyRecord};

#[derive(Clone)]
pub struct SigningKeyRepository {
    pool: PgPool,
}

impl SigningKeyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a signing key by its JOSE key id
    pub async fn find_by_kid(&self, tenant_code: Uuid, kid: &str) -> Result<Option<SigningKey>> {
        let record: Option<SigningKeyRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   kid, algorithm, public_jwk, private_key_der, status, not_before, expires_at
            FROM signing_keys
            WHERE tenant_code = $1 AND kid = $2
            "#,
        )
        .bind(tenant_code)
        .bind(kid)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| signing_key_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List keys whose signatures are still accepted (active and rotated)
    pub async fn list_verifying(&self, tenant_code: Uuid) -> Result<Vec<SigningKey>> {
        let records: Vec<SigningKeyRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   kid, algorithm, public_jwk, private_key_der, status, not_before, expires_at
            FROM signing_keys
            WHERE tenant_code = $1 AND status IN ($2, $3)
            ORDER BY not_before DESC
            "#,
        )
        .bind(tenant_code)
        .bind(SigningKeyStatus::Active.ordinal())
        .bind(SigningKeyStatus::Rotated.ordinal())
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| signing_key_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new signing key row
    pub async fn insert(&self, key: &SigningKey) -> Result<()> {
        let record = SigningKeyRecord::from(key);
        sqlx::query(
            r#"
            INSERT INTO signing_keys (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                kid, algorithm, public_jwk, private_key_der, status, not_before, expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
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
        .bind(record.kid)
        .bind(record.algorithm)
        .bind(record.public_jwk)
        .bind(record.private_key_der)
        .bind(record.status)
        .bind(record.not_before)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a signing key row, enforcing the optimistic concurrency token
    pub async fn update(&self, key: &SigningKey) -> Result<()> {
        let record = SigningKeyRecord::from(key);
        let result = sqlx::query(
            r#"
            UPDATE signing_keys SET
                status = $3,
                expires_at = $4,
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
        .bind(record.expires_at)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                key_id = %key.info.id,
                version = key.info.version.value(),
                "Signing key update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
