//! API key repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::{ApiKey, ApiKeyStatus};
use crate::record::api_keys::{api_key_from_record, ApiKeyRecord};

#[derive(Clone)]
pub struct ApiKeyRepository {
    pool: PgPool,
}

impl ApiKeyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get API key by id within a tenant
    pub async fn get_by_id(&self, tenant_code: Uuid, id: Uuid) -> Result<Option<ApiKey>> {
        let record: Option<ApiKeyRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   service_client_id, key_prefix, key_hash, status, expires_at
            FROM api_keys
            WHERE tenant_code = $1 AND id = $2
            "#,
        )
        .bind(tenant_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| api_key_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List all keys issued to a service client
    pub async fn list_for_client(&self, service_client_id: Uuid) -> Result<Vec<ApiKey>> {
        let records: Vec<ApiKeyRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   service_client_id, key_prefix, key_hash, status, expires_at
            FROM api_keys
            WHERE service_client_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(service_client_id)
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| api_key_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Fetch non-revoked candidate keys for a presented prefix
    ///
    /// Hash verification against the presented secret happens upstream; this
    /// layer only narrows the candidate set.
    pub async fn list_active_by_prefix(
        &self,
        tenant_code: Uuid,
        key_prefix: &str,
    ) -> Result<Vec<ApiKey>> {
        let records: Vec<ApiKeyRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   service_client_id, key_prefix, key_hash, status, expires_at
            FROM api_keys
            WHERE tenant_code = $1 AND key_prefix = $2 AND status = $3
              AND (expires_at IS NULL OR expires_at > NOW())
            "#,
        )
        .bind(tenant_code)
        .bind(key_prefix)
        .bind(ApiKeyStatus::Active.ordinal())
        .fetch_all(&self.pool)
        .await?;

        debug!(
            key_prefix,
            candidates = records.len(),
            "Loaded API key candidates"
        );

        records
            .into_iter()
            .map(|r| api_key_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new API key row
    pub async fn insert(&self, key: &ApiKey) -> Result<()> {
        let record = ApiKeyRecord::from(key);
        sqlx::query(
            r#"
            INSERT INTO api_keys (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                service_client_id, key_prefix, key_hash, status, expires_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
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
        .bind(record.service_client_id)
        .bind(record.key_prefix)
        .bind(record.key_hash)
        .bind(record.status)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update an API key row, enforcing the optimistic concurrency token
    pub async fn update(&self, key: &ApiKey) -> Result<()> {
        let record = ApiKeyRecord::from(key);
        let result = sqlx::query(
            r#"
            UPDATE api_keys SET
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
                "API key update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
