//! Service client repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::ServiceClient;
use crate::record::service_clients::{service_client_from_record, ServiceClientRecord};

#[derive(Clone)]
pub struct ServiceClientRepository {
    pool: PgPool,
}

impl ServiceClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get service client by id within a tenant
    pub async fn get_by_id(&self, tenant_code: Uuid, id: Uuid) -> Result<Option<ServiceClient>> {
        let record: Option<ServiceClientRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, identifier, description, status
            FROM service_clients
            WHERE tenant_code = $1 AND id = $2
            "#,
        )
        .bind(tenant_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| service_client_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// Find service client by its stable machine identifier
    pub async fn find_by_identifier(
        &self,
        tenant_code: Uuid,
        identifier: &str,
    ) -> Result<Option<ServiceClient>> {
        let record: Option<ServiceClientRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, identifier, description, status
            FROM service_clients
            WHERE tenant_code = $1 AND identifier = $2
            "#,
        )
        .bind(tenant_code)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| service_client_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List all service clients of a tenant
    pub async fn list_by_tenant(&self, tenant_code: Uuid) -> Result<Vec<ServiceClient>> {
        let records: Vec<ServiceClientRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, identifier, description, status
            FROM service_clients
            WHERE tenant_code = $1
            ORDER BY name
            "#,
        )
        .bind(tenant_code)
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| service_client_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new service client row
    pub async fn insert(&self, client: &ServiceClient) -> Result<()> {
        let record = ServiceClientRecord::from(client);
        sqlx::query(
            r#"
            INSERT INTO service_clients (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                name, identifier, description, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
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
        .bind(record.name)
        .bind(record.identifier)
        .bind(record.description)
        .bind(record.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a service client row, enforcing the optimistic concurrency token
    pub async fn update(&self, client: &ServiceClient) -> Result<()> {
        let record = ServiceClientRecord::from(client);
        let result = sqlx::query(
            r#"
            UPDATE service_clients SET
                name = $3,
                identifier = $4,
                description = $5,
                status = $6,
                changed_by = $7,
                changed_at = $8,
                changed_correlation_id = $9,
                changed_execution_origin = $10,
                changed_operation_code = $11,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(record.entity.id)
        .bind(record.entity.version)
        .bind(record.name)
        .bind(record.identifier)
        .bind(record.description)
        .bind(record.status)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                client_id = %client.info.id,
                version = client.info.version.value(),
                "Service client update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
