//! Tenant repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::{Tenant, TenantStatus};
use crate::record::tenants::{tenant_from_record, TenantRecord};

#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get tenant by row id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Tenant>> {
        let record: Option<TenantRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, status, tier, primary_domain
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| tenant_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// Get tenant by its tenant code
    pub async fn get_by_code(&self, tenant_code: Uuid) -> Result<Option<Tenant>> {
        let record: Option<TenantRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, status, tier, primary_domain
            FROM tenants
            WHERE tenant_code = $1
            "#,
        )
        .bind(tenant_code)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| tenant_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List tenants accepting traffic
    pub async fn list_active(&self) -> Result<Vec<Tenant>> {
        let records: Vec<TenantRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, status, tier, primary_domain
            FROM tenants
            WHERE status = $1
            ORDER BY name
            "#,
        )
        .bind(TenantStatus::Active.ordinal())
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| tenant_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new tenant row
    pub async fn insert(&self, tenant: &Tenant) -> Result<()> {
        let record = TenantRecord::from(tenant);
        sqlx::query(
            r#"
            INSERT INTO tenants (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                name, status, tier, primary_domain
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
        .bind(record.status)
        .bind(record.tier)
        .bind(record.primary_domain)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a tenant row, enforcing the optimistic concurrency token
    ///
    /// The WHERE clause matches the version the entity was read at; zero
    /// affected rows means the row is gone or was modified concurrently.
    pub async fn update(&self, tenant: &Tenant) -> Result<()> {
        let record = TenantRecord::from(tenant);
        let result = sqlx::query(
            r#"
            UPDATE tenants SET
                name = $3,
                status = $4,
                tier = $5,
                primary_domain = $6,
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
        .bind(record.status)
        .bind(record.tier)
        .bind(record.primary_domain)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                tenant_id = %tenant.info.id,
                version = tenant.info.version.value(),
                "Tenant update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
