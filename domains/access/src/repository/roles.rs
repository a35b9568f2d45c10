//! Role repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::{Role, RoleClaim};
use crate::record::role_claims::{role_claim_from_record, RoleClaimRecord};
use crate::record::roles::{role_from_record, RoleRecord};

#[derive(Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get role by id within a tenant
    pub async fn get_by_id(&self, tenant_code: Uuid, id: Uuid) -> Result<Option<Role>> {
        let record: Option<RoleRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, description, built_in
            FROM roles
            WHERE tenant_code = $1 AND id = $2
            "#,
        )
        .bind(tenant_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| role_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List all roles of a tenant ordered by name
    pub async fn list_by_tenant(&self, tenant_code: Uuid) -> Result<Vec<Role>> {
        let records: Vec<RoleRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   name, description, built_in
            FROM roles
            WHERE tenant_code = $1
            ORDER BY name
            "#,
        )
        .bind(tenant_code)
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| role_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// List the claims attached to a role
    pub async fn list_claims(&self, role_id: Uuid) -> Result<Vec<RoleClaim>> {
        let records: Vec<RoleClaimRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   role_id, claim_code, claim_value
            FROM role_claims
            WHERE role_id = $1
            ORDER BY claim_code
            "#,
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| role_claim_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new role row
    pub async fn insert(&self, role: &Role) -> Result<()> {
        let record = RoleRecord::from(role);
        sqlx::query(
            r#"
            INSERT INTO roles (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                name, description, built_in
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
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
        .bind(record.description)
        .bind(record.built_in)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a role row, enforcing the optimistic concurrency token
    pub async fn update(&self, role: &Role) -> Result<()> {
        let record = RoleRecord::from(role);
        let result = sqlx::query(
            r#"
            UPDATE roles SET
                name = $3,
                description = $4,
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
        .bind(record.name)
        .bind(record.description)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                role_id = %role.info.id,
                version = role.info.version.value(),
                "Role update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
