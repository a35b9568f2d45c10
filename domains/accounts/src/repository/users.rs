//! User repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::User;
use crate::record::users::{user_from_record, UserRecord};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get user by id within a tenant
    pub async fn get_by_id(&self, tenant_code: Uuid, id: Uuid) -> Result<Option<User>> {
        let record: Option<UserRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   email, display_name, password_hash, status, mfa_enabled, last_login_at
            FROM users
            WHERE tenant_code = $1 AND id = $2
            "#,
        )
        .bind(tenant_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| user_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// Find user by email within a tenant
    pub async fn find_by_email(&self, tenant_code: Uuid, email: &str) -> Result<Option<User>> {
        let record: Option<UserRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   email, display_name, password_hash, status, mfa_enabled, last_login_at
            FROM users
            WHERE tenant_code = $1 AND email = $2
            "#,
        )
        .bind(tenant_code)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| user_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List a page of a tenant's users ordered by email
    pub async fn list_by_tenant(
        &self,
        tenant_code: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>> {
        let records: Vec<UserRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   email, display_name, password_hash, status, mfa_enabled, last_login_at
            FROM users
            WHERE tenant_code = $1
            ORDER BY email
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(tenant_code)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| user_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new user row
    pub async fn insert(&self, user: &User) -> Result<()> {
        let record = UserRecord::from(user);
        sqlx::query(
            r#"
            INSERT INTO users (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                email, display_name, password_hash, status, mfa_enabled, last_login_at
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
        .bind(record.email)
        .bind(record.display_name)
        .bind(record.password_hash)
        .bind(record.status)
        .bind(record.mfa_enabled)
        .bind(record.last_login_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a user row, enforcing the optimistic concurrency token
    pub async fn update(&self, user: &User) -> Result<()> {
        let record = UserRecord::from(user);
        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = $3,
                display_name = $4,
                password_hash = $5,
                status = $6,
                mfa_enabled = $7,
                last_login_at = $8,
                changed_by = $9,
                changed_at = $10,
                changed_correlation_id = $11,
                changed_execution_origin = $12,
                changed_operation_code = $13,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(record.entity.id)
        .bind(record.entity.version)
        .bind(record.email)
        .bind(record.display_name)
        .bind(record.password_hash)
        .bind(record.status)
        .bind(record.mfa_enabled)
        .bind(record.last_login_at)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                user_id = %user.info.id,
                version = user.info.version.value(),
                "User update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
