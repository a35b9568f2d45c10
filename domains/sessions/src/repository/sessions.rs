//! Session repository

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use tradewind_common::{RepositoryError, Result};

use crate::domain::entities::{Session, SessionStatus};
use crate::record::sessions::{session_from_record, SessionRecord};

#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get session by id within a tenant
    pub async fn get_by_id(&self, tenant_code: Uuid, id: Uuid) -> Result<Option<Session>> {
        let record: Option<SessionRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   user_id, status, ip_address, user_agent, issued_at, expires_at, revoked_at
            FROM sessions
            WHERE tenant_code = $1 AND id = $2
            "#,
        )
        .bind(tenant_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record
            .map(|r| session_from_record(r).map_err(RepositoryError::from))
            .transpose()
            .map_err(Into::into)
    }

    /// List a user's sessions that are still usable for authentication
    pub async fn list_active_for_user(
        &self,
        tenant_code: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Session>> {
        let records: Vec<SessionRecord> = sqlx::query_as(
            r#"
            SELECT id, tenant_code, created_by, created_at, created_correlation_id,
                   created_execution_origin, created_operation_code,
                   changed_by, changed_at, changed_correlation_id,
                   changed_execution_origin, changed_operation_code, version,
                   user_id, status, ip_address, user_agent, issued_at, expires_at, revoked_at
            FROM sessions
            WHERE tenant_code = $1 AND user_id = $2 AND status = $3 AND expires_at > NOW()
            ORDER BY issued_at DESC
            "#,
        )
        .bind(tenant_code)
        .bind(user_id)
        .bind(SessionStatus::Active.ordinal())
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|r| session_from_record(r).map_err(|e| RepositoryError::from(e).into()))
            .collect()
    }

    /// Insert a new session row
    pub async fn insert(&self, session: &Session) -> Result<()> {
        let record = SessionRecord::from(session);
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, tenant_code, created_by, created_at, created_correlation_id,
                created_execution_origin, created_operation_code,
                changed_by, changed_at, changed_correlation_id,
                changed_execution_origin, changed_operation_code, version,
                user_id, status, ip_address, user_agent, issued_at, expires_at, revoked_at
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
        .bind(record.user_id)
        .bind(record.status)
        .bind(record.ip_address)
        .bind(record.user_agent)
        .bind(record.issued_at)
        .bind(record.expires_at)
        .bind(record.revoked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a session row, enforcing the optimistic concurrency token
    pub async fn update(&self, session: &Session) -> Result<()> {
        let record = SessionRecord::from(session);
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                status = $3,
                expires_at = $4,
                revoked_at = $5,
                changed_by = $6,
                changed_at = $7,
                changed_correlation_id = $8,
                changed_execution_origin = $9,
                changed_operation_code = $10,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(record.entity.id)
        .bind(record.entity.version)
        .bind(record.status)
        .bind(record.expires_at)
        .bind(record.revoked_at)
        .bind(record.entity.changed_by)
        .bind(record.entity.changed_at)
        .bind(record.entity.changed_correlation_id)
        .bind(record.entity.changed_execution_origin)
        .bind(record.entity.changed_operation_code)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                session_id = %session.info.id,
                version = session.info.version.value(),
                "Session update matched no row"
            );
            return Err(RepositoryError::StaleVersion.into());
        }

        Ok(())
    }
}
