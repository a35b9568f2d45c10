//! Token exchange storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityId, EntityInfo, EntityInfoRecord, MappingError};
use uuid::Uuid;

use crate::domain::entities::TokenExchange;

/// Flat storage shape of [`TokenExchange`], column-for-column with `token_exchanges`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TokenExchangeRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub actor_service_client_id: Uuid,
    pub subject_token_hash: String,
    pub issued_token_hash: String,
    pub exchanged_at: DateTime<Utc>,
}

impl From<&TokenExchange> for TokenExchangeRecord {
    fn from(exchange: &TokenExchange) -> Self {
        TokenExchangeRecord {
            entity: EntityInfoRecord::from(&exchange.info),
            actor_service_client_id: exchange.actor_service_client_id.as_uuid(),
            subject_token_hash: exchange.subject_token_hash.clone(),
            issued_token_hash: exchange.issued_token_hash.clone(),
            exchanged_at: exchange.exchanged_at,
        }
    }
}

/// Rebuild a [`TokenExchange`] from its storage record
pub fn token_exchange_from_record(
    record: TokenExchangeRecord,
) -> Result<TokenExchange, MappingError> {
    Ok(TokenExchange {
        info: EntityInfo::from_record(record.entity, "TokenExchange")?,
        actor_service_client_id: EntityId::new(record.actor_service_client_id),
        subject_token_hash: record.subject_token_hash,
        issued_token_hash: record.issued_token_hash,
        exchanged_at: record.exchanged_at,
    })
}
