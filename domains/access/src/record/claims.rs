//! Claim storage record and mapping factories

use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::Claim;

/// Flat storage shape of [`Claim`], column-for-column with `claims`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClaimRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub code: String,
    pub description: Option<String>,
}

impl From<&Claim> for ClaimRecord {
    fn from(claim: &Claim) -> Self {
        ClaimRecord {
            entity: EntityInfoRecord::from(&claim.info),
            code: claim.code.clone(),
            description: claim.description.clone(),
        }
    }
}

/// Rebuild a [`Claim`] from its storage record
pub fn claim_from_record(record: ClaimRecord) -> Result<Claim, MappingError> {
    Ok(Claim {
        info: EntityInfo::from_record(record.entity, "Claim")?,
        code: record.code,
        description: record.description,
    })
}
