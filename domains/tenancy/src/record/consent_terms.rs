//! Consent term storage record and mapping factories

use chrono::{DateTime, Utc};
use tradewind_common::{EntityInfo, EntityInfoRecord, MappingError};

use crate::domain::entities::{ConsentTerm, ConsentTermType};

/// Flat storage shape of [`ConsentTerm`], column-for-column with `consent_terms`
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ConsentTermRecord {
    #[sqlx(flatten)]
    pub entity: EntityInfoRecord,
    pub term_type: i16,
    pub version_label: String,
    pub document_url: String,
    pub published_at: DateTime<Utc>,
    pub mandatory: bool,
}

impl From<&ConsentTerm> for ConsentTermRecord {
    fn from(term: &ConsentTerm) -> Self {
        ConsentTermRecord {
            entity: EntityInfoRecord::from(&term.info),
            term_type: term.term_type.ordinal(),
            version_label: term.version_label.clone(),
            document_url: term.document_url.clone(),
            published_at: term.published_at,
            mandatory: term.mandatory,
        }
    }
}

/// Rebuild a [`ConsentTerm`] from its storage record
pub fn consent_term_from_record(record: ConsentTermRecord) -> Result<ConsentTerm, MappingError> {
    Ok(ConsentTerm {
        info: EntityInfo::from_record(record.entity, "ConsentTerm")?,
        term_type: ConsentTermType::from_ordinal(record.term_type)?,
        version_label: record.version_label,
        document_url: record.document_url,
        published_at: record.published_at,
        mandatory: record.mandatory,
    })
}
