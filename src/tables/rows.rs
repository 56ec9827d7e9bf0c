//! Raw table rows as they appear in the source files

use crate::model::{
    Adjacency, AopId, EcRecord, EventId, IdParseError, KeRecord, KerRecord, RelationshipId, Role, Term,
};
use serde::Deserialize;

/// Trimmed, non-empty cell content
fn cell(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Build a term from its three cells; present when the id is present
fn term(source: Option<String>, id: Option<String>, name: Option<String>, role: Role) -> Option<Term> {
    let id = cell(id)?;
    let name = cell(name).unwrap_or_else(|| id.clone());
    let source = cell(source).unwrap_or_default();
    Some(Term::new(id, name, source, role))
}

#[derive(Debug, Deserialize)]
pub(super) struct EcRow {
    #[serde(rename = "AOP")]
    aop: String,
    #[serde(rename = "Key Event")]
    event: String,
    #[serde(rename = "Action", default)]
    action: Option<String>,
    #[serde(rename = "Object Source", default)]
    object_source: Option<String>,
    #[serde(rename = "Object ID", default)]
    object_id: Option<String>,
    #[serde(rename = "Object Term", default)]
    object_term: Option<String>,
    #[serde(rename = "Process/Phenotype Source", default)]
    phenotype_source: Option<String>,
    #[serde(rename = "Process/Phenotype ID", default)]
    phenotype_id: Option<String>,
    #[serde(rename = "Process/Phenotype Term", default)]
    phenotype_term: Option<String>,
}

impl TryFrom<EcRow> for EcRecord {
    type Error = IdParseError;

    fn try_from(row: EcRow) -> Result<Self, Self::Error> {
        Ok(EcRecord {
            aop: row.aop.parse::<AopId>()?,
            event: row.event.parse::<EventId>()?,
            action: cell(row.action),
            object: term(row.object_source, row.object_id, row.object_term, Role::Object),
            phenotype: term(
                row.phenotype_source,
                row.phenotype_id,
                row.phenotype_term,
                Role::ProcessPhenotype,
            ),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct KeRow {
    #[serde(rename = "AOP")]
    aop: String,
    #[serde(rename = "Key Event")]
    event: String,
    #[serde(rename = "Adverse Outcome", default)]
    title: Option<String>,
}

impl TryFrom<KeRow> for KeRecord {
    type Error = IdParseError;

    fn try_from(row: KeRow) -> Result<Self, Self::Error> {
        Ok(KeRecord {
            aop: row.aop.parse::<AopId>()?,
            event: row.event.parse::<EventId>()?,
            title: cell(row.title),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct KerRow {
    #[serde(rename = "AOP")]
    aop: String,
    #[serde(rename = "Event1")]
    event1: String,
    #[serde(rename = "Event2")]
    event2: String,
    #[serde(rename = "Relationship", default)]
    relationship: Option<String>,
    #[serde(rename = "adjacent", default)]
    adjacent: Option<String>,
}

impl TryFrom<KerRow> for KerRecord {
    type Error = IdParseError;

    fn try_from(row: KerRow) -> Result<Self, Self::Error> {
        let relationship = match cell(row.relationship) {
            Some(raw) => Some(raw.parse::<RelationshipId>()?),
            None => None,
        };
        Ok(KerRecord {
            aop: row.aop.parse::<AopId>()?,
            event1: row.event1.parse::<EventId>()?,
            event2: row.event2.parse::<EventId>()?,
            adjacency: Adjacency::parse(cell(row.adjacent).as_deref()),
            relationship,
        })
    }
}
