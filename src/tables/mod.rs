//! Source tables: event components, key events and key event relationships
//!
//! Tables are read with the `csv` crate. Files ending in `.tsv` are
//! tab-separated, everything else comma-separated. Cells are trimmed and
//! empty cells read as absent. Columns not listed here are ignored.

mod rows;

use crate::model::{AopId, EcRecord, EventId, IdParseError, KeRecord, KerRecord, RelationshipId};
use rows::{EcRow, KeRow, KerRow};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading tables
#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: {source}", path.display())]
    InvalidId {
        path: PathBuf,
        line: u64,
        #[source]
        source: IdParseError,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// All rows of the three source tables
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub components: Vec<EcRecord>,
    pub key_events: Vec<KeRecord>,
    pub relationships: Vec<KerRecord>,
}

impl Tables {
    /// Build tables from already normalized records
    pub fn from_records(
        components: Vec<EcRecord>,
        key_events: Vec<KeRecord>,
        relationships: Vec<KerRecord>,
    ) -> Self {
        Self {
            components,
            key_events,
            relationships,
        }
    }

    /// Read and normalize the three table files
    pub fn load(
        components: impl AsRef<Path>,
        key_events: impl AsRef<Path>,
        relationships: impl AsRef<Path>,
    ) -> TableResult<Self> {
        let components: Vec<EcRecord> = read_rows::<EcRow, _>(components.as_ref())?;
        let key_events: Vec<KeRecord> = read_rows::<KeRow, _>(key_events.as_ref())?;
        let relationships: Vec<KerRecord> = read_rows::<KerRow, _>(relationships.as_ref())?;
        info!(
            components = components.len(),
            key_events = key_events.len(),
            relationships = relationships.len(),
            "loaded tables"
        );
        Ok(Self::from_records(components, key_events, relationships))
    }

    /// Distinct AOP ids of the event component table, ascending
    pub fn aop_ids(&self) -> Vec<AopId> {
        self.components
            .iter()
            .map(|r| r.aop)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows belonging to one AOP
    pub fn pathway(&self, aop: AopId) -> PathwayInput<'_> {
        PathwayInput {
            aop,
            components: self.components.iter().filter(|r| r.aop == aop).collect(),
            key_events: self.key_events.iter().filter(|r| r.aop == aop).collect(),
            relationships: self.relationships.iter().filter(|r| r.aop == aop).collect(),
        }
    }
}

/// Borrowed rows of one AOP
#[derive(Debug, Clone)]
pub struct PathwayInput<'a> {
    pub aop: AopId,
    pub components: Vec<&'a EcRecord>,
    pub key_events: Vec<&'a KeRecord>,
    pub relationships: Vec<&'a KerRecord>,
}

impl<'a> PathwayInput<'a> {
    /// Title listed for an event, if any
    pub fn event_title(&self, event: EventId) -> Option<&'a str> {
        self.key_events
            .iter()
            .find(|k| k.event == event && k.title.is_some())
            .and_then(|k| k.title.as_deref())
    }

    /// Adverse outcome title for the ontology header
    ///
    /// Prefers the title of the last ordered event that has one, then the
    /// first titled key event of the AOP, then `AOP <id>`. Commas become
    /// semicolons.
    pub fn title(&self, order: &[EventId]) -> String {
        let title = order
            .iter()
            .rev()
            .find_map(|e| self.event_title(*e))
            .or_else(|| self.key_events.iter().find_map(|k| k.title.as_deref()));
        match title {
            Some(t) => t.replace(',', ";"),
            None => format!("AOP {}", self.aop),
        }
    }

    /// Relationship id of the adjacent link `event1 -> event2`
    pub fn relationship_id(&self, event1: EventId, event2: EventId) -> Option<RelationshipId> {
        self.relationships
            .iter()
            .find(|r| r.event1 == event1 && r.event2 == event2)
            .and_then(|r| r.relationship)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.relationships.is_empty()
    }
}

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

/// Read every row of `path` as `R` and normalize it into `T`
fn read_rows<R, T>(path: &Path) -> TableResult<Vec<T>>
where
    R: DeserializeOwned + TryInto<T, Error = IdParseError>,
{
    let read_err = |source| TableError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(read_err)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<R>() {
        let row = result.map_err(read_err)?;
        let line = records.len() as u64 + 2;
        let record = row.try_into().map_err(|source| TableError::InvalidId {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}
