//! Term-pair report: one CSV row per classified term pair
//!
//! Lets a curator review every predicate choice across pathways without
//! reading Turtle.

use crate::classify::{join_codes, join_labels};
use crate::model::{AopId, EventId, RelationshipId, Term};
use crate::pathway::{AssembledPathway, EdgeKind, RelationshipEdge};
use crate::tables::PathwayInput;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// One classified term pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermPairRow {
    pub aop: AopId,
    pub kind: &'static str,
    pub event1: EventId,
    pub event2: EventId,
    pub relationship: Option<RelationshipId>,
    pub action1: Option<String>,
    pub source1: String,
    pub id1: String,
    pub term1: String,
    pub role1: &'static str,
    pub predicates: String,
    pub labels: String,
    pub action2: Option<String>,
    pub source2: String,
    pub id2: String,
    pub term2: String,
    pub role2: &'static str,
    pub title1: Option<String>,
    pub title2: Option<String>,
}

/// Term-pair rows across one or more pathways
#[derive(Debug, Clone, Default)]
pub struct TermPairReport {
    rows: Vec<TermPairRow>,
}

impl TermPairReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows for every recorded edge of a pathway, in recording order
    pub fn from_pathway(pathway: &AssembledPathway, input: &PathwayInput<'_>) -> Self {
        let mut report = Self::new();
        report.extend(pathway, input);
        report
    }

    /// Append the rows of another pathway
    pub fn extend(&mut self, pathway: &AssembledPathway, input: &PathwayInput<'_>) {
        self.rows
            .extend(pathway.edges.iter().map(|edge| row(pathway.aop, edge, input)));
    }

    pub fn rows(&self) -> &[TermPairRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write all rows with a header line
    pub fn write_csv<W: Write>(&self, out: W) -> ReportResult<()> {
        let mut writer = csv::Writer::from_writer(out);
        if self.rows.is_empty() {
            writer.write_record(HEADER)?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> ReportResult<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}

// Serialized header for reports with no rows
const HEADER: [&str; 19] = [
    "aop", "kind", "event1", "event2", "relationship", "action1", "source1", "id1", "term1", "role1",
    "predicates", "labels", "action2", "source2", "id2", "term2", "role2", "title1", "title2",
];

fn row(aop: AopId, edge: &RelationshipEdge, input: &PathwayInput<'_>) -> TermPairRow {
    let relationship = match edge.kind {
        EdgeKind::InterEvent => input.relationship_id(edge.subject_event, edge.object_event),
        EdgeKind::IntraEvent => None,
    };
    let (subject, object): (&Term, &Term) = (&edge.subject, &edge.object);
    TermPairRow {
        aop,
        kind: edge.kind.as_str(),
        event1: edge.subject_event,
        event2: edge.object_event,
        relationship,
        action1: edge.subject_action.clone(),
        source1: subject.source.clone(),
        id1: subject.id.to_string(),
        term1: subject.name.clone(),
        role1: subject.role.as_str(),
        predicates: join_codes(&edge.predicates),
        labels: join_labels(&edge.predicates),
        action2: edge.object_action.clone(),
        source2: object.source.clone(),
        id2: object.id.to_string(),
        term2: object.name.clone(),
        role2: object.role.as_str(),
        title1: input.event_title(edge.subject_event).map(str::to_string),
        title2: input.event_title(edge.object_event).map(str::to_string),
    }
}
