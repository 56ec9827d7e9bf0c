//! Normalized rows of the three source tables

use super::ids::{AopId, EventId, RelationshipId};
use super::term::Term;
use serde::{Deserialize, Serialize};

/// One event component row: an action plus optional object and
/// process/phenotype terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcRecord {
    pub aop: AopId,
    pub event: EventId,
    pub action: Option<String>,
    pub object: Option<Term>,
    pub phenotype: Option<Term>,
}

impl EcRecord {
    pub fn new(aop: AopId, event: EventId) -> Self {
        Self {
            aop,
            event,
            action: None,
            object: None,
            phenotype: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_object(mut self, term: Term) -> Self {
        self.object = Some(term);
        self
    }

    pub fn with_phenotype(mut self, term: Term) -> Self {
        self.phenotype = Some(term);
        self
    }

    /// The phenotype term if present, otherwise the object term
    pub fn most_specific(&self) -> Option<&Term> {
        self.phenotype.as_ref().or(self.object.as_ref())
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

/// One key event row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeRecord {
    pub aop: AopId,
    pub event: EventId,
    /// Adverse outcome title of the pathway, as listed for this event
    pub title: Option<String>,
}

impl KeRecord {
    pub fn new(aop: AopId, event: EventId) -> Self {
        Self { aop, event, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Adjacency flag of a key event relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjacency {
    Adjacent,
    /// Any other flag value (`non-adjacent`, blank, ...)
    Other(String),
}

impl Adjacency {
    pub fn parse(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("adjacent") => Adjacency::Adjacent,
            Some(f) => Adjacency::Other(f.to_string()),
            None => Adjacency::Other(String::new()),
        }
    }

    pub fn is_adjacent(&self) -> bool {
        matches!(self, Adjacency::Adjacent)
    }
}

/// One key event relationship row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KerRecord {
    pub aop: AopId,
    pub event1: EventId,
    pub event2: EventId,
    pub adjacency: Adjacency,
    pub relationship: Option<RelationshipId>,
}

impl KerRecord {
    /// An adjacent relationship without a relationship id
    pub fn adjacent(aop: AopId, event1: EventId, event2: EventId) -> Self {
        Self {
            aop,
            event1,
            event2,
            adjacency: Adjacency::Adjacent,
            relationship: None,
        }
    }

    pub fn with_relationship(mut self, id: RelationshipId) -> Self {
        self.relationship = Some(id);
        self
    }

    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_specific_prefers_phenotype() {
        let row = EcRecord::new(AopId::new(1), EventId::new(1))
            .with_object(Term::object("PR:1", "protein", "PR"))
            .with_phenotype(Term::process("GO:1", "apoptotic process", "GO"));
        assert_eq!(row.most_specific().unwrap().id.as_str(), "GO:1");

        let object_only = EcRecord::new(AopId::new(1), EventId::new(1))
            .with_object(Term::object("PR:1", "protein", "PR"));
        assert_eq!(object_only.most_specific().unwrap().id.as_str(), "PR:1");

        let empty = EcRecord::new(AopId::new(1), EventId::new(1));
        assert!(empty.most_specific().is_none());
    }

    #[test]
    fn test_adjacency_parse() {
        assert!(Adjacency::parse(Some("adjacent")).is_adjacent());
        assert!(Adjacency::parse(Some(" Adjacent ")).is_adjacent());
        assert!(!Adjacency::parse(Some("non-adjacent")).is_adjacent());
        assert!(!Adjacency::parse(None).is_adjacent());
    }
}
