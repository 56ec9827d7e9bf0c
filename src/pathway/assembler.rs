//! Graph assembler: walks a pathway and compiles terms and relationship edges

use super::adjacency::{AdjacencyResolver, EventOrder};
use super::event_index::EventIndex;
use super::registry::TermRegistry;
use crate::classify::{classify, Participant, Predicate};
use crate::model::{AopId, EcRecord, EventId, KerRecord, Term, TermId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Where an edge came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Object term to process/phenotype term of the same row
    IntraEvent,
    /// Most specific term of a row to that of a row of the next event
    InterEvent,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::IntraEvent => "intra",
            EdgeKind::InterEvent => "inter",
        }
    }
}

/// Ordered pair of term ids identifying an edge
pub type EdgeKey = (TermId, TermId);

/// Candidate predicates relating two terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipEdge {
    pub kind: EdgeKind,
    pub subject: Term,
    pub subject_event: EventId,
    pub subject_action: Option<String>,
    pub object: Term,
    pub object_event: EventId,
    pub object_action: Option<String>,
    pub predicates: Vec<Predicate>,
}

impl RelationshipEdge {
    pub fn key(&self) -> EdgeKey {
        (self.subject.id.clone(), self.object.id.clone())
    }
}

/// Relationship edges keyed by term pair, in order of first recording
///
/// Recording an existing key replaces its edge in place.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<RelationshipEdge>,
    index: HashMap<EdgeKey, usize>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edge; edges without predicates are dropped
    pub fn record(&mut self, edge: RelationshipEdge) {
        if edge.predicates.is_empty() {
            return;
        }
        let key = edge.key();
        debug!(
            subject = %key.0,
            object = %key.1,
            kind = edge.kind.as_str(),
            predicates = ?edge.predicates,
            "recorded edge"
        );
        match self.index.get(&key) {
            Some(&idx) => self.edges[idx] = edge,
            None => {
                self.edges.push(edge);
                self.index.insert(key, self.edges.len() - 1);
            }
        }
    }

    pub fn get(&self, subject: &TermId, object: &TermId) -> Option<&RelationshipEdge> {
        self.index
            .get(&(subject.clone(), object.clone()))
            .map(|&idx| &self.edges[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelationshipEdge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Everything compiled for one pathway, ready for serialization
#[derive(Debug, Clone)]
pub struct AssembledPathway {
    pub aop: AopId,
    pub registry: TermRegistry,
    pub edges: EdgeSet,
    pub index: EventIndex,
    pub order: EventOrder,
    /// Indexed events the resolver never placed, in index order
    pub unordered: Vec<EventId>,
    /// Referenced events with no component rows, first-seen order
    pub missing: Vec<EventId>,
}

impl AssembledPathway {
    /// Events in walk order: resolved order, then unordered events
    pub fn walk(&self) -> impl Iterator<Item = EventId> + '_ {
        self.order.order.iter().chain(self.unordered.iter()).copied()
    }

    /// Component rows of an event
    pub fn rows(&self, event: &EventId) -> Option<&[EcRecord]> {
        self.index.get(event)
    }

    /// Component rows of the event following `event`, if it has any
    pub fn successor_rows(&self, event: &EventId) -> Option<&[EcRecord]> {
        self.order.successor(event).and_then(|next| self.index.get(&next))
    }

    /// Predicates recorded for a term pair
    pub fn predicates(&self, subject: &TermId, object: &TermId) -> Option<&[Predicate]> {
        self.edges.get(subject, object).map(|e| e.predicates.as_slice())
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compiles one pathway into terms and relationship edges
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphAssembler {
    resolver: AdjacencyResolver,
}

impl GraphAssembler {
    pub fn new(resolver: AdjacencyResolver) -> Self {
        Self { resolver }
    }

    /// Index, order and assemble the rows of one pathway
    pub fn assemble<'a>(
        &self,
        aop: AopId,
        components: impl IntoIterator<Item = &'a EcRecord>,
        relationships: impl IntoIterator<Item = &'a KerRecord>,
    ) -> AssembledPathway {
        let index = EventIndex::from_records(components);
        let order = self.resolver.resolve(relationships);
        Self::assemble_resolved(aop, index, order)
    }

    /// Assemble from an already built index and order
    pub fn assemble_resolved(aop: AopId, index: EventIndex, order: EventOrder) -> AssembledPathway {
        let placed: HashSet<EventId> = order.order.iter().copied().collect();
        let unordered: Vec<EventId> = index
            .events()
            .iter()
            .copied()
            .filter(|e| !placed.contains(e))
            .collect();

        let mut registry = TermRegistry::new();
        let mut edges = EdgeSet::new();
        let mut missing: Vec<EventId> = Vec::new();
        let mut mark_missing = |event: EventId| {
            if !missing.contains(&event) {
                warn!(aop = %aop, event = %event, "key event has no components");
                missing.push(event);
            }
        };

        for &event in order.order.iter().chain(unordered.iter()) {
            let Some(rows) = index.get(&event) else {
                mark_missing(event);
                continue;
            };

            for row in rows {
                register_row(&mut registry, row);
                if let (Some(object), Some(phenotype)) = (&row.object, &row.phenotype) {
                    let predicates = classify(
                        Participant::new(row.action(), Some(object)),
                        Participant::new(None, Some(phenotype)),
                    );
                    edges.record(RelationshipEdge {
                        kind: EdgeKind::IntraEvent,
                        subject: object.clone(),
                        subject_event: event,
                        subject_action: row.action.clone(),
                        object: phenotype.clone(),
                        object_event: event,
                        object_action: None,
                        predicates,
                    });
                }
            }

            let Some(next) = order.successor(&event) else {
                continue;
            };
            let Some(next_rows) = index.get(&next) else {
                mark_missing(next);
                continue;
            };

            for row in rows {
                let Some(subject) = row.most_specific() else {
                    continue;
                };
                for next_row in next_rows {
                    let Some(object) = next_row.most_specific() else {
                        continue;
                    };
                    let predicates = classify(
                        Participant::new(row.action(), Some(subject)),
                        Participant::new(next_row.action(), Some(object)),
                    );
                    edges.record(RelationshipEdge {
                        kind: EdgeKind::InterEvent,
                        subject: subject.clone(),
                        subject_event: event,
                        subject_action: row.action.clone(),
                        object: object.clone(),
                        object_event: next,
                        object_action: next_row.action.clone(),
                        predicates,
                    });
                }
            }
        }

        debug!(
            aop = %aop,
            terms = registry.len(),
            edges = edges.len(),
            missing = missing.len(),
            "assembled pathway"
        );
        AssembledPathway {
            aop,
            registry,
            edges,
            index,
            order,
            unordered,
            missing,
        }
    }
}

fn register_row(registry: &mut TermRegistry, row: &EcRecord) {
    if let Some(object) = &row.object {
        registry.register_term(object);
    }
    if let Some(phenotype) = &row.phenotype {
        registry.register_term(phenotype);
    }
}
