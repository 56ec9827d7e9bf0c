//! Adjacency resolver: event order and successor lookup for one pathway

use crate::model::{EventId, KerRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// How the event order is derived from adjacent relationship rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingStrategy {
    /// Trust the table: seed with both ends of the first adjacent row, then
    /// append the downstream event of each following row. Rows must already
    /// be in pathway order; no sorting is done.
    #[default]
    TableOrder,
    /// Walk successor chains from root events (events never downstream of
    /// another), then append anything left unvisited in row order.
    Chain,
}

/// An event that declared more than one downstream event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorConflict {
    pub event: EventId,
    pub kept: EventId,
    pub ignored: EventId,
}

/// Resolved ordering of one pathway
#[derive(Debug, Clone, Default)]
pub struct EventOrder {
    /// Event ids in pathway order, each at most once
    pub order: Vec<EventId>,
    /// Downstream event of each event (at most one)
    pub successors: HashMap<EventId, EventId>,
    /// Second successor declarations that were dropped
    pub conflicts: Vec<SuccessorConflict>,
}

impl EventOrder {
    pub fn successor(&self, event: &EventId) -> Option<EventId> {
        self.successors.get(event).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Derives event order and successors from a pathway's relationship rows
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyResolver {
    strategy: OrderingStrategy,
}

impl AdjacencyResolver {
    pub fn new(strategy: OrderingStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> OrderingStrategy {
        self.strategy
    }

    /// Resolve the order of the adjacent rows among `rows`
    pub fn resolve<'a>(&self, rows: impl IntoIterator<Item = &'a KerRecord>) -> EventOrder {
        let adjacent: Vec<&KerRecord> = rows.into_iter().filter(|r| r.adjacency.is_adjacent()).collect();

        let mut resolved = EventOrder::default();
        for row in &adjacent {
            match resolved.successors.get(&row.event1) {
                Some(&kept) if kept != row.event2 => {
                    warn!(
                        event = %row.event1,
                        kept = %kept,
                        ignored = %row.event2,
                        "event declares a second successor, keeping the first"
                    );
                    resolved.conflicts.push(SuccessorConflict {
                        event: row.event1,
                        kept,
                        ignored: row.event2,
                    });
                }
                Some(_) => {}
                None => {
                    resolved.successors.insert(row.event1, row.event2);
                }
            }
        }

        resolved.order = match self.strategy {
            OrderingStrategy::TableOrder => table_order(&adjacent),
            OrderingStrategy::Chain => chain_order(&adjacent, &resolved.successors),
        };
        resolved
    }
}

fn table_order(adjacent: &[&KerRecord]) -> Vec<EventId> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |event: EventId, order: &mut Vec<EventId>| {
        if seen.insert(event) {
            order.push(event);
        }
    };

    let Some((first, rest)) = adjacent.split_first() else {
        return order;
    };
    push(first.event1, &mut order);
    push(first.event2, &mut order);
    for row in rest {
        if !order.contains(&row.event1) {
            warn!(
                event = %row.event1,
                "relationship rows are not in pathway order; upstream event left out of the order"
            );
        }
        push(row.event2, &mut order);
    }
    order
}

fn chain_order(adjacent: &[&KerRecord], successors: &HashMap<EventId, EventId>) -> Vec<EventId> {
    let downstream: HashSet<EventId> = adjacent.iter().map(|r| r.event2).collect();

    // Every endpoint in row order, deduplicated
    let mut endpoints = Vec::new();
    let mut listed = HashSet::new();
    for row in adjacent {
        for event in [row.event1, row.event2] {
            if listed.insert(event) {
                endpoints.push(event);
            }
        }
    }

    let mut order = Vec::with_capacity(endpoints.len());
    let mut visited = HashSet::new();
    let roots = endpoints.iter().filter(|e| !downstream.contains(e));
    for &root in roots {
        let mut current = Some(root);
        while let Some(event) = current {
            if !visited.insert(event) {
                break;
            }
            order.push(event);
            current = successors.get(&event).copied();
        }
    }
    // Cycles have no root; keep their events in row order
    for event in endpoints {
        if visited.insert(event) {
            order.push(event);
        }
    }
    order
}
