//! Event index: event component rows grouped by key event

use crate::model::{EcRecord, EventId};
use std::collections::HashMap;

/// Event component rows of one pathway, grouped by event id
///
/// Rows keep their table order within an event; events keep the order of
/// their first row.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    rows: HashMap<EventId, Vec<EcRecord>>,
    order: Vec<EventId>,
}

impl EventIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from event component rows
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a EcRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record.clone());
        }
        index
    }

    pub fn insert(&mut self, record: EcRecord) {
        let event = record.event;
        let rows = self.rows.entry(event).or_insert_with(|| {
            self.order.push(event);
            Vec::new()
        });
        rows.push(record);
    }

    /// Rows for an event, or `None` if the event has no components
    pub fn get(&self, event: &EventId) -> Option<&[EcRecord]> {
        self.rows.get(event).map(|v| v.as_slice())
    }

    pub fn contains(&self, event: &EventId) -> bool {
        self.rows.contains_key(event)
    }

    /// Event ids in order of first appearance
    pub fn events(&self) -> &[EventId] {
        &self.order
    }

    /// Number of distinct events
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
