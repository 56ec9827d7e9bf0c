//! Core pathway data structures

mod ids;
mod records;
mod term;

pub use ids::{AopId, EventId, IdParseError, RelationshipId};
pub use records::{Adjacency, EcRecord, KeRecord, KerRecord};
pub use term::{ActionDirection, Role, SourceClass, Term, TermId};
