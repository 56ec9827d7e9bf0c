//! Per-pathway compilation: ordering, indexing, term registry and assembly

mod adjacency;
mod assembler;
mod event_index;
mod registry;

#[cfg(test)]
mod tests;

pub use adjacency::{AdjacencyResolver, EventOrder, OrderingStrategy, SuccessorConflict};
pub use assembler::{AssembledPathway, EdgeKey, EdgeKind, EdgeSet, GraphAssembler, RelationshipEdge};
pub use event_index::EventIndex;
pub use registry::{ClassDeclaration, IndividualDeclaration, TermDeclaration, TermRegistry};
