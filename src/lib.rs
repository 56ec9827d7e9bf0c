//! aop-owl: Adverse Outcome Pathway tables to OWL
//!
//! Compiles tabular Adverse Outcome Pathways (key events, their event
//! components and the relationships between them) into one OWL ontology per
//! pathway, serialized as Turtle.
//!
//! # Core Concepts
//!
//! - **Terms**: object and process/phenotype annotations of a key event,
//!   declared once per pathway as a class plus a named individual
//! - **Classifier**: a decision table choosing candidate RO predicates for a
//!   pair of typed terms
//! - **Pathways**: the ordered chain of key events of one AOP, walked to
//!   produce intra-event and inter-event relationship edges
//!
//! # Example
//!
//! ```
//! use aop_owl::{to_turtle, AopId, EcRecord, EventId, GraphAssembler, KerRecord, OntologyHeader, Term};
//!
//! let aop = AopId::new(1);
//! let rows = vec![
//!     EcRecord::new(aop, EventId::new(1)).with_object(Term::object("CHEBI:1", "agonist", "CHEBI")),
//!     EcRecord::new(aop, EventId::new(2)).with_object(Term::object("PR:1", "receptor", "PR")),
//! ];
//! let links = vec![KerRecord::adjacent(aop, EventId::new(1), EventId::new(2))];
//!
//! let pathway = GraphAssembler::default().assemble(aop, &rows, &links);
//! let turtle = to_turtle(&OntologyHeader::new(aop, "Example"), &pathway);
//! assert!(turtle.contains("owl:NamedIndividual"));
//! ```

pub mod batch;
pub mod classify;
pub mod config;
pub mod model;
pub mod pathway;
pub mod report;
pub mod tables;
pub mod turtle;

pub use batch::{BatchRunner, BatchSummary, PathwayError, PathwayOutcome, PathwayReport, PathwayResult};
pub use classify::{classify, Participant, Predicate};
pub use config::{Config, ConfigError, ConfigResult};
pub use model::{AopId, EcRecord, EventId, KeRecord, KerRecord, RelationshipId, Role, Term, TermId};
pub use pathway::{
    AdjacencyResolver, AssembledPathway, EventIndex, GraphAssembler, OrderingStrategy, TermRegistry,
};
pub use report::{ReportError, ReportResult, TermPairReport};
pub use tables::{PathwayInput, TableError, TableResult, Tables};
pub use turtle::{to_turtle, OntologyHeader, SerializeStats, TurtleWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
