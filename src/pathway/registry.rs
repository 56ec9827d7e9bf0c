//! Term registry: one class and one individual declaration per term id

use crate::model::{Term, TermId};
use crate::turtle::iri;
use std::collections::HashMap;
use tracing::debug;

/// An OWL class standing for an ontology term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub iri: String,
}

/// An OWL named individual typed by a term's class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualDeclaration {
    pub iri: String,
    pub class_iri: String,
}

/// Both declarations synthesized for a term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDeclaration {
    pub term: Term,
    pub class: ClassDeclaration,
    pub individual: IndividualDeclaration,
}

impl TermDeclaration {
    fn synthesize(id: &TermId, name: &str, source: &str, template: Option<&Term>) -> Self {
        let class_iri = iri::class_iri(id.as_str(), source);
        let display = if name.trim().is_empty() { id.as_str() } else { name };
        let term = match template {
            Some(t) => t.clone(),
            None => Term::object(id.clone(), name, source),
        };
        Self {
            term,
            class: ClassDeclaration {
                iri: class_iri.clone(),
            },
            individual: IndividualDeclaration {
                iri: iri::individual_iri(display),
                class_iri,
            },
        }
    }
}

/// Deduplicates terms of one pathway into declarations
///
/// Declarations are kept in registration order. Registering an id a second
/// time returns the cached declaration unchanged, whatever name or source the
/// later call carries.
#[derive(Debug, Clone, Default)]
pub struct TermRegistry {
    index: HashMap<TermId, usize>,
    declarations: Vec<TermDeclaration>,
}

impl TermRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a term by its parts and return its declarations
    pub fn register(&mut self, id: &TermId, name: &str, source: &str) -> &TermDeclaration {
        self.insert(id, name, source, None)
    }

    /// Register a typed term and return its declarations
    pub fn register_term(&mut self, term: &Term) -> &TermDeclaration {
        self.insert(&term.id, &term.name, &term.source, Some(term))
    }

    fn insert(&mut self, id: &TermId, name: &str, source: &str, template: Option<&Term>) -> &TermDeclaration {
        let idx = match self.index.get(id) {
            Some(&idx) => idx,
            None => {
                let declaration = TermDeclaration::synthesize(id, name, source, template);
                debug!(term = %id, class = %declaration.class.iri, "registered term");
                self.declarations.push(declaration);
                let idx = self.declarations.len() - 1;
                self.index.insert(id.clone(), idx);
                idx
            }
        };
        &self.declarations[idx]
    }

    pub fn get(&self, id: &TermId) -> Option<&TermDeclaration> {
        self.index.get(id).map(|&idx| &self.declarations[idx])
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.index.contains_key(id)
    }

    /// Declarations in registration order
    pub fn declarations(&self) -> impl Iterator<Item = &TermDeclaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
