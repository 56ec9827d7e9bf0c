//! Biological terms attached to event components

use serde::{Deserialize, Serialize};

/// Ontology sources whose terms describe processes
pub const PROCESS_ONTOLOGIES: &[&str] = &["GO"];

/// Ontology sources whose terms describe phenotypes
pub const PHENOTYPE_ONTOLOGIES: &[&str] = &["MP", "HP", "VT"];

/// Ontology term identifier, e.g. `GO:0008150`
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(String);

impl TermId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TermId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Role a term plays inside an event component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The entity acted upon (gene, protein, chemical, cell...)
    Object,
    /// The process or phenotype affecting the object
    #[serde(rename = "Process/Phenotype")]
    ProcessPhenotype,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Object => "Object",
            Role::ProcessPhenotype => "Process/Phenotype",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a term's ontology source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceClass {
    Process,
    Phenotype,
    Other,
}

impl SourceClass {
    pub fn of(source: &str) -> Self {
        let source = source.trim();
        if PROCESS_ONTOLOGIES.iter().any(|s| s.eq_ignore_ascii_case(source)) {
            SourceClass::Process
        } else if PHENOTYPE_ONTOLOGIES.iter().any(|s| s.eq_ignore_ascii_case(source)) {
            SourceClass::Phenotype
        } else {
            SourceClass::Other
        }
    }
}

/// Direction of change recorded in an event component's action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionDirection {
    Increased,
    Decreased,
    /// Any other action text, or none at all
    Unspecified,
}

impl ActionDirection {
    pub fn of(action: Option<&str>) -> Self {
        match action.map(|a| a.trim().to_ascii_lowercase()).as_deref() {
            Some("increased") => ActionDirection::Increased,
            Some("decreased") => ActionDirection::Decreased,
            _ => ActionDirection::Unspecified,
        }
    }
}

/// A typed ontology term
///
/// Identity is the `id`; name and source are carried for rendering and
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    /// Ontology namespace code (GO, MP, HP, VT, MESH, ...)
    pub source: String,
    pub role: Role,
}

impl Term {
    pub fn new(
        id: impl Into<TermId>,
        name: impl Into<String>,
        source: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source: source.into(),
            role,
        }
    }

    /// Shorthand for an object term
    pub fn object(id: impl Into<TermId>, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, name, source, Role::Object)
    }

    /// Shorthand for a process/phenotype term
    pub fn process(id: impl Into<TermId>, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, name, source, Role::ProcessPhenotype)
    }

    pub fn source_class(&self) -> SourceClass {
        SourceClass::of(&self.source)
    }

    pub fn is_mesh(&self) -> bool {
        self.source.trim().eq_ignore_ascii_case("MESH")
    }
}
