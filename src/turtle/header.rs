//! Ontology prologue: prefixes plus the per-pathway ontology block

use crate::model::AopId;

/// Default base of generated model IRIs
pub const DEFAULT_MODEL_BASE: &str = "https://noctua.apps.renci.org/model/";

/// Default `modelstate` annotation
pub const DEFAULT_MODEL_STATE: &str = "review";

const PREFIXES: &str = "\
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix xml: <http://www.w3.org/XML/1998/namespace> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix : <http://www.co-ode.org/ontologies/ont.owl#> .
@base <http://www.w3.org/2002/07/owl#> .
";

const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
const MODEL_STATE: &str = "http://geneontology.org/lego/modelstate";

/// Header parameters for one pathway's ontology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyHeader {
    pub aop: AopId,
    pub title: String,
    pub model_base: String,
    pub model_state: String,
}

impl OntologyHeader {
    pub fn new(aop: AopId, title: impl Into<String>) -> Self {
        Self {
            aop,
            title: title.into(),
            model_base: DEFAULT_MODEL_BASE.to_string(),
            model_state: DEFAULT_MODEL_STATE.to_string(),
        }
    }

    pub fn with_model_base(mut self, base: impl Into<String>) -> Self {
        self.model_base = base.into();
        self
    }

    pub fn with_model_state(mut self, state: impl Into<String>) -> Self {
        self.model_state = state.into();
        self
    }

    /// IRI of the ontology, e.g. `https://noctua.apps.renci.org/model/AOP_23`
    pub fn ontology_iri(&self) -> String {
        format!("{}AOP_{}", self.model_base, self.aop)
    }

    /// Render prefixes and the ontology block
    pub fn render(&self) -> String {
        let iri = self.ontology_iri();
        format!(
            "{prefixes}\n<{iri}> a owl:Ontology .\n<{iri}> <{DC_TITLE}> \"{title}\"^^xsd:string .\n<{iri}> <{MODEL_STATE}> \"{state}\"^^xsd:string .\n",
            prefixes = PREFIXES,
            iri = iri,
            title = escape_literal(&self.title),
            state = escape_literal(&self.model_state),
        )
    }
}

/// Escape a string for use inside a double-quoted Turtle literal
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
