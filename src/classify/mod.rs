//! Relationship classification between two typed terms
//!
//! A decision table over the dimensions that matter for choosing an RO
//! predicate:
//!
//! - the role of each term (object vs process/phenotype)
//! - the source class of each term (process ontology, phenotype ontology, other)
//! - the direction of each event component's action
//! - a few lexical cues in the second term (`biosynthetic`, `generation`,
//!   `osis`, containment of the first term's text)
//!
//! The result is an ordered list of candidate predicates. Every candidate is
//! emitted downstream; the classifier never picks a single winner.

mod predicate;

pub use predicate::{join_codes, join_labels, Predicate, OBO_BASE};

use crate::model::{ActionDirection, Role, SourceClass, Term};

/// One side of a classified pair
#[derive(Debug, Clone, Copy, Default)]
pub struct Participant<'a> {
    pub action: Option<&'a str>,
    pub term: Option<&'a Term>,
}

impl<'a> Participant<'a> {
    pub fn new(action: Option<&'a str>, term: Option<&'a Term>) -> Self {
        Self { action, term }
    }

    /// A participant whose action is not considered
    pub fn term(term: &'a Term) -> Self {
        Self {
            action: None,
            term: Some(term),
        }
    }
}

/// The branch of the decision table that produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Either term absent
    Undefined,
    ObjectToObject,
    ObjectToProductProcess,
    ObjectEnablesProcess,
    ObjectToProcess,
    ObjectToPhenotype,
    ProcessToObject,
    ProcessSameDirection,
    ProcessOppositeDirection,
    ProcessUndirected,
    ProcessToCharacteristic,
    PhenotypeToObject,
    PhenotypeDisruptsProcess,
    PhenotypeToPhenotype,
    /// No specific branch applies
    Fallback,
}

impl Rule {
    /// Predicates produced by this branch, in emission order
    pub fn predicates(&self) -> &'static [Predicate] {
        use Predicate::*;
        match self {
            Rule::Undefined => &[],
            Rule::ObjectToObject => &[CausallyInfluences, CausallyInfluencedBy],
            Rule::ObjectToProductProcess => &[OutputOf],
            Rule::ObjectEnablesProcess => &[Enables],
            Rule::ObjectToProcess => &[InvolvedIn, Enables, OutputOf, InvolvedInRegulationOf],
            Rule::ObjectToPhenotype => &[CorrelatedWith, HasCharacteristic],
            Rule::ProcessToObject => &[HasOutput, HasInput, HasParticipant, RegulatesLevelsOf],
            Rule::ProcessSameDirection => &[PositivelyRegulates],
            Rule::ProcessOppositeDirection => &[NegativelyRegulates],
            Rule::ProcessUndirected => &[CausallyRelatedTo],
            Rule::ProcessToCharacteristic => &[RegulatesCharacteristic],
            Rule::PhenotypeToObject => &[CharacteristicOf],
            Rule::PhenotypeDisruptsProcess => &[DiseaseCausesDisruptionOf, DiseaseHasBasisInDisruptionOf],
            Rule::PhenotypeToPhenotype => &[CausesCondition, CorrelatedWith],
            Rule::Fallback => &[CausallyRelatedTo],
        }
    }
}

/// A classification result tagged with the branch that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub rule: Rule,
    pub predicates: Vec<Predicate>,
}

impl Classification {
    fn from_rule(rule: Rule) -> Self {
        Self {
            rule,
            predicates: rule.predicates().to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Suggest predicates relating `subject` to `object`
///
/// Returns an empty list when either term is absent.
pub fn classify(subject: Participant<'_>, object: Participant<'_>) -> Vec<Predicate> {
    classify_with_rule(subject, object).predicates
}

/// Like [`classify`], also reporting which branch matched
pub fn classify_with_rule(subject: Participant<'_>, object: Participant<'_>) -> Classification {
    let (term1, term2) = match (subject.term, object.term) {
        (Some(t1), Some(t2)) => (t1, t2),
        _ => return Classification::from_rule(Rule::Undefined),
    };
    Classification::from_rule(select_rule(
        term1,
        ActionDirection::of(subject.action),
        term2,
        ActionDirection::of(object.action),
    ))
}

fn select_rule(term1: &Term, action1: ActionDirection, term2: &Term, action2: ActionDirection) -> Rule {
    let class1 = term1.source_class();
    let class2 = term2.source_class();
    // "-osis" names (fibrosis, necrosis, apoptosis...) read as processes or
    // conditions whatever ontology they come from.
    let osis = term2.name.contains("osis");

    match (term1.role, term2.role) {
        (Role::Object, Role::Object) => Rule::ObjectToObject,
        (Role::Object, Role::ProcessPhenotype) => match class2 {
            SourceClass::Process if is_product_process(&term2.name) => Rule::ObjectToProductProcess,
            SourceClass::Process if names_contain(&term2.name, &term1.name) => Rule::ObjectEnablesProcess,
            SourceClass::Process => Rule::ObjectToProcess,
            SourceClass::Phenotype => Rule::ObjectToPhenotype,
            SourceClass::Other if osis => Rule::ObjectToPhenotype,
            SourceClass::Other => Rule::Fallback,
        },
        (Role::ProcessPhenotype, role2) => {
            let process_like1 = class1 == SourceClass::Process || osis;
            let process_like2 = class2 == SourceClass::Process || osis;
            match (process_like1, class1, role2) {
                (true, _, Role::Object) => Rule::ProcessToObject,
                (true, _, Role::ProcessPhenotype) if process_like2 => directional_rule(action1, action2),
                (true, _, Role::ProcessPhenotype) => Rule::ProcessToCharacteristic,
                (false, SourceClass::Phenotype, Role::Object) => Rule::PhenotypeToObject,
                (false, SourceClass::Phenotype, Role::ProcessPhenotype) if process_like2 => {
                    Rule::PhenotypeDisruptsProcess
                }
                (false, SourceClass::Phenotype, Role::ProcessPhenotype) => Rule::PhenotypeToPhenotype,
                _ => Rule::Fallback,
            }
        }
    }
}

fn directional_rule(action1: ActionDirection, action2: ActionDirection) -> Rule {
    use ActionDirection::*;
    match (action1, action2) {
        (Increased, Increased) | (Decreased, Decreased) => Rule::ProcessSameDirection,
        (Increased, Decreased) | (Decreased, Increased) => Rule::ProcessOppositeDirection,
        _ => Rule::ProcessUndirected,
    }
}

fn is_product_process(name: &str) -> bool {
    name.contains("biosynthetic") || name.contains("generation")
}

/// Whether `haystack` contains the non-empty text of `needle`
fn names_contain(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && haystack.contains(needle)
}
