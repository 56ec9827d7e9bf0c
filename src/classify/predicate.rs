//! Relations Ontology predicates suggested by the classifier

use serde::{Serialize, Serializer};

/// Base IRI for OBO-library identifiers
pub const OBO_BASE: &str = "http://purl.obolibrary.org/obo/";

/// An RO object property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predicate {
    CausallyInfluences,
    CausallyInfluencedBy,
    OutputOf,
    Enables,
    InvolvedIn,
    InvolvedInRegulationOf,
    CorrelatedWith,
    HasCharacteristic,
    CausallyRelatedTo,
    HasOutput,
    HasInput,
    HasParticipant,
    RegulatesLevelsOf,
    PositivelyRegulates,
    NegativelyRegulates,
    RegulatesCharacteristic,
    CharacteristicOf,
    DiseaseCausesDisruptionOf,
    DiseaseHasBasisInDisruptionOf,
    CausesCondition,
}

impl Predicate {
    /// RO identifier in `RO_nnnnnnn` form
    pub fn code(&self) -> &'static str {
        match self {
            Predicate::CausallyInfluences => "RO_0002566",
            Predicate::CausallyInfluencedBy => "RO_0002559",
            Predicate::OutputOf => "RO_0002353",
            Predicate::Enables => "RO_0002327",
            Predicate::InvolvedIn => "RO_0002331",
            Predicate::InvolvedInRegulationOf => "RO_0002428",
            Predicate::CorrelatedWith => "RO_0002610",
            Predicate::HasCharacteristic => "RO_0000053",
            Predicate::CausallyRelatedTo => "RO_0002410",
            Predicate::HasOutput => "RO_0002234",
            Predicate::HasInput => "RO_0002233",
            Predicate::HasParticipant => "RO_0000057",
            Predicate::RegulatesLevelsOf => "RO_0002332",
            Predicate::PositivelyRegulates => "RO_0002213",
            Predicate::NegativelyRegulates => "RO_0002212",
            Predicate::RegulatesCharacteristic => "RO_0019000",
            Predicate::CharacteristicOf => "RO_0000052",
            Predicate::DiseaseCausesDisruptionOf => "RO_0004024",
            Predicate::DiseaseHasBasisInDisruptionOf => "RO_0004021",
            Predicate::CausesCondition => "RO_0003303",
        }
    }

    /// English label as published in RO
    pub fn label(&self) -> &'static str {
        match self {
            Predicate::CausallyInfluences => "causally influences",
            Predicate::CausallyInfluencedBy => "causally influenced by",
            Predicate::OutputOf => "output of",
            Predicate::Enables => "enables",
            Predicate::InvolvedIn => "involved in",
            Predicate::InvolvedInRegulationOf => "involved in regulation of",
            Predicate::CorrelatedWith => "correlated with",
            Predicate::HasCharacteristic => "has characteristic",
            Predicate::CausallyRelatedTo => "causally related to",
            Predicate::HasOutput => "has output",
            Predicate::HasInput => "has input",
            Predicate::HasParticipant => "has participant",
            Predicate::RegulatesLevelsOf => "regulates levels of",
            Predicate::PositivelyRegulates => "positively regulates",
            Predicate::NegativelyRegulates => "negatively regulates",
            Predicate::RegulatesCharacteristic => "regulates characteristic",
            Predicate::CharacteristicOf => "characteristic of",
            Predicate::DiseaseCausesDisruptionOf => "disease causes disruption of",
            Predicate::DiseaseHasBasisInDisruptionOf => "disease has basis in disruption of",
            Predicate::CausesCondition => "causes condition",
        }
    }

    pub fn iri(&self) -> String {
        format!("{}{}", OBO_BASE, self.code())
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Join predicate codes with `|`, the curator-facing list format
pub fn join_codes(predicates: &[Predicate]) -> String {
    predicates.iter().map(Predicate::code).collect::<Vec<_>>().join("|")
}

/// Join predicate labels with `|`
pub fn join_labels(predicates: &[Predicate]) -> String {
    predicates.iter().map(Predicate::label).collect::<Vec<_>>().join("|")
}
