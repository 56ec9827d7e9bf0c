//! IRI construction for classes and individuals

use crate::classify::OBO_BASE;

/// Base IRI for MeSH descriptors
pub const MESH_BASE: &str = "http://id.nlm.nih.gov/mesh/";

/// Namespace of generated individuals (the `:` prefix)
pub const INDIVIDUAL_BASE: &str = "http://www.co-ode.org/ontologies/ont.owl#";

/// Turn a CURIE-style id into an IRI local name: `GO:0008150` -> `GO_0008150`
///
/// Only the first colon is replaced; ids without a colon pass through.
pub fn local_name(id: &str) -> String {
    match id.trim().split_once(':') {
        Some((prefix, local)) => format!("{}_{}", prefix, local),
        None => id.trim().to_string(),
    }
}

/// Class IRI for a term id from the given ontology source
pub fn class_iri(id: &str, source: &str) -> String {
    let base = if source.trim().eq_ignore_ascii_case("MESH") {
        MESH_BASE
    } else {
        OBO_BASE
    };
    format!("{}{}", base, local_name(id))
}

/// Percent-encode a display name so it is safe as an IRI fragment
pub fn encode_name(name: &str) -> String {
    urlencoding::encode(name.trim()).into_owned()
}

/// IRI of the named individual standing for a term
pub fn individual_iri(name: &str) -> String {
    format!("{}{}", INDIVIDUAL_BASE, encode_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("GO:0008150"), "GO_0008150");
        assert_eq!(local_name("D012345"), "D012345");
        assert_eq!(local_name("A:B:C"), "A_B:C");
    }

    #[test]
    fn test_class_iri_bases() {
        assert_eq!(class_iri("GO:0006915", "GO"), "http://purl.obolibrary.org/obo/GO_0006915");
        assert_eq!(class_iri("D004958", "MESH"), "http://id.nlm.nih.gov/mesh/D004958");
        assert_eq!(class_iri("MESH:D004958", "mesh"), "http://id.nlm.nih.gov/mesh/MESH_D004958");
    }

    #[test]
    fn test_individual_iri_is_percent_encoded() {
        assert_eq!(
            individual_iri("apoptotic process"),
            "http://www.co-ode.org/ontologies/ont.owl#apoptotic%20process"
        );
        assert_eq!(
            individual_iri("N/A ratio (Na+/K+)"),
            "http://www.co-ode.org/ontologies/ont.owl#N%2FA%20ratio%20%28Na%2B%2FK%2B%29"
        );
    }
}
