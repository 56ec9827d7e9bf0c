//! Turtle serialization of an assembled pathway
//!
//! Output layout, in order:
//!
//! 1. prologue (prefixes, ontology IRI, title, model state)
//! 2. `Classes`: one `owl:Class` per registered term, registration order
//! 3. `Individuals`: walks the event order; per event a `# Event:<id>` line,
//!    then per component row the named individuals with their intra-row and
//!    inter-event relationship statements
//! 4. `Object Statements`: one `owl:ObjectProperty` per predicate used above
//!
//! A term's `rdf:type` declaration is written once; later mentions of the
//! same term only carry new relationship statements. A (subject, object)
//! edge is never written twice.

mod header;
pub mod iri;

pub use header::{escape_literal, OntologyHeader, DEFAULT_MODEL_BASE, DEFAULT_MODEL_STATE};

use crate::classify::Predicate;
use crate::model::{EventId, Term, TermId};
use crate::pathway::{AssembledPathway, EdgeKey, RelationshipEdge};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

const BANNER_RULE: &str = "#################################################################";

/// Counts of what was written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SerializeStats {
    pub classes: usize,
    pub individuals: usize,
    pub relationships: usize,
    pub properties: usize,
}

/// Writes one pathway as a Turtle document
pub struct TurtleWriter<'p, W: Write> {
    out: W,
    pathway: &'p AssembledPathway,
    declared: HashSet<TermId>,
    written_edges: HashSet<EdgeKey>,
    properties: Vec<Predicate>,
    stats: SerializeStats,
}

impl<'p, W: Write> TurtleWriter<'p, W> {
    pub fn new(out: W, pathway: &'p AssembledPathway) -> Self {
        Self {
            out,
            pathway,
            declared: HashSet::new(),
            written_edges: HashSet::new(),
            properties: Vec::new(),
            stats: SerializeStats::default(),
        }
    }

    /// Write the full document and return the writer's counts
    pub fn write(mut self, header: &OntologyHeader) -> io::Result<SerializeStats> {
        self.out.write_all(header.render().as_bytes())?;
        self.write_classes()?;
        self.write_individuals()?;
        self.write_properties()?;
        self.out.flush()?;
        Ok(self.stats)
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        write!(self.out, "\n\n{}\n#   {}\n{}\n\n", BANNER_RULE, title, BANNER_RULE)
    }

    fn write_classes(&mut self) -> io::Result<()> {
        self.banner("Classes")?;
        let pathway = self.pathway;
        for declaration in pathway.registry.declarations() {
            let iri = &declaration.class.iri;
            write!(self.out, "###  {}\n<{}> rdf:type owl:Class .\n\n", iri, iri)?;
            self.stats.classes += 1;
        }
        Ok(())
    }

    fn write_individuals(&mut self) -> io::Result<()> {
        self.banner("Individuals")?;
        let pathway = self.pathway;
        for event in pathway.walk() {
            self.write_event(event)?;
        }
        Ok(())
    }

    fn write_event(&mut self, event: EventId) -> io::Result<()> {
        let pathway = self.pathway;
        let Some(rows) = pathway.rows(&event) else {
            return write!(self.out, "# Event:{} (no components)\n\n", event);
        };
        write!(self.out, "# Event:{}\n\n", event)?;

        let next_rows = pathway.successor_rows(&event).unwrap_or(&[]);
        for row in rows {
            if let (Some(object), Some(phenotype)) = (&row.object, &row.phenotype) {
                let intra: Vec<&RelationshipEdge> = pathway.edges.get(&object.id, &phenotype.id).into_iter().collect();
                self.write_subject(object, &intra)?;
            }
            let Some(subject) = row.most_specific() else {
                continue;
            };
            let inter: Vec<&RelationshipEdge> = next_rows
                .iter()
                .filter_map(|next| next.most_specific())
                .filter_map(|target| pathway.edges.get(&subject.id, &target.id))
                .collect();
            self.write_subject(subject, &inter)?;
        }
        Ok(())
    }

    /// Write a term's individual with the given edges as one statement
    fn write_subject(&mut self, term: &Term, edges: &[&RelationshipEdge]) -> io::Result<()> {
        let pathway = self.pathway;
        let Some(declaration) = pathway.registry.get(&term.id) else {
            return Ok(());
        };

        let mut fresh: Vec<&RelationshipEdge> = Vec::with_capacity(edges.len());
        for &edge in edges {
            if self.written_edges.insert(edge.key()) {
                fresh.push(edge);
            }
        }

        let first_mention = self.declared.insert(term.id.clone());
        if !first_mention && fresh.is_empty() {
            return Ok(());
        }

        let individual = &declaration.individual;
        let mut separator = " ;\n\t";
        if first_mention {
            write!(
                self.out,
                "###  {iri}\n<{iri}> rdf:type owl:NamedIndividual ,\n\t<{class}>",
                iri = individual.iri,
                class = individual.class_iri
            )?;
            self.stats.individuals += 1;
        } else {
            write!(self.out, "<{}>", individual.iri)?;
            separator = " ";
        }

        for edge in fresh {
            let target = match pathway.registry.get(&edge.object.id) {
                Some(d) => d.individual.iri.clone(),
                None => iri::individual_iri(&edge.object.name),
            };
            for predicate in &edge.predicates {
                write!(self.out, "{}<{}> <{}>", separator, predicate.iri(), target)?;
                separator = " ;\n\t";
                self.stats.relationships += 1;
                if !self.properties.contains(predicate) {
                    self.properties.push(*predicate);
                }
            }
        }
        self.out.write_all(b" .\n\n")
    }

    fn write_properties(&mut self) -> io::Result<()> {
        self.banner("Object Statements")?;
        let properties = std::mem::take(&mut self.properties);
        for predicate in &properties {
            let iri = predicate.iri();
            write!(
                self.out,
                "###  {iri}\n<{iri}> rdf:type owl:ObjectProperty ;\n\trdfs:label \"{label}\"@en .\n\n",
                iri = iri,
                label = predicate.label()
            )?;
        }
        self.stats.properties = properties.len();
        Ok(())
    }
}

/// Render a pathway to a Turtle string
pub fn to_turtle(header: &OntologyHeader, pathway: &AssembledPathway) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = TurtleWriter::new(&mut buffer, pathway).write(header);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AopId, EcRecord, EventId, KerRecord, Term};
    use crate::pathway::GraphAssembler;

    fn aop() -> AopId {
        AopId::new(3)
    }

    fn assemble(rows: &[EcRecord], kers: &[KerRecord]) -> AssembledPathway {
        GraphAssembler::default().assemble(aop(), rows, kers)
    }

    fn render(pathway: &AssembledPathway) -> String {
        to_turtle(&OntologyHeader::new(aop(), "Test outcome"), pathway)
    }

    fn ker(e1: u32, e2: u32) -> KerRecord {
        KerRecord::adjacent(aop(), EventId::new(e1), EventId::new(e2))
    }

    #[test]
    fn test_sections_in_order() {
        let rows = vec![EcRecord::new(aop(), EventId::new(1))
            .with_action("increased")
            .with_object(Term::object("PR:1", "receptor", "PR"))
            .with_phenotype(Term::process("GO:1", "receptor signaling", "GO"))];
        let text = render(&assemble(&rows, &[]));

        let classes = text.find("#   Classes").unwrap();
        let individuals = text.find("#   Individuals").unwrap();
        let objects = text.find("#   Object Statements").unwrap();
        assert!(text.find("a owl:Ontology").unwrap() < classes);
        assert!(classes < individuals && individuals < objects);
    }

    #[test]
    fn test_intra_row_statement() {
        let rows = vec![EcRecord::new(aop(), EventId::new(1))
            .with_action("increased")
            .with_object(Term::object("PR:1", "receptor", "PR"))
            .with_phenotype(Term::process("GO:1", "receptor signaling", "GO"))];
        let text = render(&assemble(&rows, &[]));

        let expected = "###  http://www.co-ode.org/ontologies/ont.owl#receptor\n\
<http://www.co-ode.org/ontologies/ont.owl#receptor> rdf:type owl:NamedIndividual ,\n\
\t<http://purl.obolibrary.org/obo/PR_1> ;\n\
\t<http://purl.obolibrary.org/obo/RO_0002327> <http://www.co-ode.org/ontologies/ont.owl#receptor%20signaling> .\n\n";
        assert!(text.contains(expected), "got:\n{}", text);
        assert!(text.contains("<http://purl.obolibrary.org/obo/RO_0002327> rdf:type owl:ObjectProperty ;\n\trdfs:label \"enables\"@en ."));
    }

    #[test]
    fn test_multiple_candidates_are_parallel_statements() {
        let rows = vec![
            EcRecord::new(aop(), EventId::new(1)).with_object(Term::object("CHEBI:1", "agonist", "CHEBI")),
            EcRecord::new(aop(), EventId::new(2)).with_object(Term::object("PR:1", "receptor", "PR")),
        ];
        let text = render(&assemble(&rows, &[ker(1, 2)]));
        assert!(text.contains(
            "\t<http://purl.obolibrary.org/obo/RO_0002566> <http://www.co-ode.org/ontologies/ont.owl#receptor> ;\n\
\t<http://purl.obolibrary.org/obo/RO_0002559> <http://www.co-ode.org/ontologies/ont.owl#receptor> .\n"
        ));
    }

    #[test]
    fn test_term_declared_once() {
        let shared = Term::process("GO:1", "apoptotic process", "GO");
        let rows = vec![
            EcRecord::new(aop(), EventId::new(1)).with_action("increased").with_phenotype(shared.clone()),
            EcRecord::new(aop(), EventId::new(2)).with_action("increased").with_phenotype(shared.clone()),
        ];
        let text = render(&assemble(&rows, &[ker(1, 2)]));
        assert_eq!(text.matches("rdf:type owl:NamedIndividual").count(), 1);
        assert_eq!(text.matches("rdf:type owl:Class").count(), 1);
    }

    #[test]
    fn test_repeat_mention_carries_only_new_edges() {
        let receptor = Term::object("PR:1", "receptor", "PR");
        let rows = vec![
            EcRecord::new(aop(), EventId::new(1)).with_object(receptor.clone()),
            EcRecord::new(aop(), EventId::new(2)).with_object(Term::object("PR:2", "kinase", "PR")),
            EcRecord::new(aop(), EventId::new(3)).with_object(receptor.clone()),
        ];
        // 1 -> 2 -> 3: receptor is mentioned again in event 3 with no edges
        let text = render(&assemble(&rows, &[ker(1, 2), ker(2, 3)]));
        assert_eq!(text.matches("ont.owl#receptor> rdf:type").count(), 1);
        assert_eq!(text.matches("\n<http://www.co-ode.org/ontologies/ont.owl#receptor>").count(), 1);
    }

    #[test]
    fn test_missing_event_banner() {
        let rows = vec![EcRecord::new(aop(), EventId::new(1)).with_object(Term::object("PR:1", "receptor", "PR"))];
        let text = render(&assemble(&rows, &[ker(1, 2)]));
        assert!(text.contains("# Event:1\n"));
        assert!(text.contains("# Event:2 (no components)\n"));
    }

    #[test]
    fn test_stats() {
        let rows = vec![
            EcRecord::new(aop(), EventId::new(1)).with_object(Term::object("CHEBI:1", "agonist", "CHEBI")),
            EcRecord::new(aop(), EventId::new(2)).with_object(Term::object("PR:1", "receptor", "PR")),
        ];
        let pathway = assemble(&rows, &[ker(1, 2)]);
        let mut out = Vec::new();
        let stats = TurtleWriter::new(&mut out, &pathway)
            .write(&OntologyHeader::new(aop(), "x"))
            .unwrap();
        assert_eq!(
            stats,
            SerializeStats {
                classes: 2,
                individuals: 2,
                relationships: 2,
                properties: 2,
            }
        );
    }
}
