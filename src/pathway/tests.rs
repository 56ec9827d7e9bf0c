//! Assembly tests over small hand-built pathways

use super::*;
use crate::classify::Predicate;
use crate::model::{AopId, EcRecord, EventId, KerRecord, Term, TermId};

const AOP: AopId = AopId::new(7);

fn ev(id: u32) -> EventId {
    EventId::new(id)
}

fn row(event: u32, action: &str) -> EcRecord {
    EcRecord::new(AOP, ev(event)).with_action(action)
}

fn ker(e1: u32, e2: u32) -> KerRecord {
    KerRecord::adjacent(AOP, ev(e1), ev(e2))
}

fn tid(id: &str) -> TermId {
    TermId::from(id)
}

/// E1: receptor activation, E2: proliferation, E3: hyperplasia
fn three_event_rows() -> Vec<EcRecord> {
    vec![
        row(1, "increased")
            .with_object(Term::object("PR:000007", "estrogen receptor", "PR"))
            .with_phenotype(Term::process("GO:0030284", "estrogen receptor activity", "GO")),
        row(2, "increased").with_phenotype(Term::process("GO:0008283", "cell population proliferation", "GO")),
        row(3, "increased")
            .with_object(Term::object("UBERON:0000995", "uterus", "UBERON"))
            .with_phenotype(Term::process("MP:0002637", "small uterus", "MP")),
    ]
}

#[test]
fn test_linear_pathway_edges() {
    let rows = three_event_rows();
    let kers = vec![ker(1, 2), ker(2, 3)];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, &kers);

    assert!(pathway.is_complete());
    assert_eq!(pathway.registry.len(), 5);

    // Intra-row edge of E1: object -> process naming it
    assert_eq!(
        pathway.predicates(&tid("PR:000007"), &tid("GO:0030284")),
        Some(&[Predicate::Enables][..])
    );
    // E1 -> E2 between two GO processes, both increased
    assert_eq!(
        pathway.predicates(&tid("GO:0030284"), &tid("GO:0008283")),
        Some(&[Predicate::PositivelyRegulates][..])
    );
    // E2 -> E3, process to phenotype
    assert_eq!(
        pathway.predicates(&tid("GO:0008283"), &tid("MP:0002637")),
        Some(&[Predicate::RegulatesCharacteristic][..])
    );
    assert_eq!(pathway.edges.len(), 4);
}

#[test]
fn test_missing_middle_event_is_tolerated() {
    let rows: Vec<EcRecord> = three_event_rows().into_iter().filter(|r| r.event != ev(2)).collect();
    let kers = vec![ker(1, 2), ker(2, 3)];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, &kers);

    assert_eq!(pathway.missing, vec![ev(2)]);
    assert!(!pathway.is_complete());
    // Intra-row edges of E1 and E3 survive
    assert!(pathway.predicates(&tid("PR:000007"), &tid("GO:0030284")).is_some());
    assert!(pathway.predicates(&tid("UBERON:0000995"), &tid("MP:0002637")).is_some());
    // No inter-event edges at all
    assert!(pathway.edges.iter().all(|e| e.kind == EdgeKind::IntraEvent));
}

#[test]
fn test_every_row_pair_of_adjacent_events_is_classified() {
    let rows = vec![
        row(1, "increased").with_object(Term::object("CHEBI:1", "agonist", "CHEBI")),
        row(1, "increased").with_object(Term::object("CHEBI:2", "other agonist", "CHEBI")),
        row(2, "decreased").with_object(Term::object("PR:1", "receptor", "PR")),
        row(2, "decreased").with_phenotype(Term::process("GO:1", "signaling", "GO")),
    ];
    let kers = vec![ker(1, 2)];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, &kers);

    let inter: Vec<_> = pathway.edges.iter().filter(|e| e.kind == EdgeKind::InterEvent).collect();
    assert_eq!(inter.len(), 4);
    assert_eq!(
        pathway.predicates(&tid("CHEBI:2"), &tid("PR:1")),
        Some(&[Predicate::CausallyInfluences, Predicate::CausallyInfluencedBy][..])
    );
}

#[test]
fn test_rows_without_terms_are_skipped() {
    let rows = vec![row(1, "increased"), row(2, "increased").with_object(Term::object("PR:1", "x", "PR"))];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, &[ker(1, 2)]);
    assert_eq!(pathway.registry.len(), 1);
    assert!(pathway.edges.is_empty());
    assert!(pathway.is_complete());
}

#[test]
fn test_shared_term_registered_once() {
    let shared = Term::process("GO:0006915", "apoptotic process", "GO");
    let rows = vec![
        row(1, "increased").with_phenotype(shared.clone()),
        row(2, "increased").with_phenotype(shared.clone()),
    ];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, &[ker(1, 2)]);
    assert_eq!(pathway.registry.len(), 1);
    // Self edge from the shared term to itself
    assert_eq!(
        pathway.predicates(&tid("GO:0006915"), &tid("GO:0006915")),
        Some(&[Predicate::PositivelyRegulates][..])
    );
}

#[test]
fn test_unordered_events_still_compiled() {
    let rows = vec![row(9, "increased")
        .with_object(Term::object("PR:1", "receptor", "PR"))
        .with_phenotype(Term::process("MP:1", "liver necrosis", "MP"))];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, std::iter::empty::<&KerRecord>());

    assert!(pathway.order.is_empty());
    assert_eq!(pathway.unordered, vec![ev(9)]);
    assert_eq!(pathway.walk().collect::<Vec<_>>(), vec![ev(9)]);
    assert_eq!(pathway.registry.len(), 2);
    assert_eq!(
        pathway.predicates(&tid("PR:1"), &tid("MP:1")),
        Some(&[Predicate::CorrelatedWith, Predicate::HasCharacteristic][..])
    );
}

#[test]
fn test_successor_without_rows_marked_once() {
    let rows = vec![row(1, "increased").with_object(Term::object("PR:1", "x", "PR"))];
    let pathway = GraphAssembler::default().assemble(AOP, &rows, &[ker(1, 2)]);
    assert_eq!(pathway.missing, vec![ev(2)]);
}
