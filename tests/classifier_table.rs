//! Classifier coverage across every role, source and action combination

use aop_owl::classify::{classify, classify_with_rule, Participant, Rule};
use aop_owl::{Predicate, Role, Term};

const SOURCES: [&str; 8] = ["GO", "MP", "HP", "VT", "MESH", "CHEBI", "PR", ""];
const ACTIONS: [Option<&str>; 5] = [
    Some("increased"),
    Some("Decreased "),
    Some("occurrence"),
    Some(""),
    None,
];
const NAMES: [&str; 4] = ["fibrosis", "biosynthetic process", "kinase", "kinase activity"];

fn terms() -> Vec<Term> {
    let mut terms = Vec::new();
    for (i, source) in SOURCES.iter().enumerate() {
        for name in NAMES {
            for role in [Role::Object, Role::ProcessPhenotype] {
                terms.push(Term::new(format!("{}:{}", source, i), name, *source, role));
            }
        }
    }
    terms
}

#[test]
fn test_every_combination_has_a_predicate() {
    let terms = terms();
    for a in &terms {
        for b in &terms {
            for action1 in ACTIONS {
                for action2 in ACTIONS {
                    let predicates = classify(Participant::new(action1, Some(a)), Participant::new(action2, Some(b)));
                    assert!(
                        !predicates.is_empty(),
                        "no predicate for {:?}/{:?} -> {:?}/{:?}",
                        action1,
                        a,
                        action2,
                        b
                    );
                }
            }
        }
    }
}

#[test]
fn test_missing_term_is_undefined() {
    let go = Term::process("GO:1", "apoptotic process", "GO");
    let result = classify_with_rule(Participant::new(Some("increased"), Some(&go)), Participant::default());
    assert_eq!(result.rule, Rule::Undefined);
    assert!(result.predicates.is_empty());
}

#[test]
fn test_documented_examples() {
    let a = Term::process("GO:1", "cell proliferation", "GO");
    let b = Term::process("GO:2", "apoptotic process", "GO");
    assert_eq!(
        classify(
            Participant::new(Some("increased"), Some(&a)),
            Participant::new(Some("increased"), Some(&b))
        ),
        vec![Predicate::PositivelyRegulates]
    );

    let x = Term::object("PR:1", "receptor", "PR");
    let y = Term::object("PR:2", "kinase", "PR");
    assert_eq!(
        classify(Participant::term(&x), Participant::term(&y)),
        vec![Predicate::CausallyInfluences, Predicate::CausallyInfluencedBy]
    );
}
