use crate::{NodeId, Occur, Query, SequenceTerm, Term, TokenSequence};

#[test]
fn positions_collect_alternatives() {
    let mut seq = TokenSequence::new();
    assert!(seq.is_empty());

    seq.next_position();
    seq.add_term(Term::new("a"), NodeId::from_raw(1));
    seq.add_term(Term::new("alpha"), NodeId::from_raw(2));
    seq.next_position();
    seq.add_term(Term::new("b"), NodeId::from_raw(3));

    assert_eq!(seq.len(), 2);
    assert_eq!(
        seq.position(0),
        &[
            SequenceTerm::new(Term::new("a"), NodeId::from_raw(1)),
            SequenceTerm::new(Term::new("alpha"), NodeId::from_raw(2)),
        ]
    );
    assert_eq!(seq.position(1).len(), 1);
    assert_eq!(seq.iter().count(), 2);
}

#[test]
fn clear_allows_reuse() {
    let mut seq = TokenSequence::new();
    seq.next_position();
    seq.add_term(Term::new("a"), NodeId::from_raw(1));

    seq.clear();
    assert!(seq.is_empty());

    seq.next_position();
    seq.add_term(Term::new("b"), NodeId::from_raw(2));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.position(0)[0].term, Term::new("b"));
}

#[test]
#[should_panic(expected = "add_term called before next_position")]
fn add_term_without_position_panics() {
    let mut seq = TokenSequence::new();
    seq.add_term(Term::new("a"), NodeId::from_raw(1));
}

#[test]
fn from_dis_clauses_skips_nested_bools() {
    let mut query = Query::new();
    let root = query.root();
    let first = query.add_dis(root, Occur::Should);
    let a = query.add_term(first, Term::new("a"));
    let a2 = query.add_term(first, Term::with_field("title", "a"));
    let nested = query.add_bool(root, Occur::Must);
    let hidden = query.add_dis(nested, Occur::Should);
    query.add_term(hidden, Term::new("hidden"));
    let second = query.add_dis(root, Occur::Should);
    let b = query.add_term(second, Term::new("b"));

    let seq = TokenSequence::from_dis_clauses(&query, root);

    assert_eq!(seq.len(), 2);
    assert_eq!(
        seq.position(0),
        &[
            SequenceTerm::new(Term::new("a"), a),
            SequenceTerm::new(Term::with_field("title", "a"), a2),
        ]
    );
    assert_eq!(seq.position(1), &[SequenceTerm::new(Term::new("b"), b)]);
}
