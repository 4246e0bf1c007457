use std::fmt;
use std::sync::{Arc, Mutex};

use recast_core::{Occur, Query, Term};

use crate::{
    ApplyContext, DeleteInstruction, Input, Instruction, Instructions, Rewriter,
    RulesCollectionBuilder,
};

/// Appends `name span matched-terms` to a shared log when applied.
#[derive(Debug)]
struct Record {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Instruction for Record {
    fn apply(&self, ctx: &mut ApplyContext<'_>) {
        let terms: Vec<String> = ctx.matched.iter().map(|t| t.term.to_string()).collect();
        self.log.lock().unwrap().push(format!(
            "{} {}..{} {}",
            self.name,
            ctx.span.start,
            ctx.span.end,
            terms.join(" ")
        ));
    }
}

struct Recorder {
    log: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            log: Arc::default(),
        }
    }

    fn record(&self, name: &'static str) -> Record {
        Record {
            name,
            log: Arc::clone(&self.log),
        }
    }

    fn render(&self) -> String {
        self.log.lock().unwrap().join("\n")
    }
}

#[test]
fn no_match_leaves_query_untouched() {
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["x"]),
            Instructions::single(DeleteInstruction::all()),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::from_words(Occur::Should, ["a", "b"]);
    let before = query.dump();

    let applied = Rewriter::new(&rules).rewrite(&mut query);

    assert_eq!(applied, 0);
    assert_eq!(query.dump(), before);
}

#[test]
fn actions_and_lists_apply_in_order() {
    let recorder = Recorder::new();
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["a", "b"]),
            Instructions::single(recorder.record("ab")),
        )
        .unwrap();
    builder
        .add_rule(
            &Input::from_values(["b"]),
            Instructions::single(recorder.record("b1")).with(recorder.record("b2")),
        )
        .unwrap();
    builder
        .add_rule(
            &Input::from_values(["a"]),
            Instructions::single(recorder.record("a")),
        )
        .unwrap();
    builder
        .add_rule(
            &Input::from_values(["b"]),
            Instructions::single(recorder.record("b3")),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::from_words(Occur::Should, ["a", "b"]);

    let applied = Rewriter::new(&rules).rewrite(&mut query);

    assert_eq!(applied, 3);
    insta::assert_snapshot!(recorder.render(), @r"
    a 0..1 a
    ab 0..2 a b
    b1 1..2 b
    b2 1..2 b
    b3 1..2 b
    ");
}

#[test]
fn alternatives_of_one_position_match_separately() {
    let recorder = Recorder::new();
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["laptop", "bag"]),
            Instructions::single(recorder.record("r")),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::new();
    let root = query.root();
    let first = query.add_dis(root, Occur::Should);
    query.add_term(first, Term::new("laptop"));
    query.add_term(first, Term::new("notebook"));
    query.add_term(first, Term::new("laptop"));
    let second = query.add_dis(root, Occur::Should);
    query.add_term(second, Term::new("bag"));

    Rewriter::new(&rules).rewrite(&mut query);

    insta::assert_snapshot!(recorder.render(), @r"
    r 0..2 laptop bag
    r 0..2 laptop bag
    ");
}

#[test]
fn nested_containers_rewrite_before_parent() {
    let recorder = Recorder::new();
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["a"]),
            Instructions::single(recorder.record("a")),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::new();
    let root = query.root();
    let outer = query.add_dis(root, Occur::Should);
    query.add_term(outer, Term::new("a"));
    let nested = query.add_bool(root, Occur::Must);
    let inner = query.add_dis(nested, Occur::Should);
    query.add_term(inner, Term::with_field("title", "a"));

    let applied = Rewriter::new(&rules).rewrite(&mut query);

    assert_eq!(applied, 2);
    insta::assert_snapshot!(recorder.render(), @r"
    a 0..1 title:a
    a 0..1 a
    ");
}

#[test]
fn nested_bool_is_skipped_in_parent_sequence() {
    let recorder = Recorder::new();
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["a", "b"]),
            Instructions::single(recorder.record("ab")),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::new();
    let root = query.root();
    let first = query.add_dis(root, Occur::Should);
    query.add_term(first, Term::new("a"));
    let nested = query.add_bool(root, Occur::Should);
    let inner = query.add_dis(nested, Occur::Should);
    query.add_term(inner, Term::new("x"));
    let last = query.add_dis(root, Occur::Should);
    query.add_term(last, Term::new("b"));

    let applied = Rewriter::new(&rules).rewrite(&mut query);

    // Only disjunction clauses form the sequence, so `a` and `b` are adjacent.
    assert_eq!(applied, 1);
    insta::assert_snapshot!(recorder.render(), @"ab 0..2 a b");
}

#[test]
fn actions_are_collected_before_applying() {
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["a"]),
            Instructions::single(DeleteInstruction::all()),
        )
        .unwrap();
    builder
        .add_rule(
            &Input::from_values(["a", "b"]),
            Instructions::single(DeleteInstruction::all()),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::from_words(Occur::Should, ["a", "b", "c"]);

    let applied = Rewriter::new(&rules).rewrite(&mut query);

    assert_eq!(applied, 2);
    insta::assert_snapshot!(query.dump(), @r"
    Bool
      Should Dis
        c
    ");
}

/// Logs the alternatives at the position following the match.
#[derive(Debug)]
struct NextPosition {
    log: Arc<Mutex<Vec<String>>>,
}

impl fmt::Display for NextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("next")
    }
}

impl Instruction for NextPosition {
    fn apply(&self, ctx: &mut ApplyContext<'_>) {
        let next = if ctx.span.end < ctx.sequence.len() {
            let alts: Vec<String> = ctx
                .sequence
                .position(ctx.span.end)
                .iter()
                .map(|t| t.term.to_string())
                .collect();
            alts.join("|")
        } else {
            "-".to_owned()
        };
        self.log.lock().unwrap().push(format!(
            "{}..{} of {} next {next}",
            ctx.span.start,
            ctx.span.end,
            ctx.sequence.len()
        ));
    }
}

#[test]
fn instructions_see_the_whole_sequence() {
    let log: Arc<Mutex<Vec<String>>> = Arc::default();
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::from_values(["cheap"]),
            Instructions::single(NextPosition {
                log: Arc::clone(&log),
            }),
        )
        .unwrap();
    let rules = builder.build();
    let mut query = Query::from_words(Occur::Should, ["cheap", "laptop", "cheap"]);
    let second = query.clauses(query.root())[1];
    query.add_term(second, Term::new("notebook"));

    Rewriter::new(&rules).rewrite(&mut query);

    insta::assert_snapshot!(log.lock().unwrap().join("\n"), @r"
    0..1 of 3 next laptop|notebook
    2..3 of 3 next -
    ");
}
