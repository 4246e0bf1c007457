use crate::test_utils::{instructions, render, sequence};
use crate::{Error, Input, InputTerm, Instructions, RulesCollectionBuilder, RulesOptions};

#[test]
fn empty_input_is_rejected() {
    let mut builder = RulesCollectionBuilder::new();

    let err = builder
        .add_rule(&Input::default(), instructions(&["i1"]))
        .unwrap_err();

    assert_eq!(err, Error::EmptyInput);
    assert_eq!(err.to_string(), "rule input must contain at least one term");
}

#[test]
fn empty_term_value_is_rejected() {
    let mut builder = RulesCollectionBuilder::new();

    let err = builder
        .add_rule(&Input::from_values(["a", ""]), instructions(&["i1"]))
        .unwrap_err();

    assert_eq!(err, Error::EmptyTermValue { position: 1 });
}

#[test]
fn empty_instructions_are_rejected() {
    let mut builder = RulesCollectionBuilder::new();

    let err = builder
        .add_rule(&Input::from_values(["a", "b"]), Instructions::default())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "rule for input `a b` has no instructions"
    );
}

#[test]
fn rejected_rule_leaves_builder_unchanged() {
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(&Input::from_values(["a"]), instructions(&["i1"]))
        .unwrap();
    assert!(
        builder
            .add_rule(&Input::from_values(["a", "b"]), Instructions::default())
            .is_err()
    );

    let rules = builder.build();

    assert_eq!(rules.rule_count(), 1);
    assert_eq!(rules.node_count(), 2);
    assert_eq!(rules.rewrite_actions(&sequence(&[&["a"], &["b"]])).len(), 1);
}

#[test]
fn identical_inputs_share_terminal() {
    let mut builder = RulesCollectionBuilder::new();
    let input = Input::from_values(["a", "b"]);
    builder.add_rule(&input, instructions(&["i1"])).unwrap();
    builder.add_rule(&input, instructions(&["i2"])).unwrap();

    let rules = builder.build();

    assert_eq!(rules.rule_count(), 2);
    assert_eq!(rules.input_count(), 1);
    assert_eq!(rules.node_count(), 3);
}

#[test]
fn different_field_sets_get_separate_edges() {
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(
            &Input::new(vec![InputTerm::with_fields("a", ["f1"])]),
            instructions(&["i1"]),
        )
        .unwrap();
    builder
        .add_rule(
            &Input::new(vec![InputTerm::with_fields("a", ["f1", "f2"])]),
            instructions(&["i2"]),
        )
        .unwrap();
    // Field order and duplicates do not matter.
    builder
        .add_rule(
            &Input::new(vec![InputTerm::with_fields("a", ["f2", "f1", "f1"])]),
            instructions(&["i3"]),
        )
        .unwrap();

    let rules = builder.build();

    assert_eq!(rules.input_count(), 2);
    insta::assert_snapshot!(render(&rules.rewrite_actions(&sequence(&[&["f1:a"]]))), @r"
    0..1 f1:a => [i1]
    0..1 f1:a => [i2] [i3]
    ");
}

#[test]
fn ignore_case_folds_inputs() {
    let mut builder = RulesCollectionBuilder::with_options(RulesOptions::new().ignore_case(true));
    builder
        .add_rule(&Input::from_values(["Laptop"]), instructions(&["i1"]))
        .unwrap();
    builder
        .add_rule(&Input::from_values(["laptop"]), instructions(&["i2"]))
        .unwrap();

    let rules = builder.build();

    assert!(rules.options().get_ignore_case());
    assert_eq!(rules.input_count(), 1);
    insta::assert_snapshot!(render(&rules.rewrite_actions(&sequence(&[&["LAPTOP"]]))), @"0..1 LAPTOP => [i1] [i2]");
}

#[test]
fn mixed_case_input_matches_every_casing() {
    let mut builder = RulesCollectionBuilder::with_options(RulesOptions::new().ignore_case(true));
    builder
        .add_rule(&Input::from_values(["Cheap"]), instructions(&["i1"]))
        .unwrap();

    let rules = builder.build();

    for value in ["Cheap", "cheap", "CHEAP"] {
        assert_eq!(
            rules.rewrite_actions(&sequence(&[&[value]])).len(),
            1,
            "`{value}` should match"
        );
    }
}

#[test]
fn case_sensitive_by_default() {
    let mut builder = RulesCollectionBuilder::new();
    builder
        .add_rule(&Input::from_values(["Laptop"]), instructions(&["i1"]))
        .unwrap();

    let rules = builder.build();

    assert!(rules.rewrite_actions(&sequence(&[&["laptop"]])).is_empty());
    assert_eq!(rules.rewrite_actions(&sequence(&[&["Laptop"]])).len(), 1);
}
