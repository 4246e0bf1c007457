//! Rule input patterns.

use std::fmt;

use recast_core::Term;

use crate::options::CaseMode;

/// Sorted, deduplicated set of field names a pattern term accepts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldSet(Vec<String>);

impl FieldSet {
    pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        let mut fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        fields.sort();
        fields.dedup();
        Self(fields)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.binary_search_by(|f| f.as_str().cmp(field)).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One position of a rule input: a value plus an optional field constraint.
///
/// A term without a field set matches terms of any field, including
/// unqualified ones. A constrained term only matches terms whose field is in
/// the set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InputTerm {
    pub value: String,
    pub fields: Option<FieldSet>,
}

impl InputTerm {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            fields: None,
        }
    }

    /// Constrain to a field set. An empty set means no constraint.
    pub fn with_fields<S: Into<String>>(
        value: impl Into<String>,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        let fields = FieldSet::new(fields);
        Self {
            value: value.into(),
            fields: (!fields.is_empty()).then_some(fields),
        }
    }

    pub fn accepts_field(&self, field: Option<&str>) -> bool {
        field_allowed(self.fields.as_ref(), field)
    }

    pub fn matches(&self, term: &Term, case: CaseMode) -> bool {
        case.equals(&self.value, &term.value) && self.accepts_field(term.field())
    }
}

pub(crate) fn field_allowed(fields: Option<&FieldSet>, field: Option<&str>) -> bool {
    match (fields, field) {
        (None, _) => true,
        (Some(set), Some(field)) => set.contains(field),
        (Some(_), None) => false,
    }
}

impl fmt::Display for InputTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fields) = &self.fields {
            let fields: Vec<&str> = fields.iter().collect();
            write!(f, "{}:", fields.join(","))?;
        }
        f.write_str(&self.value)
    }
}

/// Ordered sequence of input terms that triggers a rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Input(Vec<InputTerm>);

impl Input {
    pub fn new(terms: Vec<InputTerm>) -> Self {
        Self(terms)
    }

    /// Unconstrained input from plain values.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self(values.into_iter().map(InputTerm::new).collect())
    }

    pub fn terms(&self) -> &[InputTerm] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
