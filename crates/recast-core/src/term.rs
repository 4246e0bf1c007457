//! Term values and clause occurrence.

use std::fmt;

/// Occurrence semantic of a clause inside a boolean container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    Must,
    #[default]
    Should,
    MustNot,
}

impl Occur {
    pub fn as_str(self) -> &'static str {
        match self {
            Occur::Must => "Must",
            Occur::Should => "Should",
            Occur::MustNot => "MustNot",
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A term value with an optional field qualifier.
///
/// Terms are immutable once created. Two terms are equal when both the value
/// and the field match exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Term {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub value: String,
}

impl Term {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            field: None,
            value: value.into(),
        }
    }

    pub fn with_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            value: value.into(),
        }
    }

    /// Parse `field:value` or plain `value`.
    ///
    /// A leading or trailing colon is kept as part of the value.
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((field, value)) if !field.is_empty() && !value.is_empty() => {
                Self::with_field(field, value)
            }
            _ => Self::new(s),
        }
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}:{}", self.value),
            None => f.write_str(&self.value),
        }
    }
}
