//! Rule set configuration.

use std::borrow::Cow;

/// How term values are compared against rule inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseMode {
    #[default]
    Sensitive,
    /// Values are lowercased on both sides before comparison.
    Insensitive,
}

impl CaseMode {
    /// Normalize a value for trie keys and comparisons.
    pub fn fold<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            CaseMode::Sensitive => Cow::Borrowed(value),
            CaseMode::Insensitive if value.chars().any(char::is_uppercase) => {
                Cow::Owned(value.to_lowercase())
            }
            CaseMode::Insensitive => Cow::Borrowed(value),
        }
    }

    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            CaseMode::Sensitive => a == b,
            CaseMode::Insensitive => self.fold(a) == self.fold(b),
        }
    }
}

/// Options applied when building a rule index.
///
/// Field qualifiers are always compared case-sensitively.
#[derive(Clone, Copy, Debug, Default)]
pub struct RulesOptions {
    pub(crate) ignore_case: bool,
}

impl RulesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare term values case-insensitively (default: false).
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn get_ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn case_mode(&self) -> CaseMode {
        if self.ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}
