//! ANSI styling for tree dumps and match traces.
//!
//! Roles:
//! - `keyword`: container kinds, trace event names
//! - `term`: term values
//! - `dim`: occurrence markers, field qualifiers, spans

use std::fmt::Display;

use crate::term::Term;

/// ANSI style set. `OFF` renders plain text.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub keyword: &'static str,
    pub term: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        keyword: "\x1b[34m",
        term: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        keyword: "",
        term: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn paint_keyword(&self, text: impl Display) -> String {
        format!("{}{text}{}", self.keyword, self.reset)
    }

    pub fn paint_dim(&self, text: impl Display) -> String {
        format!("{}{text}{}", self.dim, self.reset)
    }

    /// Term as `field:value`, with the qualifier dimmed.
    pub fn paint_term(&self, term: &Term) -> String {
        match term.field() {
            Some(field) => format!(
                "{}{field}:{}{}{}{}",
                self.dim, self.reset, self.term, term.value, self.reset
            ),
            None => format!("{}{}{}", self.term, term.value, self.reset),
        }
    }
}
