//! Tracing infrastructure for matching and rewriting.
//!
//! `NoopTracer` methods are `#[inline(always)]` no-ops, so the matcher pays
//! nothing for tracing unless a real tracer is passed in. Instructions see
//! the tracer as `&mut dyn Tracer` because they are themselves trait objects.
//!
//! `PrintTracer` collects human-readable lines for the CLI `--trace` output.

use std::ops::Range;

use recast_core::{Colors, NodeId, SequenceTerm, TokenSequence};

use crate::index::Action;
use crate::instruction::Instruction;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Actions and term removals only.
    #[default]
    Default,
    /// Also sequences, start positions, trie edges, dead ends and instructions.
    Verbose,
}

/// Instrumentation hooks, called at fixed points:
/// - `trace_sequence` - rewriter built a sequence for a boolean container
/// - `trace_start` - matcher begins walking from a start position
/// - `trace_edge` - a term advanced a walk along a trie edge
/// - `trace_dead_end` - a walk could not advance and is abandoned
/// - `trace_action` - a walk reached a terminal node
/// - `trace_instruction` - an instruction is about to be applied
/// - `trace_delete` / `trace_delete_skipped` - deletion outcome per term
pub trait Tracer {
    fn trace_sequence(&mut self, container: NodeId, sequence: &TokenSequence);

    fn trace_start(&mut self, start: usize);

    fn trace_edge(&mut self, position: usize, term: &SequenceTerm);

    fn trace_dead_end(&mut self, position: usize);

    fn trace_action(&mut self, action: &Action<'_>);

    fn trace_instruction(&mut self, instruction: &dyn Instruction, span: &Range<usize>);

    fn trace_delete(&mut self, term: &SequenceTerm);

    /// The removal would have left the query without any live disjunction.
    fn trace_delete_skipped(&mut self, term: &SequenceTerm);
}

/// Tracer that compiles away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_sequence(&mut self, _container: NodeId, _sequence: &TokenSequence) {}

    #[inline(always)]
    fn trace_start(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_edge(&mut self, _position: usize, _term: &SequenceTerm) {}

    #[inline(always)]
    fn trace_dead_end(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_action(&mut self, _action: &Action<'_>) {}

    #[inline(always)]
    fn trace_instruction(&mut self, _instruction: &dyn Instruction, _span: &Range<usize>) {}

    #[inline(always)]
    fn trace_delete(&mut self, _term: &SequenceTerm) {}

    #[inline(always)]
    fn trace_delete_skipped(&mut self, _term: &SequenceTerm) {}
}

/// Tracer that collects formatted lines.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn term(&self, term: &SequenceTerm) -> String {
        self.colors.paint_term(&term.term)
    }
}

impl Tracer for PrintTracer {
    fn trace_sequence(&mut self, container: NodeId, sequence: &TokenSequence) {
        if !self.verbose() {
            return;
        }
        let positions: Vec<String> = sequence
            .iter()
            .map(|alts| {
                let alts: Vec<String> = alts.iter().map(|t| self.term(t)).collect();
                alts.join("|")
            })
            .collect();
        self.lines.push(format!(
            "{} #{} {}",
            self.colors.paint_keyword("sequence"),
            container.as_u32(),
            positions.join(" ")
        ));
    }

    fn trace_start(&mut self, start: usize) {
        if self.verbose() {
            let line = format!("  {}", self.colors.paint_dim(format_args!("@{start}")));
            self.lines.push(line);
        }
    }

    fn trace_edge(&mut self, position: usize, term: &SequenceTerm) {
        if self.verbose() {
            let line = format!("    {position} {}", self.term(term));
            self.lines.push(line);
        }
    }

    fn trace_dead_end(&mut self, position: usize) {
        if self.verbose() {
            let line = format!(
                "    {}",
                self.colors.paint_dim(format_args!("{position} dead end"))
            );
            self.lines.push(line);
        }
    }

    fn trace_action(&mut self, action: &Action<'_>) {
        let c = self.colors;
        let terms: Vec<String> = action.terms.iter().map(|t| self.term(t)).collect();
        let instructions: Vec<String> = action
            .instructions
            .iter()
            .map(|list| list.to_string())
            .collect();
        self.lines.push(format!(
            "{} {} {} => {}",
            c.paint_keyword("action"),
            c.paint_dim(format_args!("{}..{}", action.start, action.end)),
            terms.join(" "),
            instructions.join(" ")
        ));
    }

    fn trace_instruction(&mut self, instruction: &dyn Instruction, span: &Range<usize>) {
        if self.verbose() {
            let c = self.colors;
            self.lines.push(format!(
                "  {} {instruction} {}",
                c.paint_keyword("apply"),
                c.paint_dim(format_args!("{}..{}", span.start, span.end))
            ));
        }
    }

    fn trace_delete(&mut self, term: &SequenceTerm) {
        let line = format!("  delete {}", self.term(term));
        self.lines.push(line);
    }

    fn trace_delete_skipped(&mut self, term: &SequenceTerm) {
        let line = format!(
            "  keep {} {}",
            self.term(term),
            self.colors.paint_dim("(last live term)")
        );
        self.lines.push(line);
    }
}
