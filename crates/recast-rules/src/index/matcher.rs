//! Sequence matcher.
//!
//! For each start position the matcher advances a frontier of walks one
//! sequence position per trie level. Every alternative term at a position is
//! tried against every walk; each accepting edge forks a new walk. A walk
//! that reaches a terminal emits an action and keeps going if the node has
//! edges, so shorter and longer inputs sharing a prefix both fire.
//!
//! Output order: start position, then trie depth, then frontier order,
//! alternative order and edge registration order.

use recast_core::{SequenceTerm, TokenSequence};

use crate::trace::{NoopTracer, Tracer};

use super::trie::{ROOT, TrieNode, TrieNodeId};
use super::{Action, RulesCollection};

/// A partial match in flight.
struct Walk<'s> {
    node: TrieNodeId,
    path: Vec<&'s SequenceTerm>,
}

impl RulesCollection {
    /// All matches in the sequence, ordered by start position.
    ///
    /// Overlapping and nested matches are all reported. An empty sequence
    /// yields no actions.
    pub fn rewrite_actions(&self, sequence: &TokenSequence) -> Vec<Action<'_>> {
        self.rewrite_actions_traced(sequence, &mut NoopTracer)
    }

    pub fn rewrite_actions_traced<T: Tracer>(
        &self,
        sequence: &TokenSequence,
        tracer: &mut T,
    ) -> Vec<Action<'_>> {
        let case = self.case_mode();
        let mut actions = Vec::new();
        let mut frontier: Vec<Walk<'_>> = Vec::new();
        let mut next: Vec<Walk<'_>> = Vec::new();

        for start in 0..sequence.len() {
            tracer.trace_start(start);
            frontier.push(Walk {
                node: ROOT,
                path: Vec::new(),
            });

            let mut position = start;
            while position < sequence.len() && !frontier.is_empty() {
                let alternatives = sequence.position(position);
                for walk in frontier.drain(..) {
                    let mut advanced = false;
                    for alt in alternatives {
                        let key = case.fold(&alt.term.value);
                        for edge in self.trie.edges(walk.node, &key) {
                            if !edge.accepts(alt.term.field()) {
                                continue;
                            }
                            advanced = true;
                            tracer.trace_edge(position, alt);

                            let mut path = walk.path.clone();
                            path.push(alt);
                            let target = self.trie.node(edge.target);
                            if target.is_terminal() {
                                let action = self.action(target, &path, start);
                                tracer.trace_action(&action);
                                actions.push(action);
                            }
                            if target.has_edges() {
                                next.push(Walk {
                                    node: edge.target,
                                    path,
                                });
                            }
                        }
                    }
                    if !advanced {
                        tracer.trace_dead_end(position);
                    }
                }
                std::mem::swap(&mut frontier, &mut next);
                position += 1;
            }
            frontier.clear();
        }

        actions
    }

    fn action(&self, node: &TrieNode, path: &[&SequenceTerm], start: usize) -> Action<'_> {
        Action {
            instructions: node
                .terminal()
                .iter()
                .map(|&i| &self.instructions[i as usize])
                .collect(),
            terms: path.iter().map(|&t| t.clone()).collect(),
            start,
            end: start + path.len(),
        }
    }
}
