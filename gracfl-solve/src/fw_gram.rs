use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::{DedupIndex, EdgeStore, Out3D};

use crate::traits::Solver;

/// Label-driven forward saturation: sweeps outgoing edges grouped by
/// label, deriving unary and binary consequences anchored at the edge's
/// source vertex.
///
/// For every `(vertex, label)` cell, each newly-added neighbor combines
/// with every unary rule on that label, and with every binary rule whose
/// left symbol is that label against the neighbor's OLD∪NEW out-edges;
/// each previously-OLD neighbor is then re-combined against the binary
/// rule's NEW out-edges only, the two halves of the semi-naive
/// new×(old∪new) + old×new split.
pub struct FwGram {
    store: Out3D,
    grammar: GrammarIndex,
}

impl FwGram {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge]) -> Self {
        let label_count = grammar.label_count();
        let mut store = Out3D::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        FwGram { store, grammar }
    }

    fn sweep(&mut self, terminate: &mut bool) {
        let vertex_count = self.store.vertex_count() as u32;
        let label_count = self.store.label_count() as u32;

        for i in 0..vertex_count {
            for g in 0..label_count {
                let new_nbrs = self.store.cell(i, g).new_().to_vec();
                for nbr in new_nbrs {
                    for &a in self.grammar.unary_by_rhs(g) {
                        self.store.check_and_add(i, nbr, a, terminate);
                    }
                    for &(c, a) in self.grammar.bin_by_left(g) {
                        let outs = self.store.cell(nbr, c).old_and_new().to_vec();
                        for out_nbr in outs {
                            self.store.check_and_add(i, out_nbr, a, terminate);
                        }
                    }
                }

                let old_nbrs = self.store.cell(i, g).old().to_vec();
                for nbr in old_nbrs {
                    for &(c, a) in self.grammar.bin_by_left(g) {
                        let news = self.store.cell(nbr, c).new_().to_vec();
                        for out_nbr in news {
                            self.store.check_and_add(i, out_nbr, a, terminate);
                        }
                    }
                }
            }
        }
    }
}

impl Solver for FwGram {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let mut terminate = true;
            self.sweep(&mut terminate);
            self.store.commit();
            log::debug!("fw-gram sweep {iterations} complete, terminate={terminate}");
            if terminate {
                break;
            }
        }
    }

    fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    fn to_out_form(&self) -> DedupIndex {
        self.store.to_out_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gracfl_grammar::parse_grammar_str;

    #[test]
    fn transitive_closure_over_a_path() {
        let grammar = parse_grammar_str("S S S\nS a\n").unwrap();
        let a = grammar.symbol_id("a").unwrap();
        let edges = vec![
            Edge { from: 0, to: 1, label: a },
            Edge { from: 1, to: 2, label: a },
            Edge { from: 2, to: 3, label: a },
        ];
        let mut solver = FwGram::new(4, grammar.clone(), &edges);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        for from in 0..4u32 {
            for to in (from + 1)..4u32 {
                assert!(out.contains(from, s, to), "missing S-edge {from}->{to}");
            }
        }
        assert!(!out.contains(3, s, 0));
    }
}
