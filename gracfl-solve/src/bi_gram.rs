use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::{Bi3D, DedupIndex, EdgeStore};

use crate::traits::Solver;

/// Label-driven bidirectional saturation: combines a backward sweep over
/// new in-edges with a forward sweep over new out-edges every pass.
///
/// New in-edges combine against OLD∪NEW out-edges (unary and binary-left
/// rules), while new out-edges combine against OLD-only in-edges
/// (binary-right rules), the asymmetric split that keeps the two halves
/// from double-deriving the new×new product.
pub struct BiGram {
    store: Bi3D,
    grammar: GrammarIndex,
}

impl BiGram {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge]) -> Self {
        let label_count = grammar.label_count();
        let mut store = Bi3D::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        BiGram { store, grammar }
    }

    fn sweep(&mut self, terminate: &mut bool) {
        let vertex_count = self.store.vertex_count() as u32;
        let label_count = self.store.label_count() as u32;

        for i in 0..vertex_count {
            for g in 0..label_count {
                let new_in = self.store.in_cell(i, g).new_().to_vec();
                for in_nbr in new_in {
                    for &a in self.grammar.unary_by_rhs(g) {
                        self.store.check_and_add(in_nbr, i, a, terminate);
                    }
                    for &(c, a) in self.grammar.bin_by_left(g) {
                        let outs = self.store.out_cell(i, c).old_and_new().to_vec();
                        for nbr in outs {
                            self.store.check_and_add(in_nbr, nbr, a, terminate);
                        }
                    }
                }

                let new_out = self.store.out_cell(i, g).new_().to_vec();
                for nbr in new_out {
                    for &(c, a) in self.grammar.bin_by_right(g) {
                        let ins = self.store.in_cell(i, c).old().to_vec();
                        for in_nbr in ins {
                            self.store.check_and_add(in_nbr, nbr, a, terminate);
                        }
                    }
                }
            }
        }
    }
}

impl Solver for BiGram {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let mut terminate = true;
            self.sweep(&mut terminate);
            self.store.commit();
            log::debug!("bi-gram sweep {iterations} complete, terminate={terminate}");
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
    fn dyck_one_matches_balanced_parens() {
        let grammar = parse_grammar_str("S S S\nS open close\n").unwrap();
        let open = grammar.symbol_id("open").unwrap();
        let close = grammar.symbol_id("close").unwrap();
        let edges = vec![
            Edge { from: 0, to: 1, label: open },
            Edge { from: 1, to: 2, label: close },
        ];
        let mut solver = BiGram::new(3, grammar.clone(), &edges);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
        assert!(!out.contains(0, s, 1));
    }
}
