use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::{Bi2D, DedupIndex, EdgeStore};

use crate::traits::Solver;

/// Vertex-driven bidirectional saturation: the 2D counterpart of
/// [`crate::bi_gram::BiGram`].
///
/// New in-edges combine against OLD∪NEW out-edges, new out-edges combine
/// against OLD-only in-edges, the same asymmetric split as [`crate::bi_gram::BiGram`],
/// expressed over inline `(label, peer)` cells instead of per-label cells.
pub struct BiTopo {
    store: Bi2D,
    grammar: GrammarIndex,
}

impl BiTopo {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge]) -> Self {
        let label_count = grammar.label_count();
        let mut store = Bi2D::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        BiTopo { store, grammar }
    }

    fn sweep(&mut self, terminate: &mut bool) {
        let vertex_count = self.store.vertex_count() as u32;

        for i in 0..vertex_count {
            let new_in = self.store.in_cell(i).new_().to_vec();
            for (b, in_nbr) in new_in {
                for &a in self.grammar.unary_by_rhs(b) {
                    self.store.check_and_add(in_nbr, i, a, terminate);
                }
                let outs = self.store.out_cell(i).old_and_new().to_vec();
                for (c, out_nbr) in outs {
                    for &a in self.grammar.bin_by_pair(b, c) {
                        self.store.check_and_add(in_nbr, out_nbr, a, terminate);
                    }
                }
            }

            let new_out = self.store.out_cell(i).new_().to_vec();
            for (c, out_nbr) in new_out {
                let ins = self.store.in_cell(i).old().to_vec();
                for (b, in_nbr) in ins {
                    for &a in self.grammar.bin_by_pair(b, c) {
                        self.store.check_and_add(in_nbr, out_nbr, a, terminate);
                    }
                }
            }
        }
    }
}

impl Solver for BiTopo {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let mut terminate = true;
            self.sweep(&mut terminate);
            self.store.commit();
            log::debug!("bi-topo sweep {iterations} complete, terminate={terminate}");
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
        let mut solver = BiTopo::new(3, grammar.clone(), &edges);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
    }
}
