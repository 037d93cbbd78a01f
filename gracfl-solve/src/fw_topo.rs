use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::{DedupIndex, EdgeStore, Out2D};

use crate::traits::Solver;

/// Vertex-driven forward saturation: each per-vertex cell carries
/// `(label, peer)` pairs inline rather than one cell per `(vertex,
/// label)`, so binary rules are looked up by the pair of traversed
/// labels directly (`bin_by_pair`) instead of by left symbol alone.
pub struct FwTopo {
    store: Out2D,
    grammar: GrammarIndex,
}

impl FwTopo {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge]) -> Self {
        let label_count = grammar.label_count();
        let mut store = Out2D::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        FwTopo { store, grammar }
    }

    fn sweep(&mut self, terminate: &mut bool) {
        let vertex_count = self.store.vertex_count() as u32;

        for i in 0..vertex_count {
            let new_out = self.store.cell(i).new_().to_vec();
            for (g, nbr) in new_out {
                for &a in self.grammar.unary_by_rhs(g) {
                    self.store.check_and_add(i, nbr, a, terminate);
                }
                let further = self.store.cell(nbr).old_and_new().to_vec();
                for (h, out_nbr) in further {
                    for &a in self.grammar.bin_by_pair(g, h) {
                        self.store.check_and_add(i, out_nbr, a, terminate);
                    }
                }
            }

            let old_out = self.store.cell(i).old().to_vec();
            for (g, nbr) in old_out {
                let further = self.store.cell(nbr).new_().to_vec();
                for (h, out_nbr) in further {
                    for &a in self.grammar.bin_by_pair(g, h) {
                        self.store.check_and_add(i, out_nbr, a, terminate);
                    }
                }
            }
        }
    }
}

impl Solver for FwTopo {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let mut terminate = true;
            self.sweep(&mut terminate);
            self.store.commit();
            log::debug!("fw-topo sweep {iterations} complete, terminate={terminate}");
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
        ];
        let mut solver = FwTopo::new(3, grammar.clone(), &edges);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
    }
}
