use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::{DedupIndex, EdgeStore, In3D};

use crate::traits::Solver;

/// Label-driven backward saturation: the mirror image of [`crate::fw_gram::FwGram`]
/// over incoming edges, deriving consequences anchored at the edge's
/// destination vertex.
///
/// Binary rules are looked up by their *right* symbol (`bin_by_right`)
/// since the traversal walks backward from the destination toward the
/// source.
pub struct BwGram {
    store: In3D,
    grammar: GrammarIndex,
}

impl BwGram {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge]) -> Self {
        let label_count = grammar.label_count();
        let mut store = In3D::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        BwGram { store, grammar }
    }

    fn sweep(&mut self, terminate: &mut bool) {
        let vertex_count = self.store.vertex_count() as u32;
        let label_count = self.store.label_count() as u32;

        for i in 0..vertex_count {
            for g in 0..label_count {
                let new_nbrs = self.store.cell(i, g).new_().to_vec();
                for in_nbr1 in new_nbrs {
                    for &a in self.grammar.unary_by_rhs(g) {
                        self.store.check_and_add(in_nbr1, i, a, terminate);
                    }
                    for &(b, a) in self.grammar.bin_by_right(g) {
                        let ins = self.store.cell(in_nbr1, b).old_and_new().to_vec();
                        for in_nbr2 in ins {
                            self.store.check_and_add(in_nbr2, i, a, terminate);
                        }
                    }
                }

                let old_nbrs = self.store.cell(i, g).old().to_vec();
                for in_nbr1 in old_nbrs {
                    for &(b, a) in self.grammar.bin_by_right(g) {
                        let news = self.store.cell(in_nbr1, b).new_().to_vec();
                        for in_nbr2 in news {
                            self.store.check_and_add(in_nbr2, i, a, terminate);
                        }
                    }
                }
            }
        }
    }
}

impl Solver for BwGram {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let mut terminate = true;
            self.sweep(&mut terminate);
            self.store.commit();
            log::debug!("bw-gram sweep {iterations} complete, terminate={terminate}");
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
        let mut solver = BwGram::new(3, grammar.clone(), &edges);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
    }
}
