use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::concurrent::{ConcurrentEdgeStore, In2DConcurrent};
use gracfl_store::DedupIndex;

use crate::traits::Solver;
use crate::DEFAULT_CHUNK_SIZE;

/// Parallel counterpart of [`crate::bw_topo::BwTopo`]: the 2D-partitioned,
/// vertex-driven analogue of [`crate::bw_gram_parallel::BwGramParallel`],
/// built by substituting `bin_by_right` for `bin_by_left` in
/// [`crate::fw_topo_parallel::FwTopoParallel`]'s sweep (see DESIGN.md for
/// why this variant exists alongside the gram-driven parallel solvers).
pub struct BwTopoParallel {
    store: In2DConcurrent,
    grammar: GrammarIndex,
    pool: rayon::ThreadPool,
}

impl BwTopoParallel {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge], num_threads: usize) -> Self {
        let label_count = grammar.label_count();
        let mut store = In2DConcurrent::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .expect("failed to build saturation thread pool");
        BwTopoParallel { store, grammar, pool }
    }

    fn sweep(&self, terminate: &AtomicBool) {
        let vertex_count = self.store.vertex_count() as u32;

        self.pool.install(|| {
            (0..vertex_count)
                .into_par_iter()
                .with_min_len(DEFAULT_CHUNK_SIZE)
                .for_each(|i| {
                    let new_in = self.store.cell(i).new_();
                    for (g, nbr) in &new_in {
                        for &a in self.grammar.unary_by_rhs(*g) {
                            if self.store.check_and_add(*nbr, i, a) {
                                terminate.store(false, Ordering::Relaxed);
                            }
                        }
                        let further = self.store.cell(*nbr).old_and_new();
                        for (h, in_nbr2) in further {
                            for &a in self.grammar.bin_by_pair(h, *g) {
                                if self.store.check_and_add(in_nbr2, i, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                        }
                    }

                    let old_in = self.store.cell(i).old();
                    for (g, nbr) in &old_in {
                        let further = self.store.cell(*nbr).new_();
                        for (h, in_nbr2) in further {
                            for &a in self.grammar.bin_by_pair(h, *g) {
                                if self.store.check_and_add(in_nbr2, i, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                        }
                    }
                });
        });
    }
}

impl Solver for BwTopoParallel {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let terminate = AtomicBool::new(true);
            self.sweep(&terminate);
            self.store.commit();
            let done = terminate.load(Ordering::Relaxed);
            log::debug!("bw-topo-parallel sweep {iterations} complete, terminate={done}");
            if done {
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
        let mut solver = BwTopoParallel::new(3, grammar.clone(), &edges, 2);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
    }
}
