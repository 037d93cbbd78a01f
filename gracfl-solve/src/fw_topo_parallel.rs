use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::concurrent::{ConcurrentEdgeStore, Out2DConcurrent};
use gracfl_store::DedupIndex;

use crate::traits::Solver;
use crate::DEFAULT_CHUNK_SIZE;

/// Parallel counterpart of [`crate::fw_topo::FwTopo`]: the 2D-partitioned,
/// vertex-driven analogue of [`crate::fw_gram_parallel::FwGramParallel`].
pub struct FwTopoParallel {
    store: Out2DConcurrent,
    grammar: GrammarIndex,
    pool: rayon::ThreadPool,
}

impl FwTopoParallel {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge], num_threads: usize) -> Self {
        let label_count = grammar.label_count();
        let mut store = Out2DConcurrent::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .expect("failed to build saturation thread pool");
        FwTopoParallel { store, grammar, pool }
    }

    fn sweep(&self, terminate: &AtomicBool) {
        let vertex_count = self.store.vertex_count() as u32;

        self.pool.install(|| {
            (0..vertex_count)
                .into_par_iter()
                .with_min_len(DEFAULT_CHUNK_SIZE)
                .for_each(|i| {
                    let new_out = self.store.cell(i).new_();
                    for (g, nbr) in &new_out {
                        for &a in self.grammar.unary_by_rhs(*g) {
                            if self.store.check_and_add(i, *nbr, a) {
                                terminate.store(false, Ordering::Relaxed);
                            }
                        }
                        let further = self.store.cell(*nbr).old_and_new();
                        for (h, out_nbr) in further {
                            for &a in self.grammar.bin_by_pair(*g, h) {
                                if self.store.check_and_add(i, out_nbr, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                        }
                    }

                    let old_out = self.store.cell(i).old();
                    for (g, nbr) in &old_out {
                        let further = self.store.cell(*nbr).new_();
                        for (h, out_nbr) in further {
                            for &a in self.grammar.bin_by_pair(*g, h) {
                                if self.store.check_and_add(i, out_nbr, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                        }
                    }
                });
        });
    }
}

impl Solver for FwTopoParallel {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let terminate = AtomicBool::new(true);
            self.sweep(&terminate);
            self.store.commit();
            let done = terminate.load(Ordering::Relaxed);
            log::debug!("fw-topo-parallel sweep {iterations} complete, terminate={done}");
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
        let mut solver = FwTopoParallel::new(3, grammar.clone(), &edges, 2);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
    }
}
