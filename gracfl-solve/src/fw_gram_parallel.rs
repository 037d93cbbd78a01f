use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::concurrent::{ConcurrentEdgeStore, Out3DConcurrent};
use gracfl_store::DedupIndex;

use crate::traits::Solver;
use crate::DEFAULT_CHUNK_SIZE;

/// Parallel counterpart of [`crate::fw_gram::FwGram`]: the outer vertex
/// loop is split into static chunks and run across a fixed thread pool.
/// The shared `terminate` flag is cleared (never set) from inside the
/// store's check-and-add path, so a racing writer can only ever make
/// another sweep necessary, never hide one.
pub struct FwGramParallel {
    store: Out3DConcurrent,
    grammar: GrammarIndex,
    pool: rayon::ThreadPool,
}

impl FwGramParallel {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge], num_threads: usize) -> Self {
        let label_count = grammar.label_count();
        let mut store = Out3DConcurrent::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .expect("failed to build saturation thread pool");
        FwGramParallel { store, grammar, pool }
    }

    fn sweep(&self, terminate: &AtomicBool) {
        let vertex_count = self.store.vertex_count() as u32;
        let label_count = self.store.label_count() as u32;

        self.pool.install(|| {
            (0..vertex_count)
                .into_par_iter()
                .with_min_len(DEFAULT_CHUNK_SIZE)
                .for_each(|i| {
                    for g in 0..label_count {
                        let new_nbrs = self.store.cell(i, g).new_();
                        for nbr in &new_nbrs {
                            for &a in self.grammar.unary_by_rhs(g) {
                                if self.store.check_and_add(i, *nbr, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                            for &(c, a) in self.grammar.bin_by_left(g) {
                                let outs = self.store.cell(*nbr, c).old_and_new();
                                for out_nbr in outs {
                                    if self.store.check_and_add(i, out_nbr, a) {
                                        terminate.store(false, Ordering::Relaxed);
                                    }
                                }
                            }
                        }

                        let old_nbrs = self.store.cell(i, g).old();
                        for nbr in &old_nbrs {
                            for &(c, a) in self.grammar.bin_by_left(g) {
                                let news = self.store.cell(*nbr, c).new_();
                                for out_nbr in news {
                                    if self.store.check_and_add(i, out_nbr, a) {
                                        terminate.store(false, Ordering::Relaxed);
                                    }
                                }
                            }
                        }
                    }
                });
        });
    }

}

impl Solver for FwGramParallel {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let terminate = AtomicBool::new(true);
            self.sweep(&terminate);
            self.store.commit();
            let done = terminate.load(Ordering::Relaxed);
            log::debug!("fw-gram-parallel sweep {iterations} complete, terminate={done}");
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
            Edge { from: 2, to: 3, label: a },
        ];
        let mut solver = FwGramParallel::new(4, grammar.clone(), &edges, 2);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        for from in 0..4u32 {
            for to in (from + 1)..4u32 {
                assert!(out.contains(from, s, to), "missing S-edge {from}->{to}");
            }
        }
    }
}
