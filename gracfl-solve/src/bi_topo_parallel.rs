use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use gracfl_grammar::GrammarIndex;
use gracfl_graph::Edge;
use gracfl_store::concurrent::{Bi2DConcurrent, ConcurrentEdgeStore};
use gracfl_store::DedupIndex;

use crate::traits::Solver;
use crate::DEFAULT_CHUNK_SIZE;

/// Parallel counterpart of [`crate::bi_topo::BiTopo`]: combines both
/// halves of [`crate::bi_gram_parallel::BiGramParallel`]'s sweep over
/// inline `(label, peer)` cells instead of per-label cells (see
/// DESIGN.md).
pub struct BiTopoParallel {
    store: Bi2DConcurrent,
    grammar: GrammarIndex,
    pool: rayon::ThreadPool,
}

impl BiTopoParallel {
    pub fn new(vertex_count: usize, grammar: GrammarIndex, edges: &[Edge], num_threads: usize) -> Self {
        let label_count = grammar.label_count();
        let mut store = Bi2DConcurrent::new(vertex_count, label_count);
        store.add_initial_edges(edges);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .expect("failed to build saturation thread pool");
        BiTopoParallel { store, grammar, pool }
    }

    fn sweep(&self, terminate: &AtomicBool) {
        let vertex_count = self.store.vertex_count() as u32;

        self.pool.install(|| {
            (0..vertex_count)
                .into_par_iter()
                .with_min_len(DEFAULT_CHUNK_SIZE)
                .for_each(|i| {
                    let new_in = self.store.in_cell(i).new_();
                    for (b, in_nbr) in &new_in {
                        for &a in self.grammar.unary_by_rhs(*b) {
                            if self.store.check_and_add(*in_nbr, i, a) {
                                terminate.store(false, Ordering::Relaxed);
                            }
                        }
                        let outs = self.store.out_cell(i).old_and_new();
                        for (c, out_nbr) in outs {
                            for &a in self.grammar.bin_by_pair(*b, c) {
                                if self.store.check_and_add(*in_nbr, out_nbr, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                        }
                    }

                    let new_out = self.store.out_cell(i).new_();
                    for (c, out_nbr) in &new_out {
                        let ins = self.store.in_cell(i).old();
                        for (b, in_nbr) in ins {
                            for &a in self.grammar.bin_by_pair(b, *c) {
                                if self.store.check_and_add(in_nbr, *out_nbr, a) {
                                    terminate.store(false, Ordering::Relaxed);
                                }
                            }
                        }
                    }
                });
        });
    }
}

impl Solver for BiTopoParallel {
    fn run(&mut self) {
        self.store.seed_self_edges(&self.grammar);
        let mut iterations = 0u64;
        loop {
            iterations += 1;
            let terminate = AtomicBool::new(true);
            self.sweep(&terminate);
            self.store.commit();
            let done = terminate.load(Ordering::Relaxed);
            log::debug!("bi-topo-parallel sweep {iterations} complete, terminate={done}");
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
    fn dyck_one_matches_balanced_parens() {
        let grammar = parse_grammar_str("S S S\nS open close\n").unwrap();
        let open = grammar.symbol_id("open").unwrap();
        let close = grammar.symbol_id("close").unwrap();
        let edges = vec![
            Edge { from: 0, to: 1, label: open },
            Edge { from: 1, to: 2, label: close },
        ];
        let mut solver = BiTopoParallel::new(3, grammar.clone(), &edges, 2);
        solver.run();

        let s = grammar.symbol_id("S").unwrap();
        let out = solver.to_out_form();
        assert!(out.contains(0, s, 2));
    }
}
