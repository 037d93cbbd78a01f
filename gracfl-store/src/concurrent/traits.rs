use rayon::prelude::*;

use gracfl_grammar::GrammarIndex;
use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;

/// The concurrent counterpart of [`crate::traits::EdgeStore`].
///
/// `check_and_add` takes `&self` rather than `&mut self`: a parallel
/// sweep hands out shared references to every worker thread and relies
/// on the underlying dedup index and frontier cells to serialize
/// concurrent writers internally. `commit` still takes `&mut self` —
/// it runs once, on one thread, at the barrier between sweeps.
pub trait ConcurrentEdgeStore: Sync {
    fn vertex_count(&self) -> usize;
    fn label_count(&self) -> usize;

    fn add_initial_edges(&mut self, edges: &[Edge]);

    /// Seeds one self-edge per epsilon production and every vertex, with
    /// the outer vertex loop parallelized since `add_self_edge` only
    /// needs `&self`.
    fn seed_self_edges(&mut self, grammar: &GrammarIndex) {
        let epsilons: Vec<_> = grammar.epsilon_productions().collect();
        let store: &Self = self;
        (0..store.vertex_count() as VertexId).into_par_iter().for_each(|v| {
            for &a in &epsilons {
                store.add_self_edge(v, v, a);
            }
        });
    }

    fn add_self_edge(&self, from: VertexId, to: VertexId, label: u32);

    /// Proposes a derived edge from any sweep thread. Returns whether it
    /// was newly inserted; callers are responsible for clearing their own
    /// thread-local terminate flag and reducing it after the sweep.
    fn check_and_add(&self, from: VertexId, to: VertexId, label: u32) -> bool;

    fn commit(&mut self);

    fn edge_count(&self) -> usize;

    fn to_out_form(&self) -> DedupIndex;
}
