use gracfl_grammar::GrammarIndex;
use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;

/// The uniform contract every serial edge store presents to a solver,
/// regardless of which direction(s) it indexes or how it partitions
/// edges: a capability set — initialize, sweep, commit, terminated?,
/// export — rather than an inheritance chain.
pub trait EdgeStore {
    fn vertex_count(&self) -> usize;
    fn label_count(&self) -> usize;

    /// Loads the initial edge list, deduplicating on insert.
    fn add_initial_edges(&mut self, edges: &[Edge]);

    /// Adds one self-edge `(v, v, A)` per epsilon production `A -> ε` and
    /// every vertex `v`.
    fn seed_self_edges(&mut self, grammar: &GrammarIndex) {
        for v in 0..self.vertex_count() as VertexId {
            for a in grammar.epsilon_productions() {
                self.add_self_edge(v, v, a);
            }
        }
    }

    /// Adds a single self-edge, idempotent via the dedup index.
    fn add_self_edge(&mut self, from: VertexId, to: VertexId, label: u32);

    /// Proposes a derived edge `(from, to, label)`. Inserts it as PENDING
    /// if absent and clears `terminate`; returns whether it was newly
    /// inserted.
    fn check_and_add(&mut self, from: VertexId, to: VertexId, label: u32, terminate: &mut bool) -> bool;

    /// `old_end := new_end; new_end := len` for every cell.
    fn commit(&mut self);

    /// Total number of distinct derived edges.
    fn edge_count(&self) -> usize;

    /// Materializes the canonical out-form: `(from, label) -> {to}`.
    fn to_out_form(&self) -> DedupIndex;
}
