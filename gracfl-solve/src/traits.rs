use gracfl_store::DedupIndex;

/// The contract every saturation strategy presents once it owns a loaded
/// store: seed self-edges, run to a fixed point, report what it found.
pub trait Solver {
    /// Adds one self-edge per epsilon production and every vertex, then
    /// sweeps until no sweep inserts a new edge.
    fn run(&mut self);

    /// Total number of distinct derived edges, including self-edges and
    /// the original input edges.
    fn edge_count(&self) -> usize;

    /// The saturated edge set in canonical out-form.
    fn to_out_form(&self) -> DedupIndex;
}
