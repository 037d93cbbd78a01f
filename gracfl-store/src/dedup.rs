use std::collections::HashSet;

use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

/// `(vertex, label) -> {peer vertex ids}`, mirroring the contents of the
/// frontier cells it guards.
///
/// Shared by both 3D and 2D serial stores: the `[vertex][label]` shape
/// is identical for both, and only the *frontier* representation differs
/// between the two partitioning schemes.
#[derive(Debug, Clone)]
pub struct DedupIndex {
    sets: Vec<Vec<HashSet<VertexId>>>,
}

impl DedupIndex {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        DedupIndex {
            sets: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| HashSet::new()).collect())
                .collect(),
        }
    }

    pub fn contains(&self, key: VertexId, label: LabelId, peer: VertexId) -> bool {
        self.sets[key as usize][label as usize].contains(&peer)
    }

    /// Inserts `(key, label) -> peer`, returning `true` if it was not
    /// already present.
    pub fn insert(&mut self, key: VertexId, label: LabelId, peer: VertexId) -> bool {
        self.sets[key as usize][label as usize].insert(peer)
    }

    /// Total number of distinct edges recorded.
    pub fn len(&self) -> usize {
        self.sets.iter().flatten().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(key, label, peer)` triples, in `(key, label)` order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, LabelId, VertexId)> + '_ {
        self.sets.iter().enumerate().flat_map(|(key, by_label)| {
            by_label.iter().enumerate().flat_map(move |(label, set)| {
                set.iter()
                    .map(move |&peer| (key as VertexId, label as LabelId, peer))
            })
        })
    }
}
