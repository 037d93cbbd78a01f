use dashmap::DashSet;

use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

use crate::dedup::DedupIndex;

/// The concurrent counterpart of [`crate::dedup::DedupIndex`]: one
/// [`DashSet`] per `(vertex, label)` pair instead of a plain `HashSet`, so
/// sweep threads racing to insert the same peer into the same cell still
/// agree on exactly one winner.
#[derive(Debug)]
pub struct ConcurrentDedupIndex {
    sets: Vec<Vec<DashSet<VertexId>>>,
}

impl ConcurrentDedupIndex {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        ConcurrentDedupIndex {
            sets: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| DashSet::new()).collect())
                .collect(),
        }
    }

    pub fn contains(&self, key: VertexId, label: LabelId, peer: VertexId) -> bool {
        self.sets[key as usize][label as usize].contains(&peer)
    }

    /// Inserts `(key, label) -> peer`, returning `true` if it was not
    /// already present. Safe to call concurrently for distinct or
    /// overlapping `(key, label, peer)` triples.
    pub fn insert(&self, key: VertexId, label: LabelId, peer: VertexId) -> bool {
        self.sets[key as usize][label as usize].insert(peer)
    }

    pub fn len(&self) -> usize {
        self.sets.iter().flatten().map(DashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot iteration in `(key, label, peer)` order, used when handing
    /// the saturated edge set off to the result adapter.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, LabelId, VertexId)> + '_ {
        self.sets.iter().enumerate().flat_map(|(key, by_label)| {
            by_label.iter().enumerate().flat_map(move |(label, set)| {
                set.iter()
                    .map(move |peer| (key as VertexId, label as LabelId, *peer))
                    .collect::<Vec<_>>()
            })
        })
    }

    /// Snapshots this index into a plain [`DedupIndex`], the shape every
    /// non-concurrent consumer (the result adapter, the reporting layer)
    /// expects.
    pub fn to_dedup_index(&self, vertex_count: usize, label_count: usize) -> DedupIndex {
        let mut out = DedupIndex::new(vertex_count, label_count);
        for (key, label, peer) in self.iter() {
            out.insert(key, label, peer);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let dedup = ConcurrentDedupIndex::new(3, 2);
        assert!(dedup.insert(0, 0, 1));
        assert!(!dedup.insert(0, 0, 1));
        assert_eq!(dedup.len(), 1);
        assert!(dedup.contains(0, 0, 1));
    }
}
