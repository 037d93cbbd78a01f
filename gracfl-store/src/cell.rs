use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

/// A frontier cell partitioned into OLD `[0, old_end)`, NEW
/// `[old_end, new_end)`, and PENDING `[new_end, len)` regions.
///
/// Used by the 3D stores, one cell per `(vertex, label)` pair: `items` holds
/// the peer vertex ids for that pair.
#[derive(Debug, Default, Clone)]
pub struct FrontierCell3D {
    items: Vec<VertexId>,
    old_end: usize,
    new_end: usize,
}

impl FrontierCell3D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `v` and immediately advances NEW past it — used for initial
    /// edges, which are "new" relative to the empty old set.
    pub fn push_new(&mut self, v: VertexId) {
        self.items.push(v);
        self.new_end = self.items.len();
    }

    /// Appends `v` without advancing NEW_END — the edge stays PENDING until
    /// the next commit.
    pub fn push_pending(&mut self, v: VertexId) {
        self.items.push(v);
    }

    /// `old_end := new_end; new_end := len` — the end-of-sweep commit.
    pub fn commit(&mut self) {
        self.old_end = self.new_end;
        self.new_end = self.items.len();
    }

    pub fn old(&self) -> &[VertexId] {
        &self.items[..self.old_end]
    }

    pub fn new_(&self) -> &[VertexId] {
        &self.items[self.old_end..self.new_end]
    }

    /// OLD ∪ NEW, i.e. everything not still PENDING.
    pub fn old_and_new(&self) -> &[VertexId] {
        &self.items[..self.new_end]
    }

    pub fn all(&self) -> &[VertexId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The 2D analogue of [`FrontierCell3D`]: one cell per vertex, holding
/// `(label, peer)` pairs instead of bare peer ids, with a single pair of
/// cursors shared across all labels at that vertex.
#[derive(Debug, Default, Clone)]
pub struct FrontierCell2D {
    items: Vec<(LabelId, VertexId)>,
    old_end: usize,
    new_end: usize,
}

impl FrontierCell2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_new(&mut self, label: LabelId, v: VertexId) {
        self.items.push((label, v));
        self.new_end = self.items.len();
    }

    pub fn push_pending(&mut self, label: LabelId, v: VertexId) {
        self.items.push((label, v));
    }

    pub fn commit(&mut self) {
        self.old_end = self.new_end;
        self.new_end = self.items.len();
    }

    pub fn old(&self) -> &[(LabelId, VertexId)] {
        &self.items[..self.old_end]
    }

    pub fn new_(&self) -> &[(LabelId, VertexId)] {
        &self.items[self.old_end..self.new_end]
    }

    pub fn old_and_new(&self) -> &[(LabelId, VertexId)] {
        &self.items[..self.new_end]
    }

    pub fn all(&self) -> &[(LabelId, VertexId)] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
