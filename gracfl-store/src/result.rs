use crate::dedup::DedupIndex;

/// Converts an in-direction dedup index (keyed `(to, label) -> {from}`)
/// into the canonical out-form (keyed `(from, label) -> {to}`) — the
/// shape every caller outside the solver sees, regardless of which
/// traversal direction produced it.
///
/// The transposition swaps the two endpoints and keeps the label, so
/// that `convert_in_to_out` and `convert_out_to_in` are mutual inverses
/// for any vertex/label count.
pub fn convert_in_to_out(in_form: &DedupIndex, vertex_count: usize, label_count: usize) -> DedupIndex {
    let mut out = DedupIndex::new(vertex_count, label_count);
    for (to, label, from) in in_form.iter() {
        out.insert(from, label, to);
    }
    out
}

/// The inverse transposition: out-form `(from, label) -> {to}` to in-form
/// `(to, label) -> {from}`.
pub fn convert_out_to_in(out_form: &DedupIndex, vertex_count: usize, label_count: usize) -> DedupIndex {
    let mut in_form = DedupIndex::new(vertex_count, label_count);
    for (from, label, to) in out_form.iter() {
        in_form.insert(to, label, from);
    }
    in_form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let mut out = DedupIndex::new(4, 2);
        out.insert(0, 0, 1);
        out.insert(0, 0, 2);
        out.insert(1, 1, 3);

        let in_form = convert_out_to_in(&out, 4, 2);
        let round_tripped = convert_in_to_out(&in_form, 4, 2);

        let mut expected: Vec<_> = out.iter().collect();
        let mut actual: Vec<_> = round_tripped.iter().collect();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);
    }
}
