use std::path::Path;

use gracfl_grammar::GrammarIndex;

use crate::edge::{Edge, VertexId};
use crate::error::GraphError;

/// The initial edge list plus the derived vertex count.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub edges: Vec<Edge>,
    pub vertex_count: VertexId,
}

/// Loads a graph file: one edge per line as `FROM TO LABEL`. `FROM`/`TO`
/// are non-negative integers, `LABEL` a symbol string looked up against
/// `grammar`'s symbol table.
///
/// Edges whose label is absent from the grammar are silently dropped and
/// do **not** contribute to the vertex count — only edges whose label
/// survives the grammar filter grow `vertex_count` (see DESIGN.md).
pub fn load_graph_file(path: &Path, grammar: &GrammarIndex) -> Result<LoadedGraph, GraphError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_graph_str(&contents, grammar)
}

pub fn load_graph_str(contents: &str, grammar: &GrammarIndex) -> Result<LoadedGraph, GraphError> {
    let mut edges = Vec::new();
    let mut vertex_count: VertexId = 0;
    let mut dropped = 0usize;

    for (line_no, line) in contents.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let [from, to, label] = tokens.as_slice() else {
            return Err(GraphError::MalformedLine {
                line: line_no + 1,
                found: tokens.into_iter().map(String::from).collect(),
            });
        };

        let Some(label_id) = grammar.symbol_id(label) else {
            dropped += 1;
            continue;
        };

        let from = parse_vertex_id(from, line_no + 1)?;
        let to = parse_vertex_id(to, line_no + 1)?;

        vertex_count = vertex_count.max(from + 1).max(to + 1);
        edges.push(Edge::new(from, to, label_id));
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} graph edges with unknown labels");
    }
    log::debug!(
        "loaded {} edges over {} vertices",
        edges.len(),
        vertex_count
    );
    Ok(LoadedGraph {
        edges,
        vertex_count,
    })
}

fn parse_vertex_id(token: &str, line: usize) -> Result<VertexId, GraphError> {
    token
        .parse::<VertexId>()
        .map_err(|_| GraphError::InvalidVertexId {
            line,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gracfl_grammar::parse_grammar_str;

    #[test]
    fn drops_unknown_labels_and_excludes_them_from_vertex_count() {
        let grammar = parse_grammar_str("S a\n").unwrap();
        let loaded = load_graph_str("0 1 a\n1 99 b\n", &grammar).unwrap();
        assert_eq!(loaded.edges.len(), 1);
        // vertex 99 only appears on a dropped `b` edge, so it must not
        // inflate the vertex count.
        assert_eq!(loaded.vertex_count, 2);
    }

    #[test]
    fn rejects_negative_or_non_numeric_vertex_ids() {
        let grammar = parse_grammar_str("S a\n").unwrap();
        let err = load_graph_str("-1 1 a\n", &grammar).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertexId { line: 1, .. }));
    }
}
