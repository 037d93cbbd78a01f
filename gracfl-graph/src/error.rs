use thiserror::Error;

/// Errors raised while loading the initial edge list.
///
/// A label absent from the grammar's symbol table is *not* an error — that
/// edge is silently dropped ("unknown label in graph").
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("graph line {line}: expected \"FROM TO LABEL\", found {found:?}")]
    MalformedLine { line: usize, found: Vec<String> },
    #[error("graph line {line}: invalid vertex id {token:?}")]
    InvalidVertexId { line: usize, token: String },
}
