use thiserror::Error;

/// Errors raised while loading or indexing a normalized context-free grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar line {line}: expected 1-3 whitespace-separated symbols, found {found}")]
    MalformedLine { line: usize, found: usize },
    #[error("failed to read grammar file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
