use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use gracfl_grammar::GrammarError;
use gracfl_graph::GraphError;

/// Top-level error for the `gracfl` driver, composing every layer's
/// failure mode into a single one-line message.
#[derive(Debug, Error)]
pub enum GraclError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl GraclError {
    /// Renders a colored `error:` tag followed by the message, one line,
    /// suitable for a CLI's stderr.
    pub fn render(&self) -> String {
        format!("{} {}", "error:".bright_red().bold(), self)
    }
}
