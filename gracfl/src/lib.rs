//! The `gracfl` driver: loads a grammar and graph, selects one of the
//! twelve (traversal direction × processing strategy × execution mode)
//! saturation strategies by configuration, runs it to a fixed point, and
//! reports edge counts and elapsed time.

mod config;
mod driver;
mod error;

pub use config::{Config, ConfigOverrides, ExecutionMode, Model, ProcessingStrategy, TraversalDirection};
pub use driver::{run, RunReport};
pub use error::GraclError;
