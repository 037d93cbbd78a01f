use std::fmt::Display;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::GraclError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    Serial,
    Parallel,
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            ExecutionMode::Serial => "serial",
            ExecutionMode::Parallel => "parallel",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalDirection {
    Fw,
    Bw,
    Bi,
}

impl Display for TraversalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            TraversalDirection::Fw => "fw",
            TraversalDirection::Bw => "bw",
            TraversalDirection::Bi => "bi",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessingStrategy {
    GramDriven,
    TopoDriven,
}

impl Display for ProcessingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            ProcessingStrategy::GramDriven => "gram-driven",
            ProcessingStrategy::TopoDriven => "topo-driven",
        })
    }
}

/// `base` names a non-CFL baseline solver that is not implemented here.
/// The flag is still recognized (so `--model gracfl` is a no-op) but
/// `base` is rejected with a named, unimplemented-baseline error rather
/// than silently mis-routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Model {
    Gracfl,
    Base,
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Model::Gracfl => "gracfl",
            Model::Base => "base",
        })
    }
}

/// Fully resolved solver configuration: every field has a concrete value,
/// built from CLI flags overlaid on an optional key=value file overlaid
/// on the built-in defaults (CLI wins over file wins over default).
#[derive(Debug, Clone)]
pub struct Config {
    pub graph_filepath: PathBuf,
    pub grammar_filepath: PathBuf,
    pub execution_mode: ExecutionMode,
    pub traversal_direction: TraversalDirection,
    pub processing_strategy: ProcessingStrategy,
    pub num_threads: usize,
    pub model: Model,
}

/// The key=value file format (parsed as TOML), every field optional — a
/// file only ever supplies defaults that CLI flags may override.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FileConfig {
    graph_filepath: Option<PathBuf>,
    grammar_filepath: Option<PathBuf>,
    execution_mode: Option<ExecutionMode>,
    traversal_direction: Option<TraversalDirection>,
    processing_strategy: Option<ProcessingStrategy>,
    num_threads: Option<usize>,
    model: Option<Model>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, GraclError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GraclError::ConfigFileIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| GraclError::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Every field is optional here because a config file or a built-in
/// default may supply it instead. `graph_filepath`/`grammar_filepath`
/// alone have no default and must come from one of the three sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub graph_filepath: Option<PathBuf>,
    pub grammar_filepath: Option<PathBuf>,
    pub execution_mode: Option<ExecutionMode>,
    pub traversal_direction: Option<TraversalDirection>,
    pub processing_strategy: Option<ProcessingStrategy>,
    pub num_threads: Option<usize>,
    pub model: Option<Model>,
}

impl Config {
    /// Resolves a [`Config`] from CLI overrides, an optional key=value
    /// file, and built-in defaults, in that precedence order (CLI > file
    /// > default).
    pub fn resolve(overrides: ConfigOverrides) -> Result<Config, GraclError> {
        let file = match &overrides.config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let execution_mode = overrides
            .execution_mode
            .or(file.execution_mode)
            .unwrap_or(ExecutionMode::Serial);

        // Direction defaults to bidirectional in serial mode and forward
        // in parallel mode.
        let traversal_direction = overrides.traversal_direction.or(file.traversal_direction).unwrap_or(
            match execution_mode {
                ExecutionMode::Serial => TraversalDirection::Bi,
                ExecutionMode::Parallel => TraversalDirection::Fw,
            },
        );

        let processing_strategy = overrides
            .processing_strategy
            .or(file.processing_strategy)
            .unwrap_or(ProcessingStrategy::GramDriven);

        let model = overrides.model.or(file.model).unwrap_or(Model::Gracfl);
        if model == Model::Base {
            return Err(GraclError::Config(
                "--model base names an unimplemented non-CFL baseline solver".to_string(),
            ));
        }

        let num_threads = match overrides.num_threads.or(file.num_threads) {
            Some(0) => {
                return Err(GraclError::Config(
                    "num-threads must be a positive integer".to_string(),
                ))
            }
            Some(n) => n,
            None => std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        };

        let graph_filepath = overrides
            .graph_filepath
            .or(file.graph_filepath)
            .ok_or_else(|| GraclError::Config("graph-filepath is required (pass --graph or set it in the config file)".to_string()))?;
        let grammar_filepath = overrides
            .grammar_filepath
            .or(file.grammar_filepath)
            .ok_or_else(|| GraclError::Config("grammar-filepath is required (pass --grammar or set it in the config file)".to_string()))?;

        Ok(Config {
            graph_filepath,
            grammar_filepath,
            execution_mode,
            traversal_direction,
            processing_strategy,
            num_threads,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_required_paths() {
        let err = Config::resolve(ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, GraclError::Config(_)));
    }

    #[test]
    fn rejects_zero_threads() {
        let overrides = ConfigOverrides {
            graph_filepath: Some(PathBuf::from("g.txt")),
            grammar_filepath: Some(PathBuf::from("gr.txt")),
            num_threads: Some(0),
            ..Default::default()
        };
        let err = Config::resolve(overrides).unwrap_err();
        assert!(matches!(err, GraclError::Config(_)));
    }

    #[test]
    fn defaults_direction_by_mode() {
        let base = ConfigOverrides {
            graph_filepath: Some(PathBuf::from("g.txt")),
            grammar_filepath: Some(PathBuf::from("gr.txt")),
            ..Default::default()
        };

        let serial = Config::resolve(base.clone()).unwrap();
        assert_eq!(serial.traversal_direction, TraversalDirection::Bi);

        let parallel = Config::resolve(ConfigOverrides {
            execution_mode: Some(ExecutionMode::Parallel),
            ..base
        })
        .unwrap();
        assert_eq!(parallel.traversal_direction, TraversalDirection::Fw);
    }
}
