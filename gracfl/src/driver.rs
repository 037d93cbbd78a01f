use std::time::{Duration, Instant};

use gracfl_grammar::parse_grammar_file;
use gracfl_graph::load_graph_file;
use gracfl_solve::{
    BiGram, BiGramParallel, BiTopo, BiTopoParallel, BwGram, BwGramParallel, BwTopo, BwTopoParallel,
    FwGram, FwGramParallel, FwTopo, FwTopoParallel, Solver,
};
use gracfl_store::DedupIndex;

use crate::config::{Config, ExecutionMode, ProcessingStrategy, TraversalDirection};
use crate::error::GraclError;

/// Counts and timing reported at the end of a run: initial edge count,
/// new-edge count, wall time.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub initial_edges: usize,
    pub new_edges: usize,
    pub elapsed: Duration,
}

/// Loads the grammar and graph named by `config`, constructs the
/// (direction, policy, mode) solver it selects, runs it to a fixed
/// point, and reports the result.
pub fn run(config: &Config) -> Result<(RunReport, DedupIndex), GraclError> {
    let grammar = parse_grammar_file(&config.grammar_filepath)?;
    let graph = load_graph_file(&config.graph_filepath, &grammar)?;
    let vertex_count = graph.vertex_count as usize;

    let mut solver = build_solver(config, grammar, &graph.edges, vertex_count);

    let initial_edges = solver.edge_count();
    log::info!(
        "starting CFL reachability analysis over {} vertices, {} initial edges",
        vertex_count,
        initial_edges
    );

    let start = Instant::now();
    solver.run();
    let elapsed = start.elapsed();

    let total_edges = solver.edge_count();
    log::info!("analysis complete in {elapsed:?}, {total_edges} total edges");

    let report = RunReport {
        initial_edges,
        new_edges: total_edges - initial_edges,
        elapsed,
    };
    Ok((report, solver.to_out_form()))
}

fn build_solver(
    config: &Config,
    grammar: gracfl_grammar::GrammarIndex,
    edges: &[gracfl_graph::Edge],
    vertex_count: usize,
) -> Box<dyn Solver> {
    use ExecutionMode::*;
    use ProcessingStrategy::*;
    use TraversalDirection::*;

    match (config.execution_mode, config.traversal_direction, config.processing_strategy) {
        (Serial, Fw, GramDriven) => Box::new(FwGram::new(vertex_count, grammar, edges)),
        (Serial, Bw, GramDriven) => Box::new(BwGram::new(vertex_count, grammar, edges)),
        (Serial, Bi, GramDriven) => Box::new(BiGram::new(vertex_count, grammar, edges)),
        (Serial, Fw, TopoDriven) => Box::new(FwTopo::new(vertex_count, grammar, edges)),
        (Serial, Bw, TopoDriven) => Box::new(BwTopo::new(vertex_count, grammar, edges)),
        (Serial, Bi, TopoDriven) => Box::new(BiTopo::new(vertex_count, grammar, edges)),
        (Parallel, Fw, GramDriven) => {
            Box::new(FwGramParallel::new(vertex_count, grammar, edges, config.num_threads))
        }
        (Parallel, Bw, GramDriven) => {
            Box::new(BwGramParallel::new(vertex_count, grammar, edges, config.num_threads))
        }
        (Parallel, Bi, GramDriven) => {
            Box::new(BiGramParallel::new(vertex_count, grammar, edges, config.num_threads))
        }
        (Parallel, Fw, TopoDriven) => {
            Box::new(FwTopoParallel::new(vertex_count, grammar, edges, config.num_threads))
        }
        (Parallel, Bw, TopoDriven) => {
            Box::new(BwTopoParallel::new(vertex_count, grammar, edges, config.num_threads))
        }
        (Parallel, Bi, TopoDriven) => {
            Box::new(BiTopoParallel::new(vertex_count, grammar, edges, config.num_threads))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::ConfigOverrides;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn transitive_closure_end_to_end() {
        let grammar_file = write_temp("S S S\nS a\n");
        let graph_file = write_temp("0 1 a\n1 2 a\n2 3 a\n");

        let config = Config::resolve(ConfigOverrides {
            graph_filepath: Some(graph_file.path().to_path_buf()),
            grammar_filepath: Some(grammar_file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        let (report, out) = run(&config).unwrap();
        assert_eq!(report.initial_edges, 3);
        assert_eq!(report.new_edges, 6);
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn epsilon_self_edges_count_as_new_not_initial() {
        // `S` is an epsilon rule; `T a` is unary. The only input edge
        // carries label `a`, so it alone makes up `initial_edges` — the
        // two `S` self-edges and the derived `T` edge must all show up
        // in `new_edges`, not be folded into the initial count.
        let grammar_file = write_temp("S\nT a\n");
        let graph_file = write_temp("0 1 a\n");

        let config = Config::resolve(ConfigOverrides {
            graph_filepath: Some(graph_file.path().to_path_buf()),
            grammar_filepath: Some(grammar_file.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        let (report, out) = run(&config).unwrap();
        assert_eq!(report.initial_edges, 1);
        assert_eq!(report.new_edges, 3);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn all_twelve_variants_agree() {
        let grammar_file = write_temp("S O S C\nS O C\n");
        let graph_file = write_temp("0 1 O\n1 2 O\n2 3 C\n3 4 C\n");

        let mut reference: Option<Vec<_>> = None;
        for mode in [ExecutionMode::Serial, ExecutionMode::Parallel] {
            for direction in [TraversalDirection::Fw, TraversalDirection::Bw, TraversalDirection::Bi] {
                for strategy in [ProcessingStrategy::GramDriven, ProcessingStrategy::TopoDriven] {
                    let config = Config::resolve(ConfigOverrides {
                        graph_filepath: Some(graph_file.path().to_path_buf()),
                        grammar_filepath: Some(grammar_file.path().to_path_buf()),
                        execution_mode: Some(mode),
                        traversal_direction: Some(direction),
                        processing_strategy: Some(strategy),
                        num_threads: Some(2),
                        ..Default::default()
                    })
                    .unwrap();

                    let (_, out) = run(&config).unwrap();
                    let mut triples: Vec<_> = out.iter().collect();
                    triples.sort();

                    match &reference {
                        None => reference = Some(triples),
                        Some(expected) => assert_eq!(
                            expected, &triples,
                            "variant {mode:?}/{direction:?}/{strategy:?} disagrees with the reference"
                        ),
                    }
                }
            }
        }
    }
}
