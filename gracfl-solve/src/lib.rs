//! Saturation strategies: six serial (direction × rule-matching policy)
//! and six parallel counterparts, all presenting the same [`Solver`]
//! contract to the driver.

mod bi_gram;
mod bi_gram_parallel;
mod bi_topo;
mod bi_topo_parallel;
mod bw_gram;
mod bw_gram_parallel;
mod bw_topo;
mod bw_topo_parallel;
mod fw_gram;
mod fw_gram_parallel;
mod fw_topo;
mod fw_topo_parallel;
mod traits;

pub use bi_gram::BiGram;
pub use bi_gram_parallel::BiGramParallel;
pub use bi_topo::BiTopo;
pub use bi_topo_parallel::BiTopoParallel;
pub use bw_gram::BwGram;
pub use bw_gram_parallel::BwGramParallel;
pub use bw_topo::BwTopo;
pub use bw_topo_parallel::BwTopoParallel;
pub use fw_gram::FwGram;
pub use fw_gram_parallel::FwGramParallel;
pub use fw_topo::FwTopo;
pub use fw_topo_parallel::FwTopoParallel;
pub use traits::Solver;

/// Default static chunk size for the parallel outer vertex loop.
pub const DEFAULT_CHUNK_SIZE: usize = 512;
