//! Frontier cells, dedup indexes, and the twelve edge-store variants that
//! back CFL-reachability saturation: six serial stores partitioned by
//! label (`Out3D`, `In3D`, `Bi3D`) or by vertex alone (`Out2D`, `In2D`,
//! `Bi2D`), plus their six concurrent counterparts (`Out3DConcurrent`,
//! `In3DConcurrent`, `Bi3DConcurrent`, `Out2DConcurrent`,
//! `In2DConcurrent`, `Bi2DConcurrent`) built on `dashmap`/`parking_lot`
//! in place of the serial `HashSet`/`Vec` pair.

pub mod cell;
pub mod concurrent;
pub mod dedup;
pub mod result;
mod stores;
mod traits;

pub use cell::{FrontierCell2D, FrontierCell3D};
pub use dedup::DedupIndex;
pub use result::{convert_in_to_out, convert_out_to_in};
pub use stores::{Bi2D, Bi3D, In2D, In3D, Out2D, Out3D};
pub use traits::EdgeStore;
