pub mod cell;
pub mod dedup;
mod traits;

mod grid2d;
mod grid3d;

mod bi2d;
mod bi3d;
mod in2d;
mod in3d;
mod out2d;
mod out3d;

pub use bi2d::Bi2DConcurrent;
pub use bi3d::Bi3DConcurrent;
pub use in2d::In2DConcurrent;
pub use in3d::In3DConcurrent;
pub use out2d::Out2DConcurrent;
pub use out3d::Out3DConcurrent;
pub use traits::ConcurrentEdgeStore;
