mod grid2d;
mod grid3d;

mod bi2d;
mod bi3d;
mod in2d;
mod in3d;
mod out2d;
mod out3d;

pub use bi2d::Bi2D;
pub use bi3d::Bi3D;
pub use in2d::In2D;
pub use in3d::In3D;
pub use out2d::Out2D;
pub use out3d::Out3D;
