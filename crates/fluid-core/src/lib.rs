pub mod color;
pub mod constants;
pub mod effects;
pub mod frame;
pub mod params;
pub mod pointer;

pub use effects::*;
pub use frame::*;
pub use params::*;
pub use pointer::*;
