pub mod indicators;
pub mod moving_average;
pub mod signals;


pub use indicators::*;
pub use moving_average::*;
pub use signals::*;
