pub mod error;
pub mod format;
pub mod interval;
pub mod thresholds;
pub mod traits;
pub mod types;

pub use error::*;
pub use interval::*;
pub use thresholds::*;
pub use traits::*;
pub use types::*;
