pub mod error;
pub mod report;
pub mod section;
pub mod severity;

pub use error::{Error, Result};
pub use report::*;
pub use section::*;
pub use severity::*;
