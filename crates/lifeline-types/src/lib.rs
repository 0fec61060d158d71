pub mod call;
pub mod domain;
pub mod error;

pub use call::*;
pub use domain::*;
pub use error::{Error, Result};
