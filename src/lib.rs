pub mod cli;
pub mod error;
pub mod hours;
pub mod ident;
pub mod model;
pub mod report;
pub mod source;
pub mod stats;

pub use error::{BurnrateError, Result};
