//! Export module for advisory reports.

mod report;

pub use report::*;
