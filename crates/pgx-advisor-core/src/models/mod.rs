//! Domain models for the pgx-advisor system.

mod advisory;
mod drug;
mod gene;
mod phenotype;
mod selection;

pub use advisory::*;
pub use drug::*;
pub use gene::*;
pub use phenotype::*;
pub use selection::*;
