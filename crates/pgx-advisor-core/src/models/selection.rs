//! Resolver input.

use serde::Serialize;

use super::{Drug, Gene, Phenotype};

/// The (drug, gene, phenotype) triple the resolver evaluates.
///
/// `None` means the field is unset.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Selection {
    pub drug: Option<Drug>,
    pub gene: Option<Gene>,
    pub phenotype: Option<Phenotype>,
}

impl Selection {
    /// Create a selection from its parts.
    pub fn new(drug: Option<Drug>, gene: Option<Gene>, phenotype: Option<Phenotype>) -> Self {
        Self { drug, gene, phenotype }
    }
}
