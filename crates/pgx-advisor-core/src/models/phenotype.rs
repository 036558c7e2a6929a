//! Gene-specific phenotype classifications.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Gene;

/// Functional classification reported for a gene.
///
/// Each variant belongs to exactly one gene; see [`Gene::phenotypes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phenotype {
    // CYP2C19
    #[serde(rename = "Normal metabolizer")]
    NormalMetabolizer,
    #[serde(rename = "Intermediate metabolizer")]
    IntermediateMetabolizer,
    #[serde(rename = "Poor metabolizer")]
    PoorMetabolizer,

    // TPMT
    #[serde(rename = "Normal activity")]
    NormalActivity,
    #[serde(rename = "Intermediate activity")]
    IntermediateActivity,
    #[serde(rename = "Low activity")]
    LowActivity,

    // DPYD
    #[serde(rename = "Normal function")]
    NormalFunction,
    #[serde(rename = "Intermediate function")]
    IntermediateFunction,
    #[serde(rename = "Poor function")]
    PoorFunction,
}

impl Phenotype {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Phenotype::NormalMetabolizer => "Normal metabolizer",
            Phenotype::IntermediateMetabolizer => "Intermediate metabolizer",
            Phenotype::PoorMetabolizer => "Poor metabolizer",
            Phenotype::NormalActivity => "Normal activity",
            Phenotype::IntermediateActivity => "Intermediate activity",
            Phenotype::LowActivity => "Low activity",
            Phenotype::NormalFunction => "Normal function",
            Phenotype::IntermediateFunction => "Intermediate function",
            Phenotype::PoorFunction => "Poor function",
        }
    }

    /// The gene this phenotype classifies.
    pub fn gene(&self) -> Gene {
        match self {
            Phenotype::NormalMetabolizer
            | Phenotype::IntermediateMetabolizer
            | Phenotype::PoorMetabolizer => Gene::Cyp2c19,
            Phenotype::NormalActivity
            | Phenotype::IntermediateActivity
            | Phenotype::LowActivity => Gene::Tpmt,
            Phenotype::NormalFunction
            | Phenotype::IntermediateFunction
            | Phenotype::PoorFunction => Gene::Dpyd,
        }
    }

    /// Check whether this phenotype is valid for `gene`.
    pub fn is_valid_for(&self, gene: Gene) -> bool {
        self.gene() == gene
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
