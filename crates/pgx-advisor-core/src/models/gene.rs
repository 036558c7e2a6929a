//! Genetic markers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Phenotype;

/// A pharmacogenomic or risk marker that can be selected for a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    #[serde(rename = "CYP2C19")]
    Cyp2c19,
    #[serde(rename = "TPMT")]
    Tpmt,
    #[serde(rename = "DPYD")]
    Dpyd,
    #[serde(rename = "BRCA1")]
    Brca1,
}

impl Gene {
    /// All selectable genes, in menu order.
    pub const ALL: [Gene; 4] = [Gene::Cyp2c19, Gene::Tpmt, Gene::Dpyd, Gene::Brca1];

    /// Display label (the gene symbol).
    pub fn label(&self) -> &'static str {
        match self {
            Gene::Cyp2c19 => "CYP2C19",
            Gene::Tpmt => "TPMT",
            Gene::Dpyd => "DPYD",
            Gene::Brca1 => "BRCA1",
        }
    }

    /// Phenotypes that can be reported for this gene.
    ///
    /// BRCA1 carries no phenotype classification, so its list is empty.
    pub fn phenotypes(&self) -> &'static [Phenotype] {
        match self {
            Gene::Cyp2c19 => &[
                Phenotype::NormalMetabolizer,
                Phenotype::IntermediateMetabolizer,
                Phenotype::PoorMetabolizer,
            ],
            Gene::Tpmt => &[
                Phenotype::NormalActivity,
                Phenotype::IntermediateActivity,
                Phenotype::LowActivity,
            ],
            Gene::Dpyd => &[
                Phenotype::NormalFunction,
                Phenotype::IntermediateFunction,
                Phenotype::PoorFunction,
            ],
            Gene::Brca1 => &[],
        }
    }

    /// Whether a phenotype can be chosen for this gene.
    pub fn has_phenotypes(&self) -> bool {
        !self.phenotypes().is_empty()
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phenotypes_belong_to_gene() {
        for gene in Gene::ALL {
            for phenotype in gene.phenotypes() {
                assert_eq!(phenotype.gene(), gene);
            }
        }
    }

    #[test]
    fn test_brca1_has_no_phenotypes() {
        assert!(!Gene::Brca1.has_phenotypes());
        assert!(Gene::Tpmt.has_phenotypes());
    }

    #[test]
    fn test_serde_uses_symbol() {
        let json = serde_json::to_string(&Gene::Cyp2c19).unwrap();
        assert_eq!(json, "\"CYP2C19\"");

        let gene: Gene = serde_json::from_str("\"DPYD\"").unwrap();
        assert_eq!(gene, Gene::Dpyd);
    }
}
