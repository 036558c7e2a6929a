//! The advisory decision table.
//!
//! Gene/drug rules are evaluated in table order, then the BRCA1 rule, then
//! the no-match fallback. The gene/drug rules cover disjoint genes, so their
//! relative order never changes the outcome.

use crate::models::{Advisory, Drug, Gene, Phenotype, RiskLevel};

/// A canned advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedAdvisory {
    pub level: RiskLevel,
    pub message: &'static str,
    pub recommendation: &'static str,
}

impl CannedAdvisory {
    /// Build a fresh advisory record.
    pub fn to_advisory(&self) -> Advisory {
        Advisory::new(self.level, self.message, self.recommendation)
    }
}

/// Phenotype-specific outcome inside a gene/drug rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhenotypeBranch {
    pub phenotype: Phenotype,
    pub advisory: CannedAdvisory,
}

/// A drug/gene pairing with phenotype branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneDrugRule {
    /// Stable identifier, used in logs
    pub id: &'static str,
    pub gene: Gene,
    /// Any of these drugs triggers the rule
    pub drugs: &'static [Drug],
    pub branches: &'static [PhenotypeBranch],
    /// One-line description for the supported-rules listing
    pub summary: &'static str,
}

impl GeneDrugRule {
    /// Check whether the rule applies to a drug/gene pair.
    pub fn matches(&self, drug: Drug, gene: Option<Gene>) -> bool {
        gene == Some(self.gene) && self.drugs.contains(&drug)
    }

    /// Pick the branch for `phenotype`, or the no-alert default.
    pub fn evaluate(&self, phenotype: Option<Phenotype>) -> Advisory {
        self.branches
            .iter()
            .find(|b| Some(b.phenotype) == phenotype)
            .map(|b| b.advisory)
            .unwrap_or(NO_ALERT)
            .to_advisory()
    }
}

/// Default when a gene/drug rule matches but the phenotype carries no alert.
pub const NO_ALERT: CannedAdvisory = CannedAdvisory {
    level: RiskLevel::Info,
    message: "No major alert selected for this phenotype.",
    recommendation: "Proceed with standard care and monitoring.",
};

/// BRCA1 applies regardless of drug.
pub const BRCA1_INFO: CannedAdvisory = CannedAdvisory {
    level: RiskLevel::Info,
    message: "BRCA1 variants may indicate elevated cancer risk.",
    recommendation: "Recommend genetic counseling and guideline-based screening.",
};

pub const BRCA1_SUMMARY: &str = "BRCA1 (risk info → counseling/screening)";

/// Fallback when nothing matches.
pub const NO_MATCHING_RULE: CannedAdvisory = CannedAdvisory {
    level: RiskLevel::Info,
    message: "No matching rule for the current selection.",
    recommendation: "Try selecting a gene/drug pair listed above.",
};

pub const GENE_DRUG_RULES: &[GeneDrugRule] = &[
    GeneDrugRule {
        id: "cyp2c19-clopidogrel",
        gene: Gene::Cyp2c19,
        drugs: &[Drug::Clopidogrel],
        branches: &[
            PhenotypeBranch {
                phenotype: Phenotype::PoorMetabolizer,
                advisory: CannedAdvisory {
                    level: RiskLevel::High,
                    message: "Reduced activation → lower efficacy expected.",
                    recommendation: "Consider alternative antiplatelet therapy (per clinical guidelines).",
                },
            },
            PhenotypeBranch {
                phenotype: Phenotype::IntermediateMetabolizer,
                advisory: CannedAdvisory {
                    level: RiskLevel::Moderate,
                    message: "Potentially reduced activation → efficacy may be lower.",
                    recommendation: "Consider dose/therapy adjustment based on clinical context.",
                },
            },
        ],
        summary: "CYP2C19 + Clopidogrel (reduced activation)",
    },
    GeneDrugRule {
        id: "tpmt-azathioprine",
        gene: Gene::Tpmt,
        drugs: &[Drug::Azathioprine],
        branches: &[
            PhenotypeBranch {
                phenotype: Phenotype::LowActivity,
                advisory: CannedAdvisory {
                    level: RiskLevel::High,
                    message: "High toxicity risk (myelosuppression).",
                    recommendation: "Avoid or use substantial dose reduction + close monitoring.",
                },
            },
            PhenotypeBranch {
                phenotype: Phenotype::IntermediateActivity,
                advisory: CannedAdvisory {
                    level: RiskLevel::Moderate,
                    message: "Increased toxicity risk possible.",
                    recommendation: "Start with reduced dose and monitor blood counts closely.",
                },
            },
        ],
        summary: "TPMT + Azathioprine (myelosuppression risk)",
    },
    GeneDrugRule {
        id: "dpyd-fluoropyrimidine",
        gene: Gene::Dpyd,
        drugs: &[Drug::Fluorouracil, Drug::Capecitabine],
        branches: &[
            PhenotypeBranch {
                phenotype: Phenotype::PoorFunction,
                advisory: CannedAdvisory {
                    level: RiskLevel::High,
                    message: "Severe toxicity risk.",
                    recommendation: "Avoid fluoropyrimidines or use drastically reduced dose with specialist oversight.",
                },
            },
            PhenotypeBranch {
                phenotype: Phenotype::IntermediateFunction,
                advisory: CannedAdvisory {
                    level: RiskLevel::Moderate,
                    message: "Toxicity risk increased.",
                    recommendation: "Consider dose reduction and enhanced monitoring.",
                },
            },
        ],
        summary: "DPYD + Fluorouracil/Capecitabine (toxicity risk)",
    },
];
