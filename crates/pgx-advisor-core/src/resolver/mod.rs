//! Advisory resolver.
//!
//! Pipeline: form labels → Normalizer → Selection → Resolver → Advisory

mod normalizer;
mod rules;

pub use normalizer::*;
pub use rules::*;

use thiserror::Error;
use tracing::{debug, trace};

use crate::models::{Advisory, Drug, Gene, Phenotype, Selection};

/// Errors raised while turning free-text labels into a selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Unknown drug: {input}{}", did_you_mean(.suggestion))]
    UnknownDrug {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown gene: {input}{}", did_you_mean(.suggestion))]
    UnknownGene {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown phenotype: {input}{}", did_you_mean(.suggestion))]
    UnknownPhenotype {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Phenotype {phenotype} does not apply to gene {gene}")]
    PhenotypeGeneMismatch { phenotype: Phenotype, gene: Gene },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{}\"?)", s),
        None => String::new(),
    }
}

pub type ResolverResult<T> = Result<T, ResolverError>;

/// Maps a selection to its advisory.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    rules: &'static [GeneDrugRule],
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver over the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: GENE_DRUG_RULES,
        }
    }

    /// Resolve a selection. Returns `None` only when no drug is selected.
    pub fn resolve(&self, selection: &Selection) -> Option<Advisory> {
        let Some(drug) = selection.drug else {
            trace!("no drug selected, no advisory");
            return None;
        };

        if let Some(rule) = self.rules.iter().find(|r| r.matches(drug, selection.gene)) {
            let advisory = rule.evaluate(selection.phenotype);
            debug!(
                rule = rule.id,
                drug = %drug,
                phenotype = ?selection.phenotype.map(|p| p.label()),
                level = %advisory.level,
                "gene/drug rule matched"
            );
            return Some(advisory);
        }

        if selection.gene == Some(Gene::Brca1) {
            debug!(drug = %drug, "BRCA1 rule matched");
            return Some(BRCA1_INFO.to_advisory());
        }

        debug!(drug = %drug, gene = ?selection.gene.map(|g| g.label()), "no matching rule");
        Some(NO_MATCHING_RULE.to_advisory())
    }

    /// One-line descriptions of every supported rule.
    pub fn supported_rules(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|r| r.summary)
            .chain(std::iter::once(BRCA1_SUMMARY))
            .collect()
    }

    /// The gene/drug rule table.
    pub fn rules(&self) -> &'static [GeneDrugRule] {
        self.rules
    }
}

/// Resolve a (drug, gene, phenotype) triple with the built-in rules.
pub fn resolve_advisory(
    drug: Option<Drug>,
    gene: Option<Gene>,
    phenotype: Option<Phenotype>,
) -> Option<Advisory> {
    Resolver::new().resolve(&Selection::new(drug, gene, phenotype))
}
