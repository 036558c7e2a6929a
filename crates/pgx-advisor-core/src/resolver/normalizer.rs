//! Label normalizer.
//!
//! Handles:
//! - Case/whitespace folding ("  tpmt " → TPMT)
//! - Alias expansion (plavix→clopidogrel, 5-fu→fluorouracil, pm→poor metabolizer)
//! - Placeholder labels ("No drug selected", "Select gene") → unset
//! - Gene-scoped short phenotype names ("poor" with DPYD → Poor function)

use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::{Drug, Gene, Phenotype};

use super::{ResolverError, ResolverResult};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Labels that mean "nothing selected".
const PLACEHOLDERS: &[&str] = &[
    "",
    "no drug selected",
    "select drug",
    "select gene",
    "select phenotype",
    "none",
];

/// Parses free-text drug, gene and phenotype labels.
pub struct Normalizer {
    /// Drug aliases: lowercase label → drug
    drugs: HashMap<String, Drug>,
    /// Gene aliases: lowercase label → gene
    genes: HashMap<String, Gene>,
    /// Phenotype aliases: lowercase label → phenotype
    phenotypes: HashMap<String, Phenotype>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a new normalizer with default mappings.
    pub fn new() -> Self {
        Self {
            drugs: Self::default_drugs(),
            genes: Self::default_genes(),
            phenotypes: Self::default_phenotypes(),
        }
    }

    /// Parse a drug label. Placeholders parse to `None`.
    pub fn parse_drug(&self, input: &str) -> ResolverResult<Option<Drug>> {
        let key = fold(input);
        if is_placeholder(&key) {
            return Ok(None);
        }
        self.drugs
            .get(&key)
            .copied()
            .map(Some)
            .ok_or_else(|| ResolverError::UnknownDrug {
                input: input.trim().to_string(),
                suggestion: suggest(&key, self.drugs.iter(), |d| d.label()),
            })
    }

    /// Parse a gene label. Placeholders parse to `None`.
    pub fn parse_gene(&self, input: &str) -> ResolverResult<Option<Gene>> {
        let key = fold(input);
        if is_placeholder(&key) {
            return Ok(None);
        }
        self.genes
            .get(&key)
            .copied()
            .map(Some)
            .ok_or_else(|| ResolverError::UnknownGene {
                input: input.trim().to_string(),
                suggestion: suggest(&key, self.genes.iter(), |g| g.label()),
            })
    }

    /// Parse a phenotype label, optionally scoped to a gene.
    ///
    /// With a gene, the first word of the gene's phenotype labels is accepted
    /// on its own ("intermediate" with TPMT → Intermediate activity) and a
    /// phenotype belonging to another gene is rejected.
    pub fn parse_phenotype(
        &self,
        input: &str,
        gene: Option<Gene>,
    ) -> ResolverResult<Option<Phenotype>> {
        let key = fold(input);
        if is_placeholder(&key) {
            return Ok(None);
        }

        let found = self.phenotypes.get(&key).copied().or_else(|| {
            gene.and_then(|g| {
                g.phenotypes()
                    .iter()
                    .copied()
                    .find(|p| p.label().to_lowercase().split(' ').next() == Some(key.as_str()))
            })
        });

        match (found, gene) {
            (Some(phenotype), Some(gene)) if !phenotype.is_valid_for(gene) => {
                Err(ResolverError::PhenotypeGeneMismatch { phenotype, gene })
            }
            (Some(phenotype), _) => Ok(Some(phenotype)),
            (None, _) => Err(ResolverError::UnknownPhenotype {
                input: input.trim().to_string(),
                suggestion: suggest(
                    &key,
                    self.phenotypes
                        .iter()
                        .filter(|(_, p)| gene.map_or(true, |g| p.is_valid_for(g))),
                    |p| p.label(),
                ),
            }),
        }
    }

    /// Add a custom drug alias.
    pub fn add_drug_alias(&mut self, alias: &str, drug: Drug) {
        self.drugs.insert(fold(alias), drug);
    }

    /// Add a custom gene alias.
    pub fn add_gene_alias(&mut self, alias: &str, gene: Gene) {
        self.genes.insert(fold(alias), gene);
    }

    /// Add a custom phenotype alias.
    pub fn add_phenotype_alias(&mut self, alias: &str, phenotype: Phenotype) {
        self.phenotypes.insert(fold(alias), phenotype);
    }

    /// Default drug mappings: labels, generic names and brands.
    fn default_drugs() -> HashMap<String, Drug> {
        let mut map = HashMap::new();

        for drug in Drug::ALL {
            map.insert(drug.label().to_lowercase(), drug);
        }

        // Antiplatelets
        map.insert("plavix".into(), Drug::Clopidogrel);

        // Thiopurines
        map.insert("imuran".into(), Drug::Azathioprine);
        map.insert("azasan".into(), Drug::Azathioprine);

        // Fluoropyrimidines
        map.insert("fluorouracil".into(), Drug::Fluorouracil);
        map.insert("5-fu".into(), Drug::Fluorouracil);
        map.insert("5fu".into(), Drug::Fluorouracil);
        map.insert("5-fluorouracil".into(), Drug::Fluorouracil);
        map.insert("adrucil".into(), Drug::Fluorouracil);
        map.insert("xeloda".into(), Drug::Capecitabine);

        map
    }

    /// Default gene mappings.
    fn default_genes() -> HashMap<String, Gene> {
        let mut map = HashMap::new();

        for gene in Gene::ALL {
            map.insert(gene.label().to_lowercase(), gene);
        }

        map.insert("2c19".into(), Gene::Cyp2c19);
        map.insert("dpd".into(), Gene::Dpyd);

        map
    }

    /// Default phenotype mappings.
    fn default_phenotypes() -> HashMap<String, Phenotype> {
        let mut map = HashMap::new();

        for gene in Gene::ALL {
            for &phenotype in gene.phenotypes() {
                map.insert(phenotype.label().to_lowercase(), phenotype);
            }
        }

        // CYP2C19 abbreviations
        map.insert("nm".into(), Phenotype::NormalMetabolizer);
        map.insert("im".into(), Phenotype::IntermediateMetabolizer);
        map.insert("pm".into(), Phenotype::PoorMetabolizer);
        map.insert("extensive metabolizer".into(), Phenotype::NormalMetabolizer);

        // TPMT
        map.insert("deficient activity".into(), Phenotype::LowActivity);

        // DPYD
        map.insert("dpd deficient".into(), Phenotype::PoorFunction);

        map
    }
}

/// Lowercase and collapse whitespace.
fn fold(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn is_placeholder(key: &str) -> bool {
    PLACEHOLDERS.contains(&key)
}

/// Closest known label for an unrecognized key, if any is close enough.
///
/// Equal scores go to the alphabetically first alias.
fn suggest<'a, T: Copy + 'a>(
    key: &str,
    candidates: impl Iterator<Item = (&'a String, &'a T)>,
    label: impl Fn(T) -> &'static str,
) -> Option<String> {
    candidates
        .map(|(alias, &value)| (jaro_winkler(key, alias), alias, value))
        .filter(|(score, _, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0).then_with(|| b.1.cmp(a.1)))
        .map(|(_, _, value)| label(value).to_string())
}
