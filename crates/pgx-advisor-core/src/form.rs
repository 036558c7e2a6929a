//! Clinician form state.
//!
//! Holds the inputs of the advisory form and keeps the phenotype consistent
//! with the selected gene: changing the gene always clears the phenotype.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Advisory, Drug, Gene, Phenotype, Selection};
use crate::resolver::Resolver;

/// Form errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Phenotype {phenotype} is not available for gene {gene}")]
    PhenotypeMismatch { phenotype: Phenotype, gene: Gene },

    #[error("Phenotype selection is disabled for the current gene")]
    PhenotypeDisabled,
}

pub type FormResult<T> = Result<T, FormError>;

/// Demo patient loaded by [`FormState::load_demo`].
pub const DEMO_PATIENT_NAME: &str = "Demo Patient A";
pub const DEMO_AGE: &str = "26";
pub const DEMO_CONDITION: &str = "High ferritin, low neutrophil (demo)";

/// Inputs of the advisory form.
///
/// Patient name, age and condition are free text and never reach the resolver.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FormState {
    patient_name: String,
    age: String,
    condition: String,
    drug: Option<Drug>,
    gene: Option<Gene>,
    phenotype: Option<Phenotype>,
}

impl FormState {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn drug(&self) -> Option<Drug> {
        self.drug
    }

    pub fn gene(&self) -> Option<Gene> {
        self.gene
    }

    pub fn phenotype(&self) -> Option<Phenotype> {
        self.phenotype
    }

    pub fn set_patient_name(&mut self, name: impl Into<String>) {
        self.patient_name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    pub fn set_condition(&mut self, condition: impl Into<String>) {
        self.condition = condition.into();
    }

    pub fn set_drug(&mut self, drug: Option<Drug>) {
        self.drug = drug;
    }

    /// Select a gene. Clears the phenotype, even if the gene is unchanged.
    pub fn set_gene(&mut self, gene: Option<Gene>) {
        if let Some(previous) = self.phenotype.take() {
            debug!(phenotype = %previous, "gene changed, phenotype cleared");
        }
        self.gene = gene;
    }

    /// Select a phenotype from the current gene's options.
    pub fn set_phenotype(&mut self, phenotype: Option<Phenotype>) -> FormResult<()> {
        let Some(phenotype) = phenotype else {
            self.phenotype = None;
            return Ok(());
        };

        match self.gene {
            Some(gene) if gene.has_phenotypes() => {
                if !phenotype.is_valid_for(gene) {
                    return Err(FormError::PhenotypeMismatch { phenotype, gene });
                }
                self.phenotype = Some(phenotype);
                Ok(())
            }
            _ => Err(FormError::PhenotypeDisabled),
        }
    }

    /// Phenotypes offered for the current gene.
    pub fn phenotype_options(&self) -> &'static [Phenotype] {
        self.gene.map(|g| g.phenotypes()).unwrap_or(&[])
    }

    /// Whether the phenotype selection is enabled (gene set and not BRCA1).
    pub fn phenotype_enabled(&self) -> bool {
        self.gene.is_some_and(|g| g.has_phenotypes())
    }

    /// The resolver input for the current form.
    pub fn selection(&self) -> Selection {
        Selection::new(self.drug, self.gene, self.phenotype)
    }

    /// Resolve the current selection with the built-in rules.
    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory_with(&Resolver::new())
    }

    /// Resolve the current selection with `resolver`.
    pub fn advisory_with(&self, resolver: &Resolver) -> Option<Advisory> {
        resolver.resolve(&self.selection())
    }

    /// Fill the form with the demo patient.
    pub fn load_demo(&mut self) {
        debug!("loading demo patient");
        *self = Self {
            patient_name: DEMO_PATIENT_NAME.to_string(),
            age: DEMO_AGE.to_string(),
            condition: DEMO_CONDITION.to_string(),
            drug: Some(Drug::Azathioprine),
            gene: Some(Gene::Tpmt),
            phenotype: Some(Phenotype::IntermediateActivity),
        };
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        debug!("clearing form");
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new();
        assert_eq!(form.patient_name(), "");
        assert_eq!(form.selection(), Selection::default());
        assert!(form.advisory().is_none());
        assert!(!form.phenotype_enabled());
    }

    #[test]
    fn test_changing_gene_clears_phenotype() {
        let mut form = FormState::new();
        form.set_gene(Some(Gene::Cyp2c19));
        form.set_phenotype(Some(Phenotype::PoorMetabolizer)).unwrap();

        form.set_gene(Some(Gene::Tpmt));
        assert_eq!(form.phenotype(), None);

        form.set_phenotype(Some(Phenotype::LowActivity)).unwrap();
        form.set_gene(Some(Gene::Tpmt));
        assert_eq!(form.phenotype(), None);

        form.set_phenotype(Some(Phenotype::LowActivity)).unwrap();
        form.set_gene(None);
        assert_eq!(form.phenotype(), None);
    }

    #[test]
    fn test_phenotype_must_match_gene() {
        let mut form = FormState::new();
        form.set_gene(Some(Gene::Dpyd));

        let err = form.set_phenotype(Some(Phenotype::LowActivity)).unwrap_err();
        assert_eq!(
            err,
            FormError::PhenotypeMismatch {
                phenotype: Phenotype::LowActivity,
                gene: Gene::Dpyd,
            }
        );
        assert_eq!(form.phenotype(), None);
    }

    #[test]
    fn test_phenotype_disabled_without_options() {
        let mut form = FormState::new();
        assert_eq!(
            form.set_phenotype(Some(Phenotype::PoorFunction)),
            Err(FormError::PhenotypeDisabled)
        );

        form.set_gene(Some(Gene::Brca1));
        assert!(!form.phenotype_enabled());
        assert!(form.phenotype_options().is_empty());
        assert_eq!(
            form.set_phenotype(Some(Phenotype::PoorFunction)),
            Err(FormError::PhenotypeDisabled)
        );

        // Clearing is always allowed
        assert_eq!(form.set_phenotype(None), Ok(()));
    }

    #[test]
    fn test_phenotype_options_follow_gene() {
        let mut form = FormState::new();
        form.set_gene(Some(Gene::Cyp2c19));
        assert!(form.phenotype_enabled());
        assert_eq!(form.phenotype_options(), Gene::Cyp2c19.phenotypes());
    }

    #[test]
    fn test_load_demo() {
        let mut form = FormState::new();
        form.load_demo();

        assert_eq!(form.patient_name(), DEMO_PATIENT_NAME);
        assert_eq!(form.age(), DEMO_AGE);
        assert_eq!(form.condition(), DEMO_CONDITION);
        assert_eq!(form.drug(), Some(Drug::Azathioprine));
        assert_eq!(form.gene(), Some(Gene::Tpmt));
        assert_eq!(form.phenotype(), Some(Phenotype::IntermediateActivity));

        let advisory = form.advisory().unwrap();
        assert_eq!(advisory.level, RiskLevel::Moderate);
    }

    #[test]
    fn test_clear() {
        let mut form = FormState::new();
        form.load_demo();
        form.clear();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_text_fields_do_not_affect_advisory() {
        let mut form = FormState::new();
        form.set_drug(Some(Drug::Clopidogrel));
        form.set_gene(Some(Gene::Cyp2c19));
        let before = form.advisory();

        form.set_patient_name("Someone");
        form.set_age("52");
        form.set_condition("post-PCI");
        assert_eq!(form.advisory(), before);
    }
}
