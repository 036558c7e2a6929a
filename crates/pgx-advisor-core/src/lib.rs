//! PGx Advisor Core Library
//!
//! Pharmacogenomic decision support: maps a (drug, gene, phenotype) selection
//! to a canned risk advisory.
//!
//! # Architecture
//!
//! ```text
//! Clinician input (labels)
//!         │
//!         ▼
//!    Normalizer ──────────► FormState ──── gene change clears phenotype
//!                               │
//!                           Selection
//!                               │
//!                               ▼
//!                ┌──────────────────────────────┐
//!                │           Resolver           │
//!                │  1. no drug      → none      │
//!                │  2. gene/drug rule table     │
//!                │  3. BRCA1        → info      │
//!                │  4. otherwise    → no match  │
//!                └──────────────┬───────────────┘
//!                               │
//!                               ▼
//!                     Advisory → AdvisoryReport (JSON / text)
//! ```
//!
//! # Core Principle
//!
//! **Advisories are decision support only.** Every report carries the demo
//! disclaimer.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Drug, Gene, Phenotype, Advisory, Selection)
//! - [`resolver`]: Rule table, resolver and label normalizer
//! - [`form`]: Clinician form state
//! - [`export`]: Advisory report export

pub mod export;
pub mod form;
pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use export::AdvisoryReport;
pub use form::{FormError, FormState};
pub use models::{Advisory, Drug, Gene, Phenotype, RiskLevel, Selection};
pub use resolver::{resolve_advisory, Normalizer, Resolver, ResolverError};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PgxAdvisorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ResolverError> for PgxAdvisorError {
    fn from(e: ResolverError) -> Self {
        PgxAdvisorError::InvalidInput(e.to_string())
    }
}

impl From<FormError> for PgxAdvisorError {
    fn from(e: FormError) -> Self {
        PgxAdvisorError::InvalidSelection(e.to_string())
    }
}

impl From<serde_json::Error> for PgxAdvisorError {
    fn from(e: serde_json::Error) -> Self {
        PgxAdvisorError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PgxAdvisorError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PgxAdvisorError::InternalError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an advisor with an empty form.
#[uniffi::export]
pub fn new_advisor() -> Arc<PgxAdvisor> {
    Arc::new(PgxAdvisor {
        form: Mutex::new(FormState::new()),
        normalizer: Normalizer::new(),
        resolver: Resolver::new(),
    })
}

/// Labels of all selectable drugs.
#[uniffi::export]
pub fn drug_options() -> Vec<String> {
    Drug::ALL.iter().map(|d| d.label().to_string()).collect()
}

/// Labels of all selectable genes.
#[uniffi::export]
pub fn gene_options() -> Vec<String> {
    Gene::ALL.iter().map(|g| g.label().to_string()).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe form wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PgxAdvisor {
    form: Mutex<FormState>,
    normalizer: Normalizer,
    resolver: Resolver,
}

#[uniffi::export]
impl PgxAdvisor {
    // =========================================================================
    // Patient Fields
    // =========================================================================

    pub fn set_patient_name(&self, name: String) -> Result<(), PgxAdvisorError> {
        self.form.lock()?.set_patient_name(name);
        Ok(())
    }

    pub fn set_age(&self, age: String) -> Result<(), PgxAdvisorError> {
        self.form.lock()?.set_age(age);
        Ok(())
    }

    pub fn set_condition(&self, condition: String) -> Result<(), PgxAdvisorError> {
        self.form.lock()?.set_condition(condition);
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a drug by label ("No drug selected" clears it).
    pub fn set_drug(&self, label: String) -> Result<(), PgxAdvisorError> {
        let drug = self.normalizer.parse_drug(&label)?;
        self.form.lock()?.set_drug(drug);
        Ok(())
    }

    /// Select a gene by label. Clears the phenotype.
    pub fn set_gene(&self, label: String) -> Result<(), PgxAdvisorError> {
        let gene = self.normalizer.parse_gene(&label)?;
        self.form.lock()?.set_gene(gene);
        Ok(())
    }

    /// Select a phenotype by label, scoped to the current gene.
    pub fn set_phenotype(&self, label: String) -> Result<(), PgxAdvisorError> {
        let mut form = self.form.lock()?;
        let phenotype = self.normalizer.parse_phenotype(&label, form.gene())?;
        form.set_phenotype(phenotype)?;
        Ok(())
    }

    /// Phenotype labels offered for the current gene.
    pub fn phenotype_options(&self) -> Result<Vec<String>, PgxAdvisorError> {
        let form = self.form.lock()?;
        Ok(form
            .phenotype_options()
            .iter()
            .map(|p| p.label().to_string())
            .collect())
    }

    /// Whether the phenotype selection should be enabled.
    pub fn phenotype_enabled(&self) -> Result<bool, PgxAdvisorError> {
        Ok(self.form.lock()?.phenotype_enabled())
    }

    /// Snapshot of the form.
    pub fn form(&self) -> Result<FfiFormState, PgxAdvisorError> {
        let form = self.form.lock()?;
        Ok(FfiFormState::from(&*form))
    }

    // =========================================================================
    // Actions
    // =========================================================================

    pub fn load_demo(&self) -> Result<(), PgxAdvisorError> {
        self.form.lock()?.load_demo();
        Ok(())
    }

    pub fn clear(&self) -> Result<(), PgxAdvisorError> {
        self.form.lock()?.clear();
        Ok(())
    }

    // =========================================================================
    // Advisory
    // =========================================================================

    /// Advisory for the current form, `None` when no drug is selected.
    pub fn current_advisory(&self) -> Result<Option<FfiAdvisory>, PgxAdvisorError> {
        let form = self.form.lock()?;
        Ok(form.advisory_with(&self.resolver).map(FfiAdvisory::from))
    }

    /// One-line descriptions of the supported rules.
    pub fn supported_rules(&self) -> Vec<String> {
        self.resolver
            .supported_rules()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Export the current form and advisory as a JSON report.
    pub fn export_report_json(&self) -> Result<String, PgxAdvisorError> {
        let form = self.form.lock()?;
        let report = AdvisoryReport::from_form_with(&form, &self.resolver);
        Ok(report.to_json()?)
    }

    /// Export the current form and advisory as plain text.
    pub fn export_report_text(&self) -> Result<String, PgxAdvisorError> {
        let form = self.form.lock()?;
        Ok(AdvisoryReport::from_form_with(&form, &self.resolver).to_text())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe advisory.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdvisory {
    pub level: String,
    pub is_alert: bool,
    pub message: String,
    pub recommendation: String,
}

impl From<Advisory> for FfiAdvisory {
    fn from(advisory: Advisory) -> Self {
        Self {
            level: advisory.level.label().to_string(),
            is_alert: advisory.level.is_alert(),
            message: advisory.message,
            recommendation: advisory.recommendation,
        }
    }
}

/// FFI-safe form snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFormState {
    pub patient_name: String,
    pub age: String,
    pub condition: String,
    pub drug: Option<String>,
    pub gene: Option<String>,
    pub phenotype: Option<String>,
}

impl From<&FormState> for FfiFormState {
    fn from(form: &FormState) -> Self {
        Self {
            patient_name: form.patient_name().to_string(),
            age: form.age().to_string(),
            condition: form.condition().to_string(),
            drug: form.drug().map(|d| d.label().to_string()),
            gene: form.gene().map(|g| g.label().to_string()),
            phenotype: form.phenotype().map(|p| p.label().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_by_labels() {
        let advisor = new_advisor();
        advisor.set_drug("Clopidogrel".into()).unwrap();
        advisor.set_gene("CYP2C19".into()).unwrap();
        advisor.set_phenotype("Poor metabolizer".into()).unwrap();

        let advisory = advisor.current_advisory().unwrap().unwrap();
        assert_eq!(advisory.level, "High risk");
        assert!(advisory.is_alert);
    }

    #[test]
    fn test_advisor_gene_change_clears_phenotype() {
        let advisor = new_advisor();
        advisor.set_gene("TPMT".into()).unwrap();
        advisor.set_phenotype("Low activity".into()).unwrap();
        advisor.set_gene("DPYD".into()).unwrap();

        assert_eq!(advisor.form().unwrap().phenotype, None);
        assert_eq!(
            advisor.phenotype_options().unwrap(),
            vec!["Normal function", "Intermediate function", "Poor function"]
        );
    }

    #[test]
    fn test_advisor_rejects_unknown_labels() {
        let advisor = new_advisor();
        let err = advisor.set_drug("aspirin".into()).unwrap_err();
        assert!(matches!(err, PgxAdvisorError::InvalidInput(_)));

        advisor.set_gene("BRCA1".into()).unwrap();
        let err = advisor.set_phenotype("Poor function".into()).unwrap_err();
        assert!(matches!(err, PgxAdvisorError::InvalidInput(_)));
    }

    #[test]
    fn test_advisor_demo_and_clear() {
        let advisor = new_advisor();
        advisor.load_demo().unwrap();

        let form = advisor.form().unwrap();
        assert_eq!(form.drug.as_deref(), Some("Azathioprine"));
        assert_eq!(
            advisor.current_advisory().unwrap().map(|a| a.level),
            Some("Moderate risk".to_string())
        );

        advisor.clear().unwrap();
        assert!(advisor.current_advisory().unwrap().is_none());
        assert_eq!(advisor.form().unwrap().patient_name, "");
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(drug_options().len(), 4);
        assert_eq!(gene_options(), vec!["CYP2C19", "TPMT", "DPYD", "BRCA1"]);
        assert_eq!(new_advisor().supported_rules().len(), 4);
    }
}
