//! Advisory report export.

use serde::{Deserialize, Serialize};

use crate::form::FormState;
use crate::models::{Advisory, Drug, Gene, Phenotype};
use crate::resolver::Resolver;

pub const DISCLAIMER: &str = "Demo only — not clinical advice.";

/// Shown in place of an advisory when no drug is selected.
pub const SELECTION_PROMPT: &str =
    "Select a drug + gene (and phenotype if available) to see decision support output.";

/// One evaluation of the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Patient fields as entered
    pub patient: ReportPatient,
    /// Selection labels
    pub selection: ReportSelection,
    /// Advisory, absent when no drug was selected
    pub advisory: Option<Advisory>,
    pub disclaimer: String,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report ID (UUID v4)
    pub report_id: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
}

/// Free-text patient fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPatient {
    pub name: String,
    pub age: String,
    pub condition: String,
}

/// The selection the advisory was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSelection {
    pub drug: Option<Drug>,
    pub gene: Option<Gene>,
    pub phenotype: Option<Phenotype>,
}

impl AdvisoryReport {
    /// Evaluate `form` with the built-in rules.
    pub fn from_form(form: &FormState) -> Self {
        Self::from_form_with(form, &Resolver::new())
    }

    /// Evaluate `form` with `resolver`.
    pub fn from_form_with(form: &FormState, resolver: &Resolver) -> Self {
        Self {
            metadata: ReportMetadata {
                report_id: uuid::Uuid::new_v4().to_string(),
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
            patient: ReportPatient {
                name: form.patient_name().to_string(),
                age: form.age().to_string(),
                condition: form.condition().to_string(),
            },
            selection: ReportSelection {
                drug: form.drug(),
                gene: form.gene(),
                phenotype: form.phenotype(),
            },
            advisory: form.advisory_with(resolver),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as plain text, laid out like the recommendation card.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if !self.patient.name.is_empty() {
            out.push_str(&format!("Patient: {}\n", self.patient.name));
        }
        if !self.patient.age.is_empty() {
            out.push_str(&format!("Age: {}\n", self.patient.age));
        }
        if !self.patient.condition.is_empty() {
            out.push_str(&format!("Condition: {}\n", self.patient.condition));
        }

        out.push_str(&format!(
            "Drug: {}\nGene: {}\nPhenotype: {}\n\n",
            self.selection.drug.map_or("No drug selected", |d| d.label()),
            self.selection.gene.map_or("-", |g| g.label()),
            self.selection.phenotype.map_or("-", |p| p.label()),
        ));

        match &self.advisory {
            Some(advisory) => {
                out.push_str(&format!("Risk level: {}\n", advisory.level));
                out.push_str(&format!("Why: {}\n", advisory.message));
                out.push_str(&format!("Suggested action: {}\n", advisory.recommendation));
            }
            None => {
                out.push_str(SELECTION_PROMPT);
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&self.disclaimer);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    #[test]
    fn test_demo_report() {
        let mut form = FormState::new();
        form.load_demo();

        let report = AdvisoryReport::from_form(&form);
        assert_eq!(report.metadata.report_id.len(), 36);
        assert_eq!(report.patient.name, "Demo Patient A");
        assert_eq!(report.advisory.as_ref().map(|a| a.level), Some(RiskLevel::Moderate));

        let text = report.to_text();
        assert!(text.contains("Patient: Demo Patient A\n"));
        assert!(text.contains("Drug: Azathioprine\n"));
        assert!(text.contains("Phenotype: Intermediate activity\n"));
        assert!(text.contains("Risk level: Moderate risk\n"));
        assert!(text.contains("Why: Increased toxicity risk possible.\n"));
        assert!(text.ends_with("Demo only — not clinical advice.\n"));
    }

    #[test]
    fn test_empty_form_prompts_for_selection() {
        let report = AdvisoryReport::from_form(&FormState::new());
        assert!(report.advisory.is_none());

        let text = report.to_text();
        assert!(!text.contains("Patient:"));
        assert!(text.contains("Drug: No drug selected\n"));
        assert!(text.contains(SELECTION_PROMPT));
        assert!(!text.contains("Risk level:"));
    }

    #[test]
    fn test_json_uses_labels() {
        let mut form = FormState::new();
        form.set_drug(Some(Drug::Fluorouracil));
        form.set_gene(Some(Gene::Dpyd));
        form.set_phenotype(Some(Phenotype::PoorFunction)).unwrap();

        let json = AdvisoryReport::from_form(&form).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["selection"]["drug"], "Fluorouracil (5-FU)");
        assert_eq!(value["selection"]["phenotype"], "Poor function");
        assert_eq!(value["advisory"]["level"], "High risk");
        assert_eq!(value["disclaimer"], DISCLAIMER);
    }
}
