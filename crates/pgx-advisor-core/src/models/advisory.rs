//! Advisory records produced by the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "High risk")]
    High,
    #[serde(rename = "Moderate risk")]
    Moderate,
    Info,
}

impl RiskLevel {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High risk",
            RiskLevel::Moderate => "Moderate risk",
            RiskLevel::Info => "Info",
        }
    }

    /// True for levels that warrant a clinical alert.
    pub fn is_alert(&self) -> bool {
        !matches!(self, RiskLevel::Info)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The advisory shown for the current selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advisory {
    /// Risk level
    pub level: RiskLevel,
    /// Why the advisory applies
    pub message: String,
    /// Suggested action
    pub recommendation: String,
}

impl Advisory {
    /// Build an advisory from its parts.
    pub fn new(level: RiskLevel, message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alert() {
        assert!(RiskLevel::High.is_alert());
        assert!(RiskLevel::Moderate.is_alert());
        assert!(!RiskLevel::Info.is_alert());
    }

    #[test]
    fn test_advisory_serializes_level_label() {
        let advisory = Advisory::new(RiskLevel::Moderate, "why", "what");
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["level"], "Moderate risk");
        assert_eq!(json["message"], "why");
        assert_eq!(json["recommendation"], "what");
    }
}
