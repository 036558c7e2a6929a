//! Drugs covered by the advisory rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A drug the clinician can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Drug {
    Clopidogrel,
    Azathioprine,
    #[serde(rename = "Fluorouracil (5-FU)")]
    Fluorouracil,
    Capecitabine,
}

impl Drug {
    /// All selectable drugs, in menu order.
    pub const ALL: [Drug; 4] = [
        Drug::Clopidogrel,
        Drug::Azathioprine,
        Drug::Fluorouracil,
        Drug::Capecitabine,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Drug::Clopidogrel => "Clopidogrel",
            Drug::Azathioprine => "Azathioprine",
            Drug::Fluorouracil => "Fluorouracil (5-FU)",
            Drug::Capecitabine => "Capecitabine",
        }
    }

    /// Fluoropyrimidines share the DPYD rule.
    pub fn is_fluoropyrimidine(&self) -> bool {
        matches!(self, Drug::Fluorouracil | Drug::Capecitabine)
    }
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluoropyrimidines() {
        assert!(Drug::Fluorouracil.is_fluoropyrimidine());
        assert!(Drug::Capecitabine.is_fluoropyrimidine());
        assert!(!Drug::Clopidogrel.is_fluoropyrimidine());
        assert!(!Drug::Azathioprine.is_fluoropyrimidine());
    }

    #[test]
    fn test_label_round_trips_through_serde() {
        let json = serde_json::to_string(&Drug::Fluorouracil).unwrap();
        assert_eq!(json, "\"Fluorouracil (5-FU)\"");
        assert_eq!(Drug::Fluorouracil.to_string(), "Fluorouracil (5-FU)");
    }
}
