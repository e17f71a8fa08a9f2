//! Regulatory Standards
//!
//! Closed set of contexts a dataset can be judged under.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Regulatory framework selectable for re-evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Standard {
    #[default]
    #[serde(rename = "General Transaction")]
    GeneralTransaction,
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "Visa CEDP")]
    VisaCedp,
    #[serde(rename = "AML/FATF")]
    AmlFatf,
    #[serde(rename = "PCI DSS")]
    PciDss,
    #[serde(rename = "Basel II/III")]
    Basel,
}

impl Standard {
    /// Selector order
    pub const ALL: [Standard; 6] = [
        Standard::GeneralTransaction,
        Standard::Gdpr,
        Standard::VisaCedp,
        Standard::AmlFatf,
        Standard::PciDss,
        Standard::Basel,
    ];

    /// Wire / display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::GeneralTransaction => "General Transaction",
            Standard::Gdpr => "GDPR",
            Standard::VisaCedp => "Visa CEDP",
            Standard::AmlFatf => "AML/FATF",
            Standard::PciDss => "PCI DSS",
            Standard::Basel => "Basel II/III",
        }
    }
}

impl std::fmt::Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown compliance standard '{0}'")]
pub struct UnknownStandard(pub String);

impl FromStr for Standard {
    type Err = UnknownStandard;

    /// Same keyword matching the service's dispatcher uses, minus its silent
    /// fallback to General Transaction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.contains("GDPR") {
            Ok(Standard::Gdpr)
        } else if upper.contains("VISA") || upper.contains("CEDP") {
            Ok(Standard::VisaCedp)
        } else if upper.contains("AML") || upper.contains("FATF") {
            Ok(Standard::AmlFatf)
        } else if upper.contains("PCI") {
            Ok(Standard::PciDss)
        } else if upper.contains("BASEL") {
            Ok(Standard::Basel)
        } else if upper.contains("GENERAL") {
            Ok(Standard::GeneralTransaction)
        } else {
            Err(UnknownStandard(s.to_string()))
        }
    }
}
