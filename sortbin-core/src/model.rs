//! Domain data structures for detected waste and disposal bins.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::ports::SortError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Free-form name of a detected waste item, e.g. `plastic` or `battery`.
pub struct WasteLabel(pub String);

impl WasteLabel {
    /// Wrap raw detector text without any normalization.
    #[must_use]
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    /// Borrow the label exactly as it was detected.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used as the rule table key.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for WasteLabel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for WasteLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Disposal bins an item can be routed to.
pub enum BinCategory {
    /// Recyclables such as plastic, metal and glass.
    Dry,
    /// Organic and biodegradable waste.
    Wet,
    /// Batteries, chemicals and other items needing special handling.
    Hazardous,
    /// Electronic devices.
    EWaste,
    /// Personal hygiene items.
    Sanitary,
    /// Everything the rule table does not recognize.
    #[default]
    Reject,
}

impl BinCategory {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::Dry,
        Self::Wet,
        Self::Hazardous,
        Self::EWaste,
        Self::Sanitary,
        Self::Reject,
    ];

    /// Bin name shown to the user, e.g. `Dry Waste Bin`.
    #[must_use]
    pub const fn bin_name(self) -> &'static str {
        match self {
            Self::Dry => "Dry Waste Bin",
            Self::Wet => "Wet Waste Bin",
            Self::Hazardous => "Hazardous Waste Bin",
            Self::EWaste => "E-Waste Bin",
            Self::Sanitary => "Sanitary Waste Bin",
            Self::Reject => "Reject Waste Bin",
        }
    }

    /// Short machine identifier, e.g. `ewaste`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Wet => "wet",
            Self::Hazardous => "hazardous",
            Self::EWaste => "ewaste",
            Self::Sanitary => "sanitary",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for BinCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.bin_name())
    }
}

impl FromStr for BinCategory {
    type Err = SortError;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| SortError::UnknownCategory(slug.to_owned()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Outcome of one detect-then-classify pass.
pub struct Classification {
    /// Label as reported by the detector.
    pub label: WasteLabel,
    /// Bin recommended for the label.
    pub bin: BinCategory,
    /// Name of the detector that produced the label.
    pub detector: String,
    /// Local time at which the reading was taken.
    pub detected_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_bin_names() {
        assert_eq!(BinCategory::EWaste.to_string(), "E-Waste Bin");
        assert_eq!(BinCategory::Reject.to_string(), "Reject Waste Bin");
    }

    #[test]
    fn slugs_parse_back_case_insensitively() {
        for category in BinCategory::ALL {
            assert_eq!(category.slug().parse::<BinCategory>().ok(), Some(category));
        }
        assert_eq!("EWASTE".parse::<BinCategory>().ok(), Some(BinCategory::EWaste));
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "compost".parse::<BinCategory>().unwrap_err();
        assert!(matches!(err, SortError::UnknownCategory(ref slug) if slug == "compost"));
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&BinCategory::EWaste).unwrap();
        assert_eq!(json, "\"ewaste\"");
        let label = serde_json::to_string(&WasteLabel::new("Plastic")).unwrap();
        assert_eq!(label, "\"Plastic\"");
    }

    #[test]
    fn default_category_is_reject() {
        assert_eq!(BinCategory::default(), BinCategory::Reject);
    }

    #[test]
    fn normalization_keeps_whitespace() {
        assert_eq!(WasteLabel::new(" Plastic ").normalized(), " plastic ");
    }
}
