//! Rule table mapping lower-cased waste labels to bins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use crate::model::{BinCategory, WasteLabel};
use crate::ports::SortError;

/// Labels recognized out of the box.
pub const STANDARD_RULES: &[(&str, BinCategory)] = &[
    ("plastic", BinCategory::Dry),
    ("metal", BinCategory::Dry),
    ("glass", BinCategory::Dry),
    ("food", BinCategory::Wet),
    ("vegetable", BinCategory::Wet),
    ("battery", BinCategory::Hazardous),
    ("chemical", BinCategory::Hazardous),
    ("mobile", BinCategory::EWaste),
    ("laptop", BinCategory::EWaste),
    ("sanitary", BinCategory::Sanitary),
];

static STANDARD: LazyLock<RuleTable> = LazyLock::new(|| RuleTable {
    rules: STANDARD_RULES
        .iter()
        .map(|&(key, category)| (key.to_lowercase(), category))
        .collect(),
});

/// Read-only lookup from waste label to bin, falling back to [`BinCategory::Reject`].
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<String, BinCategory>,
}

impl RuleTable {
    /// Build a table from `(label, category)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::DuplicateRule`] when two labels are equal after lower-casing.
    pub fn from_rules<I, K>(rules: I) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = (K, BinCategory)>,
        K: AsRef<str>,
    {
        let mut table = HashMap::new();
        for (key, category) in rules {
            match table.entry(key.as_ref().to_lowercase()) {
                Entry::Occupied(existing) => {
                    return Err(SortError::DuplicateRule {
                        key: existing.key().clone(),
                        first: *existing.get(),
                        second: category,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(category);
                }
            }
        }
        Ok(Self { rules: table })
    }

    /// Shared table built from [`STANDARD_RULES`] on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Bin for `label`; unknown labels go to the reject bin.
    #[must_use]
    pub fn lookup(&self, label: &WasteLabel) -> BinCategory {
        self.lookup_str(label.as_str())
    }

    /// Same as [`RuleTable::lookup`] for raw text.
    #[must_use]
    pub fn lookup_str(&self, label: &str) -> BinCategory {
        self.get(label).unwrap_or_default()
    }

    /// Bin for an explicit key, or `None` when the label is not in the table.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<BinCategory> {
        self.rules.get(&label.to_lowercase()).copied()
    }

    /// All rules ordered by bin, then label.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, BinCategory)> {
        let mut entries: Vec<_> = self
            .rules
            .iter()
            .map(|(key, category)| (key.as_str(), *category))
            .collect();
        entries.sort_by(|left, right| left.1.cmp(&right.1).then_with(|| left.0.cmp(right.0)));
        entries
    }

    /// Labels routed to `category`, sorted.
    #[must_use]
    pub fn keys_for(&self, category: BinCategory) -> Vec<&str> {
        self.entries()
            .into_iter()
            .filter(|(_, bin)| *bin == category)
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of explicit rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no explicit rules (everything is rejected).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Classify `label` against the standard rule table.
#[must_use]
pub fn classify(label: &str) -> BinCategory {
    RuleTable::standard().lookup_str(label)
}
