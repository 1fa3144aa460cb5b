//! Traits describing detector capabilities and the shared error type.

use crate::model::BinCategory;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Errors that can occur while detecting or classifying waste.
pub enum SortError {
    /// The detector produced no reading at all.
    #[error("Invalid input: detector `{detector}` returned no waste label")]
    MissingLabel {
        /// Name of the detector that came back empty.
        detector: String,
    },
    /// Two rule keys collapse to the same lower-cased label.
    #[error("Duplicate rule for `{key}` ({first} vs {second})")]
    DuplicateRule {
        /// Lower-cased key that appears twice.
        key: String,
        /// Category of the first occurrence.
        first: BinCategory,
        /// Category of the conflicting occurrence.
        second: BinCategory,
    },
    /// A category slug did not name any known bin.
    #[error("Unknown bin category: {0}")]
    UnknownCategory(String),
}

/// Source of waste readings, one per call.
pub trait Detector: Send {
    /// Human-readable name used in logs and reports.
    fn name(&self) -> &str;

    /// Take a single reading.
    ///
    /// `None` means the detector had nothing to report; callers treat that as invalid input
    /// rather than guessing a label.
    fn detect(&mut self) -> Option<String>;
}
