//! High-level service facade combining a detector with the rule table.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info};

use crate::model::{BinCategory, Classification, WasteLabel};
use crate::ports::{Detector, SortError};
use crate::rules::RuleTable;

/// Public entry point for classifying detected waste.
#[derive(Debug, Clone)]
pub struct SortingService {
    rules: Arc<RuleTable>,
}

impl SortingService {
    /// Create a new service bound to the provided rule table.
    #[must_use]
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Service backed by the standard rule table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(RuleTable::standard().clone()))
    }

    /// Rule table used for lookups.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Map a label to its bin.
    #[must_use]
    pub fn classify(&self, label: &WasteLabel) -> BinCategory {
        let bin = self.rules.lookup(label);
        if bin == BinCategory::Reject {
            debug!(label = %label, "no rule matched, routing to reject bin");
        } else {
            debug!(label = %label, bin = %bin, "rule matched");
        }
        bin
    }

    /// Take one reading from `detector` and classify it.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::MissingLabel`] if the detector produced no reading.
    pub fn run(&self, detector: &mut dyn Detector) -> Result<Classification, SortError> {
        let detected_at = Local::now();
        let Some(raw) = detector.detect() else {
            return Err(SortError::MissingLabel {
                detector: detector.name().to_owned(),
            });
        };

        let label = WasteLabel::new(raw);
        info!(detector = detector.name(), label = %label, "waste detected");

        let bin = self.classify(&label);
        Ok(Classification {
            label,
            bin,
            detector: detector.name().to_owned(),
            detected_at,
        })
    }
}

impl Default for SortingService {
    fn default() -> Self {
        Self::standard()
    }
}
