//! Disposal guidance shown alongside a recommendation.

use crate::model::BinCategory;

/// Static description of how to handle items routed to a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    /// Short title, e.g. `Dry Waste`.
    pub title: &'static str,
    /// One-line summary of what belongs in the bin.
    pub description: &'static str,
    /// Typical items.
    pub examples: &'static [&'static str],
    /// Disposal steps in the order they should be followed.
    pub steps: &'static [&'static str],
}

static DRY: Guidance = Guidance {
    title: "Dry Waste",
    description: "Recyclable materials",
    examples: &["Paper", "Plastic bottles", "Metal cans", "Glass jars"],
    steps: &[
        "Clean and dry the item before recycling",
        "Remove any labels or caps from containers",
        "Place in blue recycling bin",
        "Flatten cardboard boxes to save space",
        "Consider donating if item is reusable",
    ],
};

static WET: Guidance = Guidance {
    title: "Wet Waste",
    description: "Organic/biodegradable materials",
    examples: &["Food scraps", "Vegetable peels", "Garden waste", "Tea powder"],
    steps: &[
        "Place in green composting bin",
        "Do not mix with plastic bags or packaging",
        "Can be used for home composting or vermicomposting",
        "Breaks down naturally in 30-45 days",
        "Keep separate from other waste types",
    ],
};

static HAZARDOUS: Guidance = Guidance {
    title: "Hazardous Waste",
    description: "Requires special handling",
    examples: &["Batteries", "Chemicals", "Paint", "Medical waste"],
    steps: &[
        "Do NOT place in regular bins",
        "Store in sealed containers until disposal",
        "Take to designated hazardous waste collection center",
        "Keep away from children and pets",
        "Contact local waste management for pickup schedules",
    ],
};

static EWASTE: Guidance = Guidance {
    title: "E-Waste",
    description: "Electronic waste items",
    examples: &["Old phones", "Chargers", "Keyboards", "Cables"],
    steps: &[
        "Do not dispose with regular waste",
        "Remove batteries before disposal if possible",
        "Take to authorized e-waste collection centers",
        "Consider donating working electronics",
        "Many retailers offer e-waste recycling programs",
    ],
};

static SANITARY: Guidance = Guidance {
    title: "Sanitary Waste",
    description: "Personal hygiene items",
    examples: &["Diapers", "Sanitary pads", "Tissues", "Bandages"],
    steps: &[
        "Wrap securely in paper or biodegradable bags",
        "Place in designated sanitary waste bins",
        "Never flush down toilets",
        "Keep separate from recyclable waste",
        "Dispose of daily to maintain hygiene",
    ],
};

static REJECT: Guidance = Guidance {
    title: "Reject Waste",
    description: "Non-recyclable items",
    examples: &["Thermocol", "Chips packets", "Disposable cups", "Multi-layer packaging"],
    steps: &[
        "Cannot be recycled through normal channels",
        "Minimize use of these products when possible",
        "Place in designated reject waste bin",
        "Look for eco-friendly alternatives for future",
        "Some specialized facilities may accept these items",
    ],
};

impl BinCategory {
    /// Guidance sheet for this bin.
    #[must_use]
    pub fn guidance(self) -> &'static Guidance {
        match self {
            Self::Dry => &DRY,
            Self::Wet => &WET,
            Self::Hazardous => &HAZARDOUS,
            Self::EWaste => &EWASTE,
            Self::Sanitary => &SANITARY,
            Self::Reject => &REJECT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bin_has_steps_and_examples() {
        for category in BinCategory::ALL {
            let guidance = category.guidance();
            assert!(!guidance.steps.is_empty(), "{category} has no steps");
            assert!(!guidance.examples.is_empty(), "{category} has no examples");
        }
    }

    #[test]
    fn titles_match_bin_names() {
        for category in BinCategory::ALL {
            let title = category.guidance().title;
            assert!(
                category.bin_name().starts_with(title),
                "{title} is not a prefix of {category}"
            );
        }
    }
}
