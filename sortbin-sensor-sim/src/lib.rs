//! Detector implementations that stand in for a waste sensor.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use sortbin_core::ports::Detector;

/// Labels the simulator picks from by default.
///
/// Mostly known labels, plus a few items the rule table rejects.
pub const CATALOGUE: &[&str] = &[
    "plastic",
    "metal",
    "glass",
    "food",
    "vegetable",
    "battery",
    "chemical",
    "mobile",
    "laptop",
    "sanitary",
    "thermocol",
    "chips packet",
    "tire",
];

/// Sensor that fabricates a random label from a catalogue.
pub struct SimulatedSensor {
    rng: ChaCha8Rng,
    catalogue: Vec<String>,
}

impl SimulatedSensor {
    /// Simulator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Simulator with a fixed seed; the same seed yields the same readings.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Replace the catalogue the simulator draws from.
    #[must_use]
    pub fn with_catalogue<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalogue = labels.into_iter().map(Into::into).collect();
        self
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            catalogue: CATALOGUE.iter().map(|&label| label.to_owned()).collect(),
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SimulatedSensor {
    fn name(&self) -> &str {
        "simulated"
    }

    fn detect(&mut self) -> Option<String> {
        let reading = self.catalogue.choose(&mut self.rng).cloned();
        match &reading {
            Some(label) => debug!(label = %label, "simulated reading"),
            None => warn!("simulator catalogue is empty, no reading produced"),
        }
        reading
    }
}

/// Sensor that always reports the same reading.
#[derive(Debug, Clone)]
pub struct FixedSensor {
    reading: Option<String>,
}

impl FixedSensor {
    /// Sensor that reports `label` on every call.
    #[must_use]
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            reading: Some(label.into()),
        }
    }

    /// Sensor that never produces a reading.
    #[must_use]
    pub fn absent() -> Self {
        Self { reading: None }
    }
}

impl Detector for FixedSensor {
    fn name(&self) -> &str {
        "fixed"
    }

    fn detect(&mut self) -> Option<String> {
        self.reading.clone()
    }
}
