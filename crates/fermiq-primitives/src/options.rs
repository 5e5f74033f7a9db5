//! Synthesis configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for Bogoliubov synthesis.
///
/// Every field has a default, so a partial YAML or JSON document
/// deserializes cleanly:
///
/// ```rust
/// use fermiq_primitives::SynthesisOptions;
///
/// let options: SynthesisOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(options, SynthesisOptions::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    /// Zero threshold. A matrix entry whose magnitude is at or below it
    /// gets no rotation, and the same value is compared against phase
    /// angles in radians: a diagonal phase with `|arg| <= tolerance` gets
    /// no phase gate.
    pub tolerance: f64,
}

impl SynthesisOptions {
    /// Default zero threshold.
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    /// Set the zero threshold.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}
