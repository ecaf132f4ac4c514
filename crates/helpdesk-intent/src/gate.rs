//! Confidence gate: the caller-side accept/reject policy.

use crate::classifier::MatchResult;
use crate::error::{CatalogError, Result};

/// Default minimum score for accepting a classification.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Accepts a [`MatchResult`] only when it names a tag and clears the
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceGate {
    threshold: f64,
}

impl ConfidenceGate {
    /// Create a gate.  The threshold must be finite and within `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(CatalogError::InvalidThreshold { value: threshold });
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The accepted tag, or `None` when the caller should fall back.
    pub fn accept<'a>(&self, result: &'a MatchResult) -> Option<&'a str> {
        match result.tag.as_deref() {
            Some(tag) if result.score >= self.threshold => Some(tag),
            _ => None,
        }
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
