//! Precision tiers: which arithmetic evaluates the view at a given zoom.
//!
//! Native f32 resolves neighbouring pixels until roughly zoom 10^7. Past that,
//! the split-limb representation carries enough mantissa to about 10^10.
//! The table is validated once; lookups never fail.

use crate::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zoom at which native single precision stops resolving adjacent pixels.
pub const NATIVE_PRECISION_LIMIT: f64 = 1e7;

/// Upper operational bound of the two-limb representation.
pub const SPLIT_PRECISION_LIMIT: f64 = 1e10;

/// Arithmetic used to evaluate a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorStrategy {
    /// Plain f32 coordinates and orbit.
    NativePrecision,
    /// Split-limb (hi + lo f32) coordinates and compensated orbit arithmetic.
    SplitPrecision,
}

impl EvaluatorStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NativePrecision => "native",
            Self::SplitPrecision => "split",
        }
    }
}

impl fmt::Display for EvaluatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One zoom range `[min_zoom, max_zoom)` and the strategy serving it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrecisionTier {
    pub min_zoom: f64,
    /// `None` means unbounded (only allowed on the last tier).
    #[serde(default)]
    pub max_zoom: Option<f64>,
    pub strategy: EvaluatorStrategy,
}

impl PrecisionTier {
    pub fn new(min_zoom: f64, max_zoom: Option<f64>, strategy: EvaluatorStrategy) -> Self {
        Self {
            min_zoom,
            max_zoom,
            strategy,
        }
    }

    /// Exclusive upper bound, infinite when unbounded.
    pub fn upper(&self) -> f64 {
        self.max_zoom.unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min_zoom && zoom < self.upper()
    }
}

/// Default tiers: native below 10^7, split from 10^7 to 10^10.
pub fn default_tiers() -> Vec<PrecisionTier> {
    vec![
        PrecisionTier::new(
            0.0,
            Some(NATIVE_PRECISION_LIMIT),
            EvaluatorStrategy::NativePrecision,
        ),
        PrecisionTier::new(
            NATIVE_PRECISION_LIMIT,
            Some(SPLIT_PRECISION_LIMIT),
            EvaluatorStrategy::SplitPrecision,
        ),
    ]
}

/// Ordered, contiguous tier table covering zoom from zero upward.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TierTable {
    // Never empty.
    tiers: Vec<PrecisionTier>,
}

impl TierTable {
    /// Validate and register tiers. Ranges must start at zero, ascend, and
    /// meet exactly (no gaps, no overlaps).
    pub fn new(tiers: Vec<PrecisionTier>) -> Result<Self, ConfigError> {
        let first = tiers.first().ok_or(ConfigError::EmptyTierTable)?;
        if first.min_zoom != 0.0 {
            return Err(ConfigError::TierNotAtZero {
                min: first.min_zoom,
            });
        }

        let last_index = tiers.len() - 1;
        for (index, tier) in tiers.iter().enumerate() {
            let upper = tier.upper();
            if !tier.min_zoom.is_finite() || upper.is_nan() || upper <= tier.min_zoom {
                return Err(ConfigError::InvalidTierRange {
                    index,
                    min: tier.min_zoom,
                    max: upper,
                });
            }
            if tier.max_zoom.is_none() && index != last_index {
                return Err(ConfigError::UnboundedTierNotLast { index });
            }
            if index > 0 {
                let expected = tiers[index - 1].upper();
                let found = tier.min_zoom;
                if found > expected {
                    return Err(ConfigError::TierGap {
                        index,
                        expected,
                        found,
                    });
                }
                if found < expected {
                    return Err(ConfigError::TierOverlap {
                        index,
                        expected,
                        found,
                    });
                }
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[PrecisionTier] {
        &self.tiers
    }

    /// Strategy for `zoom`.
    pub fn select(&self, zoom: f64) -> EvaluatorStrategy {
        self.select_tier(zoom).strategy
    }

    /// Tier whose `[min, max)` contains `zoom`. Zoom beyond every bound, or
    /// NaN, falls back to the last tier; negative zoom resolves to the first.
    pub fn select_tier(&self, zoom: f64) -> &PrecisionTier {
        let last = &self.tiers[self.tiers.len() - 1];
        if zoom.is_nan() {
            return last;
        }
        let index = self.tiers.partition_point(|tier| tier.upper() <= zoom);
        match self.tiers.get(index) {
            Some(tier) => tier,
            None => {
                debug!(
                    "zoom {:e} beyond highest precision tier, reusing {}",
                    zoom, last.strategy
                );
                last
            }
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}
