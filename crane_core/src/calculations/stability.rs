//! # Stability Analysis
//!
//! Compares the overturning moment of the load with the restoring moment of
//! the ballast (counterweight, or structure weight for gantries):
//!
//! ```text
//! M_load    = capacity · load_radius                 (t·m)
//! M_restore = ballast / kg_per_tonne · lever_arm     (t·m)
//! ratio     = M_restore / M_load
//! ```
//!
//! A configuration with `ratio ≥ min_stability_ratio` is acceptable. The ratio
//! is never stored as an infinite or NaN value:
//!
//! - zero load moment (zero radius or zero capacity) gives
//!   [`StabilityRatio::NoLoadMoment`]
//! - a load moment so small that the division overflows gives
//!   [`StabilityRatio::Unbounded`]

use serde::{Deserialize, Serialize};

use crate::family::FormulaConstants;
use crate::spec::{BasicSection, Specification};

/// Restoring moment over load moment, or the sentinel when there is no load moment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityRatio {
    Finite(f64),
    /// Load moment is exactly zero: nothing to overturn
    NoLoadMoment,
    /// Load moment is non-zero but the ratio exceeds the `f64` range
    Unbounded,
}

impl StabilityRatio {
    /// The ratio as a number, `None` for the sentinel
    pub fn value(&self) -> Option<f64> {
        match self {
            StabilityRatio::Finite(ratio) => Some(*ratio),
            StabilityRatio::NoLoadMoment | StabilityRatio::Unbounded => None,
        }
    }
}

impl std::fmt::Display for StabilityRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StabilityRatio::Finite(ratio) => write!(f, "{:.2}", ratio),
            StabilityRatio::NoLoadMoment => write!(f, "n/a (no load moment)"),
            StabilityRatio::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Outcome of the stability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityStatus {
    Acceptable,
    BelowThreshold,
    NoLoadMoment,
}

/// Results from the stability check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "load_moment": 500.0,
///   "restoring_moment": 30.0,
///   "ratio": { "finite": 0.06 },
///   "status": "below_threshold"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    /// Overturning moment of the load (t·m)
    pub load_moment: f64,
    /// Restoring moment of the ballast (t·m)
    pub restoring_moment: f64,
    pub ratio: StabilityRatio,
    pub status: StabilityStatus,
}

impl StabilityAnalysis {
    /// Anything other than [`StabilityStatus::BelowThreshold`] is acceptable
    pub fn is_acceptable(&self) -> bool {
        self.status != StabilityStatus::BelowThreshold
    }
}

/// Run the stability check for a specification.
///
/// A negative load moment (negative radius or capacity, both range errors)
/// yields a negative ratio and is reported below threshold.
pub fn stability_analysis<B: BasicSection>(
    spec: &Specification<B>,
    formulas: &FormulaConstants,
) -> StabilityAnalysis {
    let load_moment = spec.basic.capacity_t() * spec.basic.load_radius_m();
    let restoring_moment =
        spec.basic.ballast_kg() / formulas.kg_per_tonne * formulas.restoring_lever_arm_m;

    let (ratio, status) = if load_moment == 0.0 {
        (StabilityRatio::NoLoadMoment, StabilityStatus::NoLoadMoment)
    } else {
        let ratio = restoring_moment / load_moment;
        let status = if ratio >= formulas.min_stability_ratio {
            StabilityStatus::Acceptable
        } else {
            StabilityStatus::BelowThreshold
        };
        if ratio.is_finite() {
            (StabilityRatio::Finite(ratio), status)
        } else {
            (StabilityRatio::Unbounded, status)
        }
    };

    StabilityAnalysis {
        load_moment,
        restoring_moment,
        ratio,
        status,
    }
}
