//! # Derived Metrics
//!
//! Secondary engineering values computed from a specification. Nothing here is
//! stored: every function takes the current specification and the family's
//! [`FormulaConstants`] and is cheap enough to call on every render.
//!
//! ## Available Calculations
//!
//! - [`load_chart`] - Safe capacity against working radius
//! - [`stability`] - Restoring moment over load moment
//! - [`ground_bearing`] - Nominal ground pressure
//!
//! Derived metrics are computed whether or not the specification validates.

pub mod ground_bearing;
pub mod load_chart;
pub mod stability;

use serde::{Deserialize, Serialize};

use crate::family::FormulaConstants;
use crate::spec::{BasicSection, Specification};

// Re-export commonly used types
pub use ground_bearing::{ground_bearing, GroundBearing};
pub use load_chart::{load_chart, ChartPoint};
pub use stability::{stability_analysis, StabilityAnalysis, StabilityRatio, StabilityStatus};

/// All derived metrics for one specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub load_chart: Vec<ChartPoint>,
    pub stability: StabilityAnalysis,
    pub ground_bearing: GroundBearing,
}

/// Compute every derived metric.
pub fn derive_metrics<B: BasicSection>(
    spec: &Specification<B>,
    formulas: &FormulaConstants,
) -> DerivedMetrics {
    DerivedMetrics {
        load_chart: load_chart(spec, formulas),
        stability: stability_analysis(spec, formulas),
        ground_bearing: ground_bearing(spec, formulas),
    }
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{CraneFamily, Jib};
    use crate::spec::Section;

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(15.49), 15.5);
        assert_eq!(round1(-2.25), -2.3);
    }

    #[test]
    fn test_metrics_are_computed_for_invalid_specifications() {
        let spec = Jib::default_specification()
            .with_field(Section::Basic, "capacity", 5000.0)
            .unwrap();
        let metrics = derive_metrics(&spec, &Jib::profile().formulas);
        assert_eq!(metrics.load_chart[0].capacity, 3333.3);
        assert_eq!(metrics.stability.load_moment, 50000.0);
    }
}
