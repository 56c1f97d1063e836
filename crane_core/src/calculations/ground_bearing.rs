//! # Ground Bearing
//!
//! Nominal ground pressure under the crane's bearing points:
//!
//! ```text
//! W = ballast / kg_per_tonne + base_weight      (t)
//! A = bearing_points · pad_area                 (m²)
//! p = W / A                                     (t/m²)
//! ```
//!
//! Jib cranes assume `nominal_bearing_points` outrigger pads. Gantries bear on
//! their legs; a leg count of zero falls back to the nominal count.

use serde::{Deserialize, Serialize};

use super::round1;
use crate::family::FormulaConstants;
use crate::spec::{BasicSection, Specification};

/// Results from the ground bearing estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundBearing {
    /// Weight carried to the ground (t)
    pub total_weight: f64,
    pub bearing_points: u32,
    /// Effective bearing area (m²)
    pub bearing_area: f64,
    /// Average pressure (t/m²), unrounded
    pub pressure: f64,
}

impl GroundBearing {
    /// Pressure rounded to one decimal for display
    pub fn pressure_rounded(&self) -> f64 {
        round1(self.pressure)
    }
}

/// Estimate ground bearing pressure for a specification.
pub fn ground_bearing<B: BasicSection>(
    spec: &Specification<B>,
    formulas: &FormulaConstants,
) -> GroundBearing {
    let total_weight = spec.basic.ballast_kg() / formulas.kg_per_tonne + formulas.base_weight_t;

    let bearing_points = spec
        .basic
        .bearing_points()
        .filter(|&points| points > 0)
        .unwrap_or(formulas.nominal_bearing_points);
    let bearing_area = f64::from(bearing_points) * formulas.pad_area_m2;

    let pressure = if bearing_area > 0.0 {
        total_weight / bearing_area
    } else {
        0.0
    };

    GroundBearing {
        total_weight,
        bearing_points,
        bearing_area,
        pressure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{CraneFamily, Gantry, Jib};
    use crate::spec::Section;

    #[test]
    fn test_reference_configuration() {
        // 12 000 kg counterweight + 15 t machine over 4 pads
        let result = ground_bearing(&Jib::default_specification(), &FormulaConstants::jib());
        assert_eq!(result.total_weight, 27.0);
        assert_eq!(result.bearing_points, 4);
        assert_eq!(result.pressure, 6.75);
        assert_eq!(result.pressure_rounded(), 6.8);
    }

    #[test]
    fn test_gantry_bears_on_legs() {
        let formulas = Gantry::profile().formulas;
        let spec = Gantry::default_specification()
            .with_field(Section::Basic, "leg_count", 8u32)
            .unwrap();
        let result = ground_bearing(&spec, &formulas);
        // 60 t structure + 10 t base over 8 legs
        assert_eq!(result.total_weight, 70.0);
        assert_eq!(result.bearing_points, 8);
        assert_eq!(result.pressure, 8.75);
    }

    #[test]
    fn test_zero_legs_fall_back_to_nominal() {
        let formulas = Gantry::profile().formulas;
        let spec = Gantry::default_specification()
            .with_field(Section::Basic, "leg_count", "none")
            .unwrap();
        let result = ground_bearing(&spec, &formulas);
        assert_eq!(result.bearing_points, 4);
        assert_eq!(result.pressure, 17.5);
    }

    #[test]
    fn test_zero_pad_area_gives_zero_pressure() {
        let formulas = FormulaConstants {
            pad_area_m2: 0.0,
            ..FormulaConstants::jib()
        };
        let result = ground_bearing(&Jib::default_specification(), &formulas);
        assert_eq!(result.pressure, 0.0);
    }
}
