//! # Load Chart
//!
//! Safe working capacity against working radius. Capacity falls off with the
//! inverse of radius raised to `chart_decay_exponent`, is divided by the
//! safety factor, and never drops below `chart_floor_fraction` of the rated
//! capacity:
//!
//! ```text
//! capacity(r) = max(C · (r₀ / r)^k / SF,  C · floor)
//! r = r₀, r₀ + step, …  while r ≤ min(reach · fraction, max_radius)
//! ```
//!
//! Capacities are rounded to one decimal.

use serde::{Deserialize, Serialize};

use super::round1;
use crate::family::FormulaConstants;
use crate::spec::{BasicSection, Specification};

/// One row of a load chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Working radius (m)
    pub radius: f64,
    /// Safe working capacity at this radius (t)
    pub capacity: f64,
}

/// Tolerance when deciding whether the last grid radius fits
const RADIUS_EPSILON: f64 = 1e-9;

/// Compute the load chart for a specification.
///
/// Returns an empty chart when the covered reach is shorter than the first
/// radius or the step is not positive. A non-positive safety factor leaves
/// only the capacity floor.
pub fn load_chart<B: BasicSection>(
    spec: &Specification<B>,
    formulas: &FormulaConstants,
) -> Vec<ChartPoint> {
    let reference = formulas.chart_reference_radius_m;
    let step = formulas.chart_step_m;
    let max_radius =
        (spec.basic.reach_m() * formulas.chart_reach_fraction).min(formulas.chart_max_radius_m);

    if step <= 0.0 || reference <= 0.0 || max_radius < reference {
        return Vec::new();
    }

    // Index the grid rather than accumulating radius to keep points exact
    let count = ((max_radius - reference) / step + RADIUS_EPSILON).floor() as usize + 1;

    (0..count)
        .map(|i| {
            let radius = reference + step * i as f64;
            ChartPoint {
                radius,
                capacity: round1(capacity_at(spec, formulas, radius)),
            }
        })
        .collect()
}

/// Unrounded safe capacity at `radius`.
fn capacity_at<B: BasicSection>(
    spec: &Specification<B>,
    formulas: &FormulaConstants,
    radius: f64,
) -> f64 {
    let base = spec.basic.capacity_t();
    let floor = base * formulas.chart_floor_fraction;
    let safety_factor = spec.safety.safety_factor;

    if safety_factor <= 0.0 {
        return floor;
    }

    let decay = (formulas.chart_reference_radius_m / radius).powf(formulas.chart_decay_exponent);
    let reduced = base * decay / safety_factor;
    if reduced.is_finite() {
        reduced.max(floor)
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{CraneFamily, Gantry, Jib};
    use crate::spec::Section;

    fn jib_chart(spec: &Specification<crate::spec::JibBasic>) -> Vec<ChartPoint> {
        load_chart(spec, &FormulaConstants::jib())
    }

    #[test]
    fn test_default_chart_shape() {
        // boom 30 m -> chart to 24 m -> radii 3, 5, ..., 23
        let chart = jib_chart(&Jib::default_specification());
        assert_eq!(chart.len(), 11);
        assert_eq!(chart.first().unwrap().radius, 3.0);
        assert_eq!(chart.last().unwrap().radius, 23.0);
    }

    #[test]
    fn test_default_chart_values() {
        let chart = jib_chart(&Jib::default_specification());
        // 50 * 1 / 1.5
        assert_eq!(chart[0].capacity, 33.3);
        // 50 * (3/5)^1.5 / 1.5 = 15.49
        assert_eq!(chart[1].capacity, 15.5);
        // 50 * (3/9)^1.5 / 1.5 = 6.42
        assert_eq!(chart[3].capacity, 6.4);
        // floor at 10% of 50 t
        assert_eq!(chart[10].capacity, 5.0);
    }

    #[test]
    fn test_capacity_never_increases_with_radius() {
        let chart = jib_chart(&Jib::default_specification());
        for pair in chart.windows(2) {
            assert!(pair[1].radius > pair[0].radius);
            assert!(pair[1].capacity <= pair[0].capacity);
        }
    }

    #[test]
    fn test_max_radius_is_capped() {
        let spec = Jib::default_specification()
            .with_field(Section::Basic, "boom_length", 100.0)
            .unwrap();
        let chart = jib_chart(&spec);
        // 80 m of reach, but the chart stops at 40 m
        assert_eq!(chart.last().unwrap().radius, 39.0);
    }

    #[test]
    fn test_last_grid_point_is_inclusive() {
        // 33.75 * 0.8 = 27 -> radius 27 is on the grid
        let spec = Jib::default_specification()
            .with_field(Section::Basic, "boom_length", 33.75)
            .unwrap();
        assert_eq!(jib_chart(&spec).last().unwrap().radius, 27.0);
    }

    #[test]
    fn test_short_boom_gives_empty_chart() {
        let spec = Jib::default_specification()
            .with_field(Section::Basic, "boom_length", 3.0)
            .unwrap();
        assert!(jib_chart(&spec).is_empty());
    }

    #[test]
    fn test_zero_safety_factor_leaves_floor() {
        let spec = Jib::default_specification()
            .with_field(Section::Safety, "safety_factor", "abc")
            .unwrap();
        let chart = jib_chart(&spec);
        assert!(!chart.is_empty());
        assert!(chart.iter().all(|p| p.capacity == 5.0));
    }

    #[test]
    fn test_chart_is_restartable() {
        let spec = Gantry::default_specification();
        let formulas = Gantry::profile().formulas;
        assert_eq!(load_chart(&spec, &formulas), load_chart(&spec, &formulas));
    }

    #[test]
    fn test_non_positive_step_gives_empty_chart() {
        let formulas = FormulaConstants {
            chart_step_m: 0.0,
            ..FormulaConstants::jib()
        };
        assert!(load_chart(&Jib::default_specification(), &formulas).is_empty());
    }
}
