//! # Crane Families
//!
//! Jib-type and gantry cranes share one engine. What differs between them is
//! captured in a [`FamilyProfile`]: the range rules the validator applies and
//! the named constants the derived-metrics formulas use. A [`CraneFamily`]
//! ties a profile to its basic-section type, its default record and its
//! preset catalogue.
//!
//! Profiles are plain data. They can be adjusted at runtime from a TOML
//! override file (see [`ProfileOverrides`]).
//!
//! ## Example
//!
//! ```rust
//! use crane_core::family::{CraneFamily, Gantry, Jib};
//!
//! assert_eq!(Jib::profile().formulas.restoring_lever_arm_m, 2.5);
//! assert_eq!(Gantry::profile().formulas.base_weight_t, 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::presets::{self, PresetTemplate};
use crate::spec::{BasicSection, GantryBasic, JibBasic, Section, Specification};
use crate::validation::RangeRule;

/// Which family a profile or report belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    Jib,
    Gantry,
}

impl FamilyKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            FamilyKind::Jib => "Mobile / Tower / Crawler / Overhead",
            FamilyKind::Gantry => "Gantry",
        }
    }
}

impl std::fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Named constants of the derived-metrics formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConstants {
    /// First chart radius and reference radius of the capacity decay (m)
    pub chart_reference_radius_m: f64,
    /// Radius increment between chart points (m)
    pub chart_step_m: f64,
    /// Share of the reach that the chart covers
    pub chart_reach_fraction: f64,
    /// Hard upper limit on chart radius (m)
    pub chart_max_radius_m: f64,
    /// Exponent of the inverse radius/capacity relation
    pub chart_decay_exponent: f64,
    /// Capacity floor as a share of rated capacity
    pub chart_floor_fraction: f64,
    /// Lever arm of the ballast about the tipping line (m)
    pub restoring_lever_arm_m: f64,
    /// Stability ratio at or above which a configuration is acceptable
    pub min_stability_ratio: f64,
    /// Fixed machine weight added to the ballast (t)
    pub base_weight_t: f64,
    /// Bearing points assumed when the specification records none
    pub nominal_bearing_points: u32,
    /// Contact area of one bearing point (m²)
    pub pad_area_m2: f64,
    pub kg_per_tonne: f64,
}

impl FormulaConstants {
    /// Jib-family constants
    pub fn jib() -> Self {
        FormulaConstants {
            chart_reference_radius_m: 3.0,
            chart_step_m: 2.0,
            chart_reach_fraction: 0.8,
            chart_max_radius_m: 40.0,
            chart_decay_exponent: 1.5,
            chart_floor_fraction: 0.1,
            restoring_lever_arm_m: 2.5,
            min_stability_ratio: 1.5,
            base_weight_t: 15.0,
            nominal_bearing_points: 4,
            pad_area_m2: 1.0,
            kg_per_tonne: 1000.0,
        }
    }

    /// Gantry-family constants
    pub fn gantry() -> Self {
        FormulaConstants {
            restoring_lever_arm_m: 3.0,
            base_weight_t: 10.0,
            ..FormulaConstants::jib()
        }
    }
}

/// Rule table and formula constants of one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyProfile {
    pub kind: FamilyKind,
    pub rules: Vec<RangeRule>,
    pub formulas: FormulaConstants,
}

impl FamilyProfile {
    /// Jib family: capacity 1–1000 t, boom 5–100 m, wind advisory above 50 km/h
    pub fn jib() -> Self {
        let mut rules = vec![
            RangeRule::new(Section::Basic, "capacity", "Capacity", "t").between(1.0, 1000.0),
            RangeRule::new(Section::Basic, "boom_length", "Boom length", "m").between(5.0, 100.0),
            RangeRule::new(Section::Basic, "counterweight", "Counterweight", "kg").at_least(0.0),
            RangeRule::new(Section::Basic, "load_radius", "Load radius", "m").greater_than(0.0),
        ];
        rules.extend(shared_rules(50.0));

        FamilyProfile {
            kind: FamilyKind::Jib,
            rules,
            formulas: FormulaConstants::jib(),
        }
    }

    /// Gantry family: capacity 1–2000 t, span 5–200 m, wind advisory above 60 km/h
    pub fn gantry() -> Self {
        let mut rules = vec![
            RangeRule::new(Section::Basic, "capacity", "Capacity", "t").between(1.0, 2000.0),
            RangeRule::new(Section::Basic, "span", "Span", "m").between(5.0, 200.0),
            RangeRule::new(Section::Basic, "lift_height", "Lift height", "m").greater_than(0.0),
            RangeRule::new(Section::Basic, "structure_weight", "Structure weight", "kg")
                .at_least(0.0),
            RangeRule::new(Section::Basic, "load_radius", "Load radius", "m").greater_than(0.0),
            RangeRule::new(Section::Basic, "hoist_speed", "Hoist speed", "m/min").greater_than(0.0),
            RangeRule::new(Section::Basic, "travel_speed", "Travel speed", "m/min")
                .greater_than(0.0),
        ];
        rules.extend(shared_rules(60.0));

        FamilyProfile {
            kind: FamilyKind::Gantry,
            rules,
            formulas: FormulaConstants::gantry(),
        }
    }

    /// Apply overrides: formulas are replaced wholesale, each rule replaces the
    /// rule with the same section/field/severity or is appended.
    pub fn apply_overrides(&mut self, overrides: ProfileOverrides) -> CalcResult<()> {
        if let Some(kind) = overrides.kind {
            if kind != self.kind {
                return Err(CalcError::config_error(format!(
                    "override file targets the {} family, not {}",
                    kind.display_name(),
                    self.kind.display_name()
                )));
            }
        }

        if let Some(formulas) = overrides.formulas {
            self.formulas = formulas;
        }

        for rule in overrides.rules {
            match self.rules.iter_mut().find(|existing| existing.same_target(&rule)) {
                Some(existing) => *existing = rule,
                None => self.rules.push(rule),
            }
        }

        tracing::debug!(
            family = ?self.kind,
            rules = self.rules.len(),
            "applied profile overrides"
        );
        Ok(())
    }
}

/// Environmental and safety rules common to both families.
fn shared_rules(wind_advisory_kmh: f64) -> Vec<RangeRule> {
    vec![
        RangeRule::new(Section::Environmental, "wind_speed", "Wind speed", "km/h").at_least(0.0),
        RangeRule::new(Section::Environmental, "wind_speed", "Wind speed", "km/h")
            .at_most(wind_advisory_kmh)
            .advisory(format!(
                "Wind speed above {} km/h: operation not recommended",
                wind_advisory_kmh
            )),
        RangeRule::new(Section::Safety, "safety_factor", "Safety factor", "").at_least(1.1),
        RangeRule::new(Section::Safety, "operational_limits", "Operational limits", "%")
            .between(0.0, 100.0),
    ]
}

/// Contents of a profile override file.
///
/// ## TOML Example
///
/// ```toml
/// kind = "jib"
///
/// [formulas]
/// chart_reference_radius_m = 3.0
/// chart_step_m = 2.0
/// chart_reach_fraction = 0.8
/// chart_max_radius_m = 40.0
/// chart_decay_exponent = 1.5
/// chart_floor_fraction = 0.1
/// restoring_lever_arm_m = 3.2
/// min_stability_ratio = 1.5
/// base_weight_t = 15.0
/// nominal_bearing_points = 4
/// pad_area_m2 = 1.0
/// kg_per_tonne = 1000.0
///
/// [[rules]]
/// section = "basic"
/// field = "capacity"
/// label = "Capacity"
/// unit = "t"
/// min = 1.0
/// max = 500.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverrides {
    /// Guards against applying a file to the wrong family
    #[serde(default)]
    pub kind: Option<FamilyKind>,
    #[serde(default)]
    pub formulas: Option<FormulaConstants>,
    #[serde(default)]
    pub rules: Vec<RangeRule>,
}

impl ProfileOverrides {
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        toml::from_str(text).map_err(|e| CalcError::config_error(e.to_string()))
    }
}

/// A crane family: profile, basic-section type, defaults and presets.
pub trait CraneFamily: 'static {
    type Basic: BasicSection;

    const KIND: FamilyKind;

    /// Compiled-in profile
    fn profile() -> FamilyProfile;

    /// Catalogue of named templates, in display order
    fn presets() -> &'static [PresetTemplate<Self::Basic>];

    /// Record a new session starts from
    fn default_specification() -> Specification<Self::Basic> {
        Specification::default()
    }
}

/// Mobile, tower, crawler and overhead cranes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jib;

impl CraneFamily for Jib {
    type Basic = JibBasic;

    const KIND: FamilyKind = FamilyKind::Jib;

    fn profile() -> FamilyProfile {
        FamilyProfile::jib()
    }

    fn presets() -> &'static [PresetTemplate<JibBasic>] {
        &presets::JIB_PRESETS
    }
}

/// Gantry cranes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gantry;

impl CraneFamily for Gantry {
    type Basic = GantryBasic;

    const KIND: FamilyKind = FamilyKind::Gantry;

    fn profile() -> FamilyProfile {
        FamilyProfile::gantry()
    }

    fn presets() -> &'static [PresetTemplate<GantryBasic>] {
        &presets::GANTRY_PRESETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;

    #[test]
    fn test_profiles_differ_only_where_documented() {
        let jib = FormulaConstants::jib();
        let gantry = FormulaConstants::gantry();
        assert_eq!(jib.chart_reach_fraction, gantry.chart_reach_fraction);
        assert_ne!(jib.restoring_lever_arm_m, gantry.restoring_lever_arm_m);
        assert_ne!(jib.base_weight_t, gantry.base_weight_t);
    }

    #[test]
    fn test_wind_rules() {
        let profile = FamilyProfile::gantry();
        let advisory = profile
            .rules
            .iter()
            .find(|r| r.field == "wind_speed" && r.severity == Severity::Warning)
            .unwrap();
        assert_eq!(advisory.max, Some(60.0));
    }

    #[test]
    fn test_lengths_and_speeds_must_be_positive() {
        let gantry = FamilyProfile::gantry();
        for field in ["lift_height", "load_radius", "hoist_speed", "travel_speed"] {
            let rule = gantry
                .rules
                .iter()
                .find(|r| r.field == field && r.severity == Severity::Error)
                .unwrap();
            assert!(rule.check(0.0).is_some(), "{field} = 0 should fail");
            assert_eq!(rule.check(1.0), None);
        }

        let jib = FamilyProfile::jib();
        let radius = jib.rules.iter().find(|r| r.field == "load_radius").unwrap();
        assert!(radius.check(-10.0).is_some());
    }

    #[test]
    fn test_override_replaces_matching_rule() {
        let mut profile = FamilyProfile::jib();
        let before = profile.rules.len();

        let overrides = ProfileOverrides {
            kind: Some(FamilyKind::Jib),
            formulas: None,
            rules: vec![
                RangeRule::new(Section::Basic, "capacity", "Capacity", "t").between(1.0, 500.0),
            ],
        };
        profile.apply_overrides(overrides).unwrap();

        assert_eq!(profile.rules.len(), before);
        let capacity = profile.rules.iter().find(|r| r.field == "capacity").unwrap();
        assert_eq!(capacity.max, Some(500.0));
    }

    #[test]
    fn test_override_appends_new_rule() {
        let mut profile = FamilyProfile::jib();
        let before = profile.rules.len();

        let rule = RangeRule::new(Section::Environmental, "temperature", "Temperature", "°C")
            .at_least(-20.0)
            .advisory("Cold weather: check hydraulic oil");
        profile
            .apply_overrides(ProfileOverrides {
                rules: vec![rule],
                ..ProfileOverrides::default()
            })
            .unwrap();

        assert_eq!(profile.rules.len(), before + 1);
    }

    #[test]
    fn test_override_for_other_family_is_rejected() {
        let mut profile = FamilyProfile::jib();
        let err = profile
            .apply_overrides(ProfileOverrides {
                kind: Some(FamilyKind::Gantry),
                ..ProfileOverrides::default()
            })
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(profile, FamilyProfile::jib());
    }

    #[test]
    fn test_overrides_from_toml() {
        let text = r#"
            kind = "gantry"

            [formulas]
            chart_reference_radius_m = 3.0
            chart_step_m = 2.0
            chart_reach_fraction = 0.8
            chart_max_radius_m = 40.0
            chart_decay_exponent = 1.5
            chart_floor_fraction = 0.1
            restoring_lever_arm_m = 4.0
            min_stability_ratio = 1.5
            base_weight_t = 12.0
            nominal_bearing_points = 4
            pad_area_m2 = 1.0
            kg_per_tonne = 1000.0
        "#;
        let overrides = ProfileOverrides::from_toml_str(text).unwrap();
        assert_eq!(overrides.kind, Some(FamilyKind::Gantry));
        assert!(overrides.rules.is_empty());

        let mut profile = FamilyProfile::gantry();
        profile.apply_overrides(overrides).unwrap();
        assert_eq!(profile.formulas.restoring_lever_arm_m, 4.0);
        assert_eq!(profile.formulas.base_weight_t, 12.0);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = ProfileOverrides::from_toml_str("kind = 3").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
