//! Gantry-family basic parameters.
//!
//! A gantry has no counterweight: its own structure resists overturning, and
//! it bears on its legs rather than on outriggers.

use serde::{Deserialize, Serialize};

use super::{BasicSection, Choice, Section, SectionFields};
use crate::errors::CalcResult;
use crate::input::RawValue;

/// Gantry crane variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GantryCraneType {
    #[default]
    RailMounted,
    RubberTyred,
    Semi,
    Portal,
}

impl GantryCraneType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GantryCraneType::RailMounted => "Rail-Mounted Gantry",
            GantryCraneType::RubberTyred => "Rubber-Tyred Gantry",
            GantryCraneType::Semi => "Semi-Gantry",
            GantryCraneType::Portal => "Portal Gantry",
        }
    }
}

impl std::fmt::Display for GantryCraneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Choice for GantryCraneType {
    const ALL: &'static [Self] = &[
        GantryCraneType::RailMounted,
        GantryCraneType::RubberTyred,
        GantryCraneType::Semi,
        GantryCraneType::Portal,
    ];

    fn code(&self) -> &'static str {
        match self {
            GantryCraneType::RailMounted => "rail-mounted",
            GantryCraneType::RubberTyred => "rubber-tyred",
            GantryCraneType::Semi => "semi",
            GantryCraneType::Portal => "portal",
        }
    }
}

/// How the gantry travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GantryMovement {
    #[default]
    Rail,
    Tyre,
    Fixed,
}

impl Choice for GantryMovement {
    const ALL: &'static [Self] = &[
        GantryMovement::Rail,
        GantryMovement::Tyre,
        GantryMovement::Fixed,
    ];

    fn code(&self) -> &'static str {
        match self {
            GantryMovement::Rail => "rail",
            GantryMovement::Tyre => "tyre",
            GantryMovement::Fixed => "fixed",
        }
    }
}

/// Basic parameters of a gantry crane.
///
/// ## JSON Example
///
/// ```json
/// {
///   "crane_type": "rail-mounted",
///   "capacity": 40.0,
///   "span": 30.0,
///   "lift_height": 18.0,
///   "structure_weight": 60000.0,
///   "load_radius": 15.0,
///   "leg_count": 4,
///   "movement": "rail",
///   "hoist_speed": 10.0,
///   "travel_speed": 60.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GantryBasic {
    pub crane_type: GantryCraneType,

    /// Rated capacity in tonnes
    pub capacity: f64,

    /// Rail-to-rail span in meters
    pub span: f64,

    /// Height under hook in meters
    pub lift_height: f64,

    /// Structure self-weight in kilograms
    pub structure_weight: f64,

    /// Trolley offset from the near leg line in meters
    pub load_radius: f64,

    /// Number of legs bearing on the ground
    pub leg_count: u32,

    pub movement: GantryMovement,

    /// Hoisting speed in m/min
    pub hoist_speed: f64,

    /// Gantry travel speed in m/min
    pub travel_speed: f64,
}

impl Default for GantryBasic {
    fn default() -> Self {
        GantryBasic {
            crane_type: GantryCraneType::RailMounted,
            capacity: 40.0,
            span: 30.0,
            lift_height: 18.0,
            structure_weight: 60000.0,
            load_radius: 15.0,
            leg_count: 4,
            movement: GantryMovement::Rail,
            hoist_speed: 10.0,
            travel_speed: 60.0,
        }
    }
}

impl SectionFields for GantryBasic {
    const SECTION: Section = Section::Basic;
    const FIELDS: &'static [&'static str] = &[
        "crane_type",
        "capacity",
        "span",
        "lift_height",
        "structure_weight",
        "load_radius",
        "leg_count",
        "movement",
        "hoist_speed",
        "travel_speed",
    ];

    fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "capacity" => Some(self.capacity),
            "span" => Some(self.span),
            "lift_height" => Some(self.lift_height),
            "structure_weight" => Some(self.structure_weight),
            "load_radius" => Some(self.load_radius),
            "leg_count" => Some(f64::from(self.leg_count)),
            "hoist_speed" => Some(self.hoist_speed),
            "travel_speed" => Some(self.travel_speed),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, raw: &RawValue) -> CalcResult<()> {
        match field {
            "crane_type" => self.crane_type = GantryCraneType::parse_choice(field, raw)?,
            "capacity" => self.capacity = raw.as_number(),
            "span" => self.span = raw.as_number(),
            "lift_height" => self.lift_height = raw.as_number(),
            "structure_weight" => self.structure_weight = raw.as_number(),
            "load_radius" => self.load_radius = raw.as_number(),
            // Saturating cast: negatives and fractions truncate toward 0
            "leg_count" => self.leg_count = raw.as_number().trunc() as u32,
            "movement" => self.movement = GantryMovement::parse_choice(field, raw)?,
            "hoist_speed" => self.hoist_speed = raw.as_number(),
            "travel_speed" => self.travel_speed = raw.as_number(),
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }
}

impl BasicSection for GantryBasic {
    fn capacity_t(&self) -> f64 {
        self.capacity
    }

    fn reach_m(&self) -> f64 {
        self.span
    }

    fn ballast_kg(&self) -> f64 {
        self.structure_weight
    }

    fn load_radius_m(&self) -> f64 {
        self.load_radius
    }

    fn bearing_points(&self) -> Option<u32> {
        Some(self.leg_count)
    }
}
