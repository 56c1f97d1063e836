//! Jib-family basic parameters (mobile, tower, crawler and overhead cranes).

use serde::{Deserialize, Serialize};

use super::{BasicSection, Choice, Section, SectionFields};
use crate::errors::CalcResult;
use crate::input::RawValue;

/// Jib crane variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JibCraneType {
    #[default]
    Mobile,
    Tower,
    Crawler,
    Overhead,
}

impl JibCraneType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            JibCraneType::Mobile => "Mobile Crane",
            JibCraneType::Tower => "Tower Crane",
            JibCraneType::Crawler => "Crawler Crane",
            JibCraneType::Overhead => "Overhead Crane",
        }
    }
}

impl std::fmt::Display for JibCraneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Choice for JibCraneType {
    const ALL: &'static [Self] = &[
        JibCraneType::Mobile,
        JibCraneType::Tower,
        JibCraneType::Crawler,
        JibCraneType::Overhead,
    ];

    fn code(&self) -> &'static str {
        match self {
            JibCraneType::Mobile => "mobile",
            JibCraneType::Tower => "tower",
            JibCraneType::Crawler => "crawler",
            JibCraneType::Overhead => "overhead",
        }
    }
}

/// Basic parameters of a jib-type crane.
///
/// ## JSON Example
///
/// ```json
/// {
///   "crane_type": "mobile",
///   "capacity": 50.0,
///   "boom_length": 30.0,
///   "counterweight": 12000.0,
///   "load_radius": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JibBasic {
    pub crane_type: JibCraneType,

    /// Rated capacity in tonnes
    pub capacity: f64,

    /// Boom length in meters
    pub boom_length: f64,

    /// Counterweight in kilograms
    pub counterweight: f64,

    /// Working radius in meters
    pub load_radius: f64,
}

impl Default for JibBasic {
    fn default() -> Self {
        JibBasic {
            crane_type: JibCraneType::Mobile,
            capacity: 50.0,
            boom_length: 30.0,
            counterweight: 12000.0,
            load_radius: 10.0,
        }
    }
}

impl SectionFields for JibBasic {
    const SECTION: Section = Section::Basic;
    const FIELDS: &'static [&'static str] = &[
        "crane_type",
        "capacity",
        "boom_length",
        "counterweight",
        "load_radius",
    ];

    fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "capacity" => Some(self.capacity),
            "boom_length" => Some(self.boom_length),
            "counterweight" => Some(self.counterweight),
            "load_radius" => Some(self.load_radius),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, raw: &RawValue) -> CalcResult<()> {
        match field {
            "crane_type" => self.crane_type = JibCraneType::parse_choice(field, raw)?,
            "capacity" => self.capacity = raw.as_number(),
            "boom_length" => self.boom_length = raw.as_number(),
            "counterweight" => self.counterweight = raw.as_number(),
            "load_radius" => self.load_radius = raw.as_number(),
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }
}

impl BasicSection for JibBasic {
    fn capacity_t(&self) -> f64 {
        self.capacity
    }

    fn reach_m(&self) -> f64 {
        self.boom_length
    }

    fn ballast_kg(&self) -> f64 {
        self.counterweight
    }

    fn load_radius_m(&self) -> f64 {
        self.load_radius
    }
}
