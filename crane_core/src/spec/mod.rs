//! # Crane Specification
//!
//! The specification record edited by the user. It is split into three
//! sections, one of which is family-specific:
//!
//! ```text
//! Specification<B>
//! ├── basic: B                 (JibBasic | GantryBasic)
//! ├── environmental: Environmental
//! └── safety: Safety
//! ```
//!
//! Fields are addressed by `(Section, "field_name")` so that a form layer can
//! forward raw control values without knowing Rust types. Updates go through
//! [`Specification::with_field`], which returns a new record and leaves the
//! original untouched.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::spec::{Section, Specification};
//! use crane_core::spec::jib::JibBasic;
//!
//! let spec = Specification::<JibBasic>::default();
//! let updated = spec.with_field(Section::Basic, "capacity", "abc").unwrap();
//!
//! assert_eq!(updated.basic.capacity, 0.0);
//! assert_eq!(spec.basic.capacity, 50.0);
//! ```

pub mod gantry;
pub mod jib;

use std::fmt::Debug;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::input::RawValue;

pub use gantry::{GantryBasic, GantryCraneType, GantryMovement};
pub use jib::{JibBasic, JibCraneType};

// ============================================================================
// Sections and field access
// ============================================================================

/// The three sections of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basic,
    Environmental,
    Safety,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Basic, Section::Environmental, Section::Safety];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Basic => "basic",
            Section::Environmental => "environmental",
            Section::Safety => "safety",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Section::Basic),
            "environmental" | "environment" => Ok(Section::Environmental),
            "safety" => Ok(Section::Safety),
            other => Err(CalcError::invalid_choice(
                "section",
                other,
                "basic, environmental, safety",
            )),
        }
    }
}

/// Split a `section.field` path as used on the command line.
pub fn parse_field_path(path: &str) -> CalcResult<(Section, String)> {
    match path.split_once('.') {
        Some((section, field)) if !field.trim().is_empty() => {
            Ok((section.parse()?, field.trim().to_string()))
        }
        _ => Err(CalcError::invalid_input(
            "field",
            path,
            "Expected <section>.<field>, e.g. basic.capacity",
        )),
    }
}

/// Name-addressed access to one section of a specification.
pub trait SectionFields {
    /// Which section this type fills
    const SECTION: Section;

    /// Every field name, in form order
    const FIELDS: &'static [&'static str];

    /// Numeric value of a field, `None` for enum fields and unknown names
    fn numeric(&self, field: &str) -> Option<f64>;

    /// Replace one field from raw form input.
    ///
    /// Numeric fields never fail (see [`RawValue::as_number`]). Enum fields
    /// reject values outside their declared set and unknown names are
    /// rejected; in both cases `self` is left unchanged.
    fn set(&mut self, field: &str, raw: &RawValue) -> CalcResult<()>;

    /// Error for a field name this section does not carry
    fn unknown(field: &str) -> CalcError {
        CalcError::unknown_field(Self::SECTION.as_str(), field)
    }
}

/// The family-specific basic section, with the quantities the calculator needs.
pub trait BasicSection:
    SectionFields + Clone + PartialEq + Debug + Default + Serialize + DeserializeOwned + 'static
{
    /// Rated capacity (t)
    fn capacity_t(&self) -> f64;

    /// Boom length or span (m)
    fn reach_m(&self) -> f64;

    /// Weight resisting overturning: counterweight or structure weight (kg)
    fn ballast_kg(&self) -> f64;

    /// Working radius of the load (m)
    fn load_radius_m(&self) -> f64;

    /// Number of ground bearing points, when the family records one
    fn bearing_points(&self) -> Option<u32> {
        None
    }
}

/// A closed set of values for an enum field.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    /// Code used in forms and JSON (e.g. "rail-mounted")
    fn code(&self) -> &'static str;

    /// Parse a raw form value against [`Choice::ALL`], case-insensitively.
    fn parse_choice(field: &str, raw: &RawValue) -> CalcResult<Self> {
        let text = raw.as_text();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.code().eq_ignore_ascii_case(&text))
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|c| c.code()).collect();
                CalcError::invalid_choice(field, text, allowed.join(", "))
            })
    }
}

// ============================================================================
// Shared enums
// ============================================================================

/// Ground the crane stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroundConditions {
    #[default]
    Firm,
    Soft,
    Rocky,
    Paved,
    Steel,
}

impl Choice for GroundConditions {
    const ALL: &'static [Self] = &[
        GroundConditions::Firm,
        GroundConditions::Soft,
        GroundConditions::Rocky,
        GroundConditions::Paved,
        GroundConditions::Steel,
    ];

    fn code(&self) -> &'static str {
        match self {
            GroundConditions::Firm => "firm",
            GroundConditions::Soft => "soft",
            GroundConditions::Rocky => "rocky",
            GroundConditions::Paved => "paved",
            GroundConditions::Steel => "steel",
        }
    }
}

/// Visibility at the lift site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Excellent,
    #[default]
    Good,
    Moderate,
    Poor,
}

impl Choice for Visibility {
    const ALL: &'static [Self] = &[
        Visibility::Excellent,
        Visibility::Good,
        Visibility::Moderate,
        Visibility::Poor,
    ];

    fn code(&self) -> &'static str {
        match self {
            Visibility::Excellent => "excellent",
            Visibility::Good => "good",
            Visibility::Moderate => "moderate",
            Visibility::Poor => "poor",
        }
    }
}

/// Where the rated capacities come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadChartSource {
    /// Manufacturer's published chart
    #[default]
    Manufacturer,
    /// Engineering calculation
    Calculated,
    /// Proof load testing
    Tested,
}

impl Choice for LoadChartSource {
    const ALL: &'static [Self] = &[
        LoadChartSource::Manufacturer,
        LoadChartSource::Calculated,
        LoadChartSource::Tested,
    ];

    fn code(&self) -> &'static str {
        match self {
            LoadChartSource::Manufacturer => "manufacturer",
            LoadChartSource::Calculated => "calculated",
            LoadChartSource::Tested => "tested",
        }
    }
}

// ============================================================================
// Environmental and safety sections
// ============================================================================

/// Site conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environmental {
    /// Wind speed at hook height (km/h)
    pub wind_speed: f64,
    /// Ambient temperature (°C)
    pub temperature: f64,
    pub ground_conditions: GroundConditions,
    pub visibility: Visibility,
}

impl Default for Environmental {
    fn default() -> Self {
        Environmental {
            wind_speed: 20.0,
            temperature: 20.0,
            ground_conditions: GroundConditions::Firm,
            visibility: Visibility::Good,
        }
    }
}

impl SectionFields for Environmental {
    const SECTION: Section = Section::Environmental;
    const FIELDS: &'static [&'static str] =
        &["wind_speed", "temperature", "ground_conditions", "visibility"];

    fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "wind_speed" => Some(self.wind_speed),
            "temperature" => Some(self.temperature),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, raw: &RawValue) -> CalcResult<()> {
        match field {
            "wind_speed" => self.wind_speed = raw.as_number(),
            "temperature" => self.temperature = raw.as_number(),
            "ground_conditions" => {
                self.ground_conditions = GroundConditions::parse_choice(field, raw)?
            }
            "visibility" => self.visibility = Visibility::parse_choice(field, raw)?,
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }
}

/// Safety margins applied to the rated capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Safety {
    /// Divisor applied to nominal capacity (dimensionless)
    pub safety_factor: f64,
    /// Permitted working load as a percentage of rated capacity
    pub operational_limits: f64,
    pub load_chart: LoadChartSource,
}

impl Default for Safety {
    fn default() -> Self {
        Safety {
            safety_factor: 1.5,
            operational_limits: 80.0,
            load_chart: LoadChartSource::Manufacturer,
        }
    }
}

impl SectionFields for Safety {
    const SECTION: Section = Section::Safety;
    const FIELDS: &'static [&'static str] = &["safety_factor", "operational_limits", "load_chart"];

    fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "safety_factor" => Some(self.safety_factor),
            "operational_limits" => Some(self.operational_limits),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, raw: &RawValue) -> CalcResult<()> {
        match field {
            "safety_factor" => self.safety_factor = raw.as_number(),
            "operational_limits" => self.operational_limits = raw.as_number(),
            "load_chart" => self.load_chart = LoadChartSource::parse_choice(field, raw)?,
            _ => return Err(Self::unknown(field)),
        }
        Ok(())
    }
}

// ============================================================================
// Specification
// ============================================================================

/// Root specification record for one crane family.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Specification<B> {
    pub basic: B,
    pub environmental: Environmental,
    pub safety: Safety,
}

impl<B: BasicSection> Specification<B> {
    /// Field names of a section, in form order.
    pub fn field_names(section: Section) -> &'static [&'static str] {
        match section {
            Section::Basic => B::FIELDS,
            Section::Environmental => Environmental::FIELDS,
            Section::Safety => Safety::FIELDS,
        }
    }

    /// Numeric value of a field, `None` for enum or unknown fields.
    pub fn numeric(&self, section: Section, field: &str) -> Option<f64> {
        match section {
            Section::Basic => self.basic.numeric(field),
            Section::Environmental => self.environmental.numeric(field),
            Section::Safety => self.safety.numeric(field),
        }
    }

    /// Return a copy with one field replaced; every other field is unchanged.
    pub fn with_field(
        &self,
        section: Section,
        field: &str,
        raw: impl Into<RawValue>,
    ) -> CalcResult<Self> {
        let raw = raw.into();
        let mut next = self.clone();
        match section {
            Section::Basic => next.basic.set(field, &raw)?,
            Section::Environmental => next.environmental.set(field, &raw)?,
            Section::Safety => next.safety.set(field, &raw)?,
        }
        Ok(next)
    }
}
