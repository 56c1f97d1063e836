//! # Specification Validation
//!
//! Maps a specification to field-keyed messages using a table of numeric
//! range rules. Two kinds of finding are kept apart:
//!
//! - **errors**: a value outside its documented range. Errors block export.
//! - **warnings**: an advisory threshold (e.g. high wind). The value is legal
//!   and the record can still be exported.
//!
//! Bounds are inclusive: a value equal to `min` or `max` passes, unless the
//! rule sets `exclusive_min` (strictly positive lengths and speeds). The result is
//! rebuilt from scratch on every call, so a field that has been corrected never
//! keeps a stale message.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::family::{CraneFamily, Jib};
//! use crane_core::spec::Section;
//! use crane_core::validation::validate;
//!
//! let profile = Jib::profile();
//! let spec = Jib::default_specification()
//!     .with_field(Section::Safety, "safety_factor", "1.05")
//!     .unwrap();
//!
//! let result = validate(&spec, &profile.rules);
//! assert!(result.errors.contains_key("safety_factor"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::spec::{BasicSection, Section, Specification};

/// Whether a rule violation blocks export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Range violation
    #[default]
    Error,
    /// Advisory threshold
    Warning,
}

/// One numeric range check.
///
/// ## TOML Example
///
/// ```toml
/// [[rules]]
/// section = "environmental"
/// field = "wind_speed"
/// label = "Wind speed"
/// unit = "km/h"
/// max = 45.0
/// severity = "warning"
/// message = "Wind speed above 45 km/h: operation not recommended"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    pub section: Section,
    pub field: String,
    /// Human-readable field name used in messages
    pub label: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Reject a value equal to `min`
    #[serde(default)]
    pub exclusive_min: bool,
    #[serde(default)]
    pub severity: Severity,
    /// Replaces the generated message when set
    #[serde(default)]
    pub message: Option<String>,
}

impl RangeRule {
    /// Create an unbounded error rule; add bounds with the builder methods.
    pub fn new(
        section: Section,
        field: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        RangeRule {
            section,
            field: field.into(),
            label: label.into(),
            unit: unit.into(),
            min: None,
            max: None,
            exclusive_min: false,
            severity: Severity::Error,
            message: None,
        }
    }

    pub fn between(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn at_least(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Strict lower bound: `value > min`
    pub fn greater_than(mut self, min: f64) -> Self {
        self.min = Some(min);
        self.exclusive_min = true;
        self
    }

    pub fn at_most(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Make this an advisory rule with a fixed message
    pub fn advisory(mut self, message: impl Into<String>) -> Self {
        self.severity = Severity::Warning;
        self.message = Some(message.into());
        self
    }

    /// Whether two rules address the same check (used for overrides).
    pub fn same_target(&self, other: &RangeRule) -> bool {
        self.section == other.section
            && self.field == other.field
            && self.severity == other.severity
    }

    /// Message for `value`, or `None` when it lies within bounds.
    pub fn check(&self, value: f64) -> Option<String> {
        let below = self.min.is_some_and(|min| {
            if self.exclusive_min {
                value <= min
            } else {
                value < min
            }
        });
        let above = self.max.is_some_and(|max| value > max);
        if !below && !above {
            return None;
        }

        if let Some(message) = &self.message {
            return Some(message.clone());
        }

        let label = &self.label;
        let unit = &self.unit;
        let text = match (self.min, self.max) {
            (Some(min), Some(max)) if self.exclusive_min => {
                format!("{label} must be greater than {min} and at most {max} {unit}")
            }
            (Some(min), Some(max)) => format!("{label} must be between {min} and {max} {unit}"),
            (Some(min), None) if self.exclusive_min => {
                format!("{label} must be greater than {min} {unit}")
            }
            (Some(min), None) => format!("{label} must be at least {min} {unit}"),
            (None, Some(max)) => format!("{label} must not exceed {max} {unit}"),
            (None, None) => unreachable!("a rule without bounds never fails"),
        };
        Some(text.trim_end().to_string())
    }
}

/// Field-keyed findings. Absence of a key means the field is currently fine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: BTreeMap<String, String>,
    pub warnings: BTreeMap<String, String>,
}

impl ValidationResult {
    /// No range violations (warnings allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn has_warning(&self, field: &str) -> bool {
        self.warnings.contains_key(field)
    }
}

/// Validate a specification against a rule table.
///
/// When several rules of the same severity fail for one field, the first in
/// table order supplies the message.
pub fn validate<B: BasicSection>(spec: &Specification<B>, rules: &[RangeRule]) -> ValidationResult {
    let mut result = ValidationResult::default();

    for rule in rules {
        let Some(value) = spec.numeric(rule.section, &rule.field) else {
            tracing::warn!(
                section = %rule.section,
                field = %rule.field,
                "validation rule names a field this specification does not carry"
            );
            continue;
        };

        if let Some(message) = rule.check(value) {
            let bucket = match rule.severity {
                Severity::Error => &mut result.errors,
                Severity::Warning => &mut result.warnings,
            };
            bucket.entry(rule.field.clone()).or_insert(message);
        }
    }

    result
}
