//! # Export Reports
//!
//! An export is a read of the current specification plus its derived metrics
//! into a self-contained report. Export is refused while the specification has
//! range violations; advisory warnings travel inside the report instead.
//!
//! Building a report performs no I/O. Use [`crate::file_io::save_report`] to
//! write one to disk.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "id": "5f0c…",
//!   "generated_at": "2025-01-01T12:00:00Z",
//!   "family": "jib",
//!   "specification": { "basic": { … }, "environmental": { … }, "safety": { … } },
//!   "metrics": { "load_chart": [ … ], "stability": { … }, "ground_bearing": { … } },
//!   "warnings": { "wind_speed": "Wind speed above 50 km/h: operation not recommended" }
//! }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{derive_metrics, DerivedMetrics};
use crate::errors::{CalcError, CalcResult};
use crate::family::{CraneFamily, FamilyKind, FamilyProfile};
use crate::spec::Specification;
use crate::validation::validate;

/// Export payload for a valid specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport<B> {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub family: FamilyKind,
    pub specification: Specification<B>,
    pub metrics: DerivedMetrics,
    /// Advisory findings at the time of export
    pub warnings: BTreeMap<String, String>,
}

impl<B: Serialize> ExportReport<B> {
    /// Pretty-printed JSON payload
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome<B> {
    Ready(ExportReport<B>),
    /// The specification has range violations
    Blocked { errors: BTreeMap<String, String> },
}

impl<B> ExportOutcome<B> {
    pub fn is_blocked(&self) -> bool {
        matches!(self, ExportOutcome::Blocked { .. })
    }

    pub fn report(&self) -> Option<&ExportReport<B>> {
        match self {
            ExportOutcome::Ready(report) => Some(report),
            ExportOutcome::Blocked { .. } => None,
        }
    }
}

/// Build an export report, or the blocking error set.
///
/// The report's family is always `F::KIND`; `profile` supplies the rules and
/// formula constants.
pub fn export_report<F: CraneFamily>(
    spec: &Specification<F::Basic>,
    profile: &FamilyProfile,
) -> ExportOutcome<F::Basic> {
    let validation = validate(spec, &profile.rules);

    if !validation.is_valid() {
        tracing::warn!(
            family = ?F::KIND,
            errors = validation.errors.len(),
            "export blocked by validation errors"
        );
        return ExportOutcome::Blocked {
            errors: validation.errors,
        };
    }

    let report = ExportReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        family: F::KIND,
        specification: spec.clone(),
        metrics: derive_metrics(spec, &profile.formulas),
        warnings: validation.warnings,
    };
    tracing::info!(report_id = %report.id, family = ?F::KIND, "export report built");

    ExportOutcome::Ready(report)
}
