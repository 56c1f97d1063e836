//! # Specification Store
//!
//! The explicit state container a presentation layer holds for one editing
//! session. It owns the family profile and the current specification and
//! exposes the whole engine contract:
//!
//! ```text
//! set_field / load / apply_preset  ->  current Specification
//!                                         ├── validation()       (re-run on demand)
//!                                         ├── derived_metrics()  (re-run on demand)
//!                                         └── export()           (blocked on errors)
//! ```
//!
//! Nothing is cached; every read re-derives from the current record. Writes
//! are last-write-wins.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::family::Jib;
//! use crane_core::spec::Section;
//! use crane_core::store::SpecificationStore;
//!
//! let mut store = SpecificationStore::<Jib>::new();
//! store.set_field(Section::Basic, "capacity", "abc").unwrap();
//!
//! assert_eq!(store.get().basic.capacity, 0.0);
//! assert!(store.validation_errors().contains_key("capacity"));
//! assert!(store.export().is_blocked());
//! ```

use std::collections::BTreeMap;

use crate::calculations::{derive_metrics, DerivedMetrics};
use crate::errors::{CalcError, CalcResult};
use crate::family::{CraneFamily, FamilyProfile};
use crate::input::RawValue;
use crate::presets::{find_preset, PresetTemplate};
use crate::report::{export_report, ExportOutcome};
use crate::spec::{Section, Specification};
use crate::validation::{validate, ValidationResult};

/// Editing session state for one crane family.
#[derive(Debug, Clone)]
pub struct SpecificationStore<F: CraneFamily> {
    profile: FamilyProfile,
    spec: Specification<F::Basic>,
}

impl<F: CraneFamily> SpecificationStore<F> {
    /// Start from the family's default specification and compiled-in profile.
    pub fn new() -> Self {
        SpecificationStore {
            profile: F::profile(),
            spec: F::default_specification(),
        }
    }

    /// Start from the default specification with a custom profile.
    ///
    /// The profile must belong to this store's family; a profile of the other
    /// family is a [`CalcError::ConfigError`].
    pub fn with_profile(profile: FamilyProfile) -> CalcResult<Self> {
        if profile.kind != F::KIND {
            return Err(CalcError::config_error(format!(
                "a {} profile cannot drive a {} specification",
                profile.kind.display_name(),
                F::KIND.display_name()
            )));
        }

        Ok(SpecificationStore {
            profile,
            spec: F::default_specification(),
        })
    }

    pub fn profile(&self) -> &FamilyProfile {
        &self.profile
    }

    /// Current specification
    pub fn get(&self) -> &Specification<F::Basic> {
        &self.spec
    }

    /// Replace one field from raw form input.
    ///
    /// Numeric text that does not parse is stored as `0`. On error (unknown
    /// field, enum value outside its set) the store is unchanged.
    pub fn set_field(
        &mut self,
        section: Section,
        field: &str,
        raw: impl Into<RawValue>,
    ) -> CalcResult<&Specification<F::Basic>> {
        let raw = raw.into();
        self.spec = self.spec.with_field(section, field, raw.clone())?;
        tracing::debug!(%section, field, value = ?raw, "specification field updated");
        Ok(&self.spec)
    }

    /// Replace the whole specification.
    pub fn load(&mut self, spec: Specification<F::Basic>) -> &Specification<F::Basic> {
        self.spec = spec;
        &self.spec
    }

    /// Errors and warnings for the current specification
    pub fn validation(&self) -> ValidationResult {
        validate(&self.spec, &self.profile.rules)
    }

    /// Range violations only; non-empty means export is blocked
    pub fn validation_errors(&self) -> BTreeMap<String, String> {
        self.validation().errors
    }

    /// Advisory findings only
    pub fn warnings(&self) -> BTreeMap<String, String> {
        self.validation().warnings
    }

    pub fn derived_metrics(&self) -> DerivedMetrics {
        derive_metrics(&self.spec, &self.profile.formulas)
    }

    pub fn list_presets(&self) -> &'static [PresetTemplate<F::Basic>] {
        F::presets()
    }

    /// Overwrite the specification with a preset.
    ///
    /// Unknown ids return [`CalcError::PresetNotFound`](crate::errors::CalcError::PresetNotFound)
    /// and leave the store unchanged.
    pub fn apply_preset(&mut self, id: &str) -> CalcResult<&Specification<F::Basic>> {
        let preset = find_preset(F::presets(), id)?;
        tracing::info!(family = ?F::KIND, preset = preset.id, "preset applied");
        Ok(self.load(preset.apply()))
    }

    pub fn export(&self) -> ExportOutcome<F::Basic> {
        export_report::<F>(&self.spec, &self.profile)
    }
}

impl<F: CraneFamily> Default for SpecificationStore<F> {
    fn default() -> Self {
        Self::new()
    }
}
