//! # crane_core - Crane Specification Engine
//!
//! `crane_core` is the computational heart of Liftplan. It holds a crane
//! specification, validates it against per-family ranges, derives load-chart,
//! stability and ground-bearing figures, and produces export reports. All
//! inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **One engine, two families**: jib-type and gantry cranes share every
//!   algorithm; a [`FamilyProfile`] supplies the ranges and formula constants
//! - **Derived, not stored**: validation and metrics are recomputed from the
//!   current record on every read
//! - **Findings are data**: range violations and advisories are returned as
//!   field-keyed maps; [`CalcError`] is reserved for contract violations
//!
//! ## Quick Start
//!
//! ```rust
//! use crane_core::family::Jib;
//! use crane_core::spec::Section;
//! use crane_core::store::SpecificationStore;
//!
//! let mut store = SpecificationStore::<Jib>::new();
//! store.apply_preset("tower-12t").unwrap();
//! store.set_field(Section::Environmental, "wind_speed", "55").unwrap();
//!
//! assert!(store.validation_errors().is_empty());
//! assert!(store.warnings().contains_key("wind_speed"));
//!
//! let metrics = store.derived_metrics();
//! println!("Stability ratio: {}", metrics.stability.ratio);
//! ```
//!
//! ## Modules
//!
//! - [`spec`] - Specification record, sections and enum fields
//! - [`family`] - Family profiles (rule tables and formula constants)
//! - [`validation`] - Range rules and the validator
//! - [`calculations`] - Load chart, stability and ground bearing
//! - [`presets`] - Compiled-in preset catalogue
//! - [`store`] - Session state container
//! - [`report`] - Export reports
//! - [`file_io`] - Atomic report saves and profile override files
//! - [`input`] - Raw form value coercion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod family;
pub mod file_io;
pub mod input;
pub mod presets;
pub mod report;
pub mod spec;
pub mod store;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::DerivedMetrics;
pub use errors::{CalcError, CalcResult};
pub use family::{CraneFamily, FamilyKind, FamilyProfile, Gantry, Jib};
pub use report::{ExportOutcome, ExportReport};
pub use spec::{Section, Specification};
pub use store::SpecificationStore;
pub use validation::ValidationResult;
