//! # File I/O Module
//!
//! The engine itself never touches the filesystem. This module holds the two
//! file operations front ends need:
//!
//! - **Report saves**: export reports are written atomically (write to `.tmp`,
//!   fsync, rename) so an interrupted save never leaves a truncated report.
//! - **Profile overrides**: TOML files adjusting a family profile.
//!
//! ## Example
//!
//! ```rust,no_run
//! use crane_core::file_io::{load_profile_overrides, save_report};
//! use crane_core::family::Jib;
//! use crane_core::store::SpecificationStore;
//! use std::path::Path;
//!
//! let mut profile = crane_core::family::FamilyProfile::jib();
//! profile.apply_overrides(load_profile_overrides(Path::new("site.toml"))?)?;
//!
//! let store = SpecificationStore::<Jib>::with_profile(profile)?;
//! if let Some(report) = store.export().report() {
//!     save_report(report, Path::new("lift-plan.json"))?;
//! }
//! # Ok::<(), crane_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::family::ProfileOverrides;
use crate::report::ExportReport;

/// Save an export report as pretty JSON with atomic write semantics.
///
/// The save process:
/// 1. Serialize report to JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk (fsync)
/// 4. Rename over the target (atomic on most filesystems)
pub fn save_report<B: Serialize>(report: &ExportReport<B>, path: &Path) -> CalcResult<()> {
    let json = report.to_json()?;
    write_atomic(path, json.as_bytes())?;
    tracing::info!(path = %path.display(), report_id = %report.id, "report saved");
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let result = write_synced(&tmp_path, bytes).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });

    if result.is_err() {
        // Never leave a partial temp file next to the target
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_synced(tmp_path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}

/// `report.json` -> `report.json.tmp`
fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    tmp.into()
}

/// Load profile overrides from a TOML file.
///
/// # Returns
///
/// * `Ok(ProfileOverrides)` - Parsed overrides
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::ConfigError)` - Invalid TOML or unknown keys
pub fn load_profile_overrides(path: &Path) -> CalcResult<ProfileOverrides> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    ProfileOverrides::from_toml_str(&contents).map_err(|e| match e {
        CalcError::ConfigError { reason } => CalcError::ConfigError {
            reason: format!("{}: {}", path.display(), reason),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{CraneFamily, FamilyKind, Jib};
    use crate::report::export_report;
    use crate::spec::JibBasic;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("liftplan_test_{}", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/plans/report.json")),
            Path::new("/plans/report.json.tmp")
        );
    }

    #[test]
    fn test_save_report_roundtrip() {
        let path = temp_path("report.json");
        let outcome = export_report::<Jib>(&Jib::default_specification(), &Jib::profile());
        let report = outcome.report().unwrap();

        save_report(report, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let loaded: ExportReport<JibBasic> = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.specification, report.specification);

        // Temp file should not exist after successful save
        assert!(!tmp_path_for(&path).exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        // A non-empty directory at the target makes the final rename fail
        let path = temp_path("occupied_report.json");
        fs::create_dir_all(path.join("inner")).unwrap();

        let err = write_atomic(&path, b"{}").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path_for(&path).exists());

        let _ = fs::remove_dir_all(&path);
    }

    #[test]
    fn test_unwritable_temp_location_leaves_nothing_behind() {
        let path = temp_path("missing_dir").join("report.json");

        let err = write_atomic(&path, b"{}").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path_for(&path).exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_profile_overrides() {
        let path = temp_path("overrides.toml");
        fs::write(
            &path,
            r#"
            kind = "jib"

            [[rules]]
            section = "environmental"
            field = "wind_speed"
            label = "Wind speed"
            unit = "km/h"
            max = 40.0
            severity = "warning"
            "#,
        )
        .unwrap();

        let overrides = load_profile_overrides(&path).unwrap();
        assert_eq!(overrides.kind, Some(FamilyKind::Jib));
        assert_eq!(overrides.rules.len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_override_file() {
        let err = load_profile_overrides(&temp_path("does_not_exist.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_override_file_names_path() {
        let path = temp_path("broken.toml");
        fs::write(&path, "kind = [").unwrap();

        let err = load_profile_overrides(&path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("broken.toml"));

        let _ = fs::remove_file(&path);
    }
}
