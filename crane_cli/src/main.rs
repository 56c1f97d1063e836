//! # Liftplan CLI Application
//!
//! Terminal front end over the `crane_core` contract: build a specification
//! from the defaults or a preset, apply field assignments, then print the
//! validation result and derived metrics or write an export report.
//!
//! ```text
//! crane_cli presets --family gantry
//! crane_cli check --preset tower-12t --set environmental.wind_speed=55
//! crane_cli export --family gantry --preset rmg-40t --out rmg.json
//! ```

mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde_json::{json, Value};
use tracing_subscriber::{fmt, EnvFilter};

use crane_core::calculations::DerivedMetrics;
use crane_core::errors::{CalcError, CalcResult};
use crane_core::family::{CraneFamily, Gantry, Jib};
use crane_core::file_io::{load_profile_overrides, save_report};
use crane_core::report::ExportOutcome;
use crane_core::spec::{parse_field_path, BasicSection, Section, Specification};
use crane_core::store::SpecificationStore;
use crane_core::validation::ValidationResult;

use cli::{Cli, Commands, FamilyArg, OutputFormat, SpecArgs};

/// Exit status when export is refused
const EXIT_BLOCKED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

/// Logging goes to stderr so JSON output on stdout stays clean.
///
/// RUST_LOG takes precedence; otherwise `info`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> CalcResult<ExitCode> {
    match command {
        Commands::Presets { family } => {
            match family {
                FamilyArg::Jib => print_presets::<Jib>(),
                FamilyArg::Gantry => print_presets::<Gantry>(),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { spec, format } => match spec.family {
            FamilyArg::Jib => check::<Jib>(&spec, format),
            FamilyArg::Gantry => check::<Gantry>(&spec, format),
        },
        Commands::Export { spec, out } => match spec.family {
            FamilyArg::Jib => export::<Jib>(&spec, &out),
            FamilyArg::Gantry => export::<Gantry>(&spec, &out),
        },
    }
}

/// Profile overrides, then preset, then assignments in command-line order.
fn build_store<F: CraneFamily>(args: &SpecArgs) -> CalcResult<SpecificationStore<F>> {
    let mut profile = F::profile();
    if let Some(path) = &args.profile {
        profile.apply_overrides(load_profile_overrides(path)?)?;
    }

    let mut store = SpecificationStore::<F>::with_profile(profile)?;
    if let Some(id) = &args.preset {
        store.apply_preset(id)?;
    }

    for assignment in &args.assignments {
        let (path, value) = assignment.split_once('=').ok_or_else(|| {
            CalcError::invalid_input("set", assignment.as_str(), "Expected SECTION.FIELD=VALUE")
        })?;
        let (section, field) = parse_field_path(path)?;
        store.set_field(section, &field, value)?;
    }

    tracing::debug!(
        family = ?F::KIND,
        preset = args.preset.as_deref().unwrap_or("default"),
        assignments = args.assignments.len(),
        "specification built"
    );
    Ok(store)
}

fn print_presets<F: CraneFamily>() {
    println!("{} presets", F::KIND);
    println!("═══════════════════════════════════════");
    for preset in F::presets() {
        println!("  {:<16} {}", preset.id, preset.name);
        println!("  {:<16} {}", "", preset.description);
    }
}

fn check<F: CraneFamily>(args: &SpecArgs, format: OutputFormat) -> CalcResult<ExitCode> {
    let store = build_store::<F>(args)?;
    let validation = store.validation();
    let metrics = store.derived_metrics();

    match format {
        OutputFormat::Json => {
            let output = json!({
                "family": F::KIND,
                "specification": store.get(),
                "validation": validation,
                "metrics": metrics,
            });
            let text =
                serde_json::to_string_pretty(&output).map_err(|e| CalcError::SerializationError {
                    reason: e.to_string(),
                })?;
            println!("{}", text);
        }
        OutputFormat::Table => {
            print_specification(store.get())?;
            print_validation(&validation);
            print_metrics(&metrics, store.profile().formulas.min_stability_ratio);
        }
    }

    Ok(if validation.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn export<F: CraneFamily>(args: &SpecArgs, out: &Path) -> CalcResult<ExitCode> {
    let store = build_store::<F>(args)?;

    match store.export() {
        ExportOutcome::Ready(report) => {
            save_report(&report, out)?;
            println!("Report {} written to {}", report.id, out.display());
            for (field, message) in &report.warnings {
                println!("  [WARN] {}: {}", field, message);
            }
            Ok(ExitCode::SUCCESS)
        }
        ExportOutcome::Blocked { errors } => {
            eprintln!("Export blocked: fix the following fields first");
            for (field, message) in &errors {
                eprintln!("  [ERROR] {}: {}", field, message);
            }
            Ok(ExitCode::from(EXIT_BLOCKED))
        }
    }
}

fn print_specification<B: BasicSection>(spec: &Specification<B>) -> CalcResult<()> {
    let value = serde_json::to_value(spec).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    println!("═══════════════════════════════════════");
    println!("  SPECIFICATION");
    println!("═══════════════════════════════════════");
    for section in Section::ALL {
        println!();
        println!("{}:", section);
        for field in Specification::<B>::field_names(section) {
            let shown = match &value[section.as_str()][*field] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            println!("  {:<20} {}", field, shown);
        }
    }
    println!();
    Ok(())
}

fn print_validation(validation: &ValidationResult) {
    println!("Validation:");
    if validation.errors.is_empty() && validation.warnings.is_empty() {
        println!("  [OK] all fields within range");
    }
    for (field, message) in &validation.errors {
        println!("  [ERROR] {}: {}", field, message);
    }
    for (field, message) in &validation.warnings {
        println!("  [WARN]  {}: {}", field, message);
    }
    println!();
}

fn print_metrics(metrics: &DerivedMetrics, min_ratio: f64) {
    println!("Load Chart:");
    if metrics.load_chart.is_empty() {
        println!("  (reach too short for a chart)");
    }
    for point in &metrics.load_chart {
        println!("  r = {:>5.1} m   {:>8.1} t", point.radius, point.capacity);
    }
    println!();

    let stability = &metrics.stability;
    println!("Stability:");
    println!("  M_load    = {:.1} t·m", stability.load_moment);
    println!("  M_restore = {:.1} t·m", stability.restoring_moment);
    println!(
        "  ratio     = {} (min {:.2}) {}",
        stability.ratio,
        min_ratio,
        status_icon(stability.is_acceptable())
    );
    println!();

    let bearing = &metrics.ground_bearing;
    println!("Ground Bearing:");
    println!(
        "  W = {:.1} t over {} points ({:.1} m²)",
        bearing.total_weight, bearing.bearing_points, bearing.bearing_area
    );
    println!("  p = {:.1} t/m²", bearing.pressure_rounded());
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("liftplan_cli_test_{}", name))
    }

    fn spec_args(preset: Option<&str>, assignments: &[&str]) -> SpecArgs {
        SpecArgs {
            family: FamilyArg::Jib,
            preset: preset.map(str::to_string),
            profile: None,
            assignments: assignments.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_assignments_apply_after_preset() {
        let args = spec_args(Some("tower-12t"), &["basic.capacity=8", "basic.capacity=9"]);
        let store = build_store::<Jib>(&args).unwrap();

        let preset = &Jib::presets()[1].specification;
        assert_eq!(store.get().basic.capacity, 9.0);
        assert_eq!(store.get().basic.boom_length, preset.basic.boom_length);
        assert_eq!(store.get().environmental, preset.environmental);
    }

    #[test]
    fn test_profile_applies_before_preset() {
        let path = temp_path("calm_site.toml");
        fs::write(
            &path,
            r#"
            kind = "jib"

            [[rules]]
            section = "environmental"
            field = "wind_speed"
            label = "Wind speed"
            max = 25.0
            severity = "warning"
            "#,
        )
        .unwrap();

        let mut args = spec_args(Some("tower-12t"), &[]);
        args.profile = Some(path.clone());
        let store = build_store::<Jib>(&args).unwrap();
        assert!(store.warnings().contains_key("wind_speed"));

        args.assignments = vec!["environmental.wind_speed=20".to_string()];
        let store = build_store::<Jib>(&args).unwrap();
        assert!(store.warnings().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_assignment_is_invalid_input() {
        let err = build_store::<Jib>(&spec_args(None, &["basic.capacity"])).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = build_store::<Jib>(&spec_args(None, &["capacity=5"])).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_preset_fails() {
        let err = build_store::<Jib>(&spec_args(Some("tower-99t"), &[])).unwrap_err();
        assert_eq!(err.error_code(), "PRESET_NOT_FOUND");
    }

    #[test]
    fn test_blocked_export_exits_with_code_2() {
        let out = temp_path("blocked_report.json");
        let args = spec_args(None, &["safety.safety_factor=1.0"]);

        let code = export::<Jib>(&args, &out).unwrap();
        assert_eq!(code, ExitCode::from(EXIT_BLOCKED));
        assert!(!out.exists());
    }

    #[test]
    fn test_valid_export_writes_report() {
        let out = temp_path("ready_report.json");
        let args = spec_args(Some("mobile-50t"), &["environmental.wind_speed=70"]);

        let code = export::<Jib>(&args, &out).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let text = fs::read_to_string(&out).unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["family"], "jib");
        assert!(report["warnings"]["wind_speed"].is_string());

        let _ = fs::remove_file(&out);
    }
}
