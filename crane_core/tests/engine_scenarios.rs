//! End-to-end scenarios through the public store contract.

use pretty_assertions::assert_eq;

use crane_core::calculations::{StabilityRatio, StabilityStatus};
use crane_core::family::{CraneFamily, Gantry, Jib};
use crane_core::report::ExportReport;
use crane_core::spec::{JibBasic, Section, Specification};
use crane_core::store::SpecificationStore;
use crane_core::validation::validate;

#[test]
fn valid_specifications_have_no_errors() {
    let store = SpecificationStore::<Jib>::new();
    assert!(store.validation_errors().is_empty());

    for preset in Gantry::presets() {
        let mut store = SpecificationStore::<Gantry>::new();
        store.apply_preset(preset.id).unwrap();
        assert!(store.validation_errors().is_empty(), "{}", preset.id);
    }
}

#[test]
fn capacity_boundaries_for_jib_family() {
    let mut store = SpecificationStore::<Jib>::new();

    for (value, expect_error) in [(0.5, true), (1.0, false), (1000.0, false), (1000.5, true)] {
        store.set_field(Section::Basic, "capacity", value).unwrap();
        assert_eq!(
            store.validation_errors().contains_key("capacity"),
            expect_error,
            "capacity = {value}"
        );
    }
}

#[test]
fn preset_application_does_not_alias_catalogue() {
    let mut store = SpecificationStore::<Jib>::new();
    store.apply_preset("mobile-50t").unwrap();

    let catalogue_entry = &Jib::presets()[0].specification;
    assert_eq!(store.get(), catalogue_entry);

    let mut copy = store.get().clone();
    copy.basic.capacity = 999.0;
    assert_ne!(&copy, catalogue_entry);
    store.set_field(Section::Basic, "boom_length", 12.0).unwrap();

    assert_eq!(catalogue_entry.basic.capacity, 50.0);
    assert_eq!(catalogue_entry.basic.boom_length, 40.0);
}

#[test]
fn load_chart_is_deterministic() {
    let store = SpecificationStore::<Jib>::new();
    let first = store.derived_metrics().load_chart;
    let second = store.derived_metrics().load_chart;
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].radius < w[1].radius));
}

#[test]
fn stability_reference_values() {
    let mut store = SpecificationStore::<Jib>::new();
    store.set_field(Section::Basic, "capacity", 50.0).unwrap();
    store.set_field(Section::Basic, "load_radius", 10.0).unwrap();
    store.set_field(Section::Basic, "counterweight", 12000.0).unwrap();

    let stability = store.derived_metrics().stability;
    assert_eq!(stability.load_moment, 500.0);
    assert_eq!(stability.restoring_moment, 30.0);
    assert_eq!(stability.ratio, StabilityRatio::Finite(0.06));
    assert_eq!(stability.status, StabilityStatus::BelowThreshold);
}

#[test]
fn ground_bearing_reference_values() {
    let mut store = SpecificationStore::<Jib>::new();
    store.set_field(Section::Basic, "counterweight", "12000").unwrap();

    let bearing = store.derived_metrics().ground_bearing;
    assert_eq!(bearing.total_weight, 27.0);
    assert_eq!(bearing.pressure, 6.75);
}

#[test]
fn safety_factor_error_clears_when_corrected() {
    let mut store = SpecificationStore::<Jib>::new();

    store.set_field(Section::Safety, "safety_factor", 1.05).unwrap();
    assert!(store.validation_errors().contains_key("safety_factor"));

    store.set_field(Section::Safety, "safety_factor", 1.1).unwrap();
    assert!(!store.validation_errors().contains_key("safety_factor"));
}

#[test]
fn unparsable_capacity_stores_zero_and_reports_error() {
    let mut store = SpecificationStore::<Jib>::new();
    store.set_field(Section::Basic, "capacity", "abc").unwrap();

    assert_eq!(store.get().basic.capacity, 0.0);
    assert!(store.validation_errors().contains_key("capacity"));
    assert!(store.export().is_blocked());
}

#[test]
fn setting_current_value_is_a_no_op() {
    let mut store = SpecificationStore::<Gantry>::new();
    let before = store.get().clone();

    store.set_field(Section::Basic, "span", "30").unwrap();
    store.set_field(Section::Basic, "movement", "rail").unwrap();
    store.set_field(Section::Environmental, "ground_conditions", "firm").unwrap();

    assert_eq!(store.get(), &before);
}

#[test]
fn zero_radius_uses_documented_sentinel() {
    let mut store = SpecificationStore::<Gantry>::new();
    store.set_field(Section::Basic, "load_radius", "0").unwrap();

    let stability = store.derived_metrics().stability;
    assert_eq!(stability.ratio, StabilityRatio::NoLoadMoment);
    assert!(stability.is_acceptable());

    assert!(store.validation_errors().contains_key("load_radius"));
    assert!(store.export().is_blocked());
}

#[test]
fn negative_radius_is_rejected_and_unstable() {
    let mut store = SpecificationStore::<Jib>::new();
    store.set_field(Section::Basic, "load_radius", "-10").unwrap();

    let stability = store.derived_metrics().stability;
    assert_eq!(stability.status, StabilityStatus::BelowThreshold);
    assert!(!stability.is_acceptable());
    assert!(store.validation_errors().contains_key("load_radius"));
    assert!(store.export().is_blocked());
}

#[test]
fn vanishing_radius_exports_a_readable_report() {
    let mut store = SpecificationStore::<Jib>::new();
    store.set_field(Section::Basic, "load_radius", "1e-310").unwrap();

    assert!(store.validation_errors().is_empty());
    let outcome = store.export();
    let report = outcome.report().expect("positive radius must export");
    assert_eq!(report.metrics.stability.ratio, StabilityRatio::Unbounded);

    let json = report.to_json().unwrap();
    let roundtrip: ExportReport<JibBasic> = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip.metrics.stability.ratio, StabilityRatio::Unbounded);
}

#[test]
fn gantry_speeds_must_be_positive() {
    let mut store = SpecificationStore::<Gantry>::new();
    store.set_field(Section::Basic, "hoist_speed", 0.0).unwrap();
    store.set_field(Section::Basic, "lift_height", "0").unwrap();

    let errors = store.validation_errors();
    assert!(errors.contains_key("hoist_speed"));
    assert!(errors.contains_key("lift_height"));
    assert!(!errors.contains_key("travel_speed"));
}

#[test]
fn advisory_wind_exports_with_warning() {
    let mut store = SpecificationStore::<Jib>::new();
    store.set_field(Section::Environmental, "wind_speed", "62").unwrap();

    assert!(store.validation_errors().is_empty());
    let outcome = store.export();
    let report = outcome.report().expect("warnings must not block export");
    assert_eq!(
        report.warnings.get("wind_speed").map(String::as_str),
        Some("Wind speed above 50 km/h: operation not recommended")
    );
}

#[test]
fn validate_is_pure_over_free_function() {
    let spec = Specification::<JibBasic>::default()
        .with_field(Section::Basic, "boom_length", 150.0)
        .unwrap();
    let rules = Jib::profile().rules;

    let first = validate(&spec, &rules);
    let second = validate(&spec, &rules);
    assert_eq!(first, second);
    assert!(first.errors.contains_key("boom_length"));
}
