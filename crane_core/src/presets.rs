//! # Preset Catalogue
//!
//! Compiled-in, named specification templates, four per family. A preset is
//! always applied wholesale: [`PresetTemplate::apply`] hands out an owned copy,
//! so editing the applied record never touches the catalogue.
//!
//! ## Example
//!
//! ```rust
//! use crane_core::family::{CraneFamily, Jib};
//! use crane_core::presets::find_preset;
//!
//! let preset = find_preset(Jib::presets(), "tower-12t").unwrap();
//! let mut spec = preset.apply();
//! spec.basic.capacity = 1.0;
//!
//! assert_eq!(preset.specification.basic.capacity, 12.0);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::spec::{
    Environmental, GantryBasic, GantryCraneType, GantryMovement, GroundConditions, JibBasic,
    JibCraneType, LoadChartSource, Safety, Specification, Visibility,
};

/// A named, complete specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetTemplate<B> {
    /// Stable identifier used to select the preset
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub specification: Specification<B>,
}

impl<B: Clone> PresetTemplate<B> {
    /// Owned copy of the bundled specification
    pub fn apply(&self) -> Specification<B> {
        self.specification.clone()
    }
}

/// Look up a preset by id.
pub fn find_preset<B>(
    catalogue: &'static [PresetTemplate<B>],
    id: &str,
) -> CalcResult<&'static PresetTemplate<B>> {
    catalogue
        .iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| CalcError::preset_not_found(id))
}

fn environmental(
    wind_speed: f64,
    temperature: f64,
    ground_conditions: GroundConditions,
    visibility: Visibility,
) -> Environmental {
    Environmental {
        wind_speed,
        temperature,
        ground_conditions,
        visibility,
    }
}

fn safety(safety_factor: f64, operational_limits: f64, load_chart: LoadChartSource) -> Safety {
    Safety {
        safety_factor,
        operational_limits,
        load_chart,
    }
}

pub(crate) static JIB_PRESETS: Lazy<Vec<PresetTemplate<JibBasic>>> = Lazy::new(|| {
    vec![
        PresetTemplate {
            id: "mobile-50t",
            name: "Mobile Crane 50 t",
            description: "All-terrain mobile crane on outriggers",
            specification: Specification {
                basic: JibBasic {
                    crane_type: JibCraneType::Mobile,
                    capacity: 50.0,
                    boom_length: 40.0,
                    counterweight: 12000.0,
                    load_radius: 10.0,
                },
                environmental: environmental(20.0, 20.0, GroundConditions::Firm, Visibility::Good),
                safety: safety(1.5, 80.0, LoadChartSource::Manufacturer),
            },
        },
        PresetTemplate {
            id: "tower-12t",
            name: "Tower Crane 12 t",
            description: "Flat-top tower crane for high-rise construction",
            specification: Specification {
                basic: JibBasic {
                    crane_type: JibCraneType::Tower,
                    capacity: 12.0,
                    boom_length: 60.0,
                    counterweight: 30000.0,
                    load_radius: 25.0,
                },
                environmental: environmental(
                    30.0,
                    15.0,
                    GroundConditions::Paved,
                    Visibility::Excellent,
                ),
                safety: safety(1.25, 85.0, LoadChartSource::Manufacturer),
            },
        },
        PresetTemplate {
            id: "crawler-250t",
            name: "Crawler Crane 250 t",
            description: "Lattice-boom crawler for heavy industrial lifts",
            specification: Specification {
                basic: JibBasic {
                    crane_type: JibCraneType::Crawler,
                    capacity: 250.0,
                    boom_length: 84.0,
                    counterweight: 95000.0,
                    load_radius: 18.0,
                },
                environmental: environmental(25.0, 10.0, GroundConditions::Soft, Visibility::Good),
                safety: safety(1.5, 75.0, LoadChartSource::Calculated),
            },
        },
        PresetTemplate {
            id: "overhead-20t",
            name: "Overhead Crane 20 t",
            description: "Indoor overhead travelling crane",
            specification: Specification {
                basic: JibBasic {
                    crane_type: JibCraneType::Overhead,
                    capacity: 20.0,
                    boom_length: 24.0,
                    counterweight: 0.0,
                    load_radius: 8.0,
                },
                environmental: environmental(0.0, 22.0, GroundConditions::Steel, Visibility::Good),
                safety: safety(1.25, 90.0, LoadChartSource::Tested),
            },
        },
    ]
});

pub(crate) static GANTRY_PRESETS: Lazy<Vec<PresetTemplate<GantryBasic>>> = Lazy::new(|| {
    vec![
        PresetTemplate {
            id: "rmg-40t",
            name: "Rail-Mounted Gantry 40 t",
            description: "Container yard gantry on rails",
            specification: Specification {
                basic: GantryBasic {
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
                },
                environmental: environmental(20.0, 20.0, GroundConditions::Paved, Visibility::Good),
                safety: safety(1.5, 80.0, LoadChartSource::Manufacturer),
            },
        },
        PresetTemplate {
            id: "rtg-41t",
            name: "Rubber-Tyred Gantry 41 t",
            description: "Container stacking gantry on eight wheels",
            specification: Specification {
                basic: GantryBasic {
                    crane_type: GantryCraneType::RubberTyred,
                    capacity: 41.0,
                    span: 23.5,
                    lift_height: 18.2,
                    structure_weight: 140000.0,
                    load_radius: 12.0,
                    leg_count: 8,
                    movement: GantryMovement::Tyre,
                    hoist_speed: 20.0,
                    travel_speed: 130.0,
                },
                environmental: environmental(40.0, 25.0, GroundConditions::Paved, Visibility::Good),
                safety: safety(1.5, 85.0, LoadChartSource::Manufacturer),
            },
        },
        PresetTemplate {
            id: "shipyard-800t",
            name: "Shipyard Portal Gantry 800 t",
            description: "Goliath gantry for block erection in dry dock",
            specification: Specification {
                basic: GantryBasic {
                    crane_type: GantryCraneType::Portal,
                    capacity: 800.0,
                    span: 170.0,
                    lift_height: 90.0,
                    structure_weight: 2500000.0,
                    load_radius: 60.0,
                    leg_count: 4,
                    movement: GantryMovement::Rail,
                    hoist_speed: 5.0,
                    travel_speed: 25.0,
                },
                environmental: environmental(
                    35.0,
                    15.0,
                    GroundConditions::Firm,
                    Visibility::Moderate,
                ),
                safety: safety(1.4, 70.0, LoadChartSource::Tested),
            },
        },
        PresetTemplate {
            id: "workshop-10t",
            name: "Workshop Semi-Gantry 10 t",
            description: "Semi-gantry running on one floor rail and one wall rail",
            specification: Specification {
                basic: GantryBasic {
                    crane_type: GantryCraneType::Semi,
                    capacity: 10.0,
                    span: 15.0,
                    lift_height: 8.0,
                    structure_weight: 12000.0,
                    load_radius: 5.0,
                    leg_count: 2,
                    movement: GantryMovement::Rail,
                    hoist_speed: 8.0,
                    travel_speed: 40.0,
                },
                environmental: environmental(0.0, 18.0, GroundConditions::Paved, Visibility::Good),
                safety: safety(1.25, 90.0, LoadChartSource::Manufacturer),
            },
        },
    ]
});
