use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uom::si::{
    length::millimeter,
    mass::kilogram,
    pressure::megapascal,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume::{cubic_meter, liter},
};
use vessel_design::TankDesign;

use crate::ReportContext;

/// Flat summary of a tank design in engineering units.
///
/// Field suffixes name the unit: millimetres, cubic metres, kilograms,
/// megapascals, degrees Celsius and percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub project: String,
    pub date: Date,

    pub target_capacity_l: f64,
    pub diameter_mm: f64,
    pub length_mm: f64,
    pub design_pressure_mpa: f64,
    pub design_temperature_c: f64,
    pub material: String,
    pub product: String,

    pub allowable_stress_mpa: f64,
    pub calculated_thickness_mm: f64,
    pub required_thickness_mm: f64,
    pub selected_thickness_mm: f64,
    pub governed_by_minimum: bool,

    pub knuckle_radius_mm: f64,
    pub crown_radius_mm: f64,
    pub head_depth_mm: f64,
    pub heads_compliant: bool,

    pub shell_volume_m3: f64,
    pub heads_volume_m3: f64,
    pub gross_volume_m3: f64,
    pub verified_volume_m3: f64,
    pub capacity_deviation_percent: f64,
    pub capacity_match: bool,
    pub bund_capacity_m3: f64,

    pub shell_weight_kg: f64,
    pub end_weight_kg: f64,
    pub fittings_weight_kg: f64,
    pub empty_weight_kg: f64,
    pub operating_weight_kg: f64,
    pub hydrotest_weight_kg: f64,

    pub hydrostatic_test_pressure_mpa: f64,
    pub component_count: usize,
    pub requirement_count: usize,
}

impl DesignSummary {
    #[must_use]
    pub fn new(design: &TankDesign, context: &ReportContext) -> Self {
        let p = &design.parameters;
        let shell = &design.shell;
        let head = &design.head;
        let cap = &design.capacity;
        let w = &design.weights;

        Self {
            project: context.project.clone(),
            date: context.date,

            target_capacity_l: p.target_capacity.get::<liter>(),
            diameter_mm: p.diameter.get::<millimeter>(),
            length_mm: p.length.get::<millimeter>(),
            design_pressure_mpa: p.design_pressure.get::<megapascal>(),
            design_temperature_c: p.design_temperature.get::<degree_celsius>(),
            material: p.material.designation.clone(),
            product: p.product.name.clone(),

            allowable_stress_mpa: shell.allowable_stress.get::<megapascal>(),
            calculated_thickness_mm: shell.calculated.get::<millimeter>(),
            required_thickness_mm: shell.required.get::<millimeter>(),
            selected_thickness_mm: shell.selected.get::<millimeter>(),
            governed_by_minimum: shell.governed_by_minimum,

            knuckle_radius_mm: head.knuckle_radius.get::<millimeter>(),
            crown_radius_mm: head.crown_radius.get::<millimeter>(),
            head_depth_mm: head.depth.get::<millimeter>(),
            heads_compliant: design.heads_are_compliant(),

            shell_volume_m3: cap.shell_volume.get::<cubic_meter>(),
            heads_volume_m3: cap.heads_volume.get::<cubic_meter>(),
            gross_volume_m3: cap.gross_volume.get::<cubic_meter>(),
            verified_volume_m3: cap.verified_volume.get::<cubic_meter>(),
            capacity_deviation_percent: cap.deviation.get::<percent>(),
            capacity_match: cap.matches,
            bund_capacity_m3: cap.bund_capacity.get::<cubic_meter>(),

            shell_weight_kg: w.shell.get::<kilogram>(),
            end_weight_kg: w.end.get::<kilogram>(),
            fittings_weight_kg: w.fittings.get::<kilogram>(),
            empty_weight_kg: w.empty.get::<kilogram>(),
            operating_weight_kg: w.operating.get::<kilogram>(),
            hydrotest_weight_kg: w.hydrotest.get::<kilogram>(),

            hydrostatic_test_pressure_mpa: design.hydrostatic_test_pressure.get::<megapascal>(),
            component_count: design.components.len(),
            requirement_count: design.requirements().len(),
        }
    }

    /// Serialises the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
