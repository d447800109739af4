use std::fmt;

use uom::si::{
    angle::degree,
    area::square_meter,
    length::millimeter,
    mass::kilogram,
    pressure::{megapascal, pound_force_per_square_inch},
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume::{cubic_meter, liter},
};
use vessel_design::{
    TankDesign,
    capacity::CapacityBasis,
    components::{ComponentSpec, DimensionValue},
    heads::{MAX_CROWN_RADIUS_FACTOR, MIN_KNUCKLE_RADIUS_MM},
    requirements::{self, Standard},
};

use crate::{
    ReportContext,
    markdown::{Group, capitalize, pass_fail, write_group, yes_no},
};

/// Section headings of the analysis report, in order.
pub const SECTIONS: [&str; 7] = [
    "Project Information",
    "Executive Summary",
    "Detailed Component Analysis",
    "Safety Standards Compliance Matrix",
    "Engineering Calculations",
    "Quality Assurance Checklist",
    "Compliance Declaration",
];

/// The design analysis report.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisReport<'a> {
    design: &'a TankDesign,
    context: &'a ReportContext,
}

impl<'a> AnalysisReport<'a> {
    #[must_use]
    pub fn new(design: &'a TankDesign, context: &'a ReportContext) -> Self {
        Self { design, context }
    }

    fn project_information(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.context;
        let capacity = self.design.parameters.target_capacity.get::<liter>();

        writeln!(f, "## {}", SECTIONS[0])?;
        writeln!(f)?;
        writeln!(f, "- **Project:** {capacity:.0} L {}", ctx.project)?;
        writeln!(f, "- **Client:** {}", ctx.client)?;
        writeln!(f, "- **Designer:** {}", ctx.designer)?;
        writeln!(f, "- **Date:** {}", ctx.date)?;
        writeln!(f, "- **Design basis:** {}", Standard::Sans10131.citation())?;
        writeln!(f)
    }

    fn executive_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.design;
        let p = &d.parameters;

        writeln!(f, "## {}", SECTIONS[1])?;
        writeln!(f)?;
        writeln!(
            f,
            "This report analyses every component of a {:.0} L horizontal cylindrical \
             storage tank against the applicable safety standards and engineering codes.",
            p.target_capacity.get::<liter>()
        )?;
        writeln!(f)?;
        writeln!(f, "| Item | Value |")?;
        writeln!(f, "|------|-------|")?;
        writeln!(
            f,
            "| Capacity | {:.0} L ({:.2} m³) |",
            p.target_capacity.get::<liter>(),
            p.target_capacity.get::<cubic_meter>()
        )?;
        writeln!(f, "| Diameter | {:.0} mm |", p.diameter.get::<millimeter>())?;
        writeln!(f, "| Length | {:.0} mm |", p.length.get::<millimeter>())?;
        writeln!(f, "| Shell thickness | {:.1} mm |", d.shell.selected.get::<millimeter>())?;
        writeln!(
            f,
            "| Design pressure | {:.2} psig ({:.4} MPa) |",
            p.design_pressure.get::<pound_force_per_square_inch>(),
            p.design_pressure.get::<megapascal>()
        )?;
        writeln!(
            f,
            "| Design temperature | {:.0} °C |",
            p.design_temperature.get::<degree_celsius>()
        )?;
        writeln!(f, "| Plate material | {} |", p.material.designation)?;
        writeln!(f, "| Stored product | {} |", p.product.name)?;
        writeln!(f, "| Capacity match | {} |", pass_fail(d.capacity.matches))?;
        writeln!(f, "| Empty weight | {:.0} kg |", d.weights.empty.get::<kilogram>())?;
        writeln!(f)
    }

    fn component_analysis(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", SECTIONS[2])?;
        writeln!(f)?;
        self.design
            .components
            .iter()
            .try_for_each(|spec| write_component(f, spec))
    }

    fn compliance_matrix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let covered = requirements::covered_standards();

        writeln!(f, "## {}", SECTIONS[3])?;
        writeln!(f)?;
        writeln!(
            f,
            "Total safety requirements: {}, across {} standards.",
            self.design.requirements().len(),
            covered.len()
        )?;
        writeln!(f)?;

        for standard in covered {
            let rows: Vec<_> = requirements::for_standard(standard).collect();

            writeln!(f, "### {} ({})", standard.citation(), standard.title())?;
            writeln!(f)?;
            writeln!(f, "Requirements: {}", rows.len())?;
            writeln!(f)?;
            writeln!(f, "| Clause | Description | Inspector Required | Verification Method |")?;
            writeln!(f, "|--------|-------------|--------------------|---------------------|")?;
            for req in rows {
                writeln!(
                    f,
                    "| {} | {} | {} | {} |",
                    req.clause,
                    req.description,
                    yes_no(req.inspector_required),
                    req.verification_method
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn engineering_calculations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.design;
        let p = &d.parameters;
        let shell = &d.shell;
        let head = &d.head;
        let cap = &d.capacity;
        let w = &d.weights;

        writeln!(f, "## {}", SECTIONS[4])?;
        writeln!(f)?;

        writeln!(f, "### Shell Thickness")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        writeln!(f, "S      = Sy · fraction")?;
        writeln!(f, "t_calc = P · R / (S · E − 0.6 · P)")?;
        writeln!(f, "t_min  = t_calc + CA")?;
        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Design pressure P: {:.2} psig ({:.4} MPa)",
            p.design_pressure.get::<pound_force_per_square_inch>(),
            p.design_pressure.get::<megapascal>()
        )?;
        writeln!(f, "- Shell radius R: {:.1} mm", 0.5 * p.diameter.get::<millimeter>())?;
        writeln!(
            f,
            "- Yield strength Sy: {:.0} MPa",
            p.material.yield_strength.get::<megapascal>()
        )?;
        writeln!(
            f,
            "- Allowable stress S: {:.1} MPa ({:.0} % of yield)",
            shell.allowable_stress.get::<megapascal>(),
            p.allowable_stress_fraction.get::<percent>()
        )?;
        writeln!(f, "- Joint efficiency E: {:.0} %", p.joint_efficiency.get::<percent>())?;
        writeln!(
            f,
            "- Corrosion allowance CA: {:.1} mm",
            p.corrosion_allowance.get::<millimeter>()
        )?;
        writeln!(
            f,
            "- Calculated thickness t_calc: {:.3} mm",
            shell.calculated.get::<millimeter>()
        )?;
        writeln!(
            f,
            "- Required thickness t_min: {:.3} mm",
            shell.required.get::<millimeter>()
        )?;
        writeln!(
            f,
            "- Minimum plate thickness: {:.1} mm",
            p.minimum_thickness.get::<millimeter>()
        )?;
        writeln!(
            f,
            "- **Selected thickness: {:.1} mm** ({})",
            shell.selected.get::<millimeter>(),
            if shell.governed_by_minimum {
                "minimum thickness governs"
            } else {
                "next standard plate gauge"
            }
        )?;
        writeln!(f)?;

        writeln!(f, "### Dished Ends")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Knuckle radius: {:.1} mm (minimum {MIN_KNUCKLE_RADIUS_MM:.0} mm: {})",
            head.knuckle_radius.get::<millimeter>(),
            pass_fail(head.knuckle_is_compliant())
        )?;
        writeln!(
            f,
            "- Crown radius: {:.0} mm (between {:.0} and {:.0} mm: {})",
            head.crown_radius.get::<millimeter>(),
            p.diameter.get::<millimeter>(),
            MAX_CROWN_RADIUS_FACTOR * p.diameter.get::<millimeter>(),
            pass_fail(head.crown_is_compliant(p.diameter))
        )?;
        writeln!(f, "- Head depth: {:.1} mm", head.depth.get::<millimeter>())?;
        writeln!(f, "- Volume per head: {:.3} m³", head.volume.get::<cubic_meter>())?;
        writeln!(
            f,
            "- Surface area per head: {:.3} m²",
            head.surface_area.get::<square_meter>()
        )?;
        writeln!(f)?;

        writeln!(f, "### Capacity Verification")?;
        writeln!(f)?;
        writeln!(f, "- Shell volume: {:.3} m³", cap.shell_volume.get::<cubic_meter>())?;
        writeln!(f, "- Heads volume (both): {:.3} m³", cap.heads_volume.get::<cubic_meter>())?;
        writeln!(f, "- Gross volume: {:.3} m³", cap.gross_volume.get::<cubic_meter>())?;
        writeln!(
            f,
            "- Verified volume ({}): {:.3} m³",
            match cap.basis {
                CapacityBasis::Shell => "shell only",
                CapacityBasis::ShellAndHeads => "shell and heads",
            },
            cap.verified_volume.get::<cubic_meter>()
        )?;
        writeln!(f, "- Specified capacity: {:.3} m³", cap.target.get::<cubic_meter>())?;
        writeln!(
            f,
            "- Deviation: {:+.2} % (tolerance ±{:.1} %)",
            cap.deviation.get::<percent>(),
            cap.tolerance.get::<percent>()
        )?;
        writeln!(f, "- **Capacity match: {}**", pass_fail(cap.matches))?;
        writeln!(
            f,
            "- Minimum bund capacity (110 % of gross): {:.3} m³",
            cap.bund_capacity.get::<cubic_meter>()
        )?;
        writeln!(f)?;

        writeln!(f, "### Weights")?;
        writeln!(f)?;
        writeln!(f, "| Item | Mass |")?;
        writeln!(f, "|------|------|")?;
        writeln!(f, "| Shell | {:.0} kg |", w.shell.get::<kilogram>())?;
        writeln!(f, "| Dished end (each) | {:.0} kg |", w.end.get::<kilogram>())?;
        writeln!(f, "| Fittings allowance | {:.0} kg |", w.fittings.get::<kilogram>())?;
        writeln!(f, "| **Empty** | **{:.0} kg** |", w.empty.get::<kilogram>())?;
        writeln!(
            f,
            "| Operating ({}) | {:.0} kg |",
            p.product.name,
            w.operating.get::<kilogram>()
        )?;
        writeln!(f, "| Hydrostatic test (water) | {:.0} kg |", w.hydrotest.get::<kilogram>())?;
        writeln!(f)?;

        writeln!(f, "### Hydrostatic Test Pressure")?;
        writeln!(f)?;
        writeln!(
            f,
            "- 1.5 × design pressure: {:.2} psig ({:.4} MPa)",
            d.hydrostatic_test_pressure.get::<pound_force_per_square_inch>(),
            d.hydrostatic_test_pressure.get::<megapascal>()
        )?;
        writeln!(f)
    }

    fn quality_assurance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bund = self.design.capacity.bund_capacity.get::<cubic_meter>();

        let manufacturing = Group::new(
            "Manufacturing Quality Control",
            &[
                "Material certificates verified (SANS 1431)",
                "Welding procedures qualified (SANS 9956-3)",
                "Welder qualifications current (SANS 9606-1)",
                "Dimensional inspection completed",
                "Surface preparation to Sa 2½ (ISO 8501-1)",
                "Hydrostatic test performed",
                "Radiographic testing of critical welds",
                "Factory acceptance test completed",
            ],
        );
        let installation = Group::new(
            "Installation Checklist",
            &[
                "Foundation prepared and levelled",
                "Safety distances verified per SANS 10131:2004",
            ],
        )
        .with(format!("Bund wall constructed ({bund:.1} m³ minimum)"))
        .and(&[
            "Fire authority consultation completed",
            "Environmental approvals obtained",
            "Insurance notifications completed",
            "Operating permits issued",
            "Operator training completed",
        ]);
        let schedule = Group::new(
            "Inspection Schedule",
            &[
                "Pre-service inspection",
                "6-month initial inspection",
                "Annual external inspection",
                "5-year internal inspection",
                "10-year comprehensive inspection",
                "20-year fitness-for-service evaluation",
            ],
        );

        writeln!(f, "## {}", SECTIONS[5])?;
        writeln!(f)?;
        write_group(f, &manufacturing, false)?;
        write_group(f, &installation, false)?;
        write_group(f, &schedule, false)
    }

    fn compliance_declaration(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", SECTIONS[6])?;
        writeln!(f)?;
        writeln!(f, "This tank design has been prepared in accordance with:")?;
        writeln!(f)?;
        for standard in [Standard::Sans10131, Standard::Api650, Standard::Iso9001] {
            writeln!(f, "- {} ({})", standard.citation(), standard.title())?;
        }
        writeln!(f, "- All referenced material and fabrication standards")?;
        writeln!(f)?;
        writeln!(f, "**Professional Engineer seal required for construction.**")
    }
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Tank Design Analysis Report")?;
        writeln!(f)?;
        self.project_information(f)?;
        self.executive_summary(f)?;
        self.component_analysis(f)?;
        self.compliance_matrix(f)?;
        self.engineering_calculations(f)?;
        self.quality_assurance(f)?;
        Self::compliance_declaration(f)
    }
}

fn write_component(f: &mut fmt::Formatter<'_>, spec: &ComponentSpec) -> fmt::Result {
    writeln!(f, "### {}", spec.name)?;
    writeln!(f)?;
    writeln!(f, "- **Material:** {}", spec.material)?;
    writeln!(f, "- **Standard reference:** {}", spec.standard_reference)?;
    writeln!(f, "- **Safety factor:** {:.1}", spec.safety_factor)?;
    writeln!(f, "- **Thickness:** {:.2} mm", spec.thickness.get::<millimeter>())?;
    writeln!(f)?;

    writeln!(f, "Dimensions:")?;
    writeln!(f)?;
    for dim in &spec.dimensions {
        let name = capitalize(dim.name);
        match &dim.value {
            DimensionValue::Length(l) => writeln!(f, "- {name}: {:.1} mm", l.get::<millimeter>())?,
            DimensionValue::Angle(a) => writeln!(f, "- {name}: {:.0}°", a.get::<degree>())?,
            DimensionValue::Text(t) => writeln!(f, "- {name}: {t}")?,
        }
    }
    writeln!(f)?;

    write_group(
        f,
        &Group {
            title: "Quality Requirements",
            items: spec.quality_requirements.clone(),
        },
        true,
    )?;
    write_group(
        f,
        &Group {
            title: "Inspection Requirements",
            items: spec.inspection_requirements.clone(),
        },
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;
    use vessel_design::{TankDesignParameters, compute_design};

    fn render() -> String {
        let design = compute_design(&TankDesignParameters::default()).unwrap();
        let context = ReportContext::new(date(2026, 10, 19));
        AnalysisReport::new(&design, &context).to_string()
    }

    #[test]
    fn sections_appear_in_order() {
        let report = render();
        let positions: Vec<usize> = SECTIONS
            .iter()
            .map(|title| {
                report
                    .find(&format!("\n## {title}\n"))
                    .unwrap_or_else(|| panic!("missing section {title}"))
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reference_tank_values_are_reported() {
        let report = render();

        assert!(report.contains("- **Date:** 2026-10-19"));
        assert!(report.contains("| Diameter | 1870 mm |"));
        assert!(report.contains("**Selected thickness: 6.0 mm** (minimum thickness governs)"));
        assert!(report.contains("**Capacity match: PASS**"));
        assert!(report.contains("### Lifting Lugs (Pair)"));
        assert!(report.contains("| 8.7 | Control of nonconforming outputs | No |"));
    }

    #[test]
    fn one_matrix_table_per_covered_standard() {
        let report = render();
        let tables = report.matches("| Clause | Description |").count();
        assert_eq!(tables, requirements::covered_standards().len());
    }
}
