use std::fmt;

use uom::si::{
    length::millimeter,
    pressure::{megapascal, pound_force_per_square_inch},
    volume::{cubic_meter, liter},
};
use vessel_design::{
    TankDesign,
    components::SADDLE_POSITION_FRACTION,
    heads::{MAX_CROWN_RADIUS_FACTOR, MIN_KNUCKLE_RADIUS_MM},
};

use crate::{
    ReportContext,
    markdown::{Group, write_section},
};

/// The fabrication, inspection, installation and commissioning checklist.
#[derive(Debug, Clone, Copy)]
pub struct SafetyChecklist<'a> {
    design: &'a TankDesign,
    context: &'a ReportContext,
}

impl<'a> SafetyChecklist<'a> {
    #[must_use]
    pub fn new(design: &'a TankDesign, context: &'a ReportContext) -> Self {
        Self { design, context }
    }

    fn pre_fabrication(&self) -> Vec<Group> {
        let d = self.design;
        let p = &d.parameters;

        vec![
            Group::new(
                "Material Verification",
                &[
                    "Material certificates reviewed and approved",
                    "Chemical composition verified per SANS 1431",
                    "Mechanical properties confirmed",
                    "Heat treatment certificates (if required)",
                    "Material traceability established",
                ],
            )
            .with(format!("Plate grade confirmed: {}", p.material.designation)),
            Group::new(
                "Design Verification",
                &["Calculations reviewed by Professional Engineer"],
            )
            .with(format!(
                "Shell thickness {:.1} mm adequate for {:.2} psig design pressure",
                d.shell.selected.get::<millimeter>(),
                p.design_pressure.get::<pound_force_per_square_inch>()
            ))
            .and(&[
                "Nozzle reinforcement calculations verified",
                "Support design calculations approved",
                "Lifting lug design calculations verified",
                "Thermal stress analysis completed (if applicable)",
            ]),
            Group::new(
                "Welding Preparation",
                &[
                    "Welding procedures qualified per SANS 9956-3",
                    "Welder qualifications current per SANS 9606-1",
                    "Base material compatibility verified",
                    "Consumables specification approved",
                    "Heat treatment requirements defined",
                ],
            ),
        ]
    }

    fn fabrication(&self) -> Vec<Group> {
        let d = self.design;
        let diameter_mm = d.parameters.diameter.get::<millimeter>();
        let saddle_mm = SADDLE_POSITION_FRACTION * d.parameters.length.get::<millimeter>();

        vec![
            Group::new(
                "Shell Assembly",
                &[
                    "Plates inspected for defects",
                    "Fit-up tolerances within specification",
                    "Tack welding performed properly",
                    "Progressive dimensional checks completed",
                    "Welding sequence followed",
                ],
            ),
            Group::new("Dished End Installation", &["End dimensions verified with template"])
                .with(format!(
                    "Knuckle radius ≥ {MIN_KNUCKLE_RADIUS_MM:.0} mm verified (design {:.1} mm)",
                    d.head.knuckle_radius.get::<millimeter>()
                ))
                .with(format!(
                    "Crown radius between {diameter_mm:.0} and {:.0} mm confirmed (design {:.0} mm)",
                    MAX_CROWN_RADIUS_FACTOR * diameter_mm,
                    d.head.crown_radius.get::<millimeter>()
                ))
                .and(&[
                    "End-to-shell fit-up acceptable",
                    "Welding completed per procedure",
                ]),
            Group::new(
                "Nozzle Installation",
                &[
                    "Nozzle locations verified per drawing",
                    "Reinforcement plates installed correctly",
                    "Nozzle orientation confirmed",
                    "Flange facing and bolt holes correct",
                    "Internal projection minimised",
                ],
            ),
            Group::new("Support Installation", &[])
                .with(format!("Saddles positioned {saddle_mm:.0} mm from tank centre"))
                .and(&[
                    "Contact angle 120° verified",
                    "Doubling plates installed correctly",
                    "Anchor bolt holes positioned accurately",
                    "Foundation interface prepared",
                ]),
            Group::new(
                "Final Assembly",
                &[
                    "All welds completed per specification",
                    "Internal and external grinding completed",
                    "Nameplate installed per SANS 10131:2004",
                    "Lifting lugs positioned correctly",
                    "All openings properly closed",
                ],
            ),
        ]
    }

    fn inspection_and_testing(&self) -> Vec<Group> {
        let test_pressure = self.design.hydrostatic_test_pressure;

        vec![
            Group::new(
                "Visual Inspection",
                &[
                    "All welds visually inspected (100 %)",
                    "Surface defects identified and repaired",
                    "Dimensional tolerances verified",
                    "Internal cleanliness confirmed",
                    "External finish acceptable",
                ],
            ),
            Group::new(
                "Non-Destructive Testing",
                &[
                    "Radiographic testing completed (critical welds)",
                    "Magnetic particle testing (as required)",
                    "Liquid penetrant testing (as required)",
                    "Ultrasonic testing (thick sections)",
                    "Test reports reviewed and approved",
                ],
            ),
            Group::new(
                "Pressure Testing",
                &[
                    "Test equipment calibrated",
                    "Test medium selected (water preferred)",
                ],
            )
            .with(format!(
                "Test pressure {:.2} psig ({:.4} MPa), 1.5 × design pressure",
                test_pressure.get::<pound_force_per_square_inch>(),
                test_pressure.get::<megapascal>()
            ))
            .and(&[
                "Hold time: minimum 30 minutes",
                "No visible distortion or leakage",
                "Pressure test certificate issued",
            ]),
            Group::new(
                "Quality Documentation",
                &[
                    "Material test certificates compiled",
                    "Welding records completed",
                    "NDT reports included",
                    "Pressure test certificate",
                    "Dimensional report",
                    "Final inspection report",
                ],
            ),
        ]
    }

    fn installation(&self) -> Vec<Group> {
        let bund = self.design.capacity.bund_capacity.get::<cubic_meter>();

        vec![
            Group::new(
                "Site Preparation",
                &[
                    "Foundation design approved",
                    "Foundation constructed per specification",
                    "Level and alignment within tolerance",
                    "Drainage provisions adequate",
                    "Access roads suitable for delivery",
                ],
            ),
            Group::new(
                "Tank Installation",
                &[
                    "Lifting plan reviewed and approved",
                    "Crane capacity and certification verified",
                    "Tank positioned correctly",
                    "Support contact verified",
                    "Anchor bolts installed and torqued",
                ],
            ),
            Group::new(
                "Piping and Instrumentation",
                &[
                    "Piping stress analysis reviewed",
                    "Flexible connections provided",
                    "Valve specifications verified",
                    "Instrumentation calibrated",
                    "Electrical grounding installed",
                ],
            ),
            Group::new("Safety Systems", &[])
                .with(format!(
                    "Bund wall capacity ≥ {bund:.2} m³ (110 % of tank volume)"
                ))
                .and(&[
                    "Bund wall drainage system operational",
                    "Fire protection systems installed",
                    "Emergency ventilation adequate",
                    "Safety signage installed",
                ]),
        ]
    }

    fn regulatory() -> Vec<Group> {
        vec![
            Group::new(
                "Permits and Approvals",
                &[
                    "Municipal building approval obtained",
                    "Environmental authorisation issued",
                    "Fire department consultation completed",
                    "Occupational health approval obtained",
                    "Insurance notification submitted",
                ],
            ),
            Group::new(
                "Standards Compliance",
                &[
                    "SANS 10131:2004 requirements verified",
                    "API 650 requirements confirmed",
                    "Local bylaws compliance checked",
                    "Environmental regulations satisfied",
                    "Safety regulations compliance verified",
                ],
            ),
            Group::new(
                "Documentation Package",
                &[
                    "Design calculations",
                    "Material certificates",
                    "Fabrication records",
                    "Test certificates",
                    "Installation records",
                    "Operator manual",
                    "Maintenance schedule",
                    "Emergency procedures",
                ],
            ),
        ]
    }

    fn commissioning() -> Vec<Group> {
        vec![
            Group::new(
                "System Testing",
                &[
                    "Leak test completed successfully",
                    "Instrumentation calibration verified",
                    "Alarm system testing completed",
                    "Safety system functionality confirmed",
                    "Emergency shutdown testing completed",
                ],
            ),
            Group::new(
                "Training and Handover",
                &[
                    "Operator training completed",
                    "Maintenance personnel trained",
                    "Documentation package handed over",
                    "Emergency contact list provided",
                    "Warranty conditions explained",
                ],
            ),
            Group::new(
                "Final Certification",
                &[
                    "Professional Engineer sign-off",
                    "Quality Manager approval",
                    "Client acceptance obtained",
                    "Certificate of Completion issued",
                    "Maintenance schedule activated",
                ],
            ),
        ]
    }
}

impl fmt::Display for SafetyChecklist<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capacity = self.design.parameters.target_capacity.get::<liter>();

        writeln!(f, "# Tank Design Safety Checklist")?;
        writeln!(f)?;
        writeln!(f, "**{capacity:.0} L {}**", self.context.project)?;
        writeln!(f)?;
        writeln!(f, "- **Date:** {}", self.context.date)?;
        writeln!(f, "- **Inspector:** ________________________")?;
        writeln!(f)?;

        write_section(f, "Pre-Fabrication", &self.pre_fabrication())?;
        write_section(f, "Fabrication", &self.fabrication())?;
        write_section(f, "Inspection and Testing", &self.inspection_and_testing())?;
        write_section(f, "Installation", &self.installation())?;
        write_section(f, "Regulatory Compliance", &Self::regulatory())?;
        write_section(f, "Commissioning", &Self::commissioning())?;

        writeln!(f, "## Sign-Off")?;
        writeln!(f)?;
        for role in [
            "Design Engineer",
            "Quality Manager",
            "Client Representative",
            "Inspection Authority",
        ] {
            writeln!(f, "- **{role}:** ________________ Date: ________")?;
        }
        Ok(())
    }
}
