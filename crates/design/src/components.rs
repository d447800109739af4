//! Component specification catalogue.
//!
//! Each fabricated part of the tank gets a [`ComponentSpec`] listing its
//! material, governing standard, safety factor, dimensions and the quality
//! and inspection requirements that apply to it. Shell and end entries are
//! populated from the computed design; the fittings are standard parts.

use uom::si::{
    angle::degree,
    f64::{Angle, Length},
    length::millimeter,
};

/// Kind of fabricated part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Shell,
    DishedEnds,
    Manhole,
    SupportSaddles,
    LiftingLugs,
    Nozzle(NozzleService),
}

/// Service of a nozzle connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NozzleService {
    Fill,
    Vent,
    Outlet,
    Drain,
}

impl NozzleService {
    pub const ALL: [Self; 4] = [Self::Fill, Self::Vent, Self::Outlet, Self::Drain];

    /// Nominal pipe size in millimetres.
    #[must_use]
    pub fn nominal_size(self) -> u32 {
        match self {
            Self::Fill => 80,
            Self::Vent | Self::Outlet => 50,
            Self::Drain => 25,
        }
    }

    /// Where the nozzle sits on the tank.
    #[must_use]
    pub fn location(self) -> &'static str {
        match self {
            Self::Fill | Self::Vent => "top",
            Self::Outlet => "end",
            Self::Drain => "bottom",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fill => "Fill Nozzle",
            Self::Vent => "Vent Nozzle",
            Self::Outlet => "Outlet Nozzle",
            Self::Drain => "Drain Nozzle",
        }
    }
}

/// Standard-wall pipe thickness for a nominal size in millimetres.
///
/// Unlisted sizes fall back to the NPS 50 wall.
#[must_use]
pub fn pipe_wall_thickness(nominal_size: u32) -> Length {
    let mm = match nominal_size {
        25 => 2.87,
        80 => 5.49,
        _ => 3.68,
    };
    Length::new::<millimeter>(mm)
}

/// Safety factors applied per component class.
pub mod safety_factor {
    pub const SHELL: f64 = 2.0;
    pub const ENDS: f64 = 2.0;
    pub const NOZZLES: f64 = 2.5;
    pub const SUPPORTS: f64 = 3.0;
    pub const LIFTING_LUGS: f64 = 4.0;
}

/// A named dimension of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: &'static str,
    pub value: DimensionValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DimensionValue {
    Length(Length),
    Angle(Angle),
    Text(String),
}

impl Dimension {
    fn length(name: &'static str, value: Length) -> Self {
        Self {
            name,
            value: DimensionValue::Length(value),
        }
    }

    fn mm(name: &'static str, mm: f64) -> Self {
        Self::length(name, Length::new::<millimeter>(mm))
    }

    fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: DimensionValue::Text(value.into()),
        }
    }
}

/// Specification of one fabricated part.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    pub kind: ComponentKind,
    pub name: String,
    pub material: String,
    pub dimensions: Vec<Dimension>,
    pub thickness: Length,
    pub standard_reference: &'static str,
    pub safety_factor: f64,
    pub quality_requirements: Vec<String>,
    pub inspection_requirements: Vec<String>,
}

/// Geometry of the computed design that the catalogue depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueGeometry {
    pub diameter: Length,
    pub length: Length,
    pub shell_thickness: Length,
    pub knuckle_radius: Length,
    pub crown_radius: Length,
}

/// Saddle offset from the tank centre as a fraction of shell length.
pub const SADDLE_POSITION_FRACTION: f64 = 0.29;

/// Lifting lug spacing as a fraction of shell length.
pub const LUG_SPACING_FRACTION: f64 = 0.67;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Builds the component catalogue for a design.
#[must_use]
pub fn catalogue(geometry: &CatalogueGeometry, plate_material: &str) -> Vec<ComponentSpec> {
    let CatalogueGeometry {
        diameter,
        length,
        shell_thickness,
        knuckle_radius,
        crown_radius,
    } = *geometry;

    let mut specs = vec![
        ComponentSpec {
            kind: ComponentKind::Shell,
            name: "Cylindrical Shell".to_string(),
            material: plate_material.to_string(),
            dimensions: vec![
                Dimension::length("diameter", diameter),
                Dimension::length("length", length),
                Dimension::length("thickness", shell_thickness),
            ],
            thickness: shell_thickness,
            standard_reference: "SANS 10131:2004 Annex A.3.2",
            safety_factor: safety_factor::SHELL,
            quality_requirements: strings(&[
                "Mill Test Certificate required",
                "Chemical composition verification",
                "Mechanical property testing",
                "Surface finish Sa 2½ per ISO 8501-1",
            ]),
            inspection_requirements: strings(&[
                "Visual inspection 100%",
                "Dimensional verification",
                "Surface preparation inspection",
                "Welding procedure qualification",
            ]),
        },
        ComponentSpec {
            kind: ComponentKind::DishedEnds,
            name: "Dished Ends (Ellipsoidal)".to_string(),
            material: plate_material.to_string(),
            dimensions: vec![
                Dimension::length("diameter", diameter),
                Dimension::length("knuckle radius", knuckle_radius),
                Dimension::length("crown radius", crown_radius),
                Dimension::length("thickness", shell_thickness),
            ],
            thickness: shell_thickness,
            standard_reference: "SANS 10131:2004 Annex A.3.2.4",
            safety_factor: safety_factor::ENDS,
            quality_requirements: strings(&[
                "Formed from single plate",
                "Knuckle radius ≥ 50 mm",
                "Crown radius between D and 1.5·D",
                "Straight flange ≥ 40 mm",
            ]),
            inspection_requirements: strings(&[
                "Template verification",
                "Radius measurement",
                "Thickness verification",
                "Forming quality check",
            ]),
        },
        ComponentSpec {
            kind: ComponentKind::Manhole,
            name: "Manhole Assembly".to_string(),
            material: "Carbon Steel Grade 300WA".to_string(),
            dimensions: vec![
                Dimension::mm("diameter", 600.0),
                Dimension::mm("neck height", 100.0),
                Dimension::mm("flange OD", 750.0),
                Dimension::mm("flange thickness", 20.0),
                Dimension::mm("reinforcing plate OD", 800.0),
                Dimension::mm("reinforcing plate thickness", 8.0),
            ],
            thickness: Length::new::<millimeter>(20.0),
            standard_reference: "SANS 10131:2004 Annex A.3.4 & A.3.5",
            safety_factor: safety_factor::NOZZLES,
            quality_requirements: strings(&[
                "600 mm diameter opening",
                "Reinforcing plate calculation per API 650",
                "Gasket groove machining",
                "Bolt hole pattern per SANS standard",
            ]),
            inspection_requirements: strings(&[
                "Dimensional verification",
                "Reinforcement adequacy check",
                "Machining quality inspection",
                "Gasket surface finish verification",
            ]),
        },
        ComponentSpec {
            kind: ComponentKind::SupportSaddles,
            name: "Support Saddles (Pair)".to_string(),
            material: "Structural Steel Grade 300W".to_string(),
            dimensions: vec![
                Dimension::mm("width", 250.0),
                Dimension::mm("height", 600.0),
                Dimension::mm("thickness", 10.0),
                Dimension {
                    name: "contact angle",
                    value: DimensionValue::Angle(Angle::new::<degree>(120.0)),
                },
                Dimension::length("position from centre", SADDLE_POSITION_FRACTION * length),
            ],
            thickness: Length::new::<millimeter>(10.0),
            standard_reference: "SANS 10131:2004 Figure A.6",
            safety_factor: safety_factor::SUPPORTS,
            quality_requirements: strings(&[
                "120° contact angle",
                "Doubling plates under saddles",
                "Proper load distribution",
                "Foundation bolt holes",
            ]),
            inspection_requirements: strings(&[
                "Contact angle verification",
                "Load calculation check",
                "Doubling plate inspection",
                "Anchor bolt pattern check",
            ]),
        },
        ComponentSpec {
            kind: ComponentKind::LiftingLugs,
            name: "Lifting Lugs (Pair)".to_string(),
            material: "Structural Steel Grade 350W".to_string(),
            dimensions: vec![
                Dimension::mm("height", 90.0),
                Dimension::mm("width", 150.0),
                Dimension::mm("thickness", 12.0),
                Dimension::mm("hole diameter", 50.0),
                Dimension::length("spacing", LUG_SPACING_FRACTION * length),
            ],
            thickness: Length::new::<millimeter>(12.0),
            standard_reference: "SANS 10131:2004 Figure A.5",
            safety_factor: safety_factor::LIFTING_LUGS,
            quality_requirements: strings(&[
                "Load calculation for empty tank",
                "50 mm shackle hole",
                "Stress concentration analysis",
                "Lifting procedure documentation",
            ]),
            inspection_requirements: strings(&[
                "Load test calculation",
                "Hole diameter verification",
                "Stress analysis review",
                "Lifting procedure approval",
            ]),
        },
    ];

    specs.extend(NozzleService::ALL.into_iter().map(nozzle));
    specs
}

fn nozzle(service: NozzleService) -> ComponentSpec {
    let size = service.nominal_size();

    ComponentSpec {
        kind: ComponentKind::Nozzle(service),
        name: service.name().to_string(),
        material: "Carbon Steel Pipe Grade B (SANS 62-1)".to_string(),
        dimensions: vec![
            Dimension::text("nominal size", format!("NPS {size}")),
            Dimension::text("schedule", "Std"),
            Dimension::mm("length", 150.0),
            Dimension::text("flange rating", "Table D"),
            Dimension::text("location", service.location()),
        ],
        thickness: pipe_wall_thickness(size),
        standard_reference: "SANS 62-1 & SANS 1123",
        safety_factor: safety_factor::NOZZLES,
        quality_requirements: vec![
            format!("NPS {size} pipe"),
            "Standard wall thickness".to_string(),
            "Flanged connections".to_string(),
            "Proper nozzle reinforcement".to_string(),
        ],
        inspection_requirements: strings(&[
            "Pipe specification check",
            "Wall thickness verification",
            "Flange rating confirmation",
            "Reinforcement calculation",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn standard_geometry() -> CatalogueGeometry {
        CatalogueGeometry {
            diameter: Length::new::<millimeter>(1870.0),
            length: Length::new::<millimeter>(3680.0),
            shell_thickness: Length::new::<millimeter>(6.0),
            knuckle_radius: Length::new::<millimeter>(112.2),
            crown_radius: Length::new::<millimeter>(1870.0),
        }
    }

    #[test]
    fn catalogue_lists_every_part_once() {
        let specs = catalogue(&standard_geometry(), "Grade 300WA");
        let kinds: Vec<_> = specs.iter().map(|s| s.kind).collect();

        assert_eq!(specs.len(), 9);
        assert_eq!(kinds[0], ComponentKind::Shell);
        assert_eq!(kinds[1], ComponentKind::DishedEnds);
        for service in NozzleService::ALL {
            assert_eq!(
                kinds.iter().filter(|&&k| k == ComponentKind::Nozzle(service)).count(),
                1
            );
        }
    }

    #[test]
    fn shell_and_ends_use_the_selected_plate() {
        let specs = catalogue(&standard_geometry(), "Grade 300WA");

        for spec in &specs[..2] {
            assert_eq!(spec.material, "Grade 300WA");
            assert_relative_eq!(spec.thickness.get::<millimeter>(), 6.0);
        }
    }

    #[test]
    fn saddle_and_lug_positions_scale_with_length() {
        let specs = catalogue(&standard_geometry(), "Grade 300WA");
        let find = |kind: ComponentKind, name: &str| {
            specs
                .iter()
                .find(|s| s.kind == kind)
                .and_then(|s| s.dimensions.iter().find(|d| d.name == name))
                .map(|d| d.value.clone())
        };

        match find(ComponentKind::SupportSaddles, "position from centre") {
            Some(DimensionValue::Length(l)) => {
                assert_relative_eq!(l.get::<millimeter>(), 1067.2, epsilon = 1e-9);
            }
            other => panic!("unexpected saddle position: {other:?}"),
        }
        match find(ComponentKind::LiftingLugs, "spacing") {
            Some(DimensionValue::Length(l)) => {
                assert_relative_eq!(l.get::<millimeter>(), 2465.6, epsilon = 1e-9);
            }
            other => panic!("unexpected lug spacing: {other:?}"),
        }
    }

    #[test]
    fn pipe_walls() {
        assert_relative_eq!(pipe_wall_thickness(80).get::<millimeter>(), 5.49, epsilon = 1e-12);
        assert_relative_eq!(pipe_wall_thickness(25).get::<millimeter>(), 2.87, epsilon = 1e-12);
        assert_relative_eq!(pipe_wall_thickness(40).get::<millimeter>(), 3.68, epsilon = 1e-12);
    }
}
