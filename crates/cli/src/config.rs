//! TOML design configuration.
//!
//! Every field is optional. Missing fields keep the reference tank's value,
//! so an empty file describes the standard 10 000 L BTA tank.
//!
//! ```toml
//! capacity_l = 20000
//! design_pressure = { psig = 5.0 }
//! product = "petrol"
//!
//! [material]
//! yield_strength_mpa = 355
//!
//! [report]
//! client = "Acme Fuels"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Mass, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Volume},
    length::millimeter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    pressure::{kilopascal, megapascal, pound_force_per_square_inch},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    volume::liter,
};
use vessel_design::{
    DesignError, TankDesignParameters,
    capacity::CapacityBasis,
    material::{Diesel, Petrol, ProductProperties, StoredProduct, Water},
};
use vessel_report::ReportContext;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignConfig {
    /// Target capacity. Without explicit dimensions the shell is sized from it.
    pub capacity_l: Option<f64>,
    pub diameter_mm: Option<f64>,
    pub length_mm: Option<f64>,
    pub design_pressure: Option<PressureSpec>,
    pub design_temperature_c: Option<f64>,
    pub allowable_stress_fraction: Option<f64>,
    pub joint_efficiency: Option<f64>,
    pub corrosion_allowance_mm: Option<f64>,
    pub minimum_thickness_mm: Option<f64>,
    pub capacity_tolerance: Option<f64>,
    pub capacity_basis: Option<CapacityBasisSpec>,
    pub fittings_allowance_kg: Option<f64>,
    pub material: MaterialConfig,
    pub product: Option<ProductSpec>,
    pub report: ReportConfig,
}

/// A gauge pressure with an explicit unit, e.g. `{ psig = 2.5 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureSpec {
    Psig(f64),
    Kpa(f64),
    Mpa(f64),
}

impl PressureSpec {
    fn to_pressure(self) -> Pressure {
        match self {
            Self::Psig(v) => Pressure::new::<pound_force_per_square_inch>(v),
            Self::Kpa(v) => Pressure::new::<kilopascal>(v),
            Self::Mpa(v) => Pressure::new::<megapascal>(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapacityBasisSpec {
    Shell,
    ShellAndHeads,
}

impl From<CapacityBasisSpec> for CapacityBasis {
    fn from(spec: CapacityBasisSpec) -> Self {
        match spec {
            CapacityBasisSpec::Shell => Self::Shell,
            CapacityBasisSpec::ShellAndHeads => Self::ShellAndHeads,
        }
    }
}

/// Overrides for the grade 300WA plate properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialConfig {
    pub designation: Option<String>,
    pub yield_strength_mpa: Option<f64>,
    pub tensile_strength_mpa: Option<f64>,
    pub density_kg_m3: Option<f64>,
}

/// A stored product, either by name or with an explicit density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductSpec {
    Named(ProductName),
    Custom { name: String, density_kg_m3: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductName {
    Water,
    Diesel,
    Petrol,
}

impl ProductSpec {
    fn properties(&self) -> ProductProperties {
        match self {
            Self::Named(ProductName::Water) => Water::properties(),
            Self::Named(ProductName::Diesel) => Diesel::properties(),
            Self::Named(ProductName::Petrol) => Petrol::properties(),
            Self::Custom {
                name,
                density_kg_m3,
            } => ProductProperties {
                name: name.clone(),
                density: MassDensity::new::<kilogram_per_cubic_meter>(*density_kg_m3),
            },
        }
    }
}

/// Project details printed on the generated documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub project: Option<String>,
    pub client: Option<String>,
    pub designer: Option<String>,
}

impl DesignConfig {
    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config TOML from '{}'", path.display()))
    }

    /// Builds design parameters, falling back to the reference tank.
    ///
    /// Only `capacity_l` is checked here, since it sizes the shell. Every
    /// other value is checked when the design is computed.
    pub fn to_parameters(&self) -> Result<TankDesignParameters, DesignError> {
        let mut params = match self.capacity_l {
            Some(liters) => TankDesignParameters::for_capacity(Volume::new::<liter>(liters))?,
            None => TankDesignParameters::default(),
        };

        set(&mut params.diameter, self.diameter_mm, Length::new::<millimeter>);
        set(&mut params.length, self.length_mm, Length::new::<millimeter>);
        set(&mut params.design_pressure, self.design_pressure, PressureSpec::to_pressure);
        set(
            &mut params.design_temperature,
            self.design_temperature_c,
            ThermodynamicTemperature::new::<degree_celsius>,
        );
        set(
            &mut params.allowable_stress_fraction,
            self.allowable_stress_fraction,
            Ratio::new::<ratio>,
        );
        set(&mut params.joint_efficiency, self.joint_efficiency, Ratio::new::<ratio>);
        set(
            &mut params.corrosion_allowance,
            self.corrosion_allowance_mm,
            Length::new::<millimeter>,
        );
        set(
            &mut params.minimum_thickness,
            self.minimum_thickness_mm,
            Length::new::<millimeter>,
        );
        set(&mut params.capacity_tolerance, self.capacity_tolerance, Ratio::new::<ratio>);
        set(&mut params.capacity_basis, self.capacity_basis, CapacityBasis::from);
        set(
            &mut params.fittings_allowance,
            self.fittings_allowance_kg,
            Mass::new::<kilogram>,
        );

        let material = &mut params.material;
        set(&mut material.designation, self.material.designation.clone(), |d| d);
        set(
            &mut material.yield_strength,
            self.material.yield_strength_mpa,
            Pressure::new::<megapascal>,
        );
        set(
            &mut material.tensile_strength,
            self.material.tensile_strength_mpa,
            Pressure::new::<megapascal>,
        );
        set(
            &mut material.density,
            self.material.density_kg_m3,
            MassDensity::new::<kilogram_per_cubic_meter>,
        );

        if let Some(product) = &self.product {
            params.product = product.properties();
        }

        Ok(params)
    }

    /// Report context for the given date, with configured overrides applied.
    pub fn report_context(&self, date: jiff::civil::Date) -> ReportContext {
        let mut context = ReportContext::new(date);
        set(&mut context.project, self.report.project.clone(), |s| s);
        set(&mut context.client, self.report.client.clone(), |s| s);
        set(&mut context.designer, self.report.designer.clone(), |s| s);
        context
    }
}

fn set<T, U>(target: &mut T, value: Option<U>, convert: impl FnOnce(U) -> T) {
    if let Some(value) = value {
        *target = convert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::civil::date;
    use vessel_design::{ConstraintError, compute_design};

    fn parse(text: &str) -> DesignConfig {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn empty_config_is_the_reference_tank() {
        let params = parse("").to_parameters().unwrap();
        assert_eq!(params, TankDesignParameters::default());
    }

    #[test]
    fn pressure_units() {
        for (text, mpa) in [
            ("design_pressure = { psig = 2.5 }", 0.017_236_9),
            ("design_pressure = { kpa = 50.0 }", 0.05),
            ("design_pressure = { mpa = 1.2 }", 1.2),
        ] {
            let params = parse(text).to_parameters().unwrap();
            assert_relative_eq!(params.design_pressure.get::<megapascal>(), mpa, epsilon = 1e-6);
        }
    }

    #[test]
    fn full_config() {
        let config = parse(
            r#"
            capacity_l = 20000
            design_temperature_c = 45
            corrosion_allowance_mm = 3.0
            capacity_basis = "shell-and-heads"
            product = "petrol"

            [material]
            designation = "Grade 355WA"
            yield_strength_mpa = 355

            [report]
            client = "Acme Fuels"
            "#,
        );
        let params = config.to_parameters().unwrap();

        assert_relative_eq!(params.target_capacity.get::<liter>(), 20_000.0, epsilon = 1e-9);
        assert_relative_eq!(
            params.length.get::<millimeter>(),
            2.0 * params.diameter.get::<millimeter>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(params.corrosion_allowance.get::<millimeter>(), 3.0, epsilon = 1e-12);
        assert_eq!(params.capacity_basis, CapacityBasis::ShellAndHeads);
        assert_eq!(params.product.name, "Petrol");
        assert_eq!(params.material.designation, "Grade 355WA");
        assert_relative_eq!(
            params.material.yield_strength.get::<megapascal>(),
            355.0,
            epsilon = 1e-9
        );

        let context = config.report_context(date(2026, 10, 19));
        assert_eq!(context.client, "Acme Fuels");
        assert_eq!(context.designer, ReportContext::new(context.date).designer);
    }

    #[test]
    fn custom_product_density() {
        let params = parse(r#"product = { name = "Paraffin", density_kg_m3 = 800.0 }"#)
            .to_parameters()
            .unwrap();

        assert_eq!(params.product.name, "Paraffin");
        assert_relative_eq!(
            params.product.density.get::<kilogram_per_cubic_meter>(),
            800.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn explicit_dimensions_override_capacity_sizing() {
        let params = parse("capacity_l = 50000\ndiameter_mm = 2500\nlength_mm = 10000")
            .to_parameters()
            .unwrap();

        assert_relative_eq!(params.diameter.get::<millimeter>(), 2500.0, epsilon = 1e-9);
        assert_relative_eq!(params.length.get::<millimeter>(), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn unknown_keys_and_zero_capacity_are_rejected() {
        assert!(toml::from_str::<DesignConfig>("diameter = 1870").is_err());
        assert!(parse("capacity_l = 0").to_parameters().is_err());
    }

    #[test]
    fn infinite_values_are_rejected_by_name() {
        assert_eq!(
            parse("capacity_l = inf").to_parameters().unwrap_err(),
            DesignError::InvalidParameter {
                parameter: "target_capacity",
                source: ConstraintError::Infinite,
            }
        );

        let params = parse("diameter_mm = inf").to_parameters().unwrap();
        assert!(matches!(
            compute_design(&params),
            Err(DesignError::InvalidParameter {
                parameter: "diameter",
                ..
            })
        ));

        let params = parse("[material]\nyield_strength_mpa = inf")
            .to_parameters()
            .unwrap();
        assert!(matches!(
            compute_design(&params),
            Err(DesignError::InvalidParameter {
                parameter: "material.yield_strength",
                ..
            })
        ));
    }
}
