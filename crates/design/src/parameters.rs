use uom::si::{
    Dimension, Quantity, Units,
    f64::{Length, Mass, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Volume},
    length::millimeter,
    mass::kilogram,
    pressure::pound_force_per_square_inch,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    volume::liter,
};
use vessel_core::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitIntervalLeftOpen,
};

use crate::{
    DesignError,
    capacity::CapacityBasis,
    material::{
        Diesel, Grade300WA, MaterialProperties, PlateGrade, ProductProperties, StoredProduct,
    },
    sizing::Dimensions,
};

/// Inputs to a tank design.
///
/// Every field is an externally supplied constant. The [`Default`] value is
/// the reference 10 000 L BTA tank in grade 300WA steel at 2.5 psig.
#[derive(Debug, Clone, PartialEq)]
pub struct TankDesignParameters {
    /// Capacity the tank is meant to hold.
    pub target_capacity: Volume,

    /// Shell diameter.
    pub diameter: Length,

    /// Shell length, tangent line to tangent line.
    pub length: Length,

    /// Internal design pressure (gauge).
    pub design_pressure: Pressure,

    /// Design metal temperature, reported but not used in the sizing.
    pub design_temperature: ThermodynamicTemperature,

    /// Shell and end plate material.
    pub material: MaterialProperties,

    /// Fraction of yield strength used as the allowable stress, in `(0, 1]`.
    pub allowable_stress_fraction: Ratio,

    /// Weld joint efficiency, in `(0, 1]`.
    pub joint_efficiency: Ratio,

    /// Extra thickness added for long-term material loss.
    pub corrosion_allowance: Length,

    /// Thinnest plate permitted for the shell and ends.
    pub minimum_thickness: Length,

    /// Liquid stored in service.
    pub product: ProductProperties,

    /// Relative deviation from the target capacity still accepted as a match.
    pub capacity_tolerance: Ratio,

    /// Which internal volume is compared against the target capacity.
    pub capacity_basis: CapacityBasis,

    /// Lump mass for nozzles, manhole, saddles and lugs.
    pub fittings_allowance: Mass,
}

impl Default for TankDesignParameters {
    fn default() -> Self {
        let Dimensions { diameter, length } = Dimensions::standard_bta();

        Self {
            target_capacity: Volume::new::<liter>(10_000.0),
            diameter,
            length,
            design_pressure: Pressure::new::<pound_force_per_square_inch>(2.5),
            design_temperature: ThermodynamicTemperature::new::<degree_celsius>(60.0),
            material: Grade300WA::properties(),
            allowable_stress_fraction: Ratio::new::<ratio>(0.40),
            joint_efficiency: Ratio::new::<ratio>(0.85),
            corrosion_allowance: Length::new::<millimeter>(1.5),
            minimum_thickness: Length::new::<millimeter>(6.0),
            product: Diesel::properties(),
            capacity_tolerance: Ratio::new::<ratio>(0.02),
            capacity_basis: CapacityBasis::default(),
            fittings_allowance: Mass::new::<kilogram>(200.0),
        }
    }
}

impl TankDesignParameters {
    /// Returns default parameters resized for a target capacity.
    ///
    /// Shell dimensions come from [`Dimensions::for_capacity`].
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidParameter`] if the capacity is not
    /// strictly positive.
    pub fn for_capacity(target_capacity: Volume) -> Result<Self, DesignError> {
        let capacity = check::<_, StrictlyPositive>("target_capacity", target_capacity)?;
        let Dimensions { diameter, length } = Dimensions::for_capacity(capacity);

        Ok(Self {
            target_capacity,
            diameter,
            length,
            ..Self::default()
        })
    }

    /// Checks every parameter against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidParameter`] naming the first parameter
    /// that is infinite or violates its constraint.
    pub fn validate(&self) -> Result<DesignInputs, DesignError> {
        Ok(DesignInputs {
            target_capacity: check("target_capacity", self.target_capacity)?,
            diameter: check("diameter", self.diameter)?,
            length: check("length", self.length)?,
            design_pressure: check("design_pressure", self.design_pressure)?,
            yield_strength: check("material.yield_strength", self.material.yield_strength)?,
            allowable_stress_fraction: check(
                "allowable_stress_fraction",
                self.allowable_stress_fraction,
            )?,
            joint_efficiency: check("joint_efficiency", self.joint_efficiency)?,
            corrosion_allowance: check("corrosion_allowance", self.corrosion_allowance)?,
            minimum_thickness: check("minimum_thickness", self.minimum_thickness)?,
            plate_density: check("material.density", self.material.density)?,
            product_density: check("product.density", self.product.density)?,
            capacity_tolerance: check("capacity_tolerance", self.capacity_tolerance)?,
            fittings_allowance: check("fittings_allowance", self.fittings_allowance)?,
        })
    }
}

fn check<T: Infinite, C: Constraint<T>>(
    parameter: &'static str,
    value: T,
) -> Result<Constrained<T, C>, DesignError> {
    if value.is_infinite() {
        return Err(DesignError::invalid(parameter)(ConstraintError::Infinite));
    }
    Constrained::new(value).map_err(DesignError::invalid(parameter))
}

/// Infinity compares as an ordinary value, so it is rejected separately.
trait Infinite {
    fn is_infinite(&self) -> bool;
}

impl<D, U> Infinite for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }
}

/// Validated numeric inputs, produced by [`TankDesignParameters::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignInputs {
    pub target_capacity: Constrained<Volume, StrictlyPositive>,
    pub diameter: Constrained<Length, StrictlyPositive>,
    pub length: Constrained<Length, StrictlyPositive>,
    pub design_pressure: Constrained<Pressure, NonNegative>,
    pub yield_strength: Constrained<Pressure, StrictlyPositive>,
    pub allowable_stress_fraction: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub joint_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub corrosion_allowance: Constrained<Length, NonNegative>,
    pub minimum_thickness: Constrained<Length, StrictlyPositive>,
    pub plate_density: Constrained<MassDensity, StrictlyPositive>,
    pub product_density: Constrained<MassDensity, StrictlyPositive>,
    pub capacity_tolerance: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub fittings_allowance: Constrained<Mass, NonNegative>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::pressure::megapascal;

    #[test]
    fn defaults_are_valid() {
        assert!(TankDesignParameters::default().validate().is_ok());
    }

    #[test]
    fn zero_diameter_is_rejected_by_name() {
        let params = TankDesignParameters {
            diameter: Length::new::<millimeter>(0.0),
            ..TankDesignParameters::default()
        };

        assert_eq!(
            params.validate().unwrap_err(),
            DesignError::InvalidParameter {
                parameter: "diameter",
                source: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn allowable_fraction_outside_unit_interval_is_rejected() {
        for (fraction, expected) in [
            (0.0, ConstraintError::BelowMinimum),
            (-0.4, ConstraintError::BelowMinimum),
            (1.01, ConstraintError::AboveMaximum),
        ] {
            let params = TankDesignParameters {
                allowable_stress_fraction: Ratio::new::<ratio>(fraction),
                ..TankDesignParameters::default()
            };

            assert_eq!(
                params.validate().unwrap_err(),
                DesignError::InvalidParameter {
                    parameter: "allowable_stress_fraction",
                    source: expected,
                },
                "fraction {fraction}"
            );
        }
    }

    #[test]
    fn full_joint_efficiency_is_allowed() {
        let params = TankDesignParameters {
            joint_efficiency: Ratio::new::<ratio>(1.0),
            ..TankDesignParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn negative_pressure_and_corrosion_allowance_are_rejected() {
        let vacuum = TankDesignParameters {
            design_pressure: Pressure::new::<pound_force_per_square_inch>(-1.0),
            ..TankDesignParameters::default()
        };
        assert!(matches!(
            vacuum.validate(),
            Err(DesignError::InvalidParameter {
                parameter: "design_pressure",
                ..
            })
        ));

        let negative_ca = TankDesignParameters {
            corrosion_allowance: Length::new::<millimeter>(-0.5),
            ..TankDesignParameters::default()
        };
        assert!(matches!(
            negative_ca.validate(),
            Err(DesignError::InvalidParameter {
                parameter: "corrosion_allowance",
                ..
            })
        ));
    }

    #[test]
    fn infinite_inputs_are_rejected_by_name() {
        let infinite_yield = TankDesignParameters {
            material: MaterialProperties {
                yield_strength: Pressure::new::<megapascal>(f64::INFINITY),
                ..Grade300WA::properties()
            },
            ..TankDesignParameters::default()
        };
        let infinite_capacity = TankDesignParameters {
            target_capacity: Volume::new::<liter>(f64::INFINITY),
            ..TankDesignParameters::default()
        };
        let infinite_diameter = TankDesignParameters {
            diameter: Length::new::<millimeter>(f64::INFINITY),
            ..TankDesignParameters::default()
        };

        for (params, parameter) in [
            (infinite_yield, "material.yield_strength"),
            (infinite_capacity, "target_capacity"),
            (infinite_diameter, "diameter"),
        ] {
            assert_eq!(
                params.validate().unwrap_err(),
                DesignError::InvalidParameter {
                    parameter,
                    source: ConstraintError::Infinite,
                }
            );
        }

        assert_eq!(
            TankDesignParameters::for_capacity(Volume::new::<liter>(f64::INFINITY)).unwrap_err(),
            DesignError::InvalidParameter {
                parameter: "target_capacity",
                source: ConstraintError::Infinite,
            }
        );
    }

    #[test]
    fn for_capacity_keeps_the_target() {
        let params = TankDesignParameters::for_capacity(Volume::new::<liter>(30_000.0)).unwrap();
        assert_eq!(params.target_capacity, Volume::new::<liter>(30_000.0));
        assert!(params.diameter > TankDesignParameters::default().diameter);

        assert!(TankDesignParameters::for_capacity(Volume::new::<liter>(0.0)).is_err());
    }
}
