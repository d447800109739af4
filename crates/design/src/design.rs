use tracing::{debug, info};
use uom::si::{f64::Pressure, length::millimeter, volume::liter};
use vessel_core::constraint::StrictlyPositive;

use crate::{
    DesignError, DesignInputs, TankDesignParameters,
    capacity::{CapacityCheck, verify_capacity},
    components::{CatalogueGeometry, ComponentSpec, catalogue},
    heads::DishedEnd,
    requirements::{SAFETY_REQUIREMENTS, SafetyRequirement},
    shell::{ShellLoading, ShellThickness, shell_thickness},
    weight::{WeightInputs, Weights, weights},
};

/// Hydrostatic test pressure as a multiple of design pressure.
pub const HYDROSTATIC_TEST_FACTOR: f64 = 1.5;

/// A complete tank design.
#[derive(Debug, Clone, PartialEq)]
pub struct TankDesign {
    /// The parameters the design was computed from.
    pub parameters: TankDesignParameters,
    pub shell: ShellThickness,

    /// Geometry of one dished end; both ends are identical.
    pub head: DishedEnd,
    pub capacity: CapacityCheck,
    pub weights: Weights,
    pub hydrostatic_test_pressure: Pressure,
    pub components: Vec<ComponentSpec>,
}

impl TankDesign {
    /// The safety requirements the design is checked against.
    #[must_use]
    pub fn requirements(&self) -> &'static [SafetyRequirement] {
        &SAFETY_REQUIREMENTS
    }

    /// True when both dished-end geometry checks pass.
    #[must_use]
    pub fn heads_are_compliant(&self) -> bool {
        self.head.knuckle_is_compliant() && self.head.crown_is_compliant(self.parameters.diameter)
    }
}

/// Computes a tank design from its parameters.
///
/// # Errors
///
/// - [`DesignError::InvalidParameter`] if any parameter violates its
///   constraint.
/// - [`DesignError::PressureExceedsAllowableStress`] if the shell formula is
///   undefined for the design pressure.
/// - [`DesignError::NoStandardGauge`] if no standard plate is thick enough.
pub fn compute_design(parameters: &TankDesignParameters) -> Result<TankDesign, DesignError> {
    let inputs = parameters.validate()?;
    let DesignInputs {
        target_capacity,
        diameter,
        length,
        ..
    } = inputs;

    let radius = StrictlyPositive::new(0.5 * diameter.into_inner())
        .map_err(DesignError::invalid("diameter"))?;

    let shell = shell_thickness(ShellLoading {
        design_pressure: inputs.design_pressure,
        radius,
        yield_strength: inputs.yield_strength,
        allowable_stress_fraction: inputs.allowable_stress_fraction,
        joint_efficiency: inputs.joint_efficiency,
        corrosion_allowance: inputs.corrosion_allowance,
        minimum_thickness: inputs.minimum_thickness,
    })?;
    debug!(
        calculated_mm = shell.calculated.get::<millimeter>(),
        required_mm = shell.required.get::<millimeter>(),
        selected_mm = shell.selected.get::<millimeter>(),
        governed_by_minimum = shell.governed_by_minimum,
        "shell thickness"
    );

    let head = DishedEnd::for_diameter(diameter);

    let capacity = verify_capacity(
        diameter,
        length,
        &head,
        target_capacity,
        inputs.capacity_tolerance,
        parameters.capacity_basis,
    );
    debug!(
        verified_l = capacity.verified_volume.get::<liter>(),
        target_l = capacity.target.get::<liter>(),
        matches = capacity.matches,
        "capacity check"
    );

    let weights = weights(
        &WeightInputs {
            diameter,
            length,
            thickness: shell.selected,
            plate_density: inputs.plate_density,
            product_density: inputs.product_density,
            fittings_allowance: inputs.fittings_allowance,
            working_volume: capacity.verified_volume,
            gross_volume: capacity.gross_volume,
        },
        &head,
    );

    let components = catalogue(
        &CatalogueGeometry {
            diameter: diameter.into_inner(),
            length: length.into_inner(),
            shell_thickness: shell.selected,
            knuckle_radius: head.knuckle_radius,
            crown_radius: head.crown_radius,
        },
        &parameters.material.designation,
    );

    let design = TankDesign {
        parameters: parameters.clone(),
        shell,
        head,
        capacity,
        weights,
        hydrostatic_test_pressure: HYDROSTATIC_TEST_FACTOR * inputs.design_pressure.into_inner(),
        components,
    };

    info!(
        diameter_mm = design.parameters.diameter.get::<millimeter>(),
        length_mm = design.parameters.length.get::<millimeter>(),
        thickness_mm = design.shell.selected.get::<millimeter>(),
        capacity_match = design.capacity.matches,
        "tank design computed"
    );

    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Ratio, mass::kilogram, pressure::megapascal, ratio::ratio, volume::cubic_meter,
    };
    use vessel_core::constraint::ConstraintError;

    #[test]
    fn reference_tank() {
        let design = compute_design(&TankDesignParameters::default()).unwrap();

        assert_relative_eq!(design.shell.selected.get::<millimeter>(), 6.0);
        assert!(design.shell.governed_by_minimum);
        assert_relative_eq!(
            design.shell.allowable_stress.get::<megapascal>(),
            120.0,
            epsilon = 1e-9
        );

        assert!(design.capacity.matches);
        assert_relative_eq!(
            design.capacity.verified_volume.get::<cubic_meter>(),
            10.107,
            epsilon = 1e-3
        );
        assert!(design.heads_are_compliant());

        assert_relative_eq!(design.weights.empty.get::<kilogram>(), 1575.337, epsilon = 1e-2);
        assert_relative_eq!(
            design.hydrostatic_test_pressure.get::<megapascal>(),
            1.5 * design.parameters.design_pressure.get::<megapascal>(),
            epsilon = 1e-12
        );

        assert_eq!(design.components.len(), 9);
        assert_eq!(design.requirements().len(), 17);
    }

    #[test]
    fn identical_parameters_give_identical_designs() {
        let params = TankDesignParameters {
            design_pressure: Pressure::new::<megapascal>(0.8),
            ..TankDesignParameters::default()
        };
        assert_eq!(compute_design(&params), compute_design(&params));
    }

    #[test]
    fn higher_pressure_selects_a_standard_gauge() {
        let params = TankDesignParameters {
            design_pressure: Pressure::new::<megapascal>(1.0),
            ..TankDesignParameters::default()
        };
        let design = compute_design(&params).unwrap();

        assert!(!design.shell.governed_by_minimum);
        assert_relative_eq!(design.shell.selected.get::<millimeter>(), 12.0);
    }

    #[test]
    fn invalid_parameters_produce_no_design() {
        let params = TankDesignParameters {
            joint_efficiency: Ratio::new::<ratio>(1.2),
            ..TankDesignParameters::default()
        };

        assert_eq!(
            compute_design(&params),
            Err(DesignError::InvalidParameter {
                parameter: "joint_efficiency",
                source: ConstraintError::AboveMaximum,
            })
        );
    }

    #[test]
    fn excessive_pressure_is_reported() {
        let params = TankDesignParameters {
            design_pressure: Pressure::new::<megapascal>(200.0),
            ..TankDesignParameters::default()
        };

        assert!(matches!(
            compute_design(&params),
            Err(DesignError::PressureExceedsAllowableStress { .. })
        ));
    }
}
