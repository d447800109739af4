//! Shell plate thickness.
//!
//! Uses the thin-wall circumferential stress formula for a cylinder under
//! internal pressure, as found in pressure-vessel and storage-tank codes:
//!
//! ```text
//! S      = yield_strength · allowable_stress_fraction
//! t_calc = P·R / (S·E − 0.6·P)
//! t_min  = t_calc + CA
//! ```
//!
//! The selected plate is the minimum thickness when `t_min` falls at or below
//! it, and otherwise the next standard plate gauge at or above `t_min`.

use uom::{
    ConstZero,
    si::{
        f64::{Length, Pressure, Ratio},
        length::millimeter,
    },
};
use vessel_core::constraint::{Constrained, NonNegative, StrictlyPositive, UnitIntervalLeftOpen};

use crate::DesignError;

/// Standard plate gauges in millimetres, thinnest first.
pub const STANDARD_PLATE_GAUGES_MM: [f64; 17] = [
    6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0, 40.0, 45.0,
    50.0,
];

// Slack for round-off when `t_min` lands exactly on a gauge.
const GAUGE_MATCH_SLACK_MM: f64 = 1e-9;

/// Inputs to the shell thickness calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellLoading {
    pub design_pressure: Constrained<Pressure, NonNegative>,
    pub radius: Constrained<Length, StrictlyPositive>,
    pub yield_strength: Constrained<Pressure, StrictlyPositive>,
    pub allowable_stress_fraction: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub joint_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
    pub corrosion_allowance: Constrained<Length, NonNegative>,
    pub minimum_thickness: Constrained<Length, StrictlyPositive>,
}

/// Result of the shell thickness calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellThickness {
    /// Allowable stress `S`, a fraction of yield.
    pub allowable_stress: Pressure,

    /// Pressure thickness `t_calc`, without corrosion allowance.
    pub calculated: Length,

    /// Required thickness `t_min = t_calc + CA`.
    pub required: Length,

    /// Thickness of the plate actually used.
    pub selected: Length,

    /// True when the minimum thickness, not pressure, set the plate.
    pub governed_by_minimum: bool,
}

/// Computes the shell thickness for the given loading.
///
/// # Errors
///
/// - [`DesignError::PressureExceedsAllowableStress`] if `S·E − 0.6·P ≤ 0`.
/// - [`DesignError::NoStandardGauge`] if `t_min` is thicker than every
///   standard gauge.
pub fn shell_thickness(loading: ShellLoading) -> Result<ShellThickness, DesignError> {
    let pressure = loading.design_pressure.into_inner();
    let radius = loading.radius.into_inner();
    let minimum = loading.minimum_thickness.into_inner();

    let allowable_stress: Pressure =
        loading.yield_strength.into_inner() * loading.allowable_stress_fraction.into_inner();
    let effective_stress: Pressure = allowable_stress * loading.joint_efficiency.into_inner();

    let denominator = effective_stress - 0.6 * pressure;
    if denominator <= Pressure::ZERO {
        return Err(DesignError::PressureExceedsAllowableStress {
            design_pressure: pressure,
            effective_stress,
        });
    }

    let calculated: Length = pressure * radius / denominator;
    let required = calculated + loading.corrosion_allowance.into_inner();

    let (selected, governed_by_minimum) = if required <= minimum {
        (minimum, true)
    } else {
        let gauge = round_up_to_standard_gauge(required).ok_or_else(|| {
            DesignError::NoStandardGauge {
                required,
                thickest: thickest_gauge(),
            }
        })?;
        (gauge, false)
    };

    Ok(ShellThickness {
        allowable_stress,
        calculated,
        required,
        selected,
        governed_by_minimum,
    })
}

/// Returns the thinnest standard gauge at least as thick as `thickness`.
///
/// Returns `None` if `thickness` exceeds the thickest gauge.
#[must_use]
pub fn round_up_to_standard_gauge(thickness: Length) -> Option<Length> {
    let mm = thickness.get::<millimeter>();
    STANDARD_PLATE_GAUGES_MM
        .iter()
        .find(|&&gauge| gauge + GAUGE_MATCH_SLACK_MM >= mm)
        .map(|&gauge| Length::new::<millimeter>(gauge))
}

fn thickest_gauge() -> Length {
    Length::new::<millimeter>(STANDARD_PLATE_GAUGES_MM[STANDARD_PLATE_GAUGES_MM.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::{megapascal, pound_force_per_square_inch},
        ratio::ratio,
    };

    /// Loading for the standard BTA tank at 2.5 psig in grade 300WA steel.
    fn reference_loading() -> ShellLoading {
        ShellLoading {
            design_pressure: NonNegative::new(Pressure::new::<pound_force_per_square_inch>(2.5))
                .unwrap(),
            radius: StrictlyPositive::new(Length::new::<millimeter>(935.0)).unwrap(),
            yield_strength: StrictlyPositive::new(Pressure::new::<megapascal>(300.0)).unwrap(),
            allowable_stress_fraction: UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.4))
                .unwrap(),
            joint_efficiency: UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.85)).unwrap(),
            corrosion_allowance: NonNegative::new(Length::new::<millimeter>(1.5)).unwrap(),
            minimum_thickness: StrictlyPositive::new(Length::new::<millimeter>(6.0)).unwrap(),
        }
    }

    fn with_pressure_mpa(mpa: f64) -> ShellLoading {
        ShellLoading {
            design_pressure: NonNegative::new(Pressure::new::<megapascal>(mpa)).unwrap(),
            ..reference_loading()
        }
    }

    #[test]
    fn reference_tank_is_governed_by_minimum_thickness() {
        let shell = shell_thickness(reference_loading()).unwrap();

        assert_relative_eq!(shell.allowable_stress.get::<megapascal>(), 120.0, epsilon = 1e-9);
        assert_relative_eq!(shell.calculated.get::<millimeter>(), 0.158_020_9, epsilon = 1e-6);
        assert_relative_eq!(shell.required.get::<millimeter>(), 1.658_020_9, epsilon = 1e-6);
        assert_relative_eq!(shell.selected.get::<millimeter>(), 6.0);
        assert!(shell.governed_by_minimum);
    }

    #[test]
    fn stated_reference_pressure_in_megapascal() {
        let shell = shell_thickness(with_pressure_mpa(0.0172)).unwrap();
        assert_relative_eq!(shell.selected.get::<millimeter>(), 6.0);
    }

    #[test]
    fn zero_pressure_needs_only_corrosion_allowance() {
        let shell = shell_thickness(with_pressure_mpa(0.0)).unwrap();

        assert_relative_eq!(shell.calculated.get::<millimeter>(), 0.0);
        assert_relative_eq!(shell.required.get::<millimeter>(), 1.5);
        assert_relative_eq!(shell.selected.get::<millimeter>(), 6.0);
    }

    #[test]
    fn high_pressure_rounds_up_to_next_gauge() {
        // t_calc = 1.0 · 935 / (102 − 0.6) ≈ 9.221 mm, t_min ≈ 10.721 mm.
        let shell = shell_thickness(with_pressure_mpa(1.0)).unwrap();

        assert_relative_eq!(shell.calculated.get::<millimeter>(), 9.220_907, epsilon = 1e-5);
        assert_relative_eq!(shell.selected.get::<millimeter>(), 12.0);
        assert!(!shell.governed_by_minimum);
    }

    #[test]
    fn pressure_beyond_effective_stress_is_an_error() {
        // S·E = 102 MPa, while 0.6·P = 120 MPa.
        let err = shell_thickness(with_pressure_mpa(200.0)).unwrap_err();
        assert!(matches!(
            err,
            DesignError::PressureExceedsAllowableStress { .. }
        ));
    }

    #[test]
    fn plate_thicker_than_any_gauge_is_an_error() {
        let err = shell_thickness(with_pressure_mpa(10.0)).unwrap_err();

        match err {
            DesignError::NoStandardGauge { required, thickest } => {
                assert!(required > thickest);
                assert_relative_eq!(thickest.get::<millimeter>(), 50.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn gauge_rounding() {
        let gauge = |mm: f64| {
            round_up_to_standard_gauge(Length::new::<millimeter>(mm))
                .map(|t| (t.get::<millimeter>() * 1e6).round() / 1e6)
        };

        assert_eq!(gauge(0.5), Some(6.0));
        assert_eq!(gauge(6.0), Some(6.0));
        assert_eq!(gauge(6.01), Some(8.0));
        assert_eq!(gauge(8.0 + 1e-12), Some(8.0));
        assert_eq!(gauge(23.0), Some(25.0));
        assert_eq!(gauge(50.0), Some(50.0));
        assert_eq!(gauge(50.5), None);
    }
}
