//! Internal volume and capacity verification.

use std::f64::consts::PI;

use uom::si::f64::{Length, Ratio, Volume};
use vessel_core::constraint::{Constrained, StrictlyPositive, UnitIntervalLeftOpen};

use crate::heads::DishedEnd;

/// Bund wall capacity as a multiple of the tank's gross volume.
pub const BUND_CAPACITY_FACTOR: f64 = 1.1;

/// Which internal volume is compared against the target capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityBasis {
    /// The cylindrical shell between tangent lines.
    ///
    /// Nominal tank capacities are quoted on this basis; the dished ends
    /// provide the ullage above the working level.
    #[default]
    Shell,

    /// The shell plus both dished ends.
    ShellAndHeads,
}

/// Volumes of a tank and the verdict against its target capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityCheck {
    /// Volume of the cylinder between tangent lines.
    pub shell_volume: Volume,

    /// Combined volume of both dished ends.
    pub heads_volume: Volume,

    /// Total internal volume, shell plus ends.
    pub gross_volume: Volume,

    pub basis: CapacityBasis,

    /// The volume compared against the target, per `basis`.
    pub verified_volume: Volume,

    pub target: Volume,

    /// Signed relative deviation `(V − V_target) / V_target`.
    pub deviation: Ratio,

    pub tolerance: Ratio,

    /// True when `|deviation| ≤ tolerance`.
    pub matches: bool,

    /// Minimum bund capacity around the tank.
    pub bund_capacity: Volume,
}

/// Computes tank volumes and checks them against the target capacity.
#[must_use]
pub fn verify_capacity(
    diameter: Constrained<Length, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    head: &DishedEnd,
    target: Constrained<Volume, StrictlyPositive>,
    tolerance: Constrained<Ratio, UnitIntervalLeftOpen>,
    basis: CapacityBasis,
) -> CapacityCheck {
    let diameter = diameter.into_inner();
    let target = target.into_inner();
    let tolerance = tolerance.into_inner();

    let shell_volume: Volume = 0.25 * PI * diameter * diameter * length.into_inner();
    let heads_volume = 2.0 * head.volume;
    let gross_volume = shell_volume + heads_volume;

    let verified_volume = match basis {
        CapacityBasis::Shell => shell_volume,
        CapacityBasis::ShellAndHeads => gross_volume,
    };

    let deviation: Ratio = (verified_volume - target) / target;
    let matches = deviation.abs() <= tolerance;

    CapacityCheck {
        shell_volume,
        heads_volume,
        gross_volume,
        basis,
        verified_volume,
        target,
        deviation,
        tolerance,
        matches,
        bund_capacity: BUND_CAPACITY_FACTOR * gross_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::millimeter,
        ratio::{percent, ratio},
        volume::{cubic_meter, liter},
    };
    use vessel_core::constraint::{StrictlyPositive, UnitIntervalLeftOpen};

    fn positive_mm(mm: f64) -> Constrained<Length, StrictlyPositive> {
        StrictlyPositive::new(Length::new::<millimeter>(mm)).unwrap()
    }

    fn check_standard_tank(target_liters: f64, basis: CapacityBasis) -> CapacityCheck {
        let diameter = positive_mm(1870.0);
        verify_capacity(
            diameter,
            positive_mm(3680.0),
            &DishedEnd::for_diameter(diameter),
            StrictlyPositive::new(Volume::new::<liter>(target_liters)).unwrap(),
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.02)).unwrap(),
            basis,
        )
    }

    #[test]
    fn standard_tank_matches_ten_cubic_meters() {
        let check = check_standard_tank(10_000.0, CapacityBasis::Shell);

        assert_relative_eq!(check.shell_volume.get::<cubic_meter>(), 10.106_968_5, epsilon = 1e-6);
        assert_relative_eq!(
            check.verified_volume.get::<cubic_meter>(),
            10.106_968_5,
            epsilon = 1e-6
        );
        assert_relative_eq!(check.deviation.get::<percent>(), 1.069_685, epsilon = 1e-5);
        assert!(check.matches);
    }

    #[test]
    fn gross_volume_and_bund_include_both_heads() {
        let check = check_standard_tank(10_000.0, CapacityBasis::Shell);

        assert_relative_eq!(check.heads_volume.get::<cubic_meter>(), 1.711_959_3, epsilon = 1e-6);
        assert_relative_eq!(check.gross_volume.get::<cubic_meter>(), 11.818_927_9, epsilon = 1e-6);
        assert_relative_eq!(check.bund_capacity.get::<cubic_meter>(), 13.000_820_7, epsilon = 1e-6);
    }

    #[test]
    fn nine_thousand_liters_is_out_of_tolerance() {
        let check = check_standard_tank(9_000.0, CapacityBasis::Shell);
        assert!(check.deviation.get::<ratio>() > 0.1);
        assert!(!check.matches);
    }

    #[test]
    fn heads_basis_overshoots_a_ten_cubic_meter_target() {
        let check = check_standard_tank(10_000.0, CapacityBasis::ShellAndHeads);
        assert_eq!(check.verified_volume, check.gross_volume);
        assert!(!check.matches);

        let check = check_standard_tank(11_800.0, CapacityBasis::ShellAndHeads);
        assert!(check.matches);
    }
}
