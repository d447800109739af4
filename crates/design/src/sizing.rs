//! Main dimensions derived from a target capacity.
//!
//! Capacities from 8 m³ to 12 m³ map to the standard BTA tank used throughout
//! the industry. Any other capacity is sized as a cylinder with a
//! length-to-diameter ratio of two, the usual proportion for horizontal tanks.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Volume},
    length::{meter, millimeter},
    volume::{cubic_meter, liter},
};
use vessel_core::constraint::{Constrained, StrictlyPositive};

/// Length-to-diameter ratio used for non-standard capacities.
pub const LENGTH_TO_DIAMETER: f64 = 2.0;

/// Diameter and tan-to-tan length of a tank shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub diameter: Length,
    pub length: Length,
}

impl Dimensions {
    /// The standard 1 870 mm × 3 680 mm BTA tank.
    #[must_use]
    pub fn standard_bta() -> Self {
        Self {
            diameter: Length::new::<millimeter>(1870.0),
            length: Length::new::<millimeter>(3680.0),
        }
    }

    /// Returns the shell dimensions for a target capacity.
    ///
    /// Capacities from 8 000 L to 12 000 L (inclusive) use the standard BTA
    /// tank. Otherwise the cylinder is sized with `L = 2·D`, giving
    /// `D = (2·V / π)^(1/3)`.
    #[must_use]
    pub fn for_capacity(capacity: Constrained<Volume, StrictlyPositive>) -> Self {
        let capacity = capacity.into_inner();
        let liters = capacity.get::<liter>();

        if (8000.0..=12000.0).contains(&liters) {
            return Self::standard_bta();
        }

        let diameter_m = (capacity.get::<cubic_meter>() * LENGTH_TO_DIAMETER / PI).cbrt();
        let diameter = Length::new::<meter>(diameter_m);

        Self {
            diameter,
            length: LENGTH_TO_DIAMETER * diameter,
        }
    }

    /// Volume of the cylindrical shell alone.
    #[must_use]
    pub fn cylinder_volume(&self) -> Volume {
        0.25 * PI * self.diameter * self.diameter * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use vessel_core::constraint::StrictlyPositive;

    fn capacity(liters: f64) -> Constrained<Volume, StrictlyPositive> {
        StrictlyPositive::new(Volume::new::<liter>(liters)).unwrap()
    }

    #[test]
    fn ten_thousand_liters_is_the_standard_tank() {
        assert_eq!(
            Dimensions::for_capacity(capacity(10_000.0)),
            Dimensions::standard_bta()
        );
        assert_eq!(
            Dimensions::for_capacity(capacity(8_000.0)),
            Dimensions::standard_bta()
        );
        assert_eq!(
            Dimensions::for_capacity(capacity(12_000.0)),
            Dimensions::standard_bta()
        );
    }

    #[test]
    fn other_capacities_use_length_twice_diameter() {
        let dims = Dimensions::for_capacity(capacity(20_000.0));

        assert_relative_eq!(dims.diameter.get::<millimeter>(), 2335.0886, epsilon = 1e-3);
        assert_relative_eq!(
            dims.length.get::<millimeter>(),
            2.0 * dims.diameter.get::<millimeter>()
        );
        assert_relative_eq!(
            dims.cylinder_volume().get::<cubic_meter>(),
            20.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn standard_tank_cylinder_holds_about_ten_cubic_meters() {
        assert_relative_eq!(
            Dimensions::standard_bta().cylinder_volume().get::<cubic_meter>(),
            10.106_968_5,
            epsilon = 1e-6
        );
    }
}
