//! Dished-end geometry.
//!
//! Each end is specified by its knuckle and crown radii, and its volume and
//! surface area are taken from the equivalent 2:1 semi-ellipsoidal head
//! (depth `D/4`).

use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length, Volume},
    length::millimeter,
};
use vessel_core::constraint::{Constrained, StrictlyPositive};

/// Smallest knuckle radius permitted by SANS 10131 A.3.2.4.
pub const MIN_KNUCKLE_RADIUS_MM: f64 = 50.0;

/// Knuckle radius used unless `0.06·D` is larger.
pub const DEFAULT_KNUCKLE_RADIUS_MM: f64 = 60.0;

/// Knuckle radius as a fraction of diameter.
pub const KNUCKLE_FRACTION_OF_DIAMETER: f64 = 0.06;

/// Largest crown radius permitted, as a multiple of diameter.
pub const MAX_CROWN_RADIUS_FACTOR: f64 = 1.5;

/// Geometry of one dished end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DishedEnd {
    pub knuckle_radius: Length,
    pub crown_radius: Length,

    /// Depth of the head beyond the tangent line.
    pub depth: Length,

    /// Internal volume of one head.
    pub volume: Volume,

    /// Surface area of one head, used for its plate weight.
    pub surface_area: Area,
}

impl DishedEnd {
    /// Returns the dished end for a shell of the given diameter.
    ///
    /// The knuckle radius is `max(60 mm, 0.06·D)` and the crown radius is `D`.
    #[must_use]
    pub fn for_diameter(diameter: Constrained<Length, StrictlyPositive>) -> Self {
        let diameter = diameter.into_inner();
        let radius = 0.5 * diameter;

        let default_knuckle = Length::new::<millimeter>(DEFAULT_KNUCKLE_RADIUS_MM);
        let proportional_knuckle = KNUCKLE_FRACTION_OF_DIAMETER * diameter;
        let knuckle_radius = if proportional_knuckle > default_knuckle {
            proportional_knuckle
        } else {
            default_knuckle
        };

        Self {
            knuckle_radius,
            crown_radius: diameter,
            depth: 0.25 * diameter,
            volume: PI / 24.0 * diameter * diameter * diameter,
            surface_area: PI * ellipsoidal_area_factor() * radius * radius,
        }
    }

    /// True if the knuckle radius meets the 50 mm minimum.
    #[must_use]
    pub fn knuckle_is_compliant(&self) -> bool {
        self.knuckle_radius >= Length::new::<millimeter>(MIN_KNUCKLE_RADIUS_MM)
    }

    /// True if the crown radius lies between `D` and `1.5·D`.
    #[must_use]
    pub fn crown_is_compliant(&self, diameter: Length) -> bool {
        self.crown_radius >= diameter && self.crown_radius <= MAX_CROWN_RADIUS_FACTOR * diameter
    }
}

/// Area of a 2:1 semi-ellipsoid divided by `π·R²`.
///
/// For an oblate semi-spheroid with eccentricity `e = √0.75` this is
/// `1 + (1 − e²)/e · atanh(e)`.
fn ellipsoidal_area_factor() -> f64 {
    let e = 0.75_f64.sqrt();
    1.0 + (1.0 - e * e) / e * e.atanh()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, volume::cubic_meter};

    fn diameter_mm(mm: f64) -> Constrained<Length, StrictlyPositive> {
        StrictlyPositive::new(Length::new::<millimeter>(mm)).unwrap()
    }

    #[test]
    fn standard_tank_heads() {
        let head = DishedEnd::for_diameter(diameter_mm(1870.0));

        // 0.06 · 1870 = 112.2 mm beats the 60 mm default.
        assert_relative_eq!(head.knuckle_radius.get::<millimeter>(), 112.2, epsilon = 1e-9);
        assert_relative_eq!(head.crown_radius.get::<millimeter>(), 1870.0, epsilon = 1e-9);
        assert_relative_eq!(head.depth.get::<millimeter>(), 467.5, epsilon = 1e-9);
        assert_relative_eq!(head.volume.get::<cubic_meter>(), 0.855_979_7, epsilon = 1e-6);
        assert_relative_eq!(head.surface_area.get::<square_meter>(), 3.790_588, epsilon = 1e-5);

        assert!(head.knuckle_is_compliant());
        assert!(head.crown_is_compliant(Length::new::<millimeter>(1870.0)));
    }

    #[test]
    fn small_tanks_keep_the_default_knuckle() {
        let head = DishedEnd::for_diameter(diameter_mm(800.0));
        assert_relative_eq!(head.knuckle_radius.get::<millimeter>(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn crown_outside_limits_is_flagged() {
        let head = DishedEnd {
            crown_radius: Length::new::<millimeter>(3000.0),
            ..DishedEnd::for_diameter(diameter_mm(1870.0))
        };
        assert!(!head.crown_is_compliant(Length::new::<millimeter>(1870.0)));
    }

    #[test]
    fn two_to_one_area_factor() {
        assert_relative_eq!(ellipsoidal_area_factor(), 1.380_173, epsilon = 1e-6);
    }
}
