//! Plate materials and stored products.
//!
//! Standard grades and products are zero-sized marker types that provide
//! their properties through [`PlateGrade`] and [`StoredProduct`]. Designs
//! carry the resulting [`MaterialProperties`] and [`ProductProperties`] by
//! value, so custom materials are just as easy to describe.

use uom::si::{
    f64::{MassDensity, Pressure, Ratio},
    mass_density::kilogram_per_cubic_meter,
    pressure::{gigapascal, megapascal},
    ratio::{percent, ratio},
};

/// Mechanical properties of a plate material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    /// Grade designation as it appears on drawings and reports.
    pub designation: String,
    pub yield_strength: Pressure,
    pub tensile_strength: Pressure,
    pub elongation: Ratio,
    pub density: MassDensity,
    pub elastic_modulus: Pressure,
    pub poisson_ratio: Ratio,
}

/// A standard plate grade with tabulated properties.
pub trait PlateGrade {
    fn properties() -> MaterialProperties;
}

/// Carbon steel plate, grade 300WA of SANS 1431.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grade300WA;

impl PlateGrade for Grade300WA {
    fn properties() -> MaterialProperties {
        MaterialProperties {
            designation: "Carbon Steel Plate Grade 300WA (SANS 1431)".to_string(),
            yield_strength: Pressure::new::<megapascal>(300.0),
            tensile_strength: Pressure::new::<megapascal>(430.0),
            elongation: Ratio::new::<percent>(23.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(7850.0),
            elastic_modulus: Pressure::new::<gigapascal>(200.0),
            poisson_ratio: Ratio::new::<ratio>(0.3),
        }
    }
}

/// Properties of the liquid the tank holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProperties {
    pub name: String,
    pub density: MassDensity,
}

/// A liquid with a tabulated density.
pub trait StoredProduct {
    fn properties() -> ProductProperties;
}

/// Liquid water, used as the hydrostatic test medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl StoredProduct for Water {
    fn properties() -> ProductProperties {
        ProductProperties {
            name: "Water".to_string(),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        }
    }
}

/// Automotive diesel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diesel;

impl StoredProduct for Diesel {
    fn properties() -> ProductProperties {
        ProductProperties {
            name: "Diesel".to_string(),
            density: MassDensity::new::<kilogram_per_cubic_meter>(850.0),
        }
    }
}

/// Unleaded petrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Petrol;

impl StoredProduct for Petrol {
    fn properties() -> ProductProperties {
        ProductProperties {
            name: "Petrol".to_string(),
            density: MassDensity::new::<kilogram_per_cubic_meter>(740.0),
        }
    }
}
