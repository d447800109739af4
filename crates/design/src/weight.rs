//! Plate weights and tank masses.
//!
//! Plate weights are surface area × plate thickness × plate density. The
//! shell area is taken on the nominal diameter, `π·D·L`.

use std::f64::consts::PI;

use uom::si::f64::{Length, Mass, MassDensity, Volume};
use vessel_core::constraint::{Constrained, NonNegative, StrictlyPositive};

use crate::{
    heads::DishedEnd,
    material::{StoredProduct, Water},
};

/// Masses of the tank and its contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub shell: Mass,

    /// Mass of one dished end.
    pub end: Mass,

    /// Lump allowance for nozzles, manhole, saddles and lugs.
    pub fittings: Mass,

    /// Shell, both ends and fittings.
    pub empty: Mass,

    /// Empty tank filled to its verified volume with product.
    pub operating: Mass,

    /// Empty tank completely filled with water for the hydrostatic test.
    pub hydrotest: Mass,
}

/// Plate and content properties needed for the weight calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightInputs {
    pub diameter: Constrained<Length, StrictlyPositive>,
    pub length: Constrained<Length, StrictlyPositive>,
    pub thickness: Length,
    pub plate_density: Constrained<MassDensity, StrictlyPositive>,
    pub product_density: Constrained<MassDensity, StrictlyPositive>,
    pub fittings_allowance: Constrained<Mass, NonNegative>,

    /// Volume of product held in service.
    pub working_volume: Volume,

    /// Total internal volume, filled during the hydrostatic test.
    pub gross_volume: Volume,
}

/// Computes tank weights for the selected plate thickness.
#[must_use]
pub fn weights(inputs: &WeightInputs, head: &DishedEnd) -> Weights {
    let plate_density = inputs.plate_density.into_inner();
    let fittings = inputs.fittings_allowance.into_inner();

    let shell: Mass = PI
        * inputs.diameter.into_inner()
        * inputs.length.into_inner()
        * inputs.thickness
        * plate_density;
    let end: Mass = head.surface_area * inputs.thickness * plate_density;
    let empty = shell + 2.0 * end + fittings;

    let operating = empty + inputs.working_volume * inputs.product_density.into_inner();
    let hydrotest = empty + inputs.gross_volume * Water::properties().density;

    Weights {
        shell,
        end,
        fittings,
        empty,
        operating,
        hydrotest,
    }
}
