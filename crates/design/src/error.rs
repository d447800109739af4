use thiserror::Error;
use uom::si::f64::{Length, Pressure};
use vessel_core::constraint::ConstraintError;

/// Errors that may occur when computing a tank design.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DesignError {
    /// An input parameter violates its constraint.
    ///
    /// `parameter` names the offending field of
    /// [`TankDesignParameters`](crate::TankDesignParameters).
    #[error("invalid parameter `{parameter}`: {source}")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The design pressure is too high for the thin-wall shell formula.
    ///
    /// The denominator `S·E − 0.6·P` is zero or negative, so no finite plate
    /// thickness can contain the pressure.
    #[error(
        "design pressure {design_pressure:?} exceeds what a shell with effective allowable stress {effective_stress:?} can carry"
    )]
    PressureExceedsAllowableStress {
        design_pressure: Pressure,
        effective_stress: Pressure,
    },

    /// The required thickness is thicker than every standard plate gauge.
    #[error("required thickness {required:?} exceeds the thickest standard plate {thickest:?}")]
    NoStandardGauge { required: Length, thickest: Length },
}

impl DesignError {
    /// Wraps a constraint violation for the named parameter.
    pub(crate) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}
