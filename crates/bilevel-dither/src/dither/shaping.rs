//! Nonlinear error shaping applied before propagation.

use std::f64::consts::PI;

/// Full-scale error magnitude used to normalise before the remap.
const FULL_SCALE: f64 = 255.0;

/// Transform applied to each quantization error before it is diffused.
///
/// Shaping is a strategy of the diffusion engine, not a separate algorithm:
/// any kernel can be paired with any variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorShaping {
    /// Propagate the raw error.
    #[default]
    Identity,

    /// Rong remap: with `e = |err| / 255`, propagate
    /// `sign(err) * (e + sin(4πe) / 4π) * 255`.
    ///
    /// The remap is odd and fixes every quarter of full scale
    /// (`0`, `±63.75`, `±127.5`, `±191.25`, `±255`). In between it
    /// alternately boosts and damps: magnitudes in `(0, 63.75)` grow,
    /// magnitudes in `(63.75, 127.5)` shrink, and so on.
    Rong,
}

impl ErrorShaping {
    /// Apply the transform to one error value.
    #[inline]
    pub fn apply(self, err: f64) -> f64 {
        match self {
            ErrorShaping::Identity => err,
            ErrorShaping::Rong => rong(err),
        }
    }
}

fn rong(err: f64) -> f64 {
    if err == 0.0 {
        return 0.0;
    }
    let sign = if err > 0.0 { 1.0 } else { -1.0 };
    let e = err.abs() / FULL_SCALE;
    let warped = e + (4.0 * PI * e).sin() / (4.0 * PI);
    sign * warped * FULL_SCALE
}
