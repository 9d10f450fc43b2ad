//! ITU-R BT.1886 reference display transfer function.
//!
//! BT.1886 defines a gamma 2.4 EOTF parameterised by the display's black
//! and white luminance. The recommendation specifies no OETF; [`oetf`] is
//! the algebraic inverse, kept for symmetry in round trips.
//!
//! # Range
//!
//! - Encoded: [0, 1] (black at 0, white at 1)
//! - Linear: screen luminance in cd/m2
//!
//! # Reference
//!
//! ITU-R BT.1886 (2011)

use tracing::warn;

/// Exponent of the reference EOTF.
pub const GAMMA: f64 = 2.4;

/// Default screen luminance for black.
pub const DEFAULT_L_B: f64 = 64.0;

/// Default screen luminance for white.
pub const DEFAULT_L_W: f64 = 940.0;

/// Derived gain `a` and black lift `b`.
#[inline]
fn coefficients(l_b: f64, l_w: f64) -> (f64, f64) {
    let gamma_d = 1.0 / GAMMA;
    let n = l_w.powf(gamma_d) - l_b.powf(gamma_d);
    (n.powf(GAMMA), l_b.powf(gamma_d) / n)
}

/// BT.1886 inverse EOTF: screen luminance to signal level.
///
/// # Formula
///
/// ```text
/// V = (L / a)^(1/2.4) - b
/// ```
///
/// Not defined by the recommendation, so every call logs a warning.
pub fn oetf(l: f64, l_b: f64, l_w: f64) -> f64 {
    warn!("BT.1886 specifies no OETF; using the inverse EOTF");
    let (a, b) = coefficients(l_b, l_w);
    (l / a).powf(1.0 / GAMMA) - b
}

/// BT.1886 EOTF: signal level to screen luminance.
///
/// # Formula
///
/// ```text
/// L = a * max(V + b, 0)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use colour_transfer::bt1886::{eotf, DEFAULT_L_B, DEFAULT_L_W};
///
/// let nits = eotf(0.409007728864150, DEFAULT_L_B, DEFAULT_L_W);
/// assert!((nits - 277.9815917).abs() < 1e-6);
/// ```
#[inline]
pub fn eotf(v: f64, l_b: f64, l_w: f64) -> f64 {
    let (a, b) = coefficients(l_b, l_w);
    a * (v + b).max(0.0).powf(GAMMA)
}
