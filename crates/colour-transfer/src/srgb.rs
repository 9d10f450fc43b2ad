//! sRGB transfer function (IEC 61966-2-1:1999).
//!
//! A linear toe below the breakpoint joined to an offset 2.4 power curve.
//! The two segments meet at V = 0.04045 / L = 0.0031308; the published
//! constants leave a mismatch there of a few parts in 1e8, which both
//! directions inherit.
//!
//! ```rust
//! use colour_transfer::srgb;
//!
//! // 18% grey encodes to roughly code value 118 of 255.
//! let v = srgb::oetf(0.18);
//! assert!((v * 255.0 - 117.65).abs() < 0.01);
//! assert!((srgb::eotf(v) - 0.18).abs() < 1e-12);
//! ```
//!
//! Both functions are defined on [0, 1]; values outside pass through the
//! same formulas unclamped.

const TOE_SLOPE: f64 = 12.92;
const ENCODED_BREAK: f64 = 0.04045;
const LINEAR_BREAK: f64 = 0.0031308;
const OFFSET: f64 = 0.055;
const GAMMA: f64 = 2.4;

/// Encoded sRGB value to linear light.
///
/// ```text
/// L = V / 12.92                     V <= 0.04045
/// L = ((V + 0.055) / 1.055)^2.4     otherwise
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= ENCODED_BREAK {
        v / TOE_SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    }
}

/// Linear light to encoded sRGB value.
///
/// ```rust
/// use colour_transfer::srgb;
///
/// assert_eq!(srgb::oetf(0.0), 0.0);
/// assert!((srgb::oetf(1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= LINEAR_BREAK {
        l * TOE_SLOPE
    } else {
        (1.0 + OFFSET) * l.powf(1.0 / GAMMA) - OFFSET
    }
}
