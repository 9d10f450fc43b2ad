//! Chromatic adaptation and post-adaptation compression.
//!
//! Forward path for a stimulus:
//!
//! ```text
//! XYZ ─CAT02─► RGB ─×gains─► RGB_c ─CAT02⁻¹·HPE─► RGB' ─compress─► RGB_a
//! ```
//!
//! The gains implement a von Kries scaling toward the adapted white,
//! weighted by the degree of adaptation D. The compression is a
//! saturating power function that keeps the sign of its input, so
//! slightly negative cone responses survive the round trip.

use colour_math::{Vec3, CAT02, CAT02_INV, HPE, HPE_INV};
use tracing::debug;

use super::Environment;
use crate::{AppearanceError, AppearanceResult};

/// Exponent of the post-adaptation power law.
const COMPRESSION_EXPONENT: f64 = 0.42;
/// Half-saturation constant of the post-adaptation response.
const HALF_SATURATION: f64 = 27.13;
/// Asymptotic response of the post-adaptation function.
const MAX_RESPONSE: f64 = 400.0;
/// Noise floor added after compression.
const NOISE: f64 = 0.1;

/// Degree of adaptation D for surround factor F and adapting luminance.
///
/// ```text
/// D = F (1 - 1/3.6 · e^((-L_A - 42) / 92))
/// ```
///
/// Clamped to [0, 1].
pub fn degree_of_adaptation(f: f64, l_a: f64) -> f64 {
    let d = f * (1.0 - (1.0 / 3.6) * ((-l_a - 42.0) / 92.0).exp());
    let clamped = d.clamp(0.0, 1.0);
    if clamped != d {
        debug!(f, l_a, d, "degree of adaptation clamped");
    }
    clamped
}

/// Per-channel von Kries gains toward the adapted white.
///
/// ```text
/// gain_i = Y_w · D / RGB_w,i + 1 - D
/// ```
#[inline]
pub fn adaptation_gains(rgb_w: Vec3, y_w: f64, d: f64) -> Vec3 {
    rgb_w.map(|c| y_w * d / c + 1.0 - d)
}

/// Post-adaptation non-linear response compression.
///
/// ```text
/// RGB_a = 400 sign(x) (F_L|x|/100)^0.42 / (27.13 + (F_L|x|/100)^0.42) + 0.1
/// ```
#[inline]
pub fn compress(rgb: Vec3, f_l: f64) -> Vec3 {
    rgb.map(|x| {
        let p = (f_l * x.abs() / 100.0).powf(COMPRESSION_EXPONENT);
        (MAX_RESPONSE * p / (HALF_SATURATION + p)).copysign(x) + NOISE
    })
}

/// Inverse of [`compress`].
///
/// # Errors
///
/// A response at or beyond the ±400 asymptote has no preimage.
pub fn expand(rgb_a: Vec3, f_l: f64) -> AppearanceResult<Vec3> {
    let y = rgb_a - Vec3::splat(NOISE);
    if y.abs().max_element() >= MAX_RESPONSE || !y.is_finite() {
        return Err(AppearanceError::domain(
            "RGB_a",
            y.abs().max_element() + NOISE,
            "post-adaptation response must stay below its asymptote",
        ));
    }

    Ok(y.map(|v| {
        let a = v.abs();
        (100.0 / f_l * (HALF_SATURATION * a / (MAX_RESPONSE - a)).powf(1.0 / COMPRESSION_EXPONENT))
            .copysign(v)
    }))
}

/// Adapts tristimulus values to compressed cone responses RGB_a.
pub fn adapt(xyz: Vec3, env: &Environment) -> Vec3 {
    let rgb_c = (CAT02 * xyz) * env.gains;
    let rgb_p = HPE * (CAT02_INV * rgb_c);
    compress(rgb_p, env.parameters.f_l)
}

/// Inverse of [`adapt`]: compressed cone responses back to XYZ.
pub fn unadapt(rgb_a: Vec3, env: &Environment) -> AppearanceResult<Vec3> {
    let rgb_p = expand(rgb_a, env.parameters.f_l)?;
    let rgb_c = CAT02 * (HPE_INV * rgb_p);
    Ok(CAT02_INV * (rgb_c / env.gains))
}
