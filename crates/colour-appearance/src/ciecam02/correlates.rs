//! Perceptual correlates from post-adaptation cone responses.
//!
//! Every function here is a single equation of the forward model. They
//! are composed by [`to_appearance`]; the reverse model reuses the ones
//! that appear unchanged on its path (brightness, eccentricity).

use colour_math::Vec3;

use super::hue::{eccentricity, hue_angle_from_opponents, hue_quadrature};
use super::{Ciecam02Specification, Environment};
use crate::{AppearanceError, AppearanceResult};

/// Offset removed from the achromatic sum so that A = 0 for a null stimulus.
pub(crate) const ACHROMATIC_OFFSET: f64 = 0.305;

/// Scale of the temporary magnitude t.
pub(crate) const CHROMA_SCALE: f64 = 50000.0 / 13.0;

/// Redness-greenness a and yellowness-blueness b.
#[inline]
pub fn opponent_dimensions(rgb_a: Vec3) -> (f64, f64) {
    let a = rgb_a.x - 12.0 * rgb_a.y / 11.0 + rgb_a.z / 11.0;
    let b = (rgb_a.x + rgb_a.y - 2.0 * rgb_a.z) / 9.0;
    (a, b)
}

/// Achromatic response A.
///
/// ```text
/// A = (2 R_a + G_a + B_a / 20 - 0.305) N_bb
/// ```
#[inline]
pub fn achromatic_response(rgb_a: Vec3, n_bb: f64) -> f64 {
    (2.0 * rgb_a.x + rgb_a.y + rgb_a.z / 20.0 - ACHROMATIC_OFFSET) * n_bb
}

/// Lightness J = 100 (A / A_w)^(c z).
///
/// # Errors
///
/// A negative achromatic response has no real power.
pub fn lightness(a: f64, a_w: f64, c: f64, z: f64) -> AppearanceResult<f64> {
    if a < 0.0 {
        return Err(AppearanceError::domain(
            "A",
            a,
            "achromatic response must not be negative",
        ));
    }
    Ok(100.0 * (a / a_w).powf(c * z))
}

/// Brightness Q = (4 / c) sqrt(J / 100) (A_w + 4) F_L^0.25.
#[inline]
pub fn brightness(j: f64, c: f64, a_w: f64, f_l: f64) -> f64 {
    (4.0 / c) * (j / 100.0).sqrt() * (a_w + 4.0) * f_l.powf(0.25)
}

/// Temporary magnitude t.
///
/// # Errors
///
/// The weighted cone sum in the denominator must be positive.
pub fn temporary_magnitude(
    n_c: f64,
    n_cb: f64,
    e_t: f64,
    (a, b): (f64, f64),
    rgb_a: Vec3,
) -> AppearanceResult<f64> {
    let denom = rgb_a.x + rgb_a.y + 21.0 * rgb_a.z / 20.0;
    if denom <= 0.0 {
        return Err(AppearanceError::domain(
            "R_a + G_a + 21/20 B_a",
            denom,
            "cone response sum must be positive",
        ));
    }
    Ok(CHROMA_SCALE * n_c * n_cb * e_t * a.hypot(b) / denom)
}

/// The background term (1.64 - 0.29^n)^0.73 shared by both directions.
#[inline]
pub(crate) fn chroma_background_term(n: f64) -> f64 {
    (1.64 - 0.29_f64.powf(n)).powf(0.73)
}

/// Chroma C = t^0.9 sqrt(J / 100) (1.64 - 0.29^n)^0.73.
#[inline]
pub fn chroma(t: f64, j: f64, n: f64) -> f64 {
    t.powf(0.9) * (j / 100.0).sqrt() * chroma_background_term(n)
}

/// Colourfulness M = C F_L^0.25.
#[inline]
pub fn colourfulness(c: f64, f_l: f64) -> f64 {
    c * f_l.powf(0.25)
}

/// Saturation s = 100 sqrt(M / Q).
///
/// # Errors
///
/// Q must be positive.
pub fn saturation(m: f64, q: f64) -> AppearanceResult<f64> {
    if q <= 0.0 || !q.is_finite() {
        return Err(AppearanceError::domain(
            "Q",
            q,
            "saturation requires positive brightness",
        ));
    }
    Ok(100.0 * (m / q).sqrt())
}

/// Computes every correlate for compressed cone responses `rgb_a`.
pub fn to_appearance(rgb_a: Vec3, env: &Environment) -> AppearanceResult<Ciecam02Specification> {
    let p = env.parameters;
    let surround = env.conditions.surround;

    let (a, b) = opponent_dimensions(rgb_a);
    let h = hue_angle_from_opponents(a, b);
    let e_t = eccentricity(h);

    let achromatic = achromatic_response(rgb_a, p.n_bb);
    let j = lightness(achromatic, env.a_w, surround.c, p.z)?;
    let q = brightness(j, surround.c, env.a_w, p.f_l);

    let t = temporary_magnitude(surround.n_c, p.n_cb, e_t, (a, b), rgb_a)?;
    let c = chroma(t, j, p.n);
    let m = colourfulness(c, p.f_l);
    let s = saturation(m, q)?;

    Ok(Ciecam02Specification {
        lightness: j,
        chroma: c,
        hue_angle: h,
        saturation: s,
        brightness: q,
        colourfulness: m,
        hue_quadrature: hue_quadrature(h),
    })
}
