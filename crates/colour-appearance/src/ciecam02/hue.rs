//! Hue angle, hue quadrature and eccentricity.
//!
//! Hue quadrature H places a hue angle between the four unique hues
//! (red, yellow, green, blue) at H = 0, 100, 200, 300, so that equal
//! steps of H look like equal hue steps. The red segment wraps: angles
//! below unique red are lifted by 360 before interpolating, which puts
//! them in the blue-to-red segment and gives H in [0, 400).

use std::f64::consts::PI;

/// A unique hue breakpoint.
#[derive(Debug, Clone, Copy)]
struct UniqueHue {
    /// Hue angle h_i in degrees.
    angle: f64,
    /// Eccentricity e_i at that angle.
    eccentricity: f64,
}

/// Unique red, yellow, green, blue.
const UNIQUE_HUES: [UniqueHue; 4] = [
    UniqueHue { angle: 20.14, eccentricity: 0.8 },
    UniqueHue { angle: 90.00, eccentricity: 0.7 },
    UniqueHue { angle: 164.25, eccentricity: 1.0 },
    UniqueHue { angle: 237.53, eccentricity: 1.2 },
];

/// Width of one quadrant in hue quadrature.
const QUADRANT: f64 = 100.0;

/// Breakpoints bracketing quadrant `i`; the last one wraps to red + 360.
#[inline]
fn bracket(i: usize) -> (UniqueHue, UniqueHue) {
    let lower = UNIQUE_HUES[i];
    let upper = if i + 1 < UNIQUE_HUES.len() {
        UNIQUE_HUES[i + 1]
    } else {
        UniqueHue {
            angle: UNIQUE_HUES[0].angle + 360.0,
            ..UNIQUE_HUES[0]
        }
    };
    (lower, upper)
}

/// Hue angle in degrees, in [0, 360), of opponent signals (a, b).
#[inline]
pub fn hue_angle_from_opponents(a: f64, b: f64) -> f64 {
    wrap_degrees(b.atan2(a).to_degrees())
}

/// Wraps an angle into [0, 360).
#[inline]
pub(crate) fn wrap_degrees(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Eccentricity factor e_t for a hue angle in degrees.
///
/// ```text
/// e_t = 1/4 (cos(h π/180 + 2) + 3.8)
/// ```
#[inline]
pub fn eccentricity(h: f64) -> f64 {
    0.25 * ((h * PI / 180.0 + 2.0).cos() + 3.8)
}

/// Converts a hue angle (degrees) to hue quadrature H in [0, 400).
///
/// # Example
///
/// ```rust
/// use colour_appearance::hue_quadrature;
///
/// assert!((hue_quadrature(90.0) - 100.0).abs() < 1e-12);
/// assert_eq!(hue_quadrature(0.0), hue_quadrature(360.0));
/// ```
pub fn hue_quadrature(h: f64) -> f64 {
    let mut hp = wrap_degrees(h);
    if hp < UNIQUE_HUES[0].angle {
        hp += 360.0;
    }

    let i = UNIQUE_HUES
        .iter()
        .rposition(|u| u.angle <= hp)
        .unwrap_or(0);
    let (lower, upper) = bracket(i);

    let t = (hp - lower.angle) / lower.eccentricity;
    let rest = (upper.angle - hp) / upper.eccentricity;
    QUADRANT * i as f64 + QUADRANT * t / (t + rest)
}

/// Converts hue quadrature H back to a hue angle in [0, 360).
///
/// Inverts the linear interpolation of [`hue_quadrature`] within the
/// quadrant H falls in. H is taken modulo 400.
///
/// # Example
///
/// ```rust
/// use colour_appearance::{hue_angle, hue_quadrature};
///
/// let h = 219.0484326583;
/// assert!((hue_angle(hue_quadrature(h)) - h).abs() < 1e-9);
/// ```
pub fn hue_angle(hue_quadrature: f64) -> f64 {
    let hq = hue_quadrature.rem_euclid(4.0 * QUADRANT);
    let i = ((hq / QUADRANT).floor() as usize).min(UNIQUE_HUES.len() - 1);
    let hp = hq - QUADRANT * i as f64;
    let (lower, upper) = bracket(i);

    let (h_i, e_i) = (lower.angle, lower.eccentricity);
    let (h_n, e_n) = (upper.angle, upper.eccentricity);

    let h = (hp * (e_n * h_i - e_i * h_n) - QUADRANT * h_i * e_n)
        / (hp * (e_n - e_i) - QUADRANT * e_n);
    wrap_degrees(h)
}
