//! Inverse model: correlates back to tristimulus values.
//!
//! The forward steps are undone in reverse order:
//!
//! ```text
//! J|Q ──► J ──► A          C|M|s ──► C ──► t          h|H ──► h ──► e_t
//!                 \                        |                      /
//!                  └──────────► (a, b) ◄───┴─────────────────────┘
//!                                  │
//!                               RGB_a ──expand──► RGB' ──► XYZ
//! ```
//!
//! Given t, e_t and A the opponent pair lies on the ray at angle h. Its
//! length r follows from substituting a = r cos h, b = r sin h into the
//! definition of t and solving the resulting linear equation:
//!
//! ```text
//! r = 23 p2 t / (23 p1 + t (11 cos h + 108 sin h))
//! p1 = (50000/13) N_c N_cb e_t        p2 = A / N_bb + 0.305
//! ```
//!
//! t = 0 (achromatic) puts the colour on the grey axis: a = b = 0 and the
//! hue is ignored.

use colour_math::Vec3;
use tracing::debug;

use super::adaptation::unadapt;
use super::correlates::{brightness, chroma_background_term, ACHROMATIC_OFFSET, CHROMA_SCALE};
use super::hue::{eccentricity, hue_angle};
use super::{Environment, PartialSpecification};
use crate::{AppearanceError, AppearanceResult};

/// Lightness from brightness, inverting Q = (4/c) sqrt(J/100) (A_w+4) F_L^0.25.
#[inline]
pub(crate) fn lightness_from_brightness(q: f64, env: &Environment) -> f64 {
    let c = env.conditions.surround.c;
    6.25 * (c * q / ((env.a_w + 4.0) * env.parameters.f_l.powf(0.25))).powi(2)
}

/// Rejects non-finite and negative correlates.
fn non_negative(quantity: &'static str, value: f64) -> AppearanceResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppearanceError::domain(
            quantity,
            value,
            "must be finite and non-negative",
        ))
    }
}

/// Resolves J from J or Q.
fn resolve_lightness(spec: &PartialSpecification, env: &Environment) -> AppearanceResult<f64> {
    match (spec.lightness, spec.brightness) {
        (Some(j), _) => non_negative("J", j),
        (None, Some(q)) => Ok(lightness_from_brightness(non_negative("Q", q)?, env)),
        (None, None) => Err(AppearanceError::MissingCorrelate("J or Q")),
    }
}

/// Resolves C from C, M or s (in that order of preference).
fn resolve_chroma(spec: &PartialSpecification, j: f64, env: &Environment) -> AppearanceResult<f64> {
    let f_l4 = env.parameters.f_l.powf(0.25);

    if let Some(c) = spec.chroma {
        return non_negative("C", c);
    }
    if let Some(m) = spec.colourfulness {
        return Ok(non_negative("M", m)? / f_l4);
    }
    if let Some(s) = spec.saturation {
        let s = non_negative("s", s)?;
        let q = brightness(j, env.conditions.surround.c, env.a_w, env.parameters.f_l);
        let m = (s / 100.0).powi(2) * q;
        return Ok(m / f_l4);
    }
    Err(AppearanceError::MissingCorrelate("C, M or s"))
}

/// Resolves h from h or H.
fn resolve_hue(spec: &PartialSpecification) -> AppearanceResult<f64> {
    let h = match (spec.hue_angle, spec.hue_quadrature) {
        (Some(h), _) => h,
        (None, Some(hq)) => hue_angle(hq),
        (None, None) => return Err(AppearanceError::MissingCorrelate("h or H")),
    };
    if h.is_finite() {
        Ok(h)
    } else {
        Err(AppearanceError::domain("h", h, "hue must be finite"))
    }
}

/// Opponent dimensions (a, b) for magnitude t, hue h (degrees) and
/// achromatic response A.
fn opponents(t: f64, h: f64, achromatic: f64, env: &Environment) -> AppearanceResult<(f64, f64)> {
    if t == 0.0 {
        debug!(h, "achromatic reverse: hue ignored");
        return Ok((0.0, 0.0));
    }

    let p = env.parameters;
    let p1 = CHROMA_SCALE * env.conditions.surround.n_c * p.n_cb * eccentricity(h);
    let p2 = achromatic / p.n_bb + ACHROMATIC_OFFSET;

    let (sin_h, cos_h) = h.to_radians().sin_cos();
    let denom = 23.0 * p1 + t * (11.0 * cos_h + 108.0 * sin_h);
    if denom <= 0.0 {
        return Err(AppearanceError::domain(
            "C",
            t,
            "chroma too large for this hue and lightness",
        ));
    }

    let r = 23.0 * p2 * t / denom;
    Ok((r * cos_h, r * sin_h))
}

/// Converts correlates to XYZ under `env`.
pub(crate) fn to_xyz(spec: &PartialSpecification, env: &Environment) -> AppearanceResult<Vec3> {
    let j = resolve_lightness(spec, env)?;
    let h = resolve_hue(spec)?;
    let c = resolve_chroma(spec, j, env)?;

    if j == 0.0 {
        if c == 0.0 {
            return Ok(Vec3::ZERO);
        }
        return Err(AppearanceError::domain(
            "J",
            j,
            "non-zero chroma requires positive lightness",
        ));
    }

    let p = env.parameters;
    let surround = env.conditions.surround;

    let t = (c / ((j / 100.0).sqrt() * chroma_background_term(p.n))).powf(1.0 / 0.9);
    let achromatic = env.a_w * (j / 100.0).powf(1.0 / (surround.c * p.z));
    let (a, b) = opponents(t, h, achromatic, env)?;

    let p2 = achromatic / p.n_bb + ACHROMATIC_OFFSET;
    let rgb_a = Vec3::new(
        460.0 * p2 + 451.0 * a + 288.0 * b,
        460.0 * p2 - 891.0 * a - 261.0 * b,
        460.0 * p2 - 220.0 * a - 6300.0 * b,
    ) / 1403.0;

    unadapt(rgb_a, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Correlate, Surround, ViewingConditions};
    use approx::assert_relative_eq;

    fn env() -> Environment {
        let cond = ViewingConditions::new(318.31, 20.0, Surround::Average).unwrap();
        Environment::new(Vec3::new(95.05, 100.0, 108.88), &cond).unwrap()
    }

    fn assert_xyz_eq(a: Vec3, b: Vec3, tol: f64) {
        for i in 0..3 {
            assert_relative_eq!(a[i], b[i], max_relative = tol);
        }
    }

    #[test]
    fn brightness_inverts() {
        let env = env();
        let q = brightness(41.73, 0.69, env.a_w, env.parameters.f_l);
        assert_relative_eq!(lightness_from_brightness(q, &env), 41.73, max_relative = 1e-12);
    }

    #[test]
    fn every_correlate_group_member_works() {
        let env = env();
        let xyz = Vec3::new(19.31, 23.93, 10.14);
        let spec = env.forward(xyz).unwrap();

        let combos = [
            [Correlate::Lightness, Correlate::Chroma, Correlate::HueAngle],
            [Correlate::Brightness, Correlate::Colourfulness, Correlate::HueQuadrature],
            [Correlate::Lightness, Correlate::Saturation, Correlate::HueQuadrature],
            [Correlate::Brightness, Correlate::Saturation, Correlate::HueAngle],
        ];
        for combo in combos {
            let partial = combo
                .iter()
                .fold(PartialSpecification::default(), |p, &c| p.with(c, spec.get(c)));
            let back = to_xyz(&partial, &env).unwrap();
            assert_xyz_eq(back, xyz, 1e-9);
        }
    }

    #[test]
    fn missing_groups_are_reported() {
        let env = env();
        let jc = PartialSpecification::default()
            .with(Correlate::Lightness, 50.0)
            .with(Correlate::Chroma, 10.0);
        assert_eq!(to_xyz(&jc, &env), Err(AppearanceError::MissingCorrelate("h or H")));

        let jh = PartialSpecification::default()
            .with(Correlate::Lightness, 50.0)
            .with(Correlate::HueAngle, 10.0);
        assert_eq!(to_xyz(&jh, &env), Err(AppearanceError::MissingCorrelate("C, M or s")));

        let ch = PartialSpecification::default()
            .with(Correlate::Chroma, 5.0)
            .with(Correlate::HueAngle, 10.0);
        assert_eq!(to_xyz(&ch, &env), Err(AppearanceError::MissingCorrelate("J or Q")));
    }

    #[test]
    fn zero_chroma_ignores_hue() {
        let env = env();
        let a = to_xyz(&PartialSpecification::jch(50.0, 0.0, 10.0), &env).unwrap();
        let b = to_xyz(&PartialSpecification::jch(50.0, 0.0, 250.0), &env).unwrap();
        assert_eq!(a, b);
        assert!(a.is_finite());
    }

    #[test]
    fn black() {
        let env = env();
        assert_eq!(to_xyz(&PartialSpecification::jch(0.0, 0.0, 0.0), &env), Ok(Vec3::ZERO));

        let err = to_xyz(&PartialSpecification::jch(0.0, 5.0, 0.0), &env).unwrap_err();
        assert!(matches!(err, AppearanceError::Domain { quantity: "J", .. }));
    }

    #[test]
    fn negative_correlates_are_rejected() {
        let env = env();
        assert!(to_xyz(&PartialSpecification::jch(-1.0, 5.0, 0.0), &env).is_err());
        assert!(to_xyz(&PartialSpecification::jch(50.0, -5.0, 0.0), &env).is_err());
        assert!(to_xyz(&PartialSpecification::jch(50.0, 5.0, f64::NAN), &env).is_err());
    }

    #[test]
    fn unrealisable_chroma_is_rejected() {
        // Very high chroma toward blue drives the opponent solve past its pole.
        let err = to_xyz(&PartialSpecification::jch(10.0, 1e6, 250.0), &env()).unwrap_err();
        assert!(matches!(err, AppearanceError::Domain { .. }));
    }
}
