//! CIECAM02 colour appearance model (CIE 159:2004).
//!
//! # Stages
//!
//! - [`viewing`] - viewing conditions, surround presets, derived parameters
//! - [`adaptation`] - CAT02 adaptation and the post-adaptation compression
//! - [`correlates`] - the perceptual correlates of the forward model
//! - [`hue`] - hue angle and hue quadrature
//!
//! The free functions below build an [`Environment`] per call. Callers
//! evaluating many stimuli under one white should build it once and use
//! [`Environment::forward`] / [`Environment::reverse`] directly, or the
//! batch helpers.

pub mod adaptation;
pub mod correlates;
pub mod hue;
pub mod viewing;

mod environment;
mod reverse;
mod specification;

pub use environment::Environment;
pub use hue::{hue_angle, hue_quadrature};
pub use specification::{Ciecam02Specification, Correlate, PartialSpecification};
pub use viewing::{
    derive_parameters, InductionFactors, Surround, ViewingConditions, ViewingParameters,
};

use colour_math::Vec3;
use rayon::prelude::*;

use crate::AppearanceResult;

/// Computes the CIECAM02 correlates of `xyz` seen against white `xyz_w`.
///
/// XYZ and XYZ_w share one scale (typically Y_w = 100).
///
/// # Errors
///
/// [`AppearanceError::Domain`](crate::AppearanceError::Domain) for invalid
/// conditions, white or stimulus.
///
/// # Example
///
/// ```rust
/// use colour_appearance::{xyz_to_ciecam02, Surround, ViewingConditions};
/// use colour_math::Vec3;
///
/// let conditions = ViewingConditions::new(318.31, 20.0, Surround::Average).unwrap();
/// let spec = xyz_to_ciecam02(
///     Vec3::new(19.01, 20.00, 21.78),
///     Vec3::new(95.05, 100.00, 108.88),
///     &conditions,
/// )
/// .unwrap();
///
/// assert!((spec.hue_angle - 219.048).abs() < 1e-3);
/// ```
pub fn xyz_to_ciecam02(
    xyz: Vec3,
    xyz_w: Vec3,
    conditions: &ViewingConditions,
) -> AppearanceResult<Ciecam02Specification> {
    Environment::new(xyz_w, conditions)?.forward(xyz)
}

/// Recovers XYZ from CIECAM02 correlates.
///
/// Accepts a full [`Ciecam02Specification`] or a [`PartialSpecification`]
/// carrying one of J/Q, one of C/M/s and one of h/H.
///
/// # Errors
///
/// [`AppearanceError::MissingCorrelate`](crate::AppearanceError::MissingCorrelate)
/// when a group is absent; [`AppearanceError::Domain`](crate::AppearanceError::Domain)
/// for invalid conditions or unrealisable correlates.
pub fn ciecam02_to_xyz(
    spec: impl Into<PartialSpecification>,
    xyz_w: Vec3,
    conditions: &ViewingConditions,
) -> AppearanceResult<Vec3> {
    Environment::new(xyz_w, conditions)?.reverse(&spec.into())
}

/// Forward model over a slice, evaluated in parallel.
///
/// The environment is derived once for the whole batch. Fails with the
/// error of a failing sample if any sample fails.
pub fn xyz_to_ciecam02_batch(
    xyz: &[Vec3],
    xyz_w: Vec3,
    conditions: &ViewingConditions,
) -> AppearanceResult<Vec<Ciecam02Specification>> {
    let env = Environment::new(xyz_w, conditions)?;
    xyz.par_iter().map(|&v| env.forward(v)).collect()
}

/// Reverse model over a slice, evaluated in parallel.
///
/// See [`xyz_to_ciecam02_batch`].
pub fn ciecam02_to_xyz_batch(
    specs: &[PartialSpecification],
    xyz_w: Vec3,
    conditions: &ViewingConditions,
) -> AppearanceResult<Vec<Vec3>> {
    let env = Environment::new(xyz_w, conditions)?;
    specs.par_iter().map(|s| env.reverse(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppearanceError;
    use approx::assert_relative_eq;

    const D65: Vec3 = Vec3::new(95.05, 100.0, 108.88);
    const CASE_A: Vec3 = Vec3::new(19.01, 20.0, 21.78);

    fn average(l_a: f64, y_b: f64) -> ViewingConditions {
        ViewingConditions::new(l_a, y_b, Surround::Average).unwrap()
    }

    fn assert_spec(spec: &Ciecam02Specification, expected: [f64; 7]) {
        for (c, e) in Correlate::ALL.into_iter().zip(expected) {
            assert_relative_eq!(spec.get(c), e, max_relative = 1e-9);
        }
    }

    #[test]
    fn forward_reference_case() {
        let spec = xyz_to_ciecam02(CASE_A, D65, &average(318.31, 20.0)).unwrap();
        // J, C, h, s, Q, M, H
        assert_spec(
            &spec,
            [
                41.73109113251392,
                0.1047077571711192,
                219.04843265830374,
                2.360305373920601,
                195.3713259660767,
                0.10884217566924057,
                278.06073585666763,
            ],
        );
    }

    #[test]
    fn forward_discounted_illuminant() {
        let cond = average(318.31, 20.0).with_discount_illuminant(true);
        let spec = xyz_to_ciecam02(CASE_A, D65, &cond).unwrap();
        assert_spec(
            &spec,
            [
                41.73111604239958,
                0.02065249115520678,
                271.46730606197156,
                1.0482385969470873,
                195.37568273351135,
                0.02146796121942401,
                317.2317519894446,
            ],
        );
    }

    #[test]
    fn forward_illuminant_a_white() {
        let white = Vec3::new(98.88, 90.0, 32.03);
        let xyz = Vec3::new(19.31, 23.93, 10.14);

        let spec = xyz_to_ciecam02(xyz, white, &average(200.0, 18.0)).unwrap();
        assert_relative_eq!(spec.lightness, 48.03141006190605, max_relative = 1e-9);
        assert_relative_eq!(spec.chroma, 38.7788904680928, max_relative = 1e-9);
        assert_relative_eq!(spec.hue_quadrature, 240.88844534446713, max_relative = 1e-9);

        let spec = xyz_to_ciecam02(xyz, white, &average(20.0, 18.0)).unwrap();
        assert_relative_eq!(spec.lightness, 47.68560529398229, max_relative = 1e-9);
        assert_relative_eq!(spec.colourfulness, 29.758040424254265, max_relative = 1e-9);
        assert_relative_eq!(spec.saturation, 51.127489349185474, max_relative = 1e-9);
    }

    #[test]
    fn reverse_recovers_reference_case() {
        let cond = average(318.31, 20.0);
        let spec = xyz_to_ciecam02(CASE_A, D65, &cond).unwrap();

        let back = ciecam02_to_xyz(spec, D65, &cond).unwrap();
        for i in 0..3 {
            assert_relative_eq!(back[i], CASE_A[i], max_relative = 1e-10);
        }

        let jch = PartialSpecification::jch(spec.lightness, spec.chroma, spec.hue_angle);
        let back = ciecam02_to_xyz(jch, D65, &cond).unwrap();
        assert_relative_eq!(back.y, 20.0, max_relative = 1e-10);
    }

    #[test]
    fn lightness_is_monotonic_in_luminance() {
        let env = Environment::new(D65, &average(318.31, 20.0)).unwrap();
        let mut prev = 0.0;
        for y in [1.0, 5.0, 10.0, 20.0, 40.0, 80.0] {
            let j = env.forward(Vec3::new(0.95 * y, y, 1.09 * y)).unwrap().lightness;
            assert!(j > prev, "J({y}) = {j} <= {prev}");
            prev = j;
        }
    }

    #[test]
    fn grey_is_achromatic_when_fully_adapted() {
        let cond = average(318.31, 20.0).with_discount_illuminant(true);
        let env = Environment::new(D65, &cond).unwrap();

        for k in [0.05, 0.2, 0.5, 0.9] {
            let grey = D65 * k;
            let spec = env.forward(grey).unwrap();
            assert!(spec.chroma < 0.01, "C = {}", spec.chroma);
            assert!(spec.colourfulness < 0.01, "M = {}", spec.colourfulness);
            assert!(spec.saturation < 1.0, "s = {}", spec.saturation);

            let back = env.reverse(&PartialSpecification::jch(spec.lightness, 0.0, 0.0)).unwrap();
            assert!(back.is_finite());
            assert_relative_eq!(back.y, grey.y, max_relative = 1e-3);
        }
    }

    #[test]
    fn hue_stays_in_range() {
        let env = Environment::new(D65, &average(64.0, 20.0)).unwrap();
        for xyz in [
            Vec3::new(41.24, 21.26, 1.93),
            Vec3::new(35.76, 71.52, 11.92),
            Vec3::new(18.04, 7.22, 95.03),
            Vec3::new(59.29, 92.78, 96.96),
        ] {
            let spec = env.forward(xyz).unwrap();
            assert!((0.0..360.0).contains(&spec.hue_angle));
            assert!((0.0..400.0).contains(&spec.hue_quadrature));
        }
    }

    #[test]
    fn batch_matches_single() {
        let cond = average(318.31, 20.0);
        let samples: Vec<Vec3> = (1..=16)
            .map(|i| Vec3::new(i as f64 * 5.0, i as f64 * 5.5, i as f64 * 4.0))
            .collect();

        let specs = xyz_to_ciecam02_batch(&samples, D65, &cond).unwrap();
        for (xyz, spec) in samples.iter().zip(&specs) {
            assert_eq!(*spec, xyz_to_ciecam02(*xyz, D65, &cond).unwrap());
        }

        let partial: Vec<PartialSpecification> = specs.iter().map(Into::into).collect();
        let back = ciecam02_to_xyz_batch(&partial, D65, &cond).unwrap();
        for (a, b) in samples.iter().zip(&back) {
            assert_relative_eq!(a.y, b.y, max_relative = 1e-10);
        }
    }

    #[test]
    fn batch_fails_as_a_whole() {
        let samples = [CASE_A, Vec3::new(1.0, -1.0, 1.0), CASE_A];
        let err = xyz_to_ciecam02_batch(&samples, D65, &average(318.31, 20.0)).unwrap_err();
        assert!(matches!(err, AppearanceError::Domain { quantity: "XYZ", .. }));
    }
}
