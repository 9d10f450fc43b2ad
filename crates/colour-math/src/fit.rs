//! First-order colour fitting.
//!
//! Finds the 3x3 matrix that best maps one set of colour samples onto
//! another in the least-squares sense, e.g. to match two photographed
//! colour rendition charts.

use crate::{Mat3, Vec3};

/// Computes the first-order colour fit matrix from `m1` onto `m2`.
///
/// Returns the matrix `M` minimising `sum |M * m1[i] - m2[i]|^2`, solved
/// through the normal equations.
///
/// Returns `None` when the slices differ in length, hold fewer than three
/// samples, or the samples do not span three dimensions.
///
/// # Example
///
/// ```rust
/// use colour_math::{first_order_colour_fit, Mat3, Vec3};
///
/// let gain = Mat3::diagonal(2.0, 0.5, 1.0);
/// let m1 = [
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
///     Vec3::new(0.2, 0.4, 0.6),
/// ];
/// let m2: Vec<Vec3> = m1.iter().map(|&v| gain * v).collect();
///
/// let fit = first_order_colour_fit(&m1, &m2).unwrap();
/// assert!((fit.m[0][0] - 2.0).abs() < 1e-9);
/// ```
pub fn first_order_colour_fit(m1: &[Vec3], m2: &[Vec3]) -> Option<Mat3> {
    if m1.len() != m2.len() || m1.len() < 3 {
        return None;
    }

    let (ata, atb) = m1
        .iter()
        .zip(m2)
        .fold((Mat3::ZERO, Mat3::ZERO), |(ata, atb), (&a, &b)| {
            (ata + Mat3::outer(a, a), atb + Mat3::outer(a, b))
        });

    let solution = ata.inverse()? * atb;
    Some(solution.transpose())
}
