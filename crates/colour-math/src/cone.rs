//! Cone-response transforms and standard illuminants.
//!
//! Colour appearance models do their chromatic adaptation and their
//! perceptual compression in different cone-like spaces:
//!
//! - [`CAT02`] - a "sharpened" space in which von Kries scaling works best
//! - [`HPE`] - Hunt-Pointer-Estevez, closer to physiological cone
//!   fundamentals, where the post-adaptation compression is applied
//!
//! Inverses are stored at full double precision so that forward and
//! reverse model passes agree to well below any fixture tolerance.
//!
//! # Usage
//!
//! ```rust
//! use colour_math::{CAT02, CAT02_INV, D65, Vec3};
//!
//! let white = D65 * 100.0;
//! let cone = CAT02 * white;
//! let back = CAT02_INV * cone;
//! assert!((back.z - white.z).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K).
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant A (tungsten, ~2856K).
pub const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

/// CIE Standard Illuminant E (equal energy).
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// ============================================================================
// Cone-Response Matrices
// ============================================================================

/// CAT02 chromatic adaptation matrix (CIE 159:2004).
///
/// Maps XYZ to the sharpened RGB space where CIECAM02 applies its
/// degree-of-adaptation scaling.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Inverse CAT02 matrix.
pub const CAT02_INV: Mat3 = Mat3::from_rows([
    [1.0961238208355142, -0.27886900021828726, 0.1827451793827731],
    [0.45436904197535916, 0.4735331543074117, 0.07209780371722913],
    [-0.009627608738429355, -0.005698031216113421, 1.0153256399545427],
]);

/// Hunt-Pointer-Estevez matrix, normalised to equal-energy illuminant E.
pub const HPE: Mat3 = Mat3::from_rows([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.00000, 0.00000, 1.00000],
]);

/// Inverse Hunt-Pointer-Estevez matrix.
pub const HPE_INV: Mat3 = Mat3::from_rows([
    [1.9101968340520348, -1.1121238927878747, 0.20190795676749937],
    [0.37095008824868864, 0.6290542573926132, -8.055142184358517e-06],
    [0.0, 0.0, 1.0],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_identity(m: Mat3) {
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.m[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cat02_inverse() {
        assert_identity(CAT02 * CAT02_INV);
    }

    #[test]
    fn test_hpe_inverse() {
        assert_identity(HPE * HPE_INV);
    }

    #[test]
    fn test_rows_preserve_equal_energy() {
        // Both spaces are normalised so that E maps to (1, 1, 1).
        let cat = CAT02 * E;
        let hpe = HPE * E;
        for i in 0..3 {
            assert_abs_diff_eq!(cat[i], 1.0, epsilon = 1e-4);
            assert_abs_diff_eq!(hpe[i], 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_illuminants() {
        assert_eq!(D65.y, 1.0);
        assert_eq!(D50.y, 1.0);
        assert_eq!(A.y, 1.0);
        assert_eq!(E.y, 1.0);
    }
}
