//! # colour-primaries
//!
//! Colour primaries, white points, and RGB colourspace definitions.
//!
//! This crate derives the matrices that convert between RGB and CIE XYZ
//! from the chromaticity coordinates of a colourspace's primaries and
//! white point, and bundles them with transfer functions into
//! [`RgbColourspace`] values.
//!
//! # Construction, not globals
//!
//! Colourspaces are *built* by explicit functions ([`c_log`], [`srgb`]) that
//! derive their matrices on the spot. Call them once at startup and pass the
//! result by reference:
//!
//! ```rust
//! use colour_primaries::c_log;
//! use colour_math::Vec3;
//!
//! let space = c_log().unwrap();
//! let xyz = space.rgb_to_xyz(Vec3::new(0.5, 0.4, 0.3));
//! let back = space.xyz_to_rgb(xyz);
//! assert!((back.x - 0.5).abs() < 1e-6);
//! ```
//!
//! # Used By
//!
//! - `colour-appearance` - supplying XYZ to the appearance models
//! - `colour-tests` - integration tests

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colourspace;
mod error;

pub use colourspace::{c_log, srgb, RgbColourspace};
pub use error::{PrimariesError, PrimariesResult};

use colour_math::{Mat3, Vec3};

/// RGB colourspace primaries definition.
///
/// Defines a colourspace by its three primary colours (R, G, B) and white
/// point, all specified as CIE xy chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use colour_primaries::Primaries;
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: (0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Colourspace name
    pub name: &'static str,
}

impl Primaries {
    /// Builds primaries from a 3x2 chromaticity table (rows R, G, B).
    pub const fn from_table(table: [[f64; 2]; 3], w: (f64, f64), name: &'static str) -> Self {
        Self {
            r: (table[0][0], table[0][1]),
            g: (table[1][0], table[1][1]),
            b: (table[2][0], table[2][1]),
            w,
            name,
        }
    }

    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: (f64, f64) = (0.34567, 0.35850);

// ============================================================================
// Standard Colourspace Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Canon C-Log primaries.
///
/// Canon publishes only the curve; the gamut is assumed to be Rec.709
/// with a D65 white.
pub const C_LOG: Primaries = Primaries {
    name: "C-Log",
    ..SRGB
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz((x, y): (f64, f64)) -> Vec3 {
    if y.abs() < 1e-12 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the normalised primary matrix (RGB to XYZ) for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for scaling factors so RGB (1, 1, 1) maps to the white point
/// 3. Multiply primaries by scaling factors
///
/// # Errors
///
/// [`PrimariesError::Singular`] when the primaries are colinear.
///
/// # Example
///
/// ```rust
/// use colour_primaries::{SRGB, normalised_primary_matrix};
/// use colour_math::Vec3;
///
/// let m = normalised_primary_matrix(&SRGB).unwrap();
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
pub fn normalised_primary_matrix(primaries: &Primaries) -> PrimariesResult<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r);
    let g_xyz = xy_to_xyz(primaries.g);
    let b_xyz = xy_to_xyz(primaries.b);

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let m_inv = m.inverse().ok_or(PrimariesError::Singular {
        name: primaries.name,
    })?;

    // Solve M * S = W
    let s = m_inv * primaries.white_xyz();

    Ok(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Computes the normalised primary matrix together with its inverse.
///
/// Returns `(rgb_to_xyz, xyz_to_rgb)`.
pub fn primary_matrices(primaries: &Primaries) -> PrimariesResult<(Mat3, Mat3)> {
    let to_xyz = normalised_primary_matrix(primaries)?;
    let from_xyz = to_xyz.inverse().ok_or(PrimariesError::Singular {
        name: primaries.name,
    })?;
    Ok((to_xyz, from_xyz))
}
