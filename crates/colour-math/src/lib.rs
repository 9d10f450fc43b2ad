//! # colour-math
//!
//! Math primitives for colour science.
//!
//! This crate provides the linear algebra the rest of the workspace is
//! built on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ and cone-response transforms
//! - [`Vec3`] - 3-component vectors for XYZ/RGB triplets
//! - Cone-response matrices ([`CAT02`], [`HPE`]) and standard illuminants
//! - [`first_order_colour_fit`] - least-squares 3x3 colour fitting
//!
//! # Design
//!
//! All values are `f64`: appearance models chain several power laws and
//! their inverses, and single precision loses the round trip.
//!
//! Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use colour_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Used By
//!
//! - `colour-primaries` - normalised primary matrices
//! - `colour-appearance` - CIECAM02 cone-response stages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod cone;
mod fit;

pub use mat3::*;
pub use vec3::*;
pub use cone::*;
pub use fit::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
