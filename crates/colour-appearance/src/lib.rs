//! # colour-appearance
//!
//! Colour appearance models.
//!
//! A colour appearance model predicts how a stimulus *looks* under given
//! viewing conditions: its lightness, chroma, hue, brightness,
//! colourfulness and saturation. This crate implements CIECAM02 in both
//! directions:
//!
//! - [`xyz_to_ciecam02`] - tristimulus values to perceptual correlates
//! - [`ciecam02_to_xyz`] - correlates back to tristimulus values
//!
//! # Architecture
//!
//! ```text
//!   XYZ ──► adaptation ──► correlates ──► Ciecam02Specification
//!            (CAT02, D,      (A, J, Q, C,
//!             HPE, F_L)       M, s, h, H)
//!              ▲                  │
//!              └──── Environment ─┘  (n, F_L, N_bb, N_cb, z, D, A_w)
//! ```
//!
//! The [`Environment`] bakes everything that depends only on the white
//! and the viewing conditions. Both directions run from the same baked
//! values, so they cannot drift apart.
//!
//! # Quick Start
//!
//! ```rust
//! use colour_appearance::{ciecam02_to_xyz, xyz_to_ciecam02, Surround, ViewingConditions};
//! use colour_math::Vec3;
//!
//! let xyz = Vec3::new(19.01, 20.00, 21.78);
//! let white = Vec3::new(95.05, 100.00, 108.88);
//! let conditions = ViewingConditions::new(318.31, 20.0, Surround::Average.factors()).unwrap();
//!
//! let spec = xyz_to_ciecam02(xyz, white, &conditions).unwrap();
//! assert!((spec.lightness - 41.731).abs() < 1e-3);
//!
//! let back = ciecam02_to_xyz(spec, white, &conditions).unwrap();
//! assert!((back.y - 20.0).abs() < 1e-6);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`trace` per call, `debug` for fallbacks); no
//! subscriber is installed here.
//!
//! # Dependencies
//!
//! - [`colour-math`] - Vec3/Mat3 and the CAT02/HPE matrices
//! - [`rayon`] - batch evaluation
//! - [`serde`] - (de)serialisable viewing conditions and specifications

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ciecam02;

pub use error::{AppearanceError, AppearanceResult, ParseError};
pub use ciecam02::{
    ciecam02_to_xyz, ciecam02_to_xyz_batch, derive_parameters, hue_angle, hue_quadrature,
    xyz_to_ciecam02, xyz_to_ciecam02_batch, Ciecam02Specification, Correlate, Environment,
    InductionFactors, PartialSpecification, Surround, ViewingConditions, ViewingParameters,
};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ciecam02_to_xyz, xyz_to_ciecam02, AppearanceError, AppearanceResult,
        Ciecam02Specification, Correlate, Environment, PartialSpecification, Surround,
        ViewingConditions,
    };
    pub use colour_math::Vec3;
}
