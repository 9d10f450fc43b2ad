//! # colour-transfer
//!
//! Transfer functions for encoding and decoding RGB values.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage, display, or transmission. Every function here is a scalar
//! `f64 -> f64` map; colourspaces lift them onto triplets with
//! `colour_math::Vec3::map`.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//! | [`bt1886`] | HDTV reference display | [0, 1] -> cd/m2 |
//! | [`c_log`] | Canon Log (original, C300) | Scene-referred |
//!
//! # Usage
//!
//! ```rust
//! use colour_transfer::{c_log, srgb};
//!
//! let encoded = c_log::encode(0.18);
//! let linear = c_log::decode(encoded);
//! assert!((linear - 0.18).abs() < 1e-5);
//!
//! let display = srgb::oetf(0.5);
//! ```
//!
//! # Used By
//!
//! - `colour-primaries` - RGB colourspace definitions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
pub mod bt1886;
pub mod c_log;

/// A scalar transfer function.
pub type TransferFn = fn(f64) -> f64;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
pub use bt1886::{eotf as bt1886_eotf, oetf as bt1886_oetf};
pub use c_log::{decode as c_log_decode, encode as c_log_encode};
