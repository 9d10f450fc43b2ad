//! Error types for appearance model evaluation.
//!
//! Two failure classes exist:
//! - [`AppearanceError::Domain`] - an input lies outside the region where
//!   the model's equations are defined (non-positive luminance, negative
//!   radicands, vanishing denominators)
//! - [`AppearanceError::MissingCorrelate`] - a reverse call did not carry
//!   enough correlates to pin down a colour
//!
//! The achromatic fallback of the reverse model (zero chroma, undefined
//! hue) is a policy, not an error, and never surfaces here.
//!
//! [`ParseError`] covers the `FromStr` impls of the name-keyed enums.

use thiserror::Error;

/// Appearance model error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppearanceError {
    /// Input outside the mathematically valid range.
    #[error("{quantity} = {value} is outside the model domain: {reason}")]
    Domain {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Offending value.
        value: f64,
        /// Which precondition failed.
        reason: &'static str,
    },

    /// A reverse call lacks a required correlate group.
    #[error("missing correlate: one of {0} is required")]
    MissingCorrelate(&'static str),
}

impl AppearanceError {
    /// Shorthand for a [`AppearanceError::Domain`] error.
    pub(crate) fn domain(quantity: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Domain {
            quantity,
            value,
            reason,
        }
    }
}

/// Failure to parse a preset or correlate name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a surround preset name.
    #[error("unknown surround: {0}")]
    Surround(String),

    /// Not a correlate symbol.
    #[error("unknown correlate: {0}")]
    Correlate(String),
}

/// Result type for appearance model operations.
pub type AppearanceResult<T> = Result<T, AppearanceError>;
