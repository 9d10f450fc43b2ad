//! Canon Log (original C-Log) transfer function.
//!
//! The first Canon Log curve, introduced with the C300. It is a single
//! logarithmic segment with no linear toe; the published decode is a
//! fitted exponential, so encode and decode agree to about 1e-5 rather
//! than to machine precision.
//!
//! Reference: Canon-Log Transfer Characteristic (2012)

/// Encode slope applied to the base-10 log.
const LOG_SLOPE: f64 = 0.529136;
/// Linear scale inside the log.
const LIN_SCALE: f64 = 10.1596;
/// Encoded value of linear 0.
const OFFSET: f64 = 0.0730597;

/// Decode scale.
const EXP_SCALE: f64 = 0.0716226;
/// Decode offset.
const EXP_OFFSET: f64 = 1.37427;
/// Decode exponent rate.
const EXP_RATE: f64 = 4.35159;

/// Encodes linear scene light to C-Log.
///
/// # Formula
///
/// ```text
/// V = 0.529136 * log10(10.1596 * L + 1) + 0.0730597
/// ```
///
/// Inputs at or below `-1 / 10.1596` have no logarithm and return NaN.
#[inline]
pub fn encode(linear: f64) -> f64 {
    LOG_SLOPE * (LIN_SCALE * linear + 1.0).log10() + OFFSET
}

/// Decodes C-Log to linear scene light.
///
/// # Formula
///
/// ```text
/// L = -0.0716226 * (1.37427 - e^(4.35159 * V))
/// ```
#[inline]
pub fn decode(log: f64) -> f64 {
    -EXP_SCALE * (EXP_OFFSET - (EXP_RATE * log).exp())
}
