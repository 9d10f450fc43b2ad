//! RGB colourspaces: primaries plus transfer functions.
//!
//! An [`RgbColourspace`] owns the derived RGB <-> XYZ matrices and the pair
//! of scalar transfer functions, applied per channel through
//! [`Vec3::map`].

use colour_math::{Mat3, Vec3};
use colour_transfer::{c_log as c_log_curve, srgb as srgb_curve, TransferFn};

use crate::{primary_matrices, Primaries, PrimariesResult, C_LOG, SRGB};

/// A fully derived RGB colourspace.
///
/// `encode` maps linear RGB to the colourspace's stored signal, `decode`
/// maps it back.
#[derive(Debug, Clone, Copy)]
pub struct RgbColourspace {
    /// Colourspace name.
    pub name: &'static str,
    /// Primaries and white point chromaticities.
    pub primaries: Primaries,
    /// Normalised primary matrix (linear RGB to XYZ).
    pub to_xyz: Mat3,
    /// Inverse of [`Self::to_xyz`].
    pub from_xyz: Mat3,
    /// Linear to encoded.
    pub encode: TransferFn,
    /// Encoded to linear.
    pub decode: TransferFn,
}

impl RgbColourspace {
    /// Derives a colourspace from primaries and a transfer function pair.
    pub fn new(
        primaries: Primaries,
        encode: TransferFn,
        decode: TransferFn,
    ) -> PrimariesResult<Self> {
        let (to_xyz, from_xyz) = primary_matrices(&primaries)?;
        Ok(Self {
            name: primaries.name,
            primaries,
            to_xyz,
            from_xyz,
            encode,
            decode,
        })
    }

    /// Applies the encoding function to each channel.
    #[inline]
    pub fn encode_rgb(&self, linear: Vec3) -> Vec3 {
        linear.map(self.encode)
    }

    /// Applies the decoding function to each channel.
    #[inline]
    pub fn decode_rgb(&self, encoded: Vec3) -> Vec3 {
        encoded.map(self.decode)
    }

    /// Converts encoded RGB to XYZ (Y=1 at the white point).
    #[inline]
    pub fn rgb_to_xyz(&self, encoded: Vec3) -> Vec3 {
        self.to_xyz * self.decode_rgb(encoded)
    }

    /// Converts XYZ to encoded RGB.
    #[inline]
    pub fn xyz_to_rgb(&self, xyz: Vec3) -> Vec3 {
        self.encode_rgb(self.from_xyz * xyz)
    }
}

/// Builds the Canon C-Log colourspace.
pub fn c_log() -> PrimariesResult<RgbColourspace> {
    RgbColourspace::new(C_LOG, c_log_curve::encode, c_log_curve::decode)
}

/// Builds the sRGB colourspace.
pub fn srgb() -> PrimariesResult<RgbColourspace> {
    RgbColourspace::new(SRGB, srgb_curve::oetf, srgb_curve::eotf)
}
