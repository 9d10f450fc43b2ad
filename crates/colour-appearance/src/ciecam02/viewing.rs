//! Viewing conditions and the parameters derived from them.
//!
//! A [`ViewingConditions`] bundle is what the caller knows about the
//! scene: adapting luminance, background, surround. [`derive_parameters`]
//! turns it into the constants both model directions share.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AppearanceError, AppearanceResult, ParseError};

/// Surround induction factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InductionFactors {
    /// Maximum degree of adaptation.
    #[serde(rename = "F")]
    pub f: f64,
    /// Exponential non-linearity (impact of surround).
    pub c: f64,
    /// Chromatic induction factor.
    #[serde(rename = "N_c")]
    pub n_c: f64,
}

impl InductionFactors {
    /// Creates induction factors from `(F, c, N_c)`.
    #[inline]
    pub const fn new(f: f64, c: f64, n_c: f64) -> Self {
        Self { f, c, n_c }
    }
}

/// Standard surround presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surround {
    /// Surface colours, average surround.
    Average,
    /// Television and CRT displays in dim rooms.
    Dim,
    /// Projected film in a darkened room.
    Dark,
    /// Cut-sheet transparencies on a viewing box (CIE 131).
    CutSheet,
}

impl Surround {
    /// All presets.
    pub const ALL: [Surround; 4] = [Self::Average, Self::Dim, Self::Dark, Self::CutSheet];

    /// Induction factors for this surround.
    pub const fn factors(self) -> InductionFactors {
        match self {
            Self::Average => InductionFactors::new(1.0, 0.69, 1.0),
            Self::Dim => InductionFactors::new(0.9, 0.59, 0.9),
            Self::Dark => InductionFactors::new(0.8, 0.525, 0.8),
            Self::CutSheet => InductionFactors::new(0.9, 0.41, 0.9),
        }
    }

    /// Preset name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Dim => "dim",
            Self::Dark => "dark",
            Self::CutSheet => "cut-sheet",
        }
    }
}

impl fmt::Display for Surround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Surround> for InductionFactors {
    fn from(s: Surround) -> Self {
        s.factors()
    }
}

impl FromStr for Surround {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(Self::Average),
            "dim" => Ok(Self::Dim),
            "dark" => Ok(Self::Dark),
            "cut-sheet" | "cutsheet" | "cut_sheet" => Ok(Self::CutSheet),
            _ => Err(ParseError::Surround(s.to_owned())),
        }
    }
}

/// Everything the model needs to know about how a stimulus is viewed.
///
/// Immutable once built; [`ViewingConditions::new`] rejects values the
/// model cannot evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewingConditions {
    /// Adapting field luminance L_A in cd/m2.
    #[serde(rename = "L_A")]
    pub l_a: f64,
    /// Relative luminance of the background Y_b.
    #[serde(rename = "Y_b")]
    pub y_b: f64,
    /// Surround induction factors.
    pub surround: InductionFactors,
    /// Assume complete adaptation (D = 1).
    #[serde(default)]
    pub discount_illuminant: bool,
}

impl ViewingConditions {
    /// Creates validated viewing conditions with partial adaptation.
    pub fn new(
        l_a: f64,
        y_b: f64,
        surround: impl Into<InductionFactors>,
    ) -> AppearanceResult<Self> {
        let conditions = Self {
            l_a,
            y_b,
            surround: surround.into(),
            discount_illuminant: false,
        };
        conditions.validate()?;
        Ok(conditions)
    }

    /// Returns a copy with illuminant discounting switched on or off.
    #[must_use]
    pub fn with_discount_illuminant(self, discount: bool) -> Self {
        Self {
            discount_illuminant: discount,
            ..self
        }
    }

    /// Checks every field against the model's domain.
    ///
    /// Fields are public (and deserialisable), so the model re-checks
    /// before each evaluation.
    pub fn validate(&self) -> AppearanceResult<()> {
        positive("L_A", self.l_a)?;
        positive("Y_b", self.y_b)?;
        positive("F", self.surround.f)?;
        positive("c", self.surround.c)?;
        positive("N_c", self.surround.n_c)?;
        Ok(())
    }
}

/// Constants shared by the forward and reverse model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewingParameters {
    /// Background induction factor n = Y_b / Y_w.
    pub n: f64,
    /// Luminance-level adaptation factor F_L.
    #[serde(rename = "F_L")]
    pub f_l: f64,
    /// Brightness background induction factor N_bb.
    #[serde(rename = "N_bb")]
    pub n_bb: f64,
    /// Chromatic background induction factor N_cb.
    #[serde(rename = "N_cb")]
    pub n_cb: f64,
    /// Base exponential non-linearity z.
    pub z: f64,
}

/// Derives {n, F_L, N_bb, N_cb, z} from background, white and adapting
/// luminances.
///
/// Pure: identical inputs give bit-identical outputs.
///
/// # Example
///
/// ```rust
/// use colour_appearance::derive_parameters;
///
/// let p = derive_parameters(20.0, 100.0, 318.31).unwrap();
/// assert!((p.n - 0.2).abs() < 1e-12);
/// assert!((p.z - 1.927213595499958).abs() < 1e-12);
/// ```
pub fn derive_parameters(y_b: f64, y_w: f64, l_a: f64) -> AppearanceResult<ViewingParameters> {
    positive("Y_b", y_b)?;
    positive("Y_w", y_w)?;

    let n = y_b / y_w;
    let f_l = luminance_level_adaptation_factor(l_a)?;
    let n_bb = 0.725 * n.powf(-0.2);
    let z = 1.48 + n.sqrt();

    Ok(ViewingParameters {
        n,
        f_l,
        n_bb,
        n_cb: n_bb,
        z,
    })
}

/// Luminance-level adaptation factor F_L.
///
/// ```text
/// k   = 1 / (5 L_A + 1)
/// F_L = 0.2 k^4 (5 L_A) + 0.1 (1 - k^4)^2 (5 L_A)^(1/3)
/// ```
pub fn luminance_level_adaptation_factor(l_a: f64) -> AppearanceResult<f64> {
    positive("L_A", l_a)?;

    let l_a5 = 5.0 * l_a;
    let k = 1.0 / (l_a5 + 1.0);
    let k4 = k.powi(4);

    Ok(0.2 * k4 * l_a5 + 0.1 * (1.0 - k4).powi(2) * l_a5.cbrt())
}

/// Rejects non-finite and non-positive values.
pub(crate) fn positive(quantity: &'static str, value: f64) -> AppearanceResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppearanceError::domain(
            quantity,
            value,
            "must be finite and positive",
        ))
    }
}
