//! Appearance specifications: the model's output record and the partial
//! record the reverse model accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A CIECAM02 perceptual correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Correlate {
    /// Lightness J.
    #[serde(rename = "J")]
    Lightness,
    /// Chroma C.
    #[serde(rename = "C")]
    Chroma,
    /// Hue angle h in degrees.
    #[serde(rename = "h")]
    HueAngle,
    /// Saturation s.
    #[serde(rename = "s")]
    Saturation,
    /// Brightness Q.
    #[serde(rename = "Q")]
    Brightness,
    /// Colourfulness M.
    #[serde(rename = "M")]
    Colourfulness,
    /// Hue quadrature H.
    #[serde(rename = "H")]
    HueQuadrature,
}

impl Correlate {
    /// All correlates, in record order.
    pub const ALL: [Correlate; 7] = [
        Self::Lightness,
        Self::Chroma,
        Self::HueAngle,
        Self::Saturation,
        Self::Brightness,
        Self::Colourfulness,
        Self::HueQuadrature,
    ];

    /// Conventional symbol (`J`, `C`, `h`, `s`, `Q`, `M`, `H`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lightness => "J",
            Self::Chroma => "C",
            Self::HueAngle => "h",
            Self::Saturation => "s",
            Self::Brightness => "Q",
            Self::Colourfulness => "M",
            Self::HueQuadrature => "H",
        }
    }
}

impl fmt::Display for Correlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Correlate {
    type Err = ParseError;

    /// Parses a symbol. Symbols are case-sensitive (`h` and `H` differ);
    /// `S` is accepted for saturation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "J" => Ok(Self::Lightness),
            "C" => Ok(Self::Chroma),
            "h" => Ok(Self::HueAngle),
            "s" | "S" => Ok(Self::Saturation),
            "Q" => Ok(Self::Brightness),
            "M" => Ok(Self::Colourfulness),
            "H" => Ok(Self::HueQuadrature),
            _ => Err(ParseError::Correlate(s.to_owned())),
        }
    }
}

/// Full set of CIECAM02 correlates for one stimulus.
///
/// Produced by the forward model. Hue angle is in [0, 360) and hue
/// quadrature in [0, 400).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ciecam02Specification {
    /// Lightness J.
    #[serde(rename = "J")]
    pub lightness: f64,
    /// Chroma C.
    #[serde(rename = "C")]
    pub chroma: f64,
    /// Hue angle h in degrees.
    #[serde(rename = "h")]
    pub hue_angle: f64,
    /// Saturation s.
    #[serde(rename = "s")]
    pub saturation: f64,
    /// Brightness Q.
    #[serde(rename = "Q")]
    pub brightness: f64,
    /// Colourfulness M.
    #[serde(rename = "M")]
    pub colourfulness: f64,
    /// Hue quadrature H.
    #[serde(rename = "H")]
    pub hue_quadrature: f64,
}

impl Ciecam02Specification {
    /// Looks up a correlate by kind.
    ///
    /// ```rust
    /// use colour_appearance::{Ciecam02Specification, Correlate};
    ///
    /// # let spec = Ciecam02Specification {
    /// #     lightness: 41.7, chroma: 0.1, hue_angle: 219.0, saturation: 2.4,
    /// #     brightness: 195.4, colourfulness: 0.11, hue_quadrature: 278.1,
    /// # };
    /// let j = spec.get("J".parse::<Correlate>().unwrap());
    /// assert_eq!(j, spec.lightness);
    /// ```
    pub const fn get(&self, correlate: Correlate) -> f64 {
        match correlate {
            Correlate::Lightness => self.lightness,
            Correlate::Chroma => self.chroma,
            Correlate::HueAngle => self.hue_angle,
            Correlate::Saturation => self.saturation,
            Correlate::Brightness => self.brightness,
            Correlate::Colourfulness => self.colourfulness,
            Correlate::HueQuadrature => self.hue_quadrature,
        }
    }
}

/// Correlates supplied to the reverse model.
///
/// The reverse model needs one of J/Q, one of C/M/s and one of h/H.
/// When several of a group are present the first listed wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSpecification {
    /// Lightness J.
    #[serde(rename = "J", default)]
    pub lightness: Option<f64>,
    /// Chroma C.
    #[serde(rename = "C", default)]
    pub chroma: Option<f64>,
    /// Hue angle h in degrees.
    #[serde(rename = "h", default)]
    pub hue_angle: Option<f64>,
    /// Saturation s.
    #[serde(rename = "s", default)]
    pub saturation: Option<f64>,
    /// Brightness Q.
    #[serde(rename = "Q", default)]
    pub brightness: Option<f64>,
    /// Colourfulness M.
    #[serde(rename = "M", default)]
    pub colourfulness: Option<f64>,
    /// Hue quadrature H.
    #[serde(rename = "H", default)]
    pub hue_quadrature: Option<f64>,
}

impl PartialSpecification {
    /// The common (J, C, h) triple.
    pub const fn jch(lightness: f64, chroma: f64, hue_angle: f64) -> Self {
        Self {
            lightness: Some(lightness),
            chroma: Some(chroma),
            hue_angle: Some(hue_angle),
            saturation: None,
            brightness: None,
            colourfulness: None,
            hue_quadrature: None,
        }
    }

    /// Returns a copy with `correlate` set to `value`.
    #[must_use]
    pub fn with(mut self, correlate: Correlate, value: f64) -> Self {
        let slot = match correlate {
            Correlate::Lightness => &mut self.lightness,
            Correlate::Chroma => &mut self.chroma,
            Correlate::HueAngle => &mut self.hue_angle,
            Correlate::Saturation => &mut self.saturation,
            Correlate::Brightness => &mut self.brightness,
            Correlate::Colourfulness => &mut self.colourfulness,
            Correlate::HueQuadrature => &mut self.hue_quadrature,
        };
        *slot = Some(value);
        self
    }

    /// Looks up a correlate by kind.
    pub const fn get(&self, correlate: Correlate) -> Option<f64> {
        match correlate {
            Correlate::Lightness => self.lightness,
            Correlate::Chroma => self.chroma,
            Correlate::HueAngle => self.hue_angle,
            Correlate::Saturation => self.saturation,
            Correlate::Brightness => self.brightness,
            Correlate::Colourfulness => self.colourfulness,
            Correlate::HueQuadrature => self.hue_quadrature,
        }
    }
}

impl From<Ciecam02Specification> for PartialSpecification {
    fn from(s: Ciecam02Specification) -> Self {
        Self {
            lightness: Some(s.lightness),
            chroma: Some(s.chroma),
            hue_angle: Some(s.hue_angle),
            saturation: Some(s.saturation),
            brightness: Some(s.brightness),
            colourfulness: Some(s.colourfulness),
            hue_quadrature: Some(s.hue_quadrature),
        }
    }
}

impl From<&Ciecam02Specification> for PartialSpecification {
    fn from(s: &Ciecam02Specification) -> Self {
        Self::from(*s)
    }
}
