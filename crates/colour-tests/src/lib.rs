//! Integration tests for the colour crates.
//!
//! Reference cases live in `fixtures/` as JSON records keyed by case id.
//! The loaders here are public so benches and downstream tools can reuse
//! the same cases.

use std::collections::HashMap;

use colour_appearance::{Ciecam02Specification, ViewingConditions};
use colour_math::Vec3;
use serde::Deserialize;

#[cfg(test)]
mod ciecam02;
#[cfg(test)]
mod colourspace;

/// One CIECAM02 reference case.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCase {
    /// Stimulus tristimulus values.
    #[serde(rename = "XYZ")]
    pub xyz: [f64; 3],
    /// Reference white.
    #[serde(rename = "XYZ_w")]
    pub xyz_w: [f64; 3],
    /// Viewing conditions.
    pub conditions: ViewingConditions,
    /// Expected correlates.
    pub expected: Ciecam02Specification,
}

impl FixtureCase {
    /// Stimulus as a vector.
    pub fn stimulus(&self) -> Vec3 {
        Vec3::from(self.xyz)
    }

    /// White as a vector.
    pub fn white(&self) -> Vec3 {
        Vec3::from(self.xyz_w)
    }
}

/// Loads the bundled CIECAM02 cases.
pub fn ciecam02_cases() -> Result<HashMap<String, FixtureCase>, serde_json::Error> {
    serde_json::from_str(include_str!("../fixtures/ciecam02.json"))
}
