//! Viewing environment baked for one reference white.

use colour_math::{Vec3, CAT02};
use tracing::trace;

use super::adaptation::{adapt, adaptation_gains, degree_of_adaptation};
use super::correlates::{achromatic_response, to_appearance};
use super::reverse::to_xyz;
use super::viewing::{derive_parameters, positive};
use super::{Ciecam02Specification, PartialSpecification, ViewingConditions, ViewingParameters};
use crate::{AppearanceError, AppearanceResult};

/// Everything that depends only on the reference white and the viewing
/// conditions.
///
/// Build once, then evaluate any number of stimuli in either direction.
/// Both directions read the same derived values.
///
/// # Example
///
/// ```rust
/// use colour_appearance::{Environment, Surround, ViewingConditions};
/// use colour_math::Vec3;
///
/// let conditions = ViewingConditions::new(318.31, 20.0, Surround::Average).unwrap();
/// let env = Environment::new(Vec3::new(95.05, 100.0, 108.88), &conditions).unwrap();
///
/// let spec = env.forward(Vec3::new(19.01, 20.0, 21.78)).unwrap();
/// let xyz = env.reverse(&spec.into()).unwrap();
/// assert!((xyz.z - 21.78).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub(crate) conditions: ViewingConditions,
    pub(crate) white: Vec3,
    pub(crate) parameters: ViewingParameters,
    pub(crate) d: f64,
    pub(crate) gains: Vec3,
    pub(crate) white_response: Vec3,
    pub(crate) a_w: f64,
}

impl Environment {
    /// Derives the environment for reference white `xyz_w`.
    ///
    /// # Errors
    ///
    /// [`AppearanceError::Domain`] when the conditions are invalid, the
    /// white is not strictly positive, or the white's achromatic response
    /// vanishes.
    pub fn new(xyz_w: Vec3, conditions: &ViewingConditions) -> AppearanceResult<Self> {
        conditions.validate()?;
        if !xyz_w.is_finite() || xyz_w.min_element() <= 0.0 {
            return Err(AppearanceError::domain(
                "XYZ_w",
                xyz_w.min_element(),
                "reference white must be finite and positive",
            ));
        }

        let parameters = derive_parameters(conditions.y_b, xyz_w.y, conditions.l_a)?;
        let d = if conditions.discount_illuminant {
            1.0
        } else {
            degree_of_adaptation(conditions.surround.f, conditions.l_a)
        };

        let rgb_w = CAT02 * xyz_w;
        if rgb_w.min_element() <= 0.0 {
            return Err(AppearanceError::domain(
                "RGB_w",
                rgb_w.min_element(),
                "white cone responses must be positive",
            ));
        }

        let mut env = Self {
            conditions: *conditions,
            white: xyz_w,
            parameters,
            d,
            gains: adaptation_gains(rgb_w, xyz_w.y, d),
            white_response: Vec3::ZERO,
            a_w: 0.0,
        };
        env.white_response = adapt(xyz_w, &env);
        env.a_w = achromatic_response(env.white_response, parameters.n_bb);
        positive("A_w", env.a_w)?;

        Ok(env)
    }

    /// Viewing conditions this environment was built from.
    #[inline]
    pub fn conditions(&self) -> &ViewingConditions {
        &self.conditions
    }

    /// Reference white XYZ.
    #[inline]
    pub fn white(&self) -> Vec3 {
        self.white
    }

    /// Derived parameters {n, F_L, N_bb, N_cb, z}.
    #[inline]
    pub fn parameters(&self) -> &ViewingParameters {
        &self.parameters
    }

    /// Degree of adaptation D actually applied.
    #[inline]
    pub fn degree_of_adaptation(&self) -> f64 {
        self.d
    }

    /// Achromatic response of the white, A_w.
    #[inline]
    pub fn achromatic_white(&self) -> f64 {
        self.a_w
    }

    /// Compressed cone responses of the white, RGB_aw.
    #[inline]
    pub fn white_response(&self) -> Vec3 {
        self.white_response
    }

    /// Forward model: XYZ to correlates.
    ///
    /// # Errors
    ///
    /// [`AppearanceError::Domain`] for negative or non-finite XYZ, and for
    /// stimuli whose correlates are undefined (see
    /// [`correlates`](super::correlates)).
    pub fn forward(&self, xyz: Vec3) -> AppearanceResult<Ciecam02Specification> {
        trace!(
            l_a = self.conditions.l_a,
            y_b = self.conditions.y_b,
            c = self.conditions.surround.c,
            "ciecam02::forward"
        );
        if !xyz.is_finite() || xyz.min_element() < 0.0 {
            return Err(AppearanceError::domain(
                "XYZ",
                xyz.min_element(),
                "tristimulus values must be finite and non-negative",
            ));
        }

        to_appearance(adapt(xyz, self), self)
    }

    /// Reverse model: correlates to XYZ.
    ///
    /// # Errors
    ///
    /// [`AppearanceError::MissingCorrelate`] when a correlate group is
    /// absent, [`AppearanceError::Domain`] when the correlates do not
    /// describe a realisable stimulus.
    pub fn reverse(&self, spec: &PartialSpecification) -> AppearanceResult<Vec3> {
        trace!(
            l_a = self.conditions.l_a,
            y_b = self.conditions.y_b,
            c = self.conditions.surround.c,
            "ciecam02::reverse"
        );
        to_xyz(spec, self)
    }
}
