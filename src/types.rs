//! Result values and the horizon clamp.

/// Zenith angle of the geometric horizon, in degrees.
pub const HORIZON_ZENITH: f64 = 90.0;

/// Zenith angle reported for any sun position below the horizon, in degrees.
///
/// Slightly above 90° so that a clamped value can be told apart from a sun sitting exactly
/// on the horizon.
pub const BELOW_HORIZON_ZENITH: f64 = 90.0001;

/// Clamps a zenith angle in degrees to the below-horizon marker.
///
/// Values above 90° become exactly [`BELOW_HORIZON_ZENITH`]. Everything else passes through
/// untouched, including NaN.
///
/// # Example
/// ```
/// # use solar_zenith::types::{clamp_zenith, BELOW_HORIZON_ZENITH};
/// assert_eq!(clamp_zenith(45.0), 45.0);
/// assert_eq!(clamp_zenith(90.0), 90.0);
/// assert_eq!(clamp_zenith(120.0), BELOW_HORIZON_ZENITH);
/// assert!(clamp_zenith(f64::NAN).is_nan());
/// ```
#[inline]
#[must_use]
pub fn clamp_zenith(zenith_angle: f64) -> f64 {
    // not f64::min, which would swallow NaN
    if zenith_angle > HORIZON_ZENITH {
        BELOW_HORIZON_ZENITH
    } else {
        zenith_angle
    }
}

/// Solar position as seen from a point on Earth's surface.
///
/// - Zenith angle: 0° = directly overhead, 90° = horizon, up to 180° = nadir.
///   Includes the parallax correction and is not clamped.
/// - Azimuth: 0° = North, measured clockwise (0° to 360°).
///
/// No range checks are applied; NaN inputs to the calculation show up here as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    zenith_angle: f64,
    azimuth: f64,
}

impl SolarPosition {
    /// Creates a solar position from a zenith angle and an azimuth, both in degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_zenith::types::SolarPosition;
    /// let position = SolarPosition::new(30.0, 180.0);
    /// assert_eq!(position.zenith_angle(), 30.0);
    /// assert_eq!(position.azimuth(), 180.0);
    /// assert_eq!(position.elevation_angle(), 60.0);
    /// ```
    #[must_use]
    pub const fn new(zenith_angle: f64, azimuth: f64) -> Self {
        Self {
            zenith_angle,
            azimuth,
        }
    }

    /// Gets the zenith angle in degrees, unclamped.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the zenith angle in degrees with the below-horizon clamp applied.
    #[must_use]
    pub fn clamped_zenith_angle(&self) -> f64 {
        clamp_zenith(self.zenith_angle)
    }

    /// Gets the azimuth angle in degrees (0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle in degrees (90° - zenith angle).
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        HORIZON_ZENITH - self.zenith_angle
    }

    /// Whether the sun is below the horizon, i.e. the zenith angle exceeds 90°.
    #[must_use]
    pub fn is_below_horizon(&self) -> bool {
        self.zenith_angle > HORIZON_ZENITH
    }
}
