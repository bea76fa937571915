//! Top-of-atmosphere solar flux and insolation.
//!
//! Flux is the total solar irradiance scaled by the inverse square of the Earth-sun distance.
//! Insolation projects that flux onto a horizontal surface, and is zero while the sun is below
//! the horizon. Non-finite inputs propagate as NaN.

use crate::math::{RAD_PER_DEG, cos};
use crate::psa::{self, PsaTimeDependent};
use crate::time::CivilDateTime;

/// Total solar irradiance at one astronomical unit, in W/m².
pub const SOLAR_CONSTANT: f64 = 1362.0;

/// Solar flux at the top of the atmosphere in W/m², for a distance in astronomical units.
#[inline]
#[must_use]
pub fn toa_flux(distance_au: f64) -> f64 {
    SOLAR_CONSTANT / (distance_au * distance_au)
}

/// Insolation in W/m² for a zenith angle in degrees and an Earth-sun distance in AU.
///
/// # Example
/// ```rust
/// use solar_zenith::{insolation::{insolation, SOLAR_CONSTANT}, BELOW_HORIZON_ZENITH};
///
/// assert_eq!(insolation(0.0, 1.0), SOLAR_CONSTANT);
/// assert_eq!(insolation(BELOW_HORIZON_ZENITH, 1.0), 0.0);
/// ```
#[must_use]
pub fn insolation(zenith_angle: f64, distance_au: f64) -> f64 {
    toa_flux(distance_au) * daylit_cos_zenith(zenith_angle)
}

/// Cosine of the zenith angle, with anything below the horizon reported as zero.
fn daylit_cos_zenith(zenith_angle: f64) -> f64 {
    let cos_zenith = cos(zenith_angle * RAD_PER_DEG);
    // NaN passes through
    if cos_zenith < 0.0 { 0.0 } else { cos_zenith }
}

/// Instantaneous insolation in W/m² at a location and local time.
///
/// # Example
/// ```rust
/// use solar_zenith::{insolation, time::CivilDateTime};
///
/// let noon = CivilDateTime::new(2020, 3, 20, 12, 7, 0).unwrap();
/// let flux = insolation::instantaneous_insolation(&noon, 0.0, 0.0, 0.0);
/// assert!(flux > 1360.0 && flux < 1380.0);
/// ```
#[must_use]
pub fn instantaneous_insolation(
    datetime: &CivilDateTime,
    tz_offset_hours: f64,
    longitude: f64,
    latitude: f64,
) -> f64 {
    let time_dependent = psa::time_dependent_parts(datetime, tz_offset_hours);
    insolation_with_time_dependent_parts(longitude, latitude, &time_dependent)
}

/// Instantaneous insolation in W/m² for one coordinate, reusing the time-dependent parts.
#[must_use]
pub fn insolation_with_time_dependent_parts(
    longitude: f64,
    latitude: f64,
    time_dependent: &PsaTimeDependent,
) -> f64 {
    let position = psa::position_with_time_dependent_parts(longitude, latitude, time_dependent);
    insolation(position.zenith_angle(), time_dependent.earth_sun_distance())
}

/// Daily mean insolation in W/m² at a latitude, with the declination and distance held at
/// their values for the instant of `time_dependent`.
#[must_use]
pub fn daily_insolation(latitude: f64, time_dependent: &PsaTimeDependent) -> f64 {
    toa_flux(time_dependent.earth_sun_distance())
        * psa::daily_mean_cos_zenith(latitude, time_dependent)
}

/// Top-of-atmosphere flux in W/m² and the cosine of the zenith angle, floored at zero.
///
/// This is the pair a radiative transfer scheme takes as input: the flux is not yet projected
/// onto the surface.
#[must_use]
pub fn solar_flux_and_cos_zenith(
    datetime: &CivilDateTime,
    tz_offset_hours: f64,
    longitude: f64,
    latitude: f64,
) -> (f64, f64) {
    let time_dependent = psa::time_dependent_parts(datetime, tz_offset_hours);
    let position = psa::position_with_time_dependent_parts(longitude, latitude, &time_dependent);
    (
        toa_flux(time_dependent.earth_sun_distance()),
        daylit_cos_zenith(position.zenith_angle()),
    )
}
