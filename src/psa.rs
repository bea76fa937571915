//! PSA solar position algorithm implementation.
//!
//! Follows the algorithm from Blanco-Muriel, Alarcón-Padilla, López-Moratalla and Lara-Coira,
//! 'Computing the solar vector', Solar Energy 70 (2001) pp. 431-441, in the formulation by
//! Antti Lipponen (version of 6 April 2017).
//!
//! Copyright (c) 2017 Antti Lipponen. Permission is hereby granted, free of charge, to any
//! person obtaining a copy of this software and associated documentation files (the
//! "Software"), to deal in the Software without restriction, including without limitation the
//! rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
//! the Software, and to permit persons to whom the Software is furnished to do so, subject to
//! the following conditions: The above copyright notice and this permission notice shall be
//! included in all copies or substantial portions of the Software. THE SOFTWARE IS PROVIDED
//! "AS IS", WITHOUT WARRANTY OF ANY KIND.
//!
//! Orbital elements are evaluated in radians without reducing them to `[0, 2π)`. Every
//! expression keeps the evaluation order of the published formula so results match it to the
//! last bit. Inputs are never validated: out-of-range dates and coordinates still produce a
//! number, and NaN or infinite inputs propagate to the output.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{PI, RAD_PER_DEG, acos, asin, atan2, cos, sin, tan, wrap_negative_radians};
use crate::time::CivilDateTime;
use crate::types::{SolarPosition, clamp_zenith};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Mean Earth radius in kilometres.
const EARTH_MEAN_RADIUS_KM: f64 = 6371.01;

/// Astronomical unit in kilometres.
const ASTRONOMICAL_UNIT_KM: f64 = 149597890.0;

/// Eccentricity of Earth's orbit at J2000.0.
pub const ORBITAL_ECCENTRICITY: f64 = 0.016708634;

/// Location-independent intermediate values of the PSA calculation for one instant.
///
/// Computing these once and reusing them for many coordinates gives the same bits as
/// calling [`zenith_angle`] for each coordinate separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsaTimeDependent {
    /// Time of day in UT decimal hours
    decimal_hours: f64,
    /// Days since JD 2451545.0
    elapsed_julian_days: f64,
    /// Ecliptic longitude (radians, unwrapped)
    ecliptic_longitude: f64,
    /// Mean anomaly (radians, unwrapped)
    mean_anomaly: f64,
    /// Obliquity of the ecliptic (radians)
    ecliptic_obliquity: f64,
    /// Right ascension (radians, `[0, 2π)`)
    right_ascension: f64,
    /// Declination (radians)
    declination: f64,
    /// Greenwich mean sidereal time (hours, unwrapped)
    greenwich_mean_sidereal_time: f64,
}

impl PsaTimeDependent {
    /// Time of day in UT decimal hours.
    #[must_use]
    pub const fn decimal_hours(&self) -> f64 {
        self.decimal_hours
    }

    /// Days elapsed since J2000.0.
    #[must_use]
    pub const fn elapsed_julian_days(&self) -> f64 {
        self.elapsed_julian_days
    }

    /// Ecliptic longitude of the sun in radians. May exceed 2π.
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Mean anomaly of the sun in radians. May exceed 2π.
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Obliquity of the ecliptic in radians.
    #[must_use]
    pub const fn ecliptic_obliquity(&self) -> f64 {
        self.ecliptic_obliquity
    }

    /// Right ascension of the sun in radians.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination of the sun in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Greenwich mean sidereal time in hours. May exceed 24.
    #[must_use]
    pub const fn greenwich_mean_sidereal_time(&self) -> f64 {
        self.greenwich_mean_sidereal_time
    }

    /// Earth-sun distance in astronomical units.
    ///
    /// The true anomaly is expanded from the mean anomaly to third order in the eccentricity,
    /// then placed on the Keplerian ellipse `d = (1 - e²) / (1 + e cos A)`.
    ///
    /// # Example
    /// ```rust
    /// use solar_zenith::{psa, time::CivilDateTime};
    ///
    /// // perihelion falls in early January
    /// let january = psa::time_dependent_parts(&CivilDateTime::new(2020, 1, 5, 12, 0, 0).unwrap(), 0.0);
    /// let july = psa::time_dependent_parts(&CivilDateTime::new(2020, 7, 4, 12, 0, 0).unwrap(), 0.0);
    /// assert!(january.earth_sun_distance() < 0.984);
    /// assert!(july.earth_sun_distance() > 1.016);
    /// ```
    #[must_use]
    pub fn earth_sun_distance(&self) -> f64 {
        let e = ORBITAL_ECCENTRICITY;
        let m = self.mean_anomaly;
        let true_anomaly = m
            + (2.0 * e - e * e * e / 4.0) * sin(m)
            + 1.25 * e * e * sin(2.0 * m)
            + (13.0 / 12.0) * e * e * e * sin(3.0 * m);
        (1.0 - e * e) / (1.0 + e * cos(true_anomaly))
    }
}

/// Calculate the solar zenith angle in degrees.
///
/// `datetime` is local civil time at a fixed offset of `tz_offset_hours` from UTC.
/// Results above 90° are clamped to [`BELOW_HORIZON_ZENITH`](crate::types::BELOW_HORIZON_ZENITH).
///
/// # Example
/// ```rust
/// use solar_zenith::{psa, time::CivilDateTime};
///
/// let datetime = CivilDateTime::new(2023, 6, 21, 12, 0, 0).unwrap();
/// let zenith = psa::zenith_angle(
///     &datetime,
///     -7.0,        // UTC offset (hours)
///     -122.4194,   // San Francisco longitude
///     37.7749,     // San Francisco latitude
/// );
///
/// assert!((zenith - 20.957).abs() < 1e-3);
/// ```
#[must_use]
pub fn zenith_angle(
    datetime: &CivilDateTime,
    tz_offset_hours: f64,
    longitude: f64,
    latitude: f64,
) -> f64 {
    let time_dependent = time_dependent_parts(datetime, tz_offset_hours);
    zenith_angle_with_time_dependent_parts(longitude, latitude, &time_dependent)
}

/// Calculate the solar position (unclamped zenith angle and azimuth).
///
/// # Example
/// ```rust
/// use solar_zenith::{psa, time::CivilDateTime};
///
/// let datetime = CivilDateTime::new(2020, 1, 1, 0, 0, 0).unwrap();
/// let position = psa::solar_position(&datetime, 0.0, 0.0, 0.0);
///
/// assert!(position.is_below_horizon());
/// assert!(position.zenith_angle() > 150.0);
/// ```
#[must_use]
pub fn solar_position(
    datetime: &CivilDateTime,
    tz_offset_hours: f64,
    longitude: f64,
    latitude: f64,
) -> SolarPosition {
    let time_dependent = time_dependent_parts(datetime, tz_offset_hours);
    position_with_time_dependent_parts(longitude, latitude, &time_dependent)
}

/// Calculate the solar zenith angle for a timezone-aware chrono `DateTime`.
///
/// The UTC offset is taken from the datetime itself. Sub-second precision is ignored.
///
/// # Example
/// ```rust
/// use solar_zenith::psa;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let zenith = psa::zenith_angle_from_datetime(&datetime, -122.4194, 37.7749);
/// assert!(zenith < 90.0);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn zenith_angle_from_datetime<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    longitude: f64,
    latitude: f64,
) -> f64 {
    let (local, tz_offset_hours) = CivilDateTime::from_datetime(datetime);
    zenith_angle(&local, tz_offset_hours, longitude, latitude)
}

/// Calculate the solar position for a timezone-aware chrono `DateTime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn solar_position_from_datetime<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    longitude: f64,
    latitude: f64,
) -> SolarPosition {
    let (local, tz_offset_hours) = CivilDateTime::from_datetime(datetime);
    solar_position(&local, tz_offset_hours, longitude, latitude)
}

/// Calculate the time-dependent parts for a timezone-aware chrono `DateTime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn time_dependent_parts_from_datetime<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
) -> PsaTimeDependent {
    let (local, tz_offset_hours) = CivilDateTime::from_datetime(datetime);
    time_dependent_parts(&local, tz_offset_hours)
}

/// Calculate the location-independent parts of the PSA algorithm.
///
/// Covers universal time, the Julian day count, ecliptic and celestial coordinates, and
/// Greenwich mean sidereal time.
///
/// # Example
/// ```rust
/// use solar_zenith::{psa, time::CivilDateTime};
///
/// let datetime = CivilDateTime::new(2023, 6, 21, 12, 0, 0).unwrap();
/// let parts = psa::time_dependent_parts(&datetime, 0.0);
///
/// for lat in (-60..=60).step_by(30) {
///     for lon in (-180..=180).step_by(45) {
///         let zenith = psa::zenith_angle_with_time_dependent_parts(
///             f64::from(lon), f64::from(lat), &parts,
///         );
///         assert!(zenith <= 90.0001);
///     }
/// }
/// ```
#[must_use]
pub fn time_dependent_parts(datetime: &CivilDateTime, tz_offset_hours: f64) -> PsaTimeDependent {
    let decimal_hours = datetime.decimal_hours_ut(tz_offset_hours);
    let n = datetime.elapsed_julian_days(tz_offset_hours);

    // Ecliptic coordinates
    let omega = 2.1429 - 0.0010394594 * n;
    let mean_longitude = 4.8950630 + 0.017202791698 * n;
    let mean_anomaly = 6.2400600 + 0.0172019699 * n;
    let ecliptic_longitude = mean_longitude
        + 0.03341607 * sin(mean_anomaly)
        + 0.00034894 * sin(2.0 * mean_anomaly)
        - 0.0001134
        - 0.0000203 * sin(omega);
    let ecliptic_obliquity = 0.4090928 - 6.2140e-9 * n + 0.0000396 * cos(omega);

    // Celestial coordinates
    let sin_ecliptic_longitude = sin(ecliptic_longitude);
    let y = cos(ecliptic_obliquity) * sin_ecliptic_longitude;
    let x = cos(ecliptic_longitude);
    let right_ascension = wrap_negative_radians(atan2(y, x));
    let declination = asin(sin(ecliptic_obliquity) * sin_ecliptic_longitude);

    let greenwich_mean_sidereal_time = 6.6974243242 + 0.0657098283 * n + decimal_hours;

    log::trace!(
        "PSA parts: n={n} ut={decimal_hours} ra={right_ascension} dec={declination} gmst={greenwich_mean_sidereal_time}"
    );

    PsaTimeDependent {
        decimal_hours,
        elapsed_julian_days: n,
        ecliptic_longitude,
        mean_anomaly,
        ecliptic_obliquity,
        right_ascension,
        declination,
        greenwich_mean_sidereal_time,
    }
}

/// Complete the PSA calculation for one coordinate, returning the unclamped position.
#[must_use]
pub fn position_with_time_dependent_parts(
    longitude: f64,
    latitude: f64,
    time_dependent: &PsaTimeDependent,
) -> SolarPosition {
    let local_mean_sidereal_time =
        (time_dependent.greenwich_mean_sidereal_time * 15.0 + longitude) * RAD_PER_DEG;
    let hour_angle = local_mean_sidereal_time - time_dependent.right_ascension;

    let latitude_radians = latitude * RAD_PER_DEG;
    let cos_latitude = cos(latitude_radians);
    let sin_latitude = sin(latitude_radians);
    let cos_hour_angle = cos(hour_angle);
    let declination = time_dependent.declination;

    let zenith = acos(
        cos_latitude * cos_hour_angle * cos(declination) + sin(declination) * sin_latitude,
    );

    let azimuth = wrap_negative_radians(atan2(
        -sin(hour_angle),
        tan(declination) * cos_latitude - sin_latitude * cos_hour_angle,
    ));

    // Parallax correction
    let parallax = (EARTH_MEAN_RADIUS_KM / ASTRONOMICAL_UNIT_KM) * sin(zenith);
    let zenith_degrees = (zenith + parallax) / RAD_PER_DEG;

    SolarPosition::new(zenith_degrees, azimuth / RAD_PER_DEG)
}

/// Complete the PSA calculation for one coordinate, returning the clamped zenith angle.
#[inline]
#[must_use]
pub fn zenith_angle_with_time_dependent_parts(
    longitude: f64,
    latitude: f64,
    time_dependent: &PsaTimeDependent,
) -> f64 {
    let position = position_with_time_dependent_parts(longitude, latitude, time_dependent);
    clamp_zenith(position.zenith_angle())
}

/// Hour angle of sunrise and sunset in degrees, from `cos η = -tan φ tan δ`.
///
/// Returns 180° when the sun never sets (polar day) and 0° when it never rises (polar night).
/// The declination is taken at the instant of `time_dependent`.
#[must_use]
pub fn sunset_hour_angle(latitude: f64, time_dependent: &PsaTimeDependent) -> f64 {
    sunset_hour_angle_radians(latitude * RAD_PER_DEG, time_dependent.declination) / RAD_PER_DEG
}

fn sunset_hour_angle_radians(latitude_radians: f64, declination: f64) -> f64 {
    let acos_arg = -tan(latitude_radians) * tan(declination);
    if acos_arg < -1.0 {
        PI
    } else if acos_arg > 1.0 {
        0.0
    } else {
        acos(acos_arg)
    }
}

/// Daily average of the cosine of the zenith angle, counting the night as zero.
///
/// `(η sin φ sin δ + cos φ cos δ sin η) / π` with `η` the sunset hour angle. The declination is
/// held at its value for the instant of `time_dependent`.
///
/// # Example
/// ```rust
/// use solar_zenith::{psa, time::CivilDateTime};
///
/// let solstice = CivilDateTime::new(2021, 12, 21, 12, 0, 0).unwrap();
/// let parts = psa::time_dependent_parts(&solstice, 0.0);
///
/// // polar night in the Arctic, polar day in the Antarctic
/// assert_eq!(psa::daily_mean_cos_zenith(80.0, &parts), 0.0);
/// assert!(psa::daily_mean_cos_zenith(-80.0, &parts) > 0.3);
/// ```
#[must_use]
pub fn daily_mean_cos_zenith(latitude: f64, time_dependent: &PsaTimeDependent) -> f64 {
    let latitude_radians = latitude * RAD_PER_DEG;
    let declination = time_dependent.declination;
    let hour_angle = sunset_hour_angle_radians(latitude_radians, declination);

    (hour_angle * sin(latitude_radians) * sin(declination)
        + cos(latitude_radians) * cos(declination) * sin(hour_angle))
        / PI
}

/// Zenith angle in degrees whose cosine is the daily mean from [`daily_mean_cos_zenith`].
///
/// Polar night gives exactly 90°.
#[must_use]
pub fn daily_mean_zenith_angle(latitude: f64, time_dependent: &PsaTimeDependent) -> f64 {
    acos(daily_mean_cos_zenith(latitude, time_dependent)) / RAD_PER_DEG
}
