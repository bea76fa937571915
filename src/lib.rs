//! # Solar Zenith
//!
//! Solar zenith angle from a local date, time, UTC offset and geographic location, using the
//! PSA approximation of the sun's position.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The zenith angle is the angle between the sun and the local vertical: 0° with the sun
//! directly overhead, 90° at the horizon. Angles above 90° (sun below the horizon) are reported
//! as exactly 90.0001°, so a clamped value stays distinguishable from a sun sitting on the
//! horizon.
//!
//! ## Features
//!
//! - Pure and stateless: every call depends only on its arguments, safe to share across threads
//! - Matches the published PSA formula bit for bit, including its integer Julian Day arithmetic
//! - Scalar, slice and n-dimensional array inputs with numpy-style broadcasting
//! - No input validation: NaN and infinite values propagate to the result
//! - Earth-sun distance, daily-mean zenith angle and top-of-atmosphere insolation
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `ndarray` (default): Enable the n-dimensional array API (implies `std`)
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono + ndarray
//! solar-zenith = "0.1"
//!
//! # Minimal std (slices only, no chrono)
//! solar-zenith = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-zenith = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Blanco-Muriel, M.; Alarcón-Padilla, D.C.; López-Moratalla, T.; Lara-Coira, M. (2001).
//!   Computing the solar vector. Solar Energy, 70(5), 431-441.
//!   DOI: <https://doi.org/10.1016/S0038-092X(00)00156-0>
//! - Lipponen, A. (2017). Solar zenith and azimuth angle computation, MIT licence.
//!
//! ## Quick Start
//!
//! ### Zenith angle (numeric API)
//! ```rust
//! use solar_zenith::{psa, time::CivilDateTime};
//!
//! // 2020-01-01 00:00:00 at UTC+0, on the equator at the prime meridian: local midnight
//! let datetime = CivilDateTime::new(2020, 1, 1, 0, 0, 0).unwrap();
//! let zenith = psa::zenith_angle(&datetime, 0.0, 0.0, 0.0);
//! assert_eq!(zenith, solar_zenith::BELOW_HORIZON_ZENITH);
//! ```
//!
//! ### Zenith angle (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_zenith::psa;
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = psa::solar_position_from_datetime(&datetime, -122.4194, 37.7749);
//!
//! println!("Zenith: {:.3}°", position.zenith_angle());
//! println!("Azimuth: {:.3}°", position.azimuth());
//! # }
//! ```
//!
//! ### Many coordinates at one instant
//! ```rust
//! # #[cfg(feature = "std")] {
//! use solar_zenith::{array, psa, time::CivilDateTime};
//!
//! let datetime = CivilDateTime::new(2020, 3, 20, 12, 7, 0).unwrap();
//! let parts = psa::time_dependent_parts(&datetime, 0.0);
//! let zeniths = array::zenith_angles(&parts, &[-90.0, 0.0, 90.0], &[0.0]).unwrap();
//! assert_eq!(zeniths.len(), 3);
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Longitude**: degrees, east positive
//! - **Latitude**: degrees, north positive
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::float_cmp, // Exact comparisons are intended: results are reproduced bit for bit
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::psa::{PsaTimeDependent, solar_position, time_dependent_parts, zenith_angle};
pub use crate::time::CivilDateTime;
pub use crate::types::{BELOW_HORIZON_ZENITH, HORIZON_ZENITH, SolarPosition, clamp_zenith};

// Algorithm module
pub mod psa;

// Core modules
pub mod error;
pub mod insolation;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "std")]
pub mod array;
pub mod time;
