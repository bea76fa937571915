//! Error types for the solar zenith library.
//!
//! The angle computation itself is total and never fails. Errors only come from building a
//! [`CivilDateTime`](crate::time::CivilDateTime) out of raw components, and from bulk inputs
//! whose shapes cannot be paired up or whose output storage has the wrong length.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while preparing a solar zenith calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A civil date/time component is out of range.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Longitude and latitude inputs can neither be paired nor broadcast.
    ShapeMismatch {
        /// Number of longitude values.
        longitudes: usize,
        /// Number of latitude values.
        latitudes: usize,
    },
    /// Caller-provided output storage does not match the paired input length.
    OutputLength {
        /// Number of values the inputs pair up to.
        expected: usize,
        /// Length of the output storage.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ShapeMismatch {
                longitudes,
                latitudes,
            } => {
                write!(
                    f,
                    "cannot broadcast {longitudes} longitudes against {latitudes} latitudes"
                )
            }
            Self::OutputLength { expected, actual } => {
                write!(f, "output holds {actual} values, expected {expected}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(longitudes: usize, latitudes: usize) -> Self {
        Self::ShapeMismatch {
            longitudes,
            latitudes,
        }
    }

    /// Creates an output length error.
    #[must_use]
    pub const fn output_length(expected: usize, actual: usize) -> Self {
        Self::OutputLength { expected, actual }
    }
}
