//! Mathematical utilities for the PSA calculations.
//!
//! Every function here dispatches to the native `f64` method with `std`, or to `libm` otherwise.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Radians per degree, written the way the reference formula spells it.
pub const RAD_PER_DEG: f64 = PI / 180.0;

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Truncates toward zero, like an integer cast of a float.
#[inline]
pub fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

/// Adds one full turn to a negative angle in radians.
///
/// A single correction, not a modulo: inputs are expected in `(-2π, 2π)`.
#[inline]
pub fn wrap_negative_radians(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_trunc_rounds_toward_zero() {
        assert_eq!(trunc(2.7), 2.0);
        assert_eq!(trunc(-2.7), -2.0);
        assert_eq!(trunc(-0.9166666666666666), 0.0);
        assert_eq!(trunc(-1.0), -1.0);
    }

    #[test]
    fn test_wrap_negative_radians() {
        assert_eq!(wrap_negative_radians(1.0), 1.0);
        assert_eq!(wrap_negative_radians(0.0), 0.0);
        assert!((wrap_negative_radians(-PI / 2.0) - 1.5 * PI).abs() < EPSILON);
        // one step only
        assert!(wrap_negative_radians(-3.0 * PI) < 0.0);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!((sin(0.0)).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((tan(0.0)).abs() < EPSILON);
        assert!((asin(1.0) - PI / 2.0).abs() < EPSILON);
        assert!((acos(-1.0) - PI).abs() < EPSILON);
        assert!((atan2(1.0, 0.0) - PI / 2.0).abs() < EPSILON);
        assert!((180.0 * RAD_PER_DEG - PI).abs() < EPSILON);
    }
}
