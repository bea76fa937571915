//! Shape-preserving zenith angles for many coordinates at one instant.
//!
//! The time-dependent parts are computed once by the caller and shared by every element,
//! so each output element has the same bits as the scalar [`psa::zenith_angle`] for its pair.
//!
//! Pairing follows numpy broadcasting: equal lengths pair element by element, and a side of
//! length 1 is repeated against the other. For n-dimensional arrays the rule applies per axis.

use crate::psa::{self, PsaTimeDependent};
use crate::{Error, Result};
#[cfg(feature = "ndarray")]
use ndarray::{Array, Array2, ArrayView, Dimension, Zip};

/// Length of the paired output, or a mismatch error.
fn broadcast_len(longitudes: usize, latitudes: usize) -> Result<usize> {
    match (longitudes, latitudes) {
        (a, b) if a == b => Ok(a),
        (1, n) | (n, 1) => Ok(n),
        (a, b) => Err(Error::shape_mismatch(a, b)),
    }
}

#[inline]
fn pick(values: &[f64], index: usize) -> f64 {
    if values.len() == 1 {
        values[0]
    } else {
        values[index]
    }
}

/// Zenith angles for paired longitude/latitude slices.
///
/// # Errors
/// Returns `ShapeMismatch` when the lengths differ and neither is 1.
///
/// # Example
/// ```rust
/// use solar_zenith::{array, psa, time::CivilDateTime};
///
/// let datetime = CivilDateTime::new(2020, 3, 20, 12, 7, 0).unwrap();
/// let parts = psa::time_dependent_parts(&datetime, 0.0);
///
/// let zeniths = array::zenith_angles(&parts, &[0.0, 180.0], &[0.0]).unwrap();
/// assert!(zeniths[0] < 1.0);
/// assert_eq!(zeniths[1], 90.0001);
/// ```
pub fn zenith_angles(
    time_dependent: &PsaTimeDependent,
    longitudes: &[f64],
    latitudes: &[f64],
) -> Result<Vec<f64>> {
    let len = broadcast_len(longitudes.len(), latitudes.len())?;
    let mut out = vec![0.0; len];
    fill(time_dependent, longitudes, latitudes, &mut out);
    Ok(out)
}

/// Zenith angles for paired slices, written into caller-provided storage.
///
/// # Errors
/// Returns `ShapeMismatch` when the inputs cannot be broadcast, or `OutputLength` when `out`
/// does not have the broadcast length.
pub fn zenith_angles_into(
    time_dependent: &PsaTimeDependent,
    longitudes: &[f64],
    latitudes: &[f64],
    out: &mut [f64],
) -> Result<()> {
    let len = broadcast_len(longitudes.len(), latitudes.len())?;
    if out.len() != len {
        return Err(Error::output_length(len, out.len()));
    }
    fill(time_dependent, longitudes, latitudes, out);
    Ok(())
}

fn fill(
    time_dependent: &PsaTimeDependent,
    longitudes: &[f64],
    latitudes: &[f64],
    out: &mut [f64],
) {
    log::debug!(
        "evaluating {} zenith angles ({} longitudes, {} latitudes)",
        out.len(),
        longitudes.len(),
        latitudes.len()
    );
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = psa::zenith_angle_with_time_dependent_parts(
            pick(longitudes, i),
            pick(latitudes, i),
            time_dependent,
        );
    }
}

/// Zenith angles for n-dimensional coordinate arrays.
///
/// Both operands are broadcast to a common shape: axes of equal length pair element by
/// element and a length-1 axis on either side repeats along the other. A row of longitudes
/// against a column of latitudes therefore yields the full latitude x longitude map.
///
/// # Errors
/// Returns `ShapeMismatch` (with element counts) if some axis has two different lengths,
/// neither of them 1.
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use solar_zenith::{array::zenith_angle_array, psa, time::CivilDateTime};
///
/// let datetime = CivilDateTime::new(2023, 6, 21, 12, 0, 0).unwrap();
/// let parts = psa::time_dependent_parts(&datetime, -7.0);
///
/// let longitudes = array![[-122.4194, -74.006, 0.0]];
/// let latitudes = array![[37.7749], [40.7128]];
/// let zeniths = zenith_angle_array(&parts, longitudes.view(), latitudes.view()).unwrap();
/// assert_eq!(zeniths.shape(), &[2, 3]);
/// ```
#[cfg(feature = "ndarray")]
pub fn zenith_angle_array<D: Dimension>(
    time_dependent: &PsaTimeDependent,
    longitudes: ArrayView<'_, f64, D>,
    latitudes: ArrayView<'_, f64, D>,
) -> Result<Array<f64, D>> {
    let mismatch = || Error::shape_mismatch(longitudes.len(), latitudes.len());
    let shape =
        broadcast_shape(&longitudes.raw_dim(), &latitudes.raw_dim()).ok_or_else(mismatch)?;

    match (longitudes.broadcast(shape.clone()), latitudes.broadcast(shape)) {
        (Some(lon), Some(lat)) => Ok(evaluate(time_dependent, lon, lat)),
        _ => Err(mismatch()),
    }
}

/// Common shape of two array shapes under numpy broadcasting rules.
#[cfg(feature = "ndarray")]
fn broadcast_shape<D: Dimension>(longitudes: &D, latitudes: &D) -> Option<D> {
    let mut shape = longitudes.clone();
    for (axis, &other) in shape.slice_mut().iter_mut().zip(latitudes.slice()) {
        *axis = broadcast_len(*axis, other).ok()?;
    }
    Some(shape)
}

#[cfg(feature = "ndarray")]
fn evaluate<D: Dimension>(
    time_dependent: &PsaTimeDependent,
    longitudes: ArrayView<'_, f64, D>,
    latitudes: ArrayView<'_, f64, D>,
) -> Array<f64, D> {
    log::debug!("evaluating zenith angle array of shape {:?}", longitudes.shape());
    Zip::from(longitudes)
        .and(latitudes)
        .map_collect(|&lon, &lat| {
            psa::zenith_angle_with_time_dependent_parts(lon, lat, time_dependent)
        })
}

/// Zenith angle map over the cross product of longitudes and latitudes.
///
/// The result has shape `(latitudes.len(), longitudes.len())`: one row per latitude, one
/// column per longitude.
///
/// # Example
/// ```rust
/// use solar_zenith::{array::zenith_angle_grid, psa, time::CivilDateTime};
///
/// let datetime = CivilDateTime::new(2020, 1, 1, 0, 0, 0).unwrap();
/// let parts = psa::time_dependent_parts(&datetime, 0.0);
///
/// let longitudes: Vec<f64> = (-180..180).step_by(10).map(f64::from).collect();
/// let latitudes: Vec<f64> = (-90..=90).step_by(10).map(f64::from).collect();
/// let grid = zenith_angle_grid(&parts, &longitudes, &latitudes);
/// assert_eq!(grid.dim(), (19, 36));
/// ```
#[cfg(feature = "ndarray")]
#[must_use]
pub fn zenith_angle_grid(
    time_dependent: &PsaTimeDependent,
    longitudes: &[f64],
    latitudes: &[f64],
) -> Array2<f64> {
    log::debug!(
        "evaluating zenith angle grid of {} latitudes x {} longitudes",
        latitudes.len(),
        longitudes.len()
    );
    Array2::from_shape_fn((latitudes.len(), longitudes.len()), |(row, col)| {
        psa::zenith_angle_with_time_dependent_parts(longitudes[col], latitudes[row], time_dependent)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::CivilDateTime;
    use crate::types::BELOW_HORIZON_ZENITH;

    fn parts() -> PsaTimeDependent {
        let datetime = CivilDateTime::new(2023, 6, 21, 12, 0, 0).unwrap();
        psa::time_dependent_parts(&datetime, -7.0)
    }

    #[test]
    fn test_broadcast_len() {
        assert_eq!(broadcast_len(3, 3), Ok(3));
        assert_eq!(broadcast_len(1, 4), Ok(4));
        assert_eq!(broadcast_len(4, 1), Ok(4));
        assert_eq!(broadcast_len(0, 0), Ok(0));
        assert_eq!(broadcast_len(1, 0), Ok(0));
        assert_eq!(broadcast_len(2, 3), Err(Error::shape_mismatch(2, 3)));
    }

    #[test]
    fn test_zenith_angles_match_scalar() {
        let parts = parts();
        let lons = [-122.4194, 0.0, 151.2093, 77.209];
        let lats = [37.7749, 0.0, -33.8688, 28.6139];
        let zeniths = zenith_angles(&parts, &lons, &lats).unwrap();
        assert_eq!(zeniths.len(), 4);
        for ((lon, lat), zenith) in lons.iter().zip(&lats).zip(&zeniths) {
            let scalar = psa::zenith_angle_with_time_dependent_parts(*lon, *lat, &parts);
            assert_eq!(scalar.to_bits(), zenith.to_bits());
        }
    }

    #[test]
    fn test_zenith_angles_broadcast_scalar_side() {
        let parts = parts();
        let lats = [-60.0, 0.0, 60.0];
        let zeniths = zenith_angles(&parts, &[10.0], &lats).unwrap();
        for (lat, zenith) in lats.iter().zip(&zeniths) {
            assert_eq!(
                *zenith,
                psa::zenith_angle_with_time_dependent_parts(10.0, *lat, &parts)
            );
        }
    }

    #[test]
    fn test_zenith_angles_mismatch() {
        let parts = parts();
        assert_eq!(
            zenith_angles(&parts, &[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::shape_mismatch(2, 3))
        );
        let mut out = [0.0; 2];
        assert_eq!(
            zenith_angles_into(&parts, &[1.0, 2.0, 3.0], &[0.0], &mut out),
            Err(Error::output_length(3, 2))
        );
        assert_eq!(
            zenith_angles_into(&parts, &[1.0, 2.0], &[1.0, 2.0, 3.0], &mut out),
            Err(Error::shape_mismatch(2, 3))
        );
    }

    #[test]
    fn test_zenith_angles_into_reports_output_length() {
        let parts = parts();
        let mut short = [0.0; 1];
        let err = zenith_angles_into(&parts, &[1.0, 2.0], &[3.0, 4.0], &mut short).unwrap_err();
        assert_eq!(
            err,
            Error::OutputLength {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(short, [0.0]);
    }

    #[test]
    fn test_zenith_angles_into() {
        let parts = parts();
        let mut out = [f64::NAN; 3];
        zenith_angles_into(&parts, &[0.0, 90.0, 180.0], &[0.0], &mut out).unwrap();
        assert!(out.iter().all(|z| z.is_finite() && *z <= BELOW_HORIZON_ZENITH));
    }

    #[test]
    fn test_nan_element_stays_local() {
        let parts = parts();
        let zeniths = zenith_angles(&parts, &[-122.4194, f64::NAN], &[37.7749, 37.7749]).unwrap();
        assert!(zeniths[0].is_finite());
        assert!(zeniths[1].is_nan());
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_array_broadcast_row_against_full_shape() {
        use ndarray::{Array2, array};

        let parts = parts();
        let lons: Array2<f64> = array![[-90.0, 0.0, 90.0]];
        let lats: Array2<f64> = array![[-45.0, 0.0, 45.0], [10.0, 20.0, 30.0]];
        let zeniths = zenith_angle_array(&parts, lons.view(), lats.view()).unwrap();
        assert_eq!(zeniths.dim(), (2, 3));
        assert_eq!(
            zeniths[[1, 2]],
            psa::zenith_angle_with_time_dependent_parts(90.0, 30.0, &parts)
        );

        let bad: Array2<f64> = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(
            zenith_angle_array(&parts, bad.view(), lats.view()),
            Err(Error::shape_mismatch(4, 6))
        );
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_array_broadcast_row_against_column() {
        use ndarray::{Array2, array};

        let parts = parts();
        let lons: Array2<f64> = array![[-90.0, 0.0, 90.0]];
        let lats: Array2<f64> = array![[0.0], [45.0]];
        let zeniths = zenith_angle_array(&parts, lons.view(), lats.view()).unwrap();
        assert_eq!(zeniths.dim(), (2, 3));
        for ((row, col), zenith) in zeniths.indexed_iter() {
            let scalar =
                psa::zenith_angle_with_time_dependent_parts(lons[[0, col]], lats[[row, 0]], &parts);
            assert_eq!(zenith.to_bits(), scalar.to_bits(), "element ({row}, {col})");
        }

        // the same map as the cross-product grid, whichever side is the column
        let grid = zenith_angle_grid(&parts, &[-90.0, 0.0, 90.0], &[0.0, 45.0]);
        assert_eq!(zeniths, grid);
        let transposed = zenith_angle_array(&parts, lats.t(), lons.t()).unwrap();
        assert_eq!(transposed.dim(), (3, 2));

        let column: Array2<f64> = array![[1.0], [2.0], [3.0]];
        assert_eq!(
            zenith_angle_array(&parts, lons.view(), column.view()).map(|z| z.dim()),
            Ok((3, 3))
        );
        let tall: Array2<f64> = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(
            zenith_angle_array(&parts, tall.view(), lats.view()),
            Err(Error::shape_mismatch(6, 2))
        );
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_broadcast_shape() {
        use ndarray::{Ix2, Ix3};

        assert_eq!(broadcast_shape(&Ix2(1, 3), &Ix2(2, 1)), Some(Ix2(2, 3)));
        assert_eq!(broadcast_shape(&Ix2(4, 3), &Ix2(4, 3)), Some(Ix2(4, 3)));
        assert_eq!(broadcast_shape(&Ix3(2, 1, 5), &Ix3(1, 7, 1)), Some(Ix3(2, 7, 5)));
        assert_eq!(broadcast_shape(&Ix2(2, 3), &Ix2(3, 3)), None);
        assert_eq!(broadcast_shape(&Ix2(0, 3), &Ix2(1, 3)), Some(Ix2(0, 3)));
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_grid_layout() {
        let parts = parts();
        let lons = [-120.0, 0.0, 120.0, 179.0];
        let lats = [-30.0, 30.0];
        let grid = zenith_angle_grid(&parts, &lons, &lats);
        assert_eq!(grid.dim(), (2, 4));
        assert_eq!(
            grid[[1, 0]],
            psa::zenith_angle_with_time_dependent_parts(-120.0, 30.0, &parts)
        );
        assert!(zenith_angle_grid(&parts, &[], &lats).is_empty());
    }
}
