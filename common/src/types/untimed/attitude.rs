use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::N_QUATERNION_COORDINATES;

pub(crate) const W_QUATERNION_COORD_IDX: usize = 0;
pub(crate) const X_QUATERNION_COORD_IDX: usize = 1;
pub(crate) const Y_QUATERNION_COORD_IDX: usize = 2;
pub(crate) const Z_QUATERNION_COORD_IDX: usize = 3;

/// Device orientation as reported by the motion source.
///
/// Coordinates are stored as received, without renormalisation, so that the recorded
/// vector components match the device output exactly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attitude(Quaternion<f64>);

impl Attitude {
    /// Builds an attitude from `[w, x, y, z]`.
    pub fn new(data: [f64; N_QUATERNION_COORDINATES]) -> Self {
        Self(Quaternion::new(
            data[W_QUATERNION_COORD_IDX],
            data[X_QUATERNION_COORD_IDX],
            data[Y_QUATERNION_COORD_IDX],
            data[Z_QUATERNION_COORD_IDX],
        ))
    }

    /// Rotation of `angle` radians around `axis`.
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let rotation = UnitQuaternion::from_scaled_axis(Vector3::from(axis).normalize() * angle);
        Self(rotation.into_inner())
    }

    pub fn w(&self) -> f64 {
        self.0.w
    }

    pub fn x(&self) -> f64 {
        self.0.i
    }

    pub fn y(&self) -> f64 {
        self.0.j
    }

    pub fn z(&self) -> f64 {
        self.0.k
    }

    pub fn inner(&self) -> Quaternion<f64> {
        self.0
    }
}

impl Default for Attitude {
    fn default() -> Self {
        Self(Quaternion::identity())
    }
}

impl From<Attitude> for [f64; N_QUATERNION_COORDINATES] {
    fn from(value: Attitude) -> Self {
        [value.w(), value.x(), value.y(), value.z()]
    }
}

impl From<[f64; N_QUATERNION_COORDINATES]> for Attitude {
    fn from(value: [f64; N_QUATERNION_COORDINATES]) -> Self {
        Self::new(value)
    }
}

impl TryFrom<Vec<f64>> for Attitude {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        let array: [f64; N_QUATERNION_COORDINATES] =
            value.try_into().map_err(|_| "Can't convert to Attitude")?;
        Ok(Attitude::new(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_are_kept_as_received() {
        let attitude = Attitude::new([2.0, 0.5, -0.25, 1.5]);
        assert_eq!(attitude.w(), 2.0);
        assert_eq!(attitude.x(), 0.5);
        assert_eq!(attitude.y(), -0.25);
        assert_eq!(attitude.z(), 1.5);
        assert_eq!(<[f64; 4]>::from(attitude), [2.0, 0.5, -0.25, 1.5]);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(<[f64; 4]>::from(Attitude::default()), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_axis_angle() {
        let attitude = Attitude::from_axis_angle([0.0, 0.0, 1.0], std::f64::consts::PI);
        assert!(attitude.w().abs() < 1e-9);
        assert!((attitude.z() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_try_from_vec() {
        assert!(Attitude::try_from(vec![1.0, 0.0, 0.0]).is_err());
        assert_eq!(
            Attitude::try_from(vec![1.0, 0.0, 0.0, 0.0]).unwrap(),
            Attitude::default()
        );
    }
}
