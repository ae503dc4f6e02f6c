use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use std::ops::{Add, Mul, Sub};

use crate::constants::N_XYZ_COORDINATES;

/// Three axis vector reading, such as user acceleration [m/s^2] or rotation rate [rad/s].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct XYZ(Vector3<f64>);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self::new(value)
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Add for XYZ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for XYZ {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for XYZ {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0];
        let xyz = XYZ::new(data);
        assert_eq!(xyz.inner(), data);
        assert_eq!((xyz.x(), xyz.y(), xyz.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_try_from_vec() {
        assert_eq!(
            XYZ::try_from(vec![1.0, 2.0, 3.0]).unwrap(),
            XYZ::new([1.0, 2.0, 3.0])
        );
        assert!(XYZ::try_from(vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let xyz1 = XYZ::new([1.0, 2.0, 3.0]);
        let xyz2 = XYZ::new([4.0, 5.0, 6.0]);
        assert_eq!((xyz1 + xyz2).inner(), [5.0, 7.0, 9.0]);
        assert_eq!((xyz2 - xyz1).inner(), [3.0, 3.0, 3.0]);
        assert_eq!((xyz1 * 2.0).inner(), [2.0, 4.0, 6.0]);
    }
}
