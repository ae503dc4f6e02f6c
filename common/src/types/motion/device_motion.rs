use serde::{Deserialize, Serialize};

use crate::types::untimed::{Attitude, XYZ};

/// One fused reading from a device motion source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceMotion {
    pub user_acceleration: XYZ,
    pub rotation_rate: XYZ,
    pub attitude: Attitude,
}

impl DeviceMotion {
    pub fn new(user_acceleration: XYZ, rotation_rate: XYZ, attitude: Attitude) -> Self {
        Self {
            user_acceleration,
            rotation_rate,
            attitude,
        }
    }

    /// Builds a reading from a flat row `[ax, ay, az, rx, ry, rz, qw, qx, qy, qz]`.
    pub fn from_row(row: [f64; 10]) -> Self {
        Self {
            user_acceleration: XYZ::new([row[0], row[1], row[2]]),
            rotation_rate: XYZ::new([row[3], row[4], row[5]]),
            attitude: Attitude::new([row[6], row[7], row[8], row[9]]),
        }
    }
}

impl TryFrom<Vec<f64>> for DeviceMotion {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        let row: [f64; 10] = value
            .try_into()
            .map_err(|_| "Can't convert to DeviceMotion")?;
        Ok(Self::from_row(row))
    }
}
