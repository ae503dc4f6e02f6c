use serde::{Deserialize, Serialize};

use crate::constants::N_MOTION_FIELDS;
use crate::types::motion::DeviceMotion;

/// Nine scalars copied out of one device motion reading.
///
/// Samples carry no identity or timestamp; their position in the history is the only
/// ordering.
///
/// # Examples
///
/// ```
/// use common::{Attitude, DeviceMotion, MotionSample, XYZ};
///
/// let motion = DeviceMotion::new(
///     XYZ::new([0.1, 0.2, 0.3]),
///     XYZ::new([1.0, 2.0, 3.0]),
///     Attitude::new([0.9, 0.1, 0.2, 0.3]),
/// );
/// let sample = MotionSample::from(&motion);
/// assert_eq!(sample.ax, 0.1);
/// assert_eq!(sample.rz, 3.0);
/// assert_eq!(sample.qx, 0.1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub qx: f64,
    pub qy: f64,
    pub qz: f64,
}

impl MotionSample {
    pub fn new(
        acceleration: [f64; 3],
        rotation_rate: [f64; 3],
        quaternion: [f64; 3],
    ) -> Self {
        Self {
            ax: acceleration[0],
            ay: acceleration[1],
            az: acceleration[2],
            rx: rotation_rate[0],
            ry: rotation_rate[1],
            rz: rotation_rate[2],
            qx: quaternion[0],
            qy: quaternion[1],
            qz: quaternion[2],
        }
    }

    pub fn acceleration(&self) -> [f64; 3] {
        [self.ax, self.ay, self.az]
    }

    pub fn rotation_rate(&self) -> [f64; 3] {
        [self.rx, self.ry, self.rz]
    }

    pub fn quaternion(&self) -> [f64; 3] {
        [self.qx, self.qy, self.qz]
    }
}

impl From<&DeviceMotion> for MotionSample {
    fn from(motion: &DeviceMotion) -> Self {
        let acceleration = motion.user_acceleration;
        let rotation_rate = motion.rotation_rate;
        let quaternion = motion.attitude;

        Self {
            ax: acceleration.x(),
            ay: acceleration.y(),
            az: acceleration.z(),
            rx: rotation_rate.x(),
            ry: rotation_rate.y(),
            rz: rotation_rate.z(),
            qx: quaternion.x(),
            qy: quaternion.y(),
            qz: quaternion.z(),
        }
    }
}

impl From<DeviceMotion> for MotionSample {
    fn from(motion: DeviceMotion) -> Self {
        MotionSample::from(&motion)
    }
}

impl From<MotionSample> for [f64; N_MOTION_FIELDS] {
    fn from(value: MotionSample) -> Self {
        [
            value.ax, value.ay, value.az, value.rx, value.ry, value.rz, value.qx, value.qy,
            value.qz,
        ]
    }
}
