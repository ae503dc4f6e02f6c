use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::N_CHANNELS;
use crate::types::motion::MotionSample;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChannelError {
    #[error("Channel index {0} doesnt exist")]
    InvalidIndex(usize),
    #[error("Unknown channel {0}")]
    UnknownName(String),
}

/// Sensor category selectable for display.
///
/// ```
/// use common::{Channel, MotionSample};
///
/// let sample = MotionSample::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]);
/// assert_eq!(Channel::from_index(1).unwrap().project(&sample), [4.0, 5.0, 6.0]);
/// assert!(Channel::from_index(3).is_err());
/// ```
#[repr(usize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum Channel {
    Acceleration = 0,
    RotationRate = 1,
    Quaternion = 2,
}

impl Channel {
    pub const ALL: [Channel; N_CHANNELS] = [
        Channel::Acceleration,
        Channel::RotationRate,
        Channel::Quaternion,
    ];

    pub fn from_index(index: usize) -> Result<Self, ChannelError> {
        Channel::try_from(index).map_err(|_| ChannelError::InvalidIndex(index))
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Segment title shown in the channel selector.
    pub fn title(&self) -> &'static str {
        match self {
            Channel::Acceleration => "User Accelerometer",
            Channel::RotationRate => "RotationRate",
            Channel::Quaternion => "Quaternion",
        }
    }

    /// Returns the three fields of `sample` that belong to this channel.
    pub fn project(&self, sample: &MotionSample) -> [f64; 3] {
        match self {
            Channel::Acceleration => sample.acceleration(),
            Channel::RotationRate => sample.rotation_rate(),
            Channel::Quaternion => sample.quaternion(),
        }
    }
}

// num_enum reads `#[default]` as a catch-all for `try_from`, so Default is written by hand.
impl Default for Channel {
    fn default() -> Self {
        Channel::Acceleration
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Channel {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        if let Ok(index) = value.parse::<usize>() {
            return Channel::from_index(index);
        }
        if value.starts_with("acc") || value.contains("accel") {
            Ok(Channel::Acceleration)
        } else if value.starts_with("rot") || value.starts_with("gyr") {
            Ok(Channel::RotationRate)
        } else if value.starts_with("quat") || value.starts_with("att") {
            Ok(Channel::Quaternion)
        } else {
            Err(ChannelError::UnknownName(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static SAMPLE: Lazy<MotionSample> =
        Lazy::new(|| MotionSample::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]));

    #[test]
    fn test_projection_by_index() {
        assert_eq!(Channel::from_index(0).unwrap().project(&SAMPLE), [1.0, 2.0, 3.0]);
        assert_eq!(Channel::from_index(1).unwrap().project(&SAMPLE), [4.0, 5.0, 6.0]);
        assert_eq!(Channel::from_index(2).unwrap().project(&SAMPLE), [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_projection_of_default_sample() {
        for channel in Channel::ALL {
            assert_eq!(channel.project(&MotionSample::default()), [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_invalid_index() {
        assert_eq!(Channel::from_index(3), Err(ChannelError::InvalidIndex(3)));
        assert!(Channel::try_from(usize::MAX).is_err());
        assert_eq!(Channel::default(), Channel::Acceleration);
    }

    #[test]
    fn test_index_round_trip() {
        for (idx, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), idx);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(Channel::Acceleration.title(), "User Accelerometer");
        assert_eq!(Channel::RotationRate.to_string(), "RotationRate");
        assert_eq!(Channel::Quaternion.title(), "Quaternion");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("acc".parse::<Channel>().unwrap(), Channel::Acceleration);
        assert_eq!("Rotation".parse::<Channel>().unwrap(), Channel::RotationRate);
        assert_eq!("gyro".parse::<Channel>().unwrap(), Channel::RotationRate);
        assert_eq!("QUAT".parse::<Channel>().unwrap(), Channel::Quaternion);
        assert_eq!("2".parse::<Channel>().unwrap(), Channel::Quaternion);
        assert!("7".parse::<Channel>().is_err());
        assert!("magnetometer".parse::<Channel>().is_err());
    }
}
