use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use common::{Attitude, DeviceMotion, XYZ};

use super::gaussian::GaussianNoise;
use crate::errors::SamplerError;
use crate::ports::MotionPort;

const GAUSSIAN_SENSOR_MEAN: f64 = 0f64;
const GAUSSIAN_SENSOR_STDEV: f64 = 0.02;
const ACCELERATION_AMPLITUDE: f64 = 0.3;
const ACCELERATION_FREQ_HZ: f64 = 0.5;
const ROTATION_AMPLITUDE: f64 = 1.2;
const ROTATION_FREQ_HZ: f64 = 0.25;
const YAW_RATE: f64 = 0.4;

/// Generates smooth periodic motion, optionally with sensor noise.
pub struct SyntheticMotion {
    tag: String,
    tick: AtomicU64,
    sampling_period_secs: f64,
    sensor_noise: Option<GaussianNoise>,
    rng: Mutex<StdRng>,
    available: bool,
}

impl SyntheticMotion {
    pub fn new(
        tag: &str,
        sampling_period_millis: u64,
        add_sensor_noise: bool,
    ) -> Result<Self, SamplerError> {
        let sensor_noise = if add_sensor_noise {
            Some(GaussianNoise::new(GAUSSIAN_SENSOR_MEAN, GAUSSIAN_SENSOR_STDEV)?)
        } else {
            None
        };
        Ok(Self {
            tag: tag.to_string(),
            tick: AtomicU64::new(0),
            sampling_period_secs: sampling_period_millis as f64 / 1000.0,
            sensor_noise,
            rng: Mutex::new(StdRng::from_entropy()),
            available: true,
        })
    }

    /// Emulates a device without motion hardware.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Noise-free motion at time `t` seconds.
    pub(crate) fn motion_at(t: f64) -> DeviceMotion {
        let acc_phase = TAU * ACCELERATION_FREQ_HZ * t;
        let rot_phase = TAU * ROTATION_FREQ_HZ * t;
        DeviceMotion::new(
            XYZ::new([
                ACCELERATION_AMPLITUDE * acc_phase.sin(),
                ACCELERATION_AMPLITUDE * acc_phase.cos(),
                0.5 * ACCELERATION_AMPLITUDE * (2.0 * acc_phase).sin(),
            ]),
            XYZ::new([
                ROTATION_AMPLITUDE * rot_phase.cos(),
                0.5 * ROTATION_AMPLITUDE * rot_phase.sin(),
                YAW_RATE,
            ]),
            Attitude::from_axis_angle([0.0, 0.0, 1.0], YAW_RATE * t),
        )
    }
}

#[async_trait]
impl MotionPort for SyntheticMotion {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn begin_updates(&self) -> Result<(), SamplerError> {
        Ok(())
    }

    async fn read_motion(&self) -> Result<Option<DeviceMotion>, SamplerError> {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed);
        let mut motion = Self::motion_at(tick as f64 * self.sampling_period_secs);

        if let Some(noise) = self.sensor_noise.as_ref() {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            motion.user_acceleration =
                XYZ::new(noise.add_noise(&mut rng, motion.user_acceleration.inner()));
            motion.rotation_rate = XYZ::new(noise.add_noise(&mut rng, motion.rotation_rate.inner()));
        }
        Ok(Some(motion))
    }

    async fn end_updates(&self) -> Result<(), SamplerError> {
        Ok(())
    }

    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }
}
