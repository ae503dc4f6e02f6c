pub mod axis;
pub mod channel;
pub mod device_motion;
pub mod motion_sample;
pub mod scene_phase;

pub use axis::Axis;
pub use channel::{Channel, ChannelError};
pub use device_motion::DeviceMotion;
pub use motion_sample::MotionSample;
pub use scene_phase::ScenePhase;
