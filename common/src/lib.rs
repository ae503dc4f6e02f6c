//! Shared types for the `motion-scope` workspace: device motion readings, the
//! nine-scalar motion record kept in history, display channels and the bounded
//! history buffer.

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::Notifiable;

// Re-export types
#[doc(inline)]
pub use types::buffers::{CircularReader, HistoryBuffer, MotionHistory};
#[doc(inline)]
pub use types::motion::{Axis, Channel, ChannelError, DeviceMotion, MotionSample, ScenePhase};
#[doc(inline)]
pub use types::untimed::{Attitude, XYZ};
#[doc(inline)]
pub use types::Callback;
