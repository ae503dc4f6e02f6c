use async_trait::async_trait;

use common::DeviceMotion;

use crate::errors::SamplerError;

/// Source of device motion readings.
#[async_trait]
pub trait MotionPort: Send + Sync {
    /// Returns false if device motion can't be read at all.
    async fn is_available(&self) -> bool;

    /// Prepares the device before the first tick.
    async fn begin_updates(&self) -> Result<(), SamplerError>;

    /// Reads the current device motion. `Ok(None)` means the device had no data for this tick.
    async fn read_motion(&self) -> Result<Option<DeviceMotion>, SamplerError>;

    /// Releases the device once sampling stops.
    async fn end_updates(&self) -> Result<(), SamplerError>;

    fn get_tag(&self) -> &str;
}
