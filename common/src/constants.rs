pub const N_XYZ_COORDINATES: usize = 3;
pub const N_QUATERNION_COORDINATES: usize = 4;

/// Number of scalars extracted from one device motion reading.
pub const N_MOTION_FIELDS: usize = 9;
pub const N_CHANNELS: usize = 3;

/// Maximum number of motion samples kept in history.
pub const HISTORY_CAPACITY: usize = 100;
pub const DEFAULT_UPDATE_INTERVAL_MILLIS: u64 = 100;
