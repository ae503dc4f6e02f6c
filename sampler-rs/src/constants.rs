/// Phyphox REST endpoints
pub(crate) const GET_CMD: &str = "/get?";
pub(crate) const CONTROL_CMD: &str = "/control?cmd=";
pub(crate) const CONFIG_CMD: &str = "/config?";
pub(crate) const START_CMD: &str = "start";
pub(crate) const STOP_CMD: &str = "stop";
pub(crate) const CLEAR_CMD: &str = "clear";

/// JSON keys
pub(crate) const STATUS: &str = "status";
pub(crate) const MEASURING: &str = "measuring";
pub(crate) const BUFFER: &str = "buffer";
pub(crate) const BUFFERS: &str = "buffers";
pub(crate) const NAME: &str = "name";

pub(crate) const CLIENT_TIMEOUT_SECS: u64 = 5;

/// Values per device motion row: acceleration (3), rotation rate (3), attitude (4)
pub(crate) const N_ROW_VALUES: usize = 10;
