use serde::{Deserialize, Serialize};
use std::time::Duration;

use common::constants::{DEFAULT_UPDATE_INTERVAL_MILLIS, HISTORY_CAPACITY};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TAG: &str = "Phone";

/// Sampling behaviour
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub update_interval_millis: u64,
    pub history_capacity: usize,
}

impl SamplerConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_millis.max(1))
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            update_interval_millis: DEFAULT_UPDATE_INTERVAL_MILLIS,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

/// Names of the phyphox buffers holding each device motion component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhyphoxVariables {
    pub acceleration: [String; 3],
    pub rotation_rate: [String; 3],
    /// Ordered as w, x, y, z
    pub attitude: [String; 4],
}

impl PhyphoxVariables {
    /// All buffer names, in device motion row order.
    pub fn all(&self) -> Vec<&str> {
        self.acceleration
            .iter()
            .chain(self.rotation_rate.iter())
            .chain(self.attitude.iter())
            .map(String::as_str)
            .collect()
    }
}

impl Default for PhyphoxVariables {
    fn default() -> Self {
        let names = |v: [&str; 3]| v.map(str::to_string);
        Self {
            acceleration: names(["accX", "accY", "accZ"]),
            rotation_rate: names(["gyroX", "gyroY", "gyroZ"]),
            attitude: ["attW", "attX", "attY", "attZ"].map(str::to_string),
        }
    }
}

/// Connection to the phyphox app running on the phone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhyphoxConfig {
    pub base_url: String,
    pub tag: String,
    pub variables: PhyphoxVariables,
}

impl Default for PhyphoxConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tag: DEFAULT_TAG.to_string(),
            variables: PhyphoxVariables::default(),
        }
    }
}
