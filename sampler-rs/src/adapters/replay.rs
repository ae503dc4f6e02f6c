use async_trait::async_trait;
use csv::ReaderBuilder;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use common::{CircularReader, DeviceMotion};

use crate::constants::N_ROW_VALUES;
use crate::errors::SamplerError;
use crate::ports::MotionPort;

/// Replays recorded device motion from a CSV file, wrapping around at the end.
///
/// The file has a header row and the columns `ax,ay,az,rx,ry,rz,qw,qx,qy,qz`.
pub struct ReplayMotion {
    tag: String,
    readings: Mutex<CircularReader<DeviceMotion>>,
}

impl ReplayMotion {
    pub fn from_csv(tag: &str, file_path: impl AsRef<Path>) -> Result<Self, SamplerError> {
        let motions = load_motions(file_path.as_ref())?;
        let readings = CircularReader::try_from(motions).map_err(SamplerError::ReplayLoad)?;
        Ok(Self {
            tag: tag.to_string(),
            readings: Mutex::new(readings),
        })
    }

    pub fn len(&self) -> usize {
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_motions(file_path: &Path) -> Result<Vec<DeviceMotion>, SamplerError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(file_path)
        .map_err(|e| SamplerError::ReplayLoad(e.to_string()))?;

    let mut motions = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| SamplerError::ReplayLoad(e.to_string()))?;
        let row = record
            .iter()
            .map(|s| s.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| SamplerError::ReplayLoad(format!("Row {}: {}", line + 1, e)))?;
        if row.len() != N_ROW_VALUES {
            return Err(SamplerError::ReplayLoad(format!(
                "Row {}: expected {} columns, found {}",
                line + 1,
                N_ROW_VALUES,
                row.len()
            )));
        }
        let motion = DeviceMotion::try_from(row)
            .map_err(|e| SamplerError::ReplayLoad(format!("Row {}: {}", line + 1, e)))?;
        motions.push(motion);
    }
    Ok(motions)
}

#[async_trait]
impl MotionPort for ReplayMotion {
    async fn is_available(&self) -> bool {
        true
    }

    async fn begin_updates(&self) -> Result<(), SamplerError> {
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
        Ok(())
    }

    async fn read_motion(&self) -> Result<Option<DeviceMotion>, SamplerError> {
        let mut readings = self.readings.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(Some(readings.next_element()))
    }

    async fn end_updates(&self) -> Result<(), SamplerError> {
        Ok(())
    }

    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }
}
