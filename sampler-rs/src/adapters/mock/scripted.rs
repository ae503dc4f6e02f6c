use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use common::DeviceMotion;

use crate::errors::SamplerError;
use crate::ports::MotionPort;

type Reading = Result<Option<DeviceMotion>, SamplerError>;

/// Replays a fixed list of tick results, then reports no data.
///
/// Counts how often the sampler asked the device to begin and end updates.
pub struct ScriptedMotion {
    tag: String,
    readings: Mutex<VecDeque<Reading>>,
    available: bool,
    fail_begin: bool,
    begin_calls: AtomicUsize,
    end_calls: AtomicUsize,
    read_calls: AtomicUsize,
}

impl ScriptedMotion {
    pub fn new(tag: &str, readings: Vec<Reading>) -> Self {
        Self {
            tag: tag.to_string(),
            readings: Mutex::new(readings.into()),
            available: true,
            fail_begin: false,
            begin_calls: AtomicUsize::new(0),
            end_calls: AtomicUsize::new(0),
            read_calls: AtomicUsize::new(0),
        }
    }

    /// One successful reading per item of `motions`.
    pub fn from_motions(tag: &str, motions: Vec<DeviceMotion>) -> Self {
        Self::new(tag, motions.into_iter().map(|m| Ok(Some(m))).collect())
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// `begin_updates` fails with FetchData.
    pub fn failing_begin(mut self) -> Self {
        self.fail_begin = true;
        self
    }

    pub fn push(&self, reading: Reading) {
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reading);
    }

    pub fn pending(&self) -> usize {
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn begin_calls(&self) -> usize {
        self.begin_calls.load(Ordering::SeqCst)
    }

    pub fn end_calls(&self) -> usize {
        self.end_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MotionPort for ScriptedMotion {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn begin_updates(&self) -> Result<(), SamplerError> {
        self.begin_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_begin {
            return Err(SamplerError::FetchData("scripted failure".to_string()));
        }
        Ok(())
    }

    async fn read_motion(&self) -> Result<Option<DeviceMotion>, SamplerError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn end_updates(&self) -> Result<(), SamplerError> {
        self.end_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_readings_in_order_then_none() {
        let scripted = ScriptedMotion::new(
            "Test",
            vec![
                Ok(Some(DeviceMotion::default())),
                Err(SamplerError::Other("boom".to_string())),
            ],
        );
        assert_eq!(scripted.pending(), 2);
        assert_eq!(scripted.read_motion().await, Ok(Some(DeviceMotion::default())));
        assert!(scripted.read_motion().await.is_err());
        assert_eq!(scripted.read_motion().await, Ok(None));
        assert_eq!(scripted.read_calls(), 3);
    }

    #[tokio::test]
    async fn test_counts_begin_and_end() {
        let scripted = ScriptedMotion::new("Test", vec![]).failing_begin();
        assert!(scripted.begin_updates().await.is_err());
        scripted.end_updates().await.unwrap();
        assert_eq!(scripted.begin_calls(), 1);
        assert_eq!(scripted.end_calls(), 1);
    }
}
