use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use common::{DeviceMotion, MotionHistory, MotionSample, ScenePhase};
use publisher::ObservableState;

use crate::adapters::{PhyphoxMotion, ReplayMotion, SyntheticMotion};
use crate::config::{PhyphoxConfig, SamplerConfig};
use crate::errors::SamplerError;
use crate::models::SamplerState;
use crate::ports::MotionPort;

/// Running tick loop, owned by the sampler while `Sampling`.
struct SamplingSession {
    abort_signal: Arc<Notify>,
    handle: JoinHandle<()>,
}

/// Samples device motion at a fixed interval into a bounded, observable history.
pub struct MotionSampler<C>
where
    C: MotionPort + 'static,
{
    client: Arc<C>,
    history: Arc<ObservableState<MotionHistory>>,
    state: Arc<ObservableState<SamplerState>>,
    session: Mutex<Option<SamplingSession>>,
    update_interval: Duration,
}

impl<C> MotionSampler<C>
where
    C: MotionPort + 'static,
{
    pub fn new(client: C, config: &SamplerConfig) -> Self {
        Self {
            client: Arc::new(client),
            history: Arc::new(ObservableState::new(MotionHistory::new(
                config.history_capacity,
            ))),
            state: Arc::new(ObservableState::new(SamplerState::Idle)),
            session: Mutex::new(None),
            update_interval: config.update_interval(),
        }
    }

    /// Begins periodic sampling. Does nothing if already sampling, or if the device can't
    /// provide motion data.
    pub async fn start(&self) {
        let mut session = self.session.lock().await;
        if session.is_some() {
            info!("{}: already sampling", self.client.get_tag());
            return;
        }
        if !self.client.is_available().await {
            warn!("{}", SamplerError::Unavailable);
            return;
        }
        if let Err(e) = self.client.begin_updates().await {
            error!("Failed to start device motion updates: {}", e);
            return;
        }

        let abort_signal = Arc::new(Notify::new());
        let handle = tokio::spawn(sampling_loop(
            Arc::clone(&self.client),
            Arc::clone(&self.history),
            Arc::clone(&abort_signal),
            self.update_interval,
        ));
        *session = Some(SamplingSession {
            abort_signal,
            handle,
        });
        self.state.set(SamplerState::Sampling);
        info!(
            "{}: sampling every {} ms",
            self.client.get_tag(),
            self.update_interval.as_millis()
        );
    }

    /// Halts sampling and releases the device. Once this returns no more samples are appended.
    /// No-op while idle. History is kept.
    pub async fn stop(&self) {
        let mut session = self.session.lock().await;
        let Some(SamplingSession {
            abort_signal,
            handle,
        }) = session.take()
        else {
            debug!("{}: stop while idle", self.client.get_tag());
            return;
        };

        abort_signal.notify_one();
        if let Err(e) = handle.await {
            error!("Sampling task failed: {}", e);
        }
        if let Err(e) = self.client.end_updates().await {
            warn!("Failed to end device motion updates: {}", e);
        }
        self.state.set(SamplerState::Idle);
        info!("Motion updates stopped");
    }

    /// Reacts to the hosting shell changing lifecycle phase. Going to background stops sampling.
    pub async fn handle_phase(&self, phase: ScenePhase) {
        match phase {
            ScenePhase::Active => info!("App is active"),
            ScenePhase::Inactive => info!("App is inactive"),
            ScenePhase::Background => {
                info!("App is in background");
                self.stop().await;
            }
        }
    }

    pub fn is_sampling(&self) -> bool {
        self.current_state() == SamplerState::Sampling
    }

    pub fn current_state(&self) -> SamplerState {
        self.state.get()
    }

    pub fn history(&self) -> Arc<ObservableState<MotionHistory>> {
        Arc::clone(&self.history)
    }

    pub fn state(&self) -> Arc<ObservableState<SamplerState>> {
        Arc::clone(&self.state)
    }

    pub fn get_tag(&self) -> &str {
        self.client.get_tag()
    }

    /// The motion source being sampled.
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }
}

impl<C> Drop for MotionSampler<C>
where
    C: MotionPort + 'static,
{
    /// Ends the tick loop. The device is not released: `end_updates` needs an async context,
    /// so call `stop()` before dropping a sampling sampler.
    fn drop(&mut self) {
        if let Some(session) = self.session.get_mut().as_ref() {
            warn!(
                "{}: dropped while sampling, device updates were not ended",
                self.client.get_tag()
            );
            session.abort_signal.notify_one();
        }
    }
}

async fn sampling_loop<C: MotionPort>(
    client: Arc<C>,
    history: Arc<ObservableState<MotionHistory>>,
    abort_signal: Arc<Notify>,
    period: Duration,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            _ = abort_signal.notified() => {
                break;
            }

            _ = ticker.tick() => {
                let reading = client.read_motion().await;
                record_tick(&history, reading);
            }
        }
    }
}

/// Appends one tick's reading to the history. Returns false if the tick was skipped.
pub(crate) fn record_tick(
    history: &ObservableState<MotionHistory>,
    reading: Result<Option<DeviceMotion>, SamplerError>,
) -> bool {
    match reading {
        Ok(Some(motion)) => {
            let sample = MotionSample::from(&motion);
            history.update(|h| {
                h.push(sample);
            });
            true
        }
        Ok(None) => {
            warn!("Failed to get device motion data: no data");
            false
        }
        Err(e) => {
            warn!("Failed to get device motion data: {}", e);
            false
        }
    }
}

/// Builds a sampler reading the phone through the phyphox REST API and starts it.
///
/// An error ClientBuild is returned if the http client connecting with the phyphox app
/// cannot be created. An unreachable phone is not an error: the sampler stays idle.
pub async fn run_service(
    phyphox: &PhyphoxConfig,
    config: &SamplerConfig,
) -> Result<Arc<MotionSampler<PhyphoxMotion>>, SamplerError> {
    let client = PhyphoxMotion::new(phyphox)?;
    let sampler = Arc::new(MotionSampler::new(client, config));
    sampler.start().await;
    Ok(sampler)
}

/// Builds a sampler over generated motion and starts it.
pub async fn run_mock_service(
    tag: &str,
    config: &SamplerConfig,
    add_sensor_noise: bool,
) -> Result<Arc<MotionSampler<SyntheticMotion>>, SamplerError> {
    let client = SyntheticMotion::new(tag, config.update_interval_millis, add_sensor_noise)?;
    let sampler = Arc::new(MotionSampler::new(client, config));
    sampler.start().await;
    Ok(sampler)
}

/// Builds a sampler replaying a CSV recording and starts it.
///
/// Returns ReplayLoad if the recording can't be read.
pub async fn run_replay_service(
    tag: &str,
    file_path: impl AsRef<Path>,
    config: &SamplerConfig,
) -> Result<Arc<MotionSampler<ReplayMotion>>, SamplerError> {
    let client = ReplayMotion::from_csv(tag, file_path)?;
    let sampler = Arc::new(MotionSampler::new(client, config));
    sampler.start().await;
    Ok(sampler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedMotion;
    use common::{Attitude, XYZ};

    fn motion_with_ax(ax: f64) -> DeviceMotion {
        DeviceMotion::new(
            XYZ::new([ax, 0.0, 0.0]),
            XYZ::new([0.0, 0.0, 0.0]),
            Attitude::default(),
        )
    }

    fn fast_config() -> SamplerConfig {
        SamplerConfig {
            update_interval_millis: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_record_tick_keeps_last_100() {
        let history = ObservableState::new(MotionHistory::default());
        for i in 1..=105 {
            assert!(record_tick(&history, Ok(Some(motion_with_ax(i as f64)))));
        }
        let ax: Vec<f64> = history.read(|h| h.iter().map(|s| s.ax).collect());
        assert_eq!(ax.len(), 100);
        assert_eq!(ax[0], 6.0);
        assert_eq!(ax[99], 105.0);
    }

    #[test]
    fn test_record_tick_skips_errors_and_empty_ticks() {
        let history = ObservableState::new(MotionHistory::default());
        assert!(!record_tick(&history, Ok(None)));
        assert!(!record_tick(
            &history,
            Err(SamplerError::FetchData("timeout".to_string()))
        ));
        assert!(history.read(|h| h.is_empty()));
    }

    #[tokio::test]
    async fn test_new_sampler_is_idle() {
        let sampler = MotionSampler::new(ScriptedMotion::new("Test", vec![]), &fast_config());
        assert_eq!(sampler.current_state(), SamplerState::Idle);
        assert_eq!(sampler.get_tag(), "Test");
        assert_eq!(sampler.update_interval(), Duration::from_millis(5));
        assert!(sampler.history().read(|h| h.is_empty()));
    }

    #[tokio::test]
    async fn test_start_twice_begins_once() {
        let sampler = MotionSampler::new(ScriptedMotion::new("Test", vec![]), &fast_config());
        sampler.start().await;
        sampler.start().await;
        assert!(sampler.is_sampling());
        assert_eq!(sampler.client.begin_calls(), 1);
        sampler.stop().await;
        assert_eq!(sampler.client.end_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_begin_stays_idle() {
        let client = ScriptedMotion::new("Test", vec![]).failing_begin();
        let sampler = MotionSampler::new(client, &fast_config());
        sampler.start().await;
        assert_eq!(sampler.current_state(), SamplerState::Idle);
        sampler.stop().await;
        assert_eq!(sampler.client.end_calls(), 0);
    }

    #[tokio::test]
    async fn test_run_mock_service() {
        let sampler = run_mock_service("Test", &fast_config(), false).await.unwrap();
        assert!(sampler.is_sampling());
        tokio::time::sleep(Duration::from_millis(100)).await;
        sampler.stop().await;
        assert!(!sampler.history().read(|h| h.is_empty()));
    }

    #[tokio::test]
    async fn test_drop_while_sampling_ends_tick_loop() {
        let sampler = run_mock_service("Test", &fast_config(), false).await.unwrap();
        let history = sampler.history();
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(sampler);

        tokio::time::sleep(Duration::from_millis(30)).await;
        let len = history.read(|h| h.len());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(history.read(|h| h.len()), len);
    }

    #[tokio::test]
    async fn test_unavailable_device_leaves_no_session() {
        let client = ScriptedMotion::new("Test", vec![]).unavailable();
        let sampler = MotionSampler::new(client, &fast_config());
        sampler.start().await;
        assert_eq!(sampler.current_state(), SamplerState::Idle);
        assert_eq!(sampler.client.begin_calls(), 0);
        assert!(sampler.session.lock().await.is_none());
    }

    #[tokio::test]
    async fn test_run_replay_service_missing_file() {
        let result = run_replay_service("Test", "./missing.csv", &fast_config()).await;
        assert!(matches!(result, Err(SamplerError::ReplayLoad(_))));
    }
}
