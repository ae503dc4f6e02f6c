use chart_rs::{ChannelSelector, ChartFrame, ChartRenderer, ChartView, TextRenderer, ViewError};
use common::Channel;
use sampler_rs::services::run_mock_service;
use sampler_rs::SamplerConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Keeps every frame it is asked to draw.
#[derive(Clone, Default)]
struct RecordingRenderer {
    frames: Arc<Mutex<Vec<ChartFrame>>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, frame: &ChartFrame) -> Result<(), ViewError> {
        self.frames.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn test_view_follows_sampler() {
    init_logger();
    let config = SamplerConfig {
        update_interval_millis: 5,
        ..Default::default()
    };
    let sampler = run_mock_service("Test", &config, false).await.unwrap();
    let selector = ChannelSelector::new();
    let renderer = RecordingRenderer::default();
    let frames = renderer.frames.clone();

    let view = ChartView::attach(renderer, sampler.get_tag(), sampler.history(), &selector);
    view.start(Duration::from_millis(10));

    tokio::time::sleep(Duration::from_millis(200)).await;
    sampler.stop().await;
    selector.select(1).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let frames = frames.lock().unwrap();
    assert!(frames.len() >= 2);
    let last = frames.last().unwrap();
    assert_eq!(last.channel, Channel::RotationRate);
    assert_eq!(last.title, "RotationRate Data");
    assert_eq!(last.tag, "Test");
    assert!(!last.is_empty());
    assert!(last.len() <= 100);

    let history = sampler.history().get();
    assert_eq!(last.len(), history.len());
    assert_eq!(
        last.readout,
        history.last().map(|s| Channel::RotationRate.project(s))
    );
}

#[tokio::test]
async fn test_view_is_idle_without_changes() {
    init_logger();
    let config = SamplerConfig::default();
    let sampler = run_mock_service("Test", &config, false).await.unwrap();
    sampler.stop().await;

    let selector = ChannelSelector::new();
    let renderer = RecordingRenderer::default();
    let frames = renderer.frames.clone();
    let view = ChartView::attach(renderer, "Test", sampler.history(), &selector);
    view.start(Duration::from_millis(5));
    tokio::time::sleep(Duration::from_millis(60)).await;

    // Only the initial frame; nothing changed afterwards.
    assert_eq!(frames.lock().unwrap().len(), 1);
}

#[test]
fn test_text_readout_before_any_sample() {
    let history = Arc::new(publisher::ObservableState::new(common::MotionHistory::default()));
    let selector = ChannelSelector::new();
    let view = ChartView::attach(TextRenderer::new(), "Test", history, &selector);
    view.render_now().unwrap();
    view.with_renderer(|r| {
        assert_eq!(
            r.last_lines().unwrap(),
            &["X: ".to_string(), "Y: ".to_string(), "Z: ".to_string()]
        )
    });
}
