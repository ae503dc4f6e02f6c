use chart_rs::{ChannelSelector, ChartView, GnuplotRenderer};
use sampler_rs::services::run_mock_service;
use sampler_rs::SamplerConfig;
use tokio::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = SamplerConfig::default();
    let sampler = match run_mock_service("Synthetic", &config, true).await {
        Ok(sampler) => sampler,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let selector = ChannelSelector::new();
    let view = ChartView::attach(
        GnuplotRenderer::new(),
        sampler.get_tag(),
        sampler.history(),
        &selector,
    );
    view.start(Duration::from_millis(200));

    // Cycle through the channels, five seconds each.
    for index in [0, 1, 2] {
        if let Err(e) = selector.select(index) {
            log::error!("{}", e);
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
    sampler.stop().await;
}
