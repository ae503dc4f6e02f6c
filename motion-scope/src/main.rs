use env_logger::Env;
use log::error;

use sampler_rs::{MotionSampler, PhyphoxMotion, ReplayMotion, SamplerError, SyntheticMotion};

mod app;
mod commands;
mod config;
mod shutdown;

use config::{AppConfig, Source};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = launch(&config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Builds the configured motion source and runs the shell over it.
async fn launch(config: &AppConfig) -> Result<(), SamplerError> {
    let sampler_config = config.sampler_config();
    match config.source {
        Source::Phyphox => {
            let client = PhyphoxMotion::new(&config.phyphox_config())?;
            app::run(MotionSampler::new(client, &sampler_config), config).await;
        }
        Source::Synthetic => {
            let client = SyntheticMotion::new(
                &config.tag,
                config.update_interval_millis,
                config.add_sensor_noise,
            )?;
            app::run(MotionSampler::new(client, &sampler_config), config).await;
        }
        Source::Replay => {
            let client = ReplayMotion::from_csv(&config.tag, &config.replay_path)?;
            app::run(MotionSampler::new(client, &sampler_config), config).await;
        }
    }
    Ok(())
}
