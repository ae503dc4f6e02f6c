use log::{error, info, warn};
use std::io::BufRead;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::{mpsc, Notify};

use chart_rs::{ChannelSelector, ChartRenderer, ChartView, GnuplotRenderer, TextRenderer};
use common::ScenePhase;
use sampler_rs::{MotionPort, MotionSampler};

use crate::commands::{Command, HELP};
use crate::config::{AppConfig, RendererKind};
use crate::shutdown;

/// Attaches a chart to `sampler` and drives both from stdin until `quit`, end of input,
/// or the shell goes to background.
pub(crate) async fn run<C>(sampler: MotionSampler<C>, config: &AppConfig)
where
    C: MotionPort + 'static,
{
    let sampler = Arc::new(sampler);
    let selector = ChannelSelector::new();
    let history = sampler.history();
    match config.renderer {
        RendererKind::Gnuplot => {
            let view = ChartView::attach(GnuplotRenderer::new(), &config.tag, history, &selector);
            shell(sampler, selector, view, config).await
        }
        RendererKind::Text => {
            let view = ChartView::attach(TextRenderer::new(), &config.tag, history, &selector);
            shell(sampler, selector, view, config).await
        }
    }
}

async fn shell<C, R>(
    sampler: Arc<MotionSampler<C>>,
    selector: ChannelSelector,
    view: ChartView<R>,
    config: &AppConfig,
) where
    C: MotionPort + 'static,
    R: ChartRenderer + 'static,
{
    view.start(config.refresh_period());
    if config.autostart {
        sampler.start().await;
    }

    let background = Arc::new(Notify::new());
    let _signal = shutdown::listen_for_background(Arc::clone(&background), config.run_for_millis);

    println!("{}", HELP);
    let mut lines = spawn_stdin_reader();
    loop {
        tokio::select! {
            _ = background.notified() => {
                sampler.handle_phase(ScenePhase::Background).await;
                break;
            }

            line = lines.recv() => match line {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => match line.parse::<Command>() {
                    Ok(command) => {
                        if execute(command, &sampler, &selector, &view).await.is_break() {
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                },
                None => break,
            }
        }
    }

    sampler.stop().await;
    view.detach();
    info!("Bye");
}

/// Forwards stdin lines from a dedicated thread. The channel closes at end of input.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Error reading command: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

async fn execute<C, R>(
    command: Command,
    sampler: &MotionSampler<C>,
    selector: &ChannelSelector,
    view: &ChartView<R>,
) -> ControlFlow<()>
where
    C: MotionPort + 'static,
    R: ChartRenderer + 'static,
{
    match command {
        Command::Start => sampler.start().await,
        Command::Stop => sampler.stop().await,
        Command::Select(index) => match selector.select(index) {
            Ok(channel) => info!("Showing {}", channel),
            Err(e) => warn!("{}", e),
        },
        Command::Phase(phase) => sampler.handle_phase(phase).await,
        Command::Show => {
            let frame = view.frame();
            println!("{} ({})", frame.title, sampler.current_state());
            for line in frame.readout_lines() {
                println!("{}", line);
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}
