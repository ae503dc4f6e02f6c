use log::{error, info};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;

/// Turns Ctrl+C, or the end of a timed run, into a request to go to background.
pub(crate) struct BackgroundSignal {
    notify: Arc<Notify>,
}

impl BackgroundSignal {
    fn new(notify: Arc<Notify>) -> Self {
        Self { notify }
    }

    async fn listen(&self, run_for_millis: Option<u64>) {
        if let Some(time_to_live_millis) = run_for_millis {
            tokio::time::sleep(std::time::Duration::from_millis(time_to_live_millis)).await;
            info!("Run time elapsed. Moving to background...");
        } else {
            if let Err(e) = signal::ctrl_c().await {
                error!("Error while waiting for Ctrl+C: {}", e);
                return;
            }
            info!("Ctrl+C received. Moving to background...");
        }
        self.notify.notify_one();
    }
}

pub(crate) fn listen_for_background(
    notify: Arc<Notify>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let signal = BackgroundSignal::new(notify);
        signal.listen(run_for_millis).await;
    })
}
