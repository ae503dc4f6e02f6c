use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

use common::{Channel, MotionHistory};
use publisher::{listener, Listener, ObservableState};

use crate::errors::ViewError;
use crate::frame::ChartFrame;
use crate::renderer::ChartRenderer;
use crate::selector::ChannelSelector;

/// Latest inputs of the chart. `dirty` is set whenever either of them changes.
struct Snapshot {
    history: Arc<MotionHistory>,
    channel: Channel,
    dirty: bool,
}

/// State shared with the listeners and the refresh thread.
struct ViewHandle<R> {
    tag: String,
    snapshot: Mutex<Snapshot>,
    renderer: Mutex<R>,
}

impl<R: ChartRenderer> ViewHandle<R> {
    fn on_history(&self, _id: Uuid, history: Arc<MotionHistory>) {
        let mut snapshot = self.snapshot();
        snapshot.history = history;
        snapshot.dirty = true;
    }

    fn on_channel(&self, _id: Uuid, channel: Arc<Channel>) {
        let mut snapshot = self.snapshot();
        snapshot.channel = *channel;
        snapshot.dirty = true;
    }

    fn frame(&self) -> ChartFrame {
        let snapshot = self.snapshot();
        ChartFrame::build(&snapshot.history, snapshot.channel, &self.tag)
    }

    /// Takes the pending frame, if any, clearing the dirty flag.
    fn take_dirty_frame(&self) -> Option<ChartFrame> {
        let mut snapshot = self.snapshot();
        if !snapshot.dirty {
            return None;
        }
        snapshot.dirty = false;
        Some(ChartFrame::build(
            &snapshot.history,
            snapshot.channel,
            &self.tag,
        ))
    }

    fn render(&self, frame: &ChartFrame) -> Result<(), ViewError> {
        self.renderer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .render(frame)
    }

    fn snapshot(&self) -> MutexGuard<'_, Snapshot> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Chart of the selected channel over the sampler history.
///
/// Every history or channel change marks the view dirty. Dirty views are drawn by the
/// refresh thread (see [`ChartView::start`]) or on demand with [`ChartView::render_now`].
pub struct ChartView<R: ChartRenderer + 'static> {
    handle: Arc<ViewHandle<R>>,
    history: Arc<ObservableState<MotionHistory>>,
    channel: Arc<ObservableState<Channel>>,
    subscriptions: Mutex<Option<(Uuid, Uuid)>>,
    running: Arc<AtomicBool>,
}

impl<R: ChartRenderer + 'static> ChartView<R> {
    /// Subscribes a new view to `history` and `selector`.
    pub fn attach(
        renderer: R,
        tag: &str,
        history: Arc<ObservableState<MotionHistory>>,
        selector: &ChannelSelector,
    ) -> Self {
        let channel = selector.state();
        let handle = Arc::new(ViewHandle {
            tag: tag.to_string(),
            snapshot: Mutex::new(Snapshot {
                history: Arc::new(MotionHistory::default()),
                channel: Channel::default(),
                dirty: true,
            }),
            renderer: Mutex::new(renderer),
        });

        let mut history_listener: Listener<MotionHistory> = listener!(handle.on_history);
        let mut channel_listener: Listener<Channel> = listener!(handle.on_channel);
        let history_id = history.subscribe(&mut history_listener);
        let channel_id = channel.subscribe(&mut channel_listener);

        // Seeded under the snapshot lock after subscribing; racing notifications land after it.
        {
            let mut snapshot = handle.snapshot();
            snapshot.history = Arc::new(history.get());
            snapshot.channel = channel.get();
        }

        Self {
            handle,
            history,
            channel,
            subscriptions: Mutex::new(Some((history_id, channel_id))),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawns the refresh thread. It draws the latest frame every `refresh_period` if anything
    /// changed, until the view is dropped. Calling it again has no effect.
    pub fn start(&self, refresh_period: Duration) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        let handle = Arc::clone(&self.handle);
        let running = Arc::clone(&self.running);
        thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let start_time = Instant::now();
                if let Some(frame) = handle.take_dirty_frame() {
                    if let Err(e) = handle.render(&frame) {
                        log::error!("{}", e);
                    }
                }
                let elapsed_time = start_time.elapsed();
                let sleep_time = if elapsed_time < refresh_period {
                    refresh_period - elapsed_time
                } else {
                    Duration::new(0, 0)
                };
                thread::sleep(sleep_time);
            }
        });
    }

    /// Draws the current frame right away.
    pub fn render_now(&self) -> Result<(), ViewError> {
        let frame = self.handle.frame();
        self.handle.snapshot().dirty = false;
        self.handle.render(&frame)
    }

    pub fn frame(&self) -> ChartFrame {
        self.handle.frame()
    }

    pub fn readout_lines(&self) -> [String; 3] {
        self.frame().readout_lines()
    }

    pub fn is_dirty(&self) -> bool {
        self.handle.snapshot().dirty
    }

    pub fn is_attached(&self) -> bool {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Runs `f` against the renderer.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.handle.renderer.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Stops listening to history and channel changes. The last frame stays available.
    pub fn detach(&self) {
        let ids = self
            .subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some((history_id, channel_id)) = ids {
            if let Err(e) = self.history.unsubscribe(history_id) {
                log::warn!("{}", e);
            }
            if let Err(e) = self.channel.unsubscribe(channel_id) {
                log::warn!("{}", e);
            }
        }
    }
}

impl<R: ChartRenderer + 'static> Drop for ChartView<R> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.detach();
    }
}
