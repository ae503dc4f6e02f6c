use std::sync::Arc;
use uuid::Uuid;

use common::{Channel, Notifiable};
use publisher::ObservableState;

use crate::errors::ViewError;

/// Three mutually exclusive segments choosing which channel is displayed.
#[derive(Clone)]
pub struct ChannelSelector {
    current: Arc<ObservableState<Channel>>,
}

impl ChannelSelector {
    pub fn new() -> Self {
        Self {
            current: Arc::new(ObservableState::new(Channel::default())),
        }
    }

    /// Selects the segment at `index`. Fails with InvalidChannel if `index` is out of range;
    /// the current selection is then left unchanged.
    pub fn select(&self, index: usize) -> Result<Channel, ViewError> {
        let channel = Channel::from_index(index).map_err(|_| ViewError::InvalidChannel(index))?;
        self.select_channel(channel);
        Ok(channel)
    }

    pub fn select_channel(&self, channel: Channel) {
        log::debug!("Selected channel {}", channel);
        self.current.set(channel);
    }

    pub fn current(&self) -> Channel {
        self.current.get()
    }

    pub fn current_index(&self) -> usize {
        self.current().index()
    }

    /// Segment titles, in index order.
    pub fn titles(&self) -> [&'static str; 3] {
        Channel::ALL.map(|c| c.title())
    }

    pub fn subscribe(&self, listener: &mut dyn Notifiable<Channel>) -> Uuid {
        self.current.subscribe(listener)
    }

    pub(crate) fn state(&self) -> Arc<ObservableState<Channel>> {
        Arc::clone(&self.current)
    }
}

impl Default for ChannelSelector {
    fn default() -> Self {
        Self::new()
    }
}
