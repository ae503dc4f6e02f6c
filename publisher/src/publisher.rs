use dashmap::DashMap;
use rayon::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use common::traits::Notifiable;
use common::types::Callback;

use crate::PublisherError;

pub trait Publishable<T> {
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid;
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError>;
    fn unregister_all(&self);
    fn notify_listeners(&self, data: Arc<T>);
}

/// Record of registered listeners that will be notified of updates
#[derive(Clone)]
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Callback<T>>>,
}

impl<T> Publisher<T> {
    /// Creates a new `Publisher` instance with no registered listeners.
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }

    /// Returns true if no listeners registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Returns number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Publishable<T> for Publisher<T>
where
    T: Send + Sync + 'static,
{
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        let callback = listener.get_callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        self.listeners.insert(listener_id, callback);
        log::debug!("Registered listener {}", listener_id);
        listener_id
    }

    fn unregister_all(&self) {
        log::debug!("Unregistering {} listeners", self.listeners.len());
        self.listeners.clear();
    }

    /// Returns PublisherError::ListenerNotFound if no id matches with any of the registered listeners
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError> {
        self.listeners
            .remove(&listener_id)
            .map(|_| ())
            .ok_or_else(|| {
                PublisherError::ListenerNotFound(format!(
                    "Listener with id {} not found",
                    listener_id
                ))
            })
    }

    /// Calls each registered listener with the provided data. Returns once every listener is done.
    fn notify_listeners(&self, data: Arc<T>) {
        let listeners: Vec<(Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        listeners.into_par_iter().for_each(|(id, callback)| {
            callback(id, data.clone());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{listener, Listener};
    use std::sync::Mutex;

    struct TestHandler {
        data: Mutex<i32>,
    }

    impl TestHandler {
        fn new() -> Self {
            Self {
                data: Mutex::new(0),
            }
        }

        fn handle(&self, _id: Uuid, value: Arc<i32>) {
            let mut data = self.data.lock().unwrap();
            *data = *value;
        }
    }

    #[test]
    fn test_publisher_initialization() {
        let publisher = Publisher::<i32>::new();
        assert!(publisher.is_empty());
    }

    #[test]
    fn test_register_and_notify_listener() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = Listener::new({
            let handler = handler.clone();
            move |id: Uuid, value| {
                handler.handle(id, value);
            }
        });

        let listener_id = publisher.register_listener(&mut listener);
        assert_eq!(listener.get_id(), Some(listener_id));
        publisher.notify_listeners(Arc::new(42));

        assert_eq!(*handler.data.lock().unwrap(), 42);
    }

    #[test]
    fn test_register_and_notify_listener_macro() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = listener!(handler.handle);

        publisher.register_listener(&mut listener);
        publisher.notify_listeners(Arc::new(42));

        assert_eq!(*handler.data.lock().unwrap(), 42);
    }

    #[test]
    fn test_notify_every_listener() {
        let publisher = Publisher::new();
        let handlers: Vec<Arc<TestHandler>> = (0..4).map(|_| Arc::new(TestHandler::new())).collect();
        for handler in &handlers {
            let mut listener = listener!(handler.handle);
            publisher.register_listener(&mut listener);
        }
        assert_eq!(publisher.len(), 4);

        publisher.notify_listeners(Arc::new(7));
        assert!(handlers.iter().all(|h| *h.data.lock().unwrap() == 7));
    }

    #[test]
    fn test_unregister_listener() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = listener!(handler.handle);

        let listener_id = publisher.register_listener(&mut listener);
        assert_eq!(publisher.unregister_listener(listener_id), Ok(()));
        publisher.notify_listeners(Arc::new(100));

        // Should remain unchanged since listener was removed
        assert_eq!(*handler.data.lock().unwrap(), 0);
        assert!(publisher.unregister_listener(listener_id).is_err());
    }

    #[test]
    fn test_unregister_all() {
        let publisher = Publisher::<i32>::new();
        let mut listener = Listener::new(|_id: Uuid, _value: Arc<i32>| {});
        publisher.register_listener(&mut listener);
        publisher.register_listener(&mut listener);
        assert_eq!(publisher.len(), 2);
        publisher.unregister_all();
        assert!(publisher.is_empty());
    }
}
