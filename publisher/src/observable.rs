use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use common::traits::Notifiable;

use crate::publisher::{Publishable, Publisher};
use crate::PublisherError;

/// Value container that notifies its subscribers with a snapshot after every change.
///
/// Writers are serialised by an internal lock. Subscribers are called once the lock is
/// released, so they are free to read the state back.
pub struct ObservableState<T> {
    value: RwLock<T>,
    publisher: Publisher<T>,
}

impl<T> ObservableState<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            publisher: Publisher::new(),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.read_lock().clone()
    }

    /// Runs `f` against the current value without copying it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read_lock())
    }

    /// Replaces the current value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutates the current value in place, then notifies subscribers with the result.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut value = self.write_lock();
            let result = f(&mut value);
            let snapshot = (!self.publisher.is_empty()).then(|| Arc::new(value.clone()));
            (result, snapshot)
        };
        if let Some(snapshot) = snapshot {
            self.publisher.notify_listeners(snapshot);
        }
        result
    }

    pub fn subscribe(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        self.publisher.register_listener(listener)
    }

    pub fn unsubscribe(&self, id: Uuid) -> Result<(), PublisherError> {
        self.publisher.unregister_listener(id)
    }

    pub fn subscribers(&self) -> usize {
        self.publisher.len()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, T> {
        self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, T> {
        self.value.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for ObservableState<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
