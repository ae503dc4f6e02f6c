//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying listeners
//! of new values of type `T`, and an [`ObservableState`] container that publishes a
//! snapshot of its value every time it changes.
//!
//! ### Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use publisher::{Listener, ObservableState};
//! use uuid::Uuid;
//!
//! let counter = ObservableState::new(0usize);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let mut listener = Listener::new({
//!     let seen = seen.clone();
//!     move |_id: Uuid, value: Arc<usize>| seen.lock().unwrap().push(*value)
//! });
//! let id = counter.subscribe(&mut listener);
//!
//! counter.update(|value| *value += 1);
//! counter.set(10);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 10]);
//! counter.unsubscribe(id).unwrap();
//! ```

pub mod listener;
pub mod macros;
pub mod observable;
pub mod publisher;

pub use listener::Listener;
pub use observable::ObservableState;
pub use publisher::{Publishable, Publisher};

use thiserror::Error;

#[derive(PartialEq, Clone, Debug, Error)]
pub enum PublisherError {
    #[error("{0}")]
    ListenerNotFound(String),
}
