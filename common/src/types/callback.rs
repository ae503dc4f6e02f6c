use std::sync::Arc;
use uuid::Uuid;

/// Listener callback. Receives the id it was registered with and a shared snapshot.
pub type Callback<T> = Arc<dyn Fn(Uuid, Arc<T>) + Send + Sync>;
