pub mod buffers;
pub mod callback;
pub mod motion;
pub mod untimed;

pub use callback::Callback;
