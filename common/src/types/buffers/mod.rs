pub mod circular_reader;
pub mod history_buffer;

pub use crate::types::buffers::circular_reader::CircularReader;
pub use crate::types::buffers::history_buffer::{HistoryBuffer, MotionHistory};
