//! # Crate chart-rs
//!
//! Live chart of the motion history: a channel selector picks acceleration, rotation rate
//! or attitude quaternion, and one line per axis (X red, Y green, Z blue) is drawn against
//! the position of each sample in the history, together with the latest values as text.
//!
//! Frames are pure projections of a history snapshot ([`ChartFrame`]); drawing is done by a
//! [`ChartRenderer`], either a gnuplot window or the log.

mod errors;
mod frame;
mod renderer;
mod selector;
mod view;

pub use errors::ViewError;
pub use frame::{ChartFrame, Series};
pub use renderer::{ChartRenderer, GnuplotRenderer, TextRenderer};
pub use selector::ChannelSelector;
pub use view::ChartView;
