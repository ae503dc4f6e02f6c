// Emulates device motion without a phone

mod gaussian;
mod scripted;
mod synthetic;

pub use scripted::ScriptedMotion;
pub use synthetic::SyntheticMotion;
