pub mod mock;
pub mod production;
pub mod replay;

pub use mock::{ScriptedMotion, SyntheticMotion};
pub use production::PhyphoxMotion;
pub use replay::ReplayMotion;
