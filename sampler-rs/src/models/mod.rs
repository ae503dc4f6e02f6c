pub mod state;

pub use state::SamplerState;
