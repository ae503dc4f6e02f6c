use std::fmt;

/// Sampler lifecycle. Starts `Idle`; `start` moves to `Sampling`, `stop` or going to
/// background moves back to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplerState {
    #[default]
    Idle,
    Sampling,
}

impl fmt::Display for SamplerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerState::Idle => f.write_str("Idle"),
            SamplerState::Sampling => f.write_str("Sampling"),
        }
    }
}
