use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("Channel index {0} doesnt exist")]
    InvalidChannel(usize),

    /// Chart could not be drawn.
    #[error("Error rendering chart: {0}")]
    Render(String),
}
