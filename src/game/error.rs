/// Errors raised while constructing a [`World`](super::World)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("grid width must be at least 2, got {0}")]
    WidthTooSmall(usize),

    #[error("start index {index} is outside a grid of {size} cells")]
    StartOutOfRange { index: usize, size: usize },

    #[error("start length must be at least 1")]
    ZeroLength,
}
