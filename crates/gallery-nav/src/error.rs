use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
    #[error("no tokio runtime available to drive the slideshow")]
    NoRuntime,
}
