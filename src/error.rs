/// Errors returned by [`LeakyStack`](crate::LeakyStack) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A stack must be able to hold at least one element.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
    /// `pop` or `top` was called while nothing was retained.
    #[error("stack is empty")]
    EmptyStack,
}

pub type Result<T> = std::result::Result<T, Error>;
