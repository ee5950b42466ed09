/// Describes Cronward specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the error on the client side.
    ClientError,
    /// Requested entity doesn't exist.
    NotFound,
    /// Operation conflicts with the current state of the entity.
    Conflict,
    /// Remote execution agent failed to handle the request.
    Upstream,
    /// Local storage is temporarily unavailable.
    Unavailable,
    /// Unknown error.
    Unknown,
}

impl ErrorKind {
    /// Indicates whether the same request may succeed if retried later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream | Self::Unavailable)
    }
}
