use super::Error;

/// A versioned update matched no row.
///
/// The in-memory copy is stale. Callers may re-fetch and retry.
#[derive(Debug)]
pub(super) struct OptimisticLockError {
    message: Box<str>,
}

impl std::error::Error for OptimisticLockError {}

impl core::fmt::Display for OptimisticLockError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an optimistic locking error.
    pub fn optimistic_lock(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::OptimisticLock(OptimisticLockError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error was raised by a stale versioned update.
    pub fn is_optimistic_lock(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::OptimisticLock(_)))
    }
}
