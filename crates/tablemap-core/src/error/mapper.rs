use super::Error;

/// The caller broke the mapper's contract, e.g. updating a record without an
/// id or naming an unmapped property.
#[derive(Debug)]
pub(super) struct MapperError {
    message: Box<str>,
}

impl std::error::Error for MapperError {}

impl core::fmt::Display for MapperError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a mapper (caller contract) error.
    pub fn mapper(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Mapper(MapperError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapper error.
    pub fn is_mapper(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Mapper(_)))
    }
}
