use super::Error;

/// A record declaration that cannot be mapped onto its table.
///
/// Raised while building a table mapping: a missing or blank table
/// declaration, a missing or non-nullable id, conflicting or duplicated role
/// attributes, a mistyped version field, a column absent from the catalog,
/// an unknown table, or a schema/catalog qualifier the database does not use.
#[derive(Debug)]
pub(super) struct AnnotationError {
    message: Box<str>,
}

impl std::error::Error for AnnotationError {}

impl core::fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an annotation (configuration) error.
    pub fn annotation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Annotation(AnnotationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an annotation error.
    pub fn is_annotation(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Annotation(_)))
    }
}
