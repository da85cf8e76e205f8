use crate::Accessors;

use tablemap_core::RecordDescriptor;

/// A type mapped to a table row. Implemented with `#[derive(Record)]`.
///
/// Records are built with `Default` when loaded from rows, then populated
/// through the accessor table.
pub trait Record: Default + Send + Sync + 'static {
    /// The record's declaration: table, fields and role attributes.
    fn descriptor() -> &'static RecordDescriptor;

    /// Get and set closures for every mapped field.
    fn accessors() -> &'static Accessors<Self>;
}
