mod column;
pub use column::ColumnInfo;

mod table;
pub use table::TableRef;

mod ty;
pub use ty::SqlType;
