use std::fmt;

/// The declared type of a record property.
///
/// Nullability is tracked separately on the field; `Option<i32>` and `i32`
/// both declare [`Type::I32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// String type
    String,

    /// Raw bytes
    Bytes,

    /// 128-bit universally unique identifier
    Uuid,

    /// Calendar date without a time zone
    Date,

    /// Date and time without a time zone
    DateTime,

    /// Date and time with a fixed UTC offset
    DateTimeTz,
}

impl Type {
    /// The Rust spelling of the type, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::I16 => "i16",
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::F32 => "f32",
            Type::F64 => "f64",
            Type::String => "String",
            Type::Bytes => "Vec<u8>",
            Type::Uuid => "Uuid",
            Type::Date => "NaiveDate",
            Type::DateTime => "NaiveDateTime",
            Type::DateTimeTz => "DateTime",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Type::I16 | Type::I32 | Type::I64)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
