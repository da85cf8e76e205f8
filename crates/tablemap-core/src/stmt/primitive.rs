use super::{Type, Value};
use crate::{Error, Result};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// A Rust type that can be stored in a single column.
///
/// `load` accepts the value shapes drivers commonly return for the type, so a
/// 64-bit key loads into an `i32` field when it fits and a text column loads
/// into a `Uuid` field.
pub trait Primitive: Sized {
    /// The declared property type.
    const TYPE: Type;

    /// Whether the field may hold null.
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}

impl Primitive for bool {
    const TYPE: Type = Type::Bool;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => match value.as_i64() {
                Some(v) => Ok(v != 0),
                None => Err(Error::type_conversion(value, "bool")),
            },
        }
    }
}

macro_rules! impl_integer {
    ( $( $ty:ident => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn load(value: Value) -> Result<Self> {
                    match value.as_i64().map($ty::try_from) {
                        Some(Ok(v)) => Ok(v),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_integer! {
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

impl Primitive for f32 {
    const TYPE: Type = Type::F32;

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            Value::I64(v) => Ok(v as f32),
            value => Err(Error::type_conversion(value, "f32")),
        }
    }
}

impl Primitive for f64 {
    const TYPE: Type = Type::F64;

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Primitive for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl Primitive for Uuid {
    const TYPE: Type = Type::Uuid;

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(Uuid::parse_str(&v)?),
            Value::Bytes(v) => Ok(Uuid::from_slice(&v)?),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl Primitive for NaiveDate {
    const TYPE: Type = Type::Date;

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            Value::DateTime(v) => Ok(v.date()),
            Value::String(v) => Ok(NaiveDate::parse_from_str(&v, "%Y-%m-%d")?),
            value => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }
}

impl Primitive for NaiveDateTime {
    const TYPE: Type = Type::DateTime;

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::String(v) => parse_naive_date_time(&v),
            value => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}

impl Primitive for DateTime<FixedOffset> {
    const TYPE: Type = Type::DateTimeTz;

    fn to_value(&self) -> Value {
        Value::DateTimeTz(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::DateTimeTz(v) => Ok(v),
            Value::String(v) => Ok(DateTime::parse_from_rfc3339(&v)?),
            value => Err(Error::type_conversion(value, "DateTime<FixedOffset>")),
        }
    }
}

impl Primitive for DateTime<Utc> {
    const TYPE: Type = Type::DateTimeTz;

    fn to_value(&self) -> Value {
        Value::DateTimeTz(self.fixed_offset())
    }

    fn load(value: Value) -> Result<Self> {
        DateTime::<FixedOffset>::load(value).map(|v| v.with_timezone(&Utc))
    }
}

fn parse_naive_date_time(src: &str) -> Result<NaiveDateTime> {
    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let mut last = None;
    for format in FORMATS {
        match NaiveDateTime::parse_from_str(src, format) {
            Ok(v) => return Ok(v),
            Err(err) => last = Some(err),
        }
    }

    match last {
        Some(err) => Err(err.into()),
        None => Err(Error::type_conversion(
            Value::String(src.to_string()),
            "NaiveDateTime",
        )),
    }
}
