mod primitive;
pub use primitive::Primitive;

mod ty;
pub use ty::Type;

mod typed_value;
pub use typed_value::TypedValue;

mod value;
pub use value::Value;
