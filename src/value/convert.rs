use core::any::Any;

#[cfg(feature = "integer")]
use num_bigint::BigInt;

use crate::bytes::{ByteArrayParameter, ConstByteArrayParameter};

use super::types::{TypeKey, TypeTag, Value};

/// Conversion into a bindable [`Value`].
///
/// Implemented for every [`ParamValue`] plus a few borrowed shorthands:
/// `&str` binds as text and `&[u8]` binds as a borrowed read-only byte view.
pub trait IntoValue<'a> {
    /// Wraps `self` in the variant matching its type.
    fn into_value(self) -> Value<'a>;
}

/// Types that can be requested from a catalog.
///
/// `from_value` only succeeds for the exact variant; widening is handled by
/// the binding that stores the value, never by the requesting side.
pub trait ParamValue<'a>: IntoValue<'a> + Sized {
    /// Tag a slot requests when asked for `Self`.
    fn type_tag() -> TypeTag;

    /// Unwraps the exact variant, or `None` for any other.
    fn from_value(value: Value<'a>) -> Option<Self>;
}

macro_rules! scalar_param_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> IntoValue<'a> for $ty {
                fn into_value(self) -> Value<'a> {
                    Value::$variant(self)
                }
            }

            impl<'a> ParamValue<'a> for $ty {
                fn type_tag() -> TypeTag {
                    TypeTag::$variant
                }

                fn from_value(value: Value<'a>) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_param_value! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
    f64 => Double,
    String => Text,
}

#[cfg(feature = "integer")]
scalar_param_value! {
    BigInt => Integer,
}

impl<'a> IntoValue<'a> for ConstByteArrayParameter<'a> {
    fn into_value(self) -> Value<'a> {
        Value::ConstBytes(self)
    }
}

impl<'a> ParamValue<'a> for ConstByteArrayParameter<'a> {
    fn type_tag() -> TypeTag {
        TypeTag::ConstBytes
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::ConstBytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl<'a> IntoValue<'a> for ByteArrayParameter<'a> {
    fn into_value(self) -> Value<'a> {
        Value::Bytes(self)
    }
}

impl<'a> ParamValue<'a> for ByteArrayParameter<'a> {
    fn type_tag() -> TypeTag {
        TypeTag::Bytes
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl<'a> IntoValue<'a> for &str {
    fn into_value(self) -> Value<'a> {
        Value::Text(self.to_owned())
    }
}

impl<'a> IntoValue<'a> for &'a [u8] {
    fn into_value(self) -> Value<'a> {
        Value::ConstBytes(ConstByteArrayParameter::new(self, false))
    }
}

/// Wrapper binding any cloneable `'static` type as a custom parameter.
///
/// The stored tag is the wrapped type, so `Opaque<Mode>` can only be read
/// back as `Opaque<Mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Opaque<T>(pub T);

impl<T> Opaque<T> {
    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'a, T: Any + Clone> IntoValue<'a> for Opaque<T> {
    fn into_value(self) -> Value<'a> {
        Value::custom(self.0)
    }
}

impl<'a, T: Any + Clone> ParamValue<'a> for Opaque<T> {
    fn type_tag() -> TypeTag {
        TypeTag::Custom(TypeKey::of::<T>())
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::Custom(key, object) if key == TypeKey::of::<T>() => {
                object.downcast_ref::<T>().cloned().map(Opaque)
            }
            _ => None,
        }
    }
}
