use core::any::{type_name, Any, TypeId};
use core::fmt;
use std::rc::Rc;

#[cfg(feature = "integer")]
use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::bytes::{ByteArrayParameter, ConstByteArrayParameter};

/// Runtime identity of a caller-defined type.
///
/// Equality is decided by [`TypeId`]; the name is kept for diagnostics and
/// for the `ThisPointer:`/`ThisObject:` reflection keys.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the key describing `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the tag string used inside reflection keys.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Closed set of types a binding may store or a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// `bool`.
    Bool,
    /// Built-in signed 32-bit integer.
    Int,
    /// Built-in unsigned 32-bit integer.
    UInt,
    /// Signed 64-bit integer.
    Long,
    /// Unsigned 64-bit integer.
    ULong,
    /// Double precision float.
    Double,
    /// Owned UTF-8 text.
    Text,
    /// Arbitrary-precision integer.
    #[cfg(feature = "integer")]
    Integer,
    /// Read-only byte range.
    ConstBytes,
    /// Mutable byte range.
    Bytes,
    /// Caller-defined value type.
    Custom(TypeKey),
    /// Reference to an object of the given type.
    Pointer(TypeKey),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::Int => f.write_str("i32"),
            TypeTag::UInt => f.write_str("u32"),
            TypeTag::Long => f.write_str("i64"),
            TypeTag::ULong => f.write_str("u64"),
            TypeTag::Double => f.write_str("f64"),
            TypeTag::Text => f.write_str("text"),
            #[cfg(feature = "integer")]
            TypeTag::Integer => f.write_str("integer"),
            TypeTag::ConstBytes => f.write_str("const bytes"),
            TypeTag::Bytes => f.write_str("bytes"),
            TypeTag::Custom(key) => f.write_str(key.name()),
            TypeTag::Pointer(key) => write!(f, "&{}", key.name()),
        }
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Dynamically typed value carried by bindings and slots.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    /// Stored under [`TypeTag::Bool`].
    Bool(bool),
    /// Stored under [`TypeTag::Int`]; the only variant that widens.
    Int(i32),
    /// Stored under [`TypeTag::UInt`].
    UInt(u32),
    /// Stored under [`TypeTag::Long`].
    Long(i64),
    /// Stored under [`TypeTag::ULong`].
    ULong(u64),
    /// Stored under [`TypeTag::Double`].
    Double(f64),
    /// Owned text, also the buffer of a `ValueNames` listing.
    Text(String),
    /// Arbitrary-precision integer.
    #[cfg(feature = "integer")]
    Integer(BigInt),
    /// Read-only byte view.
    ConstBytes(ConstByteArrayParameter<'a>),
    /// Mutable byte view sharing the caller's storage.
    Bytes(ByteArrayParameter<'a>),
    /// Caller-defined value or whole-object copy, keyed by its type.
    Custom(TypeKey, Rc<dyn Any>),
    /// Borrowed object answering a `ThisPointer:` query.
    Pointer(TypeKey, &'a (dyn Any + 'static)),
}

impl<'a> Value<'a> {
    /// Returns the tag of the stored variant.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::UInt(_) => TypeTag::UInt,
            Value::Long(_) => TypeTag::Long,
            Value::ULong(_) => TypeTag::ULong,
            Value::Double(_) => TypeTag::Double,
            Value::Text(_) => TypeTag::Text,
            #[cfg(feature = "integer")]
            Value::Integer(_) => TypeTag::Integer,
            Value::ConstBytes(_) => TypeTag::ConstBytes,
            Value::Bytes(_) => TypeTag::Bytes,
            Value::Custom(key, _) => TypeTag::Custom(*key),
            Value::Pointer(key, _) => TypeTag::Pointer(*key),
        }
    }

    /// Wraps a clone of `object` as a whole-object copy.
    pub fn custom<T: Any>(object: T) -> Self {
        Value::Custom(TypeKey::of::<T>(), Rc::new(object))
    }

    /// Wraps a reference to `object`.
    pub fn pointer<T: Any>(object: &'a T) -> Self {
        Value::Pointer(TypeKey::of::<T>(), object)
    }

    /// Applies the one sanctioned widening: a stored `Int` may satisfy a
    /// request for `Integer`. Any other combination is returned unchanged.
    pub(crate) fn widen_to(self, requested: TypeTag) -> Self {
        match (self, requested) {
            #[cfg(feature = "integer")]
            (Value::Int(value), TypeTag::Integer) => Value::Integer(BigInt::from(value)),
            (value, _) => value,
        }
    }
}
