use super::{Method, ObjectRef};
use crate::api::Error;
use crate::types::Type;
use ecow::EcoString;
use std::fmt;
use std::rc::Rc;

/// A dynamically typed value.
///
/// Scalars compare by value, arrays element-wise, and objects, methods and
/// types by identity. Cloning is always shallow.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(EcoString),
    Array(Rc<[Value]>),
    Object(ObjectRef),
    Method(Method),
    Type(Type),
}

impl Value {
    /// Human-readable name of the value's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Method(_) => "method",
            Value::Type(_) => "type",
        }
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Truthiness: `null`, `false`, zero, NaN and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(x) => *x != 0.0 && !x.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Method(_) | Value::Type(_) => true,
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::Mismatch {
            expected,
            found: self.kind_name(),
        }
    }

    /// Extract an int value.
    ///
    /// Returns error if value is not an Int.
    pub fn as_int(&self) -> Result<i64, Error> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch("int")),
        }
    }

    /// Extract a float value.
    ///
    /// Returns error if value is not a Float.
    pub fn as_float(&self) -> Result<f64, Error> {
        match self {
            Value::Float(x) => Ok(*x),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::Str(s) => Ok(s.as_str()),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], Error> {
        match self {
            Value::Array(items) => Ok(&items[..]),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_object(&self) -> Result<&ObjectRef, Error> {
        match self {
            Value::Object(object) => Ok(object),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_method(&self) -> Result<&Method, Error> {
        match self {
            Value::Method(method) => Ok(method),
            other => Err(other.mismatch("method")),
        }
    }

    /// Returns `None` for anything that is not a type, never an error: type
    /// queries treat non-type values as unrelated.
    pub fn as_type(&self) -> Option<&Type> {
        match self {
            Value::Type(ty) => Some(ty),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Standard float equality: NaN != NaN
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Method(a), Value::Method(b)) => a.ptr_eq(b),
            (Value::Type(a), Value::Type(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Object(object) => write!(f, "{:?}", object),
            Value::Method(method) => write!(f, "{:?}", method),
            Value::Type(ty) => write!(f, "<type {}>", ty),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Primitives: use native Display (no quotes, respects format flags)
            Value::Str(s) => write!(f, "{}", s),
            Value::Float(x) => write!(f, "{}", x),
            Value::Type(ty) => write!(f, "{}", ty),
            other => write!(f, "{:?}", other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value.into())
    }
}

impl From<EcoString> for Value {
    fn from(value: EcoString) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

impl From<ObjectRef> for Value {
    fn from(object: ObjectRef) -> Self {
        Value::Object(object)
    }
}

impl From<Method> for Value {
    fn from(method: Method) -> Self {
        Value::Method(method)
    }
}

impl From<Type> for Value {
    fn from(ty: Type) -> Self {
        Value::Type(ty)
    }
}

impl From<&Type> for Value {
    fn from(ty: &Type) -> Self {
        Value::Type(ty.clone())
    }
}

static_assertions::assert_impl_all!(Value: Clone, Default, fmt::Debug);
