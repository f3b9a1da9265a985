use std::fmt;

use crate::dict::Dict;
use crate::error::{CollectionError, Result};

/// The kind tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    UnsignedInteger,
    Integer,
    Char,
    String,
    Bool,
    FloatingPoint,
    Array,
    Dict,
    Null,
}

impl ValueKind {
    /// Whether values of this kind can be hashed and used as dict keys.
    pub fn is_hashable(self) -> bool {
        matches!(
            self,
            ValueKind::UnsignedInteger
                | ValueKind::Integer
                | ValueKind::Char
                | ValueKind::String
                | ValueKind::Bool
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::UnsignedInteger => "unsigned integer",
            ValueKind::Integer => "integer",
            ValueKind::Char => "char",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::FloatingPoint => "floating point",
            ValueKind::Array => "array",
            ValueKind::Dict => "dict",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A single datum compared, hashed and stored by the containers.
///
/// A value owns its payload: cloning deep-copies strings, arrays and dicts,
/// so two values never alias the same storage.
#[derive(Debug, Clone)]
pub enum Value {
    UnsignedInteger(u64),
    Integer(i64),
    Char(char),
    String(String),
    Bool(bool),
    FloatingPoint(f64),
    Array(Vec<Value>),
    Dict(Box<Dict>),
    /// Placeholder for "no value", used as the payload of set entries.
    Null,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::UnsignedInteger(_) => ValueKind::UnsignedInteger,
            Value::Integer(_) => ValueKind::Integer,
            Value::Char(_) => ValueKind::Char,
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
            Value::FloatingPoint(_) => ValueKind::FloatingPoint,
            Value::Array(_) => ValueKind::Array,
            Value::Dict(_) => ValueKind::Dict,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn is_hashable(&self) -> bool {
        self.kind().is_hashable()
    }

    /// Fail with [`CollectionError::NotHashable`] unless this value can be a key.
    pub fn ensure_hashable(&self) -> Result<()> {
        if self.is_hashable() {
            Ok(())
        } else {
            Err(CollectionError::NotHashable { kind: self.kind() })
        }
    }

    /// Key equality: like `==`, but both sides must be hashable.
    pub fn key_eq(&self, other: &Value) -> Result<bool> {
        self.ensure_hashable()?;
        other.ensure_hashable()?;
        Ok(self == other)
    }
}

/// Same-kind structural equality. Values of different kinds never compare
/// equal, with the exception of `Null == Null`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::UnsignedInteger(a), Value::UnsignedInteger(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::FloatingPoint(a), Value::FloatingPoint(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::UnsignedInteger(n) => write!(f, "{n}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::FloatingPoint(x) => write!(f, "{x}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Dict(dict) => write!(f, "{dict}"),
            Value::Null => f.write_str("null"),
        }
    }
}

macro_rules! value_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::UnsignedInteger(n as u64)
            }
        })*
    };
}

macro_rules! value_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Integer(n as i64)
            }
        })*
    };
}

value_from_unsigned!(u8, u16, u32, u64, usize);
value_from_signed!(i8, i16, i32, i64, isize);

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::FloatingPoint(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::Dict(Box::new(dict))
    }
}
