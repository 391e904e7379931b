use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::kind::ValueKind;

/// A dynamically typed client value
///
/// Forward column values, index column values inside written rows and query
/// params all arrive as `Value`. Which variants may actually travel depends on
/// where the value is used, see [`GENERIC_VALUE_KINDS`](crate::GENERIC_VALUE_KINDS)
/// and [`FEATURE_KINDS`](crate::FEATURE_KINDS).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    Int8(i8),
    Int32(i32),
    Int64(i64),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Null,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int8(_) => ValueKind::Int8,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Uint32(_) => ValueKind::Uint32,
            Value::Uint64(_) => ValueKind::Uint64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Null => ValueKind::Null,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = T>) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

/// Text form used when a value is sent as a string param
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Uint32(v) => write!(f, "{}", v),
            Value::Uint64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Bytes(bytes) => write_joined(f, bytes.iter()),
            Value::List(items) => write_joined(f, items.iter()),
            Value::Map(map) => {
                f.write_str("map")?;
                write_joined(f, map.iter().map(|(k, v)| format!("{}:{}", k, v)))
            }
            Value::Null => f.write_str("<nil>"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    String => String,
    bool => Bool,
    i8 => Int8,
    i32 => Int32,
    i64 => Int64,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

// Machine-native integers travel as their 64-bit counterparts
impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int64(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint64(v as u64)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

macro_rules! impl_from_list {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for Value {
                fn from(items: Vec<$ty>) -> Self {
                    Value::List(items.into_iter().map(Value::from).collect())
                }
            }

            impl From<&[$ty]> for Value {
                fn from(items: &[$ty]) -> Self {
                    Value::List(items.iter().copied().map(Value::from).collect())
                }
            }

            impl From<Vec<Vec<$ty>>> for Value {
                fn from(rows: Vec<Vec<$ty>>) -> Self {
                    Value::List(rows.into_iter().map(Value::from).collect())
                }
            }
        )*
    };
}

impl_from_list!(bool, i8, i32, i64, u32, u64, f32, f64);

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_integers_widen() {
        assert_eq!(Value::from(10isize), Value::Int64(10));
        assert_eq!(Value::from(10usize), Value::Uint64(10));
        assert_eq!(Value::from(10isize).kind(), ValueKind::Int64);
    }

    #[test]
    fn test_list_conversion() {
        let v = Value::from(vec![1.0f32, 2.0]);
        assert_eq!(v.kind(), ValueKind::List);
        assert_eq!(v.as_list().unwrap()[1], Value::Float32(2.0));

        let m = Value::from(vec![vec![1i8, 2], vec![3, 4]]);
        assert_eq!(m.as_list().unwrap()[0].kind(), ValueKind::List);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(10).to_string(), "10");
        assert_eq!(Value::from(0.5f32).to_string(), "0.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("ef").to_string(), "ef");
        assert_eq!(Value::from(vec![1u32, 2, 3]).to_string(), "[1 2 3]");
        assert_eq!(Value::from(vec![7u8, 8]).to_string(), "[7 8]");
        assert_eq!(Value::Null.to_string(), "<nil>");

        let mut map = BTreeMap::new();
        map.insert("a".to_string(), Value::from(1));
        assert_eq!(Value::from(map).to_string(), "map[a:1]");
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }
}
