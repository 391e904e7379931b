//! Kind tables
//!
//! Two fixed sets of accepted element kinds: the broad set that may travel as a
//! generic value (forward columns, query params) and the narrow numeric set that
//! may form a feature vector or matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::DataType;

/// Kind tag of a [`Value`](crate::Value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Bool,
    Int8,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Bytes,
    List,
    Map,
    Null,
}

/// Kinds accepted as generic values.
pub const GENERIC_VALUE_KINDS: &[ValueKind] = &[
    ValueKind::List,
    ValueKind::Bytes,
    ValueKind::String,
    ValueKind::Bool,
    ValueKind::Int32,
    ValueKind::Int64,
    ValueKind::Uint32,
    ValueKind::Uint64,
    ValueKind::Float32,
    ValueKind::Float64,
];

/// Kinds accepted as feature elements.
pub const FEATURE_KINDS: &[ValueKind] = &[
    ValueKind::Int8,
    ValueKind::Uint32,
    ValueKind::Uint64,
    ValueKind::Float32,
];

impl ValueKind {
    #[inline]
    pub fn is_generic(self) -> bool {
        GENERIC_VALUE_KINDS.contains(&self)
    }

    #[inline]
    pub fn is_feature(self) -> bool {
        FEATURE_KINDS.contains(&self)
    }

    /// Feature kind for this value kind, if it may appear inside a feature
    pub fn feature_kind(self) -> Option<FeatureKind> {
        match self {
            ValueKind::Int8 => Some(FeatureKind::Int8),
            ValueKind::Uint32 => Some(FeatureKind::Uint32),
            ValueKind::Uint64 => Some(FeatureKind::Uint64),
            ValueKind::Float32 => Some(FeatureKind::Float32),
            _ => None,
        }
    }

    /// Size in bytes of one packed element, `None` for kinds without a fixed width
    pub fn packed_size(self) -> Option<usize> {
        match self {
            ValueKind::Bool | ValueKind::Int8 => Some(1),
            ValueKind::Int32 | ValueKind::Uint32 | ValueKind::Float32 => Some(4),
            ValueKind::Int64 | ValueKind::Uint64 | ValueKind::Float64 => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Int8 => "int8",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Uint32 => "uint32",
            ValueKind::Uint64 => "uint64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Bytes => "bytes",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// Element kind of a feature vector or matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Int8,
    Uint32,
    Uint64,
    Float32,
}

impl FeatureKind {
    /// Vector data type this kind is sent as
    #[inline]
    pub fn data_type(self) -> DataType {
        match self {
            FeatureKind::Int8 => DataType::VectorInt8,
            FeatureKind::Uint32 => DataType::VectorBinary32,
            FeatureKind::Uint64 => DataType::VectorBinary64,
            FeatureKind::Float32 => DataType::VectorFp32,
        }
    }

    /// Size in bytes of one element
    #[inline]
    pub fn size(self) -> usize {
        match self {
            FeatureKind::Int8 => 1,
            FeatureKind::Uint32 | FeatureKind::Float32 => 4,
            FeatureKind::Uint64 => 8,
        }
    }

    #[inline]
    pub fn value_kind(self) -> ValueKind {
        match self {
            FeatureKind::Int8 => ValueKind::Int8,
            FeatureKind::Uint32 => ValueKind::Uint32,
            FeatureKind::Uint64 => ValueKind::Uint64,
            FeatureKind::Float32 => ValueKind::Float32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_kinds_are_not_all_generic() {
        // int8 is a feature element but never a standalone generic value
        assert!(ValueKind::Int8.is_feature());
        assert!(!ValueKind::Int8.is_generic());
        assert!(ValueKind::Float32.is_feature());
        assert!(ValueKind::Float32.is_generic());
    }

    #[test]
    fn test_unsupported_feature_kinds() {
        for kind in [ValueKind::Int32, ValueKind::Int64, ValueKind::String, ValueKind::Float64, ValueKind::Bytes] {
            assert!(!kind.is_feature(), "{} must not be a feature kind", kind);
            assert!(kind.feature_kind().is_none());
        }
    }

    #[test]
    fn test_feature_kind_mapping() {
        assert_eq!(FeatureKind::Int8.data_type(), DataType::VectorInt8);
        assert_eq!(FeatureKind::Uint32.data_type(), DataType::VectorBinary32);
        assert_eq!(FeatureKind::Uint64.data_type(), DataType::VectorBinary64);
        assert_eq!(FeatureKind::Float32.data_type(), DataType::VectorFp32);

        for kind in FEATURE_KINDS {
            let feature = kind.feature_kind().unwrap();
            assert_eq!(feature.value_kind(), *kind);
            assert_eq!(Some(feature.size()), kind.packed_size());
        }
    }

    #[test]
    fn test_nothing_else_is_generic() {
        assert!(!ValueKind::Map.is_generic());
        assert!(!ValueKind::Null.is_generic());
        assert_eq!(GENERIC_VALUE_KINDS.len(), 10);
    }
}
