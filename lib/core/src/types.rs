//! Enumerations shared by the client and the engine.
//!
//! Every enum carries the numeric code used on the wire; `from_code` is lossy only
//! where noted.

use serde::{Deserialize, Serialize};

/// Type of data stored in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum DataType {
    /// Unset, the collection assembler replaces it with `VectorFp32`
    #[default]
    Undefined = 0,
    Binary = 1,
    String = 2,
    Bool = 3,
    Int32 = 4,
    Int64 = 5,
    Uint32 = 6,
    Uint64 = 7,
    Float = 8,
    Double = 9,
    /// Memory layout: `[item1 item2 item3]` at offsets 0, 4, 8
    VectorBinary32 = 20,
    /// Memory layout: `[item1 item2 item3]` at offsets 0, 8, 16
    VectorBinary64 = 21,
    VectorFp16 = 22,
    VectorFp32 = 23,
    VectorFp64 = 24,
    VectorInt4 = 25,
    VectorInt8 = 26,
    VectorInt16 = 27,
}

impl DataType {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Unknown codes map to `Undefined`
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => DataType::Binary,
            2 => DataType::String,
            3 => DataType::Bool,
            4 => DataType::Int32,
            5 => DataType::Int64,
            6 => DataType::Uint32,
            7 => DataType::Uint64,
            8 => DataType::Float,
            9 => DataType::Double,
            20 => DataType::VectorBinary32,
            21 => DataType::VectorBinary64,
            22 => DataType::VectorFp16,
            23 => DataType::VectorFp32,
            24 => DataType::VectorFp64,
            25 => DataType::VectorInt4,
            26 => DataType::VectorInt8,
            27 => DataType::VectorInt16,
            _ => DataType::Undefined,
        }
    }

    pub fn is_vector(self) -> bool {
        self.code() >= DataType::VectorBinary32.code()
    }
}

/// Index built on a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum IndexType {
    /// Unset, the collection assembler replaces it with `ProximaGraphIndex`
    #[default]
    Undefined = 0,
    /// Proxima HNSW graph index
    ProximaGraphIndex = 1,
}

impl IndexType {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            1 => IndexType::ProximaGraphIndex,
            _ => IndexType::Undefined,
        }
    }
}

/// Operation carried by a written row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum OperationType {
    #[default]
    Insert = 0,
    Update = 1,
    Delete = 2,
}

impl OperationType {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Lifecycle state of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollectionStatus {
    /// Initialized and ready for serving
    #[default]
    Initialized,
    Serving,
    /// Dropped permanently
    Dropped,
    /// A status this client does not know, kept as sent
    Unknown(i32),
}

impl CollectionStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => CollectionStatus::Initialized,
            1 => CollectionStatus::Serving,
            2 => CollectionStatus::Dropped,
            other => CollectionStatus::Unknown(other),
        }
    }
}

/// State of a storage segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentState {
    #[default]
    Created,
    Writing,
    Dumping,
    Compacting,
    Persist,
    Unknown(i32),
}

impl SegmentState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => SegmentState::Created,
            1 => SegmentState::Writing,
            2 => SegmentState::Dumping,
            3 => SegmentState::Compacting,
            4 => SegmentState::Persist,
            other => SegmentState::Unknown(other),
        }
    }
}

/// Kind of external repository a collection is synchronized from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RepositoryType {
    #[default]
    Database,
    /// A repository kind this client has no wire encoding for
    Unknown(i32),
}

impl RepositoryType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => RepositoryType::Database,
            other => RepositoryType::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_codes_round_trip() {
        for dt in [
            DataType::Binary,
            DataType::Double,
            DataType::VectorBinary32,
            DataType::VectorFp32,
            DataType::VectorInt8,
            DataType::VectorInt16,
        ] {
            assert_eq!(DataType::from_code(dt.code()), dt);
        }
        assert_eq!(DataType::from_code(13), DataType::Undefined);
        assert_eq!(DataType::VectorFp32.code(), 23);
    }

    #[test]
    fn test_vector_types() {
        assert!(DataType::VectorInt8.is_vector());
        assert!(!DataType::Double.is_vector());
        assert!(!DataType::Undefined.is_vector());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CollectionStatus::from_code(1), CollectionStatus::Serving);
        assert_eq!(CollectionStatus::from_code(7), CollectionStatus::Unknown(7));
        assert_eq!(SegmentState::from_code(4), SegmentState::Persist);
        assert_eq!(SegmentState::from_code(-2), SegmentState::Unknown(-2));
        assert_eq!(RepositoryType::from_code(0), RepositoryType::Database);
        assert_eq!(RepositoryType::from_code(3), RepositoryType::Unknown(3));
        assert_eq!(RepositoryType::from_code(-1), RepositoryType::Unknown(-1));
    }
}
