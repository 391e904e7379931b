use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{CollectionStatus, DataType, IndexType, RepositoryType, SegmentState};

/// Index column of a collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnIndex {
    /// Must not be empty
    pub name: String,
    /// `Undefined` is replaced by the graph index when the collection is created
    #[serde(default)]
    pub index_type: IndexType,
    /// `Undefined` is replaced by `VectorFp32` when the collection is created
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub dimension: u32,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra_params: HashMap<String, String>,
}

impl ColumnIndex {
    pub fn new(name: impl Into<String>, dimension: u32) -> Self {
        Self {
            name: name.into(),
            dimension,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_index_type(mut self, index_type: IndexType) -> Self {
        self.index_type = index_type;
        self
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }
}

/// Database a collection is synchronized from
///
/// The engine keeps the collection in sync with the table once the collection
/// is created with a repository. Only mysql connection URIs are understood
/// (`mysql://host:port/database`); an invalid URI is reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatabaseRepository {
    pub name: String,
    #[serde(default)]
    pub repository_type: RepositoryType,
    pub connection: String,
    pub table_name: String,
    pub user: String,
    pub password: String,
}

/// Configuration of a collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub collection_name: String,
    /// 0 lets the engine pick its maximum
    #[serde(default)]
    pub max_docs_per_segment: u64,
    #[serde(default)]
    pub forward_columns: Vec<String>,
    /// At least one column is required
    pub columns: Vec<ColumnIndex>,
    /// `None` for collections fed only by clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<DatabaseRepository>,
}

impl CollectionConfig {
    pub fn new(collection_name: impl Into<String>, columns: Vec<ColumnIndex>) -> Self {
        Self {
            collection_name: collection_name.into(),
            columns,
            ..Default::default()
        }
    }
}

/// Log sequence number context, a point in a collection's change stream
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LsnContext {
    pub lsn: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
}

/// Collection as described by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub config: CollectionConfig,
    pub status: CollectionStatus,
    /// Allocated by the engine
    pub uuid: String,
    pub latest_lsn_context: Option<LsnContext>,
    pub magic_number: u64,
}

/// Closed interval of counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentStat {
    pub segment_id: u32,
    pub state: SegmentState,
    pub doc_count: u64,
    pub index_file_count: u64,
    pub index_file_size: u64,
    pub docs_range: Range,
    pub primary_key_range: Range,
    pub timestamp_range: Range,
    pub lsn_range: Range,
    pub segment_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionStat {
    pub collection_name: String,
    pub collection_path: String,
    pub total_doc_count: u64,
    pub total_segment_count: u64,
    pub total_index_file_count: u64,
    /// Bytes
    pub total_index_file_size: u64,
    pub segment_stats: Vec<SegmentStat>,
}
