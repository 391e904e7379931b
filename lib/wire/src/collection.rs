//! Collection management messages.

use crate::common::{DataType, IndexType, KeyValuePair, LsnContext, Status};

#[derive(Clone, PartialEq, prost::Message)]
pub struct IndexColumnParam {
    #[prost(string, tag = "1")]
    pub column_name: String,
    #[prost(enumeration = "IndexType", tag = "2")]
    pub index_type: i32,
    #[prost(enumeration = "DataType", tag = "3")]
    pub data_type: i32,
    #[prost(uint32, tag = "4")]
    pub dimension: u32,
    #[prost(message, repeated, tag = "5")]
    pub extra_params: Vec<KeyValuePair>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RepositoryConfig {
    #[prost(enumeration = "repository_config::RepositoryType", tag = "1")]
    pub repository_type: i32,
    #[prost(string, tag = "2")]
    pub repository_name: String,
    #[prost(oneof = "repository_config::Entity", tags = "3")]
    pub entity: Option<repository_config::Entity>,
}

pub mod repository_config {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum RepositoryType {
        RtDatabase = 0,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Database {
        /// mysql://host:port/database
        #[prost(string, tag = "1")]
        pub connection_uri: String,
        #[prost(string, tag = "2")]
        pub table_name: String,
        #[prost(string, tag = "3")]
        pub user: String,
        #[prost(string, tag = "4")]
        pub password: String,
    }

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Entity {
        #[prost(message, tag = "3")]
        Database(Database),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CollectionConfig {
    #[prost(string, tag = "1")]
    pub collection_name: String,
    #[prost(uint64, tag = "2")]
    pub max_docs_per_segment: u64,
    #[prost(string, repeated, tag = "3")]
    pub forward_column_names: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub index_column_params: Vec<IndexColumnParam>,
    #[prost(message, optional, tag = "5")]
    pub repository_config: Option<RepositoryConfig>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CollectionName {
    #[prost(string, tag = "1")]
    pub collection_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CollectionInfo {
    #[prost(message, optional, tag = "1")]
    pub config: Option<CollectionConfig>,
    #[prost(enumeration = "collection_info::CollectionStatus", tag = "2")]
    pub status: i32,
    #[prost(string, tag = "3")]
    pub uuid: String,
    #[prost(message, optional, tag = "4")]
    pub latest_lsn_context: Option<LsnContext>,
    #[prost(uint64, tag = "5")]
    pub magic_number: u64,
}

pub mod collection_info {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum CollectionStatus {
        CsInitialized = 0,
        CsServing = 1,
        CsDropped = 2,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DescribeCollectionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub collection: Option<CollectionInfo>,
}

/// Empty repository name lists every collection
#[derive(Clone, PartialEq, prost::Message)]
pub struct ListCondition {
    #[prost(string, tag = "1")]
    pub repository_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListCollectionsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub collections: Vec<CollectionInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CollectionStats {
    #[prost(string, tag = "1")]
    pub collection_name: String,
    #[prost(string, tag = "2")]
    pub collection_path: String,
    #[prost(uint64, tag = "3")]
    pub total_doc_count: u64,
    #[prost(uint64, tag = "4")]
    pub total_segment_count: u64,
    #[prost(uint64, tag = "5")]
    pub total_index_file_count: u64,
    #[prost(uint64, tag = "6")]
    pub total_index_file_size: u64,
    #[prost(message, repeated, tag = "7")]
    pub segment_stats: Vec<collection_stats::SegmentStats>,
}

pub mod collection_stats {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum SegmentState {
        SsCreated = 0,
        SsWriting = 1,
        SsDumping = 2,
        SsCompacting = 3,
        SsPersist = 4,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct SegmentStats {
        #[prost(uint32, tag = "1")]
        pub segment_id: u32,
        #[prost(enumeration = "SegmentState", tag = "2")]
        pub state: i32,
        #[prost(uint64, tag = "3")]
        pub doc_count: u64,
        #[prost(uint64, tag = "4")]
        pub index_file_count: u64,
        #[prost(uint64, tag = "5")]
        pub index_file_size: u64,
        #[prost(uint64, tag = "6")]
        pub min_doc_id: u64,
        #[prost(uint64, tag = "7")]
        pub max_doc_id: u64,
        #[prost(uint64, tag = "8")]
        pub min_primary_key: u64,
        #[prost(uint64, tag = "9")]
        pub max_primary_key: u64,
        #[prost(uint64, tag = "10")]
        pub min_timestamp: u64,
        #[prost(uint64, tag = "11")]
        pub max_timestamp: u64,
        #[prost(uint64, tag = "12")]
        pub min_lsn: u64,
        #[prost(uint64, tag = "13")]
        pub max_lsn: u64,
        #[prost(string, tag = "14")]
        pub segment_path: String,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StatsCollectionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub collection_stats: Option<CollectionStats>,
}
