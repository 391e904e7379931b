//! # Proxima Wire
//!
//! Protobuf messages exchanged with a Proxima BE server, written against the
//! `proxima.be.proto` package. Enum typed fields are carried as `i32` with
//! typed getters, as prost does.

pub mod collection;
pub mod common;
pub mod query;
pub mod write;

pub use collection::{
    collection_info, collection_stats, repository_config, CollectionConfig, CollectionInfo,
    CollectionName, CollectionStats, DescribeCollectionResponse, IndexColumnParam,
    ListCollectionsResponse, ListCondition, RepositoryConfig, StatsCollectionResponse,
};
pub use common::{
    generic_value, DataType, GenericKeyValue, GenericValue, GenericValueList, GetVersionRequest,
    GetVersionResponse, IndexType, KeyValuePair, LsnContext, OperationType, Status,
};
pub use query::{
    query_request, query_response, Document, GetDocumentRequest, GetDocumentResponse,
    QueryRequest, QueryResponse,
};
pub use write::{write_request, WriteRequest};

/// Fully qualified name of the gRPC service
pub const SERVICE_NAME: &str = "proxima.be.proto.ProximaService";

/// Method names of `ProximaService`
pub mod methods {
    pub const GET_VERSION: &str = "get_version";
    pub const CREATE_COLLECTION: &str = "create_collection";
    pub const DROP_COLLECTION: &str = "drop_collection";
    pub const DESCRIBE_COLLECTION: &str = "describe_collection";
    pub const LIST_COLLECTIONS: &str = "list_collections";
    pub const STATS_COLLECTION: &str = "stats_collection";
    pub const WRITE: &str = "write";
    pub const QUERY: &str = "query";
    pub const GET_DOCUMENT_BY_KEY: &str = "get_document_by_key";
}

/// Request paths of `ProximaService`, `/<service>/<method>`
pub mod paths {
    pub const GET_VERSION: &str = "/proxima.be.proto.ProximaService/get_version";
    pub const CREATE_COLLECTION: &str = "/proxima.be.proto.ProximaService/create_collection";
    pub const DROP_COLLECTION: &str = "/proxima.be.proto.ProximaService/drop_collection";
    pub const DESCRIBE_COLLECTION: &str = "/proxima.be.proto.ProximaService/describe_collection";
    pub const LIST_COLLECTIONS: &str = "/proxima.be.proto.ProximaService/list_collections";
    pub const STATS_COLLECTION: &str = "/proxima.be.proto.ProximaService/stats_collection";
    pub const WRITE: &str = "/proxima.be.proto.ProximaService/write";
    pub const QUERY: &str = "/proxima.be.proto.ProximaService/query";
    pub const GET_DOCUMENT_BY_KEY: &str = "/proxima.be.proto.ProximaService/get_document_by_key";
}
