use proxima_core::Result;
use proxima_wire::{
    CollectionConfig, CollectionName, DescribeCollectionResponse, GetDocumentRequest,
    GetDocumentResponse, GetVersionRequest, GetVersionResponse, ListCollectionsResponse,
    ListCondition, QueryRequest, QueryResponse, StatsCollectionResponse, Status, WriteRequest,
};

/// One remote call per method, wire message in, wire message out
///
/// Channel failures are reported as [`proxima_core::Error::Transport`]; the
/// engine status inside a response is left to the caller.
#[tonic::async_trait]
pub trait Transport: Send + Sync {
    async fn get_version(&self, request: GetVersionRequest) -> Result<GetVersionResponse>;

    async fn create_collection(&self, request: CollectionConfig) -> Result<Status>;

    async fn drop_collection(&self, request: CollectionName) -> Result<Status>;

    async fn describe_collection(
        &self,
        request: CollectionName,
    ) -> Result<DescribeCollectionResponse>;

    async fn list_collections(&self, request: ListCondition) -> Result<ListCollectionsResponse>;

    async fn stats_collection(&self, request: CollectionName) -> Result<StatsCollectionResponse>;

    async fn write(&self, request: WriteRequest) -> Result<Status>;

    async fn query(&self, request: QueryRequest) -> Result<QueryResponse>;

    async fn get_document_by_key(&self, request: GetDocumentRequest)
        -> Result<GetDocumentResponse>;
}
