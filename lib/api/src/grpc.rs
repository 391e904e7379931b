//! gRPC transport over a tonic channel.

use proxima_core::{ClientConfig, Error, Result};
use proxima_wire::{
    paths, CollectionConfig, CollectionName, DescribeCollectionResponse, GetDocumentRequest,
    GetDocumentResponse, GetVersionRequest, GetVersionResponse, ListCollectionsResponse,
    ListCondition, QueryRequest, QueryResponse, StatsCollectionResponse, Status, WriteRequest,
};
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct GrpcTransport {
    inner: tonic::client::Grpc<Channel>,
}

impl GrpcTransport {
    /// Open a channel to the configured address
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let uri = format!("http://{}", config.address);
        let endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| Error::Transport(format!("invalid address {}: {}", uri, e)))?
            .timeout(config.timeout)
            .connect_timeout(config.timeout);
        let channel = endpoint
            .connect()
            .await
            .map_err(|e| Error::Transport(format!("failed to connect to {}: {}", uri, e)))?;
        info!(address = %config.address, "grpc channel established");
        Ok(Self::new(channel))
    }

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp>
    where
        Req: prost::Message + 'static,
        Resp: prost::Message + Default + 'static,
    {
        // Grpc<Channel> clones share the underlying connection
        let mut grpc = self.inner.clone();
        grpc.ready()
            .await
            .map_err(|e| Error::Transport(format!("service not ready: {}", e)))?;

        debug!(path, "grpc call");
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await
            .map_err(|status| {
                Error::Transport(format!("{} failed: {}", path, status.message()))
            })?;
        Ok(response.into_inner())
    }
}

#[tonic::async_trait]
impl Transport for GrpcTransport {
    async fn get_version(&self, request: GetVersionRequest) -> Result<GetVersionResponse> {
        self.unary(paths::GET_VERSION, request).await
    }

    async fn create_collection(&self, request: CollectionConfig) -> Result<Status> {
        self.unary(paths::CREATE_COLLECTION, request).await
    }

    async fn drop_collection(&self, request: CollectionName) -> Result<Status> {
        self.unary(paths::DROP_COLLECTION, request).await
    }

    async fn describe_collection(
        &self,
        request: CollectionName,
    ) -> Result<DescribeCollectionResponse> {
        self.unary(paths::DESCRIBE_COLLECTION, request).await
    }

    async fn list_collections(&self, request: ListCondition) -> Result<ListCollectionsResponse> {
        self.unary(paths::LIST_COLLECTIONS, request).await
    }

    async fn stats_collection(&self, request: CollectionName) -> Result<StatsCollectionResponse> {
        self.unary(paths::STATS_COLLECTION, request).await
    }

    async fn write(&self, request: WriteRequest) -> Result<Status> {
        self.unary(paths::WRITE, request).await
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResponse> {
        self.unary(paths::QUERY, request).await
    }

    async fn get_document_by_key(
        &self,
        request: GetDocumentRequest,
    ) -> Result<GetDocumentResponse> {
        self.unary(paths::GET_DOCUMENT_BY_KEY, request).await
    }
}
