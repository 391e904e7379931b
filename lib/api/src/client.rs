//! Client facade over a [`Transport`].

use proxima_core::{
    CollectionConfig, CollectionInfo, CollectionStat, Document, Error, ErrorCode, Features,
    QueryOption, QueryOptions, QueryResponse, Result, Status, Version, WriteRequest,
};
use tracing::{debug, info, warn};

use crate::collection::build_collection_config;
use crate::query::{build_query_request, build_query_request_with};
use crate::request::{
    build_get_document_request, build_list_condition, build_version_request, collection_name,
    ListFilter,
};
use crate::response::{
    decode_collection_info, decode_collection_stat, decode_document, decode_query_response,
};
use crate::transport::Transport;
use crate::write::build_write_request;

/// Version this client speaks
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An absent status is the proto default, which is success
fn check_status(status: Option<proxima_wire::Status>) -> Result<()> {
    let status = status.unwrap_or_default();
    Status::new(status.code, status.reason).into_result()
}

/// Proxima BE client
///
/// Every request is assembled and validated before the transport is used.
#[derive(Debug)]
pub struct ProximaClient<T> {
    transport: T,
    version: Version,
}

impl<T: Transport> ProximaClient<T> {
    /// Check the server version and wrap the transport
    ///
    /// Fails when the server cannot be asked for its version or runs a
    /// version this client is not compatible with.
    pub async fn connect(transport: T) -> Result<Self> {
        let response = transport.get_version(build_version_request()).await?;
        check_status(response.status)?;

        let version = Version::new(CLIENT_VERSION, response.version);
        if let Err(e) = version.check() {
            warn!(client = %version.client, server = %version.server, "incompatible proxima be");
            return Err(e);
        }
        info!(server = %version.server, "connected to proxima be");
        Ok(Self { transport, version })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn create_collection(&self, config: &CollectionConfig) -> Result<()> {
        let request = build_collection_config(config)
            .map_err(|e| Error::assembly("collection config", e))?;
        let status = self.transport.create_collection(request).await?;
        check_status(Some(status))
    }

    pub async fn drop_collection(&self, collection: &str) -> Result<()> {
        let status = self
            .transport
            .drop_collection(collection_name(collection))
            .await?;
        check_status(Some(status))
    }

    pub async fn describe_collection(&self, collection: &str) -> Result<CollectionInfo> {
        let response = self
            .transport
            .describe_collection(collection_name(collection))
            .await?;
        check_status(response.status)?;
        let info = response.collection.ok_or_else(|| {
            Error::Validation(format!("no description of collection {}", collection))
        })?;
        decode_collection_info(info)
    }

    pub async fn list_collections(&self, filters: &[ListFilter]) -> Result<Vec<CollectionInfo>> {
        let response = self
            .transport
            .list_collections(build_list_condition(filters))
            .await?;
        check_status(response.status)?;
        response
            .collections
            .into_iter()
            .map(decode_collection_info)
            .collect()
    }

    pub async fn stat_collection(&self, collection: &str) -> Result<CollectionStat> {
        let response = self
            .transport
            .stats_collection(collection_name(collection))
            .await?;
        check_status(response.status)?;
        let stats = response.collection_stats.ok_or_else(|| {
            Error::Validation(format!("no stats of collection {}", collection))
        })?;
        decode_collection_stat(stats)
    }

    /// Write rows
    ///
    /// A retry-later status from the engine is returned as is
    /// ([`Error::is_retry_later`]); any other engine failure is reported with
    /// [`ErrorCode::Unknown`] and the engine's reason.
    pub async fn write(&self, request: &WriteRequest) -> Result<()> {
        let wire = build_write_request(request).map_err(|e| Error::assembly("write request", e))?;
        let status = self.transport.write(wire).await?;
        match check_status(Some(status)) {
            Ok(()) => Ok(()),
            Err(e) if e.is_retry_later() => {
                warn!(collection = %request.collection_name, "proxima be asked to retry later");
                Err(e)
            }
            Err(Error::Remote { reason, .. }) => Err(Error::Remote {
                code: ErrorCode::Unknown.code(),
                reason,
            }),
            Err(e) => Err(e),
        }
    }

    pub async fn query(
        &self,
        collection: &str,
        column: &str,
        features: &Features,
        options: &QueryOptions,
    ) -> Result<QueryResponse> {
        let request = build_query_request(collection, column, features, options)
            .map_err(|e| Error::assembly("query request", e))?;
        self.send_query(request).await
    }

    /// Same as [`query`](Self::query), with raw options applied over the defaults
    pub async fn query_with<I>(
        &self,
        collection: &str,
        column: &str,
        features: &Features,
        options: I,
    ) -> Result<QueryResponse>
    where
        I: IntoIterator<Item = QueryOption>,
    {
        let request = build_query_request_with(collection, column, features, options)
            .map_err(|e| Error::assembly("query request", e))?;
        self.send_query(request).await
    }

    async fn send_query(&self, request: proxima_wire::QueryRequest) -> Result<QueryResponse> {
        let response = self.transport.query(request).await?;
        check_status(response.status.clone())?;
        let response = decode_query_response(response);
        debug!(
            results = response.results.len(),
            latency_us = response.latency_us,
            "query finished"
        );
        Ok(response)
    }

    pub async fn get_document_by_key(&self, collection: &str, primary_key: u64) -> Result<Document> {
        let response = self
            .transport
            .get_document_by_key(build_get_document_request(collection, primary_key))
            .await?;
        check_status(response.status)?;
        let document = response
            .document
            .ok_or_else(|| Error::Validation("null document".to_string()))?;
        Ok(decode_document(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_status_is_success() {
        assert!(check_status(None).is_ok());
        let err = check_status(Some(proxima_wire::Status {
            code: -4009,
            reason: "busy".to_string(),
        }))
        .unwrap_err();
        assert!(err.is_retry_later());
    }

    #[test]
    fn test_client_version_is_compatible_with_itself() {
        assert!(Version::new(CLIENT_VERSION, CLIENT_VERSION).compatible());
    }
}
