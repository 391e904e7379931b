//! # proxima-client
//!
//! Rust client for the Proxima BE vector search engine.
//!
//! The client turns native values into the engine's wire messages and back:
//! it infers the shape and data type of feature vectors and matrices, packs
//! them into little-endian buffers, converts forward column values to and from
//! generic values, and validates requests before anything is sent.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! proxima-client --host 127.0.0.1 --port 16000 list
//! proxima-client query plants leaf --vector 0.1,0.2,0.3 --topk 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use proxima_client::prelude::*;
//!
//! # async fn run() -> proxima_client::Result<()> {
//! let transport = GrpcTransport::connect(&ClientConfig::default()).await?;
//! let client = ProximaClient::connect(transport).await?;
//!
//! let config = CollectionConfig::new("plants", vec![ColumnIndex::new("leaf", 3)]);
//! client.create_collection(&config).await?;
//!
//! let request = WriteRequest {
//!     collection_name: "plants".to_string(),
//!     meta: RowMeta {
//!         index_column_names: vec!["leaf".to_string()],
//!         forward_column_names: vec!["name".to_string()],
//!     },
//!     rows: vec![Row::insert(1)
//!         .with_index_value(vec![0.1f32, 0.2, 0.3])
//!         .with_forward_value("rose")],
//!     ..Default::default()
//! };
//! client.write(&request).await?;
//!
//! let options = QueryOptions::builder().topk(5).build()?;
//! let features = Features::from(vec![0.1f32, 0.2, 0.3]);
//! let response = client.query("plants", "leaf", &features, &options).await?;
//! for doc in &response.results[0] {
//!     println!("{} {}", doc.primary_key, doc.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `proxima-core` - Values, features, encoding, options and domain records
//! - `proxima-wire` - Protobuf messages of the Proxima BE service
//! - `proxima-api` - Request assembly, response decoding, transports and the client

pub use proxima_core::{
    encode_features, pack_values, Address, ClientConfig, CollectionConfig, CollectionInfo,
    CollectionStat, CollectionStatus, ColumnIndex, DataType, DatabaseRepository, Document, Error,
    ErrorCode, FeatureDescriptor, FeatureKind, Features, IndexType, LsnContext, OperationType,
    QueryOption, QueryOptions, QueryResponse, Range, RepositoryType, Result, Row, RowMeta,
    SegmentStat, SegmentState, Status, Value, ValueKind, Version, WriteRequest,
};

pub use proxima_api::{GrpcTransport, ListFilter, ProximaClient, Transport, CLIENT_VERSION};

/// Wire messages
pub use proxima_wire as wire;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClientConfig, CollectionConfig, ColumnIndex, DataType, Document, Error, Features,
        GrpcTransport, IndexType, ListFilter, OperationType, ProximaClient, QueryOption,
        QueryOptions, Result, Row, RowMeta, Transport, Value, WriteRequest,
    };
}
