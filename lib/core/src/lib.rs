//! # Proxima Core
//!
//! Client side model of the Proxima BE vector search engine.
//!
//! This crate holds everything that does not depend on the wire schema:
//!
//! - [`Value`] - Dynamic scalar, list and map values used for forward columns
//! - [`Features`] - Typed feature vectors and matrices with shape inference
//! - [`encode_features`] - Little-endian packing of features into request bytes
//! - [`QueryOptions`] - Validated knn query knobs
//! - [`CollectionConfig`], [`WriteRequest`], [`Document`] - Domain records
//!
//! ## Example
//!
//! ```rust
//! use proxima_core::{encode_features, DataType, Features};
//!
//! let features = Features::from(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]]);
//! let descriptor = features.describe().unwrap();
//! assert_eq!(descriptor.data_type, DataType::VectorFp32);
//! assert_eq!(descriptor.dimension, 2);
//! assert_eq!(descriptor.batch_count, 2);
//!
//! let bytes = encode_features(descriptor.batch_count, &features).unwrap();
//! assert_eq!(bytes.len(), 16);
//! ```

pub mod collection;
pub mod config;
pub mod document;
pub mod encode;
pub mod error;
pub mod feature;
pub mod kind;
pub mod options;
pub mod status;
pub mod types;
pub mod value;
pub mod write;

pub use collection::{
    CollectionConfig, CollectionInfo, CollectionStat, ColumnIndex, DatabaseRepository,
    LsnContext, Range, SegmentStat,
};
pub use config::{Address, ClientConfig};
pub use document::{Document, QueryResponse};
pub use encode::{encode_features, pack_values};
pub use error::{Error, Result, RETRY_LATER_CODE};
pub use feature::{infer_features, FeatureDescriptor, FeatureElement, Features, Shape};
pub use kind::{FeatureKind, ValueKind, FEATURE_KINDS, GENERIC_VALUE_KINDS};
pub use options::{QueryOption, QueryOptions, QueryOptionsBuilder, DEFAULT_RADIUS, DEFAULT_TOPK, MAX_TOPK};
pub use status::{ErrorCode, Status, Version};
pub use types::{
    CollectionStatus, DataType, IndexType, OperationType, RepositoryType, SegmentState,
};
pub use value::Value;
pub use write::{Row, RowMeta, WriteRequest};
