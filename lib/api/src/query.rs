//! Knn query assembly.

use proxima_core::{encode_features, Error, Features, QueryOption, QueryOptions, Result};
use proxima_wire::query_request::{KnnQueryParam, QueryParam, QueryType};
use proxima_wire::QueryRequest;
use tracing::debug;

use crate::collection::key_value_pairs;

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::Validation(format!("{} {} overflows u32", what, value)))
}

/// Assemble a knn query on `column` of `collection`
pub fn build_query_request(
    collection: &str,
    column: &str,
    features: &Features,
    options: &QueryOptions,
) -> Result<QueryRequest> {
    let descriptor = features.describe()?;
    let encoded = encode_features(descriptor.batch_count, features)?;

    debug!(
        collection,
        column,
        data_type = ?descriptor.data_type,
        dimension = descriptor.dimension,
        batch_count = descriptor.batch_count,
        topk = options.topk,
        "assembled query request"
    );

    let knn = KnnQueryParam {
        column_name: column.to_string(),
        topk: options.topk,
        features: encoded,
        batch_count: to_u32(descriptor.batch_count, "batch count")?,
        dimension: to_u32(descriptor.dimension, "dimension")?,
        data_type: descriptor.data_type.code(),
        radius: options.radius,
        is_linear: options.linear,
        extra_params: key_value_pairs(&options.extra_params),
    };
    Ok(QueryRequest {
        query_type: QueryType::QtKnn as i32,
        collection_name: collection.to_string(),
        debug_mode: options.debug,
        query_param: Some(QueryParam::KnnParam(knn)),
    })
}

/// Resolve raw options first, then assemble; any rejected option aborts
pub fn build_query_request_with<I>(
    collection: &str,
    column: &str,
    features: &Features,
    options: I,
) -> Result<QueryRequest>
where
    I: IntoIterator<Item = QueryOption>,
{
    let options = QueryOptions::from_options(options)?;
    build_query_request(collection, column, features, &options)
}
