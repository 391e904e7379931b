//! Wire responses to domain records.

use proxima_core::{
    CollectionConfig, CollectionInfo, CollectionStat, CollectionStatus, ColumnIndex, DataType,
    DatabaseRepository, Document, Error, IndexType, LsnContext, QueryResponse, Range,
    RepositoryType, Result, SegmentState, SegmentStat,
};
use proxima_wire::collection_stats::SegmentStats;
use proxima_wire::repository_config::Entity;
use proxima_wire::{IndexColumnParam, RepositoryConfig};

use crate::generic::decode_value;

fn decode_column(param: IndexColumnParam) -> ColumnIndex {
    ColumnIndex {
        name: param.column_name,
        index_type: IndexType::from_code(param.index_type),
        data_type: DataType::from_code(param.data_type),
        dimension: param.dimension,
        extra_params: param
            .extra_params
            .into_iter()
            .map(|kv| (kv.key, kv.value))
            .collect(),
    }
}

fn decode_repository(config: RepositoryConfig) -> Result<DatabaseRepository> {
    let repository_type = RepositoryType::from_code(config.repository_type);
    match (repository_type, config.entity) {
        (RepositoryType::Database, Some(Entity::Database(db))) => Ok(DatabaseRepository {
            name: config.repository_name,
            repository_type,
            connection: db.connection_uri,
            table_name: db.table_name,
            user: db.user,
            password: db.password,
        }),
        (RepositoryType::Database, None) => Err(Error::Validation(format!(
            "repository {} has no database entity",
            config.repository_name
        ))),
        (RepositoryType::Unknown(code), _) => Err(Error::Validation(format!(
            "unknown repository type {}",
            code
        ))),
    }
}

pub fn decode_collection_config(config: proxima_wire::CollectionConfig) -> Result<CollectionConfig> {
    Ok(CollectionConfig {
        collection_name: config.collection_name,
        max_docs_per_segment: config.max_docs_per_segment,
        forward_columns: config.forward_column_names,
        columns: config.index_column_params.into_iter().map(decode_column).collect(),
        repository: config.repository_config.map(decode_repository).transpose()?,
    })
}

pub fn decode_collection_info(info: proxima_wire::CollectionInfo) -> Result<CollectionInfo> {
    let config = info
        .config
        .ok_or_else(|| Error::Validation(format!("collection {} has no config", info.uuid)))?;
    Ok(CollectionInfo {
        config: decode_collection_config(config)?,
        status: CollectionStatus::from_code(info.status),
        uuid: info.uuid,
        latest_lsn_context: info.latest_lsn_context.map(|ctx| LsnContext {
            lsn: ctx.lsn,
            context: ctx.context,
        }),
        magic_number: info.magic_number,
    })
}

fn decode_segment(stats: SegmentStats) -> SegmentStat {
    SegmentStat {
        segment_id: stats.segment_id,
        state: SegmentState::from_code(stats.state),
        doc_count: stats.doc_count,
        index_file_count: stats.index_file_count,
        index_file_size: stats.index_file_size,
        docs_range: Range {
            min: stats.min_doc_id,
            max: stats.max_doc_id,
        },
        primary_key_range: Range {
            min: stats.min_primary_key,
            max: stats.max_primary_key,
        },
        timestamp_range: Range {
            min: stats.min_timestamp,
            max: stats.max_timestamp,
        },
        lsn_range: Range {
            min: stats.min_lsn,
            max: stats.max_lsn,
        },
        segment_path: stats.segment_path,
    }
}

pub fn decode_collection_stat(stats: proxima_wire::CollectionStats) -> Result<CollectionStat> {
    Ok(CollectionStat {
        collection_name: stats.collection_name,
        collection_path: stats.collection_path,
        total_doc_count: stats.total_doc_count,
        total_segment_count: stats.total_segment_count,
        total_index_file_count: stats.total_index_file_count,
        total_index_file_size: stats.total_index_file_size,
        segment_stats: stats
            .segment_stats
            .into_iter()
            .map(decode_segment)
            .collect(),
    })
}

/// Forward columns without a value are left out
pub fn decode_document(doc: proxima_wire::Document) -> Document {
    let forward_columns = doc
        .forward_column_values
        .into_iter()
        .filter_map(|kv| {
            let value = kv.value.as_ref().and_then(decode_value)?;
            Some((kv.key, value))
        })
        .collect();
    Document {
        primary_key: doc.primary_key,
        score: doc.score,
        forward_columns,
    }
}

pub fn decode_query_response(response: proxima_wire::QueryResponse) -> QueryResponse {
    QueryResponse {
        debug_info: response.debug_info,
        latency_us: response.latency_us,
        results: response
            .results
            .into_iter()
            .map(|result| result.documents.into_iter().map(decode_document).collect())
            .collect(),
    }
}
