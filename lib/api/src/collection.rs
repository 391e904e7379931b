//! Collection config assembly.

use std::collections::HashMap;

use proxima_core::{
    CollectionConfig, ColumnIndex, DataType, DatabaseRepository, Error, IndexType,
    RepositoryType, Result,
};
use proxima_wire::repository_config::{self, Database, Entity};
use proxima_wire::{IndexColumnParam, KeyValuePair, RepositoryConfig};
use tracing::debug;

type ColumnDefault = fn(&mut IndexColumnParam);

/// Applied in order to every index column
const COLUMN_DEFAULTS: &[ColumnDefault] = &[default_index_type, default_data_type];

fn default_index_type(param: &mut IndexColumnParam) {
    if param.index_type == IndexType::Undefined.code() {
        param.index_type = IndexType::ProximaGraphIndex.code();
    }
}

fn default_data_type(param: &mut IndexColumnParam) {
    if param.data_type == DataType::Undefined.code() {
        param.data_type = DataType::VectorFp32.code();
    }
}

/// Flatten params into wire pairs, sorted by key
pub(crate) fn key_value_pairs(params: &HashMap<String, String>) -> Vec<KeyValuePair> {
    let mut pairs: Vec<KeyValuePair> = params
        .iter()
        .map(|(key, value)| KeyValuePair {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();
    pairs.sort_by(|a, b| a.key.cmp(&b.key));
    pairs
}

fn build_index_column(column: &ColumnIndex) -> Result<IndexColumnParam> {
    if column.name.is_empty() {
        return Err(Error::Validation("index column name is empty".to_string()));
    }
    let mut param = IndexColumnParam {
        column_name: column.name.clone(),
        index_type: column.index_type.code(),
        data_type: column.data_type.code(),
        dimension: column.dimension,
        extra_params: key_value_pairs(&column.extra_params),
    };
    for apply in COLUMN_DEFAULTS {
        apply(&mut param);
    }
    Ok(param)
}

fn build_repository(repository: &DatabaseRepository) -> Result<RepositoryConfig> {
    match repository.repository_type {
        RepositoryType::Database => Ok(RepositoryConfig {
            repository_type: repository_config::RepositoryType::RtDatabase as i32,
            repository_name: repository.name.clone(),
            entity: Some(Entity::Database(Database {
                connection_uri: repository.connection.clone(),
                table_name: repository.table_name.clone(),
                user: repository.user.clone(),
                password: repository.password.clone(),
            })),
        }),
        RepositoryType::Unknown(code) => Err(Error::Validation(format!(
            "unknown repository type {}",
            code
        ))),
    }
}

/// Assemble the wire config of a new collection
pub fn build_collection_config(
    config: &CollectionConfig,
) -> Result<proxima_wire::CollectionConfig> {
    if config.collection_name.is_empty() {
        return Err(Error::Validation("collection name is empty".to_string()));
    }
    if config.columns.is_empty() {
        return Err(Error::Validation(
            "collection needs at least one index column".to_string(),
        ));
    }

    let index_column_params = config
        .columns
        .iter()
        .map(build_index_column)
        .collect::<Result<Vec<_>>>()?;
    let repository_config = config.repository.as_ref().map(build_repository).transpose()?;

    debug!(
        collection = %config.collection_name,
        columns = index_column_params.len(),
        forwards = config.forward_columns.len(),
        "assembled collection config"
    );

    Ok(proxima_wire::CollectionConfig {
        collection_name: config.collection_name.clone(),
        max_docs_per_segment: config.max_docs_per_segment,
        forward_column_names: config.forward_columns.clone(),
        index_column_params,
        repository_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults() {
        let config = CollectionConfig::new("plants", vec![ColumnIndex::new("leaf", 8)]);
        let wire = build_collection_config(&config).unwrap();

        let column = &wire.index_column_params[0];
        assert_eq!(column.column_name, "leaf");
        assert_eq!(column.dimension, 8);
        assert_eq!(column.index_type, IndexType::ProximaGraphIndex.code());
        assert_eq!(column.data_type, DataType::VectorFp32.code());
        assert!(wire.repository_config.is_none());
    }

    #[test]
    fn test_explicit_column_settings_are_kept() {
        let column = ColumnIndex::new("leaf", 16)
            .with_data_type(DataType::VectorInt8)
            .with_param("ef_search", "200")
            .with_param("ef_construction", "400");
        let mut config = CollectionConfig::new("plants", vec![column]);
        config.forward_columns = vec!["name".to_string(), "age".to_string()];
        config.max_docs_per_segment = 1000;

        let wire = build_collection_config(&config).unwrap();
        let column = &wire.index_column_params[0];
        assert_eq!(column.data_type, DataType::VectorInt8.code());
        assert_eq!(column.extra_params.len(), 2);
        assert_eq!(column.extra_params[0].key, "ef_construction");
        assert_eq!(column.extra_params[1].value, "200");
        assert_eq!(wire.forward_column_names, vec!["name", "age"]);
        assert_eq!(wire.max_docs_per_segment, 1000);
    }

    #[test]
    fn test_database_repository() {
        let mut config = CollectionConfig::new("plants", vec![ColumnIndex::new("leaf", 8)]);
        config.repository = Some(DatabaseRepository {
            name: "garden".to_string(),
            repository_type: RepositoryType::Database,
            connection: "mysql://127.0.0.1:3306/garden".to_string(),
            table_name: "plants".to_string(),
            user: "root".to_string(),
            password: "secret".to_string(),
        });

        let wire = build_collection_config(&config).unwrap();
        let repository = wire.repository_config.unwrap();
        assert_eq!(repository.repository_name, "garden");
        let Some(Entity::Database(db)) = repository.entity else {
            panic!("database entity missing");
        };
        assert_eq!(db.connection_uri, "mysql://127.0.0.1:3306/garden");
        assert_eq!(db.table_name, "plants");
        assert_eq!(db.password, "secret");
    }

    #[test]
    fn test_invalid_configs() {
        let config = CollectionConfig::new("", vec![ColumnIndex::new("leaf", 8)]);
        assert!(matches!(
            build_collection_config(&config),
            Err(Error::Validation(_))
        ));

        let config = CollectionConfig::new("plants", vec![]);
        assert!(matches!(
            build_collection_config(&config),
            Err(Error::Validation(_))
        ));

        let config = CollectionConfig::new("plants", vec![ColumnIndex::new("", 8)]);
        assert!(matches!(
            build_collection_config(&config),
            Err(Error::Validation(_))
        ));

        let mut config = CollectionConfig::new("plants", vec![ColumnIndex::new("leaf", 8)]);
        config.repository = Some(DatabaseRepository {
            repository_type: RepositoryType::Unknown(5),
            ..Default::default()
        });
        let err = build_collection_config(&config).unwrap_err();
        assert!(err.to_string().contains("unknown repository type"));
    }
}
