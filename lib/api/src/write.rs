//! Write request assembly.

use proxima_core::{Error, Features, Result, Row, WriteRequest};
use proxima_wire::write_request::{self, IndexColumnMeta, RowMeta};
use proxima_wire::LsnContext;
use tracing::debug;

use crate::generic::encode_value_list;

/// Describe every index column from the values of the first row
fn build_index_metas(request: &WriteRequest) -> Result<Vec<IndexColumnMeta>> {
    let Some(first) = request.rows.first() else {
        return Err(Error::Validation("no attached rows in request".to_string()));
    };
    let names = &request.meta.index_column_names;
    if first.index_column_values.len() < names.len() {
        return Err(Error::Validation(format!(
            "mismatched values in write request: {} index columns, {} values",
            names.len(),
            first.index_column_values.len()
        )));
    }

    names
        .iter()
        .zip(&first.index_column_values)
        .map(|(name, value)| -> Result<IndexColumnMeta> {
            let descriptor = Features::try_from(value)
                .and_then(|features| features.describe())
                .map_err(|e| {
                    Error::Validation(format!(
                        "can't infer the data type of vector {}: {}",
                        name, e
                    ))
                })?;
            Ok(IndexColumnMeta {
                column_name: name.clone(),
                data_type: descriptor.data_type.code(),
                dimension: u32::try_from(descriptor.dimension).map_err(|_| {
                    Error::Validation(format!("dimension of {} overflows u32", name))
                })?,
            })
        })
        .collect()
}

fn build_row(row: &Row) -> Result<write_request::Row> {
    Ok(write_request::Row {
        primary_key: row.primary_key,
        operation_type: row.operation_type.code(),
        forward_column_values: Some(encode_value_list(&row.forward_column_values)?),
        index_column_values: Some(encode_value_list(&row.index_column_values)?),
        lsn_context: row.lsn_context.as_ref().map(|ctx| LsnContext {
            lsn: ctx.lsn,
            context: ctx.context.clone(),
        }),
    })
}

/// Assemble a wire write request
///
/// Index column metas come from the first row only; later rows are encoded
/// as given.
pub fn build_write_request(request: &WriteRequest) -> Result<proxima_wire::WriteRequest> {
    let index_column_metas = build_index_metas(request)?;
    let rows = request.rows.iter().map(build_row).collect::<Result<Vec<_>>>()?;

    debug!(
        collection = %request.collection_name,
        rows = rows.len(),
        index_columns = index_column_metas.len(),
        "assembled write request"
    );

    Ok(proxima_wire::WriteRequest {
        collection_name: request.collection_name.clone(),
        row_meta: Some(RowMeta {
            index_column_metas,
            forward_column_names: request.meta.forward_column_names.clone(),
        }),
        rows,
        request_id: request.request_id.clone(),
        magic_number: request.magic_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxima_core::{DataType, LsnContext as CoreLsnContext, OperationType, RowMeta as CoreRowMeta};
    use proxima_wire::generic_value::ValueOneof;

    fn request(rows: Vec<Row>) -> WriteRequest {
        WriteRequest {
            collection_name: "plants".to_string(),
            meta: CoreRowMeta {
                index_column_names: vec!["leaf".to_string()],
                forward_column_names: vec!["name".to_string(), "age".to_string()],
            },
            rows,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_rows() {
        let err = build_write_request(&request(vec![])).unwrap_err();
        assert!(err.to_string().contains("no attached rows"));
    }

    #[test]
    fn test_index_metas_from_first_row() {
        let rows = vec![
            Row::insert(1)
                .with_index_value(vec![1.0f32, 2.0, 3.0, 4.0])
                .with_forward_value("rose")
                .with_forward_value(3i32)
                .with_lsn_context(CoreLsnContext {
                    lsn: 9,
                    context: "binlog.000001".to_string(),
                }),
            Row::new(2, OperationType::Delete).with_index_value(vec![5.0f32, 6.0, 7.0, 8.0]),
        ];
        let wire = build_write_request(&request(rows)).unwrap();

        let meta = wire.row_meta.unwrap();
        assert_eq!(meta.index_column_metas.len(), 1);
        assert_eq!(meta.index_column_metas[0].column_name, "leaf");
        assert_eq!(meta.index_column_metas[0].data_type, DataType::VectorFp32.code());
        assert_eq!(meta.index_column_metas[0].dimension, 4);
        assert_eq!(meta.forward_column_names, vec!["name", "age"]);

        assert_eq!(wire.rows.len(), 2);
        let first = &wire.rows[0];
        assert_eq!(first.primary_key, 1);
        assert_eq!(first.lsn_context.as_ref().unwrap().lsn, 9);
        let forwards = first.forward_column_values.as_ref().unwrap();
        assert_eq!(
            forwards.values[0].value_oneof,
            Some(ValueOneof::StringValue("rose".to_string()))
        );
        let index = first.index_column_values.as_ref().unwrap();
        let Some(ValueOneof::BytesValue(bytes)) = &index.values[0].value_oneof else {
            panic!("feature not packed as bytes");
        };
        assert_eq!(bytes.len(), 16);

        assert_eq!(wire.rows[1].operation_type, OperationType::Delete.code());
        assert!(wire.rows[1].lsn_context.is_none());
    }

    #[test]
    fn test_later_rows_keep_their_own_dimension() {
        let rows = vec![
            Row::insert(1).with_index_value(vec![1.0f32; 4]),
            Row::insert(2).with_index_value(vec![1.0f32; 2]),
        ];
        let wire = build_write_request(&request(rows)).unwrap();

        assert_eq!(wire.row_meta.unwrap().index_column_metas[0].dimension, 4);
        let index = wire.rows[1].index_column_values.as_ref().unwrap();
        let Some(ValueOneof::BytesValue(bytes)) = &index.values[0].value_oneof else {
            panic!("feature not packed as bytes");
        };
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn test_missing_index_values() {
        let err = build_write_request(&request(vec![Row::insert(1)])).unwrap_err();
        assert!(err.to_string().contains("mismatched values in write request"));
    }

    #[test]
    fn test_uninferable_feature() {
        let rows = vec![Row::insert(1).with_index_value(vec![1i32, 2, 3])];
        let err = build_write_request(&request(rows)).unwrap_err();
        assert!(err.to_string().contains("can't infer the data type of vector"));
    }

    #[test]
    fn test_bad_forward_value_in_later_row() {
        let rows = vec![
            Row::insert(1).with_index_value(vec![1i8, 2]),
            Row::insert(2)
                .with_index_value(vec![1i8, 2])
                .with_forward_value(proxima_core::Value::Null),
        ];
        assert!(matches!(
            build_write_request(&request(rows)),
            Err(Error::UnsupportedType(_))
        ));
    }
}
