use serde::Serialize;

use crate::collection::LsnContext;
use crate::types::OperationType;
use crate::value::Value;

/// One record of a write request
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Row {
    pub primary_key: u64,
    pub operation_type: OperationType,
    /// One feature per index column, in `RowMeta::index_column_names` order
    pub index_column_values: Vec<Value>,
    pub forward_column_values: Vec<Value>,
    pub lsn_context: Option<LsnContext>,
}

impl Row {
    pub fn new(primary_key: u64, operation_type: OperationType) -> Self {
        Self {
            primary_key,
            operation_type,
            ..Default::default()
        }
    }

    pub fn insert(primary_key: u64) -> Self {
        Self::new(primary_key, OperationType::Insert)
    }

    #[must_use]
    pub fn with_index_value(mut self, value: impl Into<Value>) -> Self {
        self.index_column_values.push(value.into());
        self
    }

    #[must_use]
    pub fn with_forward_value(mut self, value: impl Into<Value>) -> Self {
        self.forward_column_values.push(value.into());
        self
    }

    #[must_use]
    pub fn with_lsn_context(mut self, lsn_context: LsnContext) -> Self {
        self.lsn_context = Some(lsn_context);
        self
    }
}

/// Column layout shared by every row of a request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RowMeta {
    pub index_column_names: Vec<String>,
    pub forward_column_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WriteRequest {
    pub collection_name: String,
    pub meta: RowMeta,
    /// Must not be empty
    pub rows: Vec<Row>,
    /// Optional
    pub request_id: String,
    /// Optional
    pub magic_number: u64,
}
