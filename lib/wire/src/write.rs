//! Write messages.

use crate::common::{DataType, GenericValueList, LsnContext, OperationType};

#[derive(Clone, PartialEq, prost::Message)]
pub struct WriteRequest {
    #[prost(string, tag = "1")]
    pub collection_name: String,
    #[prost(message, optional, tag = "2")]
    pub row_meta: Option<write_request::RowMeta>,
    #[prost(message, repeated, tag = "3")]
    pub rows: Vec<write_request::Row>,
    #[prost(string, tag = "4")]
    pub request_id: String,
    #[prost(uint64, tag = "5")]
    pub magic_number: u64,
}

pub mod write_request {
    use super::*;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct IndexColumnMeta {
        #[prost(string, tag = "1")]
        pub column_name: String,
        #[prost(enumeration = "DataType", tag = "2")]
        pub data_type: i32,
        #[prost(uint32, tag = "3")]
        pub dimension: u32,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RowMeta {
        #[prost(message, repeated, tag = "1")]
        pub index_column_metas: Vec<IndexColumnMeta>,
        #[prost(string, repeated, tag = "2")]
        pub forward_column_names: Vec<String>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Row {
        #[prost(uint64, tag = "1")]
        pub primary_key: u64,
        #[prost(enumeration = "OperationType", tag = "2")]
        pub operation_type: i32,
        #[prost(message, optional, tag = "3")]
        pub forward_column_values: Option<GenericValueList>,
        #[prost(message, optional, tag = "4")]
        pub index_column_values: Option<GenericValueList>,
        #[prost(message, optional, tag = "5")]
        pub lsn_context: Option<LsnContext>,
    }
}
