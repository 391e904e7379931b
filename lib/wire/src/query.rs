//! Query and document lookup messages.

use crate::common::{DataType, GenericKeyValue, KeyValuePair, Status};

#[derive(Clone, PartialEq, prost::Message)]
pub struct QueryRequest {
    #[prost(enumeration = "query_request::QueryType", tag = "1")]
    pub query_type: i32,
    #[prost(string, tag = "2")]
    pub collection_name: String,
    #[prost(bool, tag = "3")]
    pub debug_mode: bool,
    #[prost(oneof = "query_request::QueryParam", tags = "4")]
    pub query_param: Option<query_request::QueryParam>,
}

pub mod query_request {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum QueryType {
        QtKnn = 0,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct KnnQueryParam {
        #[prost(string, tag = "1")]
        pub column_name: String,
        #[prost(uint32, tag = "2")]
        pub topk: u32,
        /// Little-endian packed rows
        #[prost(bytes = "bytes", tag = "3")]
        pub features: bytes::Bytes,
        #[prost(uint32, tag = "5")]
        pub batch_count: u32,
        #[prost(uint32, tag = "6")]
        pub dimension: u32,
        #[prost(enumeration = "DataType", tag = "7")]
        pub data_type: i32,
        #[prost(float, tag = "8")]
        pub radius: f32,
        #[prost(bool, tag = "9")]
        pub is_linear: bool,
        #[prost(message, repeated, tag = "10")]
        pub extra_params: Vec<KeyValuePair>,
    }

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum QueryParam {
        #[prost(message, tag = "4")]
        KnnParam(KnnQueryParam),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Document {
    #[prost(uint64, tag = "1")]
    pub primary_key: u64,
    #[prost(float, tag = "2")]
    pub score: f32,
    #[prost(message, repeated, tag = "3")]
    pub forward_column_values: Vec<GenericKeyValue>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct QueryResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(string, tag = "2")]
    pub debug_info: String,
    #[prost(uint64, tag = "3")]
    pub latency_us: u64,
    #[prost(message, repeated, tag = "4")]
    pub results: Vec<query_response::Result>,
}

pub mod query_response {
    use super::*;

    /// Hits of one query row
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Result {
        #[prost(message, repeated, tag = "1")]
        pub documents: Vec<Document>,
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetDocumentRequest {
    #[prost(string, tag = "1")]
    pub collection_name: String,
    #[prost(uint64, tag = "2")]
    pub primary_key: u64,
    #[prost(bool, tag = "3")]
    pub debug_mode: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetDocumentResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(string, tag = "2")]
    pub debug_info: String,
    #[prost(message, optional, tag = "3")]
    pub document: Option<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_knn_param_survives_encoding() {
        let request = QueryRequest {
            query_type: query_request::QueryType::QtKnn as i32,
            collection_name: "plants".to_string(),
            debug_mode: true,
            query_param: Some(query_request::QueryParam::KnnParam(
                query_request::KnnQueryParam {
                    column_name: "leaf".to_string(),
                    topk: 10,
                    features: bytes::Bytes::from_static(&[0, 0, 128, 63]),
                    batch_count: 1,
                    dimension: 1,
                    data_type: DataType::DtVectorFp32 as i32,
                    ..Default::default()
                },
            )),
        };

        let decoded = QueryRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        let Some(query_request::QueryParam::KnnParam(knn)) = decoded.query_param else {
            panic!("knn param missing");
        };
        assert_eq!(knn.data_type(), DataType::DtVectorFp32);
        assert_eq!(&knn.features[..], &[0, 0, 128, 63]);
        assert!(decoded.debug_mode);
    }
}
