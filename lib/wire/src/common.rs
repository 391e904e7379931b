//! Values and status shared by every service method.

/// Dynamically typed value
#[derive(Clone, PartialEq, prost::Message)]
pub struct GenericValue {
    #[prost(
        oneof = "generic_value::ValueOneof",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9"
    )]
    pub value_oneof: Option<generic_value::ValueOneof>,
}

pub mod generic_value {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum ValueOneof {
        #[prost(bytes = "vec", tag = "1")]
        BytesValue(Vec<u8>),
        #[prost(string, tag = "2")]
        StringValue(String),
        #[prost(bool, tag = "3")]
        BoolValue(bool),
        #[prost(int32, tag = "4")]
        Int32Value(i32),
        #[prost(int64, tag = "5")]
        Int64Value(i64),
        #[prost(uint32, tag = "6")]
        Uint32Value(u32),
        #[prost(uint64, tag = "7")]
        Uint64Value(u64),
        #[prost(float, tag = "8")]
        FloatValue(f32),
        #[prost(double, tag = "9")]
        DoubleValue(f64),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GenericValueList {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<GenericValue>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GenericKeyValue {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<GenericValue>,
}

/// Key value pair of an index parameter
#[derive(Clone, PartialEq, prost::Message)]
pub struct KeyValuePair {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Status {
    /// 0 on success
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub reason: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LsnContext {
    #[prost(uint64, tag = "1")]
    pub lsn: u64,
    #[prost(string, tag = "2")]
    pub context: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetVersionRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetVersionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    /// Major.Minor.Patch-suffix
    #[prost(string, tag = "2")]
    pub version: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DataType {
    DtUndefined = 0,
    DtBinary = 1,
    DtString = 2,
    DtBool = 3,
    DtInt32 = 4,
    DtInt64 = 5,
    DtUint32 = 6,
    DtUint64 = 7,
    DtFloat = 8,
    DtDouble = 9,
    DtVectorBinary32 = 20,
    DtVectorBinary64 = 21,
    DtVectorFp16 = 22,
    DtVectorFp32 = 23,
    DtVectorFp64 = 24,
    DtVectorInt4 = 25,
    DtVectorInt8 = 26,
    DtVectorInt16 = 27,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum IndexType {
    ItUndefined = 0,
    ItProximaGraphIndex = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    OpInsert = 0,
    OpUpdate = 1,
    OpDelete = 2,
}
