//! Conversion between [`Value`] and the wire `GenericValue`.

use proxima_core::{pack_values, Error, Result, Value};
use proxima_wire::generic_value::ValueOneof;
use proxima_wire::{GenericValue, GenericValueList};

/// Encode one value
///
/// Lists are packed little-endian into the bytes variant. Values with no wire
/// form (int8 scalars, maps, nulls, nested lists) are rejected.
pub fn encode_value(value: &Value) -> Result<GenericValue> {
    let oneof = match value {
        Value::String(v) => ValueOneof::StringValue(v.clone()),
        Value::Bool(v) => ValueOneof::BoolValue(*v),
        Value::Int32(v) => ValueOneof::Int32Value(*v),
        Value::Int64(v) => ValueOneof::Int64Value(*v),
        Value::Uint32(v) => ValueOneof::Uint32Value(*v),
        Value::Uint64(v) => ValueOneof::Uint64Value(*v),
        Value::Float32(v) => ValueOneof::FloatValue(*v),
        Value::Float64(v) => ValueOneof::DoubleValue(*v),
        Value::Bytes(v) => ValueOneof::BytesValue(v.clone()),
        Value::List(items) => ValueOneof::BytesValue(pack_values(items)?.to_vec()),
        Value::Int8(_) | Value::Map(_) | Value::Null => {
            return Err(Error::UnsupportedType(value.kind()))
        }
    };
    Ok(GenericValue {
        value_oneof: Some(oneof),
    })
}

/// Decode one value, `None` when no variant is set
///
/// Bytes always decode to [`Value::Bytes`]; packed lists are not unpacked.
pub fn decode_value(value: &GenericValue) -> Option<Value> {
    let decoded = match value.value_oneof.as_ref()? {
        ValueOneof::BytesValue(v) => Value::Bytes(v.clone()),
        ValueOneof::StringValue(v) => Value::String(v.clone()),
        ValueOneof::BoolValue(v) => Value::Bool(*v),
        ValueOneof::Int32Value(v) => Value::Int32(*v),
        ValueOneof::Int64Value(v) => Value::Int64(*v),
        ValueOneof::Uint32Value(v) => Value::Uint32(*v),
        ValueOneof::Uint64Value(v) => Value::Uint64(*v),
        ValueOneof::FloatValue(v) => Value::Float32(*v),
        ValueOneof::DoubleValue(v) => Value::Float64(*v),
    };
    Some(decoded)
}

/// Encode every value, failing on the first one that has no wire form
pub fn encode_value_list(values: &[Value]) -> Result<GenericValueList> {
    let values = values.iter().map(encode_value).collect::<Result<Vec<_>>>()?;
    Ok(GenericValueList { values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxima_core::ValueKind;
    use std::collections::BTreeMap;

    #[test]
    fn test_scalars_survive_encoding() {
        for value in [
            Value::from("hello"),
            Value::from(true),
            Value::from(-7i32),
            Value::from(i64::MIN),
            Value::from(u32::MAX),
            Value::from(u64::MAX),
            Value::from(0.25f32),
            Value::from(-1.5f64),
        ] {
            let encoded = encode_value(&value).unwrap();
            assert_eq!(decode_value(&encoded), Some(value));
        }
    }

    #[test]
    fn test_list_packs_into_bytes() {
        let value = Value::from(vec![1.0f32, 2.0]);
        let encoded = encode_value(&value).unwrap();

        let mut expected = 1.0f32.to_le_bytes().to_vec();
        expected.extend_from_slice(&2.0f32.to_le_bytes());
        assert_eq!(
            encoded.value_oneof,
            Some(ValueOneof::BytesValue(expected.clone()))
        );
        // not reconstructed into a typed list
        assert_eq!(decode_value(&encoded), Some(Value::Bytes(expected)));
    }

    #[test]
    fn test_unsupported_values() {
        assert!(matches!(
            encode_value(&Value::Int8(3)),
            Err(Error::UnsupportedType(ValueKind::Int8))
        ));
        assert!(matches!(
            encode_value(&Value::Map(BTreeMap::new())),
            Err(Error::UnsupportedType(ValueKind::Map))
        ));
        assert!(matches!(
            encode_value(&Value::Null),
            Err(Error::UnsupportedType(ValueKind::Null))
        ));
        assert!(matches!(
            encode_value(&Value::from(vec![vec![1.0f32], vec![2.0]])),
            Err(Error::UnsupportedType(ValueKind::List))
        ));
    }

    #[test]
    fn test_empty_generic_value() {
        assert_eq!(decode_value(&GenericValue::default()), None);
    }

    #[test]
    fn test_list_fails_on_first_bad_element() {
        let ok = encode_value_list(&[Value::from(1i32), Value::from("a")]).unwrap();
        assert_eq!(ok.values.len(), 2);

        let err = encode_value_list(&[Value::from(1i32), Value::Null, Value::Int8(1)]);
        assert!(matches!(err, Err(Error::UnsupportedType(ValueKind::Null))));
    }
}
