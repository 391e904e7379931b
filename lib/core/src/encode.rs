//! Little-endian packing
//!
//! Feature payloads and list-valued generic values are sent as flat byte
//! buffers: elements in input order, rows concatenated, no padding.

use bytes::{BufMut, Bytes, BytesMut};
use std::io;

use crate::feature::{FeatureElement, Features, Shape};
use crate::value::Value;
use crate::{Error, Result};

fn invalid_data(msg: String) -> Error {
    Error::Io(io::Error::new(io::ErrorKind::InvalidData, msg))
}

fn pack_shape<T: FeatureElement>(batch_count: usize, shape: &Shape<T>) -> Result<Bytes> {
    match shape {
        Shape::Vector(values) => {
            if batch_count != 1 {
                return Err(invalid_data(format!(
                    "batch count {} given for a single feature vector",
                    batch_count
                )));
            }
            let mut buf = BytesMut::with_capacity(values.len() * T::KIND.size());
            values.iter().for_each(|v| v.put_le(&mut buf));
            Ok(buf.freeze())
        }
        Shape::Matrix(rows) => {
            if batch_count != rows.len() {
                return Err(invalid_data(format!(
                    "batch count {} does not match {} feature rows",
                    batch_count,
                    rows.len()
                )));
            }
            let dimension = rows.first().map_or(0, Vec::len);
            let mut buf = BytesMut::with_capacity(batch_count * dimension * T::KIND.size());
            for (i, row) in rows.iter().enumerate() {
                if row.len() != dimension {
                    return Err(invalid_data(format!(
                        "feature row {} has {} elements, expected {}",
                        i,
                        row.len(),
                        dimension
                    )));
                }
                row.iter().for_each(|v| v.put_le(&mut buf));
            }
            Ok(buf.freeze())
        }
    }
}

/// Serialize `features` into the flat little-endian buffer sent to the engine
///
/// `batch_count` must be the value inferred by [`Features::describe`].
pub fn encode_features(batch_count: usize, features: &Features) -> Result<Bytes> {
    match features {
        Features::Int8(shape) => pack_shape(batch_count, shape),
        Features::Uint32(shape) => pack_shape(batch_count, shape),
        Features::Uint64(shape) => pack_shape(batch_count, shape),
        Features::Float32(shape) => pack_shape(batch_count, shape),
    }
}

fn put_scalar(value: &Value, buf: &mut BytesMut) -> Result<()> {
    match value {
        Value::Bool(b) => buf.put_u8(u8::from(*b)),
        Value::Int8(v) => buf.put_i8(*v),
        Value::Int32(v) => buf.put_i32_le(*v),
        Value::Int64(v) => buf.put_i64_le(*v),
        Value::Uint32(v) => buf.put_u32_le(*v),
        Value::Uint64(v) => buf.put_u64_le(*v),
        Value::Float32(v) => buf.put_f32_le(*v),
        Value::Float64(v) => buf.put_f64_le(*v),
        other => return Err(Error::UnsupportedType(other.kind())),
    }
    Ok(())
}

/// Pack a homogeneous list of fixed-width scalars
///
/// The first element fixes the kind; strings, bytes, nested lists, maps and
/// nulls have no fixed width and are rejected, as is any element whose kind
/// differs from the first.
pub fn pack_values(values: &[Value]) -> Result<Bytes> {
    let Some(first) = values.first() else {
        return Ok(Bytes::new());
    };
    let kind = first.kind();
    let size = kind.packed_size().ok_or(Error::UnsupportedType(kind))?;
    if let Some(other) = values.iter().find(|v| v.kind() != kind) {
        return Err(Error::UnsupportedType(other.kind()));
    }

    let mut buf = BytesMut::with_capacity(values.len() * size);
    for value in values {
        put_scalar(value, &mut buf)?;
    }
    Ok(buf.freeze())
}
