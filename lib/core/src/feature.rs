//! Feature vectors and matrices
//!
//! A feature is either a flat vector or a batch of equally sized rows of one of
//! the four accepted element kinds. [`Features::describe`] infers the wire data
//! type, dimension and batch count.

use bytes::BufMut;
use serde::{Deserialize, Serialize};

use crate::kind::FeatureKind;
use crate::types::DataType;
use crate::value::Value;
use crate::{Error, Result};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
}

/// Element type allowed inside a feature
pub trait FeatureElement: Copy + sealed::Sealed {
    const KIND: FeatureKind;

    /// Append the little-endian bytes of `self`
    fn put_le<B: BufMut>(self, buf: &mut B);

    #[doc(hidden)]
    fn wrap(shape: Shape<Self>) -> Features;
}

impl FeatureElement for i8 {
    const KIND: FeatureKind = FeatureKind::Int8;

    #[inline]
    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_i8(self);
    }

    fn wrap(shape: Shape<Self>) -> Features {
        Features::Int8(shape)
    }
}

impl FeatureElement for u32 {
    const KIND: FeatureKind = FeatureKind::Uint32;

    #[inline]
    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_u32_le(self);
    }

    fn wrap(shape: Shape<Self>) -> Features {
        Features::Uint32(shape)
    }
}

impl FeatureElement for u64 {
    const KIND: FeatureKind = FeatureKind::Uint64;

    #[inline]
    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_u64_le(self);
    }

    fn wrap(shape: Shape<Self>) -> Features {
        Features::Uint64(shape)
    }
}

impl FeatureElement for f32 {
    const KIND: FeatureKind = FeatureKind::Float32;

    #[inline]
    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_f32_le(self);
    }

    fn wrap(shape: Shape<Self>) -> Features {
        Features::Float32(shape)
    }
}

/// Layout of a feature payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape<T> {
    Vector(Vec<T>),
    Matrix(Vec<Vec<T>>),
}

impl<T> Shape<T> {
    /// Number of rows (1 for a vector)
    pub fn rows(&self) -> usize {
        match self {
            Shape::Vector(_) => 1,
            Shape::Matrix(rows) => rows.len(),
        }
    }

    /// Returns `(batch_count, dimension)` for a well formed shape
    fn infer_dimension(&self) -> Result<(usize, usize)> {
        match self {
            Shape::Vector(values) => {
                if values.is_empty() {
                    return Err(Error::Validation("Feature vector is empty".to_string()));
                }
                Ok((1, values.len()))
            }
            Shape::Matrix(rows) => {
                let first = rows
                    .first()
                    .ok_or_else(|| Error::Validation("Feature matrix has no rows".to_string()))?;
                let dimension = first.len();
                if dimension == 0 {
                    return Err(Error::Validation("Feature matrix has an empty row".to_string()));
                }
                if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
                    return Err(Error::Validation(format!(
                        "Dimension of vectors not equal: row 0 has {}, row {} has {}",
                        dimension,
                        index,
                        row.len()
                    )));
                }
                Ok((rows.len(), dimension))
            }
        }
    }
}

/// Client supplied feature payload, one variant per accepted element kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Features {
    Int8(Shape<i8>),
    Uint32(Shape<u32>),
    Uint64(Shape<u64>),
    Float32(Shape<f32>),
}

/// What the engine needs to know to interpret an encoded feature buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub data_type: DataType,
    pub dimension: usize,
    pub batch_count: usize,
}

impl FeatureDescriptor {
    /// Byte length of the encoded buffer
    pub fn encoded_len(&self, kind: FeatureKind) -> usize {
        self.batch_count * self.dimension * kind.size()
    }
}

impl Features {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Features::Int8(_) => FeatureKind::Int8,
            Features::Uint32(_) => FeatureKind::Uint32,
            Features::Uint64(_) => FeatureKind::Uint64,
            Features::Float32(_) => FeatureKind::Float32,
        }
    }

    pub fn is_matrix(&self) -> bool {
        match self {
            Features::Int8(s) => matches!(s, Shape::Matrix(_)),
            Features::Uint32(s) => matches!(s, Shape::Matrix(_)),
            Features::Uint64(s) => matches!(s, Shape::Matrix(_)),
            Features::Float32(s) => matches!(s, Shape::Matrix(_)),
        }
    }

    /// Infer data type, dimension and batch count
    pub fn describe(&self) -> Result<FeatureDescriptor> {
        let (batch_count, dimension) = match self {
            Features::Int8(s) => s.infer_dimension()?,
            Features::Uint32(s) => s.infer_dimension()?,
            Features::Uint64(s) => s.infer_dimension()?,
            Features::Float32(s) => s.infer_dimension()?,
        };
        Ok(FeatureDescriptor {
            data_type: self.kind().data_type(),
            dimension,
            batch_count,
        })
    }
}

/// Free-function form of [`Features::describe`]
pub fn infer_features(features: &Features) -> Result<FeatureDescriptor> {
    features.describe()
}

impl<T: FeatureElement> From<Vec<T>> for Features {
    fn from(values: Vec<T>) -> Self {
        T::wrap(Shape::Vector(values))
    }
}

impl<T: FeatureElement> From<&[T]> for Features {
    fn from(values: &[T]) -> Self {
        T::wrap(Shape::Vector(values.to_vec()))
    }
}

impl<T: FeatureElement, const N: usize> From<[T; N]> for Features {
    fn from(values: [T; N]) -> Self {
        T::wrap(Shape::Vector(values.to_vec()))
    }
}

impl<T: FeatureElement> From<Vec<Vec<T>>> for Features {
    fn from(rows: Vec<Vec<T>>) -> Self {
        T::wrap(Shape::Matrix(rows))
    }
}

impl<T: FeatureElement, const N: usize> From<Vec<[T; N]>> for Features {
    fn from(rows: Vec<[T; N]>) -> Self {
        T::wrap(Shape::Matrix(rows.into_iter().map(|r| r.to_vec()).collect()))
    }
}

fn unsupported_feature() -> Error {
    Error::Validation(
        "The type of features can't be accepted, only int8, uint32, uint64 and float32 vectors or matrices are supported"
            .to_string(),
    )
}

/// Read one row of scalars whose kind must be `kind`
fn collect_row<T>(items: &[Value], extract: fn(&Value) -> Option<T>) -> Result<Vec<T>> {
    items
        .iter()
        .map(|v| extract(v).ok_or_else(unsupported_feature))
        .collect()
}

fn collect_shape<T>(items: &[Value], matrix: bool, extract: fn(&Value) -> Option<T>) -> Result<Shape<T>> {
    if !matrix {
        return Ok(Shape::Vector(collect_row(items, extract)?));
    }
    let rows = items
        .iter()
        .map(|row| match row {
            Value::List(inner) => collect_row(inner, extract),
            _ => Err(unsupported_feature()),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Shape::Matrix(rows))
}

/// Runtime classification of an untyped value
///
/// The element kind is taken from the first scalar found (first element of a
/// vector, first element of the first row of a matrix); every other element must
/// share it.
impl TryFrom<&Value> for Features {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let items = value.as_list().ok_or_else(unsupported_feature)?;
        let (matrix, probe) = match items.first() {
            Some(Value::List(row)) => (true, row.first()),
            other => (false, other),
        };
        let kind = probe
            .and_then(|v| v.kind().feature_kind())
            .ok_or_else(unsupported_feature)?;

        let features = match kind {
            FeatureKind::Int8 => Features::Int8(collect_shape(items, matrix, |v| match v {
                Value::Int8(x) => Some(*x),
                _ => None,
            })?),
            FeatureKind::Uint32 => Features::Uint32(collect_shape(items, matrix, |v| match v {
                Value::Uint32(x) => Some(*x),
                _ => None,
            })?),
            FeatureKind::Uint64 => Features::Uint64(collect_shape(items, matrix, |v| match v {
                Value::Uint64(x) => Some(*x),
                _ => None,
            })?),
            FeatureKind::Float32 => Features::Float32(collect_shape(items, matrix, |v| match v {
                Value::Float32(x) => Some(*x),
                _ => None,
            })?),
        };
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_vector_each_kind() {
        let cases: Vec<(Features, DataType)> = vec![
            (vec![1i8, 2, 3].into(), DataType::VectorInt8),
            (vec![1u32, 2, 3].into(), DataType::VectorBinary32),
            (vec![1u64, 2, 3].into(), DataType::VectorBinary64),
            (vec![1.0f32, 2.0, 3.0].into(), DataType::VectorFp32),
        ];
        for (features, expected) in cases {
            let desc = features.describe().unwrap();
            assert_eq!(desc.data_type, expected);
            assert_eq!(desc.dimension, 3);
            assert_eq!(desc.batch_count, 1);
        }
    }

    #[test]
    fn test_infer_matrix() {
        let desc = Features::from(vec![vec![1.0f32, 2.0, 3.0]]).describe().unwrap();
        assert_eq!((desc.batch_count, desc.dimension), (1, 3));

        let desc = Features::from(vec![vec![1.0f32, 2.0, 3.0], vec![2.0, 3.0, 4.0]])
            .describe()
            .unwrap();
        assert_eq!(desc.data_type, DataType::VectorFp32);
        assert_eq!((desc.batch_count, desc.dimension), (2, 3));

        let desc = Features::from(vec![[1u32, 2], [3, 4], [5, 6]]).describe().unwrap();
        assert_eq!(desc.data_type, DataType::VectorBinary32);
        assert_eq!((desc.batch_count, desc.dimension), (3, 2));
    }

    #[test]
    fn test_flat_vector_is_single_batch() {
        let desc = Features::from([1.0f32, 2.0, 3.0, 2.0, 3.0, 4.0]).describe().unwrap();
        assert_eq!((desc.batch_count, desc.dimension), (1, 6));
    }

    #[test]
    fn test_reject_empty_and_ragged() {
        assert!(Features::from(Vec::<f32>::new()).describe().is_err());
        assert!(Features::from(Vec::<Vec<i8>>::new()).describe().is_err());
        assert!(Features::from(vec![Vec::<i8>::new()]).describe().is_err());
        assert!(Features::from(vec![vec![1.0f32, 2.0, 3.0], vec![]]).describe().is_err());
        // non-empty but non-uniform rows are rejected as well
        assert!(Features::from(vec![vec![1.0f32, 2.0, 3.0], vec![1.0, 2.0]]).describe().is_err());
    }

    #[test]
    fn test_classify_untyped_vector() {
        let value = Value::from(vec![1u64, 2, 3, 4]);
        let features = Features::try_from(&value).unwrap();
        assert_eq!(features.kind(), FeatureKind::Uint64);
        assert!(!features.is_matrix());
        assert_eq!(features.describe().unwrap().dimension, 4);
    }

    #[test]
    fn test_classify_untyped_matrix() {
        let value = Value::from(vec![vec![1i8, 2], vec![3, 4]]);
        let features = Features::try_from(&value).unwrap();
        assert!(features.is_matrix());
        let desc = features.describe().unwrap();
        assert_eq!(desc.data_type, DataType::VectorInt8);
        assert_eq!((desc.batch_count, desc.dimension), (2, 2));
    }

    #[test]
    fn test_classify_rejects_unsupported_kinds() {
        assert!(Features::try_from(&Value::from(vec![1i32, 2, 3])).is_err());
        assert!(Features::try_from(&Value::from(vec![1i64, 2, 3])).is_err());
        assert!(Features::try_from(&Value::from(vec![vec![1i64, 2, 3]])).is_err());
        assert!(Features::try_from(&Value::from(vec![Value::from("a")])).is_err());
        assert!(Features::try_from(&Value::from(10)).is_err());
        assert!(Features::try_from(&Value::from(vec![1u8, 2])).is_err());
        assert!(Features::try_from(&Value::List(vec![])).is_err());
    }

    #[test]
    fn test_classify_rejects_mixed_kinds() {
        let mixed = Value::List(vec![Value::Float32(1.0), Value::Uint32(2)]);
        assert!(Features::try_from(&mixed).is_err());

        let mixed_rows = Value::List(vec![Value::from(vec![1.0f32]), Value::Float32(2.0)]);
        assert!(Features::try_from(&mixed_rows).is_err());
    }

    #[test]
    fn test_encoded_len() {
        let desc = Features::from(vec![vec![0.0f32; 8]; 4]).describe().unwrap();
        assert_eq!(desc.encoded_len(FeatureKind::Float32), 128);
    }
}
