use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{Result, WireError};

/// A single element of a caller-supplied vector.
///
/// Integer and float cells are narrowed to `f32` at the wire boundary.
/// `Bool` and `Text` cells are representable so the codec can reject them
/// with a numeric-type error instead of guessing a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Element type name used in error messages.
    pub fn dtype(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "bool",
            Scalar::Text(_) => "str",
        }
    }

    pub(crate) fn to_f32(&self) -> Result<f32> {
        match self {
            Scalar::Int(v) => Ok(*v as f32),
            Scalar::Float(v) => Ok(*v as f32),
            other => Err(WireError::NumericType(other.dtype())),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar {
            fn from(v: $t) -> Self {
                Scalar::Int(i64::from(v))
            }
        }
    )*};
}

macro_rules! scalar_from_float {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar {
            fn from(v: $t) -> Self {
                Scalar::Float(f64::from(v))
            }
        }
    )*};
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);
scalar_from_float!(f32, f64);

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// A value crossing the application/database boundary, tagged by shape.
///
/// Every codec entry point matches on the tag exactly once; there is no
/// further runtime shape inspection. Ranks above 2 are unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VectorValue {
    /// Absent value, passed through unchanged by every operation.
    Null,
    /// A wire text literal that has not been parsed yet.
    RawText(String),
    /// Wire bytes that have not been parsed yet.
    RawBinary(Vec<u8>),
    /// A flat sequence of elements, one vector.
    Array1(Vec<Scalar>),
    /// A sequence of vectors, the bulk/array-column form.
    Array2(Vec<Vec<Scalar>>),
}

macro_rules! value_from_elems {
    ($($t:ty),*) => {$(
        impl From<Vec<$t>> for VectorValue {
            fn from(values: Vec<$t>) -> Self {
                VectorValue::Array1(values.into_iter().map(Scalar::from).collect())
            }
        }

        impl From<&[$t]> for VectorValue {
            fn from(values: &[$t]) -> Self {
                VectorValue::Array1(values.iter().copied().map(Scalar::from).collect())
            }
        }

        impl From<Vec<Vec<$t>>> for VectorValue {
            fn from(rows: Vec<Vec<$t>>) -> Self {
                VectorValue::Array2(
                    rows.into_iter()
                        .map(|row| row.into_iter().map(Scalar::from).collect())
                        .collect(),
                )
            }
        }
    )*};
}

value_from_elems!(f32, f64, i32, i64);

impl From<Array1<f32>> for VectorValue {
    fn from(values: Array1<f32>) -> Self {
        VectorValue::Array1(values.iter().copied().map(Scalar::from).collect())
    }
}

impl From<Array1<f64>> for VectorValue {
    fn from(values: Array1<f64>) -> Self {
        VectorValue::Array1(values.iter().copied().map(Scalar::from).collect())
    }
}

impl From<&str> for VectorValue {
    fn from(literal: &str) -> Self {
        VectorValue::RawText(literal.to_string())
    }
}

impl From<String> for VectorValue {
    fn from(literal: String) -> Self {
        VectorValue::RawText(literal)
    }
}

impl<T> From<Option<T>> for VectorValue
where
    T: Into<VectorValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => VectorValue::Null,
        }
    }
}

/// Convert caller-supplied cells to the single-precision array the database
/// works in. Used by the decode pass-through paths.
pub(crate) fn cells_to_array(cells: &[Scalar]) -> Result<Array1<f32>> {
    let mut floats = Vec::with_capacity(cells.len());
    for cell in cells {
        floats.push(cell.to_f32()?);
    }
    Ok(Array1::from_vec(floats))
}
