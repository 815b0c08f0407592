use ndarray::Array1;

use crate::value::{cells_to_array, Scalar, VectorValue};
use crate::{Result, WireError};

/// Encode a value as the database's text literal.
///
/// A flat vector renders as `[1.0,2.0,3.0]`. The bulk form renders each row
/// as a quoted sub-vector joined inside braces, for array-typed columns.
/// When `dim` is supplied, the length of every encoded vector must match it
/// exactly; mismatches fail before anything reaches the wire.
pub fn encode_text(value: &VectorValue, dim: Option<usize>) -> Result<Option<String>> {
    match value {
        VectorValue::Null => Ok(None),
        VectorValue::Array1(cells) => encode_row(cells, dim).map(Some),
        VectorValue::Array2(rows) => {
            let mut quoted = Vec::with_capacity(rows.len());
            for row in rows {
                quoted.push(format!("\"{}\"", encode_row(row, dim)?));
            }
            Ok(Some(format!("{{{}}}", quoted.join(","))))
        }
        VectorValue::RawText(_) => Err(WireError::NumericType("str")),
        VectorValue::RawBinary(_) => Err(WireError::NumericType("bytes")),
    }
}

fn encode_row(cells: &[Scalar], dim: Option<usize>) -> Result<String> {
    let mut floats = Vec::with_capacity(cells.len());
    for cell in cells {
        floats.push(cell.to_f32()?);
    }

    if let Some(expected) = dim {
        if floats.len() != expected {
            return Err(WireError::DimensionMismatch {
                expected,
                actual: floats.len(),
            });
        }
    }

    // {:?} keeps the shortest decimal that round-trips, and never drops the
    // fractional part the way {} does (1.0 must not become 1)
    let rendered: Vec<String> = floats.iter().map(|v| format!("{:?}", v)).collect();
    Ok(format!("[{}]", rendered.join(",")))
}

/// Decode the database's text literal into a single-precision vector.
///
/// `Null` and already-decoded arrays pass through without parsing. No
/// dimension is validated on the way in; the wire data is trusted.
pub fn decode_text(value: VectorValue) -> Result<Option<Array1<f32>>> {
    match value {
        VectorValue::Null => Ok(None),
        VectorValue::Array1(cells) => cells_to_array(&cells).map(Some),
        VectorValue::RawText(literal) => parse_literal(&literal).map(Some),
        VectorValue::RawBinary(bytes) => {
            let literal = String::from_utf8(bytes)
                .map_err(|e| WireError::Parse(format!("payload is not valid UTF-8: {}", e)))?;
            parse_literal(&literal).map(Some)
        }
        VectorValue::Array2(_) => Err(WireError::Dimensionality(2)),
    }
}

fn parse_literal(raw: &str) -> Result<Array1<f32>> {
    // The literal arrives bracketed, `[ ... ]` or `{ ... }`; only the
    // delimiters are stripped, the contents must be numeric tokens.
    let inner = raw
        .get(1..raw.len().saturating_sub(1))
        .ok_or_else(|| WireError::Parse(format!("not a bracketed vector literal: {:?}", raw)))?;

    let mut floats = Vec::new();
    for token in inner.split(',') {
        let parsed = token
            .trim()
            .parse::<f32>()
            .map_err(|_| WireError::Parse(format!("invalid vector element {:?}", token)))?;
        floats.push(parsed);
    }
    Ok(Array1::from_vec(floats))
}
