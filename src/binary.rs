use byteorder::{BigEndian, ByteOrder};
use ndarray::Array1;

use crate::value::{cells_to_array, Scalar, VectorValue};
use crate::{Result, WireError};

// u16 dimension + u16 reserved field
const HEADER_LEN: usize = 4;

/// Encode a flat vector as the big-endian wire format:
/// `u16 dimension | u16 reserved (zero) | f32 x dimension`, no padding.
///
/// The bulk form has no binary counterpart on the wire and is rejected.
pub fn encode_binary(value: &VectorValue) -> Result<Option<Vec<u8>>> {
    match value {
        VectorValue::Null => Ok(None),
        VectorValue::Array1(cells) => encode_packed(cells).map(Some),
        VectorValue::Array2(_) => Err(WireError::Dimensionality(2)),
        VectorValue::RawText(_) => Err(WireError::NumericType("str")),
        VectorValue::RawBinary(_) => Err(WireError::NumericType("bytes")),
    }
}

fn encode_packed(cells: &[Scalar]) -> Result<Vec<u8>> {
    let mut floats = Vec::with_capacity(cells.len());
    for cell in cells {
        floats.push(cell.to_f32()?);
    }

    if floats.len() > u16::MAX as usize {
        return Err(WireError::DimensionOverflow(floats.len()));
    }

    let mut buf = vec![0u8; HEADER_LEN + floats.len() * 4];
    BigEndian::write_u16(&mut buf[0..2], floats.len() as u16);
    // bytes 2..4 are the reserved field and stay zero
    BigEndian::write_f32_into(&floats, &mut buf[HEADER_LEN..]);
    Ok(buf)
}

/// Decode the big-endian wire format back into a single-precision vector.
///
/// Exactly the declared number of elements is read from offset 4; trailing
/// bytes are ignored. A payload shorter than the header plus its declared
/// elements is rejected as truncated.
pub fn decode_binary(value: VectorValue) -> Result<Option<Array1<f32>>> {
    match value {
        VectorValue::Null => Ok(None),
        VectorValue::RawBinary(bytes) => decode_packed(&bytes).map(Some),
        VectorValue::Array1(cells) => cells_to_array(&cells).map(Some),
        VectorValue::RawText(_) => Err(WireError::Parse(
            "expected a binary payload, got a text literal".to_string(),
        )),
        VectorValue::Array2(_) => Err(WireError::Dimensionality(2)),
    }
}

fn decode_packed(bytes: &[u8]) -> Result<Array1<f32>> {
    if bytes.len() < HEADER_LEN {
        return Err(WireError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let dim = BigEndian::read_u16(&bytes[0..2]) as usize;
    let _reserved = BigEndian::read_u16(&bytes[2..4]);

    let needed = HEADER_LEN + dim * 4;
    if bytes.len() < needed {
        return Err(WireError::Truncated {
            expected: needed,
            actual: bytes.len(),
        });
    }

    let mut floats = vec![0.0f32; dim];
    BigEndian::read_f32_into(&bytes[HEADER_LEN..needed], &mut floats);
    Ok(Array1::from_vec(floats))
}
