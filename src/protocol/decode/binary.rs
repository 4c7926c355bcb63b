//! Oracle BINARY_FLOAT and BINARY_DOUBLE decoders.
//!
//! Both types are IEEE-754 big-endian bit patterns with the sign folded in
//! so that unsigned byte comparison matches numeric order:
//! - non-negative values have the top bit of byte 0 set
//! - negative values have every bit complemented

use crate::error::{Error, Result};
use crate::protocol::constants::{TNS_BINARY_DOUBLE_LENGTH, TNS_BINARY_FLOAT_LENGTH};

const FLOAT_SIGN_BIT: u32 = 1 << 31;
const DOUBLE_SIGN_BIT: u64 = 1 << 63;

/// Decode a 4-byte BINARY_FLOAT.
///
/// # Errors
/// Returns `Error::MalformedInput` if `data` is not exactly 4 bytes.
pub fn decode_binary_float(data: &[u8]) -> Result<f32> {
    let bytes: [u8; TNS_BINARY_FLOAT_LENGTH] = data
        .try_into()
        .map_err(|_| Error::malformed("BINARY_FLOAT", TNS_BINARY_FLOAT_LENGTH, data.len()))?;

    let stored = u32::from_be_bytes(bytes);
    let bits = if stored & FLOAT_SIGN_BIT != 0 {
        stored & !FLOAT_SIGN_BIT
    } else {
        !stored
    };
    Ok(f32::from_bits(bits))
}

/// Decode an 8-byte BINARY_DOUBLE.
///
/// # Errors
/// Returns `Error::MalformedInput` if `data` is not exactly 8 bytes.
pub fn decode_binary_double(data: &[u8]) -> Result<f64> {
    let bytes: [u8; TNS_BINARY_DOUBLE_LENGTH] = data
        .try_into()
        .map_err(|_| Error::malformed("BINARY_DOUBLE", TNS_BINARY_DOUBLE_LENGTH, data.len()))?;

    let stored = u64::from_be_bytes(bytes);
    let bits = if stored & DOUBLE_SIGN_BIT != 0 {
        stored & !DOUBLE_SIGN_BIT
    } else {
        !stored
    };
    Ok(f64::from_bits(bits))
}

/// Encode an `f32` as BINARY_FLOAT.
pub fn encode_binary_float(value: f32) -> [u8; TNS_BINARY_FLOAT_LENGTH] {
    let bits = value.to_bits();
    let stored = if bits & FLOAT_SIGN_BIT == 0 {
        bits | FLOAT_SIGN_BIT
    } else {
        !bits
    };
    stored.to_be_bytes()
}

/// Encode an `f64` as BINARY_DOUBLE.
pub fn encode_binary_double(value: f64) -> [u8; TNS_BINARY_DOUBLE_LENGTH] {
    let bits = value.to_bits();
    let stored = if bits & DOUBLE_SIGN_BIT == 0 {
        bits | DOUBLE_SIGN_BIT
    } else {
        !bits
    };
    stored.to_be_bytes()
}
