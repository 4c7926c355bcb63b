//! Sign-bias arithmetic shared by the interval decoders.
//!
//! Interval fields are stored as `bias + value`, so a negative component
//! sits below the bias and a positive one above it. Unsigned comparison of
//! the stored bytes then orders values numerically. Recovering the signed
//! component is a fixed-width two's-complement subtraction.

use crate::protocol::constants::{TNS_DURATION_MID, TNS_DURATION_OFFSET};

/// Unbias a 4-byte field (days, years, fractional seconds).
#[inline]
pub fn unbias_u32(stored: u32, bias: u32) -> i32 {
    stored.wrapping_sub(bias) as i32
}

/// Unbias a 1-byte field (months, hours, minutes, seconds).
#[inline]
pub fn unbias_u8(stored: u8, bias: u8) -> i8 {
    stored.wrapping_sub(bias) as i8
}

/// Inverse of [`unbias_u32`].
#[inline]
pub fn bias_i32(value: i32, bias: u32) -> u32 {
    (value as u32).wrapping_add(bias)
}

/// Inverse of [`unbias_u8`].
#[inline]
pub fn bias_i8(value: i8, bias: u8) -> u8 {
    (value as u8).wrapping_add(bias)
}

/// Read a big-endian 4-byte field at `offset` and unbias it with [`TNS_DURATION_MID`].
#[inline]
pub(crate) fn read_duration_u32(data: &[u8], offset: usize) -> i32 {
    let stored = u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    unbias_u32(stored, TNS_DURATION_MID)
}

/// Read a 1-byte field at `offset` and unbias it with [`TNS_DURATION_OFFSET`].
#[inline]
pub(crate) fn read_duration_u8(data: &[u8], offset: usize) -> i8 {
    unbias_u8(data[offset], TNS_DURATION_OFFSET)
}
