//! Type dispatch between column data and the fixed-width codecs.

use log::{trace, warn};

use super::binary::{
    decode_binary_double, decode_binary_float, encode_binary_double, encode_binary_float,
};
use super::interval::{
    decode_interval_ds, decode_interval_ym, encode_interval_ds, encode_interval_ym,
};
use crate::error::{Error, Result};
use crate::protocol::buffer::{ReadBuffer, WriteBuffer};
use crate::protocol::types::{OracleType, OracleValue};

/// Decode a non-NULL value of the given type.
///
/// # Errors
/// Returns `Error::MalformedInput` if `data` is not the type's fixed width.
pub fn decode_value(ty: &OracleType, data: &[u8]) -> Result<OracleValue> {
    if data.len() != ty.fixed_size() {
        warn!(
            "rejecting {} value of {} bytes (expected {})",
            ty.name(),
            data.len(),
            ty.fixed_size()
        );
        return Err(Error::malformed(ty.name(), ty.fixed_size(), data.len()));
    }
    trace!("decoding {} from {:02x?}", ty, data);

    let value = match ty {
        OracleType::BinaryFloat => OracleValue::BinaryFloat(decode_binary_float(data)?),
        OracleType::BinaryDouble => OracleValue::BinaryDouble(decode_binary_double(data)?),
        OracleType::IntervalYM { .. } => OracleValue::IntervalYM(decode_interval_ym(data)?),
        OracleType::IntervalDS { .. } => OracleValue::IntervalDS(decode_interval_ds(data)?),
    };
    Ok(value)
}

/// Read a length-prefixed column value from row data and decode it.
pub fn read_column_value(buf: &mut ReadBuffer, ty: &OracleType) -> Result<OracleValue> {
    match buf.read_bytes_with_length()? {
        None => Ok(OracleValue::Null),
        Some(bytes) => decode_value(ty, &bytes),
    }
}

/// Encode a non-NULL value into its wire bytes.
///
/// # Errors
/// Returns `Error::TypeConversion` for NULL, which has no fixed-width form,
/// and for intervals whose components do not fit their fields.
pub fn encode_value(value: &OracleValue) -> Result<Vec<u8>> {
    let bytes = match value {
        OracleValue::Null => {
            return Err(Error::type_conversion("NULL has no fixed-width encoding"))
        }
        OracleValue::BinaryFloat(v) => encode_binary_float(*v).to_vec(),
        OracleValue::BinaryDouble(v) => encode_binary_double(*v).to_vec(),
        OracleValue::IntervalYM(iv) => encode_interval_ym(iv)?.to_vec(),
        OracleValue::IntervalDS(iv) => encode_interval_ds(iv)?.to_vec(),
    };
    Ok(bytes)
}

/// Write a value with its length prefix, NULL as a zero length.
pub fn write_column_value(buf: &mut WriteBuffer, value: &OracleValue) -> Result<()> {
    if value.is_null() {
        buf.write_null();
        return Ok(());
    }
    let bytes = encode_value(value)?;
    buf.write_bytes_with_length(&bytes);
    Ok(())
}
