//! Oracle binary type codecs for Rust
//!
//! Decoders for the fixed-width encodings Oracle uses on the wire for
//! `BINARY_FLOAT`, `BINARY_DOUBLE`, `INTERVAL YEAR TO MONTH` and
//! `INTERVAL DAY TO SECOND`. Every encoding is order-preserving: comparing
//! the raw bytes as unsigned values gives the same order as comparing the
//! decoded values.
//!
//! # Example
//!
//! ```
//! use oracle_thin_codec::{decode_value, OracleType, OracleValue, Result};
//!
//! fn main() -> Result<()> {
//!     let ty = OracleType::from_raw(183, 2, 6)?;
//!     let value = decode_value(&ty, &[127, 255, 255, 254, 48, 37, 26, 100, 197, 243, 248])?;
//!     assert_eq!(value.to_string(), "-02 12:23:34.456789");
//!
//!     let value = decode_value(&OracleType::BinaryFloat, &[195, 6, 115, 51])?;
//!     assert_eq!(value, OracleValue::BinaryFloat(134.45));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::decode::{
    decode_binary_double, decode_binary_float, decode_interval_ds, decode_interval_ym,
    decode_value, encode_binary_double, encode_binary_float, encode_interval_ds,
    encode_interval_ym, encode_value, format_interval_ds, format_interval_ym, read_column_value,
    write_column_value,
};
pub use protocol::types::{IntervalDS, IntervalYM, OracleType, OracleValue, Sign};
pub use protocol::{ReadBuffer, WriteBuffer};
