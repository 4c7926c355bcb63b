//! Data type decoders for Oracle wire protocol.
//!
//! Each supported datatype has its own module with decode functions.
//!
//! ## Currently Supported
//!
//! | Oracle Type | Type number | Length | Module |
//! |-------------|-------------|--------|--------|
//! | BINARY_FLOAT | 100 | 4 | `binary` |
//! | BINARY_DOUBLE | 101 | 8 | `binary` |
//! | INTERVAL YEAR TO MONTH | 182 | 5 | `interval` |
//! | INTERVAL DAY TO SECOND | 183 | 11 | `interval` |
//!
//! All four encodings keep unsigned byte order consistent with numeric
//! order. The interval fields share the sign-bias arithmetic in `bias`.

pub mod bias;
mod binary;
mod interval;
mod value;

pub use binary::{
    decode_binary_double, decode_binary_float, encode_binary_double, encode_binary_float,
};
pub use interval::{
    decode_interval_ds, decode_interval_ym, encode_interval_ds, encode_interval_ym,
    format_interval_ds, format_interval_ym,
};
pub use value::{decode_value, encode_value, read_column_value, write_column_value};
