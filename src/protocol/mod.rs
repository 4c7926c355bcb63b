//! Wire-level codecs for Oracle fixed-width binary types.

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod types;

pub use buffer::{ReadBuffer, WriteBuffer};
pub use types::{IntervalDS, IntervalYM, OracleType, OracleValue, Sign};
