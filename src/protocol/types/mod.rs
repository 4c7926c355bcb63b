//! Oracle data types for the fixed-width binary codecs.

mod interval;
mod oracle_type;
mod value;

pub use interval::{IntervalDS, IntervalYM, Sign};
pub use oracle_type::OracleType;
pub use value::OracleValue;
