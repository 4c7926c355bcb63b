//! Wire constants for the fixed-width binary types.
//!
//! Names follow the python-oracledb thin client implementation.

// Data type numbers
pub const ORA_TYPE_NUM_BINARY_DOUBLE: u16 = 101;
pub const ORA_TYPE_NUM_BINARY_FLOAT: u16 = 100;
pub const ORA_TYPE_NUM_INTERVAL_DS: u16 = 183;
pub const ORA_TYPE_NUM_INTERVAL_YM: u16 = 182;

// Fixed value lengths
pub const TNS_BINARY_FLOAT_LENGTH: usize = 4;
pub const TNS_BINARY_DOUBLE_LENGTH: usize = 8;
pub const TNS_INTERVAL_YM_LENGTH: usize = 5;
pub const TNS_INTERVAL_DS_LENGTH: usize = 11;

// Interval field biases
pub const TNS_DURATION_MID: u32 = 0x8000_0000;
pub const TNS_DURATION_OFFSET: u8 = 60;

// Column length indicators
pub const TNS_LONG_LENGTH_INDICATOR: u8 = 254;
pub const TNS_NULL_LENGTH_INDICATOR: u8 = 0;

// Time units
pub const TNS_NANOS_PER_MICRO: u32 = 1_000;
pub const TNS_NANOS_PER_SECOND: u32 = 1_000_000_000;
pub const TNS_SECONDS_PER_DAY: i64 = 86_400;
pub const TNS_MONTHS_PER_YEAR: i64 = 12;
