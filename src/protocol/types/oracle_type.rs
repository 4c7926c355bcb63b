//! Oracle data type enum for the fixed-width binary types.
//!
//! Precision and scale come from column metadata: for intervals the
//! precision is the leading field precision and the scale is the
//! fractional seconds precision. Neither changes the wire width.

use crate::error::{Error, Result};
use crate::protocol::constants::{
    ORA_TYPE_NUM_BINARY_DOUBLE, ORA_TYPE_NUM_BINARY_FLOAT, ORA_TYPE_NUM_INTERVAL_DS,
    ORA_TYPE_NUM_INTERVAL_YM, TNS_BINARY_DOUBLE_LENGTH, TNS_BINARY_FLOAT_LENGTH,
    TNS_INTERVAL_DS_LENGTH, TNS_INTERVAL_YM_LENGTH,
};

/// Oracle data type with type-specific attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleType {
    /// BINARY_FLOAT - 32-bit IEEE-754.
    BinaryFloat,
    /// BINARY_DOUBLE - 64-bit IEEE-754.
    BinaryDouble,
    /// INTERVAL YEAR(precision) TO MONTH.
    IntervalYM { year_precision: i8 },
    /// INTERVAL DAY(precision) TO SECOND(scale).
    IntervalDS {
        day_precision: i8,
        fractional_precision: i8,
    },
}

impl OracleType {
    /// Create from raw Oracle type number and metadata.
    ///
    /// Returns `Err(Error::UnsupportedType)` for types without a codec here.
    pub fn from_raw(oracle_type: u8, precision: i8, scale: i8) -> Result<Self> {
        match oracle_type as u16 {
            ORA_TYPE_NUM_BINARY_FLOAT => Ok(OracleType::BinaryFloat),
            ORA_TYPE_NUM_BINARY_DOUBLE => Ok(OracleType::BinaryDouble),
            ORA_TYPE_NUM_INTERVAL_YM => Ok(OracleType::IntervalYM {
                year_precision: precision,
            }),
            ORA_TYPE_NUM_INTERVAL_DS => Ok(OracleType::IntervalDS {
                day_precision: precision,
                fractional_precision: scale,
            }),
            _ => Err(Error::UnsupportedType {
                type_num: oracle_type,
            }),
        }
    }

    /// Get the Oracle type number.
    pub fn type_num(&self) -> u8 {
        match self {
            OracleType::BinaryFloat => ORA_TYPE_NUM_BINARY_FLOAT as u8,
            OracleType::BinaryDouble => ORA_TYPE_NUM_BINARY_DOUBLE as u8,
            OracleType::IntervalYM { .. } => ORA_TYPE_NUM_INTERVAL_YM as u8,
            OracleType::IntervalDS { .. } => ORA_TYPE_NUM_INTERVAL_DS as u8,
        }
    }

    /// Exact encoded length of a non-NULL value.
    pub fn fixed_size(&self) -> usize {
        match self {
            OracleType::BinaryFloat => TNS_BINARY_FLOAT_LENGTH,
            OracleType::BinaryDouble => TNS_BINARY_DOUBLE_LENGTH,
            OracleType::IntervalYM { .. } => TNS_INTERVAL_YM_LENGTH,
            OracleType::IntervalDS { .. } => TNS_INTERVAL_DS_LENGTH,
        }
    }

    /// Type name without precision.
    pub fn name(&self) -> &'static str {
        match self {
            OracleType::BinaryFloat => "BINARY_FLOAT",
            OracleType::BinaryDouble => "BINARY_DOUBLE",
            OracleType::IntervalYM { .. } => "INTERVAL YEAR TO MONTH",
            OracleType::IntervalDS { .. } => "INTERVAL DAY TO SECOND",
        }
    }
}

impl std::fmt::Display for OracleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleType::BinaryFloat | OracleType::BinaryDouble => write!(f, "{}", self.name()),
            OracleType::IntervalYM { year_precision } => {
                write!(f, "INTERVAL YEAR({}) TO MONTH", year_precision)
            }
            OracleType::IntervalDS {
                day_precision,
                fractional_precision,
            } => write!(
                f,
                "INTERVAL DAY({}) TO SECOND({})",
                day_precision, fractional_precision
            ),
        }
    }
}
