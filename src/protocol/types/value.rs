//! Oracle value types for decoded column data.

use std::fmt;

use super::interval::{IntervalDS, IntervalYM};

/// Oracle value enum representing a single decoded column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OracleValue {
    /// NULL value.
    Null,
    /// BINARY_FLOAT value.
    BinaryFloat(f32),
    /// BINARY_DOUBLE value.
    BinaryDouble(f64),
    /// INTERVAL YEAR TO MONTH value.
    IntervalYM(IntervalYM),
    /// INTERVAL DAY TO SECOND value.
    IntervalDS(IntervalDS),
}

impl OracleValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, OracleValue::Null)
    }

    /// Try to get the value as f32. Only BINARY_FLOAT converts losslessly.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            OracleValue::BinaryFloat(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert to f64.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            OracleValue::BinaryFloat(v) => Some(f64::from(*v)),
            OracleValue::BinaryDouble(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the value as an INTERVAL YEAR TO MONTH.
    pub fn as_interval_ym(&self) -> Option<&IntervalYM> {
        match self {
            OracleValue::IntervalYM(iv) => Some(iv),
            _ => None,
        }
    }

    /// Try to get the value as an INTERVAL DAY TO SECOND.
    pub fn as_interval_ds(&self) -> Option<&IntervalDS> {
        match self {
            OracleValue::IntervalDS(iv) => Some(iv),
            _ => None,
        }
    }
}

impl fmt::Display for OracleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleValue::Null => write!(f, "NULL"),
            OracleValue::BinaryFloat(v) => write!(f, "{}", v),
            OracleValue::BinaryDouble(v) => write!(f, "{}", v),
            OracleValue::IntervalYM(iv) => write!(f, "{}", iv),
            OracleValue::IntervalDS(iv) => write!(f, "{}", iv),
        }
    }
}

impl From<f32> for OracleValue {
    fn from(v: f32) -> Self {
        OracleValue::BinaryFloat(v)
    }
}

impl From<f64> for OracleValue {
    fn from(v: f64) -> Self {
        OracleValue::BinaryDouble(v)
    }
}

impl From<IntervalYM> for OracleValue {
    fn from(iv: IntervalYM) -> Self {
        OracleValue::IntervalYM(iv)
    }
}

impl From<IntervalDS> for OracleValue {
    fn from(iv: IntervalDS) -> Self {
        OracleValue::IntervalDS(iv)
    }
}
