//! Oracle INTERVAL YEAR TO MONTH and INTERVAL DAY TO SECOND decoders.
//!
//! INTERVAL YEAR TO MONTH is 5 bytes:
//! - bytes[0..4]: years, big-endian, biased by 0x80000000
//! - byte[4]: months, biased by 60
//!
//! INTERVAL DAY TO SECOND is 11 bytes:
//! - bytes[0..4]: days, big-endian, biased by 0x80000000
//! - byte[4]: hours, biased by 60
//! - byte[5]: minutes, biased by 60
//! - byte[6]: seconds, biased by 60
//! - bytes[7..11]: nanoseconds, big-endian, biased by 0x80000000
//!
//! Negative intervals store every component below its bias. The overall
//! sign is taken from the most significant nonzero component.

use super::bias::{bias_i32, bias_i8, read_duration_u32, read_duration_u8};
use crate::error::{Error, Result};
use crate::protocol::constants::{
    TNS_DURATION_MID, TNS_DURATION_OFFSET, TNS_INTERVAL_DS_LENGTH, TNS_INTERVAL_YM_LENGTH,
    TNS_NANOS_PER_SECOND,
};
use crate::protocol::types::{IntervalDS, IntervalYM, Sign};

/// Decode an INTERVAL YEAR TO MONTH from 5 bytes.
///
/// # Errors
/// Returns `Error::MalformedInput` if data is not exactly 5 bytes.
///
/// # Example
/// ```
/// use oracle_thin_codec::protocol::decode::decode_interval_ym;
///
/// let iv = decode_interval_ym(&[128, 0, 7, 229, 70]).unwrap();
/// assert_eq!(iv.to_string(), "+2021-10");
/// ```
pub fn decode_interval_ym(data: &[u8]) -> Result<IntervalYM> {
    if data.len() != TNS_INTERVAL_YM_LENGTH {
        return Err(Error::malformed(
            "INTERVAL YEAR TO MONTH",
            TNS_INTERVAL_YM_LENGTH,
            data.len(),
        ));
    }

    let years = read_duration_u32(data, 0);
    let months = read_duration_u8(data, 4);

    Ok(IntervalYM {
        sign: Sign::of_first_nonzero(&[years, i32::from(months)]),
        years: years.unsigned_abs(),
        months: months.unsigned_abs(),
    })
}

/// Decode an INTERVAL YEAR TO MONTH and format it as `+YY-MM`.
pub fn format_interval_ym(data: &[u8]) -> Result<String> {
    Ok(decode_interval_ym(data)?.to_string())
}

/// Decode an INTERVAL DAY TO SECOND from 11 bytes.
///
/// # Errors
/// Returns `Error::MalformedInput` if data is not exactly 11 bytes.
///
/// # Example
/// ```
/// use oracle_thin_codec::protocol::decode::decode_interval_ds;
///
/// let iv = decode_interval_ds(&[128, 0, 0, 0, 50, 40, 30, 128, 0, 0, 0]).unwrap();
/// assert_eq!(iv.to_string(), "-00 10:20:30.000000");
/// ```
pub fn decode_interval_ds(data: &[u8]) -> Result<IntervalDS> {
    if data.len() != TNS_INTERVAL_DS_LENGTH {
        return Err(Error::malformed(
            "INTERVAL DAY TO SECOND",
            TNS_INTERVAL_DS_LENGTH,
            data.len(),
        ));
    }

    let days = read_duration_u32(data, 0);
    let hours = read_duration_u8(data, 4);
    let minutes = read_duration_u8(data, 5);
    let seconds = read_duration_u8(data, 6);
    let fseconds = read_duration_u32(data, 7);

    let sign = Sign::of_first_nonzero(&[
        days,
        i32::from(hours),
        i32::from(minutes),
        i32::from(seconds),
        fseconds,
    ]);

    Ok(IntervalDS {
        sign,
        days: days.unsigned_abs(),
        hours: hours.unsigned_abs(),
        minutes: minutes.unsigned_abs(),
        seconds: seconds.unsigned_abs(),
        nanoseconds: fseconds.unsigned_abs(),
    })
}

/// Decode an INTERVAL DAY TO SECOND and format it as `+DD HH:MM:SS.ffffff`.
pub fn format_interval_ds(data: &[u8]) -> Result<String> {
    Ok(decode_interval_ds(data)?.to_string())
}

/// Apply the interval sign to a magnitude and narrow it to its field width.
fn signed_field<T: TryFrom<i64>>(sign: Sign, magnitude: i64, field: &str) -> Result<T> {
    let value = sign.apply(magnitude);
    T::try_from(value)
        .map_err(|_| Error::type_conversion(format!("Interval {} {} out of range", field, value)))
}

/// Encode an INTERVAL YEAR TO MONTH into its 5-byte wire form.
///
/// A negative zero interval encodes the same as positive zero.
///
/// # Errors
/// Returns `Error::TypeConversion` if a signed component does not fit its field.
pub fn encode_interval_ym(value: &IntervalYM) -> Result<[u8; TNS_INTERVAL_YM_LENGTH]> {
    let sign = value.sign;
    let years: i32 = signed_field(sign, i64::from(value.years), "years")?;
    let months: i8 = signed_field(sign, i64::from(value.months), "months")?;

    let mut out = [0u8; TNS_INTERVAL_YM_LENGTH];
    out[0..4].copy_from_slice(&bias_i32(years, TNS_DURATION_MID).to_be_bytes());
    out[4] = bias_i8(months, TNS_DURATION_OFFSET);
    Ok(out)
}

/// Encode an INTERVAL DAY TO SECOND into its 11-byte wire form.
///
/// # Errors
/// Returns `Error::TypeConversion` if a signed component does not fit its
/// field or the nanoseconds reach a full second.
pub fn encode_interval_ds(value: &IntervalDS) -> Result<[u8; TNS_INTERVAL_DS_LENGTH]> {
    if value.nanoseconds >= TNS_NANOS_PER_SECOND {
        return Err(Error::type_conversion(format!(
            "Interval nanoseconds {} out of range",
            value.nanoseconds
        )));
    }
    let sign = value.sign;
    let days: i32 = signed_field(sign, i64::from(value.days), "days")?;
    let hours: i8 = signed_field(sign, i64::from(value.hours), "hours")?;
    let minutes: i8 = signed_field(sign, i64::from(value.minutes), "minutes")?;
    let seconds: i8 = signed_field(sign, i64::from(value.seconds), "seconds")?;
    let fseconds: i32 = signed_field(sign, i64::from(value.nanoseconds), "nanoseconds")?;

    let mut out = [0u8; TNS_INTERVAL_DS_LENGTH];
    out[0..4].copy_from_slice(&bias_i32(days, TNS_DURATION_MID).to_be_bytes());
    out[4] = bias_i8(hours, TNS_DURATION_OFFSET);
    out[5] = bias_i8(minutes, TNS_DURATION_OFFSET);
    out[6] = bias_i8(seconds, TNS_DURATION_OFFSET);
    out[7..11].copy_from_slice(&bias_i32(fseconds, TNS_DURATION_MID).to_be_bytes());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // SELECT dump(cast(TO_YMINTERVAL(..) as INTERVAL YEAR TO MONTH)) FROM dual
    const YM_CASES: &[(&[u8], &str)] = &[
        (&[128, 0, 7, 229, 70], "+2021-10"),
        (&[127, 255, 248, 27, 50], "-2021-10"),
        (&[127, 255, 255, 251, 50], "-05-10"),
        (&[127, 255, 255, 251, 57], "-05-03"),
        (&[128, 0, 0, 0, 70], "+00-10"),
        (&[128, 0, 0, 0, 57], "-00-03"),
    ];

    // SELECT dump(cast(TO_DSINTERVAL(..) as INTERVAL DAY TO SECOND)) FROM dual
    const DS_CASES: &[(&[u8], &str)] = &[
        (&[128, 0, 0, 2, 72, 83, 94, 155, 46, 2, 0], "+02 12:23:34.456000"),
        (
            &[127, 255, 255, 254, 48, 37, 26, 100, 197, 243, 248],
            "-02 12:23:34.456789",
        ),
        (&[128, 0, 0, 0, 70, 80, 90, 155, 58, 12, 8], "+00 10:20:30.456789"),
        (
            &[128, 0, 0, 0, 50, 40, 30, 100, 197, 243, 248],
            "-00 10:20:30.456789",
        ),
        (&[128, 0, 0, 0, 50, 40, 30, 128, 0, 0, 0], "-00 10:20:30.000000"),
    ];

    #[test]
    fn test_format_interval_ym() {
        for (raw, expected) in YM_CASES {
            assert_eq!(format_interval_ym(raw).unwrap(), *expected, "raw={:?}", raw);
        }
    }

    #[test]
    fn test_format_interval_ds() {
        for (raw, expected) in DS_CASES {
            assert_eq!(format_interval_ds(raw).unwrap(), *expected, "raw={:?}", raw);
        }
    }

    #[test]
    fn test_decode_interval_ym_fields() {
        let iv = decode_interval_ym(&[127, 255, 248, 27, 50]).unwrap();
        assert_eq!(iv, IntervalYM::new(Sign::Negative, 2021, 10));
        assert_eq!(iv.total_months(), -24262);
    }

    #[test]
    fn test_decode_interval_ds_fields() {
        let iv = decode_interval_ds(&[128, 0, 0, 2, 72, 83, 94, 155, 46, 2, 0]).unwrap();
        assert_eq!(iv.sign, Sign::Positive);
        assert_eq!(iv.days, 2);
        assert_eq!(iv.hours, 12);
        assert_eq!(iv.minutes, 23);
        assert_eq!(iv.seconds, 34);
        assert_eq!(iv.nanoseconds, 456_000_000);
        assert_eq!(iv.microseconds(), 456_000);
    }

    #[test]
    fn test_sub_microsecond_remainder_truncated() {
        // Fraction field 0x80000000 + 123_456_999.
        let raw = [128, 0, 0, 0, 60, 60, 61, 135, 91, 205, 231];
        let iv = decode_interval_ds(&raw).unwrap();
        assert_eq!(iv.nanoseconds, 123_456_999);
        assert_eq!(format_interval_ds(&raw).unwrap(), "+00 00:00:01.123456");
    }

    #[test]
    fn test_all_zero_is_positive() {
        assert_eq!(format_interval_ym(&[128, 0, 0, 0, 60]).unwrap(), "+00-00");
        assert_eq!(
            format_interval_ds(&[128, 0, 0, 0, 60, 60, 60, 128, 0, 0, 0]).unwrap(),
            "+00 00:00:00.000000"
        );
    }

    #[test]
    fn test_sign_from_lowest_priority_field() {
        // Only the fractional seconds are nonzero and negative.
        let raw = [128, 0, 0, 0, 60, 60, 60, 127, 255, 255, 255];
        assert_eq!(format_interval_ds(&raw).unwrap(), "-00 00:00:00.000000");
        assert_eq!(decode_interval_ds(&raw).unwrap().nanoseconds, 1);
    }

    #[test]
    fn test_higher_field_wins_sign() {
        // Day positive, hour negative: the day decides.
        let raw = [128, 0, 0, 1, 50, 60, 60, 128, 0, 0, 0];
        assert_eq!(format_interval_ds(&raw).unwrap(), "+01 10:00:00.000000");
        // Year positive, month negative.
        assert_eq!(format_interval_ym(&[128, 0, 0, 1, 57]).unwrap(), "+01-03");
    }

    #[test]
    fn test_extreme_day_field() {
        let iv = decode_interval_ds(&[0, 0, 0, 0, 60, 60, 60, 128, 0, 0, 0]).unwrap();
        assert_eq!(iv.sign, Sign::Negative);
        assert_eq!(iv.days, 1u32 << 31);
        assert_eq!(
            encode_interval_ds(&iv).unwrap(),
            [0, 0, 0, 0, 60, 60, 60, 128, 0, 0, 0]
        );
    }

    #[test]
    fn test_encode_matches_dump() {
        for (raw, _) in YM_CASES {
            let iv = decode_interval_ym(raw).unwrap();
            assert_eq!(&encode_interval_ym(&iv).unwrap()[..], *raw);
        }
        for (raw, _) in DS_CASES {
            let iv = decode_interval_ds(raw).unwrap();
            assert_eq!(&encode_interval_ds(&iv).unwrap()[..], *raw);
        }
    }

    #[test]
    fn test_negative_zero_encodes_as_zero() {
        let iv = IntervalYM::new(Sign::Negative, 0, 0);
        let raw = encode_interval_ym(&iv).unwrap();
        assert_eq!(raw, [128, 0, 0, 0, 60]);
        assert_eq!(decode_interval_ym(&raw).unwrap().sign, Sign::Positive);
    }

    #[test]
    fn test_encode_rejects_out_of_range_fields() {
        // Would otherwise wrap into a negative year.
        let iv = IntervalYM::new(Sign::Positive, u32::MAX, 0);
        assert!(matches!(
            encode_interval_ym(&iv),
            Err(Error::TypeConversion { .. })
        ));

        let iv = IntervalDS::new(Sign::Positive, 0, 200, 0, 0, 0);
        assert!(matches!(
            encode_interval_ds(&iv),
            Err(Error::TypeConversion { .. })
        ));

        let iv = IntervalDS::new(Sign::Positive, 0, 0, 0, 0, 3_000_000_000);
        assert!(matches!(
            encode_interval_ds(&iv),
            Err(Error::TypeConversion { .. })
        ));
        let iv = IntervalDS::new(Sign::Negative, 0, 0, 0, 0, 1_000_000_000);
        assert!(encode_interval_ds(&iv).is_err());
    }

    #[test]
    fn test_encode_field_limits() {
        // i32::MIN has a magnitude one larger than i32::MAX.
        let iv = IntervalYM::new(Sign::Negative, 1u32 << 31, 0);
        assert_eq!(encode_interval_ym(&iv).unwrap(), [0, 0, 0, 0, 60]);
        let iv = IntervalYM::new(Sign::Positive, 1u32 << 31, 0);
        assert!(encode_interval_ym(&iv).is_err());

        let iv = IntervalDS::new(Sign::Positive, 0, 127, 0, 0, 999_999_999);
        assert!(encode_interval_ds(&iv).is_ok());
        let iv = IntervalDS::new(Sign::Positive, 0, 128, 0, 0, 0);
        assert!(encode_interval_ds(&iv).is_err());
    }

    #[test]
    fn test_wrong_length() {
        assert!(matches!(
            decode_interval_ym(&[128, 0, 7, 229]),
            Err(Error::MalformedInput {
                expected: 5,
                actual: 4,
                ..
            })
        ));
        assert!(decode_interval_ds(&[128, 0, 0, 2, 72, 83, 94, 155, 46, 2, 0, 0]).is_err());
    }
}
