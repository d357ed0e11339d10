use chrono::NaiveDate;

use crate::server::error::validation::FieldError;

const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `yyyy-MM-dd` birthdate that must not lie after `today`.
///
/// chrono accepts padded, signed, and unpadded fields, so the exact `dddd-dd-dd` shape is
/// checked before parsing.
pub fn parse_birthdate(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let invalid_format = || {
        FieldError::new(
            "birthdate",
            "Birthdate must be a valid date in the format yyyy-MM-dd",
        )
    };

    if !has_birthdate_shape(value) {
        return Err(invalid_format());
    }

    let birthdate =
        NaiveDate::parse_from_str(value, BIRTHDATE_FORMAT).map_err(|_| invalid_format())?;

    if birthdate > today {
        return Err(FieldError::new(
            "birthdate",
            "Birthdate cannot be in the future",
        ));
    }

    Ok(birthdate)
}

fn has_birthdate_shape(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
