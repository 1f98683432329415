//! Conversion between display dates (`DD/MM/YYYY`, `DD/MM/YYYY HH:mm`) and their wire forms.
//!
//! All values are naive wall-clock values. Digits are moved, never reinterpreted: no
//! timezone shift is applied and calendar validity is not checked.

use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::{DISPLAY_DATE_LEN, DISPLAY_DATE_TIME_LEN};
use crate::{FormError, FormResult};

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when `value` is exactly `DD/MM/YYYY` with digits in every slot.
pub fn is_display_date(value: &str) -> bool {
    let b = value.as_bytes();
    b.len() == DISPLAY_DATE_LEN
        && b.iter().enumerate().all(|(i, c)| match i {
            2 | 5 => *c == b'/',
            _ => c.is_ascii_digit(),
        })
}

/// True when `value` is exactly `HH:mm` with digits in every slot.
pub fn is_display_time(value: &str) -> bool {
    let b = value.as_bytes();
    b.len() == 5
        && b.iter().enumerate().all(|(i, c)| match i {
            2 => *c == b':',
            _ => c.is_ascii_digit(),
        })
}

/// True when `value` is exactly `DD/MM/YYYY HH:mm`.
pub fn is_display_date_time(value: &str) -> bool {
    value.len() == DISPLAY_DATE_TIME_LEN
        && value
            .split_once(' ')
            .is_some_and(|(date, time)| is_display_date(date) && is_display_time(time))
}

/// `DD/MM/YYYY` → `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`FormError::MalformedDate`] unless the input is ten characters splitting on `/`
/// into numeric groups of two, two and four digits.
pub fn to_wire_date(display: &str) -> FormResult<String> {
    if display.chars().count() != DISPLAY_DATE_LEN {
        return Err(FormError::MalformedDate);
    }
    let mut parts = display.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None)
            if day.len() == 2
                && month.len() == 2
                && year.len() == 4
                && all_digits(day)
                && all_digits(month)
                && all_digits(year) =>
        {
            Ok(format!("{year}-{month}-{day}"))
        }
        _ => Err(FormError::MalformedDate),
    }
}

/// `DD/MM/YYYY HH:mm` → `YYYY-MM-DDTHH:mm:00`.
///
/// # Errors
///
/// Returns [`FormError::MalformedDateTime`] if the date or the time part is absent or
/// malformed.
pub fn to_wire_date_time(display: &str) -> FormResult<String> {
    let (date, time) = display
        .split_once(' ')
        .ok_or(FormError::MalformedDateTime)?;
    if date.is_empty() || !is_display_time(time) {
        return Err(FormError::MalformedDateTime);
    }
    let date = to_wire_date(date).map_err(|_| FormError::MalformedDateTime)?;
    Ok(format!("{date}T{time}:00"))
}

/// `YYYY-MM-DDTHH:mm` → `DD/MM/YYYY HH:mm`, for pre-filling a form.
///
/// Returns an empty string when either component is missing, since the result only feeds
/// a display field. Seconds on the time component are dropped.
pub fn to_display_date_time(wire: &str) -> String {
    let Some((date, time)) = wire.split_once('T') else {
        return String::new();
    };
    if date.is_empty() || time.is_empty() {
        return String::new();
    }
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return String::new();
    };
    let time = time.get(..5).filter(|t| is_display_time(t)).unwrap_or(time);
    format!("{day}/{month}/{year} {time}")
}

/// Formats a picked date-time for the display field.
pub fn display_from_naive(value: NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Formats a picked date-time as the value of a `datetime-local` style input.
pub fn input_value_from_naive(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// Renders a wire date (or the date part of a wire date-time) as `DD/MM/YYYY`.
///
/// Used by the list screens; anything unparseable renders as an empty string.
pub fn display_date_from_wire(wire: &str) -> String {
    let date_part = wire.trim().get(..DISPLAY_DATE_LEN).unwrap_or_default();
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => String::new(),
    }
}
