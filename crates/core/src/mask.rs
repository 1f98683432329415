//! Keystroke masking for digit-based fields.
//!
//! Every mask strips the input down to its ASCII digits, truncates to the field maximum and
//! re-inserts the separators for that field. Because separators are always discarded first,
//! feeding a masked value back in yields the same string, and a half-typed value renders as
//! much of the pattern as its digits allow.

use crate::constants::{
    BIRTH_DATE_MAX_DIGITS, DATE_TIME_MAX_DIGITS, HEALTH_CARD_MAX_DIGITS, IDENTIFIER_MAX_DIGITS,
    LANDLINE_DIGITS, PHONE_MAX_DIGITS,
};
use crate::schema::FieldKind;
use crate::{FormError, FormResult};

/// Keeps only the ASCII digits of `value`.
pub fn canonicalize(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn digits_up_to(raw: &str, max: usize) -> Vec<char> {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Renders `digits` inserting `sep` before the digit at each listed index.
fn with_separators(digits: &[char], seps: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + seps.len() * 2);
    for (i, d) in digits.iter().enumerate() {
        if let Some((_, sep)) = seps.iter().find(|(at, _)| *at == i) {
            out.push_str(sep);
        }
        out.push(*d);
    }
    out
}

/// CPF mask: `123.456.789-01`.
pub fn mask_identifier(raw: &str) -> String {
    let digits = digits_up_to(raw, IDENTIFIER_MAX_DIGITS);
    with_separators(&digits, &[(3, "."), (6, "."), (9, "-")])
}

/// Phone mask: `(11) 98765-4321` for mobiles, `(11) 3456-7890` for landlines.
///
/// While typing, the local part keeps the five-digit mobile grouping until exactly ten
/// digits are present.
pub fn mask_phone(raw: &str) -> String {
    let digits = digits_up_to(raw, PHONE_MAX_DIGITS);
    let n = digits.len();
    if n <= 2 {
        return digits.into_iter().collect();
    }

    let area: String = digits[..2].iter().collect();
    let local = &digits[2..];
    let split = if n == LANDLINE_DIGITS { 4 } else { 5 };

    let mut out = format!("({area}) ");
    if local.len() <= split {
        out.extend(local);
    } else {
        out.extend(&local[..split]);
        out.push('-');
        out.extend(&local[split..]);
    }
    out
}

/// Cartão SUS mask: digits only, at most fifteen.
pub fn mask_health_card(raw: &str) -> String {
    digits_up_to(raw, HEALTH_CARD_MAX_DIGITS).into_iter().collect()
}

/// Birth date mask: `DD/MM/YYYY`.
pub fn mask_birth_date(raw: &str) -> String {
    let digits = digits_up_to(raw, BIRTH_DATE_MAX_DIGITS);
    with_separators(&digits, &[(2, "/"), (4, "/")])
}

/// Date-time mask for typed appointment entry: `DD/MM/YYYY HH:mm`.
pub fn mask_date_time(raw: &str) -> String {
    let digits = digits_up_to(raw, DATE_TIME_MAX_DIGITS);
    with_separators(&digits, &[(2, "/"), (4, "/"), (8, " "), (10, ":")])
}

/// Applies the mask matching `kind`. Text, choice and list fields pass through untouched.
pub fn mask_field(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::Identifier => mask_identifier(raw),
        FieldKind::Phone => mask_phone(raw),
        FieldKind::HealthCard => mask_health_card(raw),
        FieldKind::BirthDate => mask_birth_date(raw),
        FieldKind::DateTime => mask_date_time(raw),
        FieldKind::Text | FieldKind::Gender | FieldKind::List => raw.to_owned(),
    }
}

/// Reports digit input longer than the field allows.
///
/// The masks truncate silently; this is for callers that want to tell the user instead.
///
/// # Errors
///
/// Returns [`FormError::LengthExceeded`] when `raw` holds more digits than `kind` accepts.
pub fn check_length(kind: FieldKind, raw: &str) -> FormResult<()> {
    let Some(max) = kind.max_digits() else {
        return Ok(());
    };
    let actual = raw.chars().filter(char::is_ascii_digit).count();
    if actual > max {
        return Err(FormError::LengthExceeded { max, actual });
    }
    Ok(())
}
