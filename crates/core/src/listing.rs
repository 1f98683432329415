//! Helpers for the record list screens: display formatting of wire values, search and row
//! summaries.
//!
//! Records returned by the remote service are loosely shaped JSON objects, so everything
//! here works on [`serde_json::Value`] and tolerates missing or oddly typed fields.

use serde_json::Value;

use crate::constants::{IDENTIFIER_MAX_DIGITS, LANDLINE_DIGITS, NOT_INFORMED, PHONE_MAX_DIGITS};
use crate::dates::{display_date_from_wire, to_display_date_time};
use crate::mask::{canonicalize, mask_identifier, mask_phone};
use crate::schema::{FieldKind, RecordKind};

/// Masks a stored CPF when it has exactly eleven digits; anything else is shown as stored.
pub fn display_identifier(value: &str) -> String {
    if canonicalize(value).len() == IDENTIFIER_MAX_DIGITS {
        mask_identifier(value)
    } else {
        value.to_owned()
    }
}

/// Masks a stored phone when it has ten or eleven digits; anything else is shown as stored.
pub fn display_phone(value: &str) -> String {
    match canonicalize(value).len() {
        LANDLINE_DIGITS | PHONE_MAX_DIGITS => mask_phone(value),
        _ => value.to_owned(),
    }
}

/// Text form of a scalar JSON value. Objects, arrays of objects and nulls yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<_> = items.iter().filter_map(scalar_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

/// Case-insensitive substring match of `query` against the search fields of `kind`.
///
/// A blank query matches everything; non-object records match nothing.
pub fn matches_search(kind: RecordKind, record: &Value, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let Some(object) = record.as_object() else {
        return false;
    };
    let needle = query.to_lowercase();
    kind.search_fields().iter().any(|field| {
        object
            .get(*field)
            .and_then(scalar_text)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

/// Records of `kind` matching `query`, in their original order.
pub fn filter_records<'a>(kind: RecordKind, records: &'a [Value], query: &str) -> Vec<&'a Value> {
    let malformed = records.iter().filter(|r| !r.is_object()).count();
    if malformed > 0 {
        tracing::warn!("{malformed} {kind} record(s) are not JSON objects");
    }
    records
        .iter()
        .filter(|record| matches_search(kind, record, query))
        .collect()
}

/// One rendered row of a list screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSummary {
    /// Server-assigned identifier, when the service sent one.
    pub id: Option<String>,
    pub title: String,
    /// `(label, display value)` pairs in field declaration order.
    pub rows: Vec<(&'static str, String)>,
}

fn display_value(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::Identifier => display_identifier(raw),
        FieldKind::Phone => display_phone(raw),
        FieldKind::BirthDate => display_date_from_wire(raw),
        FieldKind::DateTime => {
            let shown = to_display_date_time(raw);
            if shown.is_empty() {
                raw.to_owned()
            } else {
                shown
            }
        }
        FieldKind::HealthCard | FieldKind::Text | FieldKind::Gender | FieldKind::List => {
            raw.to_owned()
        }
    }
}

/// Builds the list-screen row for `record`, falling back to a placeholder for absent values.
pub fn summarize(kind: RecordKind, record: &Value) -> RecordSummary {
    let field_text = |name: &str| record.get(name).and_then(scalar_text);

    let id = field_text("id").or_else(|| field_text("_id"));
    let title_field = kind.fields()[0].name;
    let title = field_text(title_field)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| NOT_INFORMED.to_owned());

    let rows = kind
        .fields()
        .iter()
        .filter(|spec| spec.name != title_field)
        .map(|spec| {
            let shown = field_text(spec.name)
                .map(|raw| display_value(spec.kind, &raw))
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| NOT_INFORMED.to_owned());
            (spec.label, shown)
        })
        .collect();

    RecordSummary { id, title, rows }
}
