//! Caller-owned form state.
//!
//! The library functions are stateless; a [`FormState`] is the state object a screen (or the
//! CLI) keeps per form instance and threads through them on every edit and on submit.

use std::collections::BTreeMap;

use crate::dates::to_display_date_time;
use crate::mask::mask_field;
use crate::record::{to_wire_record, Record};
use crate::schema::{FieldKind, FieldSpec, RecordKind};
use crate::validation::validate;
use crate::{FormError, FormResult};

/// Raw form contents: display text per field plus entries of list fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    text: BTreeMap<String, String>,
    lists: BTreeMap<String, Vec<String>>,
}

impl FormValues {
    /// Display text of `name`, or `""` when the field was never set.
    pub fn text(&self, name: &str) -> &str {
        self.text.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Entries of list field `name`, empty when never set.
    pub fn list(&self, name: &str) -> &[String] {
        self.lists.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.text.insert(name.into(), value.into());
    }

    pub fn push_list_item(&mut self, name: impl Into<String>, item: impl Into<String>) {
        self.lists.entry(name.into()).or_default().push(item.into());
    }

    /// Builder form of [`FormValues::set_text`].
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    /// Builder form of [`FormValues::push_list_item`].
    pub fn with_list_item(mut self, name: impl Into<String>, item: impl Into<String>) -> Self {
        self.push_list_item(name, item);
        self
    }

    fn list_mut(&mut self, name: &str) -> &mut Vec<String> {
        self.lists.entry(name.to_owned()).or_default()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.lists.clear();
    }
}

/// State of one form instance for a given [`RecordKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    kind: RecordKind,
    values: FormValues,
}

impl FormState {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            values: FormValues::default(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    fn spec(&self, name: &str) -> FormResult<&'static FieldSpec> {
        self.kind
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))
    }

    fn list_spec(&self, name: &str) -> FormResult<&'static FieldSpec> {
        self.spec(name)
            .ok()
            .filter(|spec| spec.kind == FieldKind::List)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))
    }

    /// Stores the masked form of `raw` in text field `name` and returns what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a text-valued field of this kind.
    pub fn set_field(&mut self, name: &str, raw: &str) -> FormResult<&str> {
        let spec = self.spec(name)?;
        if spec.kind == FieldKind::List {
            return Err(FormError::UnknownField(name.to_owned()));
        }
        self.values.set_text(spec.name, mask_field(spec.kind, raw));
        Ok(self.values.text(spec.name))
    }

    /// Appends a trimmed entry to list field `name`.
    ///
    /// Returns `Ok(false)` and leaves the list untouched when the entry is blank or already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a list field of this kind.
    pub fn add_list_item(&mut self, name: &str, item: &str) -> FormResult<bool> {
        let spec = self.list_spec(name)?;
        let item = item.trim();
        if item.is_empty() {
            return Ok(false);
        }
        let list = self.values.list_mut(spec.name);
        if list.iter().any(|existing| existing == item) {
            return Ok(false);
        }
        list.push(item.to_owned());
        Ok(true)
    }

    /// Removes and returns the entry at `index` of list field `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a list field of this kind.
    pub fn remove_list_item(&mut self, name: &str, index: usize) -> FormResult<Option<String>> {
        let spec = self.list_spec(name)?;
        let list = self.values.list_mut(spec.name);
        if index >= list.len() {
            return Ok(None);
        }
        Ok(Some(list.remove(index)))
    }

    /// Pre-fills a date-time field from a `YYYY-MM-DDTHH:mm` value chosen elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a date-time field of this kind.
    pub fn prefill_date_time(&mut self, name: &str, wire: &str) -> FormResult<&str> {
        let spec = self.spec(name)?;
        if spec.kind != FieldKind::DateTime {
            return Err(FormError::UnknownField(name.to_owned()));
        }
        self.values.set_text(spec.name, to_display_date_time(wire));
        Ok(self.values.text(spec.name))
    }

    pub fn validate(&self) -> FormResult<()> {
        validate(self.kind, &self.values)
    }

    pub fn to_wire_record(&self) -> FormResult<Record> {
        to_wire_record(self.kind, &self.values)
    }

    /// Clears every field, as after a successful submission.
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_masks_by_kind() {
        let mut form = FormState::new(RecordKind::Patient);
        assert_eq!(form.set_field("cpf", "12345678901").unwrap(), "123.456.789-01");
        assert_eq!(
            form.set_field("telefone", "11987654321").unwrap(),
            "(11) 98765-4321"
        );
        assert_eq!(
            form.set_field("dataNascimento", "25121990").unwrap(),
            "25/12/1990"
        );
        assert_eq!(form.set_field("nome", " Ana ").unwrap(), " Ana ");
    }

    #[test]
    fn keystroke_sequence_stays_masked() {
        let mut form = FormState::new(RecordKind::Patient);
        let mut shown = String::new();
        for key in "12345678901".chars() {
            let typed = format!("{shown}{key}");
            shown = form.set_field("cpf", &typed).unwrap().to_owned();
        }
        assert_eq!(shown, "123.456.789-01");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = FormState::new(RecordKind::Appointment);
        assert_eq!(
            form.set_field("cpf", "1"),
            Err(FormError::UnknownField("cpf".into()))
        );
    }

    #[test]
    fn list_fields_reject_set_field() {
        let mut form = FormState::new(RecordKind::Patient);
        assert!(form.set_field("vacinas", "BCG").is_err());
    }

    #[test]
    fn list_items_are_trimmed_and_deduplicated() {
        let mut form = FormState::new(RecordKind::Patient);
        assert_eq!(form.add_list_item("vacinas", " BCG "), Ok(true));
        assert_eq!(form.add_list_item("vacinas", "BCG"), Ok(false));
        assert_eq!(form.add_list_item("vacinas", "   "), Ok(false));
        assert_eq!(form.add_list_item("vacinas", "Hepatite B"), Ok(true));
        assert_eq!(form.values().list("vacinas"), ["BCG", "Hepatite B"]);

        assert_eq!(form.remove_list_item("vacinas", 0), Ok(Some("BCG".into())));
        assert_eq!(form.remove_list_item("vacinas", 5), Ok(None));
        assert_eq!(form.values().list("vacinas"), ["Hepatite B"]);
    }

    #[test]
    fn list_operations_need_list_fields() {
        let mut form = FormState::new(RecordKind::Patient);
        assert_eq!(
            form.add_list_item("nome", "x"),
            Err(FormError::UnknownField("nome".into()))
        );
        let mut form = FormState::new(RecordKind::Professional);
        assert!(form.add_list_item("vacinas", "BCG").is_err());
    }

    #[test]
    fn prefill_date_time_from_picker_value() {
        let mut form = FormState::new(RecordKind::Appointment);
        assert_eq!(
            form.prefill_date_time("dataHora", "2025-01-01T14:30").unwrap(),
            "01/01/2025 14:30"
        );
        assert_eq!(form.prefill_date_time("dataHora", "garbage").unwrap(), "");
        assert!(form.prefill_date_time("local", "2025-01-01T14:30").is_err());
    }

    #[test]
    fn reset_clears_values() {
        let mut form = FormState::new(RecordKind::Patient);
        form.set_field("nome", "Ana").unwrap();
        form.add_list_item("alergias", "Dipirona").unwrap();
        form.reset();
        assert_eq!(form.values(), &FormValues::default());
        assert_eq!(
            form.validate(),
            Err(FormError::MissingField("nome".into()))
        );
    }
}
