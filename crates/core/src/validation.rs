//! Submission gates for form values.
//!
//! Validation is synchronous, total and free of side effects. It reports what is wrong and
//! leaves presentation to the caller.

use crate::dates::{is_display_date, is_display_date_time};
use crate::form::FormValues;
use crate::mask::canonicalize;
use crate::schema::{FieldKind, FieldSpec, RecordKind};
use crate::{FormError, FormResult};

/// A problem attached to the field that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub error: FormError,
}

/// A digits-only field with punctuation but no digits counts as blank.
fn is_blank(spec: &FieldSpec, values: &FormValues) -> bool {
    match spec.kind {
        FieldKind::List => values.list(spec.name).iter().all(|v| v.trim().is_empty()),
        kind if kind.is_digits_only() => canonicalize(values.text(spec.name)).is_empty(),
        _ => values.text(spec.name).trim().is_empty(),
    }
}

/// Structural check for a filled field. Blank values are the required-field gate's concern.
fn check_shape(spec: &FieldSpec, values: &FormValues) -> FormResult<()> {
    let value = values.text(spec.name);
    if value.trim().is_empty() {
        return Ok(());
    }
    match spec.kind {
        FieldKind::BirthDate if !is_display_date(value) => Err(FormError::MalformedDate),
        FieldKind::DateTime if !is_display_date_time(value) => Err(FormError::MalformedDateTime),
        kind => match kind.options() {
            Some(options) if !options.contains(&value) => Err(FormError::InvalidOption {
                field: spec.name.to_owned(),
                value: value.to_owned(),
            }),
            _ => Ok(()),
        },
    }
}

/// Checks `values` against the layout of `kind` and returns the first problem found.
///
/// Required fields are checked first, in declaration order; date fields are then checked for
/// shape and choice fields for membership.
///
/// # Errors
///
/// - [`FormError::MissingField`] for the first empty or whitespace-only required field.
/// - [`FormError::MalformedDate`] for a birth date that is not `DD/MM/YYYY`.
/// - [`FormError::MalformedDateTime`] for a date-time that is not `DD/MM/YYYY HH:mm`.
/// - [`FormError::InvalidOption`] for a choice field holding a value it does not offer.
pub fn validate(kind: RecordKind, values: &FormValues) -> FormResult<()> {
    if let Some(missing) = kind.required_fields().find(|f| is_blank(f, values)) {
        return Err(FormError::MissingField(missing.name.to_owned()));
    }
    for spec in kind.fields() {
        check_shape(spec, values)?;
    }
    Ok(())
}

/// Every problem at once, in declaration order, for inline per-field messages.
pub fn validate_all(kind: RecordKind, values: &FormValues) -> Vec<FieldIssue> {
    kind.fields()
        .iter()
        .filter_map(|spec| {
            let error = if spec.required && is_blank(spec, values) {
                FormError::MissingField(spec.name.to_owned())
            } else {
                check_shape(spec, values).err()?
            };
            Some(FieldIssue {
                field: spec.name,
                error,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_patient() -> FormValues {
        FormValues::default()
            .with_text("nome", "Maria Souza")
            .with_text("dataNascimento", "25/12/1990")
            .with_text("cpf", "123.456.789-01")
            .with_text("genero", "Feminino")
            .with_text("telefone", "(11) 98765-4321")
    }

    fn complete_appointment() -> FormValues {
        FormValues::default()
            .with_text("cartaoSUSConsulta", "123456789012345")
            .with_text("cpfProfissional", "123.456.789-01")
            .with_text("local", "UBS Centro")
            .with_text("dataHora", "01/01/2025 14:30")
            .with_text("motivoConsulta", "Retorno")
            .with_text("especialidadeConsulta", "Cardiologia")
    }

    #[test]
    fn empty_patient_reports_nome_first() {
        let err = validate(RecordKind::Patient, &FormValues::default()).unwrap_err();
        assert_eq!(err, FormError::MissingField("nome".into()));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let values = complete_patient().with_text("genero", "   ");
        assert_eq!(
            validate(RecordKind::Patient, &values),
            Err(FormError::MissingField("genero".into()))
        );
    }

    #[test]
    fn complete_patient_is_valid() {
        assert_eq!(validate(RecordKind::Patient, &complete_patient()), Ok(()));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let values = complete_patient().with_text("cartaoSUS", "");
        assert_eq!(validate(RecordKind::Patient, &values), Ok(()));
    }

    #[test]
    fn partial_birth_date_is_malformed() {
        let values = complete_patient().with_text("dataNascimento", "25/12/19");
        assert_eq!(
            validate(RecordKind::Patient, &values),
            Err(FormError::MalformedDate)
        );
    }

    #[test]
    fn birth_date_with_wrong_separators_is_malformed() {
        let values = complete_patient().with_text("dataNascimento", "1990-12-25");
        assert_eq!(
            validate(RecordKind::Patient, &values),
            Err(FormError::MalformedDate)
        );
    }

    #[test]
    fn missing_field_wins_over_malformed_date() {
        let values = FormValues::default().with_text("dataNascimento", "2");
        assert_eq!(
            validate(RecordKind::Professional, &values),
            Err(FormError::MissingField("nome".into()))
        );
    }

    #[test]
    fn professional_requires_funcao() {
        let values = complete_patient().with_text("registro", "CRM 1234");
        assert_eq!(
            validate(RecordKind::Professional, &values),
            Err(FormError::MissingField("funcao".into()))
        );
    }

    #[test]
    fn appointment_date_time_shape() {
        assert_eq!(
            validate(RecordKind::Appointment, &complete_appointment()),
            Ok(())
        );
        let values = complete_appointment().with_text("dataHora", "01/01/2025");
        assert_eq!(
            validate(RecordKind::Appointment, &values),
            Err(FormError::MalformedDateTime)
        );
        let values = complete_appointment().with_text("dataHora", "x01/01/2025 14:30");
        assert_eq!(
            validate(RecordKind::Appointment, &values),
            Err(FormError::MalformedDateTime)
        );
    }

    #[test]
    fn validate_all_collects_every_issue() {
        let values = FormValues::default()
            .with_text("nome", "João")
            .with_text("dataNascimento", "01/01");
        let issues = validate_all(RecordKind::Patient, &values);
        let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["dataNascimento", "cpf", "genero", "telefone"]
        );
        assert_eq!(issues[0].error, FormError::MalformedDate);
        assert_eq!(issues[1].error, FormError::MissingField("cpf".into()));
    }

    #[test]
    fn gender_must_be_an_offered_option() {
        let values = complete_patient().with_text("genero", "banana");
        assert_eq!(
            validate(RecordKind::Patient, &values),
            Err(FormError::InvalidOption {
                field: "genero".into(),
                value: "banana".into()
            })
        );
        for option in ["Masculino", "Feminino", "Outro"] {
            let values = complete_patient().with_text("genero", option);
            assert_eq!(validate(RecordKind::Patient, &values), Ok(()), "{option}");
        }
    }

    #[test]
    fn gender_options_are_case_sensitive() {
        let values = complete_patient().with_text("genero", "feminino");
        assert!(matches!(
            validate(RecordKind::Patient, &values),
            Err(FormError::InvalidOption { .. })
        ));
    }

    #[test]
    fn digit_field_without_digits_is_missing() {
        let values = complete_patient().with_text("cpf", "..-");
        assert_eq!(
            validate(RecordKind::Patient, &values),
            Err(FormError::MissingField("cpf".into()))
        );
        let values = complete_appointment().with_text("cartaoSUSConsulta", "( )");
        assert_eq!(
            validate(RecordKind::Appointment, &values),
            Err(FormError::MissingField("cartaoSUSConsulta".into()))
        );
    }

    #[test]
    fn validate_all_is_empty_for_valid_form() {
        assert!(validate_all(RecordKind::Appointment, &complete_appointment()).is_empty());
    }
}
