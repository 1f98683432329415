//! Wire records assembled from form values at submission time.
//!
//! Each record kind has a strict wire struct whose serialised field names are exactly the
//! keys the remote service expects. Records have no lifecycle of their own: they are built,
//! handed to the record service, and dropped.

use scp_types::{DigitString, NonEmptyText};
use serde::{Deserialize, Serialize};

use crate::dates::{to_wire_date, to_wire_date_time};
use crate::form::FormValues;
use crate::schema::RecordKind;
use crate::validation::validate;
use crate::{FormError, FormResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub nome: NonEmptyText,
    /// `YYYY-MM-DD`.
    pub data_nascimento: String,
    pub cpf: DigitString,
    #[serde(rename = "cartaoSUS")]
    pub cartao_sus: DigitString,
    pub genero: NonEmptyText,
    pub telefone: DigitString,
    #[serde(default)]
    pub vacinas: Vec<String>,
    #[serde(default)]
    pub alergias: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalRecord {
    pub nome: NonEmptyText,
    /// `YYYY-MM-DD`.
    pub data_nascimento: String,
    pub cpf: DigitString,
    pub registro: NonEmptyText,
    pub genero: NonEmptyText,
    pub telefone: DigitString,
    pub funcao: NonEmptyText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(rename = "cartaoSUSConsulta")]
    pub cartao_sus_consulta: DigitString,
    pub cpf_profissional: DigitString,
    pub local: NonEmptyText,
    /// `YYYY-MM-DDTHH:mm:00`.
    pub data_hora: String,
    pub motivo_consulta: NonEmptyText,
    pub especialidade_consulta: NonEmptyText,
    #[serde(default)]
    pub observacoes: String,
    #[serde(default)]
    pub diagnostico_condicao: String,
}

/// A record ready to be sent, serialised as a flat JSON object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Patient(PatientRecord),
    Professional(ProfessionalRecord),
    Appointment(AppointmentRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Patient(_) => RecordKind::Patient,
            Record::Professional(_) => RecordKind::Professional,
            Record::Appointment(_) => RecordKind::Appointment,
        }
    }
}

fn required_text(values: &FormValues, name: &str) -> FormResult<NonEmptyText> {
    NonEmptyText::new(values.text(name)).map_err(|_| FormError::MissingField(name.to_owned()))
}

/// Canonical digits of a digits-only field; required ones must hold at least one digit.
fn digits(kind: RecordKind, values: &FormValues, name: &str) -> FormResult<DigitString> {
    let spec = kind
        .field(name)
        .filter(|spec| spec.kind.is_digits_only())
        .ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
    let raw = values.text(spec.name);
    if spec.required {
        DigitString::non_empty(raw).map_err(|_| FormError::MissingField(spec.name.to_owned()))
    } else {
        Ok(DigitString::from_masked(raw))
    }
}

fn list_entries(values: &FormValues, name: &str) -> Vec<String> {
    values
        .list(name)
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Builds the wire record for `kind` from display values.
///
/// Digits-only fields are canonicalised, dates are converted to their wire form and free
/// text passes through unchanged, except that required text is trimmed at the edges. Validation runs first, so the caller does not need to call
/// [`validate`] beforehand.
///
/// # Errors
///
/// Returns the first [`FormError`] reported by [`validate`].
pub fn to_wire_record(kind: RecordKind, values: &FormValues) -> FormResult<Record> {
    validate(kind, values)?;

    let record = match kind {
        RecordKind::Patient => Record::Patient(PatientRecord {
            nome: required_text(values, "nome")?,
            data_nascimento: to_wire_date(values.text("dataNascimento"))?,
            cpf: digits(kind, values, "cpf")?,
            cartao_sus: digits(kind, values, "cartaoSUS")?,
            genero: required_text(values, "genero")?,
            telefone: digits(kind, values, "telefone")?,
            vacinas: list_entries(values, "vacinas"),
            alergias: list_entries(values, "alergias"),
        }),
        RecordKind::Professional => Record::Professional(ProfessionalRecord {
            nome: required_text(values, "nome")?,
            data_nascimento: to_wire_date(values.text("dataNascimento"))?,
            cpf: digits(kind, values, "cpf")?,
            registro: required_text(values, "registro")?,
            genero: required_text(values, "genero")?,
            telefone: digits(kind, values, "telefone")?,
            funcao: required_text(values, "funcao")?,
        }),
        RecordKind::Appointment => Record::Appointment(AppointmentRecord {
            cartao_sus_consulta: digits(kind, values, "cartaoSUSConsulta")?,
            cpf_profissional: digits(kind, values, "cpfProfissional")?,
            local: required_text(values, "local")?,
            data_hora: to_wire_date_time(values.text("dataHora"))?,
            motivo_consulta: required_text(values, "motivoConsulta")?,
            especialidade_consulta: required_text(values, "especialidadeConsulta")?,
            observacoes: values.text("observacoes").to_owned(),
            diagnostico_condicao: values.text("diagnosticoCondicao").to_owned(),
        }),
    };

    Ok(record)
}
