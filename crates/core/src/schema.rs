//! Record kinds and their field layouts.
//!
//! Each [`RecordKind`] owns a static, ordered list of [`FieldSpec`]s. The order matters:
//! validation reports the first missing required field in this order, and list-screen
//! summaries render rows in it.

use crate::constants::{
    APPOINTMENTS_ENDPOINT, BIRTH_DATE_MAX_DIGITS, DATE_TIME_MAX_DIGITS, GENDER_OPTIONS,
    HEALTH_CARD_MAX_DIGITS, IDENTIFIER_MAX_DIGITS, PATIENTS_ENDPOINT, PHONE_MAX_DIGITS, PROFESSIONALS_ENDPOINT,
};

/// The three record types handled by the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Patient,
    Professional,
    Appointment,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Patient,
        RecordKind::Professional,
        RecordKind::Appointment,
    ];

    /// Path segment of the remote endpoint, relative to the API base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            RecordKind::Patient => PATIENTS_ENDPOINT,
            RecordKind::Professional => PROFESSIONALS_ENDPOINT,
            RecordKind::Appointment => APPOINTMENTS_ENDPOINT,
        }
    }

    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Patient => "paciente",
            RecordKind::Professional => "profissional",
            RecordKind::Appointment => "consulta",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            RecordKind::Patient => PATIENT_FIELDS,
            RecordKind::Professional => PROFESSIONAL_FIELDS,
            RecordKind::Appointment => APPOINTMENT_FIELDS,
        }
    }

    /// Looks up a field by its wire name.
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Fields that must be filled before submission, in declaration order.
    pub fn required_fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields().iter().filter(|f| f.required)
    }

    /// Fields the list screen searches in.
    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::Patient => &["cartaoSUS", "nome"],
            RecordKind::Professional => &["registro", "nome"],
            RecordKind::Appointment => &["cartaoSUSConsulta", "especialidadeConsulta"],
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a field is masked on input and canonicalised on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// CPF, `123.456.789-01`.
    Identifier,
    /// Phone with area code, `(11) 98765-4321` or `(11) 3456-7890`.
    Phone,
    /// Cartão SUS, bare digits.
    HealthCard,
    /// `DD/MM/YYYY`, sent as `YYYY-MM-DD`.
    BirthDate,
    /// `DD/MM/YYYY HH:mm`, sent as `YYYY-MM-DDTHH:mm:00`.
    DateTime,
    /// Free text, passed through.
    Text,
    /// One of [`GENDER_OPTIONS`], picked rather than typed.
    Gender,
    /// List of free-text entries.
    List,
}

impl FieldKind {
    /// Maximum number of digits kept by the mask, or `None` for non-digit fields.
    pub fn max_digits(self) -> Option<usize> {
        match self {
            FieldKind::Identifier => Some(IDENTIFIER_MAX_DIGITS),
            FieldKind::Phone => Some(PHONE_MAX_DIGITS),
            FieldKind::HealthCard => Some(HEALTH_CARD_MAX_DIGITS),
            FieldKind::BirthDate => Some(BIRTH_DATE_MAX_DIGITS),
            FieldKind::DateTime => Some(DATE_TIME_MAX_DIGITS),
            FieldKind::Text | FieldKind::Gender | FieldKind::List => None,
        }
    }

    /// The accepted values of a choice field.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            FieldKind::Gender => Some(&GENDER_OPTIONS[..]),
            _ => None,
        }
    }

    /// True for fields whose wire form is the bare digit sequence.
    pub fn is_digits_only(self) -> bool {
        matches!(
            self,
            FieldKind::Identifier | FieldKind::Phone | FieldKind::HealthCard
        )
    }
}

/// One field of a record layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also used as the form key.
    pub name: &'static str,
    /// Label shown next to the value on list screens.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    required: bool,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required,
    }
}

const PATIENT_FIELDS: &[FieldSpec] = &[
    field("nome", "Nome", FieldKind::Text, true),
    field("dataNascimento", "Data de Nascimento", FieldKind::BirthDate, true),
    field("cpf", "CPF", FieldKind::Identifier, true),
    field("cartaoSUS", "Cartão SUS", FieldKind::HealthCard, false),
    field("genero", "Gênero", FieldKind::Gender, true),
    field("telefone", "Telefone", FieldKind::Phone, true),
    field("vacinas", "Vacinas", FieldKind::List, false),
    field("alergias", "Alergias", FieldKind::List, false),
];

/// `registro` is required because the registration screen marks it with `*`.
const PROFESSIONAL_FIELDS: &[FieldSpec] = &[
    field("nome", "Nome", FieldKind::Text, true),
    field("dataNascimento", "Data de Nascimento", FieldKind::BirthDate, true),
    field("cpf", "CPF", FieldKind::Identifier, true),
    field("registro", "Registro Profissional", FieldKind::Text, true),
    field("genero", "Gênero", FieldKind::Gender, true),
    field("telefone", "Telefone", FieldKind::Phone, true),
    field("funcao", "Função", FieldKind::Text, true),
];

const APPOINTMENT_FIELDS: &[FieldSpec] = &[
    field("cartaoSUSConsulta", "Cartão SUS", FieldKind::HealthCard, true),
    field("cpfProfissional", "CPF do Profissional", FieldKind::Identifier, true),
    field("local", "Local", FieldKind::Text, true),
    field("dataHora", "Data e Hora", FieldKind::DateTime, true),
    field("motivoConsulta", "Motivo", FieldKind::Text, true),
    field("especialidadeConsulta", "Especialidade", FieldKind::Text, true),
    field("observacoes", "Observações", FieldKind::Text, false),
    field("diagnosticoCondicao", "Diagnóstico", FieldKind::Text, false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_required_fields_in_order() {
        let names: Vec<_> = RecordKind::Patient
            .required_fields()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            vec!["nome", "dataNascimento", "cpf", "genero", "telefone"]
        );
    }

    #[test]
    fn professional_requires_registro() {
        let spec = RecordKind::Professional
            .field("registro")
            .expect("known field");
        assert!(spec.required);
        assert_eq!(RecordKind::Professional.required_fields().count(), 7);
    }

    #[test]
    fn appointment_optional_fields() {
        let optional: Vec<_> = RecordKind::Appointment
            .fields()
            .iter()
            .filter(|f| !f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(optional, vec!["observacoes", "diagnosticoCondicao"]);
    }

    #[test]
    fn endpoints_per_kind() {
        assert_eq!(RecordKind::Patient.endpoint(), "pacientes");
        assert_eq!(RecordKind::Professional.endpoint(), "empregados");
        assert_eq!(RecordKind::Appointment.endpoint(), "consultas");
    }

    #[test]
    fn field_lookup_by_name() {
        let spec = RecordKind::Professional.field("funcao").expect("known field");
        assert_eq!(spec.kind, FieldKind::Text);
        assert!(spec.required);
        assert!(RecordKind::Professional.field("vacinas").is_none());
    }

    #[test]
    fn gender_is_a_choice_field() {
        for kind in [RecordKind::Patient, RecordKind::Professional] {
            let spec = kind.field("genero").expect("known field");
            assert_eq!(spec.kind, FieldKind::Gender);
            assert_eq!(
                spec.kind.options(),
                Some(&["Masculino", "Feminino", "Outro"][..])
            );
        }
        assert_eq!(FieldKind::Text.options(), None);
    }

    #[test]
    fn digits_only_kinds() {
        assert!(FieldKind::Identifier.is_digits_only());
        assert!(FieldKind::HealthCard.is_digits_only());
        assert!(!FieldKind::BirthDate.is_digits_only());
        assert!(!FieldKind::Gender.is_digits_only());
    }

    #[test]
    fn search_fields_exist_in_layout() {
        for kind in RecordKind::ALL {
            for name in kind.search_fields() {
                assert!(kind.field(name).is_some(), "{kind}: {name}");
            }
        }
    }
}
