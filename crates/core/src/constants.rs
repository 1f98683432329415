//! Constants used throughout the SCP core crate.
//!
//! Field maxima, wire field names and remote endpoint paths live here so the masking,
//! validation and record code agree on them.

/// Digits in a CPF.
pub const IDENTIFIER_MAX_DIGITS: usize = 11;

/// Digits in a mobile phone number including the two-digit area code.
pub const PHONE_MAX_DIGITS: usize = 11;

/// Digits in a landline phone number including the area code.
pub const LANDLINE_DIGITS: usize = 10;

/// Digits in a Cartão SUS number.
pub const HEALTH_CARD_MAX_DIGITS: usize = 15;

/// Digits in a `DDMMYYYY` birth date.
pub const BIRTH_DATE_MAX_DIGITS: usize = 8;

/// Digits in a `DDMMYYYYHHmm` date-time.
pub const DATE_TIME_MAX_DIGITS: usize = 12;

/// Length of a masked `DD/MM/YYYY` date.
pub const DISPLAY_DATE_LEN: usize = 10;

/// Length of a masked `DD/MM/YYYY HH:mm` date-time.
pub const DISPLAY_DATE_TIME_LEN: usize = 16;

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Placeholder shown in list rows for absent values.
pub const NOT_INFORMED: &str = "Não informado";

/// Default base URL of the remote record service.
pub const DEFAULT_API_BASE_URL: &str = "https://scp-21qd.onrender.com/api";

/// Credentials accepted by the login gate when none are configured.
pub const DEFAULT_LOGIN_EMAIL: &str = "admin@empresa.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "admin123";

/// Options offered by the gender selector on the patient and professional forms.
pub const GENDER_OPTIONS: [&str; 3] = ["Masculino", "Feminino", "Outro"];

pub const PATIENTS_ENDPOINT: &str = "pacientes";
pub const PROFESSIONALS_ENDPOINT: &str = "empregados";
pub const APPOINTMENTS_ENDPOINT: &str = "consultas";
