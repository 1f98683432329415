//! # SCP Core
//!
//! Field formatting and validation for the SCP clinical-registration front-end.
//!
//! This crate contains pure data transforms and the state objects that carry them:
//! - keystroke masks for CPF, phone, Cartão SUS and date fields ([`mask`])
//! - required-field and date-shape validation per record kind ([`validation`])
//! - display ↔ wire date conversion ([`dates`])
//! - wire record assembly ([`record`]) and caller-owned form state ([`form`])
//! - list-screen formatting and search ([`listing`]) and the login gate ([`auth`])
//!
//! **No transport concerns**: talking to the remote record service belongs in `scp-client`.

pub mod auth;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod form;
pub mod listing;
pub mod mask;
pub mod record;
pub mod schema;
pub mod validation;

pub use auth::{Credentials, LoginError, LoginErrors, LoginForm};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult, FormError, FormResult};
pub use form::{FormState, FormValues};
pub use listing::RecordSummary;
pub use record::{AppointmentRecord, PatientRecord, ProfessionalRecord, Record};
pub use schema::{FieldKind, FieldSpec, RecordKind};
pub use validation::{validate, validate_all, FieldIssue};

pub use scp_types::{DigitString, NonEmptyText, TextError};
