//! Validated primitive types shared by the SCP crates.
//!
//! Record fields that reach the remote service go through one of these wrappers so a
//! blank name or a half-punctuated identifier cannot be serialised by accident.

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
    /// The input contained no decimal digits at all
    #[error("value must contain at least one digit")]
    NoDigits,
}

/// Free text that holds at least one non-whitespace character.
///
/// Surrounding whitespace is trimmed on construction, so `"  Maria "` is stored as `"Maria"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, trimming the input first.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A canonical, digits-only value such as a CPF, phone number or health-card number.
///
/// Construction discards every non-digit character, so both `"123.456.789-01"` and
/// `"12345678901"` produce the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(transparent)]
pub struct DigitString(String);

impl DigitString {
    /// Keeps only the ASCII digits of `input`. The result may be empty.
    pub fn from_masked(input: impl AsRef<str>) -> Self {
        Self(
            input
                .as_ref()
                .chars()
                .filter(char::is_ascii_digit)
                .collect(),
        )
    }

    /// Like [`DigitString::from_masked`] but rejects input without any digit.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::NoDigits`] when nothing is left after stripping.
    pub fn non_empty(input: impl AsRef<str>) -> Result<Self, TextError> {
        let digits = Self::from_masked(input);
        if digits.is_empty() {
            return Err(TextError::NoDigits);
        }
        Ok(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for DigitString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DigitString::from_masked(s))
    }
}
