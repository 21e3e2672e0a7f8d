use crate::classifier::{classify_id, matches_shape};
use crate::document::DocumentKind;
use crate::error::NationalIdError;
use crate::normalization::{normalize_id, sanitize_rut};
use crate::secondary_validation::{
    dni_check_letter, is_valid_rut, nie_number, rut_check_character, validate_dni,
    SecondaryValidator, Validator,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An identity document number whose format and check character have been verified.
///
/// `value` holds the compact form (`12345678Z`, `123456785`). RUT numbers are displayed
/// and serialized with their usual punctuation (`12.345.678-5`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId {
    kind: DocumentKind,
    value: String,
}

impl NationalId {
    /// Parses a DNI, NIE, CIF or RUT number. CIF numbers are only checked for their shape.
    pub fn parse(raw: &str) -> Result<Self, NationalIdError> {
        let normalized = normalize_id(raw);
        if normalized.is_empty() {
            return Err(NationalIdError::Empty);
        }

        let sanitized = sanitize_rut(raw);
        let (kind, value) = match classify_id(&normalized) {
            DocumentKind::Unknown => {
                if !matches_shape(DocumentKind::Rut, &sanitized) {
                    return Err(NationalIdError::UnrecognizedFormat);
                }
                (DocumentKind::Rut, sanitized)
            }
            // 8 digits followed by K also has the shape of a DNI
            DocumentKind::Dni if !validate_dni(&normalized) && is_valid_rut(&sanitized) => {
                (DocumentKind::Rut, sanitized)
            }
            kind => (kind, normalized),
        };

        if let Some(validator) = SecondaryValidator::for_kind(kind) {
            if !validator.is_valid_match(&value) {
                return Err(check_character_error(kind, &value));
            }
        }

        Ok(NationalId { kind, value })
    }

    /// Same as [NationalId::parse], rejecting kinds not listed in `accepted_kinds`.
    pub fn parse_accepting(
        raw: &str,
        accepted_kinds: &[DocumentKind],
    ) -> Result<Self, NationalIdError> {
        let id = Self::parse(raw)?;
        if !accepted_kinds.contains(&id.kind) {
            return Err(NationalIdError::NotAccepted(id.kind));
        }
        Ok(id)
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The trailing check letter or digit.
    pub fn check_character(&self) -> Option<char> {
        self.value.chars().next_back()
    }
}

fn check_character_error(kind: DocumentKind, value: &str) -> NationalIdError {
    // Shapes are ascii only at this point
    let (body, found) = value.split_at(value.len() - 1);
    let expected = match kind {
        DocumentKind::Dni => body.parse().ok().map(dni_check_letter),
        DocumentKind::Nie => nie_number(value).map(dni_check_letter),
        DocumentKind::Rut => Some(rut_check_character(body)),
        DocumentKind::Cif | DocumentKind::Unknown => None,
    };

    match (expected, found.chars().next()) {
        (Some(expected), Some(found)) => NationalIdError::InvalidCheckCharacter {
            kind,
            expected,
            found,
        },
        _ => NationalIdError::UnrecognizedFormat,
    }
}

/// Renders a valid RUT the way it is usually written, e.g. `12.345.678-5`.
pub fn format_rut(raw: &str) -> Option<String> {
    if !is_valid_rut(raw) {
        return None;
    }
    let sanitized = sanitize_rut(raw);
    let (body, check_character) = sanitized.split_at(sanitized.len() - 1);

    let mut formatted = String::with_capacity(sanitized.len() + 3);
    for (idx, digit) in body.chars().enumerate() {
        if idx > 0 && (body.len() - idx) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(digit);
    }
    formatted.push('-');
    formatted.push_str(check_character);
    Some(formatted)
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DocumentKind::Rut => match format_rut(&self.value) {
                Some(formatted) => f.write_str(&formatted),
                None => f.write_str(&self.value),
            },
            _ => f.write_str(&self.value),
        }
    }
}

impl FromStr for NationalId {
    type Err = NationalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NationalId {
    type Error = NationalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_every_kind() {
        let test_cases = vec![
            (" 12345678-z ", DocumentKind::Dni, "12345678Z", "12345678Z"),
            ("x1234567l", DocumentKind::Nie, "X1234567L", "X1234567L"),
            ("b-1234567 a", DocumentKind::Cif, "B1234567A", "B1234567A"),
            ("12.345.678-5", DocumentKind::Rut, "123456785", "12.345.678-5"),
            ("1000005-k", DocumentKind::Rut, "1000005K", "1.000.005-K"),
            ("10000013-K", DocumentKind::Rut, "10000013K", "10.000.013-K"),
            ("10000013K", DocumentKind::Rut, "10000013K", "10.000.013-K"),
        ];
        for (input, kind, value, displayed) in test_cases {
            let id = NationalId::parse(input).unwrap();
            assert_eq!(id.kind(), kind, "input: {input}");
            assert_eq!(id.as_str(), value);
            assert_eq!(id.to_string(), displayed);
        }
    }

    #[test]
    fn rut_punctuation_does_not_change_the_result() {
        let ruts = vec![
            "12.345.678-5",
            "10.000.013-K",
            "1.000.005-K",
            "1.000.030-0",
            "1.234.567-4",
            "11.111.111-1",
        ];
        for formatted in ruts {
            let expected = NationalId::parse(formatted).unwrap();
            assert_eq!(expected.kind(), DocumentKind::Rut, "input: {formatted}");

            let hyphenated = formatted.replace('.', "");
            let bare = sanitize_rut(formatted);
            assert_eq!(NationalId::parse(&hyphenated), Ok(expected.clone()));
            assert_eq!(NationalId::parse(&bare), Ok(expected));
        }
    }

    #[test]
    fn reports_the_expected_check_character() {
        assert_eq!(
            NationalId::parse("12345678A"),
            Err(NationalIdError::InvalidCheckCharacter {
                kind: DocumentKind::Dni,
                expected: 'Z',
                found: 'A',
            })
        );
        assert_eq!(
            NationalId::parse("X1234567A"),
            Err(NationalIdError::InvalidCheckCharacter {
                kind: DocumentKind::Nie,
                expected: 'L',
                found: 'A',
            })
        );
        // Neither a valid DNI nor a valid RUT: reported against the DNI letter
        assert_eq!(
            NationalId::parse("10000014-K"),
            Err(NationalIdError::InvalidCheckCharacter {
                kind: DocumentKind::Dni,
                expected: 'M',
                found: 'K',
            })
        );
        assert_eq!(
            NationalId::parse("12.345.678-K"),
            Err(NationalIdError::InvalidCheckCharacter {
                kind: DocumentKind::Rut,
                expected: '5',
                found: 'K',
            })
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(NationalId::parse(""), Err(NationalIdError::Empty));
        assert_eq!(NationalId::parse(" - "), Err(NationalIdError::Empty));
        assert_eq!(
            NationalId::parse("12345678"),
            Err(NationalIdError::InvalidCheckCharacter {
                kind: DocumentKind::Rut,
                expected: '4',
                found: '8',
            })
        );
        assert_eq!(
            NationalId::parse("hello"),
            Err(NationalIdError::UnrecognizedFormat)
        );
    }

    #[test]
    fn parse_accepting_filters_kinds() {
        let spanish = [DocumentKind::Dni, DocumentKind::Nie, DocumentKind::Cif];
        assert!(NationalId::parse_accepting("12345678Z", &spanish).is_ok());
        assert_eq!(
            NationalId::parse_accepting("12.345.678-5", &spanish),
            Err(NationalIdError::NotAccepted(DocumentKind::Rut))
        );
    }

    #[test]
    fn test_format_rut() {
        assert_eq!(format_rut("123456785").as_deref(), Some("12.345.678-5"));
        assert_eq!(format_rut("1.234.567-4").as_deref(), Some("1.234.567-4"));
        assert_eq!(format_rut("11111111-1").as_deref(), Some("11.111.111-1"));
        assert_eq!(format_rut("123456784"), None);
    }

    #[test]
    fn serializes_as_displayed() {
        let id: NationalId = "123456785".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""12.345.678-5""#);
        assert_eq!(id.check_character(), Some('5'));

        let parsed: NationalId = serde_json::from_str(r#""x1234567l""#).unwrap();
        assert_eq!(parsed.kind(), DocumentKind::Nie);
        assert!(serde_json::from_str::<NationalId>(r#""X1234567A""#).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NationalId::parse("12345678A").unwrap_err().to_string(),
            "Invalid DNI check character: expected 'Z', found 'A'"
        );
        assert_eq!(
            NationalIdError::NotAccepted(DocumentKind::Cif).to_string(),
            "CIF documents are not accepted"
        );
    }
}
