mod chile_rut_checksum;
mod spain_dni_checksum;
mod spain_nie_checksum;

pub use crate::secondary_validation::chile_rut_checksum::{
    rut_check_character, ChileanRutChecksum,
};
pub use crate::secondary_validation::spain_dni_checksum::{dni_check_letter, SpanishDniChecksum};
pub(crate) use crate::secondary_validation::spain_nie_checksum::nie_number;
pub use crate::secondary_validation::spain_nie_checksum::SpanishNieChecksum;
use crate::document::DocumentKind;
use serde::{Deserialize, Serialize};
use std::str::Chars;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

fn get_previous_digit(chars: &mut Chars<'_>) -> Option<u32> {
    while let Some(char) = chars.next_back() {
        if let Some(digit) = char.to_digit(10) {
            return Some(digit);
        }
    }
    None
}

/// Check-character algorithms, selectable by name from configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    SpanishDniChecksum,
    SpanishNieChecksum,
    ChileanRutChecksum,
}

impl SecondaryValidator {
    /// The checksum that guards `kind`. CIF numbers are only checked for their shape.
    pub fn for_kind(kind: DocumentKind) -> Option<Self> {
        match kind {
            DocumentKind::Dni => Some(SecondaryValidator::SpanishDniChecksum),
            DocumentKind::Nie => Some(SecondaryValidator::SpanishNieChecksum),
            DocumentKind::Rut => Some(SecondaryValidator::ChileanRutChecksum),
            DocumentKind::Cif | DocumentKind::Unknown => None,
        }
    }
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::SpanishDniChecksum => {
                SpanishDniChecksum.is_valid_match(regex_match)
            }
            SecondaryValidator::SpanishNieChecksum => {
                SpanishNieChecksum.is_valid_match(regex_match)
            }
            SecondaryValidator::ChileanRutChecksum => {
                ChileanRutChecksum.is_valid_match(regex_match)
            }
        }
    }
}

/// Checks the check letter of a Spanish DNI, e.g. `12345678Z`.
pub fn validate_dni(raw: &str) -> bool {
    SpanishDniChecksum.is_valid_match(raw)
}

/// Checks the check letter of a Spanish NIE, e.g. `X1234567L`.
pub fn validate_nie(raw: &str) -> bool {
    SpanishNieChecksum.is_valid_match(raw)
}

/// Checks the check character of a Chilean RUT, e.g. `12.345.678-5`.
pub fn is_valid_rut(raw: &str) -> bool {
    ChileanRutChecksum.is_valid_match(raw)
}
