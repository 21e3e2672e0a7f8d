use crate::classifier::matches_shape;
use crate::document::DocumentKind;
use crate::normalization::sanitize_rut;
use crate::secondary_validation::{get_previous_digit, Validator};

pub struct ChileanRutChecksum;

const FIRST_WEIGHT: u32 = 2;
const LAST_WEIGHT: u32 = 7;

/// Computes the check character ('0'-'9' or 'K') of a RUT body.
/// Non-digit characters in `body` are skipped.
pub fn rut_check_character(body: &str) -> char {
    // Modulo 11 with weights 2..=7 cycling from the rightmost digit
    let mut chars = body.chars();
    let mut sum = 0;
    let mut weight = FIRST_WEIGHT;
    while let Some(digit) = get_previous_digit(&mut chars) {
        sum += digit * weight;
        weight = if weight == LAST_WEIGHT {
            FIRST_WEIGHT
        } else {
            weight + 1
        };
    }

    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        // Convert the remainder to its ascii digit
        remainder => (b'0' + remainder as u8) as char,
    }
}

impl Validator for ChileanRutChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let sanitized = sanitize_rut(regex_match);
        if !matches_shape(DocumentKind::Rut, &sanitized) {
            return false;
        }

        // The shape only allows ascii, so the last byte is the whole check character
        let (body, check_character) = sanitized.split_at(sanitized.len() - 1);
        check_character
            .chars()
            .eq(std::iter::once(rut_check_character(body)))
    }
}
