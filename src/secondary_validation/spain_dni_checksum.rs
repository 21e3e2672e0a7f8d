use crate::classifier::matches_shape;
use crate::document::DocumentKind;
use crate::normalization::normalize_id;
use crate::secondary_validation::Validator;

pub struct SpanishDniChecksum;

/// Official check letter assignment, indexed by `number % 23`. Shared with NIE numbers.
const LETTER_TABLE: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

const NUMBER_LENGTH: usize = 8;

/// Check letter for the numeric part of a DNI (or of a NIE once its prefix is substituted).
pub fn dni_check_letter(number: u32) -> char {
    LETTER_TABLE[(number % 23) as usize] as char
}

/// `digits` must be the 8 ascii digits, `letter` the declared check letter.
fn check_letter_matches(digits: &str, letter: &str) -> bool {
    match digits.parse::<u32>() {
        Ok(number) => letter.chars().eq(std::iter::once(dni_check_letter(number))),
        Err(_) => false,
    }
}

impl Validator for SpanishDniChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        /*
         * Spanish DNI format:
         * 8 digits followed by a letter
         * The letter is calculated by taking the number modulo 23 and using it as an index
         * into LETTER_TABLE
         */
        let normalized = normalize_id(regex_match);
        if !matches_shape(DocumentKind::Dni, &normalized) {
            return false;
        }

        // The shape only allows ascii, so byte indexing is safe
        let (number_part, letter_part) = normalized.split_at(NUMBER_LENGTH);
        check_letter_matches(number_part, letter_part)
    }
}
