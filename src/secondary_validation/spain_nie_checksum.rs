use crate::classifier::matches_shape;
use crate::document::DocumentKind;
use crate::normalization::normalize_id;
use crate::secondary_validation::spain_dni_checksum::dni_check_letter;
use crate::secondary_validation::Validator;

pub struct SpanishNieChecksum;

const NIE_LENGTH: usize = 9;

fn prefix_digit(prefix: char) -> Option<char> {
    match prefix {
        'X' => Some('0'),
        'Y' => Some('1'),
        'Z' => Some('2'),
        _ => None,
    }
}

/// The 8 digit number a normalized NIE stands for: the X, Y or Z prefix is replaced by
/// 0, 1 or 2 and followed by the 7 digits of the body.
pub(crate) fn nie_number(normalized: &str) -> Option<u32> {
    let first_digit = prefix_digit(normalized.chars().next()?)?;
    let body = normalized.get(1..NIE_LENGTH - 1)?;
    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("{first_digit}{body}").parse().ok()
}

impl Validator for SpanishNieChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let normalized = normalize_id(regex_match);
        if !matches_shape(DocumentKind::Nie, &normalized) {
            return false;
        }

        match nie_number(&normalized) {
            Some(number) => normalized.ends_with(dni_check_letter(number)),
            None => false,
        }
    }
}
