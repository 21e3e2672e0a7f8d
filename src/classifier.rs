use crate::document::DocumentKind;
use crate::normalization::normalize_id;
use lazy_static::lazy_static;
use regex::Regex;

// `\d` is unicode-aware in the regex crate, so ascii ranges are spelled out.
lazy_static! {
    static ref CIF_PATTERN: Regex =
        Regex::new("^[ABCDEFGHJKLMNPQRSUVW][0-9]{7}[0-9A-J]$").expect("valid CIF pattern");
    static ref NIE_PATTERN: Regex = Regex::new("^[XYZ][0-9]{7}[A-Z]$").expect("valid NIE pattern");
    static ref DNI_PATTERN: Regex = Regex::new("^[0-9]{8}[A-Z]$").expect("valid DNI pattern");
    static ref RUT_PATTERN: Regex = Regex::new("^[0-9]{7,8}[0-9K]$").expect("valid RUT pattern");
}

/// Checks an already normalized identifier against the shape of `kind`.
///
/// RUT shapes are checked against the sanitized form (see [crate::sanitize_rut]).
/// [DocumentKind::Unknown] has no shape and never matches.
pub(crate) fn matches_shape(kind: DocumentKind, normalized: &str) -> bool {
    match kind {
        DocumentKind::Cif => CIF_PATTERN.is_match(normalized),
        DocumentKind::Nie => NIE_PATTERN.is_match(normalized),
        DocumentKind::Dni => DNI_PATTERN.is_match(normalized),
        DocumentKind::Rut => RUT_PATTERN.is_match(normalized),
        DocumentKind::Unknown => false,
    }
}

/// Spanish shapes, in the order they are tried. CIF and NIE both start with a letter
/// so the order has to be fixed for the result to be deterministic.
const SPANISH_SHAPES: [DocumentKind; 3] = [DocumentKind::Cif, DocumentKind::Nie, DocumentKind::Dni];

/// Tells which kind of Spanish document `raw` looks like. Only the shape is checked,
/// the check letter isn't verified here.
pub fn classify_id(raw: &str) -> DocumentKind {
    let normalized = normalize_id(raw);
    SPANISH_SHAPES
        .into_iter()
        .find(|kind| matches_shape(*kind, &normalized))
        .unwrap_or(DocumentKind::Unknown)
}
