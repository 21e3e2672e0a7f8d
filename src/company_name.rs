use lazy_static::lazy_static;
use regex::Regex;

// Dotted forms end on a '.', so they can't be closed by `\b` and use `\B` instead
lazy_static! {
    static ref LEGAL_ENTITY_SUFFIX: Regex =
        Regex::new(r"(?i)\b(?:SL|SA|SRL|SAS|LLC|LTD)\b|\bS\.[LA]\.\B")
            .expect("valid legal entity pattern");
}

/// Heuristic telling whether a registration name belongs to a company rather than to a
/// person, based on legal entity abbreviations (SL, S.A., LLC, ...).
///
/// This is advisory only. Names such as "Sa Pobla" are flagged and companies without
/// an abbreviation are not.
pub fn is_likely_company_name(name: &str) -> bool {
    LEGAL_ENTITY_SUFFIX.is_match(name)
}

#[cfg(test)]
mod test {
    use super::is_likely_company_name;

    #[test]
    fn test_company_names() {
        let company_names = vec![
            "Acme SL",
            "acme sl",
            "Transportes García S.L.",
            "Transportes García S.L. (Madrid)",
            "Grupo Norte S.A.",
            "Grupo Norte SA",
            "Servicios SRL",
            "Holding SAS",
            "Acme LLC",
            "Acme Ltd",
            "Acme, Ltd.",
            "SL Logistics",
        ];
        for name in company_names {
            assert!(is_likely_company_name(name), "name: {name}");
        }
    }

    #[test]
    fn test_person_names() {
        let person_names = vec![
            "Juan Pérez",
            "Salvador Dalí",
            "Isabel Sastre",
            "Lisa Tsang",
            "Samuel Slater",
            // Letters glued to the abbreviation
            "S.L.U",
            "",
            "   ",
        ];
        for name in person_names {
            assert!(!is_likely_company_name(name), "name: {name}");
        }
    }
}
