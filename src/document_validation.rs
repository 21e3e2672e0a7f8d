use crate::classifier::matches_shape;
use crate::config::DocumentValidatorConfig;
use crate::document::DocumentKind;
use crate::normalization::sanitize_rut;
use crate::observability::validation_metrics::ValidationMetrics;
use crate::secondary_validation::{SecondaryValidator, Validator};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Registration forms take the bare DNI number, without its check letter
lazy_static! {
    static ref DNI_NUMBER_PATTERN: Regex =
        Regex::new("^[0-9]{8}$").expect("valid DNI number pattern");
}

pub const INVALID_DOCUMENT_MESSAGE: &str = "Formato de documento no válido. Formatos aceptados:
- DNI: 8 dígitos (ej: 12345678)
- NIE: X, Y o Z seguida de 7 dígitos y una letra (ej: X1234567L)
- CIF: una letra, 7 dígitos y un dígito o letra de control (ej: B12345678)
- RUT: 7 u 8 dígitos y un dígito verificador o K (ej: 12.345.678-5)";

/// Result of [validate_document], shaped like the payload returned to registration forms.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentValidation {
    pub is_valid: bool,
    pub message: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentKind>,
}

impl DocumentValidation {
    fn valid(kind: DocumentKind) -> Self {
        Self {
            is_valid: true,
            message: format!("Documento {kind} válido"),
            document_type: Some(kind),
        }
    }

    fn invalid() -> Self {
        Self {
            is_valid: false,
            message: INVALID_DOCUMENT_MESSAGE.to_string(),
            document_type: None,
        }
    }
}

enum FormatMatch {
    Valid,
    InvalidChecksum,
    NoMatch,
}

/// Tells which of the accepted document formats a value is written in.
///
/// Unlike [crate::classify_id] this accepts RUT numbers and, by default, DNI numbers
/// without their check letter. A DNI written with its letter is only accepted when the
/// letter is verified.
pub struct DocumentValidator {
    config: DocumentValidatorConfig,
    metrics: ValidationMetrics,
}

impl DocumentValidator {
    pub fn new(config: DocumentValidatorConfig) -> Self {
        let metrics = ValidationMetrics::new(&config.labels);
        Self { config, metrics }
    }

    pub fn config(&self) -> &DocumentValidatorConfig {
        &self.config
    }

    pub fn validate(&self, value: &str) -> DocumentValidation {
        let value = value.trim();
        let spanish_candidate = value.to_uppercase();

        for kind in &self.config.accepted_kinds {
            match self.match_format(*kind, value, &spanish_candidate) {
                FormatMatch::Valid => {
                    self.metrics.record_document(*kind, true);
                    return DocumentValidation::valid(*kind);
                }
                FormatMatch::InvalidChecksum => self.metrics.record_checksum_failure(*kind),
                FormatMatch::NoMatch => {}
            }
        }

        self.metrics.record_document(DocumentKind::Unknown, false);
        DocumentValidation::invalid()
    }

    fn match_format(
        &self,
        kind: DocumentKind,
        value: &str,
        spanish_candidate: &str,
    ) -> FormatMatch {
        let dni_letter_checked =
            self.config.require_dni_check_letter || self.config.verify_spanish_checksums;

        if kind == DocumentKind::Dni
            && !self.config.require_dni_check_letter
            && DNI_NUMBER_PATTERN.is_match(spanish_candidate)
        {
            return FormatMatch::Valid;
        }

        let shape_matches = match kind {
            DocumentKind::Dni => {
                dni_letter_checked && matches_shape(DocumentKind::Dni, spanish_candidate)
            }
            DocumentKind::Nie | DocumentKind::Cif => matches_shape(kind, spanish_candidate),
            DocumentKind::Rut => matches_shape(DocumentKind::Rut, &sanitize_rut(value)),
            DocumentKind::Unknown => false,
        };
        if !shape_matches {
            return FormatMatch::NoMatch;
        }

        let checksum_required = match kind {
            DocumentKind::Dni | DocumentKind::Rut => true,
            DocumentKind::Nie => self.config.verify_spanish_checksums,
            DocumentKind::Cif | DocumentKind::Unknown => false,
        };
        if !checksum_required {
            return FormatMatch::Valid;
        }

        let checked = match kind {
            DocumentKind::Rut => value,
            _ => spanish_candidate,
        };
        match SecondaryValidator::for_kind(kind) {
            Some(validator) if !validator.is_valid_match(checked) => {
                FormatMatch::InvalidChecksum
            }
            _ => FormatMatch::Valid,
        }
    }
}

impl Default for DocumentValidator {
    fn default() -> Self {
        DocumentValidator::new(DocumentValidatorConfig::default())
    }
}

/// Tries DNI, NIE, CIF and RUT in that order and reports the first format `value` is
/// written in. Only RUT numbers get their check character verified.
pub fn validate_document(value: &str) -> DocumentValidation {
    DocumentValidator::default().validate(value)
}
