// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod classifier;
mod company_name;
mod config;
mod document;
mod document_validation;
mod error;
mod national_id;
mod normalization;
mod observability;
mod secondary_validation;

// This is the public API of the national id library
pub use classifier::classify_id;
pub use company_name::is_likely_company_name;
pub use config::DocumentValidatorConfig;
pub use document::{get_document_placeholder, DocumentKind};
pub use document_validation::{
    validate_document, DocumentValidation, DocumentValidator, INVALID_DOCUMENT_MESSAGE,
};
pub use error::NationalIdError;
pub use national_id::{format_rut, NationalId};
pub use normalization::{normalize_id, sanitize_rut};
pub use observability::labels::Labels;
pub use secondary_validation::{
    dni_check_letter, is_valid_rut, rut_check_character, validate_dni, validate_nie,
    SecondaryValidator,
};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::secondary_validation::{
    ChileanRutChecksum, SpanishDniChecksum, SpanishNieChecksum, Validator,
};
