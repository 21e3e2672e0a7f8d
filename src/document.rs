use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// The identity document families this crate knows how to recognize.
///
/// Displayed in uppercase (`DNI`) and serialized in lowercase (`"dni"`), the form used by
/// registration payloads. Parsing from text is case-insensitive.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DocumentKind {
    /// Spanish national identity number
    Dni,
    /// Spanish foreigner identity number
    Nie,
    /// Spanish tax id for legal entities
    Cif,
    /// Chilean tax / identity number
    Rut,
    Unknown,
}

const DEFAULT_PLACEHOLDER: &str = "Introduzca su documento";

impl DocumentKind {
    /// Lowercase name, used as a metric label value.
    pub fn as_label(&self) -> &'static str {
        match self {
            DocumentKind::Dni => "dni",
            DocumentKind::Nie => "nie",
            DocumentKind::Cif => "cif",
            DocumentKind::Rut => "rut",
            DocumentKind::Unknown => "unknown",
        }
    }

    /// Example value shown in an empty form field for this kind of document.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DocumentKind::Dni => "123456786",
            DocumentKind::Nie => "X1234567L",
            DocumentKind::Cif => "B12345678",
            DocumentKind::Rut => "12.345.678-5",
            DocumentKind::Unknown => DEFAULT_PLACEHOLDER,
        }
    }
}

/// Looks up the placeholder for a document type name such as `"dni"` or `"rut"`.
/// Any name that isn't a known document type gets the generic prompt.
pub fn get_document_placeholder(document_type: &str) -> &'static str {
    DocumentKind::from_str(document_type)
        .map(|kind| kind.placeholder())
        .unwrap_or(DEFAULT_PLACEHOLDER)
}
