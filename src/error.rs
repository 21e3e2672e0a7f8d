use crate::document::DocumentKind;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum NationalIdError {
    #[error("The identifier is empty")]
    Empty,

    #[error("The identifier doesn't match any known document format")]
    UnrecognizedFormat,

    #[error("Invalid {kind} check character: expected '{expected}', found '{found}'")]
    InvalidCheckCharacter {
        kind: DocumentKind,
        expected: char,
        found: char,
    },

    #[error("{0} documents are not accepted")]
    NotAccepted(DocumentKind),
}
