use crate::document::DocumentKind;
use crate::document_validation::DocumentValidator;
use crate::observability::labels::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

fn default_accepted_kinds() -> Vec<DocumentKind> {
    vec![
        DocumentKind::Dni,
        DocumentKind::Nie,
        DocumentKind::Cif,
        DocumentKind::Rut,
    ]
}

/// Settings of a [DocumentValidator].
///
/// The defaults reproduce [crate::validate_document]: only a bare 8 digit DNI is accepted,
/// NIE check letters aren't verified and RUT check characters always are.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentValidatorConfig {
    /// Formats that are tried, in this order. The first one that matches wins.
    #[serde(default = "default_accepted_kinds")]
    pub accepted_kinds: Vec<DocumentKind>,

    /// Require the DNI check letter (and verify it) instead of accepting 8 bare digits.
    #[serde(default)]
    pub require_dni_check_letter: bool,

    /// Verify NIE check letters, and accept DNI numbers written with a verified letter
    /// next to bare ones.
    #[serde(default)]
    pub verify_spanish_checksums: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl Default for DocumentValidatorConfig {
    fn default() -> Self {
        Self {
            accepted_kinds: default_accepted_kinds(),
            require_dni_check_letter: false,
            verify_spanish_checksums: false,
            labels: Labels::default(),
        }
    }
}

impl DocumentValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted_kinds(&self, accepted_kinds: Vec<DocumentKind>) -> Self {
        self.mutate_clone(|x| x.accepted_kinds = accepted_kinds)
    }

    pub fn require_dni_check_letter(&self, require_dni_check_letter: bool) -> Self {
        self.mutate_clone(|x| x.require_dni_check_letter = require_dni_check_letter)
    }

    pub fn verify_spanish_checksums(&self, verify_spanish_checksums: bool) -> Self {
        self.mutate_clone(|x| x.verify_spanish_checksums = verify_spanish_checksums)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> DocumentValidator {
        DocumentValidator::new(self.clone())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
