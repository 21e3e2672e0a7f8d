use crate::document::DocumentKind;
use crate::observability::labels::Labels;
use metrics::counter;

const TYPE: &str = "type";
const VALID: &str = "valid";

/// Counters emitted by a [crate::DocumentValidator]. Every counter carries the labels
/// given in the validator configuration.
#[derive(Clone, Debug)]
pub struct ValidationMetrics {
    labels: Labels,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidationMetrics {
            labels: labels.clone(),
        }
    }

    /// One document went through the validator. `kind` is [DocumentKind::Unknown]
    /// when no accepted format matched.
    pub fn record_document(&self, kind: DocumentKind, is_valid: bool) {
        counter!(
            "validation.documents",
            self.labels.clone_with_labels(&[
                (TYPE, kind.as_label()),
                (VALID, if is_valid { "true" } else { "false" }),
            ])
        )
        .increment(1);
    }

    /// The shape of `kind` matched but its check character didn't.
    pub fn record_checksum_failure(&self, kind: DocumentKind) {
        counter!(
            "validation.checksum_failures",
            self.labels.clone_with_labels(&[(TYPE, kind.as_label())])
        )
        .increment(1);
    }
}
