pub mod labels;
pub mod validation_metrics;
