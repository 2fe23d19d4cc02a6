//! Request handlers.

pub mod analyze;
pub mod health;
pub mod insights;
pub mod samples;

/// The kind applied when a request doesn't specify `chartType`.
pub(crate) fn default_chart_type() -> String {
    "bar".into()
}
