use crate::error::IngestionError;

// ---------------------------------------------------------------------------
// Progress / failure reporting
// ---------------------------------------------------------------------------

/// Sink for ingestion milestones and failures.
///
/// The ingestor never logs directly; it reports through this trait so callers
/// can swap in their own sink. [`LogReporter`] is the default.
pub trait Reporter {
    fn info(&self, message: &str);

    fn failure(&self, error: &IngestionError);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn failure(&self, error: &IngestionError) {
        log::error!("Error in data ingestion: {error}");
    }
}
