use crate::config::ConfigError;
use crate::source::SourceError;
use thiserror::Error;

/// Top-level error surface for embedding applications.
///
/// The collection core itself has no fatal conditions: unparseable view text
/// is data (`views: None`), and exhausting the scroll budget is a normal
/// stop. What can fail is the configuration layer and the page-driving
/// collaborator, and both funnel through here.
#[derive(Error, Debug)]
pub enum ViewTallyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Page source error: {0}")]
    Source(#[from] SourceError),
}
