//! Estimate aggregate view counts for a YouTube search query.
//!
//! The crate drives an abstract page source ([`source::CardSource`]) through
//! repeated infinite-scroll rounds, deduplicates the observed video cards by
//! URL, parses their displayed view counts ("1,234 views", "1.2M views"),
//! and stops once the set of unique videos stops growing for enough
//! consecutive rounds, or a scroll budget runs out. Browser automation
//! itself is the embedding application's concern: it implements `CardSource`
//! on top of whatever driver it uses and hands it to [`session::collect`].
//!
//! ```no_run
//! use viewtally::config::Config;
//! use viewtally::error::ViewTallyError;
//! use viewtally::report::TallySummary;
//! use viewtally::session;
//! use viewtally::source::CardSource;
//!
//! async fn tally(mut page: impl CardSource) -> Result<TallySummary, ViewTallyError> {
//!     let config = Config::load(None)?;
//!     let collector = config.collector();
//!     let outcome = session::collect(&mut page, &collector).await?;
//!     Ok(TallySummary::from_store(&outcome.store, collector.top_n()))
//! }
//! ```

pub mod config;
pub mod convergence;
pub mod error;
pub mod report;
pub mod session;
pub mod source;
pub mod store;
pub mod views;
