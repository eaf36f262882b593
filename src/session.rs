use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::CollectorConfig;
use crate::convergence::{ConvergenceTracker, ScrollDecision, ScrollProgress, StopReason};
use crate::error::ViewTallyError;
use crate::source::CardSource;
use crate::store::VideoStore;

/// Everything a finished collection run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub store: VideoStore,
    pub stop_reason: StopReason,
    /// Convergence state at termination; `final_progress.scroll_index` is
    /// the number of scroll iterations the run observed.
    pub final_progress: ScrollProgress,
}

/// Drive `source` until the unique-video set converges or the scroll budget
/// runs out.
///
/// Each iteration reads the currently visible cards, merges them into the
/// store (first-seen text wins, duplicates by URL are dropped), records the
/// cumulative unique count with the tracker, and re-evaluates the stop
/// condition. Only when the run continues does it trigger the next scroll
/// and pause long enough for the page to render newly loaded results.
///
/// Source failures abort the run; there is no retry here. An empty or
/// unchanged card set is not a failure, it feeds the stability counter.
pub async fn collect<S: CardSource>(
    source: &mut S,
    config: &CollectorConfig,
) -> Result<RunOutcome, ViewTallyError> {
    let mut store = VideoStore::new();
    let mut tracker = ConvergenceTracker::new(config.max_scrolls(), config.stable_rounds());
    let pause = Duration::from_millis(config.scroll_pause_ms());

    info!(
        max_scrolls = config.max_scrolls(),
        stable_rounds = config.stable_rounds(),
        "starting collection run"
    );

    loop {
        let cards = source.visible_cards().await?;
        for card in &cards {
            if store.insert(&card.url, &card.view_text) {
                debug!(url = %card.url, text = %card.view_text, "new video card");
            }
        }

        let progress = tracker.observe(store.len());
        info!(
            scroll = progress.scroll_index,
            max_scrolls = config.max_scrolls(),
            unique = progress.unique_count,
            delta = progress.delta,
            stable = progress.stable_rounds,
            stable_threshold = progress.stable_rounds_threshold,
            "scroll round complete"
        );

        if let ScrollDecision::Stop(reason) = tracker.decision() {
            info!(
                ?reason,
                unique = store.len(),
                with_views = store.parsed_count(),
                total_views = store.total_views(),
                "collection finished"
            );
            return Ok(RunOutcome {
                store,
                stop_reason: reason,
                final_progress: progress,
            });
        }

        source.scroll().await?;
        sleep(pause).await;
    }
}
