use serde::Serialize;

/// Why a scroll run ended. Both are normal terminations; the distinction
/// matters only for diagnostics, never for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The unique-video set stopped growing for the configured number of
    /// consecutive rounds.
    Stabilized,
    /// The scroll budget ran out before the results stabilized.
    MaxScrollsReached,
}

/// Verdict after a scroll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision {
    Continue,
    Stop(StopReason),
}

/// One scroll iteration's observation, suitable for progress logging.
/// The tracker exposes these fields; it never formats or prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollProgress {
    pub scroll_index: u32,
    pub unique_count: usize,
    pub delta: usize,
    pub stable_rounds: u32,
    pub stable_rounds_threshold: u32,
}

/// Stability tracker for infinite-scroll result pages.
///
/// There is no page count to exhaust, so the end of the results has to be
/// inferred from growth stagnation: once the cumulative unique-URL count
/// fails to grow for enough *consecutive* rounds, further scrolling is
/// judged unlikely to surface anything new. Requiring consecutive rounds
/// (rather than a cumulative tally of stalls) keeps a single slow render
/// from ending the run early.
#[derive(Debug, Clone)]
pub struct ConvergenceTracker {
    max_scrolls: u32,
    stable_rounds_threshold: u32,
    consecutive_stable_rounds: u32,
    last_unique_count: usize,
    scroll_index: u32,
}

impl ConvergenceTracker {
    pub fn new(max_scrolls: u32, stable_rounds_threshold: u32) -> Self {
        Self {
            max_scrolls,
            stable_rounds_threshold,
            consecutive_stable_rounds: 0,
            last_unique_count: 0,
            scroll_index: 0,
        }
    }

    /// Record the cumulative unique-URL count observed after a scroll
    /// iteration. The count is non-decreasing across a run; any growth
    /// resets the stability counter.
    pub fn observe(&mut self, current_unique_count: usize) -> ScrollProgress {
        debug_assert!(
            current_unique_count >= self.last_unique_count,
            "unique count must be cumulative"
        );
        let delta = current_unique_count.saturating_sub(self.last_unique_count);
        if delta == 0 {
            self.consecutive_stable_rounds += 1;
        } else {
            self.consecutive_stable_rounds = 0;
        }
        self.last_unique_count = current_unique_count;
        self.scroll_index += 1;

        ScrollProgress {
            scroll_index: self.scroll_index,
            unique_count: current_unique_count,
            delta,
            stable_rounds: self.consecutive_stable_rounds,
            stable_rounds_threshold: self.stable_rounds_threshold,
        }
    }

    /// Evaluate the stop condition after the latest observation. Stability
    /// is checked before the scroll budget, so a run that stabilizes on its
    /// final allowed scroll reports `Stabilized`.
    pub fn decision(&self) -> ScrollDecision {
        if self.consecutive_stable_rounds >= self.stable_rounds_threshold {
            ScrollDecision::Stop(StopReason::Stabilized)
        } else if self.scroll_index >= self.max_scrolls {
            ScrollDecision::Stop(StopReason::MaxScrollsReached)
        } else {
            ScrollDecision::Continue
        }
    }

    /// Number of scroll iterations observed so far.
    pub fn scroll_index(&self) -> u32 {
        self.scroll_index
    }

    pub fn last_unique_count(&self) -> usize {
        self.last_unique_count
    }
}
