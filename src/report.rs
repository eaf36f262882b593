use serde::Serialize;

use crate::store::VideoStore;

/// One entry of the most-viewed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedVideo {
    pub url: String,
    pub views: u64,
}

/// Aggregate numbers for a finished run, as data. Formatting and printing
/// are left to whatever surface the embedding application exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallySummary {
    /// Distinct video URLs observed, parseable or not.
    pub unique_videos: usize,
    /// Records whose displayed view count parsed.
    pub videos_with_views: usize,
    /// Sum of the parsed view counts.
    pub total_views: u64,
    /// Most-viewed videos, descending; ties keep first-seen order.
    pub top_videos: Vec<RankedVideo>,
}

impl TallySummary {
    pub fn from_store(store: &VideoStore, top_n: usize) -> Self {
        let top_videos = store
            .top_videos(top_n)
            .into_iter()
            .map(|record| RankedVideo {
                url: record.url.clone(),
                views: record.views.unwrap_or(0),
            })
            .collect();

        Self {
            unique_videos: store.len(),
            videos_with_views: store.parsed_count(),
            total_views: store.total_views(),
            top_videos,
        }
    }
}
