//! Teaser post compliance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of teaser posts required before release.
pub const MIN_TEASER_POSTS: u32 = 2;

/// Days before release the optimal posting window opens.
pub const WINDOW_OPEN_DAYS: i64 = 28;

/// Days before release the optimal posting window closes.
pub const WINDOW_CLOSE_DAYS: i64 = 21;

/// Standing of the teaser requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeaserStatus {
    /// Minimum posts required
    pub required: u32,

    /// Posts actually recorded
    pub actual: u32,

    /// Whether the requirement is satisfied
    pub met: bool,
}

/// Advisory posting window; never gates clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingWindow {
    /// First day of the window
    pub start: NaiveDate,

    /// Last day of the window
    pub end: NaiveDate,
}

/// Check the teaser post count against the fixed minimum.
pub fn check_teaser_requirement(count: u32) -> TeaserStatus {
    TeaserStatus {
        required: MIN_TEASER_POSTS,
        actual: count,
        met: count >= MIN_TEASER_POSTS,
    }
}

/// The recommended window for teaser posts: two to four weeks out.
pub fn optimal_posting_window(release_date: NaiveDate) -> PostingWindow {
    PostingWindow {
        start: release_date - chrono::Duration::days(WINDOW_OPEN_DAYS),
        end: release_date - chrono::Duration::days(WINDOW_CLOSE_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_post_is_not_enough() {
        let status = check_teaser_requirement(1);
        assert!(!status.met);
        assert_eq!(status.required, 2);
        assert_eq!(status.actual, 1);
    }

    #[test]
    fn two_posts_meet_the_requirement() {
        assert!(check_teaser_requirement(2).met);
        assert!(check_teaser_requirement(5).met);
    }

    #[test]
    fn window_spans_four_to_three_weeks_out() {
        let release = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let window = optimal_posting_window(release);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 12, 3).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 12, 10).unwrap());
    }
}
