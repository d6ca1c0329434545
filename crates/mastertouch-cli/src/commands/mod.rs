pub mod event;
pub mod progress;
pub mod streak;
pub mod summary;
pub mod unlocks;

use chrono::NaiveDate;

/// Resolve the reference day for streak math: an explicit `--today`
/// override, or the local calendar day.
pub fn reference_day(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}
