use crate::model::{Item, ItemCategory, ItemStatus};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_SEED_COUNT: usize = 25;

const NAME_POOL: [&str; 15] = [
    "Invoice Sync",
    "Client Portal",
    "Status Reporter",
    "Release Notes",
    "QA Checklist",
    "Bug Triage",
    "Timesheet Export",
    "Email Digest",
    "Audit Log",
    "Onboarding Pack",
    "Asset Manager",
    "Lead Tracker",
    "Roadmap Draft",
    "Docs Refresh",
    "Feedback Queue",
];

const NOTES_POOL: [&str; 9] = [
    "Needs review",
    "Follow up with stakeholder",
    "Edge cases pending",
    "Ready for QA",
    "Waiting on API",
    "Polish UI copy",
    "Add validation",
    "Fix sorting bug",
    "Confirm requirements",
];

/// Builds the deterministic starting dataset.
///
/// Item `n` (1-based) is `2n - 1` days older than `now`, so ids ascend as
/// items get older. Status and category cycle through their enumerations.
pub fn seed_items(count: usize, now: DateTime<Utc>) -> Vec<Item> {
    (0..count)
        .map(|idx| {
            let id = idx as u64 + 1;
            let name = NAME_POOL[idx % NAME_POOL.len()];
            let age = Duration::days(idx as i64 * 2 + 1);

            Item::new(id, format!("{} #{}", name, id))
                .with_status(ItemStatus::ALL[idx % ItemStatus::ALL.len()])
                .with_category(ItemCategory::ALL[idx % ItemCategory::ALL.len()])
                .with_created_at(now - age)
                .with_notes(NOTES_POOL[(idx * 3) % NOTES_POOL.len()].to_string())
        })
        .collect()
}
