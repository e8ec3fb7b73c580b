use super::task::Task;
use serde::{Deserialize, Serialize};

/// Date label used for every activity recorded in this session
pub const TODAY_LABEL: &str = "Today";

/// A point-affecting entry in the activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: u32,
    pub action: String,
    /// Positive for completions, negative for undos
    pub points: i64,
    /// Display label ("Today", "2 days ago", ...)
    pub date: String,
}

/// Activity payload before the log assigns it an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub action: String,
    pub points: i64,
    pub date: String,
}

impl NewActivity {
    pub fn new(action: impl Into<String>, points: i64, date: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            points,
            date: date.into(),
        }
    }

    /// Entry recorded when a task gets completed
    pub fn completed(task: &Task) -> Self {
        Self::new(
            format!("Completed \"{}\"", task.title),
            task.points_value(),
            TODAY_LABEL,
        )
    }

    /// Entry recorded when a completion is taken back
    pub fn undone(task: &Task) -> Self {
        Self::new(
            format!("Undid \"{}\"", task.title),
            -task.points_value(),
            TODAY_LABEL,
        )
    }
}

/// Newest-first activity log
///
/// Ids are `len + 1` at insertion time. Entries are never removed, so the ids
/// stay distinct for the lifetime of a log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<RecentActivity>,
}

impl ActivityLog {
    /// Build a log from entries already in newest-first order
    pub fn from_entries(entries: Vec<RecentActivity>) -> Self {
        Self { entries }
    }

    /// Prepend an entry and return it with its assigned id
    pub fn prepend(&mut self, activity: NewActivity) -> &RecentActivity {
        let entry = RecentActivity {
            id: self.next_id(),
            action: activity.action,
            points: activity.points,
            date: activity.date,
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.entries.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    pub fn entries(&self) -> &[RecentActivity] {
        &self.entries
    }

    /// Sum of all point deltas in the log
    pub fn net_points(&self) -> i64 {
        self.entries.iter().map(|entry| entry.points).sum()
    }
}
