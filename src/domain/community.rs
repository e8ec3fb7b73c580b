use super::enums::{Category, Difficulty};
use serde::{Deserialize, Serialize};

/// Name of the leaderboard row that belongs to the current user
pub const YOU: &str = "You";

/// A multi-day challenge from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub points: u32,
    /// Duration label, e.g. "7 days"
    pub duration: String,
    pub participants: u32,
    pub completed: bool,
}

impl ChallengeCard {
    /// Number of days in the duration label ("7 days" -> 7)
    pub fn duration_days(&self) -> Option<u32> {
        self.duration.split_whitespace().next()?.parse().ok()
    }
}

/// Catalog entries visible under a category tab
pub fn filter_challenges(catalog: &[ChallengeCard], category: Category) -> Vec<&ChallengeCard> {
    catalog
        .iter()
        .filter(|card| category == Category::All || card.category == category)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: String,
    pub points: i64,
    pub level: u32,
    pub avatar: String,
}

/// A leaderboard row with its computed position (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

impl RankedEntry {
    pub fn is_you(&self) -> bool {
        self.entry.name == YOU
    }
}

/// Order the leaderboard by points, using the live points for the "You" row
///
/// Ties keep their original order.
pub fn rank_leaderboard(entries: &[LeaderboardEntry], your_points: i64) -> Vec<RankedEntry> {
    let mut rows: Vec<LeaderboardEntry> = entries
        .iter()
        .cloned()
        .map(|mut entry| {
            if entry.name == YOU {
                entry.points = your_points;
            }
            entry
        })
        .collect();

    rows.sort_by(|a, b| b.points.cmp(&a.points));

    rows.into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry { rank: index + 1, entry })
        .collect()
}

/// App-wide impact counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_users: u64,
    pub co2_saved_kg: u64,
    pub trees_planted: u64,
    pub waste_reduced_kg: u64,
}

/// Something another member did, shown in the community feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityActivity {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub points: u32,
    pub time: String,
    pub avatar: String,
}

/// Static profile figures that the store does not track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHighlights {
    pub challenges_completed: u32,
    pub co2_saved_kg: u32,
    pub trees_planted: u32,
    pub rank: u32,
    pub join_date: String,
}
