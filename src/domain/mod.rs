pub mod activity;
pub mod community;
pub mod enums;
pub mod error;
pub mod profile;
pub mod progress;
pub mod task;
pub mod views;

pub use activity::{ActivityLog, NewActivity, RecentActivity};
pub use community::{
    filter_challenges, rank_leaderboard, Achievement, ChallengeCard, CommunityActivity,
    GlobalStats, LeaderboardEntry, ProfileHighlights, YOU,
};
pub use enums::{Category, Difficulty};
pub use error::ModelError;
pub use profile::UserProfile;
pub use progress::ChallengeProgress;
pub use task::{CompletedTask, Task};
pub use views::{dot_strip, format_number, format_thousands, points_delta, streak_badge, task_check};
