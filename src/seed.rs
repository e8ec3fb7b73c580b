//! Compiled-in starting data for a fresh session.

use crate::domain::{
    Achievement, Category, ChallengeCard, CommunityActivity, Difficulty, GlobalStats,
    LeaderboardEntry, ModelError, ProfileHighlights, RecentActivity, Task, YOU,
};

fn activity(id: u32, action: &str, points: i64, date: &str) -> RecentActivity {
    RecentActivity {
        id,
        action: action.to_string(),
        points,
        date: date.to_string(),
    }
}

/// Today's tasks, all open
pub fn tasks() -> Result<Vec<Task>, ModelError> {
    Ok(vec![
        Task::new(1, "Use Public Transport", "Take the bus or train", 50, "bus-outline")?,
        Task::new(2, "Recycle 3 Items", "Sort and recycle plastic/paper/glass", 30, "leaf-outline")?,
        Task::new(3, "Save Water", "Take a 5-minute shower", 25, "water-outline")?,
    ])
}

/// Activity history, newest first
pub fn recent_activities() -> Vec<RecentActivity> {
    vec![
        activity(1, "Completed \"Recycle 3 Items\"", 30, "Today"),
        activity(2, "Used public transport", 50, "Yesterday"),
        activity(3, "Completed \"LED Light Switch\"", 75, "2 days ago"),
        activity(4, "Planted a tree", 100, "3 days ago"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    difficulty: Difficulty,
    points: u32,
    duration: &str,
    participants: u32,
    completed: bool,
) -> ChallengeCard {
    ChallengeCard {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        difficulty,
        points,
        duration: duration.to_string(),
        participants,
        completed,
    }
}

pub fn challenge_catalog() -> Vec<ChallengeCard> {
    vec![
        card(
            1,
            "Bike to Work Week",
            "Use your bike for commuting for 5 days",
            Category::Transport,
            Difficulty::Medium,
            200,
            "7 days",
            1250,
            false,
        ),
        card(
            2,
            "Zero Waste Day",
            "Produce no waste for an entire day",
            Category::Waste,
            Difficulty::Hard,
            150,
            "1 day",
            890,
            false,
        ),
        card(
            3,
            "LED Light Switch",
            "Replace 3 bulbs with LED alternatives",
            Category::Energy,
            Difficulty::Easy,
            75,
            "3 days",
            2100,
            true,
        ),
        card(
            4,
            "Water Conservation",
            "Reduce water usage by 20% this week",
            Category::Water,
            Difficulty::Medium,
            120,
            "7 days",
            1680,
            false,
        ),
        card(
            5,
            "Plant-Based Meals",
            "Eat only plant-based meals for 3 days",
            Category::All,
            Difficulty::Medium,
            100,
            "3 days",
            950,
            false,
        ),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    let rows = [
        (1, "First Steps", "Complete your first challenge", "🌱", true),
        (2, "Week Warrior", "Maintain a 7-day streak", "🔥", true),
        (3, "Transport Hero", "Complete 10 transport challenges", "🚲", true),
        (4, "Waste Warrior", "Complete 15 waste challenges", "♻️", false),
        (5, "Energy Saver", "Complete 20 energy challenges", "⚡", false),
        (6, "Water Guardian", "Complete 25 water challenges", "💧", false),
    ];

    rows.into_iter()
        .map(|(id, title, description, icon, unlocked)| Achievement {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked,
        })
        .collect()
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    let rows = [
        (1, "EcoWarrior23", 15420, 12, "🌱"),
        (2, "GreenThumb", 14890, 11, "🌿"),
        (3, "PlanetSaver", 14200, 11, "🌍"),
        (4, YOU, 1250, 5, "🐢"),
        (5, "EcoFriend", 1180, 4, "🌳"),
    ];

    rows.into_iter()
        .map(|(id, name, points, level, avatar)| LeaderboardEntry {
            id,
            name: name.to_string(),
            points,
            level,
            avatar: avatar.to_string(),
        })
        .collect()
}

pub fn global_stats() -> GlobalStats {
    GlobalStats {
        total_users: 125_000,
        co2_saved_kg: 2_500_000,
        trees_planted: 15_000,
        waste_reduced_kg: 850_000,
    }
}

pub fn community_feed() -> Vec<CommunityActivity> {
    let rows = [
        (1, "EcoWarrior23", "completed \"Bike to Work Week\"", 200, "2 hours ago", "🌱"),
        (2, "GreenThumb", "planted 5 trees", 150, "4 hours ago", "🌿"),
        (3, "PlanetSaver", "completed \"Zero Waste Day\"", 150, "6 hours ago", "🌍"),
        (4, "EcoFriend", "used public transport", 50, "8 hours ago", "🌳"),
    ];

    rows.into_iter()
        .map(|(id, user, action, points, time, avatar)| CommunityActivity {
            id,
            user: user.to_string(),
            action: action.to_string(),
            points,
            time: time.to_string(),
            avatar: avatar.to_string(),
        })
        .collect()
}

pub fn profile_highlights() -> ProfileHighlights {
    ProfileHighlights {
        challenges_completed: 23,
        co2_saved_kg: 145,
        trees_planted: 8,
        rank: 4,
        join_date: "March 2024".to_string(),
    }
}
