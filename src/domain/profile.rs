use serde::{Deserialize, Serialize};

/// Headline numbers for the user
///
/// `points` moves with task toggles and has no floor. `level` and `streak`
/// are only changed through their explicit setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub points: i64,
    pub level: u32,
    pub streak: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            points: 1250,
            level: 5,
            streak: 7,
        }
    }
}
