use crate::domain::ChallengeCard;
use crate::store::UserState;

/// Figures derived from the current task list and log
#[derive(Debug, PartialEq)]
pub struct ProgressStats {
    pub total_tasks: usize,
    pub completed_count: usize,
    /// Points from tasks currently marked completed
    pub earned_points: i64,
    /// Points still available from open tasks
    pub open_points: i64,
    pub completion_percent: f64,
    /// Sum of every delta in the activity log
    pub log_net_points: i64,
}

/// Dot progress for one catalog challenge
#[derive(Debug, PartialEq)]
pub struct DotSummary {
    pub challenge_id: u32,
    pub title: String,
    pub marked: usize,
    /// Days in the challenge, when its duration label parses
    pub days: Option<u32>,
    /// Highest marked index plus one
    pub span: usize,
}

/// Calculate progress statistics for the current session
pub fn calculate_progress_stats(state: &UserState) -> ProgressStats {
    let total_tasks = state.tasks().len();
    let completed_count = state.tasks().iter().filter(|task| task.completed).count();

    let (earned_points, open_points) = state.tasks().iter().fold((0, 0), |(earned, open), task| {
        if task.completed {
            (earned + task.points_value(), open)
        } else {
            (earned, open + task.points_value())
        }
    });

    let completion_percent = if total_tasks > 0 {
        (completed_count as f64 / total_tasks as f64) * 100.0
    } else {
        0.0
    };

    ProgressStats {
        total_tasks,
        completed_count,
        earned_points,
        open_points,
        completion_percent,
        log_net_points: state.activity_log().net_points(),
    }
}

/// Summaries for every catalog challenge that has at least one marked dot
///
/// Progress recorded for ids outside the catalog is reported with the id as
/// its title.
pub fn dot_summary(state: &UserState, catalog: &[ChallengeCard]) -> Vec<DotSummary> {
    state
        .challenge_progress()
        .iter()
        .map(|(challenge_id, trail)| {
            let card = catalog.iter().find(|card| card.id == challenge_id);
            DotSummary {
                challenge_id,
                title: card
                    .map(|card| card.title.clone())
                    .unwrap_or_else(|| format!("Challenge #{}", challenge_id)),
                marked: trail.marked_count(),
                days: card.and_then(ChallengeCard::duration_days),
                span: trail.span(),
            }
        })
        .collect()
}
