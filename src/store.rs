use crate::domain::{
    ActivityLog, ChallengeProgress, CompletedTask, ModelError, NewActivity, RecentActivity, Task,
    UserProfile,
};
use crate::seed;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Single source of truth for one session's progress
///
/// Screens and commands get the store passed in explicitly and read through
/// the accessors; every change goes through the mutation methods below. None
/// of them can fail: ids that match nothing leave the state untouched.
#[derive(Debug, Clone, Serialize)]
pub struct UserState {
    profile: UserProfile,
    tasks: Vec<Task>,
    completed_tasks: Vec<CompletedTask>,
    recent_activities: ActivityLog,
    challenge_progress: ChallengeProgress,
}

impl UserState {
    /// Fresh session state from the compiled-in seed
    pub fn new() -> Result<Self, ModelError> {
        Self::from_parts(UserProfile::default(), seed::tasks()?, seed::recent_activities())
    }

    /// Build a store from caller-supplied data
    ///
    /// Tasks that arrive already completed get their snapshot in the
    /// completed list, so the two never disagree.
    pub fn from_parts(
        profile: UserProfile,
        tasks: Vec<Task>,
        recent_activities: Vec<RecentActivity>,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for task in &tasks {
            task.validate()?;
            if !seen.insert(task.id) {
                return Err(ModelError::DuplicateTaskId(task.id));
            }
        }

        let completed_tasks = tasks
            .iter()
            .filter(|task| task.completed)
            .map(CompletedTask::from)
            .collect();

        Ok(Self {
            profile,
            tasks,
            completed_tasks,
            recent_activities: ActivityLog::from_entries(recent_activities),
            challenge_progress: ChallengeProgress::default(),
        })
    }

    pub fn points(&self) -> i64 {
        self.profile.points
    }

    pub fn level(&self) -> u32 {
        self.profile.level
    }

    pub fn streak(&self) -> u32 {
        self.profile.streak
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_tasks(&self) -> &[CompletedTask] {
        &self.completed_tasks
    }

    /// Activity log, newest first
    pub fn recent_activities(&self) -> &[RecentActivity] {
        self.recent_activities.entries()
    }

    pub fn activity_log(&self) -> &ActivityLog {
        &self.recent_activities
    }

    pub fn challenge_progress(&self) -> &ChallengeProgress {
        &self.challenge_progress
    }

    /// Flip a task between open and completed
    ///
    /// Completing adds the task's points, stores a snapshot and logs
    /// `Completed "<title>"`. Undoing subtracts the points (no floor), drops
    /// the snapshot and logs `Undid "<title>"`.
    pub fn toggle_task(&mut self, task_id: u32) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            debug!(task_id, "toggle ignored, no such task");
            return;
        };

        let activity = if task.completed {
            task.completed = false;
            self.profile.points -= task.points_value();
            self.completed_tasks.retain(|done| done.id != task_id);
            NewActivity::undone(task)
        } else {
            task.completed = true;
            self.profile.points += task.points_value();
            self.completed_tasks.push(CompletedTask::from(&*task));
            NewActivity::completed(task)
        };

        debug!(
            task_id,
            completed = task.completed,
            points = self.profile.points,
            "task toggled"
        );
        self.add_recent_activity(activity);
    }

    /// Prepend an entry to the activity log with the next id
    pub fn add_recent_activity(&mut self, activity: NewActivity) {
        let entry = self.recent_activities.prepend(activity);
        debug!(id = entry.id, points = entry.points, action = %entry.action, "activity recorded");
    }

    /// Mark one dot of a challenge's progress strip
    pub fn mark_dot(&mut self, challenge_id: u32, dot_index: usize) {
        self.challenge_progress.mark(challenge_id, dot_index);
        debug!(challenge_id, dot_index, "dot marked");
    }

    /// Level is set by hand; points never move it
    pub fn set_level(&mut self, level: u32) {
        self.profile.level = level;
    }

    pub fn set_streak(&mut self, streak: u32) {
        self.profile.streak = streak;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_state() -> UserState {
        UserState::new().unwrap()
    }

    #[test]
    fn test_initialize_seed() {
        let state = create_test_state();
        assert_eq!(state.points(), 1250);
        assert_eq!(state.level(), 5);
        assert_eq!(state.streak(), 7);
        assert_eq!(state.tasks().len(), 3);
        assert!(state.completed_tasks().is_empty());
        assert_eq!(state.recent_activities().len(), 4);
        assert_eq!(state.challenge_progress().iter().count(), 0);
    }

    #[test]
    fn test_toggle_completes_task() {
        let mut state = create_test_state();
        state.toggle_task(1);

        assert_eq!(state.points(), 1300);
        assert!(state.tasks()[0].completed);
        assert_eq!(state.completed_tasks().len(), 1);
        assert_eq!(state.completed_tasks()[0].id, 1);
        assert!(state.completed_tasks()[0].completed);
        assert!(state.recent_activities()[0].action.contains("Completed"));
        assert_eq!(state.recent_activities()[0].action, "Completed \"Use Public Transport\"");
        assert_eq!(state.recent_activities()[0].points, 50);
        assert_eq!(state.recent_activities()[0].date, "Today");
    }

    #[test]
    fn test_toggle_twice_undoes() {
        let mut state = create_test_state();
        state.toggle_task(1);
        state.toggle_task(1);

        assert_eq!(state.points(), 1250);
        assert!(!state.tasks()[0].completed);
        assert!(state.completed_tasks().is_empty());
        assert!(state.recent_activities()[0].action.contains("Undid"));
        assert_eq!(state.recent_activities()[0].points, -50);
    }

    #[test]
    fn test_double_toggle_restores_everything_but_log() {
        for task_id in [1, 2, 3] {
            let mut state = create_test_state();
            state.toggle_task(2);
            let tasks_before = state.tasks().to_vec();
            let completed_before = state.completed_tasks().to_vec();
            let points_before = state.points();
            let log_before = state.recent_activities().len();

            state.toggle_task(task_id);
            state.toggle_task(task_id);

            assert_eq!(state.points(), points_before);
            assert_eq!(state.tasks(), tasks_before.as_slice());
            let mut completed_after = state.completed_tasks().to_vec();
            let mut completed_expected = completed_before.clone();
            completed_after.sort_by_key(|task| task.id);
            completed_expected.sort_by_key(|task| task.id);
            assert_eq!(completed_after, completed_expected);
            assert_eq!(state.recent_activities().len(), log_before + 2);
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = create_test_state();
        let before = state.clone();

        state.toggle_task(99);

        assert_eq!(state.points(), before.points());
        assert_eq!(state.tasks(), before.tasks());
        assert_eq!(state.completed_tasks(), before.completed_tasks());
        assert_eq!(state.recent_activities(), before.recent_activities());
    }

    #[test]
    fn test_completed_list_holds_each_id_once() {
        let mut state = create_test_state();
        state.toggle_task(1);
        state.toggle_task(3);
        state.toggle_task(1);
        state.toggle_task(1);

        let ids: Vec<u32> = state.completed_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_points_have_no_floor() {
        let task = Task::new(1, "Big", "", 500, "leaf-outline").unwrap();
        let mut done = task.clone();
        done.completed = true;
        let profile = UserProfile { points: 100, level: 1, streak: 0 };
        let mut state = UserState::from_parts(profile, vec![done], Vec::new()).unwrap();

        state.toggle_task(1);

        assert_eq!(state.points(), -400);
        assert!(state.completed_tasks().is_empty());
    }

    #[test]
    fn test_add_recent_activity() {
        let mut state = create_test_state();
        let before = state.recent_activities().to_vec();

        state.add_recent_activity(NewActivity::new("X", 10, "Today"));

        let log = state.recent_activities();
        assert_eq!(log.len(), before.len() + 1);
        assert_eq!(log[0].action, "X");
        assert_eq!(log[0].points, 10);
        assert_eq!(log[0].date, "Today");
        assert_eq!(log[0].id, 5);
        assert_eq!(&log[1..], before.as_slice());
    }

    #[test]
    fn test_add_recent_activity_leaves_points_alone() {
        let mut state = create_test_state();
        state.add_recent_activity(NewActivity::new("Planted a tree", 100, "Today"));
        assert_eq!(state.points(), 1250);
    }

    #[test]
    fn test_mark_dot() {
        let mut state = create_test_state();
        state.mark_dot(1, 0);
        state.mark_dot(1, 2);
        state.mark_dot(1, 0);

        let trail = state.challenge_progress().trail(1).unwrap();
        assert_eq!(trail.flags(3), vec![true, false, true]);
        assert!(state.challenge_progress().trail(2).is_none());
    }

    #[test]
    fn test_level_and_streak_are_manual() {
        let mut state = create_test_state();
        state.toggle_task(1);
        state.toggle_task(2);
        assert_eq!(state.level(), 5);
        assert_eq!(state.streak(), 7);

        state.set_level(6);
        state.set_streak(8);
        assert_eq!(state.level(), 6);
        assert_eq!(state.streak(), 8);
        assert_eq!(state.points(), 1330);
    }

    #[test]
    fn test_from_parts_rejects_duplicate_ids() {
        let a = Task::new(1, "A", "", 10, "leaf-outline").unwrap();
        let b = Task::new(1, "B", "", 20, "leaf-outline").unwrap();
        let err = UserState::from_parts(UserProfile::default(), vec![a, b], Vec::new()).unwrap_err();
        assert_eq!(err, ModelError::DuplicateTaskId(1));
    }

    #[test]
    fn test_from_parts_snapshots_completed_tasks() {
        let mut a = Task::new(1, "A", "", 10, "leaf-outline").unwrap();
        a.completed = true;
        let b = Task::new(2, "B", "", 20, "leaf-outline").unwrap();
        let state = UserState::from_parts(UserProfile::default(), vec![a, b], Vec::new()).unwrap();

        assert_eq!(state.completed_tasks().len(), 1);
        assert_eq!(state.completed_tasks()[0].id, 1);
    }

    #[test]
    fn test_new_builds_through_validation() {
        let state = UserState::new().unwrap();
        for task in state.tasks() {
            assert!(task.validate().is_ok());
        }
    }

    #[test]
    fn test_state_json_keeps_progress_as_flag_arrays() {
        let mut state = create_test_state();
        state.mark_dot(1, 0);
        state.mark_dot(1, 2);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["challenge_progress"], serde_json::json!({ "1": [true, false, true] }));
        assert_eq!(value["profile"]["points"], serde_json::json!(1250));
    }
}
