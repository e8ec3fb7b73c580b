use super::error::ModelError;
use serde::{Deserialize, Serialize};

/// A daily eco task the user can complete for points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the task list
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Points awarded on completion
    pub points: u32,
    /// Symbolic icon name (e.g. "bus-outline")
    pub icon: String,
    pub completed: bool,
}

impl Task {
    /// Create an uncompleted task, rejecting blank titles and icons
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        points: u32,
        icon: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let title = title.into();
        let icon = icon.into();

        if title.trim().is_empty() {
            return Err(ModelError::EmptyTitle { id });
        }
        if icon.trim().is_empty() {
            return Err(ModelError::MissingIcon { id });
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            points,
            icon,
            completed: false,
        })
    }

    /// Signed point value, as it moves the profile total
    pub fn points_value(&self) -> i64 {
        i64::from(self.points)
    }

    /// Re-check an already built task (e.g. one deserialized from JSON)
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyTitle { id: self.id });
        }
        if self.icon.trim().is_empty() {
            return Err(ModelError::MissingIcon { id: self.id });
        }
        Ok(())
    }
}

/// Snapshot of a task taken at the moment it was completed
///
/// The snapshot is independent of the live task: later edits to the task list
/// do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub icon: String,
    pub completed: bool,
}

impl From<&Task> for CompletedTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            points: task.points,
            icon: task.icon.clone(),
            completed: task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new(1, "Use Public Transport", "Take the bus or train", 50, "bus-outline").unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Use Public Transport");
        assert_eq!(task.points, 50);
        assert!(!task.completed);
    }

    #[test]
    fn test_task_new_rejects_blank_title() {
        let err = Task::new(7, "   ", "", 10, "leaf-outline").unwrap_err();
        assert_eq!(err, ModelError::EmptyTitle { id: 7 });
    }

    #[test]
    fn test_task_new_rejects_missing_icon() {
        let err = Task::new(8, "Save Water", "", 25, "").unwrap_err();
        assert_eq!(err, ModelError::MissingIcon { id: 8 });
    }

    #[test]
    fn test_validate_deserialized_task() {
        let task: Task = serde_json::from_str(
            r#"{"id":3,"title":"","description":"x","points":5,"icon":"water-outline","completed":false}"#,
        )
        .unwrap();
        assert_eq!(task.validate(), Err(ModelError::EmptyTitle { id: 3 }));
    }

    #[test]
    fn test_completed_snapshot_is_detached() {
        let mut task = Task::new(2, "Recycle 3 Items", "Sort and recycle", 30, "leaf-outline").unwrap();
        task.completed = true;
        let snapshot = CompletedTask::from(&task);

        task.title = "Renamed".to_string();

        assert_eq!(snapshot.id, 2);
        assert_eq!(snapshot.title, "Recycle 3 Items");
        assert!(snapshot.completed);
    }
}
