use thiserror::Error;

/// Rejected domain data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("task {id} has an empty title")]
    EmptyTitle { id: u32 },

    #[error("task {id} has no icon name")]
    MissingIcon { id: u32 },

    #[error("task id {0} appears more than once")]
    DuplicateTaskId(u32),
}
