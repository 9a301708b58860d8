use thiserror::Error;

use crate::model::{MilestoneId, ProjectId, Role, TaskId, UserId};

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Everything that can go wrong in a single dashboard action.
///
/// None of these are fatal: a failed action leaves the board exactly as it was.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Please fill in all required fields for the {entity}: {field} is missing")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("task {0} does not exist")]
    UnknownTask(TaskId),

    #[error("milestone {0} does not exist")]
    UnknownMilestone(MilestoneId),

    #[error("project {0} does not exist")]
    UnknownProject(ProjectId),

    #[error("user {0} does not exist")]
    UnknownUser(UserId),

    #[error("task {task} is not assigned to user {user}")]
    NotAssignee { task: TaskId, user: UserId },

    #[error("the {role} dashboard cannot perform this action")]
    NotPermitted { role: Role },

    #[error("a submission is already in progress")]
    SubmissionPending,

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl DashboardError {
    /// Validation failures can be retried with corrected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::MissingField { .. })
    }
}
