use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::project::MilestoneId;
use super::user::UserId;

/// Progress value that counts as done.
pub const COMPLETE: u8 = 100;

/// Unique identifier of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An assignable unit of work inside a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Completion from 0 (not started) to 100 (delivered).
    pub progress: u8,
    pub assigned_to: UserId,
    pub due_date: NaiveDate,
    /// Back-reference to the milestone that owns this task.
    pub milestone_id: MilestoneId,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.progress >= COMPLETE
    }

    /// A task is overdue when its due date has passed and it is not yet delivered.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_complete() && is_overdue(self.due_date, now)
    }

    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_progress(self.progress)
    }
}

/// True iff `due` is strictly earlier than `now`.
///
/// Dates are taken as midnight UTC. The result depends on the clock, so the
/// same task can flip to overdue between two renders without any mutation.
pub fn is_overdue(due: NaiveDate, now: DateTime<Utc>) -> bool {
    due.and_time(chrono::NaiveTime::MIN).and_utc() < now
}

/// Coarse status bucket shown next to each task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    AlmostDone,
    Delivered,
}

impl TaskStatus {
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0 => TaskStatus::NotStarted,
            1..=49 => TaskStatus::InProgress,
            50..=99 => TaskStatus::AlmostDone,
            _ => TaskStatus::Delivered,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::AlmostDone => "Almost Done",
            TaskStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(progress: u8, due: NaiveDate) -> Task {
        Task {
            id: TaskId(1),
            title: "Write docs".into(),
            description: String::new(),
            progress,
            assigned_to: UserId(1),
            due_date: due,
            milestone_id: MilestoneId(1),
        }
    }

    #[test]
    fn overdue_is_strictly_before_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert!(is_overdue(date(2024, 2, 29), now));
        // Midnight of the same day has already passed at noon.
        assert!(is_overdue(date(2024, 3, 1), now));
        assert!(!is_overdue(date(2024, 3, 2), now));

        let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert!(!is_overdue(date(2024, 3, 1), midnight));
    }

    #[test]
    fn delivered_task_is_never_overdue() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(!task(100, date(2024, 1, 1)).is_overdue_at(now));
        assert!(task(99, date(2024, 1, 1)).is_overdue_at(now));
    }

    #[test]
    fn status_buckets_follow_progress() {
        assert_eq!(TaskStatus::from_progress(0), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::from_progress(1), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_progress(49), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_progress(50), TaskStatus::AlmostDone);
        assert_eq!(TaskStatus::from_progress(99), TaskStatus::AlmostDone);
        assert_eq!(TaskStatus::from_progress(100), TaskStatus::Delivered);
        assert_eq!(TaskStatus::AlmostDone.to_string(), "Almost Done");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(task(85, date(2024, 2, 10))).unwrap();
        assert_eq!(json["assignedTo"], 1);
        assert_eq!(json["milestoneId"], 1);
        assert_eq!(json["dueDate"], "2024-02-10");
        assert_eq!(json["progress"], 85);
    }
}
