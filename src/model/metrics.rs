//! Derived numbers shown on the dashboards.
//!
//! Everything here is a pure function of a board snapshot and, where overdue
//! status matters, an explicit `now`. Nothing is cached: callers recompute
//! on every render.

use chrono::{DateTime, Utc};

use super::board::Board;
use super::project::{Milestone, MilestoneId, Project, ProjectId};
use super::task::{Task, COMPLETE};
use super::user::{User, UserId};

/// Round `sum / count` to the nearest integer, halves rounding up.
fn round_mean(sum: u64, count: u64) -> u64 {
    if count == 0 {
        0
    } else {
        (2 * sum + count) / (2 * count)
    }
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u8 {
    round_mean(part as u64 * 100, whole as u64).min(100) as u8
}

/// Mean task progress of a milestone, 0 if it has no tasks.
pub fn milestone_progress(milestone: &Milestone) -> u8 {
    let sum: u64 = milestone.tasks.iter().map(|t| u64::from(t.progress)).sum();
    round_mean(sum, milestone.tasks.len() as u64) as u8
}

/// Mean of the milestone progress values, 0 if there are no milestones.
///
/// Each milestone counts once regardless of how many tasks it holds.
pub fn project_progress(project: &Project) -> u8 {
    let sum: u64 = project
        .milestones
        .iter()
        .map(|m| u64::from(milestone_progress(m)))
        .sum();
    round_mean(sum, project.milestones.len() as u64) as u8
}

pub fn is_delivered(milestone: &Milestone) -> bool {
    milestone_progress(milestone) == COMPLETE
}

/// Portfolio-wide figures for the executive dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutiveMetrics {
    pub total_projects: usize,
    pub total_milestones: usize,
    pub delivered_milestones: usize,
    pub milestone_delivery_rate: u8,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
    pub average_project_progress: u8,
    pub task_completion_rate: u8,
}

impl ExecutiveMetrics {
    pub fn compute(board: &Board, now: DateTime<Utc>) -> Self {
        let total_milestones = board.milestones().count();
        let delivered_milestones = board.milestones().filter(|m| is_delivered(m)).count();
        let total_tasks = board.tasks().count();
        let completed_tasks = board.tasks().filter(|t| t.is_complete()).count();
        let overdue_tasks = board.tasks().filter(|t| t.is_overdue_at(now)).count();
        let progress_sum: u64 = board
            .projects
            .iter()
            .map(|p| u64::from(project_progress(p)))
            .sum();

        Self {
            total_projects: board.projects.len(),
            total_milestones,
            delivered_milestones,
            milestone_delivery_rate: percentage(delivered_milestones, total_milestones),
            total_tasks,
            completed_tasks,
            overdue_tasks,
            average_project_progress: round_mean(progress_sum, board.projects.len() as u64) as u8,
            task_completion_rate: percentage(completed_tasks, total_tasks),
        }
    }

    pub fn task_breakdown(&self) -> TaskStatusBreakdown {
        TaskStatusBreakdown {
            completed: self.completed_tasks,
            in_progress: self
                .total_tasks
                .saturating_sub(self.completed_tasks)
                .saturating_sub(self.overdue_tasks),
            overdue: self.overdue_tasks,
        }
    }

    pub fn milestone_breakdown(&self) -> MilestoneStatusBreakdown {
        MilestoneStatusBreakdown {
            delivered: self.delivered_milestones,
            in_progress: self
                .total_milestones
                .saturating_sub(self.delivered_milestones),
        }
    }
}

/// Completed / in progress / overdue split. "In progress" is whatever is
/// neither completed nor overdue, including tasks not yet started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStatusBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MilestoneStatusBreakdown {
    pub delivered: usize,
    pub in_progress: usize,
}

/// Headline counts on the manager dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManagerStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
    pub total_milestones: usize,
    pub completed_milestones: usize,
}

impl ManagerStats {
    pub fn compute(board: &Board, now: DateTime<Utc>) -> Self {
        Self {
            total_tasks: board.tasks().count(),
            completed_tasks: board.tasks().filter(|t| t.is_complete()).count(),
            overdue_tasks: board.tasks().filter(|t| t.is_overdue_at(now)).count(),
            total_milestones: board.milestones().count(),
            completed_milestones: board.milestones().filter(|m| is_delivered(m)).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub progress: u8,
    pub milestones: usize,
    pub delivered_milestones: usize,
    pub tasks: usize,
    pub completed_tasks: usize,
    pub overdue_tasks: usize,
}

impl ProjectSummary {
    pub fn compute(project: &Project, now: DateTime<Utc>) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            progress: project_progress(project),
            milestones: project.milestones.len(),
            delivered_milestones: project.milestones.iter().filter(|m| is_delivered(m)).count(),
            tasks: project.tasks().count(),
            completed_tasks: project.tasks().filter(|t| t.is_complete()).count(),
            overdue_tasks: project.tasks().filter(|t| t.is_overdue_at(now)).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneSummary {
    pub id: MilestoneId,
    pub title: String,
    pub progress: u8,
    pub overdue_tasks: usize,
}

impl MilestoneSummary {
    pub fn compute(milestone: &Milestone, now: DateTime<Utc>) -> Self {
        Self {
            id: milestone.id,
            title: milestone.title.clone(),
            progress: milestone_progress(milestone),
            overdue_tasks: milestone.tasks.iter().filter(|t| t.is_overdue_at(now)).count(),
        }
    }
}

/// Per-developer completion figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub user: UserId,
    pub first_name: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: u8,
}

/// One entry per developer, in user order.
pub fn team_performance(board: &Board) -> Vec<TeamMember> {
    board
        .developers()
        .map(|dev| {
            let (total, completed) = board
                .tasks()
                .filter(|t| t.assigned_to == dev.id)
                .fold((0, 0), |(total, done), t| {
                    (total + 1, done + usize::from(t.is_complete()))
                });
            TeamMember {
                user: dev.id,
                first_name: dev.first_name().to_string(),
                total_tasks: total,
                completed_tasks: completed,
                completion_rate: percentage(completed, total),
            }
        })
        .collect()
}

/// A task with the names of the project and milestone it sits under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedTask {
    pub task: Task,
    pub project_name: String,
    pub milestone_title: String,
}

/// What a developer sees about their own work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperSummary {
    pub tasks: Vec<AssignedTask>,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

impl DeveloperSummary {
    pub fn compute(board: &Board, user: &User, now: DateTime<Utc>) -> Self {
        let tasks: Vec<AssignedTask> = board
            .tasks_assigned_to(user.id)
            .map(|(project, milestone, task)| AssignedTask {
                task: task.clone(),
                project_name: project.name.clone(),
                milestone_title: milestone.title.clone(),
            })
            .collect();
        let completed = tasks.iter().filter(|a| a.task.is_complete()).count();
        let in_progress = tasks
            .iter()
            .filter(|a| a.task.progress > 0 && !a.task.is_complete())
            .count();
        let overdue = tasks.iter().filter(|a| a.task.is_overdue_at(now)).count();
        Self {
            tasks,
            completed,
            in_progress,
            overdue,
        }
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }
}
