use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::project::{Milestone, MilestoneId, Project, ProjectId};
use super::task::{Task, TaskId, COMPLETE};
use super::user::{Role, User, UserId};
use crate::error::{DashboardError, Result};

/// The whole tracked world: users plus the Project → Milestone → Task tree.
///
/// A board is never patched in place from the outside. Every mutation takes
/// `&self` and hands back a fresh board, so a caller holding the previous
/// snapshot keeps seeing the old state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
}

/// Draft of a task the manager wants to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assigned_to: Option<UserId>,
    pub due_date: Option<NaiveDate>,
    pub milestone_id: MilestoneId,
}

/// Draft of a milestone the manager wants to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMilestone {
    pub title: String,
    pub project_id: ProjectId,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Title, assignee and due date are required. Description is optional.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(missing("task", "title"));
        }
        if self.assigned_to.is_none() {
            return Err(missing("task", "assignee"));
        }
        if self.due_date.is_none() {
            return Err(missing("task", "due date"));
        }
        Ok(())
    }
}

impl NewMilestone {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(missing("milestone", "title"));
        }
        if self.due_date.is_none() {
            return Err(missing("milestone", "due date"));
        }
        Ok(())
    }
}

fn missing(entity: &'static str, field: &'static str) -> DashboardError {
    DashboardError::MissingField { entity, field }
}

impl Board {
    pub fn new(users: Vec<User>, projects: Vec<Project>) -> Self {
        Self { users, projects }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn milestones(&self) -> impl Iterator<Item = &Milestone> {
        self.projects.iter().flat_map(|p| p.milestones.iter())
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.milestones().flat_map(|m| m.tasks.iter())
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks().find(|t| t.id == id)
    }

    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones().find(|m| m.id == id)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users_with_role(&self, role: Role) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |u| u.role == role)
    }

    pub fn developers(&self) -> impl Iterator<Item = &User> {
        self.users_with_role(Role::Developer)
    }

    /// Tasks assigned to `user`, each paired with its project and milestone.
    pub fn tasks_assigned_to(
        &self,
        user: UserId,
    ) -> impl Iterator<Item = (&Project, &Milestone, &Task)> {
        self.projects.iter().flat_map(move |p| {
            p.milestones.iter().flat_map(move |m| {
                m.tasks
                    .iter()
                    .filter(move |t| t.assigned_to == user)
                    .map(move |t| (p, m, t))
            })
        })
    }

    /// Next free task id. Starts at 1 on an empty board.
    pub fn next_task_id(&self) -> TaskId {
        TaskId(self.tasks().map(|t| t.id.0).max().unwrap_or(0) + 1)
    }

    /// Next free milestone id. Starts at 1 on an empty board.
    pub fn next_milestone_id(&self) -> MilestoneId {
        MilestoneId(self.milestones().map(|m| m.id.0).max().unwrap_or(0) + 1)
    }

    // ── Mutations (copy-on-write) ───────────────────────────────

    /// Return a board where only `id`'s progress differs. Values above 100
    /// are clamped.
    pub fn set_task_progress(&self, id: TaskId, progress: u8) -> Result<Board> {
        if self.task(id).is_none() {
            return Err(DashboardError::UnknownTask(id));
        }
        let mut next = self.clone();
        if let Some(task) = next.task_mut(id) {
            task.progress = progress.min(COMPLETE);
        }
        tracing::debug!(task = %id, progress, "task progress updated");
        Ok(next)
    }

    /// Check-box shortcut: complete means 100, incomplete resets to 0.
    pub fn toggle_task_complete(&self, id: TaskId, complete: bool) -> Result<Board> {
        self.set_task_progress(id, if complete { COMPLETE } else { 0 })
    }

    /// Append a new task (progress 0) to the draft's milestone.
    pub fn add_task(&self, draft: NewTask) -> Result<(Board, TaskId)> {
        draft.validate()?;
        if self.milestone(draft.milestone_id).is_none() {
            return Err(DashboardError::UnknownMilestone(draft.milestone_id));
        }
        let (Some(assigned_to), Some(due_date)) = (draft.assigned_to, draft.due_date) else {
            return Err(missing("task", "assignee"));
        };

        let id = self.next_task_id();
        let mut next = self.clone();
        if let Some(milestone) = next.milestone_mut(draft.milestone_id) {
            milestone.tasks.push(Task {
                id,
                title: draft.title,
                description: draft.description,
                progress: 0,
                assigned_to,
                due_date,
                milestone_id: milestone.id,
            });
        }
        tracing::info!(task = %id, milestone = %draft.milestone_id, "task created");
        Ok((next, id))
    }

    /// Append a new, empty milestone to the draft's project.
    pub fn add_milestone(&self, draft: NewMilestone) -> Result<(Board, MilestoneId)> {
        draft.validate()?;
        let Some(due_date) = draft.due_date else {
            return Err(missing("milestone", "due date"));
        };
        if self.project(draft.project_id).is_none() {
            return Err(DashboardError::UnknownProject(draft.project_id));
        }

        let id = self.next_milestone_id();
        let mut next = self.clone();
        if let Some(project) = next.projects.iter_mut().find(|p| p.id == draft.project_id) {
            project.milestones.push(Milestone {
                id,
                title: draft.title,
                project_id: project.id,
                due_date,
                tasks: Vec::new(),
            });
        }
        tracing::info!(milestone = %id, project = %draft.project_id, "milestone created");
        Ok((next, id))
    }

    /// Check ids are unique, back-references match their containers and
    /// progress stays within 0..=100. Used on boards loaded from disk.
    pub fn validate_links(&self) -> Result<()> {
        let mut users = HashSet::new();
        for user in &self.users {
            if !users.insert(user.id) {
                return Err(invalid(format!("duplicate user id {}", user.id)));
            }
        }

        let mut projects = HashSet::new();
        let mut milestones = HashSet::new();
        let mut tasks = HashSet::new();
        for project in &self.projects {
            if !projects.insert(project.id) {
                return Err(invalid(format!("duplicate project id {}", project.id)));
            }
            for milestone in &project.milestones {
                if !milestones.insert(milestone.id) {
                    return Err(invalid(format!("duplicate milestone id {}", milestone.id)));
                }
                if milestone.project_id != project.id {
                    return Err(invalid(format!(
                        "milestone {} points at project {} but lives in project {}",
                        milestone.id, milestone.project_id, project.id
                    )));
                }
                for task in &milestone.tasks {
                    if !tasks.insert(task.id) {
                        return Err(invalid(format!("duplicate task id {}", task.id)));
                    }
                    if task.milestone_id != milestone.id {
                        return Err(invalid(format!(
                            "task {} points at milestone {} but lives in milestone {}",
                            task.id, task.milestone_id, milestone.id
                        )));
                    }
                    if task.progress > COMPLETE {
                        return Err(invalid(format!(
                            "task {} has progress {}",
                            task.id, task.progress
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.projects
            .iter_mut()
            .flat_map(|p| p.milestones.iter_mut())
            .flat_map(|m| m.tasks.iter_mut())
            .find(|t| t.id == id)
    }

    fn milestone_mut(&mut self, id: MilestoneId) -> Option<&mut Milestone> {
        self.projects
            .iter_mut()
            .flat_map(|p| p.milestones.iter_mut())
            .find(|m| m.id == id)
    }
}

fn invalid(reason: String) -> DashboardError {
    DashboardError::InvalidSnapshot(reason)
}
