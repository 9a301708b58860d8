//! Role dashboards and the session state that drives them.
//!
//! Each role gets a view with only the access it needs: executives read,
//! developers change progress on their own tasks, managers append tasks and
//! milestones. [`Session`] owns the board and routes every intent through
//! the view of the current role.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::board::{Board, NewMilestone, NewTask};
use super::metrics::{
    team_performance, DeveloperSummary, ExecutiveMetrics, ManagerStats, MilestoneSummary,
    ProjectSummary, TeamMember,
};
use super::pending::{FormState, DEFAULT_SUBMIT_DELAY};
use super::project::MilestoneId;
use super::task::TaskId;
use super::user::{Role, User, UserId};
use crate::error::{DashboardError, Result};

/// The dashboard for the active role.
#[derive(Debug, Clone, Copy)]
pub enum Dashboard<'a> {
    Developer(DeveloperView<'a>),
    Manager(ManagerView<'a>),
    Executive(ExecutiveView<'a>),
}

impl Dashboard<'_> {
    pub fn role(&self) -> Role {
        match self {
            Dashboard::Developer(_) => Role::Developer,
            Dashboard::Manager(_) => Role::ProjectManager,
            Dashboard::Executive(_) => Role::Executive,
        }
    }
}

/// A developer's own tasks. May only change progress on tasks assigned to them.
#[derive(Debug, Clone, Copy)]
pub struct DeveloperView<'a> {
    board: &'a Board,
    user: &'a User,
}

impl<'a> DeveloperView<'a> {
    pub fn user(&self) -> &'a User {
        self.user
    }

    pub fn summary(&self, now: DateTime<Utc>) -> DeveloperSummary {
        DeveloperSummary::compute(self.board, self.user, now)
    }

    pub fn set_progress(&self, task: TaskId, progress: u8) -> Result<Board> {
        self.check_assignee(task)?;
        self.board.set_task_progress(task, progress)
    }

    pub fn toggle_complete(&self, task: TaskId, complete: bool) -> Result<Board> {
        self.check_assignee(task)?;
        self.board.toggle_task_complete(task, complete)
    }

    fn check_assignee(&self, id: TaskId) -> Result<()> {
        let task = self.board.task(id).ok_or(DashboardError::UnknownTask(id))?;
        if task.assigned_to != self.user.id {
            return Err(DashboardError::NotAssignee {
                task: id,
                user: self.user.id,
            });
        }
        Ok(())
    }
}

/// Portfolio overview plus append-only creation of tasks and milestones.
#[derive(Debug, Clone, Copy)]
pub struct ManagerView<'a> {
    board: &'a Board,
}

impl<'a> ManagerView<'a> {
    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn stats(&self, now: DateTime<Utc>) -> ManagerStats {
        ManagerStats::compute(self.board, now)
    }

    pub fn project_summaries(&self, now: DateTime<Utc>) -> Vec<ProjectSummary> {
        self.board
            .projects
            .iter()
            .map(|p| ProjectSummary::compute(p, now))
            .collect()
    }

    pub fn milestone_summaries(&self, now: DateTime<Utc>) -> Vec<MilestoneSummary> {
        self.board
            .milestones()
            .map(|m| MilestoneSummary::compute(m, now))
            .collect()
    }

    /// Users a new task can be assigned to.
    pub fn assignees(&self) -> Vec<&'a User> {
        self.board.developers().collect()
    }

    pub fn add_task(&self, draft: NewTask) -> Result<(Board, TaskId)> {
        self.board.add_task(draft)
    }

    pub fn add_milestone(&self, draft: NewMilestone) -> Result<(Board, MilestoneId)> {
        self.board.add_milestone(draft)
    }
}

/// Read-only aggregate figures.
#[derive(Debug, Clone, Copy)]
pub struct ExecutiveView<'a> {
    board: &'a Board,
}

impl ExecutiveView<'_> {
    pub fn metrics(&self, now: DateTime<Utc>) -> ExecutiveMetrics {
        ExecutiveMetrics::compute(self.board, now)
    }

    pub fn project_summaries(&self, now: DateTime<Utc>) -> Vec<ProjectSummary> {
        self.board
            .projects
            .iter()
            .map(|p| ProjectSummary::compute(p, now))
            .collect()
    }

    pub fn team_performance(&self) -> Vec<TeamMember> {
        team_performance(self.board)
    }
}

/// Something a pending form committed during [`Session::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    Task(TaskId),
    Milestone(MilestoneId),
}

/// Everything the dashboard remembers for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    role: Role,
    current_user: UserId,
    /// The one task whose progress slider is open, if any.
    editing_task: Option<TaskId>,
    pub task_form: FormState<NewTask>,
    pub milestone_form: FormState<NewMilestone>,
    submit_delay: Duration,
}

impl Session {
    /// Start in `role`, acting as the first user holding it.
    pub fn new(board: Board, role: Role) -> Self {
        let current_user = board
            .users_with_role(role)
            .next()
            .or_else(|| board.users.first())
            .map(|u| u.id)
            .unwrap_or(UserId(0));
        Self {
            board,
            role,
            current_user,
            editing_task: None,
            task_form: FormState::default(),
            milestone_form: FormState::default(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Swap in a whole new board, e.g. one loaded from disk.
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.editing_task = None;
        if self.board.user(self.current_user).is_none() {
            let role = self.role;
            self.change_role(role);
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn current_user(&self) -> Option<&User> {
        self.board.user(self.current_user)
    }

    pub fn editing_task(&self) -> Option<TaskId> {
        self.editing_task
    }

    /// Switch dashboards. The first user holding the new role becomes current;
    /// if nobody holds it the current user is kept.
    pub fn change_role(&mut self, role: Role) {
        self.role = role;
        if let Some(user) = self.board.users_with_role(role).next() {
            self.current_user = user.id;
        }
        self.editing_task = None;
        tracing::info!(role = %role, user = %self.current_user, "role changed");
    }

    /// Act as a specific user. Their role must match the current dashboard.
    pub fn select_user(&mut self, id: UserId) -> Result<()> {
        let user = self.board.user(id).ok_or(DashboardError::UnknownUser(id))?;
        if user.role != self.role {
            return Err(DashboardError::NotPermitted { role: self.role });
        }
        self.current_user = id;
        self.editing_task = None;
        Ok(())
    }

    pub fn dashboard(&self) -> Result<Dashboard<'_>> {
        let board = &self.board;
        Ok(match self.role {
            Role::Developer => {
                let user = board
                    .user(self.current_user)
                    .ok_or(DashboardError::UnknownUser(self.current_user))?;
                Dashboard::Developer(DeveloperView { board, user })
            }
            Role::ProjectManager => Dashboard::Manager(ManagerView { board }),
            Role::Executive => Dashboard::Executive(ExecutiveView { board }),
        })
    }

    // ── Developer intents ───────────────────────────────────────

    /// Open the progress slider for `task`, closing any other one.
    pub fn begin_editing(&mut self, task: TaskId) -> Result<()> {
        match self.dashboard()? {
            Dashboard::Developer(view) => view.check_assignee(task)?,
            _ => return Err(DashboardError::NotPermitted { role: self.role }),
        }
        self.editing_task = Some(task);
        Ok(())
    }

    pub fn finish_editing(&mut self) {
        self.editing_task = None;
    }

    pub fn set_task_progress(&mut self, task: TaskId, progress: u8) -> Result<()> {
        let next = match self.dashboard()? {
            Dashboard::Developer(view) => view.set_progress(task, progress)?,
            _ => return Err(DashboardError::NotPermitted { role: self.role }),
        };
        self.board = next;
        Ok(())
    }

    pub fn toggle_task_complete(&mut self, task: TaskId, complete: bool) -> Result<()> {
        let next = match self.dashboard()? {
            Dashboard::Developer(view) => view.toggle_complete(task, complete)?,
            _ => return Err(DashboardError::NotPermitted { role: self.role }),
        };
        self.board = next;
        Ok(())
    }

    // ── Manager intents ─────────────────────────────────────────

    /// Validate and queue a new task. It is committed by a later [`Session::poll`].
    pub fn submit_task(&mut self, draft: NewTask, now: Instant) -> Result<()> {
        self.require_manager()?;
        draft.validate()?;
        self.task_form.submit(draft, now, self.submit_delay)
    }

    /// Validate and queue a new milestone.
    pub fn submit_milestone(&mut self, draft: NewMilestone, now: Instant) -> Result<()> {
        self.require_manager()?;
        draft.validate()?;
        self.milestone_form.submit(draft, now, self.submit_delay)
    }

    /// Commit every queued draft whose delay has elapsed.
    ///
    /// Ids are taken from the board as it is at commit time, so two forms
    /// finishing in the same frame never share an id.
    pub fn poll(&mut self, now: Instant) -> Vec<Result<Committed>> {
        let mut results = Vec::new();
        if let Some(draft) = self.task_form.take_ready(now) {
            results.push(self.manager().add_task(draft).map(|(board, id)| {
                self.board = board;
                Committed::Task(id)
            }));
        }
        if let Some(draft) = self.milestone_form.take_ready(now) {
            results.push(self.manager().add_milestone(draft).map(|(board, id)| {
                self.board = board;
                Committed::Milestone(id)
            }));
        }
        for result in &results {
            if let Err(e) = result {
                tracing::warn!(error = %e, "queued submission failed");
            }
        }
        results
    }

    /// Whether any form is still waiting out its delay.
    pub fn has_pending(&self) -> bool {
        self.task_form.is_pending() || self.milestone_form.is_pending()
    }

    /// Creation access used to commit queued drafts. The role was checked
    /// when the draft was submitted.
    fn manager(&self) -> ManagerView<'_> {
        ManagerView { board: &self.board }
    }

    fn require_manager(&self) -> Result<()> {
        if self.role == Role::ProjectManager {
            Ok(())
        } else {
            Err(DashboardError::NotPermitted { role: self.role })
        }
    }
}
