use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};

use project_dashboard::io;
use project_dashboard::model::seed::initial_board;
use project_dashboard::model::{
    Committed, Dashboard, MilestoneId, NewMilestone, NewTask, ProjectId, Role, Session, TaskId,
    UserId,
};
use project_dashboard::{AppSettings, DashboardError};

use crate::ui;
use crate::ui::developer::DeveloperAction;
use crate::ui::manager::ManagerAction;

/// Input buffers behind the "Create New Task" dialog.
pub struct TaskDialog {
    pub draft: NewTask,
    pub due_picker: NaiveDate,
}

/// Input buffers behind the "Create New Milestone" dialog.
pub struct MilestoneDialog {
    pub draft: NewMilestone,
    pub due_picker: NaiveDate,
}

impl Default for TaskDialog {
    fn default() -> Self {
        Self {
            draft: NewTask {
                milestone_id: MilestoneId(1),
                ..Default::default()
            },
            due_picker: chrono::Local::now().date_naive(),
        }
    }
}

impl Default for MilestoneDialog {
    fn default() -> Self {
        Self {
            draft: NewMilestone {
                project_id: ProjectId(1),
                ..Default::default()
            },
            due_picker: chrono::Local::now().date_naive(),
        }
    }
}

impl TaskDialog {
    /// The draft to submit, with the due date taken from the picker.
    pub fn draft(&self) -> NewTask {
        NewTask {
            due_date: Some(self.due_picker),
            ..self.draft.clone()
        }
    }
}

impl MilestoneDialog {
    pub fn draft(&self) -> NewMilestone {
        NewMilestone {
            due_date: Some(self.due_picker),
            ..self.draft.clone()
        }
    }
}

/// Main application state.
pub struct DashboardApp {
    pub session: Session,
    pub settings: AppSettings,
    pub settings_path: PathBuf,
    pub file_path: Option<PathBuf>,
    pub task_dialog: TaskDialog,
    pub milestone_dialog: MilestoneDialog,
    pub status_message: String,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        settings_path: PathBuf,
    ) -> Self {
        let session = Session::new(initial_board(), settings.default_role)
            .with_submit_delay(settings.submit_delay());
        Self {
            session,
            settings,
            settings_path,
            file_path: None,
            task_dialog: TaskDialog::default(),
            milestone_dialog: MilestoneDialog::default(),
            status_message: "Ready".to_string(),
        }
    }

    fn report(&mut self, err: DashboardError) {
        tracing::warn!(error = %err, "action failed");
        self.status_message = err.to_string();
    }

    // --- Session intents ---

    pub fn change_role(&mut self, role: Role) {
        self.session.change_role(role);
        self.settings.default_role = role;
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::warn!(error = %e, "could not persist settings");
        }
        self.status_message = format!("Switched to the {} dashboard", role);
    }

    pub fn select_user(&mut self, user: UserId) {
        if let Err(e) = self.session.select_user(user) {
            self.report(e);
        }
    }

    fn apply_developer_action(&mut self, action: DeveloperAction) {
        let result = match action {
            DeveloperAction::None => Ok(()),
            DeveloperAction::BeginEditing(task) => self.session.begin_editing(task),
            DeveloperAction::FinishEditing => {
                self.session.finish_editing();
                self.status_message = "Task progress updated".to_string();
                Ok(())
            }
            DeveloperAction::SetProgress(task, value) => self.session.set_task_progress(task, value),
            DeveloperAction::ToggleComplete(task, complete) => {
                self.toggle_complete(task, complete)
            }
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    fn toggle_complete(&mut self, task: TaskId, complete: bool) -> Result<(), DashboardError> {
        self.session.toggle_task_complete(task, complete)?;
        self.status_message = if complete {
            "Task completed!".to_string()
        } else {
            "Task marked as incomplete. Progress reset to 0%".to_string()
        };
        Ok(())
    }

    pub fn submit_task_dialog(&mut self) {
        let draft = self.task_dialog.draft();
        match self.session.submit_task(draft, Instant::now()) {
            Ok(()) => self.status_message = "Creating task...".to_string(),
            Err(e) => self.report(e),
        }
    }

    pub fn submit_milestone_dialog(&mut self) {
        let draft = self.milestone_dialog.draft();
        match self.session.submit_milestone(draft, Instant::now()) {
            Ok(()) => self.status_message = "Creating milestone...".to_string(),
            Err(e) => self.report(e),
        }
    }

    /// Commit whatever the create dialogs have been waiting on.
    fn poll_pending(&mut self) {
        for result in self.session.poll(Instant::now()) {
            match result {
                Ok(Committed::Task(id)) => {
                    self.task_dialog = TaskDialog::default();
                    self.status_message = format!("Task {} created", id);
                }
                Ok(Committed::Milestone(id)) => {
                    self.milestone_dialog = MilestoneDialog::default();
                    self.status_message = format!("Milestone {} created", id);
                }
                Err(e) => self.report(e),
            }
        }
    }

    // --- File operations ---

    pub fn open_board(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Dashboard Snapshot", &["json"])
            .pick_file()
        {
            match io::load_board(&path) {
                Ok(board) => {
                    self.session.replace_board(board);
                    self.file_path = Some(path);
                    self.status_message = "Snapshot loaded".to_string();
                }
                Err(e) => self.report(e),
            }
        }
    }

    pub fn save_board(&mut self) {
        let default_name = self
            .file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("dashboard.json")
            .to_string();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Dashboard Snapshot", &["json"])
            .set_file_name(&default_name)
            .save_file()
        {
            match io::save_board(self.session.board(), &path) {
                Ok(()) => {
                    self.file_path = Some(path);
                    self.status_message = "Snapshot saved".to_string();
                }
                Err(e) => self.report(e),
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.session.board().tasks().next().is_none() {
            self.status_message = "Nothing to export, there are no tasks".to_string();
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("tasks.csv")
            .save_file()
        {
            match io::csv_export::export_csv(self.session.board(), &path) {
                Ok(count) => self.status_message = format!("Exported {} tasks to CSV", count),
                Err(e) => self.report(e),
            }
        }
    }

    pub fn reset_board(&mut self) {
        self.session.replace_board(initial_board());
        self.file_path = None;
        self.status_message = "Sample data restored".to_string();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        if self.session.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .size(11.0)
                        .color(ui::theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let board = self.session.board();
                    ui.label(
                        egui::RichText::new(format!(
                            "Projects: {} · Tasks: {}",
                            board.projects.len(),
                            board.tasks().count()
                        ))
                        .size(10.5)
                        .color(ui::theme::TEXT_DIM),
                    );
                });
            });
        });

        // Sampled once per frame; overdue flags may change between frames.
        let now = Utc::now();
        let mut developer_action = DeveloperAction::None;
        let mut manager_action = ManagerAction::None;
        let mut dashboard_error = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.session.dashboard() {
            Ok(Dashboard::Developer(view)) => {
                developer_action = ui::developer::show_developer_dashboard(
                    &view,
                    self.session.editing_task(),
                    now,
                    ui,
                );
            }
            Ok(Dashboard::Manager(view)) => {
                manager_action =
                    ui::manager::show_manager_dashboard(&view, self.session.has_pending(), now, ui);
            }
            Ok(Dashboard::Executive(view)) => {
                ui::executive::show_executive_dashboard(&view, now, ui);
            }
            Err(e) => {
                ui.label(e.to_string());
                dashboard_error = Some(e);
            }
        });

        if let Some(e) = dashboard_error {
            tracing::error!(error = %e, "dashboard unavailable");
        }
        self.apply_developer_action(developer_action);
        match manager_action {
            ManagerAction::OpenTaskDialog => self.session.task_form.open = true,
            ManagerAction::OpenMilestoneDialog => self.session.milestone_form.open = true,
            ManagerAction::None => {}
        }

        // Dialogs
        if self.session.task_form.open {
            ui::dialogs::show_add_task_dialog(self, ctx);
        }
        if self.session.milestone_form.open {
            ui::dialogs::show_add_milestone_dialog(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_picker_still_supplies_the_due_date() {
        let mut dialog = TaskDialog::default();
        dialog.draft.title = "Write release notes".into();
        dialog.draft.assigned_to = Some(UserId(3));

        let draft = dialog.draft();
        assert_eq!(draft.due_date, Some(dialog.due_picker));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn milestone_draft_uses_the_picked_date() {
        let mut dialog = MilestoneDialog::default();
        dialog.draft.title = "Beta".into();
        dialog.due_picker = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();

        let draft = dialog.draft();
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 9, 30));
        assert!(draft.validate().is_ok());
    }
}
