use chrono::{DateTime, Utc};
use egui::{RichText, Ui};

use project_dashboard::model::view::DeveloperView;
use project_dashboard::model::TaskId;

use crate::ui::{theme, widgets};

/// Intents the developer dashboard can emit.
pub enum DeveloperAction {
    None,
    BeginEditing(TaskId),
    FinishEditing,
    SetProgress(TaskId, u8),
    ToggleComplete(TaskId, bool),
}

pub fn show_developer_dashboard(
    view: &DeveloperView<'_>,
    editing: Option<TaskId>,
    now: DateTime<Utc>,
    ui: &mut Ui,
) -> DeveloperAction {
    let mut action = DeveloperAction::None;
    let summary = view.summary(now);

    widgets::section_heading(
        ui,
        &format!("Welcome back, {}", view.user().first_name()),
        "Your assigned tasks",
    );

    ui.horizontal_wrapped(|ui| {
        widgets::stat_card(ui, "Total Tasks", summary.total(), "assigned to you");
        widgets::stat_card(ui, "Completed", summary.completed, "delivered");
        widgets::stat_card(ui, "In Progress", summary.in_progress, "underway");
        widgets::stat_card(ui, "Overdue", summary.overdue, "past due date");
    });

    ui.add_space(8.0);
    ui.separator();

    if summary.tasks.is_empty() {
        ui.label(RichText::new("No tasks assigned.").color(theme::TEXT_DIM));
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for assigned in &summary.tasks {
                let task = &assigned.task;
                let status = task.status();
                let overdue = task.is_overdue_at(now);
                let is_editing = editing == Some(task.id);

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&task.title).strong().color(theme::TEXT_PRIMARY));
                        ui.label(
                            RichText::new(status.label())
                                .size(11.0)
                                .color(theme::status_color(status)),
                        );
                        if overdue {
                            ui.label(RichText::new("Overdue").size(11.0).color(theme::OVERDUE));
                        }
                    });
                    ui.label(
                        RichText::new(format!(
                            "{} › {}",
                            assigned.project_name, assigned.milestone_title
                        ))
                        .size(11.0)
                        .color(theme::TEXT_SECONDARY),
                    );
                    if !task.description.is_empty() {
                        ui.label(RichText::new(&task.description).size(11.0).color(theme::TEXT_DIM));
                    }
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Due {}", task.due_date.format("%b %d, %Y")))
                                .size(11.0)
                                .color(if overdue { theme::OVERDUE } else { theme::TEXT_DIM }),
                        );
                        widgets::progress_bar(ui, task.progress);
                    });

                    ui.horizontal(|ui| {
                        let mut checked = task.is_complete();
                        let checkbox = egui::Checkbox::new(&mut checked, "Mark as Complete");
                        if ui.add_enabled(!is_editing, checkbox).changed() {
                            action = DeveloperAction::ToggleComplete(task.id, checked);
                        }

                        if is_editing {
                            if ui.button("Save Changes").clicked() {
                                action = DeveloperAction::FinishEditing;
                            }
                        } else if ui
                            .add_enabled(!task.is_complete(), egui::Button::new("Adjust Progress"))
                            .clicked()
                        {
                            action = DeveloperAction::BeginEditing(task.id);
                        }
                    });

                    if is_editing {
                        let mut value = task.progress;
                        let slider = egui::Slider::new(&mut value, 0..=100)
                            .step_by(5.0)
                            .suffix("%")
                            .text("Update Progress");
                        if ui.add(slider).changed() {
                            action = DeveloperAction::SetProgress(task.id, value);
                        }
                    }
                });
                ui.add_space(4.0);
            }
        });

    action
}
