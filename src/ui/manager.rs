use chrono::{DateTime, Utc};
use egui::{RichText, Ui};

use project_dashboard::model::metrics::milestone_progress;
use project_dashboard::model::view::ManagerView;

use crate::ui::{theme, widgets};

/// Intents the manager dashboard can emit.
pub enum ManagerAction {
    None,
    OpenTaskDialog,
    OpenMilestoneDialog,
}

pub fn show_manager_dashboard(
    view: &ManagerView<'_>,
    busy: bool,
    now: DateTime<Utc>,
    ui: &mut Ui,
) -> ManagerAction {
    let mut action = ManagerAction::None;
    let board = view.board();
    let stats = view.stats(now);

    ui.horizontal(|ui| {
        widgets::section_heading(ui, "Project Overview", "Milestones, tasks and assignments");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!busy, egui::Button::new("＋ New Task")).clicked() {
                action = ManagerAction::OpenTaskDialog;
            }
            if ui.add_enabled(!busy, egui::Button::new("＋ New Milestone")).clicked() {
                action = ManagerAction::OpenMilestoneDialog;
            }
        });
    });

    ui.horizontal_wrapped(|ui| {
        widgets::stat_card(
            ui,
            "Tasks",
            format!("{}/{}", stats.completed_tasks, stats.total_tasks),
            "completed",
        );
        widgets::stat_card(
            ui,
            "Milestones",
            format!("{}/{}", stats.completed_milestones, stats.total_milestones),
            "delivered",
        );
        widgets::stat_card(ui, "Overdue", stats.overdue_tasks, "tasks past due");
        widgets::stat_card(ui, "Projects", board.projects.len(), "active");
    });

    ui.add_space(8.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for summary in view.project_summaries(now) {
                let Some(project) = board.project(summary.id) else {
                    continue;
                };
                egui::CollapsingHeader::new(
                    RichText::new(&summary.name).strong().color(theme::TEXT_PRIMARY),
                )
                .id_salt(("project", summary.id.0))
                .default_open(true)
                .show(ui, |ui| {
                    ui.label(RichText::new(&project.description).size(11.0).color(theme::TEXT_DIM));
                    ui.horizontal(|ui| {
                        widgets::progress_bar(ui, summary.progress);
                        ui.label(
                            RichText::new(format!(
                                "{}/{} milestones delivered",
                                summary.delivered_milestones, summary.milestones
                            ))
                            .size(11.0)
                            .color(theme::TEXT_SECONDARY),
                        );
                    });

                    for milestone in &project.milestones {
                        ui.add_space(4.0);
                        let progress = milestone_progress(milestone);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&milestone.title).color(theme::TEXT_PRIMARY));
                            ui.label(
                                RichText::new(format!("due {}", milestone.due_date.format("%Y-%m-%d")))
                                    .size(11.0)
                                    .color(theme::TEXT_DIM),
                            );
                            widgets::progress_bar(ui, progress);
                        });

                        egui::Grid::new(("milestone_tasks", milestone.id.0))
                            .num_columns(4)
                            .striped(true)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                for task in &milestone.tasks {
                                    let assignee = board
                                        .user(task.assigned_to)
                                        .map(|u| u.name.as_str())
                                        .unwrap_or("Unassigned");
                                    let overdue = task.is_overdue_at(now);
                                    ui.label(&task.title);
                                    ui.label(RichText::new(assignee).color(theme::TEXT_SECONDARY));
                                    ui.label(
                                        RichText::new(task.due_date.format("%Y-%m-%d").to_string())
                                            .color(if overdue { theme::OVERDUE } else { theme::TEXT_DIM }),
                                    );
                                    widgets::progress_bar(ui, task.progress);
                                    ui.end_row();
                                }
                            });
                        if milestone.tasks.is_empty() {
                            ui.label(RichText::new("No tasks yet.").size(11.0).color(theme::TEXT_DIM));
                        }
                    }
                });
                ui.add_space(6.0);
            }
        });

    action
}
