use chrono::{DateTime, Utc};
use egui::{RichText, Ui};

use project_dashboard::model::view::ExecutiveView;

use crate::ui::{theme, widgets};

/// Read-only portfolio summary.
pub fn show_executive_dashboard(view: &ExecutiveView<'_>, now: DateTime<Utc>, ui: &mut Ui) {
    let metrics = view.metrics(now);

    widgets::section_heading(ui, "Executive Summary", "Portfolio health at a glance");

    ui.horizontal_wrapped(|ui| {
        widgets::stat_card(
            ui,
            "Average Progress",
            format!("{}%", metrics.average_project_progress),
            &format!("across {} projects", metrics.total_projects),
        );
        widgets::stat_card(
            ui,
            "Milestone Delivery",
            format!("{}%", metrics.milestone_delivery_rate),
            &format!(
                "{} of {} delivered",
                metrics.delivered_milestones, metrics.total_milestones
            ),
        );
        widgets::stat_card(
            ui,
            "Task Completion",
            format!("{}%", metrics.task_completion_rate),
            &format!("{} of {} tasks", metrics.completed_tasks, metrics.total_tasks),
        );
        widgets::stat_card(ui, "Overdue Tasks", metrics.overdue_tasks, "need attention");
    });

    ui.add_space(8.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            widgets::section_heading(ui, "Status Breakdown", "");
            let tasks = metrics.task_breakdown();
            let milestones = metrics.milestone_breakdown();
            egui::Grid::new("status_breakdown")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    breakdown_row(ui, "Completed tasks", tasks.completed, theme::DELIVERED);
                    breakdown_row(ui, "In progress tasks", tasks.in_progress, theme::IN_PROGRESS);
                    breakdown_row(ui, "Overdue tasks", tasks.overdue, theme::OVERDUE);
                    breakdown_row(ui, "Delivered milestones", milestones.delivered, theme::DELIVERED);
                    breakdown_row(
                        ui,
                        "Milestones in progress",
                        milestones.in_progress,
                        theme::ALMOST_DONE,
                    );
                });

            widgets::section_heading(ui, "Projects", "");
            egui::Grid::new("project_summaries")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in ["PROJECT", "PROGRESS", "MILESTONES", "TASKS", "OVERDUE"] {
                        ui.label(RichText::new(header).size(10.0).strong().color(theme::TEXT_DIM));
                    }
                    ui.end_row();
                    for summary in view.project_summaries(now) {
                        ui.label(RichText::new(&summary.name).color(theme::TEXT_PRIMARY));
                        widgets::progress_bar(ui, summary.progress);
                        ui.label(format!("{}/{}", summary.delivered_milestones, summary.milestones));
                        ui.label(format!("{}/{}", summary.completed_tasks, summary.tasks));
                        ui.label(
                            RichText::new(summary.overdue_tasks.to_string()).color(
                                if summary.overdue_tasks > 0 {
                                    theme::OVERDUE
                                } else {
                                    theme::TEXT_SECONDARY
                                },
                            ),
                        );
                        ui.end_row();
                    }
                });

            widgets::section_heading(ui, "Team Performance", "Completion rate per developer");
            egui::Grid::new("team_performance")
                .num_columns(3)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for member in view.team_performance() {
                        ui.label(RichText::new(&member.first_name).color(theme::TEXT_PRIMARY));
                        widgets::progress_bar(ui, member.completion_rate);
                        ui.label(
                            RichText::new(format!(
                                "{}/{} tasks",
                                member.completed_tasks, member.total_tasks
                            ))
                            .color(theme::TEXT_SECONDARY),
                        );
                        ui.end_row();
                    }
                });
        });
}

fn breakdown_row(ui: &mut Ui, label: &str, value: usize, color: egui::Color32) {
    ui.label(RichText::new(label).color(theme::TEXT_SECONDARY));
    ui.label(RichText::new(value.to_string()).strong().color(color));
    ui.end_row();
}
