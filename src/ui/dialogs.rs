use std::time::{Duration, Instant};

use egui::{Color32, Context, RichText, Window};

use crate::app::DashboardApp;
use crate::ui::theme;

/// Submit button text while a draft waits out its delay.
fn creating_label(title: &str, remaining: Duration) -> String {
    format!("Creating \"{}\"... {:.1}s", title.trim(), remaining.as_secs_f32())
}

/// Render the "Create New Task" dialog.
pub fn show_add_task_dialog(app: &mut DashboardApp, ctx: &Context) {
    let mut should_close = false;
    let mut should_submit = false;
    let pending = app.session.task_form.is_pending();
    let creating = app
        .session
        .task_form
        .pending()
        .map(|p| creating_label(&p.draft().title, p.remaining(Instant::now())));
    let milestones: Vec<(u32, String)> = app
        .session
        .board()
        .projects
        .iter()
        .flat_map(|p| {
            p.milestones
                .iter()
                .map(move |m| (m.id.0, format!("{} › {}", p.name, m.title)))
        })
        .collect();
    let developers: Vec<(u32, String)> = app
        .session
        .board()
        .developers()
        .map(|u| (u.id.0, u.name.clone()))
        .collect();

    Window::new(RichText::new("Create New Task").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            let dialog = &mut app.task_dialog;
            ui.add_enabled_ui(!pending, |ui| {
                egui::Grid::new("add_task_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Title *").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui::TextEdit::singleline(&mut dialog.draft.title)
                                .hint_text("Enter task title"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Description").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui::TextEdit::multiline(&mut dialog.draft.description)
                                .desired_rows(3)
                                .hint_text("Enter task description"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Milestone").color(theme::TEXT_SECONDARY));
                        let selected = milestones
                            .iter()
                            .find(|(id, _)| *id == dialog.draft.milestone_id.0)
                            .map(|(_, name)| name.as_str())
                            .unwrap_or("Select milestone");
                        egui::ComboBox::from_id_salt("task_milestone")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                for (id, name) in &milestones {
                                    ui.selectable_value(&mut dialog.draft.milestone_id.0, *id, name);
                                }
                            });
                        ui.end_row();

                        ui.label(RichText::new("Assign To *").color(theme::TEXT_SECONDARY));
                        let selected = dialog
                            .draft
                            .assigned_to
                            .and_then(|a| developers.iter().find(|(id, _)| *id == a.0))
                            .map(|(_, name)| name.as_str())
                            .unwrap_or("Select developer");
                        egui::ComboBox::from_id_salt("task_assignee")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                for (id, name) in &developers {
                                    let user = Some(project_dashboard::model::UserId(*id));
                                    ui.selectable_value(&mut dialog.draft.assigned_to, user, name);
                                }
                            });
                        ui.end_row();

                        ui.label(RichText::new("Due Date *").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut dialog.due_picker)
                                .id_salt("task_due"),
                        );
                        ui.end_row();
                    });
            });

            ui.add_space(6.0);
            ui.separator();
            ui.horizontal(|ui| {
                let label = creating.as_deref().unwrap_or("Create Task");
                let create_btn = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(theme::ACCENT);
                if ui.add_enabled(!pending, create_btn).clicked() {
                    should_submit = true;
                }
                if ui.add_enabled(!pending, egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
        });

    if should_submit {
        app.submit_task_dialog();
    }
    if !pending && (should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape))) {
        app.session.task_form.open = false;
    }
}

/// Render the "Create New Milestone" dialog.
pub fn show_add_milestone_dialog(app: &mut DashboardApp, ctx: &Context) {
    let mut should_close = false;
    let mut should_submit = false;
    let pending = app.session.milestone_form.is_pending();
    let creating = app
        .session
        .milestone_form
        .pending()
        .map(|p| creating_label(&p.draft().title, p.remaining(Instant::now())));
    let projects: Vec<(u32, String)> = app
        .session
        .board()
        .projects
        .iter()
        .map(|p| (p.id.0, p.name.clone()))
        .collect();

    Window::new(RichText::new("Create New Milestone").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            let dialog = &mut app.milestone_dialog;
            ui.add_enabled_ui(!pending, |ui| {
                egui::Grid::new("add_milestone_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Title *").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui::TextEdit::singleline(&mut dialog.draft.title)
                                .hint_text("Enter milestone title"),
                        );
                        ui.end_row();

                        ui.label(RichText::new("Project").color(theme::TEXT_SECONDARY));
                        let selected = projects
                            .iter()
                            .find(|(id, _)| *id == dialog.draft.project_id.0)
                            .map(|(_, name)| name.as_str())
                            .unwrap_or("Select project");
                        egui::ComboBox::from_id_salt("milestone_project")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                for (id, name) in &projects {
                                    ui.selectable_value(&mut dialog.draft.project_id.0, *id, name);
                                }
                            });
                        ui.end_row();

                        ui.label(RichText::new("Due Date *").color(theme::TEXT_SECONDARY));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut dialog.due_picker)
                                .id_salt("milestone_due"),
                        );
                        ui.end_row();
                    });
            });

            ui.add_space(6.0);
            ui.separator();
            ui.horizontal(|ui| {
                let label = creating.as_deref().unwrap_or("Create Milestone");
                let create_btn = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(theme::ACCENT);
                if ui.add_enabled(!pending, create_btn).clicked() {
                    should_submit = true;
                }
                if ui.add_enabled(!pending, egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
        });

    if should_submit {
        app.submit_milestone_dialog();
    }
    if !pending && (should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape))) {
        app.session.milestone_form.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_label_counts_down() {
        assert_eq!(
            creating_label("Write docs ", Duration::from_millis(1200)),
            "Creating \"Write docs\"... 1.2s"
        );
        assert_eq!(
            creating_label("Beta", Duration::ZERO),
            "Creating \"Beta\"... 0.0s"
        );
    }
}
