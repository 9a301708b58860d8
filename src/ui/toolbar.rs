use egui::{menu, RichText, Ui};

use project_dashboard::model::{Role, UserId};

use crate::app::DashboardApp;
use crate::ui::theme;

/// Render the top menu bar with the role and user selectors.
pub fn show_toolbar(app: &mut DashboardApp, ui: &mut Ui) {
    let mut new_role: Option<Role> = None;
    let mut new_user: Option<UserId> = None;

    menu::bar(ui, |ui| {
        ui.menu_button("  File  ", |ui| {
            if ui.button("  Open Snapshot...").clicked() {
                app.open_board();
                ui.close_menu();
            }
            if ui.button("  Save Snapshot...").clicked() {
                app.save_board();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Reset Sample Data").clicked() {
                app.reset_board();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(RichText::new("Role:").color(theme::TEXT_SECONDARY));
        let mut role = app.session.role();
        egui::ComboBox::from_id_salt("role_selector")
            .selected_text(role.label())
            .show_ui(ui, |ui| {
                for r in Role::ALL {
                    ui.selectable_value(&mut role, r, RichText::new(r.label()).color(theme::role_color(r)));
                }
            });
        if role != app.session.role() {
            new_role = Some(role);
        }

        let users: Vec<(UserId, String)> = app
            .session
            .board()
            .users_with_role(app.session.role())
            .map(|u| (u.id, u.name.clone()))
            .collect();
        if users.len() > 1 {
            let mut current = app.session.current_user().map(|u| u.id);
            let selected = app
                .session
                .current_user()
                .map(|u| u.name.clone())
                .unwrap_or_default();
            egui::ComboBox::from_id_salt("user_selector")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (id, name) in &users {
                        ui.selectable_value(&mut current, Some(*id), name);
                    }
                });
            if current != app.session.current_user().map(|u| u.id) {
                new_user = current;
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(user) = app.session.current_user() {
                ui.label(
                    RichText::new(user.initials())
                        .strong()
                        .color(theme::role_color(app.session.role())),
                );
                ui.label(
                    RichText::new(format!("{} · {}", user.name, app.session.role()))
                        .size(11.0)
                        .weak(),
                );
            }
        });
    });

    if let Some(role) = new_role {
        app.change_role(role);
    }
    if let Some(user) = new_user {
        app.select_user(user);
    }
}
