use egui::Color32;

use project_dashboard::model::{Role, TaskStatus};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const OVERDUE: Color32 = Color32::from_rgb(239, 68, 68);
pub const DELIVERED: Color32 = Color32::from_rgb(16, 185, 129);
pub const IN_PROGRESS: Color32 = Color32::from_rgb(59, 130, 246);
pub const ALMOST_DONE: Color32 = Color32::from_rgb(245, 158, 11);
pub const NOT_STARTED: Color32 = Color32::from_rgb(107, 114, 128);

pub const BG_CARD: Color32 = Color32::from_rgb(34, 37, 48);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const CARD_WIDTH: f32 = 150.0;
pub const DIALOG_WIDTH: f32 = 340.0;
pub const PROGRESS_WIDTH: f32 = 180.0;

pub fn role_color(role: Role) -> Color32 {
    match role {
        Role::Developer => IN_PROGRESS,
        Role::ProjectManager => DELIVERED,
        Role::Executive => Color32::from_rgb(168, 85, 247),
    }
}

pub fn status_color(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::NotStarted => NOT_STARTED,
        TaskStatus::InProgress => IN_PROGRESS,
        TaskStatus::AlmostDone => ALMOST_DONE,
        TaskStatus::Delivered => DELIVERED,
    }
}

/// Progress bar fill for an aggregate percentage.
pub fn progress_color(progress: u8) -> Color32 {
    status_color(TaskStatus::from_progress(progress))
}
