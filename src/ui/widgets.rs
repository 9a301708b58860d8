use egui::{RichText, Ui};

use crate::ui::theme;

/// A labelled number in a small framed card.
pub fn stat_card(ui: &mut Ui, label: &str, value: impl ToString, hint: &str) {
    egui::Frame::default()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(theme::CARD_WIDTH);
            ui.label(RichText::new(label).size(11.0).color(theme::TEXT_SECONDARY));
            ui.label(
                RichText::new(value.to_string())
                    .size(22.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            if !hint.is_empty() {
                ui.label(RichText::new(hint).size(10.0).color(theme::TEXT_DIM));
            }
        });
}

/// Horizontal progress bar showing `progress` percent.
pub fn progress_bar(ui: &mut Ui, progress: u8) {
    ui.add(
        egui::ProgressBar::new(f32::from(progress) / 100.0)
            .desired_width(theme::PROGRESS_WIDTH)
            .fill(theme::progress_color(progress))
            .text(format!("{progress}%")),
    );
}

pub fn section_heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).strong().size(16.0).color(theme::TEXT_PRIMARY));
    if !subtitle.is_empty() {
        ui.label(RichText::new(subtitle).size(11.0).color(theme::TEXT_DIM));
    }
    ui.add_space(4.0);
}
