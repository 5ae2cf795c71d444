use crate::app::PortfolioApp;

use egui::{self, Color32, RichText, Vec2};

impl PortfolioApp {
    pub fn render_contact(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("Contact");
            ui.add_space(8.0);
            ui.label(
                RichText::new("Both fields are optional; blank entries are recorded as such.")
                    .color(Color32::GRAY),
            );
            ui.add_space(12.0);

            ui.label("Email:");
            ui.add(
                egui::TextEdit::singleline(&mut self.contact_form.email)
                    .hint_text("you@example.com")
                    .desired_width(360.0),
            );
            ui.add_space(8.0);

            ui.label("Message:");
            ui.add(
                egui::TextEdit::multiline(&mut self.contact_form.message)
                    .hint_text("Say hello")
                    .desired_rows(6)
                    .desired_width(360.0),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let send_clicked = ui.button("Send").clicked();
                if self.contact_form.is_empty() {
                    ui.label(
                        RichText::new("empty submission is fine too")
                            .color(Color32::DARK_GRAY)
                            .size(11.0),
                    );
                }
                let send_shortcut =
                    ui.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Enter));
                if send_clicked || send_shortcut {
                    self.submit_contact_form();
                }
            });
        });
    }

    pub fn render_ack_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_ack_dialog {
            return;
        }

        egui::Window::new("Message sent")
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Thank you for your message! Your information has been submitted.");
                if let Some(submission) = &self.last_submission {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("From: {}", submission.email))
                            .color(Color32::GRAY)
                            .size(11.0),
                    );
                }
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.show_ack_dialog = false;
                }
            });
    }
}
