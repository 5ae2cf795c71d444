use crate::app::PortfolioApp;
use crate::settings::Section;

impl PortfolioApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Escape closes the acknowledgment dialog
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.show_ack_dialog {
            self.show_ack_dialog = false;
            return;
        }

        // Leave the keyboard alone while a text edit has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let (num1, num2, num3) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::Num3),
            )
        });
        if num1 {
            self.go_to_section(Section::Home);
        }
        if num2 {
            self.go_to_section(Section::Projects);
        }
        if num3 {
            self.go_to_section(Section::Contact);
        }

        // Arrow navigation mirrors the hero arrows
        if self.section == Section::Home {
            let (left, right, space) = ctx.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                    i.key_pressed(egui::Key::Space),
                )
            });
            if let Some(slider) = &mut self.slider {
                if left {
                    slider.prev();
                }
                if right {
                    slider.next();
                }
            }
            if space {
                self.settings.autoplay_enabled = !self.settings.autoplay_enabled;
            }
        }
    }
}
