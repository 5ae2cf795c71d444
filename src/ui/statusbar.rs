use crate::app::PortfolioApp;
use crate::settings::Section;

use egui::{self, Color32, Margin, RichText};

impl PortfolioApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.section.name())
                            .color(Color32::WHITE)
                            .size(12.0),
                    );

                    if self.section == Section::Home {
                        if let Some(slider) = &self.slider {
                            ui.label(
                                RichText::new(format!(
                                    "{} / {}",
                                    slider.current_index() + 1,
                                    slider.len()
                                ))
                                .color(Color32::GRAY)
                                .size(11.0),
                            );

                            if slider.is_hovered() || !self.settings.autoplay_enabled {
                                ui.label(
                                    RichText::new("[Paused]")
                                        .color(Color32::from_rgb(255, 200, 100))
                                        .size(11.0),
                                );
                            }
                        }
                    }

                    if self.section == Section::Projects && self.ticker.is_running() {
                        ui.label(RichText::new("ticker").color(Color32::GRAY).size(11.0));
                    }

                    // Spacer
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Status message
                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed().as_secs() < 3 {
                                ui.label(
                                    RichText::new(msg)
                                        .color(Color32::from_rgb(100, 200, 100))
                                        .size(11.0),
                                );
                            }
                        }

                        ui.label(
                            RichText::new(self.settings.theme.name())
                                .color(Color32::GRAY)
                                .size(11.0),
                        );
                    });
                });
            });
    }
}
