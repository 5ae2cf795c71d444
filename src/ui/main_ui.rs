use crate::app::PortfolioApp;
use crate::settings::Section;

use egui::{Color32, Margin, RichText};

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_keyboard(ctx);

        // Advance the hero autoplay timer
        self.update_autoplay(ctx);

        // Apply theme
        crate::ui::theme::apply_theme(ctx, &self.settings);

        // Remember the window size for the next launch
        let size = ctx.input(|i| i.screen_rect().size());
        self.settings.window_size = (size.x, size.y);

        self.render_nav_bar(ctx);
        if self.settings.show_statusbar {
            self.render_statusbar(ctx);
        }

        self.render_ack_dialog(ctx);

        match self.section {
            Section::Home => self.render_hero(ctx),
            Section::Projects => self.render_projects(ctx),
            Section::Contact => self.render_contact(ctx),
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}

impl PortfolioApp {
    /// Per-frame autoplay step for the hero slider. Only runs while the
    /// Home section is visible; hover pause is wired up in `render_hero`.
    pub fn update_autoplay(&mut self, ctx: &egui::Context) {
        if self.section != Section::Home || !self.settings.autoplay_enabled {
            return;
        }
        if let Some(slider) = &mut self.slider {
            let dt = ctx.input(|i| i.stable_dt);
            slider.set_interval_secs(self.settings.slide_interval_secs);
            slider.tick(dt);
            if slider.is_autoplaying() {
                ctx.request_repaint();
            }
        }
    }

    fn render_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(28, 28, 32))
                    .inner_margin(Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("folio")
                            .color(Color32::WHITE)
                            .size(16.0)
                            .strong(),
                    );
                    ui.add_space(16.0);

                    let mut target = None;
                    for section in Section::all() {
                        if ui
                            .selectable_label(self.section == *section, section.name())
                            .clicked()
                        {
                            target = Some(*section);
                        }
                    }
                    if let Some(section) = target {
                        self.go_to_section(section);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button("View", |ui| {
                            ui.label(RichText::new("Theme").small().color(Color32::GRAY));
                            for theme in crate::settings::Theme::all() {
                                ui.radio_value(&mut self.settings.theme, *theme, theme.name());
                            }
                            ui.separator();
                            ui.checkbox(&mut self.settings.autoplay_enabled, "Autoplay slides");
                            ui.add(
                                egui::Slider::new(
                                    &mut self.settings.slide_interval_secs,
                                    1.0..=10.0,
                                )
                                .suffix(" s")
                                .text("Interval"),
                            );
                            ui.add(
                                egui::Slider::new(&mut self.settings.ticker_speed, 0.5..=5.0)
                                    .text("Ticker speed"),
                            );
                            ui.separator();
                            ui.checkbox(&mut self.settings.show_statusbar, "Status bar");
                        });
                    });
                });
            });
    }
}
