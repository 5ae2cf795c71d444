use egui::Color32;

pub fn apply_theme(ctx: &egui::Context, settings: &crate::settings::Settings) {
    let visuals = match settings.theme {
        crate::settings::Theme::Dark => egui::Visuals::dark(),
        crate::settings::Theme::Light => egui::Visuals::light(),
        crate::settings::Theme::Oled => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::BLACK;
            visuals.window_fill = Color32::BLACK;
            visuals.extreme_bg_color = Color32::BLACK;
            visuals
        }
    };

    ctx.set_visuals(visuals);
}
