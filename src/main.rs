mod app;
mod contact;
mod content;
mod errors;
mod logging;
mod settings;
mod slider;
mod ticker;
mod ui;


use app::PortfolioApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    logging::init_tracing(cfg!(debug_assertions));

    let window_size = settings::Settings::load().window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_size.0, window_size.1])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        native_options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
    )
}

fn load_icon() -> egui::IconData {
    // Simple programmatic icon: a round badge fading from indigo to teal
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();

            if dist < size as f32 / 2.0 - 2.0 {
                let t = dist / (size as f32 / 2.0);
                rgba[idx] = (60.0 + 30.0 * (1.0 - t)) as u8;
                rgba[idx + 1] = (80.0 + 120.0 * t) as u8;
                rgba[idx + 2] = (160.0 + 60.0 * (1.0 - t)) as u8;
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
