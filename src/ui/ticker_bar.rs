use crate::app::PortfolioApp;

use egui::{self, Color32, FontId, Margin, Pos2, RichText, Sense, Vec2};

const TICKER_HEIGHT: f32 = 26.0;
const TICKER_FONT_SIZE: f32 = 16.0;

impl PortfolioApp {
    pub fn render_projects(&mut self, ctx: &egui::Context) {
        // Bottom panel first so the central content gets the remaining space
        self.render_ticker_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("Projects");
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "A selection of design and interaction work. \
                     More pieces are added as they ship.",
                )
                .color(Color32::GRAY),
            );
        });
    }

    /// The marquee strip. Widths come from the laid-out galley and the
    /// panel rect; the ticker core decides the offset.
    pub fn render_ticker_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("ticker_bar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(0, 4)),
            )
            .show(ctx, |ui| {
                let width = ui.available_width();
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(width, TICKER_HEIGHT), Sense::hover());

                let text = self.ticker.texts().join("   \u{2022}   ");
                let galley = ui.painter().layout_no_wrap(
                    text,
                    FontId::proportional(TICKER_FONT_SIZE),
                    Color32::from_rgb(200, 200, 210),
                );
                let content_width = galley.size().x;

                self.ticker.set_speed(self.settings.ticker_speed);
                let painted_offset = match self.ticker.advance(rect.width(), content_width) {
                    Some(offset) => {
                        // Keep the frame loop alive while the marquee moves
                        ctx.request_repaint();
                        Some(offset)
                    }
                    // Stopped: paint the run where it last was
                    None => self.ticker.offset(),
                };
                if let Some(offset) = painted_offset {
                    let pos = Pos2::new(
                        rect.left() + offset,
                        rect.center().y - galley.size().y / 2.0,
                    );
                    ui.painter_at(rect)
                        .galley(pos, galley, Color32::from_rgb(200, 200, 210));
                }
            });
    }
}
