use crate::contact::{ContactForm, ContactSink, LogSink, Submission};
use crate::content;
use crate::settings::{Section, Settings};
use crate::slider::Slider;
use crate::ticker::LoopTicker;

use eframe::egui;

pub struct PortfolioApp {
    // Settings
    pub settings: Settings,

    // Page section routing
    pub section: Section,

    // Widgets. The slider is optional so an empty deck degrades to a page
    // without a hero instead of refusing to start.
    pub slider: Option<Slider>,
    pub ticker: LoopTicker,
    pub contact_form: ContactForm,
    pub contact_sink: Box<dyn ContactSink>,

    // Acknowledgment dialog after a submission
    pub show_ack_dialog: bool,
    pub last_submission: Option<Submission>,

    // Status message
    pub status_message: Option<(String, std::time::Instant)>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Loaders for the slide background images
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = Settings::load();

        let slider = match Slider::new(content::slide_deck(), settings.slide_interval_secs) {
            Ok(slider) => Some(slider),
            Err(e) => {
                log::error!("hero slider disabled: {}", e.user_message());
                None
            }
        };

        let mut ticker = LoopTicker::new(content::ticker_sentences(), settings.ticker_speed);

        let section = settings.last_section;
        if section == Section::Projects {
            ticker.start();
        }

        Self {
            settings,
            section,
            slider,
            ticker,
            contact_form: ContactForm::new(),
            contact_sink: Box::new(LogSink),
            show_ack_dialog: false,
            last_submission: None,
            status_message: None,
        }
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, std::time::Instant::now()));
    }

    /// Switch the visible section, starting and stopping the widgets that
    /// only live on one page.
    pub fn go_to_section(&mut self, section: Section) {
        if self.section == section {
            return;
        }
        tracing::debug!("switching section to {}", section.name());
        self.section = section;
        self.settings.last_section = section;
        match section {
            Section::Projects => self.ticker.start(),
            _ => self.ticker.stop(),
        }
    }

    /// Submit the contact form and surface the acknowledgment.
    pub fn submit_contact_form(&mut self) {
        let submission = self.contact_form.submit(self.contact_sink.as_mut());
        self.set_status_message(format!("Message from {} submitted", submission.email));
        self.last_submission = Some(submission);
        self.show_ack_dialog = true;
    }
}

fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.window_shadow = egui::epaint::Shadow::NONE;
    style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
    ctx.set_style(style);
}
