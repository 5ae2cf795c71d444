use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // Appearance
    pub theme: Theme,

    // Hero slider
    pub slide_interval_secs: f32,
    pub autoplay_enabled: bool,

    // Project ticker
    pub ticker_speed: f32,

    // Panels
    pub show_statusbar: bool,

    // Window state
    pub window_size: (f32, f32),

    // Session
    pub last_section: Section,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,

            // The original page advanced every 2 seconds and scrolled the
            // ticker 1.5 px per frame
            slide_interval_secs: 2.0,
            autoplay_enabled: true,
            ticker_speed: 1.5,

            show_statusbar: true,

            window_size: (1100.0, 720.0),

            last_section: Section::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    Oled,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Oled => "OLED",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::Oled]
    }
}

/// The portfolio's page sections. The ticker only runs on Projects, the
/// form only on Contact, matching the original page split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Home,
    Projects,
    Contact,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn all() -> &'static [Section] {
        &[Section::Home, Section::Projects, Section::Contact]
    }
}

impl Settings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "folio", "Folio")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(settings) => return settings,
                    Err(e) => {
                        log::warn!("settings file unreadable, using defaults: {}", e);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                log::warn!("failed to save settings: {}", e);
            }
        }
    }

    pub fn load_from(path: &std::path::Path) -> crate::errors::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::errors::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
