use crate::errors::{PortfolioError, Result};

use egui::Color32;
use std::path::PathBuf;

/// One hero slide: background asset, heading copy and the overlay tint
/// painted behind the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Background image, resolved relative to the assets directory.
    /// `None` (or a missing file) falls back to the overlay color.
    pub image: Option<PathBuf>,
    pub title: String,
    pub subtitle: String,
    pub color: Color32,
}

impl Slide {
    pub fn new(
        image: Option<&str>,
        title: &str,
        subtitle: &str,
        color: Color32,
    ) -> Self {
        Self {
            image: image.map(PathBuf::from),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            color,
        }
    }
}

/// The slider's owned timer. Navigation and hover cancel and restart it;
/// stopping an already-stopped timer is a no-op.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval_secs: f32,
    elapsed: f32,
    running: bool,
}

impl AutoplayTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_interval_secs(&mut self, interval_secs: f32) {
        self.interval_secs = interval_secs;
    }

    /// Accumulate frame time. Returns true once per elapsed interval.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval_secs {
            self.elapsed = 0.0;
            return true;
        }
        false
    }
}

/// Hero slider state: an ordered slide deck, the active index and the
/// autoplay timer. Pure state machine; the egui binding lives in `ui::hero`.
#[derive(Debug)]
pub struct Slider {
    slides: Vec<Slide>,
    current: usize,
    autoplay: AutoplayTimer,
    hovered: bool,
}

impl Slider {
    /// An empty deck would make the wrap arithmetic divide by zero, so it
    /// is rejected up front instead of guarded at every call site.
    pub fn new(slides: Vec<Slide>, interval_secs: f32) -> Result<Self> {
        if slides.is_empty() {
            return Err(PortfolioError::EmptySlideDeck);
        }
        let mut autoplay = AutoplayTimer::new(interval_secs);
        autoplay.start();
        Ok(Self {
            slides,
            current: 0,
            autoplay,
            hovered: false,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_interval_secs(&mut self, interval_secs: f32) {
        self.autoplay.set_interval_secs(interval_secs);
    }

    /// Jump to a specific slide. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// Advance to the next slide, wrapping, and restart autoplay so the
    /// next automatic step happens a full interval from now.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        self.restart_autoplay();
    }

    /// Retreat to the previous slide, wrapping at index zero.
    pub fn prev(&mut self) {
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.restart_autoplay();
    }

    /// Hover pause: entering the slider stops the timer, leaving restarts
    /// it. Repeated events in the same state are no-ops.
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.autoplay.stop();
        } else {
            self.autoplay.start();
        }
    }

    /// Per-frame autoplay step. Returns true when the active slide changed
    /// so the caller can request a repaint.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.autoplay.tick(dt) {
            self.current = (self.current + 1) % self.slides.len();
            return true;
        }
        false
    }

    fn restart_autoplay(&mut self) {
        self.autoplay.stop();
        if !self.hovered {
            self.autoplay.start();
        }
    }
}
