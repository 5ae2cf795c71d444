/// Marquee ticker state: a list of text fragments scrolled leftward by a
/// fixed per-frame speed, wrapping back to the container's right edge once
/// the whole run has scrolled off. Pure state machine; layout measurement
/// and painting live in `ui::ticker_bar`.
pub struct LoopTicker {
    texts: Vec<String>,
    speed: f32,
    offset: Option<f32>,
    running: bool,
}

impl LoopTicker {
    pub fn new(texts: Vec<String>, speed: f32) -> Self {
        Self {
            texts,
            speed,
            // Seeded from the container width on the first advance, once
            // the layout pass has measured it.
            offset: None,
            running: false,
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Current left offset relative to the container, if placed.
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Idempotent. The hosting section calls this when it becomes visible.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Idempotent teardown: the frame loop halts instead of animating a
    /// container that is no longer on screen.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// One frame step. `container_width` is the visible width of the
    /// ticker's parent, `content_width` the laid-out width of the full text
    /// run. Returns the offset to paint at, or `None` while stopped.
    pub fn advance(&mut self, container_width: f32, content_width: f32) -> Option<f32> {
        if !self.running {
            return None;
        }
        let mut offset = self.offset.unwrap_or(container_width);
        offset -= self.speed;
        // Fully scrolled past the left edge: wrap to the right edge
        if offset < -content_width {
            offset = container_width;
        }
        self.offset = Some(offset);
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<String> {
        vec![
            "First sentence".to_string(),
            "Second sentence".to_string(),
        ]
    }

    #[test]
    fn test_first_advance_seeds_from_container_width() {
        let mut ticker = LoopTicker::new(sentences(), 1.5);
        ticker.start();
        let offset = ticker.advance(800.0, 1200.0).unwrap();
        assert_eq!(offset, 800.0 - 1.5);
    }

    #[test]
    fn test_offset_strictly_decreases_by_speed() {
        let mut ticker = LoopTicker::new(sentences(), 2.0);
        ticker.start();
        let mut last = ticker.advance(800.0, 1200.0).unwrap();
        for _ in 0..100 {
            let next = ticker.advance(800.0, 1200.0).unwrap();
            assert_eq!(next, last - 2.0);
            last = next;
        }
    }

    #[test]
    fn test_wraps_to_container_width() {
        let mut ticker = LoopTicker::new(sentences(), 50.0);
        ticker.start();
        let mut wrapped = false;
        let mut last = ticker.advance(100.0, 300.0).unwrap();
        for _ in 0..20 {
            let next = ticker.advance(100.0, 300.0).unwrap();
            if next > last {
                // The wrap resets to the container width, never negative
                assert_eq!(next, 100.0);
                wrapped = true;
                break;
            }
            assert!(next >= -300.0 - 50.0);
            last = next;
        }
        assert!(wrapped);
    }

    #[test]
    fn test_stopped_ticker_does_not_move() {
        let mut ticker = LoopTicker::new(sentences(), 1.5);
        assert!(ticker.advance(800.0, 1200.0).is_none());

        ticker.start();
        let offset = ticker.advance(800.0, 1200.0).unwrap();
        ticker.stop();
        assert!(ticker.advance(800.0, 1200.0).is_none());
        assert_eq!(ticker.offset(), Some(offset));

        // Restart resumes from where it paused
        ticker.start();
        assert_eq!(ticker.advance(800.0, 1200.0), Some(offset - 1.5));
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut ticker = LoopTicker::new(sentences(), 1.5);
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
        ticker.start();
        ticker.start();
        assert!(ticker.is_running());
    }
}
