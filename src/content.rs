//! Compiled-in portfolio copy: the hero slide deck and the project-page
//! ticker sentences.

use crate::slider::Slide;

use egui::Color32;
use std::path::{Path, PathBuf};

/// The hero slide deck, in display order.
pub fn slide_deck() -> Vec<Slide> {
    vec![
        Slide::new(
            Some("back.png"),
            "Qi\u{2019}s Portfolio",
            "Exploring creativity through design, interaction, and storytelling.",
            Color32::from_rgba_unmultiplied(44, 82, 130, 178),
        ),
        Slide::new(
            Some("back1.png"),
            "Qi\u{2019}s Creative Space",
            "Turning inspiration into tangible design experiences.",
            Color32::from_rgba_unmultiplied(68, 93, 133, 178),
        ),
        Slide::new(
            Some("back2.png"),
            "Focus on Emotion and User Experience",
            "Designing meaningful interactions that connect people.",
            Color32::from_rgba_unmultiplied(90, 70, 120, 178),
        ),
        Slide::new(
            Some("back3.png"),
            "Qi\u{2019}s Design Lab",
            "Exploring challenges through creativity and problem solving.",
            Color32::from_rgba_unmultiplied(115, 60, 135, 178),
        ),
        Slide::new(
            Some("back4.png"),
            "Focus on Women\u{2019}s Development",
            "Empowering stories and designing for equality.",
            Color32::from_rgba_unmultiplied(40, 100, 70, 178),
        ),
    ]
}

/// Sentences scrolled by the project-page ticker.
pub fn ticker_sentences() -> Vec<String> {
    [
        "Design meets interaction \u{2014} exploring creative technology.",
        "Bringing ideas to life with code and imagination.",
        "Always learning, always creating.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Resolve a slide asset against the `assets/` directory next to the
/// executable, falling back to the working directory during development.
pub fn resolve_asset(name: &Path) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("assets").join(name));
        }
    }
    candidates.push(PathBuf::from("assets").join(name));

    candidates.into_iter().find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_five_slides_with_copy() {
        let deck = slide_deck();
        assert_eq!(deck.len(), 5);
        for slide in &deck {
            assert!(!slide.title.is_empty());
            assert!(!slide.subtitle.is_empty());
            assert!(slide.image.is_some());
        }
    }

    #[test]
    fn test_ticker_copy_keeps_original_punctuation() {
        let sentences = ticker_sentences();
        assert_eq!(
            sentences[0],
            "Design meets interaction \u{2014} exploring creative technology."
        );
    }

    #[test]
    fn test_missing_asset_resolves_to_none() {
        assert!(resolve_asset(Path::new("does-not-exist.png")).is_none());
    }
}
