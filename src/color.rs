use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::content::model::Topic;

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// `n` visually distinct colours with evenly spaced hues, as RGB bytes.
pub fn palette_rgb(n: usize) -> Vec<[u8; 3]> {
    (0..n)
        .map(|i| hue_to_rgb(i as f32 / n as f32 * 360.0, 0.65, 0.5))
        .collect()
}

/// Same as [`palette_rgb`] for egui widgets and plots.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    palette_rgb(n)
        .into_iter()
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .collect()
}

fn hue_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    [
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

// ---------------------------------------------------------------------------
// Topic accents
// ---------------------------------------------------------------------------

/// Accent colour of a topic: headings, nav highlight, main chart series.
pub fn topic_accent_rgb(topic: Topic) -> [u8; 3] {
    let idx = Topic::ALL.iter().position(|t| *t == topic).unwrap_or(0);
    palette_rgb(Topic::ALL.len())[idx]
}

pub fn topic_accent(topic: Topic) -> Color32 {
    let [r, g, b] = topic_accent_rgb(topic);
    Color32::from_rgb(r, g, b)
}

pub const CORRECT: Color32 = Color32::from_rgb(46, 139, 87);
pub const INCORRECT: Color32 = Color32::from_rgb(200, 60, 60);
pub const MUTED: Color32 = Color32::from_rgb(128, 128, 128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sizes_and_distinct() {
        assert!(palette_rgb(0).is_empty());
        let p = palette_rgb(4);
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
    }

    #[test]
    fn test_topic_accents_differ() {
        assert_ne!(
            topic_accent(Topic::CentralTendency),
            topic_accent(Topic::Dashboard)
        );
    }
}
