use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Cursor;

use anyhow::{Context, Result, bail};
use image::{ImageFormat, Rgb, RgbImage};

// ---------------------------------------------------------------------------
// Static chart rendering
// ---------------------------------------------------------------------------

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 360;
const MARGIN: u32 = 32;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([60, 60, 60]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);

/// A rasterized chart ready to embed in an `egui::Image` or save to disk.
#[derive(Debug, Clone)]
pub struct ChartImage {
    /// `bytes://chart/<slug>-<hash>.png`; distinct PNGs never share a URI.
    pub uri: String,
    pub png: Vec<u8>,
}

/// Lower-case ASCII identifier for file names and URIs.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_').to_string();
    if slug.is_empty() { "grafico".to_string() } else { slug }
}

/// Rasterize a bar chart of non-negative values with a light grid at
/// quarters of the maximum.
pub fn render_bar_chart(title: &str, values: &[f64], color: [u8; 3]) -> Result<ChartImage> {
    if values.is_empty() {
        bail!("nothing to plot for '{title}'");
    }
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        bail!("bar values for '{title}' must be finite and non-negative");
    }

    let mut img = RgbImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);
    let plot_w = CHART_WIDTH - 2 * MARGIN;
    let plot_h = CHART_HEIGHT - 2 * MARGIN;
    let baseline = CHART_HEIGHT - MARGIN;
    let max = values.iter().copied().fold(0.0_f64, f64::max);

    for q in 1..=4 {
        let y = baseline - plot_h * q / 4;
        fill_rect(&mut img, MARGIN, y, plot_w, 1, GRID);
    }

    let slot = plot_w as f64 / values.len() as f64;
    let bar_w = ((slot * 0.8) as u32).max(1);
    for (i, &v) in values.iter().enumerate() {
        let h = if max > 0.0 {
            (v / max * plot_h as f64).round() as u32
        } else {
            0
        };
        let x = MARGIN + (slot * i as f64 + (slot - bar_w as f64) / 2.0) as u32;
        fill_rect(&mut img, x, baseline - h, bar_w, h, Rgb(color));
    }

    fill_rect(&mut img, MARGIN, MARGIN, 1, plot_h + 1, AXIS);
    fill_rect(&mut img, MARGIN, baseline, plot_w, 1, AXIS);

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("encoding chart as PNG")?;

    let mut hasher = DefaultHasher::new();
    png.hash(&mut hasher);
    Ok(ChartImage {
        uri: format!("bytes://chart/{}-{:016x}.png", slugify(title), hasher.finish()),
        png,
    })
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Casos por día – Brote 2"), "casos_por_d_a_brote_2");
        assert_eq!(slugify("¿?"), "grafico");
    }

    #[test]
    fn test_renders_png() {
        let chart = render_bar_chart("Casos", &[1.0, 4.0, 2.0], [200, 80, 80]).unwrap();
        assert!(chart.uri.starts_with("bytes://chart/casos-"));
        assert!(chart.uri.ends_with(".png"));
        assert_eq!(&chart.png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&chart.png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (CHART_WIDTH, CHART_HEIGHT));
        // the tallest bar reaches the top of the plot area
        let mid_bar_x = MARGIN + (CHART_WIDTH - 2 * MARGIN) / 2;
        assert_eq!(*decoded.get_pixel(mid_bar_x, MARGIN + 1), Rgb([200, 80, 80]));
    }

    #[test]
    fn test_uri_follows_content() {
        let a = render_bar_chart("Casos", &[1.0, 4.0], [0, 0, 0]).unwrap();
        let same = render_bar_chart("Casos", &[1.0, 4.0], [0, 0, 0]).unwrap();
        let changed = render_bar_chart("Casos", &[4.0, 1.0], [0, 0, 0]).unwrap();
        assert_eq!(a.uri, same.uri);
        assert_ne!(a.uri, changed.uri);
    }

    #[test]
    fn test_all_zero_values() {
        assert!(render_bar_chart("vacío", &[0.0, 0.0], [0, 0, 0]).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(render_bar_chart("x", &[], [0, 0, 0]).is_err());
        assert!(render_bar_chart("x", &[1.0, -1.0], [0, 0, 0]).is_err());
        assert!(render_bar_chart("x", &[f64::NAN], [0, 0, 0]).is_err());
    }
}
