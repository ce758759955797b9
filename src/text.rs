//! Text measurement for legend layout.
//!
//! Maintains one process-wide `FontSystem` because creating it scans the
//! system font directories, which is far too expensive to repeat per call.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::geometry::Size;

const FONT_FAMILY: &str = "Arial";

struct TextMeasurer {
    font_system: Mutex<FontSystem>,
}

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculate the rendered size of a single line of text in pixels.
    fn calculate_text_size(&self, text: &str, font_size_px: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().unwrap();

        let line_height = font_size_px * 1.2;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(FONT_FAMILY));

        // Unlimited buffer size so the text flows as a single line.
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        } else {
            // No usable fonts on this system; fall back to a width estimate.
            max_width = text.len() as f32 * (font_size_px * 0.6);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

fn measurer() -> &'static TextMeasurer {
    static MEASURER: OnceLock<TextMeasurer> = OnceLock::new();
    MEASURER.get_or_init(TextMeasurer::new)
}

/// Measure the pixel size of `text` at the given font size.
pub fn measure_text(text: &str, font_size_px: f32) -> Size {
    measurer().calculate_text_size(text, font_size_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_size() {
        let size = measure_text("", 12.0);
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 0.0);
    }

    #[test]
    fn longer_text_is_wider() {
        let short = measure_text("AI", 12.0);
        let long = measure_text("AI System Components", 12.0);
        assert!(long.width() > short.width());
    }

    #[test]
    fn larger_font_is_taller() {
        let small = measure_text("Legend", 10.0);
        let large = measure_text("Legend", 20.0);
        assert!(large.height() > small.height());
    }
}
