use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed chart colors
// ---------------------------------------------------------------------------

/// Line and marker color of the daily rentals trend.
pub const DAILY_TREND: Color32 = Color32::from_rgb(0x90, 0xCA, 0xF9);

/// Bar fill for the season with the highest average.
pub const BAR_HIGHLIGHT: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Bar fill for the remaining seasons.
pub const BAR_MUTED: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for categorical series such as the working-day boxes.
pub fn category_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 20.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
