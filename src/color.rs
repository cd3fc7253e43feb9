use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generators
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| hsl_to_color32((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

/// Diverging blue → red ramp for ordered categories (seasons, weather severity,
/// temperature buckets).
pub fn coolwarm(n: usize) -> Vec<Color32> {
    const COOL_HUE: f32 = 225.0;
    const WARM_HUE: f32 = 5.0;
    match n {
        0 => Vec::new(),
        1 => vec![hsl_to_color32(COOL_HUE, 0.65, 0.55)],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                let hue = COOL_HUE + (WARM_HUE - COOL_HUE) * t;
                // fade toward grey in the middle of the ramp
                let saturation = 0.65 - 0.35 * (1.0 - (2.0 * t - 1.0).abs());
                hsl_to_color32(hue, saturation, 0.55)
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Category colours: ordered labels → Color32
// ---------------------------------------------------------------------------

/// Colours for a fixed, ordered list of category labels.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    entries: Vec<(String, Color32)>,
    default_color: Color32,
}

impl CategoryColors {
    /// Ordered categories get the coolwarm ramp.
    pub fn ordered<S: ToString>(labels: impl IntoIterator<Item = S>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(|l| l.to_string()).collect();
        let ramp = coolwarm(labels.len());
        Self::from_entries(labels.into_iter().zip(ramp).collect())
    }

    /// Unordered categories get evenly spaced hues.
    pub fn distinct<S: ToString>(labels: impl IntoIterator<Item = S>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(|l| l.to_string()).collect();
        let palette = generate_palette(labels.len());
        Self::from_entries(labels.into_iter().zip(palette).collect())
    }

    fn from_entries(entries: Vec<(String, Color32)>) -> Self {
        CategoryColors {
            entries,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}
