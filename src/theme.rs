use clap::ValueEnum;
use egui::Color32;

/// Visual skin. Both themes share the same content and section structure;
/// they differ only in palette, object mix, and shell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Minimal green-on-black skin
    #[default]
    Terminal,
    /// Pastel desktop skin
    Kawaii,
}

impl Theme {
    pub fn window_title(self) -> &'static str {
        match self {
            Theme::Terminal => "folio",
            Theme::Kawaii => "folio ♡",
        }
    }

    /// Colors the scene builder assigns to decorative objects.
    pub fn scene_palette(self) -> &'static [[f32; 3]] {
        match self {
            Theme::Terminal => &[
                [0.0, 1.0, 0.53],   // green
                [0.29, 0.62, 1.0],  // blue
                [0.0, 0.85, 0.8],   // cyan
            ],
            Theme::Kawaii => &[
                [1.0, 0.6, 0.8],    // pink
                [0.72, 0.62, 1.0],  // lavender
                [0.62, 0.94, 0.78], // mint
                [1.0, 0.8, 0.6],    // peach
            ],
        }
    }

    /// Background clear color for the render target.
    pub fn clear_color(self) -> [f64; 4] {
        match self {
            Theme::Terminal => [0.004, 0.008, 0.012, 1.0],
            Theme::Kawaii => [0.09, 0.05, 0.12, 1.0],
        }
    }

    /// Primary UI accent.
    pub fn accent(self) -> Color32 {
        match self {
            Theme::Terminal => Color32::from_rgb(0, 255, 136),
            Theme::Kawaii => Color32::from_rgb(255, 153, 204),
        }
    }

    /// Secondary accent, used for headings and bar fills.
    pub fn accent_alt(self) -> Color32 {
        match self {
            Theme::Terminal => Color32::from_rgb(74, 158, 255),
            Theme::Kawaii => Color32::from_rgb(184, 158, 255),
        }
    }

    pub fn text_dim(self) -> Color32 {
        match self {
            Theme::Terminal => Color32::from_rgb(150, 160, 150),
            Theme::Kawaii => Color32::from_rgb(200, 180, 200),
        }
    }

    pub fn loading_caption(self) -> &'static str {
        match self {
            Theme::Terminal => "Loading portfolio...",
            Theme::Kawaii => "Loading... ♡",
        }
    }

    /// Monospace everywhere for the terminal skin, proportional otherwise.
    pub fn monospace(self) -> bool {
        matches!(self, Theme::Terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_non_empty() {
        for theme in [Theme::Terminal, Theme::Kawaii] {
            assert!(!theme.scene_palette().is_empty());
        }
    }

    #[test]
    fn palette_components_in_unit_range() {
        for theme in [Theme::Terminal, Theme::Kawaii] {
            for color in theme.scene_palette() {
                for c in color {
                    assert!((0.0..=1.0).contains(c));
                }
            }
        }
    }

    #[test]
    fn themes_have_distinct_accents() {
        assert_ne!(Theme::Terminal.accent(), Theme::Kawaii.accent());
    }
}
