// File: crates/seo-chart-render/src/theme.rs
// Summary: Light/Dark color themes for the impressions/rank chart.

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }

    /// `#rrggbb`, alpha left out.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_skia(self) -> skia_safe::Color {
        skia_safe::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub impressions_stroke: Rgba,
    pub impressions_fill: Rgba,
    pub rank_stroke: Rgba,
    pub rank_fill: Rgba,
    pub highlight: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_label: Rgba::rgb(150, 150, 160),
            impressions_stroke: Rgba::rgb(64, 160, 255),
            impressions_fill: Rgba::rgb(64, 160, 255).with_alpha(96),
            rank_stroke: Rgba::rgb(40, 200, 120),
            rank_fill: Rgba::rgb(40, 200, 120).with_alpha(64),
            highlight: Rgba::rgb(255, 230, 70),
            tooltip_background: Rgba::rgb(30, 30, 36).with_alpha(230),
            tooltip_text: Rgba::rgb(235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            grid: Rgba::rgb(230, 230, 235),
            axis_label: Rgba::rgb(100, 100, 110),
            impressions_stroke: Rgba::rgb(32, 120, 200),
            impressions_fill: Rgba::rgb(32, 120, 200).with_alpha(80),
            rank_stroke: Rgba::rgb(20, 160, 90),
            rank_fill: Rgba::rgb(20, 160, 90).with_alpha(56),
            highlight: Rgba::rgb(30, 120, 240),
            tooltip_background: Rgba::rgb(255, 255, 255).with_alpha(240),
            tooltip_text: Rgba::rgb(20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
