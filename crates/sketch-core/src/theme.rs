// File: crates/sketch-core/src/theme.rs
// Summary: Light/Dark theming for chart and pad colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub bar: skia::Color,
    pub bar_label: skia::Color,
    pub pad_background: skia::Color,
    /// Palette offered by the pad's color control.
    pub palette: [skia::Color; 8],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xee, 0xf2, 0xfb),
            axis_label: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
            bar: skia::Color::from_argb(255, 0x4f, 0x46, 0xe5),
            bar_label: skia::Color::from_argb(255, 0x37, 0x41, 0x51),
            pad_background: skia::Color::from_argb(255, 250, 250, 252),
            palette: [
                skia::Color::from_argb(255, 0x11, 0x18, 0x27),
                skia::Color::from_argb(255, 0xdc, 0x26, 0x26),
                skia::Color::from_argb(255, 0xea, 0x58, 0x0c),
                skia::Color::from_argb(255, 0xca, 0x8a, 0x04),
                skia::Color::from_argb(255, 0x16, 0xa3, 0x4a),
                skia::Color::from_argb(255, 0x25, 0x63, 0xeb),
                skia::Color::from_argb(255, 0x93, 0x33, 0xea),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            bar: skia::Color::from_argb(255, 96, 156, 255),
            bar_label: skia::Color::from_argb(255, 235, 235, 245),
            pad_background: skia::Color::from_argb(255, 28, 28, 32),
            palette: [
                skia::Color::from_argb(255, 0xf9, 0xfa, 0xfb),
                skia::Color::from_argb(255, 0xf8, 0x71, 0x71),
                skia::Color::from_argb(255, 0xfb, 0x92, 0x3c),
                skia::Color::from_argb(255, 0xfa, 0xcc, 0x15),
                skia::Color::from_argb(255, 0x4a, 0xde, 0x80),
                skia::Color::from_argb(255, 0x60, 0xa5, 0xfa),
                skia::Color::from_argb(255, 0xc0, 0x84, 0xfc),
                skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            ],
        }
    }

    /// Grid stroke as `#rrggbb`, for vector output.
    pub fn grid_hex(&self) -> String { hex(self.grid) }

    /// CSS for the classes the chart materializer emits.
    pub fn svg_stylesheet(&self) -> String {
        format!(
            ".bar{{fill:{}}} .axis{{fill:{};font:12px sans-serif}} .bar-label{{fill:{};font:13px sans-serif}}",
            hex(self.bar),
            hex(self.axis_label),
            hex(self.bar_label),
        )
    }
}

/// Format a color as `#rrggbb`, dropping alpha.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
