// File: crates/sketch-core/src/types.rs
// Summary: Shared types and constants (viewport sizes, margins, stroke defaults).

/// Logical chart viewport width in units.
pub const VIEW_WIDTH: f64 = 800.0;
/// Logical chart viewport height in units.
pub const VIEW_HEIGHT: f64 = 400.0;

/// Number of tick intervals on the value axis (ticks + 1 grid lines).
pub const TICKS: usize = 5;

/// Fraction of each horizontal slot covered by its bar.
pub const BAR_FILL: f64 = 0.6;

/// Stroke width used when the width control holds garbage.
pub const DEFAULT_STROKE_WIDTH: u32 = 4;

/// Download name offered for exported drawings.
pub const EXPORT_FILE_NAME: &str = "drawing.png";

/// Plot margins, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 20, 20, 50)
    }
}

/// Fixed logical viewport the chart is laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl Viewport {
    /// Inner plot width (viewport minus horizontal margins), never negative.
    pub fn plot_width(&self) -> f64 { (self.width - self.insets.hsum() as f64).max(0.0) }
    /// Inner plot height (viewport minus vertical margins), never negative.
    pub fn plot_height(&self) -> f64 { (self.height - self.insets.vsum() as f64).max(0.0) }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: VIEW_WIDTH, height: VIEW_HEIGHT, insets: Insets::default() }
    }
}
