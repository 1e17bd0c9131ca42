// File: crates/sketch-core/src/bar_chart.rs
// Summary: Pure bar chart layout: dataset + viewport -> layout metrics and draw commands.

use crate::grid::tick_values;
use crate::types::{Viewport, BAR_FILL, TICKS};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Derived per render, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub plot_width: f64,
    pub plot_height: f64,
    pub max: f64,
    pub x_step: f64,
    pub bar_width: f64,
    pub ticks: usize,
}

impl ChartLayout {
    /// Offset of the plot group inside the viewport (left margin, top margin).
    pub fn translate(&self) -> (f64, f64) {
        (self.viewport.insets.left as f64, self.viewport.insets.top as f64)
    }

    // A zero max would turn every ratio into NaN.
    fn divisor(&self) -> f64 {
        if self.max > 0.0 { self.max } else { 1.0 }
    }

    /// Plot-local y of a value on the linear value axis.
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.plot_height - (value / self.divisor()) * self.plot_height
    }

    /// Height of the bar for `value`.
    pub fn bar_height(&self, value: f64) -> f64 {
        (value / self.divisor()) * self.plot_height
    }

    /// Left edge of the bar in slot `index`, centered in its slot.
    pub fn bar_x(&self, index: usize) -> f64 {
        index as f64 * self.x_step + (self.x_step - self.bar_width) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Renderer-agnostic drawing step in plot-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    GridLine { x1: f64, y1: f64, x2: f64, y2: f64 },
    TickLabel { x: f64, y: f64, anchor: TextAnchor, text: String },
    Bar { index: usize, x: f64, y: f64, width: f64, height: f64 },
    BarLabel { x: f64, y: f64, anchor: TextAnchor, text: String },
}

/// Lay out `data` in `viewport`. Returns `None` for an empty dataset.
///
/// Output order: grid line + tick label per tick (bottom to top), then bar + label
/// per datum in input order.
pub fn compute_chart_layout(data: &[ChartDatum], viewport: &Viewport) -> Option<(ChartLayout, Vec<DrawCommand>)> {
    if data.is_empty() {
        return None;
    }
    let values = data.iter().map(|d| sanitize(d.value));
    let max = values.clone().fold(0.0f64, f64::max);
    let plot_width = viewport.plot_width();
    let plot_height = viewport.plot_height();
    let x_step = plot_width / data.len() as f64;

    let layout = ChartLayout {
        viewport: *viewport,
        plot_width,
        plot_height,
        max,
        x_step,
        bar_width: x_step * BAR_FILL,
        ticks: TICKS,
    };

    let mut cmds = Vec::with_capacity(2 * (TICKS + 1) + 2 * data.len());
    for tick in tick_values(max, TICKS) {
        let y = layout.value_to_y(tick);
        cmds.push(DrawCommand::GridLine { x1: 0.0, y1: y, x2: plot_width, y2: y });
        cmds.push(DrawCommand::TickLabel {
            x: -10.0,
            y: y + 4.0,
            anchor: TextAnchor::End,
            text: format_tick(tick),
        });
    }

    for (i, (d, value)) in data.iter().zip(values).enumerate() {
        let x = layout.bar_x(i);
        let height = layout.bar_height(value);
        cmds.push(DrawCommand::Bar { index: i, x, y: plot_height - height, width: layout.bar_width, height });
        cmds.push(DrawCommand::BarLabel {
            x: x + layout.bar_width / 2.0,
            y: plot_height + 18.0,
            anchor: TextAnchor::Middle,
            text: d.label.clone(),
        });
    }

    log::trace!("chart layout: {} data, max {max}, step {x_step}", data.len());
    Some((layout, cmds))
}

// Negative or non-finite values draw as empty bars.
fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn format_tick(v: f64) -> String {
    format!("{}", v.round() as i64)
}
