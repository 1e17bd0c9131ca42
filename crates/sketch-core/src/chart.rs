// File: crates/sketch-core/src/chart.rs
// Summary: BarChart model with SVG materialization and headless raster rendering via Skia CPU surfaces.

use std::cell::OnceCell;

use skia_safe as skia;

use crate::bar_chart::{compute_chart_layout, ChartDatum, DrawCommand};
use crate::error::{Result, SketchError};
use crate::geometry::SizeI;
use crate::surface::{allocate, read_rgba8};
use crate::svg::{self, VectorContainer};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::Viewport;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let v = Viewport::default();
        Self {
            width: v.width as i32,
            height: v.height as i32,
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct BarChart {
    pub data: Vec<ChartDatum>,
    pub viewport: Viewport,
    // Font collection is built on first labelled paint and reused afterwards.
    shaper: OnceCell<TextShaper>,
}

impl BarChart {
    pub fn new(data: Vec<ChartDatum>) -> Self {
        Self { data, viewport: Viewport::default(), shaper: OnceCell::new() }
    }

    /// Monthly product sales used when no dataset is supplied.
    pub fn monthly_sales() -> Self {
        Self::new(vec![
            ChartDatum::new("Yan", 120.0),
            ChartDatum::new("Fev", 150.0),
            ChartDatum::new("Mar", 180.0),
            ChartDatum::new("Apr", 90.0),
            ChartDatum::new("May", 220.0),
            ChartDatum::new("Iyun", 75.0),
        ])
    }

    /// Full redraw into a vector container.
    pub fn render(&self, container: &mut VectorContainer, theme: &Theme) {
        svg::render_with_theme(container, &self.data, theme);
    }

    /// Standalone SVG document, styled with `theme`.
    pub fn to_svg_document(&self, theme: &Theme) -> String {
        let mut container = VectorContainer::new(self.viewport).with_stylesheet(theme.svg_stylesheet());
        self.render(&mut container, theme);
        container.to_svg_string()
    }

    /// Paint onto `canvas`, fitting the logical viewport into `width` x `height`
    /// pixels with uniform scale, centered.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        let Some((layout, commands)) = compute_chart_layout(&self.data, &self.viewport) else {
            return;
        };

        let vw = self.viewport.width as f32;
        let vh = self.viewport.height as f32;
        let s = (opts.width as f32 / vw).min(opts.height as f32 / vh);
        let (tx, ty) = layout.translate();

        canvas.save();
        canvas.translate(((opts.width as f32 - vw * s) / 2.0, (opts.height as f32 - vh * s) / 2.0));
        canvas.scale((s, s));
        canvas.translate((tx as f32, ty as f32));

        let mut grid = skia::Paint::default();
        grid.set_anti_alias(true);
        grid.set_style(skia::paint::Style::Stroke);
        grid.set_stroke_width(1.0);
        grid.set_color(opts.theme.grid);

        let mut bar = skia::Paint::default();
        bar.set_anti_alias(true);
        bar.set_style(skia::paint::Style::Fill);
        bar.set_color(opts.theme.bar);

        let shaper = opts.draw_labels.then(|| self.shaper.get_or_init(TextShaper::new));

        for cmd in &commands {
            match cmd {
                DrawCommand::GridLine { x1, y1, x2, y2 } => {
                    canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &grid);
                }
                DrawCommand::Bar { x, y, width, height, .. } => {
                    let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                    canvas.draw_rect(rect, &bar);
                }
                DrawCommand::TickLabel { x, y, anchor, text } => {
                    if let Some(shaper) = shaper {
                        shaper.draw_anchored(canvas, text, *x as f32, *y as f32, 12.0, opts.theme.axis_label, *anchor);
                    }
                }
                DrawCommand::BarLabel { x, y, anchor, text } => {
                    if let Some(shaper) = shaper {
                        shaper.draw_anchored(canvas, text, *x as f32, *y as f32, 13.0, opts.theme.bar_label, *anchor);
                    }
                }
            }
        }
        canvas.restore();
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let size = SizeI::new(opts.width, opts.height);
        let mut surface = allocate(size)?;
        self.paint(surface.canvas(), opts);
        let (px, w, h) = read_rgba8(&mut surface, size)?;
        Ok((px, w, h, w as usize * 4))
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = allocate(SizeI::new(opts.width, opts.height))?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SketchError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_shaper_is_built_once() {
        let chart = BarChart::monthly_sales();
        let mut opts = RenderOptions::default();
        opts.width = 200;
        opts.height = 100;

        opts.draw_labels = false;
        chart.render_to_rgba8(&opts).unwrap();
        assert!(chart.shaper.get().is_none());

        opts.draw_labels = true;
        chart.render_to_rgba8(&opts).unwrap();
        let first = chart.shaper.get().map(|s| s as *const TextShaper);
        assert!(first.is_some());
        chart.render_to_rgba8(&opts).unwrap();
        assert_eq!(chart.shaper.get().map(|s| s as *const TextShaper), first);
    }
}
