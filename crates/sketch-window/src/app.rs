// File: crates/sketch-window/src/app.rs
// Summary: Window-independent shell state: toolbar controls, pad/chart views, event handlers, frame composition.

use sketch_core::theme::{self, Theme};
use sketch_core::{BarChart, DisplayMetrics, PointF, RasterSurface, RectF, RenderOptions, StrokeRenderer};

/// Logical height of the control strip above the pad.
pub const TOOLBAR_HEIGHT: f32 = 40.0;
const MIN_WIDTH: u32 = 1;
const MAX_WIDTH: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Pad,
    Chart,
}

/// Host-level commands decoded from keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Save,
    ToggleView,
    PickColor(usize),
    Wider,
    Narrower,
}

pub struct App {
    theme: Theme,
    pad: StrokeRenderer,
    chart: BarChart,
    view: View,
    color_index: usize,
    width_input: String,
    /// Window scale factor (physical pixels per logical unit).
    scale: f64,
    cursor: Option<PointF>,
}

impl App {
    pub fn new(theme: Theme, chart: BarChart, physical: (u32, u32), scale: f64) -> anyhow::Result<Self> {
        let metrics = pad_metrics(physical, scale);
        let mut pad = StrokeRenderer::new(RasterSurface::new(metrics));
        pad.resize_to_display_size()?;
        let mut app = Self {
            theme,
            pad,
            chart,
            view: View::Pad,
            color_index: 0,
            width_input: sketch_core::types::DEFAULT_STROKE_WIDTH.to_string(),
            scale,
            cursor: None,
        };
        app.apply_style();
        Ok(app)
    }

    pub fn pad(&self) -> &StrokeRenderer { &self.pad }

    /// Window resized or moved to a display with another scale factor. A
    /// minimized window, or one too short to show any pad, keeps the previous
    /// metrics and buffer so the drawing survives until it is restored.
    pub fn set_viewport(&mut self, physical: (u32, u32), scale: f64) {
        let metrics = pad_metrics(physical, scale);
        if physical.0 == 0 || physical.1 == 0 || metrics.bounds.height() <= 0.0 {
            log::debug!("ignoring viewport {}x{} with no pad area", physical.0, physical.1);
            return;
        }
        self.scale = scale;
        self.pad.surface_mut().set_metrics(metrics);
        if let Err(e) = self.pad.resize_to_display_size() {
            log::error!("pad resize failed: {e}");
        }
    }

    fn to_logical(&self, x: f64, y: f64) -> PointF {
        PointF::new((x / self.scale) as f32, (y / self.scale) as f32)
    }

    fn over_pad(&self, p: PointF) -> bool {
        let b = self.pad.surface().metrics().bounds;
        p.x >= b.left && p.x < b.right && p.y >= b.top && p.y < b.bottom
    }

    /// Cursor moved to physical window position (x, y). Moves only reach the pad
    /// while the cursor is over it.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        let p = self.to_logical(x, y);
        self.cursor = Some(p);
        if self.view == View::Pad && self.over_pad(p) {
            self.pad.extend_stroke(p.x, p.y);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn pointer_pressed(&mut self) {
        let Some(p) = self.cursor else { return };
        if self.view == View::Pad && self.over_pad(p) {
            self.pad.begin_stroke(p.x, p.y);
        }
    }

    /// Release is observed window-wide so a stroke never stays stuck.
    pub fn pointer_released(&mut self) {
        self.pad.end_stroke();
    }

    pub fn run(&mut self, cmd: Command) {
        match cmd {
            Command::Clear => self.pad.clear_surface(),
            Command::Save => self.save(),
            Command::ToggleView => {
                self.pad.end_stroke();
                self.view = match self.view { View::Pad => View::Chart, View::Chart => View::Pad };
                log::info!("view: {:?}", self.view);
            }
            Command::PickColor(i) => {
                self.color_index = i.min(self.theme.palette.len() - 1);
                self.apply_style();
            }
            Command::Wider | Command::Narrower => {
                let w = self.pad.style().width;
                let next = if cmd == Command::Wider { w + 1 } else { w.saturating_sub(1) };
                self.width_input = next.clamp(MIN_WIDTH, MAX_WIDTH).to_string();
                self.apply_style();
            }
        }
    }

    fn apply_style(&mut self) {
        let color = theme::hex(self.theme.palette[self.color_index]);
        self.pad.configure_style(&color, &self.width_input);
        log::debug!("style: {} width {}", color, self.pad.style().width);
    }

    fn save(&mut self) {
        match self.pad.export_surface() {
            Ok(img) => match std::fs::write(img.file_name, &img.bytes) {
                Ok(()) => log::info!("saved {} ({} bytes)", img.file_name, img.bytes.len()),
                Err(e) => log::error!("writing {} failed: {e}", img.file_name),
            },
            Err(e) => log::error!("export failed: {e}"),
        }
    }

    /// Compose the current view into a 0RGB frame of `w` x `h` physical pixels.
    pub fn compose(&mut self, frame: &mut [u32], w: u32, h: u32) {
        match self.view {
            View::Pad => self.compose_pad(frame, w, h),
            View::Chart => self.compose_chart(frame, w, h),
        }
    }

    fn compose_pad(&mut self, frame: &mut [u32], w: u32, h: u32) {
        let (w, h) = (w as usize, h as usize);
        let bar_h = ((TOOLBAR_HEIGHT as f64 * self.scale).round() as usize).min(h);

        fill(frame, rgb(self.theme.background));
        // Toolbar: color swatch, then a bar as long as the stroke width.
        let unit = self.scale.max(1.0) as usize;
        let swatch = rgb(self.theme.palette[self.color_index]);
        fill_rect(frame, w, 8 * unit, 8 * unit, 24 * unit, 24 * unit, swatch);
        let width = self.pad.style().width as usize;
        let bar = (width * 4 * unit).min(w.saturating_sub(48 * unit));
        fill_rect(frame, w, 40 * unit, 18 * unit, bar, 4 * unit, swatch);

        let bg = self.theme.pad_background;
        let (px, pw, ph) = match self.pad.surface_mut().read_rgba8() {
            Ok(v) => v,
            Err(e) => {
                log::error!("pad readback failed: {e}");
                return;
            }
        };
        let (pw, ph) = (pw.max(0) as usize, ph.max(0) as usize);
        for y in bar_h..h {
            let sy = y - bar_h;
            let row = &mut frame[y * w..(y + 1) * w];
            for (x, out) in row.iter_mut().enumerate() {
                *out = if sy < ph && x < pw {
                    let i = (sy * pw + x) * 4;
                    over(&px[i..i + 4], bg)
                } else {
                    rgb(bg)
                };
            }
        }
    }

    fn compose_chart(&mut self, frame: &mut [u32], w: u32, h: u32) {
        let mut opts = RenderOptions::default();
        opts.width = w as i32;
        opts.height = h as i32;
        opts.theme = self.theme;
        match self.chart.render_to_rgba8(&opts) {
            Ok((rgba, _, _, _)) => {
                for (out, p) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                    *out = ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32;
                }
            }
            Err(e) => {
                log::error!("chart render failed: {e}");
                fill(frame, rgb(self.theme.background));
            }
        }
    }
}

/// Pad occupies the window below the toolbar, in logical units.
fn pad_metrics(physical: (u32, u32), scale: f64) -> DisplayMetrics {
    let lw = (physical.0 as f64 / scale) as f32;
    let lh = (physical.1 as f64 / scale) as f32;
    let top = TOOLBAR_HEIGHT.min(lh);
    DisplayMetrics::new(RectF::from_ltrb(0.0, top, lw, lh), scale as f32)
}

fn rgb(c: sketch_core::skia_safe::Color) -> u32 {
    ((c.r() as u32) << 16) | ((c.g() as u32) << 8) | c.b() as u32
}

/// Unpremultiplied RGBA over an opaque background, as 0RGB.
fn over(src: &[u8], bg: sketch_core::skia_safe::Color) -> u32 {
    let a = src[3] as u32;
    let mix = |s: u8, d: u8| (s as u32 * a + d as u32 * (255 - a) + 127) / 255;
    (mix(src[0], bg.r()) << 16) | (mix(src[1], bg.g()) << 8) | mix(src[2], bg.b())
}

fn fill(frame: &mut [u32], color: u32) {
    frame.iter_mut().for_each(|p| *p = color);
}

fn fill_rect(frame: &mut [u32], stride: usize, x: usize, y: usize, w: usize, h: usize, color: u32) {
    let rows = frame.len() / stride.max(1);
    for yy in y..(y + h).min(rows) {
        for xx in x..(x + w).min(stride) {
            frame[yy * stride + xx] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Theme::light(), BarChart::monthly_sales(), (200, 140), 1.0).expect("app")
    }

    #[test]
    fn pad_sits_below_toolbar() {
        let a = app();
        let b = a.pad().surface().metrics().bounds;
        assert_eq!((b.top, b.bottom, b.width()), (40.0, 140.0, 200.0));
        assert_eq!(a.pad().surface().physical_size(), sketch_core::SizeI::new(200, 100));
    }

    #[test]
    fn press_over_toolbar_does_not_start_a_stroke() {
        let mut a = app();
        a.cursor_moved(50.0, 10.0);
        a.pointer_pressed();
        assert!(!a.pad().is_drawing());

        a.cursor_moved(50.0, 80.0);
        a.pointer_pressed();
        assert!(a.pad().is_drawing());
        assert_eq!(a.pad().pointer().last_y, 40.0);

        // release over the toolbar still ends it
        a.cursor_moved(50.0, 5.0);
        a.pointer_released();
        assert!(!a.pad().is_drawing());
    }

    #[test]
    fn width_controls_clamp() {
        let mut a = app();
        for _ in 0..10 {
            a.run(Command::Narrower);
        }
        assert_eq!(a.pad().style().width, MIN_WIDTH);
        a.run(Command::Wider);
        assert_eq!(a.pad().style().width, 2);
    }

    #[test]
    fn hidpi_viewport_change_resizes_pad() {
        let mut a = app();
        a.set_viewport((400, 280), 2.0);
        assert_eq!(a.pad().surface().physical_size(), sketch_core::SizeI::new(400, 200));
        a.cursor_moved(100.0, 200.0);
        a.pointer_pressed();
        assert_eq!((a.pad().pointer().last_x, a.pad().pointer().last_y), (50.0, 60.0));
    }

    fn painted(a: &mut App) -> usize {
        let (px, _, _) = a.pad.surface_mut().read_rgba8().expect("readback");
        px.chunks_exact(4).filter(|p| p[3] > 0).count()
    }

    #[test]
    fn minimize_and_restore_keeps_drawing() {
        let mut a = app();
        a.cursor_moved(10.0, 90.0);
        a.pointer_pressed();
        a.cursor_moved(190.0, 90.0);
        a.pointer_released();
        let before = painted(&mut a);
        assert!(before > 0);

        a.set_viewport((0, 0), 1.0);
        assert_eq!(a.pad().surface().physical_size(), sketch_core::SizeI::new(200, 100));
        a.set_viewport((200, 140), 1.0);
        assert_eq!(painted(&mut a), before);

        // Shorter than the toolbar: no pad area, nothing discarded either.
        a.set_viewport((200, 30), 1.0);
        a.set_viewport((200, 140), 1.0);
        assert_eq!(painted(&mut a), before);
    }

    #[test]
    fn over_blends_unpremultiplied() {
        let white = sketch_core::skia_safe::Color::WHITE;
        assert_eq!(over(&[0, 0, 0, 255], white), 0x000000);
        assert_eq!(over(&[0, 0, 0, 0], white), 0xffffff);
    }
}
