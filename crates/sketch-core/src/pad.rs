// File: crates/sketch-core/src/pad.rs
// Summary: Freehand stroke renderer: pointer state machine driving incremental segment draws.

use crate::error::Result;
use crate::geometry::PointF;
use crate::surface::{ExportedImage, RasterSurface};
use crate::stroke::StrokeStyle;

/// Pointer events in client coordinates, as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// Transient pointer tracking, surface-local.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub drawing: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Turns pointer positions into committed line segments on an injected surface.
///
/// Idle -> `begin_stroke` -> Drawing -> `extend_stroke`* -> `end_stroke` -> Idle.
/// Each `extend_stroke` commits its segment before returning, so the surface can be
/// exported or resized between any two calls.
pub struct StrokeRenderer {
    surface: RasterSurface,
    style: StrokeStyle,
    pointer: PointerState,
}

impl StrokeRenderer {
    pub fn new(surface: RasterSurface) -> Self {
        Self { surface, style: StrokeStyle::default(), pointer: PointerState::default() }
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &StrokeStyle { &self.style }
    pub fn pointer(&self) -> PointerState { self.pointer }
    pub fn is_drawing(&self) -> bool { self.pointer.drawing }
    pub fn surface(&self) -> &RasterSurface { &self.surface }
    pub fn surface_mut(&mut self) -> &mut RasterSurface { &mut self.surface }

    /// Single setter for the color and width controls.
    pub fn configure_style(&mut self, color: &str, width_input: &str) {
        self.style.configure(color, width_input);
    }

    pub fn begin_stroke(&mut self, pointer_x: f32, pointer_y: f32) {
        let p = self.surface.to_local(PointF::new(pointer_x, pointer_y));
        self.pointer = PointerState { drawing: true, last_x: p.x, last_y: p.y };
    }

    /// Returns whether a segment was committed.
    pub fn extend_stroke(&mut self, pointer_x: f32, pointer_y: f32) -> bool {
        if !self.pointer.drawing {
            return false;
        }
        let from = PointF::new(self.pointer.last_x, self.pointer.last_y);
        let to = self.surface.to_local(PointF::new(pointer_x, pointer_y));
        log::trace!("segment ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
        let drawn = self.surface.stroke_segment(from, to, &self.style);
        self.pointer.last_x = to.x;
        self.pointer.last_y = to.y;
        drawn
    }

    pub fn end_stroke(&mut self) {
        self.pointer.drawing = false;
    }

    /// Dispatch a host pointer event to the matching stroke operation.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.begin_stroke(x, y),
            PointerEvent::Move { x, y } => { self.extend_stroke(x, y); }
            PointerEvent::Up => self.end_stroke(),
        }
    }

    pub fn clear_surface(&mut self) {
        self.surface.clear();
    }

    pub fn export_surface(&mut self) -> Result<ExportedImage> {
        self.surface.export_png()
    }

    pub fn resize_to_display_size(&mut self) -> Result<bool> {
        self.surface.resize_to_display_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RectF;
    use crate::surface::DisplayMetrics;

    fn pad() -> StrokeRenderer {
        let metrics = DisplayMetrics::new(RectF::from_ltwh(100.0, 50.0, 64.0, 64.0), 1.0);
        let mut pad = StrokeRenderer::new(RasterSurface::new(metrics));
        pad.resize_to_display_size().unwrap();
        pad
    }

    #[test]
    fn state_machine() {
        let mut p = pad();
        assert!(!p.extend_stroke(110.0, 60.0));
        assert!(!p.is_drawing());

        p.handle_pointer(PointerEvent::Down { x: 110.0, y: 60.0 });
        assert_eq!(p.pointer(), PointerState { drawing: true, last_x: 10.0, last_y: 10.0 });
        assert!(p.extend_stroke(120.0, 70.0));
        assert_eq!((p.pointer().last_x, p.pointer().last_y), (20.0, 20.0));

        p.handle_pointer(PointerEvent::Up);
        assert!(!p.is_drawing());
        assert!(!p.extend_stroke(130.0, 80.0));
        assert_eq!((p.pointer().last_x, p.pointer().last_y), (20.0, 20.0));
    }

    #[test]
    fn end_stroke_while_idle_is_harmless() {
        let mut p = pad();
        p.end_stroke();
        p.end_stroke();
        assert!(!p.is_drawing());
    }

    #[test]
    fn clear_keeps_style() {
        let mut p = pad();
        p.configure_style("#ff0000", "9");
        let before = *p.style();
        p.clear_surface();
        assert_eq!(*p.style(), before);
    }
}
