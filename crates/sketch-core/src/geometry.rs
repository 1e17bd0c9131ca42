// File: crates/sketch-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pointer and pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

impl From<(f32, f32)> for PointF {
    fn from((x, y): (f32, f32)) -> Self { Self { x, y } }
}

/// On-screen rectangle in logical (CSS) units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Translate a client-space point into this rectangle's local space.
    #[inline]
    pub fn to_local(&self, client: PointF) -> PointF {
        PointF::new(client.x - self.left, client.y - self.top)
    }
}

/// Integer pixel dimensions of a backing buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeI {
    pub width: i32,
    pub height: i32,
}

impl SizeI {
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }
    pub const fn is_empty(&self) -> bool { self.width <= 0 || self.height <= 0 }
    pub const fn area(&self) -> usize {
        if self.is_empty() { 0 } else { self.width as usize * self.height as usize }
    }
}

/// Physical size for a logical extent at `ratio`: round(logical * ratio) per axis.
pub fn physical_size(logical_w: f32, logical_h: f32, ratio: f32) -> SizeI {
    let px = |v: f32| (v.max(0.0) * ratio).round() as i32;
    SizeI::new(px(logical_w), px(logical_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_coordinates_subtract_origin() {
        let r = RectF::from_ltwh(10.0, 20.0, 300.0, 200.0);
        assert_eq!(r.to_local(PointF::new(15.0, 25.5)), PointF::new(5.0, 5.5));
        assert_eq!(r.width(), 300.0);
    }

    #[test]
    fn physical_size_rounds() {
        assert_eq!(physical_size(101.0, 50.0, 1.5), SizeI::new(152, 75));
        assert_eq!(physical_size(0.0, 50.0, 2.0).area(), 0);
    }
}
