// File: crates/sketch-core/src/surface.rs
// Summary: HiDPI-aware raster surface on a Skia CPU backing buffer, with clear and PNG export.

use base64::Engine as _;
use skia_safe as skia;

use crate::error::{Result, SketchError};
use crate::geometry::{physical_size, PointF, RectF, SizeI};
use crate::stroke::StrokeStyle;
use crate::types::EXPORT_FILE_NAME;

/// Host-reported placement of the surface: its on-screen rectangle in logical
/// units and the active device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    pub bounds: RectF,
    pub device_pixel_ratio: f32,
}

impl DisplayMetrics {
    pub fn new(bounds: RectF, device_pixel_ratio: f32) -> Self {
        Self { bounds, device_pixel_ratio }
    }

    /// Ratio used for sizing; unusable values count as 1.
    pub fn ratio(&self) -> f32 {
        let r = self.device_pixel_ratio;
        if r.is_finite() && r > 0.0 { r } else { 1.0 }
    }

    /// Backing-buffer size these metrics call for.
    pub fn desired_physical_size(&self) -> SizeI {
        physical_size(self.bounds.width(), self.bounds.height(), self.ratio())
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { bounds: RectF::from_ltwh(0.0, 0.0, 300.0, 150.0), device_pixel_ratio: 1.0 }
    }
}

/// Encoded drawing ready to be offered as a download.
#[derive(Clone, Debug)]
pub struct ExportedImage {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    pub fn mime_type(&self) -> &'static str { "image/png" }

    pub fn data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime_type(), b64)
    }
}

/// Persistent raster target. Drawing commands take logical coordinates; the
/// backing buffer is `round(logical * ratio)` pixels after every resize.
pub struct RasterSurface {
    metrics: DisplayMetrics,
    physical: SizeI,
    backing: Option<skia::Surface>,
    /// Scale currently applied to the backing canvas.
    applied_ratio: f32,
    resizes: u64,
}

impl RasterSurface {
    /// Create an unallocated surface; call `resize_to_display_size` before drawing.
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self { metrics, physical: SizeI::default(), backing: None, applied_ratio: 1.0, resizes: 0 }
    }

    pub fn metrics(&self) -> DisplayMetrics { self.metrics }

    /// Record new host metrics. Takes effect on the next `resize_to_display_size`,
    /// except for the on-screen origin which pointer mapping reads immediately.
    pub fn set_metrics(&mut self, metrics: DisplayMetrics) { self.metrics = metrics; }

    pub fn physical_size(&self) -> SizeI { self.physical }

    /// Number of buffer reallocations performed so far.
    pub fn resize_count(&self) -> u64 { self.resizes }

    /// Map a client-space pointer position into surface-local logical coordinates.
    pub fn to_local(&self, client: PointF) -> PointF { self.metrics.bounds.to_local(client) }

    /// Match the backing buffer to the current metrics. Existing pixels are kept at
    /// the top-left origin, unscaled; anything past the new bounds is dropped.
    /// Returns whether the buffer changed. A ratio change that leaves the pixel
    /// size alone keeps the buffer and only swaps the logical-to-pixel scale.
    pub fn resize_to_display_size(&mut self) -> Result<bool> {
        let desired = self.metrics.desired_physical_size();
        let ratio = self.metrics.ratio();
        if desired == self.physical {
            if ratio != self.applied_ratio {
                if let Some(surface) = self.backing.as_mut() {
                    let canvas = surface.canvas();
                    canvas.reset_matrix();
                    canvas.scale((ratio, ratio));
                }
                log::debug!("surface scale {} -> {ratio}", self.applied_ratio);
                self.applied_ratio = ratio;
            }
            return Ok(false);
        }
        let previous = self.backing.as_mut().map(|s| s.image_snapshot());

        let next = if desired.is_empty() {
            None
        } else {
            let mut surface = allocate(desired)?;
            let canvas = surface.canvas();
            canvas.clear(skia::Color::TRANSPARENT);
            if let Some(image) = &previous {
                canvas.draw_image(image, (0.0, 0.0), Some(&copy_paint()));
            }
            canvas.scale((ratio, ratio));
            Some(surface)
        };

        log::debug!(
            "resized surface {}x{} -> {}x{} (ratio {ratio})",
            self.physical.width, self.physical.height, desired.width, desired.height
        );
        self.backing = next;
        self.physical = desired;
        self.applied_ratio = ratio;
        self.resizes += 1;
        Ok(true)
    }

    /// Draw one segment in logical coordinates. Returns false when there is no
    /// backing buffer to draw into.
    pub fn stroke_segment(&mut self, from: PointF, to: PointF, style: &StrokeStyle) -> bool {
        let Some(surface) = self.backing.as_mut() else { return false };
        surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &style.to_paint());
        true
    }

    /// Erase every physical pixel, ignoring the scale transform.
    pub fn clear(&mut self) {
        if let Some(surface) = self.backing.as_mut() {
            surface.canvas().clear(skia::Color::TRANSPARENT);
        }
    }

    /// Copy the full-resolution contents into an offscreen surface and encode it as PNG.
    pub fn export_png(&mut self) -> Result<ExportedImage> {
        let size = self.physical;
        let surface = self.backing.as_mut().ok_or(SketchError::EmptySurface)?;
        let snapshot = surface.image_snapshot();

        let mut offscreen = allocate(size)?;
        let canvas = offscreen.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.draw_image(&snapshot, (0.0, 0.0), Some(&copy_paint()));

        let image = offscreen.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SketchError::Encode)?;
        log::debug!("exported {}x{} drawing ({} bytes)", size.width, size.height, data.as_bytes().len());
        Ok(ExportedImage { file_name: EXPORT_FILE_NAME, bytes: data.as_bytes().to_vec() })
    }

    /// Read the backing buffer as unpremultiplied RGBA8, row-major, no padding.
    /// Returns (pixels, width, height); an unallocated surface yields no pixels.
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32)> {
        let size = self.physical;
        let Some(surface) = self.backing.as_mut() else {
            return Ok((Vec::new(), size.width, size.height));
        };
        read_rgba8(surface, size)
    }
}

pub(crate) fn allocate(size: SizeI) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((size.width, size.height)).ok_or(SketchError::SurfaceAlloc {
        width: size.width,
        height: size.height,
    })
}

pub(crate) fn read_rgba8(surface: &mut skia::Surface, size: SizeI) -> Result<(Vec<u8>, i32, i32)> {
    let info = skia::ImageInfo::new(
        (size.width, size.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = size.width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * size.height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(SketchError::ReadPixels);
    }
    Ok((pixels, size.width, size.height))
}

// Source-copy blending so restored pixels replace rather than composite.
fn copy_paint() -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_blend_mode(skia::BlendMode::Src);
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(w: f32, h: f32, ratio: f32) -> DisplayMetrics {
        DisplayMetrics::new(RectF::from_ltwh(0.0, 0.0, w, h), ratio)
    }

    #[test]
    fn ratio_falls_back_to_one() {
        assert_eq!(metrics(1.0, 1.0, 0.0).ratio(), 1.0);
        assert_eq!(metrics(1.0, 1.0, f32::NAN).ratio(), 1.0);
        assert_eq!(metrics(1.0, 1.0, -2.0).ratio(), 1.0);
        assert_eq!(metrics(1.0, 1.0, 2.0).ratio(), 2.0);
    }

    #[test]
    fn zero_sized_surface_has_no_pixels() {
        let mut s = RasterSurface::new(metrics(0.0, 40.0, 2.0));
        assert!(s.resize_to_display_size().unwrap());
        assert_eq!(s.physical_size(), SizeI::new(0, 80));
        assert!(s.physical_size().is_empty());
        assert!(!s.resize_to_display_size().unwrap());
        assert!(!s.stroke_segment(PointF::new(0.0, 0.0), PointF::new(1.0, 1.0), &StrokeStyle::default()));
        assert!(matches!(s.export_png(), Err(SketchError::EmptySurface)));
    }

    #[test]
    fn ratio_change_at_same_pixel_size_rescales() {
        let mut s = RasterSurface::new(metrics(100.0, 50.0, 2.0));
        assert!(s.resize_to_display_size().unwrap());
        s.set_metrics(metrics(200.0, 100.0, 1.0));
        assert!(!s.resize_to_display_size().unwrap());
        assert_eq!(s.physical_size(), SizeI::new(200, 100));

        let style = StrokeStyle::default();
        assert!(s.stroke_segment(PointF::new(150.0, 80.0), PointF::new(190.0, 80.0), &style));
        let (px, w, _) = s.read_rgba8().unwrap();
        let alpha = |x: usize, y: usize| px[(y * w as usize + x) * 4 + 3];
        assert_eq!(alpha(170, 80), 255);
        assert_eq!(alpha(75, 40), 0);
    }

    #[test]
    fn data_uri_prefix() {
        let img = ExportedImage { file_name: EXPORT_FILE_NAME, bytes: vec![1, 2, 3] };
        assert_eq!(img.data_uri(), "data:image/png;base64,AQID");
    }
}
