// File: crates/sketch-core/src/lib.rs
// Summary: Core library entry point; exports the stroke pad, raster surface, and bar chart APIs.

pub mod bar_chart;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pad;
pub mod stroke;
pub mod surface;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use skia_safe;

pub use bar_chart::{compute_chart_layout, ChartDatum, ChartLayout, DrawCommand, TextAnchor};
pub use chart::{BarChart, RenderOptions};
pub use error::SketchError;
pub use geometry::{PointF, RectF, SizeI};
pub use pad::{PointerEvent, PointerState, StrokeRenderer};
pub use stroke::StrokeStyle;
pub use surface::{DisplayMetrics, ExportedImage, RasterSurface};
pub use svg::{render, SvgNode, VectorContainer};
pub use theme::Theme;
pub use types::Viewport;
