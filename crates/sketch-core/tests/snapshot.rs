// File: crates/sketch-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for the raster chart and a scripted drawing.
// Behavior:
// - Renders deterministic PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the pixel anchors below still run, so a missing
//   snapshot never turns a test into a no-op.

use sketch_core::{BarChart, DisplayMetrics, RasterSurface, RectF, RenderOptions, StrokeRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn rgba_at(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

#[test]
fn golden_monthly_chart() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let bytes = BarChart::monthly_sales().render_to_png_bytes(&opts).expect("render bytes");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (800, 400));
    let bg = opts.theme.background;
    let bar = opts.theme.bar;
    assert_eq!(rgba_at(&img, 5, 5), [bg.r(), bg.g(), bg.b(), 255]);
    // May (220) is the tallest bar: center column 597, top at the plot top (y = 20).
    assert_eq!(rgba_at(&img, 597, 30), [bar.r(), bar.g(), bar.b(), 255]);
    // Iyun (75) stops well below that height.
    assert_eq!(rgba_at(&img, 719, 100)[..3], [bg.r(), bg.g(), bg.b()]);

    write_or_compare("monthly_chart.png", &bytes);
}

#[test]
fn golden_zigzag_drawing() {
    let metrics = DisplayMetrics::new(RectF::from_ltwh(0.0, 0.0, 160.0, 90.0), 2.0);
    let mut pad = StrokeRenderer::new(RasterSurface::new(metrics));
    pad.resize_to_display_size().expect("resize");
    pad.configure_style("#2563eb", "6");
    pad.begin_stroke(10.0, 80.0);
    for (i, x) in (30..=150).step_by(20).enumerate() {
        let y = if i % 2 == 0 { 10.0 } else { 80.0 };
        pad.extend_stroke(x as f32, y);
    }
    pad.end_stroke();
    let out = pad.export_surface().expect("export");

    let img = image::load_from_memory(&out.bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 180));
    // Midpoint of the first segment (10,80)->(30,10), in physical pixels.
    assert_eq!(rgba_at(&img, 40, 90), [0x25, 0x63, 0xeb, 255]);
    assert_eq!(rgba_at(&img, 2, 2)[3], 0);
    write_or_compare("zigzag_drawing.png", &out.bytes);
}
