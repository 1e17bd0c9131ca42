// File: crates/demo/src/main.rs
// Summary: Demo renders the bar chart to SVG/PNG (optionally from a label,value CSV) and replays a scripted drawing to drawing.png.

use anyhow::{Context, Result};
use sketch_core::theme;
use sketch_core::{
    BarChart, ChartDatum, DisplayMetrics, PointerEvent, RasterSurface, RectF, RenderOptions, StrokeRenderer,
};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Args: [data.csv|-] [theme]
    let mut args = std::env::args().skip(1);
    let data_arg = args.next().filter(|a| a != "-");
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));

    let chart = match data_arg {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let data = load_chart_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            log::info!("Loaded {} rows from {}", data.len(), path.display());
            BarChart::new(data)
        }
        None => {
            log::info!("No dataset given; using built-in monthly sales");
            BarChart::monthly_sales()
        }
    };
    if chart.data.is_empty() {
        log::warn!("dataset is empty; chart output will be blank");
    }

    let out_dir = out_dir();

    // 1) Vector chart
    let out_svg = out_dir.join("chart.svg");
    std::fs::write(&out_svg, chart.to_svg_document(&theme))
        .with_context(|| format!("writing {}", out_svg.display()))?;
    log::info!("Wrote {}", out_svg.display());

    // 2) Raster chart at 2x
    let mut opts = RenderOptions::default();
    opts.theme = theme;
    opts.width *= 2;
    opts.height *= 2;
    let out_png = out_dir.join("chart.png");
    chart.render_to_png(&opts, &out_png)?;
    log::info!("Wrote {}", out_png.display());

    // 3) Scripted drawing
    let drawing = replay_drawing(&theme)?;
    let out_drawing = out_dir.join(drawing.file_name);
    std::fs::write(&out_drawing, &drawing.bytes)
        .with_context(|| format!("writing {}", out_drawing.display()))?;
    log::info!("Wrote {} ({} bytes)", out_drawing.display(), drawing.bytes.len());

    Ok(())
}

/// Drive the stroke pad the way a host page would: startup resize, pointer
/// gestures in client coordinates, a style change, a window resize mid-session.
fn replay_drawing(theme: &theme::Theme) -> Result<sketch_core::ExportedImage> {
    let origin = (40.0, 120.0);
    let metrics = DisplayMetrics::new(RectF::from_ltwh(origin.0, origin.1, 480.0, 270.0), 2.0);
    let mut pad = StrokeRenderer::new(RasterSurface::new(metrics));
    pad.resize_to_display_size()?;

    let color = theme::hex(theme.palette[5]);
    pad.configure_style(&color, "6");
    pad.handle_pointer(PointerEvent::Down { x: origin.0 + 40.0, y: origin.1 + 200.0 });
    for i in 1..=60 {
        let t = i as f32 / 60.0;
        let x = origin.0 + 40.0 + t * 400.0;
        let y = origin.1 + 200.0 - (t * std::f32::consts::PI * 3.0).sin().abs() * 150.0;
        pad.handle_pointer(PointerEvent::Move { x, y });
    }
    pad.handle_pointer(PointerEvent::Up);

    // Window grows: content stays at the top-left.
    pad.surface_mut().set_metrics(DisplayMetrics::new(RectF::from_ltwh(origin.0, origin.1, 560.0, 300.0), 2.0));
    pad.resize_to_display_size()?;

    pad.configure_style(&theme::hex(theme.palette[1]), "12px");
    pad.handle_pointer(PointerEvent::Down { x: origin.0 + 500.0, y: origin.1 + 40.0 });
    pad.handle_pointer(PointerEvent::Move { x: origin.0 + 520.0, y: origin.1 + 260.0 });
    pad.handle_pointer(PointerEvent::Up);

    Ok(pad.export_surface()?)
}

fn out_dir() -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out
}

/// Load a `label,value` CSV into chart data. Rows whose value does not parse are skipped.
fn load_chart_csv(path: &Path) -> Result<Vec<ChartDatum>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_label = idx(&["label", "name", "category", "month"]).unwrap_or(0);
    let i_value = idx(&["value", "amount", "count", "sales"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(i_label).unwrap_or_default();
        match rec.get(i_value).and_then(|s| s.parse::<f64>().ok()) {
            Some(v) => out.push(ChartDatum::new(label, v)),
            None => log::warn!("row {}: skipping unparseable value", row + 1),
        }
    }
    Ok(out)
}
