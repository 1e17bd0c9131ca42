// File: crates/sketch-core/tests/chart.rs
// Purpose: Bar chart rendering into a vector container: proportions, order, idempotence, empty data.

use sketch_core::{render, ChartDatum, SvgNode, VectorContainer, Viewport};

fn attr_f64(n: &SvgNode, name: &str) -> f64 {
    n.get(name).and_then(|v| v.parse().ok()).unwrap_or_else(|| panic!("missing numeric {name}"))
}

fn abc() -> Vec<ChartDatum> {
    vec![ChartDatum::new("A", 10.0), ChartDatum::new("B", 20.0), ChartDatum::new("C", 5.0)]
}

#[test]
fn bar_heights_scale_linearly_in_input_order() {
    let mut svg = VectorContainer::new(Viewport::default());
    render(&mut svg, &abc());

    let rects = svg.find_all("rect");
    assert_eq!(rects.len(), 3);
    let h: Vec<f64> = rects.iter().map(|r| attr_f64(r, "height")).collect();
    assert!((h[1] - 2.0 * h[0]).abs() < 1e-9);
    assert!((h[1] - 4.0 * h[2]).abs() < 1e-9);

    let x: Vec<f64> = rects.iter().map(|r| attr_f64(r, "x")).collect();
    assert!(x[0] < x[1] && x[1] < x[2]);

    let labels: Vec<&str> = svg
        .descendants()
        .into_iter()
        .filter(|n| n.has_class("bar-label"))
        .filter_map(|n| n.text.as_deref())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn bars_are_bottom_aligned_inside_translated_group() {
    let mut svg = VectorContainer::new(Viewport::default());
    render(&mut svg, &abc());

    assert_eq!(svg.child_count(), 1);
    let g = &svg.children()[0];
    assert_eq!(g.tag, "g");
    assert_eq!(g.get("transform"), Some("translate(50,20)"));
    for r in svg.find_all("rect") {
        let bottom = attr_f64(r, "y") + attr_f64(r, "height");
        assert!((bottom - 330.0).abs() < 1e-9);
        assert!(r.has_class("bar"));
    }
}

#[test]
fn grid_lines_and_tick_labels() {
    let mut svg = VectorContainer::new(Viewport::default());
    render(&mut svg, &abc());

    let lines = svg.find_all("line");
    assert_eq!(lines.len(), 6);
    for l in &lines {
        assert_eq!(l.get("stroke"), Some("#eef2fb"));
        assert_eq!(attr_f64(l, "x1"), 0.0);
        assert_eq!(attr_f64(l, "x2"), 730.0);
    }
    let ticks: Vec<&str> = svg
        .descendants()
        .into_iter()
        .filter(|n| n.has_class("axis"))
        .filter_map(|n| n.text.as_deref())
        .collect();
    assert_eq!(ticks, vec!["0", "4", "8", "12", "16", "20"]);
    assert!(svg.descendants().iter().filter(|n| n.has_class("axis")).all(|n| n.get("text-anchor") == Some("end")));
}

#[test]
fn rendering_twice_is_identical() {
    let mut svg = VectorContainer::new(Viewport::default());
    render(&mut svg, &abc());
    let first = svg.clone();
    let first_count = svg.descendants().len();

    render(&mut svg, &abc());
    assert_eq!(svg.child_count(), 1);
    assert_eq!(svg.descendants().len(), first_count);
    assert_eq!(svg, first);
    assert_eq!(svg.to_svg_string(), first.to_svg_string());
}

#[test]
fn empty_dataset_renders_nothing() {
    let mut svg = VectorContainer::new(Viewport::default());
    render(&mut svg, &abc());
    render(&mut svg, &[]);

    assert_eq!(svg.child_count(), 0);
    assert!(svg.find_all("rect").is_empty());
    assert!(svg.find_all("line").is_empty());
    let doc = svg.to_svg_string();
    assert!(!doc.contains("NaN") && !doc.contains("inf"));
}

#[test]
fn monthly_sales_document() {
    let chart = sketch_core::BarChart::monthly_sales();
    let doc = chart.to_svg_document(&sketch_core::Theme::light());
    assert!(doc.contains("viewBox=\"0 0 800 400\""));
    assert!(doc.contains("<style>"));
    assert!(doc.contains(">Iyun</text>"));
    assert!(doc.contains(">220</text>"));
}
