// File: crates/sketch-core/src/svg.rs
// Summary: Retained vector container (SVG node tree) and the bar chart materializer.

use std::fmt::{self, Write as _};

use crate::bar_chart::{compute_chart_layout, ChartDatum, DrawCommand};
use crate::theme::Theme;
use crate::types::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct SvgNode {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<SvgNode>,
}

impl SvgNode {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), text: None, children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get("class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Depth-first visit of this node and its descendants.
    pub fn walk<'a>(&'a self, out: &mut Vec<&'a SvgNode>) {
        out.push(self);
        for c in &self.children {
            c.walk(out);
        }
    }

    fn write_to(&self, out: &mut String, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(out, "{pad}<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(out, " {name}=\"{}\"", escape(value))?;
        }
        match (&self.text, self.children.is_empty()) {
            (None, true) => writeln!(out, "/>"),
            (Some(text), true) => writeln!(out, ">{}</{}>", escape(text), self.tag),
            (text, false) => {
                writeln!(out, ">")?;
                if let Some(t) = text {
                    writeln!(out, "{pad}  {}", escape(t))?;
                }
                for c in &self.children {
                    c.write_to(out, depth + 1)?;
                }
                writeln!(out, "{pad}</{}>", self.tag)
            }
        }
    }
}

/// Vector render target with a fixed logical `viewBox`. The displayed size is the
/// host's concern; content is always laid out in viewport units.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorContainer {
    viewport: Viewport,
    stylesheet: Option<String>,
    children: Vec<SvgNode>,
}

impl VectorContainer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, stylesheet: None, children: Vec::new() }
    }

    /// Attach CSS emitted in the document's `<style>` block. Owned by the container,
    /// untouched by renders.
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self
    }

    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn children(&self) -> &[SvgNode] { &self.children }
    pub fn child_count(&self) -> usize { self.children.len() }
    pub fn clear(&mut self) { self.children.clear(); }
    pub fn append(&mut self, node: SvgNode) { self.children.push(node); }

    /// All descendant nodes, depth-first.
    pub fn descendants(&self) -> Vec<&SvgNode> {
        let mut out = Vec::new();
        for c in &self.children {
            c.walk(&mut out);
        }
        out
    }

    /// Descendants with the given tag name.
    pub fn find_all(&self, tag: &str) -> Vec<&SvgNode> {
        self.descendants().into_iter().filter(|n| n.tag == tag).collect()
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_document(&mut out);
        out
    }

    fn write_document(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">",
            self.viewport.width, self.viewport.height
        )?;
        if let Some(css) = &self.stylesheet {
            writeln!(out, "  <style>{}</style>", escape(css))?;
        }
        for c in &self.children {
            c.write_to(out, 1)?;
        }
        writeln!(out, "</svg>")
    }
}

/// Redraw `data` into `container` from scratch with the default theme.
pub fn render(container: &mut VectorContainer, data: &[ChartDatum]) {
    render_with_theme(container, data, &Theme::light());
}

/// Clear `container` and materialize the chart's draw commands into one group
/// translated by the plot margins. An empty dataset leaves the container empty.
pub fn render_with_theme(container: &mut VectorContainer, data: &[ChartDatum], theme: &Theme) {
    container.clear();
    let Some((layout, commands)) = compute_chart_layout(data, &container.viewport) else {
        log::debug!("chart: empty dataset, nothing to render");
        return;
    };
    let (tx, ty) = layout.translate();
    let mut group = SvgNode::new("g").attr("transform", format!("translate({tx},{ty})"));
    let grid = theme.grid_hex();
    group.children = commands.iter().map(|c| materialize(c, &grid)).collect();
    container.append(group);
    log::debug!("chart: rendered {} bars", data.len());
}

fn materialize(cmd: &DrawCommand, grid_stroke: &str) -> SvgNode {
    match cmd {
        DrawCommand::GridLine { x1, y1, x2, y2 } => SvgNode::new("line")
            .attr("x1", x1)
            .attr("x2", x2)
            .attr("y1", y1)
            .attr("y2", y2)
            .attr("stroke", grid_stroke),
        DrawCommand::TickLabel { x, y, anchor, text } => SvgNode::new("text")
            .attr("x", x)
            .attr("y", y)
            .attr("text-anchor", anchor.as_str())
            .attr("class", "axis")
            .text(text.as_str()),
        DrawCommand::Bar { x, y, width, height, .. } => SvgNode::new("rect")
            .attr("x", x)
            .attr("y", y)
            .attr("width", width)
            .attr("height", height)
            .attr("class", "bar"),
        DrawCommand::BarLabel { x, y, anchor, text } => SvgNode::new("text")
            .attr("x", x)
            .attr("y", y)
            .attr("text-anchor", anchor.as_str())
            .attr("class", "bar-label")
            .text(text.as_str()),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
