// File: crates/sketch-core/src/stroke.rs
// Summary: Stroke style model plus lenient parsing of the color and width controls.

use skia_safe as skia;

use crate::types::DEFAULT_STROKE_WIDTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: skia::Color,
    pub width: u32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: skia::Color::BLACK,
            width: DEFAULT_STROKE_WIDTH,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

impl StrokeStyle {
    /// Apply the raw control values. An unparseable color keeps the current one,
    /// a bad width falls back to the default. Cap and join are always round.
    pub fn configure(&mut self, color: &str, width_input: &str) {
        match parse_color(color) {
            Some(c) => self.color = c,
            None => log::debug!("ignoring unparseable stroke color {color:?}"),
        }
        self.width = parse_width(width_input);
        self.cap = LineCap::Round;
        self.join = LineJoin::Round;
    }

    /// Build the Skia paint used for one committed segment.
    pub fn to_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_color(self.color);
        paint.set_stroke_width(self.width as f32);
        paint.set_stroke_cap(match self.cap {
            LineCap::Butt => skia::paint::Cap::Butt,
            LineCap::Round => skia::paint::Cap::Round,
            LineCap::Square => skia::paint::Cap::Square,
        });
        paint.set_stroke_join(match self.join {
            LineJoin::Miter => skia::paint::Join::Miter,
            LineJoin::Round => skia::paint::Join::Round,
            LineJoin::Bevel => skia::paint::Join::Bevel,
        });
        paint
    }
}

/// Integer parse with `parseInt` leniency: leading whitespace, an optional sign,
/// then leading digits; trailing text is ignored. Anything that does not yield a
/// positive integer maps to the default width.
pub fn parse_width(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits == 0 {
        return DEFAULT_STROKE_WIDTH;
    }
    match rest[..digits].parse::<u32>() {
        Ok(w) if w > 0 => w,
        _ => DEFAULT_STROKE_WIDTH,
    }
}

/// Parse a CSS-style color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, or a common name.
pub fn parse_color(input: &str) -> Option<skia::Color> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let name = s.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, rgba)| {
            let [r, g, b, a] = rgba.to_be_bytes();
            skia::Color::from_argb(a, r, g, b)
        })
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        3 => (nib(0)?, nib(1)?, nib(2)?, 255),
        4 => (nib(0)?, nib(1)?, nib(2)?, nib(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(skia::Color::from_argb(a, r, g, b))
}

// RGBA packed big-endian.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000ff),
    ("white", 0xffffffff),
    ("red", 0xff0000ff),
    ("green", 0x008000ff),
    ("lime", 0x00ff00ff),
    ("blue", 0x0000ffff),
    ("yellow", 0xffff00ff),
    ("orange", 0xffa500ff),
    ("purple", 0x800080ff),
    ("magenta", 0xff00ffff),
    ("cyan", 0x00ffffff),
    ("gray", 0x808080ff),
    ("grey", 0x808080ff),
    ("brown", 0xa52a2aff),
    ("pink", 0xffc0cbff),
    ("navy", 0x000080ff),
    ("teal", 0x008080ff),
    ("transparent", 0x00000000),
];
