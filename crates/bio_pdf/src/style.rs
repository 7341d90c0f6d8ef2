//! Declarative styling for layout blocks.
//!
//! The original implementation mutated a shared drawing context (set font,
//! set color, draw, restore). Here every block carries a [`BlockStyle`] value
//! and the painter consumes it through a single text primitive, so "what to
//! draw" never depends on earlier state mutation.

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Font weight; the painter maps this onto the Helvetica built-in family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Style descriptor for one block of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockStyle {
    /// Font size in points.
    pub size: f64,
    pub weight: FontWeight,
    pub color: Rgb,
    /// Extra left indent in millimetres, relative to the content margin.
    pub indent: f64,
}

impl BlockStyle {
    /// Line height in millimetres for wrapped text at this size.
    pub fn line_height(&self) -> f64 {
        self.size * LINE_HEIGHT_FACTOR
    }
}

/// Millimetres of line height per point of font size.
const LINE_HEIGHT_FACTOR: f64 = 0.4;

/// Near-black used for primary text.
pub const INK: Rgb = Rgb::new(33, 37, 41);
/// Accent blue used for header bars.
pub const ACCENT: Rgb = Rgb::new(36, 92, 160);
/// Gray used for the footer line.
pub const MUTED: Rgb = Rgb::new(128, 128, 128);
/// Light band painted behind section headers.
pub const HEADER_BAND: Rgb = Rgb::new(234, 238, 243);
/// Thin divider rules between reflection entries.
pub const DIVIDER: Rgb = Rgb::new(210, 214, 219);

/// Document title (the full name or the fallback title).
pub const TITLE: BlockStyle = BlockStyle {
    size: 20.0,
    weight: FontWeight::Bold,
    color: INK,
    indent: 0.0,
};

/// Section headers.
pub const SECTION_HEADER: BlockStyle = BlockStyle {
    size: 14.0,
    weight: FontWeight::Bold,
    color: INK,
    indent: 0.0,
};

/// Regular body paragraphs.
pub const BODY: BlockStyle = BlockStyle {
    size: 11.0,
    weight: FontWeight::Regular,
    color: INK,
    indent: 0.0,
};

/// Indented bullet entries in the mobility sub-lists.
pub const BULLET: BlockStyle = BlockStyle {
    size: 11.0,
    weight: FontWeight::Regular,
    color: INK,
    indent: 4.0,
};

/// Reflection question labels.
pub const QUESTION_LABEL: BlockStyle = BlockStyle {
    size: 11.0,
    weight: FontWeight::Bold,
    color: INK,
    indent: 0.0,
};

/// Reflection question answers.
pub const QUESTION_ANSWER: BlockStyle = BlockStyle {
    size: 10.0,
    weight: FontWeight::Regular,
    color: INK,
    indent: 0.0,
};

/// Page footers.
pub const FOOTER: BlockStyle = BlockStyle {
    size: 8.0,
    weight: FontWeight::Regular,
    color: MUTED,
    indent: 0.0,
};
