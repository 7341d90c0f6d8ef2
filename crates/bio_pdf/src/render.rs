//! Paints a [`Layout`] into a PDF document.
//!
//! The painter is deliberately thin: all sequencing and position decisions
//! happen in [`crate::layout`], and this module just replays the draw ops
//! with `printpdf` using the built-in Helvetica family. The whole document is
//! buffered in memory; nothing touches the filesystem here.

use std::io::BufWriter;

use chrono::NaiveDate;
use log::debug;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};

use crate::error::Error;
use crate::layout::{lay_out, Layout, Op, FALLBACK_TITLE, PAGE_HEIGHT, PAGE_WIDTH};
use crate::profile::ProfileRecord;
use crate::style::{FontWeight, Rgb};

const MM_PER_PT: f64 = 25.4 / 72.0;
const CONTENT_LAYER: &str = "content";

/// A fully constructed PDF, ready to be written in one piece.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
}

/// Renders `record` into a complete PDF dated `generated_on`.
///
/// The record is only read. For a fixed record and date the laid-out content
/// is byte-for-byte reproducible; only the PDF container metadata (creation
/// timestamps, document id) varies between runs.
pub fn render(record: &ProfileRecord, generated_on: NaiveDate) -> Result<RenderedPdf, Error> {
    let layout = lay_out(record, generated_on);
    paint(&layout)
}

fn paint(layout: &Layout) -> Result<RenderedPdf, Error> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        FALLBACK_TITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        CONTENT_LAYER,
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(backend)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(backend)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), CONTENT_LAYER);
            doc.get_page(page_index).get_layer(layer_index)
        };
        for op in &page.ops {
            paint_op(&layer, op, &regular, &bold);
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(backend)?;
    let bytes = writer.into_inner().map_err(backend)?;

    debug!(
        "painted {} page(s) into {} bytes",
        layout.page_count(),
        bytes.len()
    );
    Ok(RenderedPdf { bytes })
}

fn paint_op(layer: &PdfLayerReference, op: &Op, regular: &IndirectFontRef, bold: &IndirectFontRef) {
    match op {
        Op::Text {
            x,
            y,
            content,
            style,
        } => {
            let font = match style.weight {
                FontWeight::Regular => regular,
                FontWeight::Bold => bold,
            };
            layer.set_fill_color(pdf_color(style.color));
            layer.use_text(
                content.clone(),
                style.size,
                Mm(*x),
                Mm(PAGE_HEIGHT - y),
                font,
            );
        }
        Op::Rule {
            x,
            y,
            width,
            thickness,
            color,
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(thickness / MM_PER_PT);
            layer.add_shape(Line {
                points: vec![
                    (Point::new(Mm(*x), Mm(PAGE_HEIGHT - y)), false),
                    (Point::new(Mm(x + width), Mm(PAGE_HEIGHT - y)), false),
                ],
                is_closed: false,
                has_fill: false,
                has_stroke: true,
                is_clipping_path: false,
            });
        }
        Op::Band {
            x,
            y,
            width,
            height,
            color,
        } => {
            // `y` is the band's top edge in page-top coordinates.
            let top = PAGE_HEIGHT - y;
            let bottom = top - height;
            layer.set_fill_color(pdf_color(*color));
            layer.add_shape(Line {
                points: vec![
                    (Point::new(Mm(*x), Mm(top)), false),
                    (Point::new(Mm(x + width), Mm(top)), false),
                    (Point::new(Mm(x + width), Mm(bottom)), false),
                    (Point::new(Mm(*x), Mm(bottom)), false),
                ],
                is_closed: true,
                has_fill: true,
                has_stroke: false,
                is_clipping_path: false,
            });
        }
    }
}

fn pdf_color(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
        None,
    ))
}

fn backend(err: impl std::fmt::Display) -> Error {
    Error::Pdf(err.to_string())
}
