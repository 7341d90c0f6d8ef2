//! Paginated layout of a [`ProfileRecord`] into draw ops.
//!
//! This is the core of the crate. An explicit [`Cursor`] (page index plus
//! vertical offset from the page top, in millimetres) is threaded through
//! every step; it only ever advances, except when a page break resets it to
//! the top offset. The output is a list of pages holding positioned draw ops,
//! which keeps the layout fully inspectable in tests and leaves the actual
//! painting to [`crate::render`].
//!
//! Empty fields are skipped outright: no placeholder text, no orphaned
//! section headers. Once all content is placed the total page count is known
//! and a final pass stamps the footer onto every page.

use chrono::NaiveDate;
use log::debug;

use crate::metrics::{text_width, wrap};
use crate::profile::{MobilityPreferences, ProfileRecord};
use crate::style::{
    BlockStyle, Rgb, ACCENT, BODY, BULLET, DIVIDER, FOOTER, HEADER_BAND, QUESTION_ANSWER,
    QUESTION_LABEL, SECTION_HEADER, TITLE,
};

/// A4 portrait page width in millimetres.
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 portrait page height in millimetres.
pub const PAGE_HEIGHT: f64 = 297.0;
/// Left and right page margin.
pub const MARGIN: f64 = 20.0;
/// Width available to content between the margins.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
/// Vertical offset of the first baseline on every page.
pub const TOP_OFFSET: f64 = 20.0;
/// Baseline of the footer line.
pub const FOOTER_Y: f64 = PAGE_HEIGHT - 20.0;

/// Title shown when the profile has no name.
pub const FALLBACK_TITLE: &str = "Bio & Career Information";

const CONFIDENTIALITY_NOTICE: &str = "Confidential - for career development use only";

// A section header started below this offset would sit too close to the page
// bottom, so it moves to a fresh page instead.
const SECTION_BREAK_AT: f64 = 200.0;
// Individual reflection entries are short, so they tolerate a later break.
const ENTRY_BREAK_AT: f64 = 230.0;
// Body lines must never run into the footer region.
const BODY_LIMIT: f64 = 270.0;

const TITLE_ADVANCE: f64 = 15.0;
const HEADER_ADVANCE: f64 = 8.0;
const BLOCK_GAP: f64 = 5.0;
const SECTION_GAP: f64 = 5.0;
const LOCATION_EXTRA_GAP: f64 = 8.0;
const ENTRY_GAP: f64 = 3.0;
const LEAD_IN_GAP: f64 = 1.5;
const BULLET_GAP: f64 = 1.0;

const HEADER_BAND_RISE: f64 = 5.8;
const HEADER_BAND_HEIGHT: f64 = 8.0;
const HEADER_BAND_BLEED: f64 = 2.0;
const ACCENT_BAR_X: f64 = MARGIN - 4.0;
const ACCENT_BAR_WIDTH: f64 = 1.8;
const DIVIDER_RISE: f64 = 2.5;
const DIVIDER_THICKNESS: f64 = 0.2;

/// One positioned drawing instruction. Coordinates are millimetres from the
/// top-left page corner; text positions refer to the baseline start.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Text {
        x: f64,
        y: f64,
        content: String,
        style: BlockStyle,
    },
    Rule {
        x: f64,
        y: f64,
        width: f64,
        thickness: f64,
        color: Rgb,
    },
    Band {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    },
}

/// Draw ops for a single page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

impl Page {
    /// All text content on the page, one op per line.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            if let Op::Text { content, .. } = op {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(content);
            }
        }
        out
    }
}

/// The fully laid out document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub pages: Vec<Page>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text content across all pages, in emission order.
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .map(Page::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Current write position: page index and vertical offset from the page top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: f64,
}

struct Engine {
    pages: Vec<Page>,
    cursor: Cursor,
}

impl Engine {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cursor: Cursor {
                page: 0,
                y: TOP_OFFSET,
            },
        }
    }

    fn page(&mut self) -> &mut Page {
        &mut self.pages[self.cursor.page]
    }

    fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor.page += 1;
        self.cursor.y = TOP_OFFSET;
    }

    /// Starts a new page if the cursor has passed `limit`. Returns whether a
    /// break occurred.
    fn ensure_room(&mut self, limit: f64) -> bool {
        if self.cursor.y > limit {
            self.break_page();
            true
        } else {
            false
        }
    }

    /// Emits one line of text at the cursor without advancing it.
    fn text_at_cursor(&mut self, content: impl Into<String>, style: BlockStyle) {
        let x = MARGIN + style.indent;
        let y = self.cursor.y;
        self.page().ops.push(Op::Text {
            x,
            y,
            content: content.into(),
            style,
        });
    }

    /// Wraps `text` to the content width and emits it line by line, breaking
    /// to a new page whenever a line would enter the footer region. Advances
    /// the cursor past the text plus `gap`.
    fn paragraph_with_gap(&mut self, text: &str, style: BlockStyle, gap: f64) {
        let line_height = style.line_height();
        for line in wrap(text, &style, CONTENT_WIDTH - style.indent) {
            self.ensure_room(BODY_LIMIT);
            if !line.is_empty() {
                self.text_at_cursor(line, style);
            }
            self.cursor.y += line_height;
        }
        self.cursor.y += gap;
    }

    fn paragraph(&mut self, text: &str, style: BlockStyle) {
        self.paragraph_with_gap(text, style, BLOCK_GAP);
    }

    /// Emits a section header with its background band and accent bar, then
    /// advances the cursor by the fixed header height.
    fn section_header(&mut self, title: &str) {
        self.ensure_room(SECTION_BREAK_AT);
        let y = self.cursor.y;
        self.page().ops.push(Op::Band {
            x: MARGIN - HEADER_BAND_BLEED,
            y: y - HEADER_BAND_RISE,
            width: CONTENT_WIDTH + 2.0 * HEADER_BAND_BLEED,
            height: HEADER_BAND_HEIGHT,
            color: HEADER_BAND,
        });
        self.page().ops.push(Op::Band {
            x: ACCENT_BAR_X,
            y: y - HEADER_BAND_RISE,
            width: ACCENT_BAR_WIDTH,
            height: HEADER_BAND_HEIGHT,
            color: ACCENT,
        });
        self.text_at_cursor(title, SECTION_HEADER);
        self.cursor.y += HEADER_ADVANCE;
    }

    /// Emits a header plus wrapped body, or nothing when the body is empty.
    fn text_section(&mut self, title: &str, body: &str) {
        if body.is_empty() {
            return;
        }
        self.section_header(title);
        self.paragraph(body, BODY);
        self.cursor.y += SECTION_GAP;
    }

    fn bullet(&mut self, label: &str) {
        self.paragraph_with_gap(&format!("\u{2022} {label}"), BULLET, BULLET_GAP);
    }

    fn mobility_section(&mut self, mobility: &MobilityPreferences) {
        if !mobility.any() {
            return;
        }
        self.section_header("Willingness & Flexibility");

        if mobility.any_move() {
            self.paragraph_with_gap("Willing to move:", BODY, LEAD_IN_GAP);
            let moves = [
                (mobility.same_department, "Within the same department"),
                (mobility.same_company, "Within the same company"),
                (mobility.same_business_unit, "Within the same business unit"),
                (mobility.all_areas, "Across all areas of the company"),
            ];
            for (set, label) in moves {
                if set {
                    self.bullet(label);
                }
            }
        }

        if mobility.any_flexibility() {
            self.paragraph_with_gap("Additional flexibility:", BODY, LEAD_IN_GAP);
            let extras = [
                (
                    mobility.geography_outside_home,
                    "Take responsibility outside the home country",
                ),
                (mobility.relocate, "Relocate"),
                (mobility.travel, "Willing to travel"),
            ];
            for (set, label) in extras {
                if set {
                    self.bullet(label);
                }
            }
        }

        self.cursor.y += SECTION_GAP;
    }

    fn reflection_section(&mut self, record: &ProfileRecord) {
        if !record.has_reflection_answers() {
            return;
        }
        self.section_header("Career Reflection Questions");

        let mut first = true;
        for (label, answer) in record.reflection_entries() {
            if answer.is_empty() {
                continue;
            }
            let broke = self.ensure_room(ENTRY_BREAK_AT);
            if !first && !broke {
                let y = self.cursor.y - DIVIDER_RISE;
                self.page().ops.push(Op::Rule {
                    x: MARGIN,
                    y,
                    width: CONTENT_WIDTH,
                    thickness: DIVIDER_THICKNESS,
                    color: DIVIDER,
                });
            }
            self.paragraph(&format!("{label}:"), QUESTION_LABEL);
            self.paragraph(answer, QUESTION_ANSWER);
            self.cursor.y += ENTRY_GAP;
            first = false;
        }
    }

    /// Stamps the footer onto every page once the total page count is known.
    fn footer_pass(&mut self, generated_on: NaiveDate) {
        let total = self.pages.len();
        let date_text = format!("Generated on {}", generated_on.format("%Y-%m-%d"));
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.ops.push(Op::Text {
                x: MARGIN,
                y: FOOTER_Y,
                content: date_text.clone(),
                style: FOOTER,
            });

            let pagination = format!("Page {} of {}", index + 1, total);
            let width = text_width(&pagination, FOOTER.size, FOOTER.weight);
            page.ops.push(Op::Text {
                x: MARGIN + (CONTENT_WIDTH - width) / 2.0,
                y: FOOTER_Y,
                content: pagination,
                style: FOOTER,
            });

            let notice_width =
                text_width(CONFIDENTIALITY_NOTICE, FOOTER.size, FOOTER.weight);
            page.ops.push(Op::Text {
                x: PAGE_WIDTH - MARGIN - notice_width,
                y: FOOTER_Y,
                content: CONFIDENTIALITY_NOTICE.to_owned(),
                style: FOOTER,
            });
        }
    }
}

/// Lays out the full document for `record`, dated `generated_on`.
///
/// Section order is fixed and matches the input form. The record is only
/// read; for a given record and date the result is fully deterministic.
pub fn lay_out(record: &ProfileRecord, generated_on: NaiveDate) -> Layout {
    let mut engine = Engine::new();

    let name = record.full_name.trim();
    let title = if name.is_empty() { FALLBACK_TITLE } else { name };
    engine.text_at_cursor(title, TITLE);
    engine.cursor.y += TITLE_ADVANCE;

    if !record.location.is_empty() {
        engine.paragraph(&format!("Country: {}", record.location), BODY);
        engine.cursor.y += LOCATION_EXTRA_GAP;
    }

    engine.text_section("Education", &record.education);
    engine.text_section("Career with Us", &record.career_with_us);
    engine.text_section(
        "Professional Affiliations",
        &record.professional_affiliations,
    );
    engine.text_section("Languages", &record.languages);
    engine.mobility_section(&record.willingness);
    engine.text_section(
        "Current Responsibilities",
        &record.current_responsibilities,
    );
    engine.text_section("Top 3 Skills Enjoyed in Role", &record.top_skills_enjoy);
    engine.reflection_section(record);

    engine.footer_pass(generated_on);

    debug!(
        "laid out profile into {} page(s), {} op(s)",
        engine.pages.len(),
        engine.pages.iter().map(|page| page.ops.len()).sum::<usize>()
    );

    Layout {
        pages: engine.pages,
    }
}

#[cfg(test)]
mod tests {
    use super::{lay_out, Op, BODY_LIMIT, FALLBACK_TITLE, FOOTER_Y, TOP_OFFSET};
    use crate::profile::{MobilityPreferences, ProfileRecord};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).expect("valid date")
    }

    fn filled_record() -> ProfileRecord {
        ProfileRecord {
            full_name: "Jane O'Brien".into(),
            location: "Ireland".into(),
            education: "BSc Computer Science, Trinity College".into(),
            career_with_us: "Joined 2018 as engineer, promoted to senior in 2021.".into(),
            professional_affiliations: "IEEE member".into(),
            languages: "English, Irish".into(),
            willingness: MobilityPreferences {
                same_company: true,
                travel: true,
                ..MobilityPreferences::default()
            },
            current_responsibilities: "Leads the billing platform team.".into(),
            top_skills_enjoy: "Mentoring, systems design, incident response".into(),
            top_three_skills_current: "Debugging, writing, planning".into(),
            what_excites_you: "Shipping tools other engineers rely on.".into(),
            challenging_aspects: "Balancing roadmap work with interrupts.".into(),
            skills_to_build_1to3: "Public speaking".into(),
            desired_next_role: "Staff engineer".into(),
            opportunities_needed: "Cross-team architecture work".into(),
            skills_to_build_3to5: "Organizational design".into(),
            long_term_aspirations: "Principal engineer".into(),
            opportunities_for_aspirations: "Broader platform ownership".into(),
        }
    }

    #[test]
    fn empty_record_renders_only_fallback_title_and_footer() {
        let layout = lay_out(&ProfileRecord::default(), date());
        assert_eq!(layout.page_count(), 1);

        let text = layout.text();
        assert!(text.contains(FALLBACK_TITLE));
        assert!(!text.contains("Education"));
        assert!(!text.contains("Willingness & Flexibility"));
        assert!(!text.contains("Career Reflection Questions"));

        // Title plus the three footer fragments.
        let text_ops = layout.pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Text { .. }))
            .count();
        assert_eq!(text_ops, 4);
    }

    #[test]
    fn sections_follow_the_form_order() {
        let layout = lay_out(&filled_record(), date());
        let text = layout.text();
        let positions: Vec<usize> = [
            "Jane O'Brien",
            "Country: Ireland",
            "Education",
            "Career with Us",
            "Professional Affiliations",
            "Languages",
            "Willingness & Flexibility",
            "Current Responsibilities",
            "Top 3 Skills Enjoyed in Role",
            "Career Reflection Questions",
            "Desired next role:",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_non_empty_field_appears_in_the_text() {
        let record = filled_record();
        let layout = lay_out(&record, date());
        let text = layout.text();
        for needle in [
            record.education.as_str(),
            record.career_with_us.as_str(),
            record.professional_affiliations.as_str(),
            record.languages.as_str(),
            record.current_responsibilities.as_str(),
            record.top_skills_enjoy.as_str(),
            record.top_three_skills_current.as_str(),
            record.what_excites_you.as_str(),
            record.challenging_aspects.as_str(),
            record.skills_to_build_1to3.as_str(),
            record.desired_next_role.as_str(),
            record.opportunities_needed.as_str(),
            record.skills_to_build_3to5.as_str(),
            record.long_term_aspirations.as_str(),
            record.opportunities_for_aspirations.as_str(),
        ] {
            assert!(text.contains(needle), "missing field content: {needle}");
        }
    }

    #[test]
    fn single_move_flag_yields_one_sub_list_with_one_bullet() {
        let record = ProfileRecord {
            willingness: MobilityPreferences {
                same_department: true,
                ..MobilityPreferences::default()
            },
            ..ProfileRecord::default()
        };
        let layout = lay_out(&record, date());
        let text = layout.text();

        assert!(text.contains("Willingness & Flexibility"));
        assert!(text.contains("Willing to move:"));
        assert!(text.contains("\u{2022} Within the same department"));
        assert!(!text.contains("Additional flexibility:"));
        assert_eq!(text.matches('\u{2022}').count(), 1);
    }

    #[test]
    fn flexibility_flags_alone_omit_the_move_sub_list() {
        let record = ProfileRecord {
            willingness: MobilityPreferences {
                relocate: true,
                travel: true,
                ..MobilityPreferences::default()
            },
            ..ProfileRecord::default()
        };
        let text = lay_out(&record, date()).text();
        assert!(!text.contains("Willing to move:"));
        assert!(text.contains("Additional flexibility:"));
        assert_eq!(text.matches('\u{2022}').count(), 2);
    }

    #[test]
    fn long_answer_breaks_to_a_new_page_instead_of_entering_the_footer() {
        let record = ProfileRecord {
            long_term_aspirations: "aspiration ".repeat(600),
            ..ProfileRecord::default()
        };
        let layout = lay_out(&record, date());
        assert!(layout.page_count() > 1);

        for page in &layout.pages {
            for op in &page.ops {
                if let Op::Text { y, .. } = op {
                    assert!(
                        *y <= BODY_LIMIT || (*y - FOOTER_Y).abs() < 1e-9,
                        "text op at y={y} overlaps the footer region"
                    );
                }
            }
        }
    }

    #[test]
    fn footer_appears_on_every_page_with_total_count() {
        let record = ProfileRecord {
            education: "education ".repeat(400),
            challenging_aspects: "challenge ".repeat(400),
            ..ProfileRecord::default()
        };
        let layout = lay_out(&record, date());
        let total = layout.page_count();
        assert!(total > 1);

        for (index, page) in layout.pages.iter().enumerate() {
            let text = page.text();
            assert!(text.contains("Generated on 2024-04-01"));
            assert!(text.contains(&format!("Page {} of {}", index + 1, total)));
            assert!(text.contains("Confidential"));
        }
    }

    #[test]
    fn layout_is_deterministic_for_a_fixed_date() {
        let record = filled_record();
        assert_eq!(lay_out(&record, date()), lay_out(&record, date()));
    }

    #[test]
    fn cursor_starts_each_page_at_the_top_offset() {
        let record = ProfileRecord {
            education: "line\n".repeat(300),
            ..ProfileRecord::default()
        };
        let layout = lay_out(&record, date());
        assert!(layout.page_count() > 1);
        for page in &layout.pages[1..] {
            let first_text_y = page.ops.iter().find_map(|op| match op {
                Op::Text { y, .. } => Some(*y),
                _ => None,
            });
            assert_eq!(first_text_y, Some(TOP_OFFSET));
        }
    }
}
