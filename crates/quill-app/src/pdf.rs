//! Single-column PDF export. Layout is a pure function from a result to
//! placed lines per page, so the pagination can be tested without touching
//! the PDF writer; rendering then maps those lines onto `printpdf` pages.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use quill_core::GenerationResult;

// A4 geometry, millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const USABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f32 = 0.3528;
// Average glyph advance as a fraction of the font size; close enough for
// the Helvetica/Times faces used here and keeps wrapping deterministic.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;

const TITLE_SIZE: f32 = 22.0;
const TITLE_LINE: f32 = 10.0;
const BODY_SIZE: f32 = 12.0;
const BODY_LINE: f32 = 7.0;
const HEADING_SIZE: f32 = 14.0;
const HEADING_LINE: f32 = 8.0;
const META_SIZE: f32 = 10.0;
const META_LINE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    TitleBold,
    Body,
    Heading,
    SummaryItalic,
    Meta,
}

/// One placed line of text. `y` is the baseline measured downward from the
/// page top.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font: FontRole,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

pub type Page = Vec<PlacedLine>;

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: MARGIN,
        }
    }

    /// Starts a new page and resets the vertical cursor when fewer than
    /// `needed` millimetres remain above the bottom margin.
    fn ensure(&mut self, needed: f32) {
        if self.y + needed > PAGE_HEIGHT - MARGIN {
            self.pages.push(Vec::new());
            self.y = MARGIN;
        }
    }

    fn place(&mut self, text: String, font: FontRole, size: f32, x: f32, advance: f32) {
        self.ensure(advance);
        self.pages.last_mut().unwrap().push(PlacedLine {
            text,
            font,
            size,
            x,
            y: self.y,
        });
        self.y += advance;
    }

    fn gap(&mut self, mm: f32) {
        self.y += mm;
    }
}

fn max_chars(size: f32) -> usize {
    (USABLE_WIDTH / (size * GLYPH_WIDTH_FACTOR * PT_TO_MM)).floor() as usize
}

/// Greedy word wrap to the usable page width, honoring embedded newlines.
/// A word longer than the limit gets a line of its own rather than being
/// split.
pub fn wrap(text: &str, size: f32) -> Vec<String> {
    let limit = max_chars(size).max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut line = String::new();
        for word in raw.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.chars().count() + 1 + word.chars().count() <= limit {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line = word.to_string();
            }
        }
        lines.push(line);
    }

    lines
}

fn centered_x(line: &str, size: f32) -> f32 {
    let width = line.chars().count() as f32 * size * GLYPH_WIDTH_FACTOR * PT_TO_MM;
    ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
}

fn metadata_lines(result: &GenerationResult) -> Vec<String> {
    let meta = &result.metadata;
    vec![
        format!("Type: {}", meta.piece_type.id()),
        format!("Genre: {}", meta.genre.id()),
        format!("Tone: {}", meta.tone.id()),
        format!("Length: {}", meta.word_count.id()),
        format!("Generation Time: {}s", meta.generation_time),
    ]
}

/// Deterministic page layout: centered bold title, body at a fixed line
/// height, summary and metadata sections, each line checked against the
/// remaining space before placement.
pub fn layout(result: &GenerationResult) -> Vec<Page> {
    let mut cursor = Cursor::new();

    for line in wrap(&result.title, TITLE_SIZE) {
        let x = centered_x(&line, TITLE_SIZE);
        cursor.place(line, FontRole::TitleBold, TITLE_SIZE, x, TITLE_LINE);
    }
    cursor.gap(5.0);

    cursor.ensure(20.0);
    for line in wrap(&result.content, BODY_SIZE) {
        cursor.place(line, FontRole::Body, BODY_SIZE, MARGIN, BODY_LINE);
    }
    cursor.gap(10.0);

    cursor.ensure(25.0);
    cursor.place(
        "Summary".to_string(),
        FontRole::Heading,
        HEADING_SIZE,
        MARGIN,
        HEADING_LINE,
    );
    for line in wrap(&result.summary, BODY_SIZE) {
        cursor.place(line, FontRole::SummaryItalic, BODY_SIZE, MARGIN, BODY_LINE);
    }
    cursor.gap(10.0);

    cursor.ensure(30.0);
    cursor.place(
        "Metadata".to_string(),
        FontRole::Heading,
        HEADING_SIZE,
        MARGIN,
        HEADING_LINE,
    );
    for entry in metadata_lines(result) {
        for line in wrap(&entry, META_SIZE) {
            cursor.place(line, FontRole::Meta, META_SIZE, MARGIN, META_LINE);
        }
    }

    cursor.pages
}

/// Renders the laid-out pages to PDF bytes.
pub fn render(result: &GenerationResult) -> anyhow::Result<Vec<u8>> {
    let pages = layout(result);

    let (doc, first_page, first_layer) = PdfDocument::new(
        result.title.clone(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let body = doc.add_builtin_font(BuiltinFont::TimesRoman)?;
    let italic = doc.add_builtin_font(BuiltinFont::TimesItalic)?;
    let plain = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in page {
            if line.text.is_empty() {
                continue;
            }
            let font = match line.font {
                FontRole::TitleBold | FontRole::Heading => &bold,
                FontRole::Body => &body,
                FontRole::SummaryItalic => &italic,
                FontRole::Meta => &plain,
            };
            // printpdf's origin is the bottom-left corner.
            layer.use_text(
                line.text.clone(),
                line.size,
                Mm(line.x),
                Mm(PAGE_HEIGHT - line.y),
                font,
            );
        }
    }

    Ok(doc.save_to_bytes()?)
}
