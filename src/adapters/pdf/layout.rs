use super::metrics::FontFace;
use crate::core::PdfDocument;

pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Page geometry in millimetres, font sizes in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub cell_padding: f32,
    /// Distance from the bottom edge at which body text moves to a new page.
    pub bottom_margin: f32,
    pub header_height: f32,
    pub line_height: f32,
    /// Footer cell top, measured up from the bottom edge.
    pub footer_offset: f32,
    pub footer_height: f32,
    pub title_font_size: f32,
    pub body_font_size: f32,
    pub footer_font_size: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 10.0,
            cell_padding: 1.0,
            bottom_margin: 20.0,
            header_height: 10.0,
            line_height: 10.0,
            footer_offset: 15.0,
            footer_height: 10.0,
            title_font_size: 12.0,
            body_font_size: 12.0,
            footer_font_size: 8.0,
        }
    }
}

impl PageStyle {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    fn break_trigger(&self) -> f32 {
        self.page_height - self.bottom_margin
    }

    fn body_top(&self) -> f32 {
        self.margin + self.header_height
    }
}

/// A run of text at a fixed position. Coordinates are millimetres from the
/// top-left corner of the page; `baseline` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub face: FontFace,
    pub size: f32,
    pub x: f32,
    pub baseline: f32,
    /// Extra space added to every space character, in millimetres.
    pub word_spacing: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub number: usize,
    pub items: Vec<PlacedText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub word_spacing: f32,
}

impl WrappedLine {
    fn ragged(text: String) -> Self {
        Self {
            text,
            word_spacing: 0.0,
        }
    }
}

fn font_mm(size: f32) -> f32 {
    size / PT_PER_MM
}

fn text_width_mm(face: FontFace, size: f32, text: &str) -> f32 {
    face.text_units(text) as f32 * font_mm(size) / 1000.0
}

fn baseline(cell_top: f32, cell_height: f32, size: f32) -> f32 {
    cell_top + 0.5 * cell_height + 0.3 * font_mm(size)
}

/// Breaks `text` into lines no wider than `width` mm.
///
/// Explicit newlines always start a new line; `\r` is ignored and a single
/// trailing newline does not produce an empty line. Lines broken at a space
/// are justified (the space is consumed); a word that does not fit on an
/// empty line is split mid-word.
pub fn wrap_text(text: &str, face: FontFace, size: f32, width: f32) -> Vec<WrappedLine> {
    let em = font_mm(size);
    let max_units = width * 1000.0 / em;

    let chars: Vec<char> = text.chars().filter(|&c| c != '\r').collect();
    let mut end = chars.len();
    if chars.last() == Some(&'\n') {
        end -= 1;
    }
    let segment = |from: usize, to: usize| chars[from..to].iter().collect::<String>();

    let mut lines = Vec::new();
    let mut sep: Option<usize> = None;
    let mut line_start = 0;
    let mut i = 0;
    let mut units = 0.0f32;
    let mut units_before_sep = 0.0f32;
    let mut spaces = 0usize;

    while i < end {
        let c = chars[i];
        if c == '\n' {
            lines.push(WrappedLine::ragged(segment(line_start, i)));
            i += 1;
            sep = None;
            line_start = i;
            units = 0.0;
            spaces = 0;
            continue;
        }
        if c == ' ' {
            sep = Some(i);
            units_before_sep = units;
            spaces += 1;
        }
        units += f32::from(face.char_width(c));

        if units > max_units {
            match sep {
                None => {
                    if i == line_start {
                        i += 1;
                    }
                    lines.push(WrappedLine::ragged(segment(line_start, i)));
                }
                Some(at) => {
                    let word_spacing = if spaces > 1 {
                        (max_units - units_before_sep) / 1000.0 * em / (spaces - 1) as f32
                    } else {
                        0.0
                    };
                    lines.push(WrappedLine {
                        text: segment(line_start, at),
                        word_spacing,
                    });
                    i = at + 1;
                }
            }
            sep = None;
            line_start = i;
            units = 0.0;
            spaces = 0;
        } else {
            i += 1;
        }
    }
    lines.push(WrappedLine::ragged(segment(line_start, i)));
    lines
}

/// Places header, wrapped body and footer on as many pages as the body needs.
pub fn layout_document(document: &PdfDocument, style: &PageStyle) -> Vec<PageLayout> {
    let text_width = style.content_width() - 2.0 * style.cell_padding;
    let lines = wrap_text(
        &document.body,
        FontFace::Regular,
        style.body_font_size,
        text_width,
    );

    let mut pages = Vec::new();
    let mut page = start_page(1, &document.title, style);
    let mut y = style.body_top();

    for line in lines {
        if y + style.line_height > style.break_trigger() {
            close_page(&mut page, style);
            let next = page.number + 1;
            pages.push(std::mem::replace(&mut page, start_page(next, &document.title, style)));
            y = style.body_top();
        }
        if !line.text.is_empty() {
            page.items.push(PlacedText {
                face: FontFace::Regular,
                size: style.body_font_size,
                x: style.margin + style.cell_padding,
                baseline: baseline(y, style.line_height, style.body_font_size),
                word_spacing: line.word_spacing,
                text: line.text,
            });
        }
        y += style.line_height;
    }

    close_page(&mut page, style);
    pages.push(page);
    pages
}

fn centered(face: FontFace, size: f32, text: &str, cell_top: f32, cell_height: f32, style: &PageStyle) -> PlacedText {
    let offset = (style.content_width() - text_width_mm(face, size, text)) / 2.0;
    PlacedText {
        face,
        size,
        x: style.margin + offset,
        baseline: baseline(cell_top, cell_height, size),
        word_spacing: 0.0,
        text: text.to_string(),
    }
}

fn start_page(number: usize, title: &str, style: &PageStyle) -> PageLayout {
    PageLayout {
        number,
        items: vec![centered(
            FontFace::Bold,
            style.title_font_size,
            title,
            style.margin,
            style.header_height,
            style,
        )],
    }
}

fn close_page(page: &mut PageLayout, style: &PageStyle) {
    let footer = format!("Page {}", page.number);
    page.items.push(centered(
        FontFace::Italic,
        style.footer_font_size,
        &footer,
        style.page_height - style.footer_offset,
        style.footer_height,
        style,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> PdfDocument {
        PdfDocument {
            title: "Subject: Test".to_string(),
            body: body.to_string(),
        }
    }

    fn body_lines(page: &PageLayout) -> Vec<&str> {
        page.items
            .iter()
            .filter(|item| item.face == FontFace::Regular)
            .map(|item| item.text.as_str())
            .collect()
    }

    #[test]
    fn test_short_body_fits_one_page() {
        let pages = layout_document(&doc("No body content."), &PageStyle::default());
        assert_eq!(pages.len(), 1);

        let items = &pages[0].items;
        assert_eq!(items.first().unwrap().face, FontFace::Bold);
        assert_eq!(items.first().unwrap().text, "Subject: Test");
        assert_eq!(items.last().unwrap().face, FontFace::Italic);
        assert_eq!(items.last().unwrap().text, "Page 1");
        assert_eq!(body_lines(&pages[0]), vec!["No body content."]);
    }

    #[test]
    fn test_header_and_footer_are_centered() {
        let style = PageStyle::default();
        let pages = layout_document(&doc("x"), &style);
        let header = pages[0].items.first().unwrap();
        let width = text_width_mm(FontFace::Bold, 12.0, "Subject: Test");
        let left = header.x - style.margin;
        let right = style.content_width() - left - width;
        assert!((left - right).abs() < 0.01);

        let footer = pages[0].items.last().unwrap();
        assert!(footer.baseline > 282.0 && footer.baseline < 292.0);
    }

    #[test]
    fn test_long_body_paginates_with_footer_per_page() {
        let body: Vec<String> = (1..=60).map(|n| format!("line {}", n)).collect();
        let pages = layout_document(&doc(&body.join("\n")), &PageStyle::default());

        assert_eq!(pages.len(), 3);
        assert_eq!(body_lines(&pages[0]).len(), 25);
        assert_eq!(body_lines(&pages[1]).first(), Some(&"line 26"));
        assert_eq!(body_lines(&pages[2]).len(), 10);
        for (index, page) in pages.iter().enumerate() {
            assert_eq!(page.items[0].text, "Subject: Test");
            assert_eq!(page.items.last().unwrap().text, format!("Page {}", index + 1));
        }
    }

    #[test]
    fn test_body_starts_below_header() {
        let pages = layout_document(&doc("first"), &PageStyle::default());
        let first = pages[0]
            .items
            .iter()
            .find(|item| item.face == FontFace::Regular)
            .unwrap();
        assert!(first.baseline > 20.0 && first.baseline < 30.0);
        assert!((first.x - 11.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_wrap_keeps_every_word_in_order() {
        let text = "lorem ipsum dolor sit amet ".repeat(40);
        let lines = wrap_text(text.trim_end(), FontFace::Regular, 12.0, 188.0);

        assert!(lines.len() > 1);
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.text.split(' ')).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);

        for line in &lines {
            assert!(text_width_mm(FontFace::Regular, 12.0, &line.text) <= 188.0);
        }
    }

    #[test]
    fn test_wrapped_lines_are_justified_except_last() {
        let text = "word ".repeat(100);
        let lines = wrap_text(text.trim_end(), FontFace::Regular, 12.0, 188.0);
        let (last, rest) = lines.split_last().unwrap();
        assert!(rest.iter().all(|l| l.word_spacing > 0.0));
        assert_eq!(last.word_spacing, 0.0);
    }

    #[test]
    fn test_long_word_is_split() {
        let text = "x".repeat(200);
        let lines = wrap_text(&text, FontFace::Regular, 12.0, 188.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.iter().map(|l| l.text.len()).sum::<usize>(), 200);
    }

    #[test]
    fn test_newlines_and_carriage_returns() {
        let lines = wrap_text("a\r\nb\n\nc\n", FontFace::Regular, 12.0, 188.0);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_empty_body_yields_single_blank_line() {
        let lines = wrap_text("", FontFace::Regular, 12.0, 188.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.is_empty());
    }
}
