use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 56.0;
const FONT_SIZE: f32 = 11.0;
const LEADING: f32 = 14.0;
const TAB_WIDTH: usize = 4;

pub const MAX_LINE_CHARS: usize = 88;

pub fn lines_per_page() -> usize {
    ((PAGE_HEIGHT - 2.0 * MARGIN) / LEADING).floor() as usize
}

/// Splits text into printable lines no wider than `MAX_LINE_CHARS`,
/// breaking on whitespace where possible.
pub fn layout_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let expanded = raw_line.replace('\t', &" ".repeat(TAB_WIDTH));
        let printable: String = expanded.chars().map(to_printable).collect();
        let trimmed = printable.trim_end();

        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in trimmed.split(' ') {
            let needed = if current.is_empty() {
                word.len()
            } else {
                current.len() + 1 + word.len()
            };

            if needed <= MAX_LINE_CHARS {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            let mut rest = word;
            while rest.len() > MAX_LINE_CHARS {
                let (head, tail) = rest.split_at(MAX_LINE_CHARS);
                lines.push(head.to_string());
                rest = tail;
            }
            current.push_str(rest);
        }
        lines.push(current);
    }

    lines
}

// Only printable ASCII survives the built-in Helvetica encoding.
fn to_printable(c: char) -> char {
    if c.is_ascii_graphic() || c == ' ' {
        c
    } else if c.is_whitespace() {
        ' '
    } else {
        '?'
    }
}

/// Lays `text` out on A4 pages in Helvetica. Returns the PDF bytes and the
/// number of pages written; empty text still yields one blank page.
pub fn render_text_pdf(text: &str) -> (Vec<u8>, usize) {
    let lines = layout_lines(text);
    let per_page = lines_per_page();
    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&lines[..]]
    } else {
        lines.chunks(per_page).collect()
    };

    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let font_id = Ref::new(3);
    let page_ids: Vec<Ref> = (0..chunks.len())
        .map(|i| Ref::new(4 + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(chunks.len() as i32);

    for (page_lines, page_id) in chunks.iter().zip(&page_ids) {
        let content_id = Ref::new(page_id.get() + 1);
        let mut content = Content::new();
        let mut cursor_y = PAGE_HEIGHT - MARGIN - FONT_SIZE;

        for line in page_lines.iter() {
            if !line.is_empty() {
                content
                    .begin_text()
                    .set_font(Name(b"F1"), FONT_SIZE)
                    .next_line(MARGIN, cursor_y)
                    .show(Str(line.as_bytes()))
                    .end_text();
            }
            cursor_y -= LEADING;
        }

        pdf.stream(content_id, &content.finish());

        pdf.page(*page_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(pages_id)
            .contents(content_id)
            .resources()
            .fonts()
            .pair(Name(b"F1"), font_id);
    }

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    (pdf.finish(), chunks.len())
}
