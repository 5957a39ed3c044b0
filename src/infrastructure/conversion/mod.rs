mod composite_converter;
mod docx_converter;
mod text_converter;
mod text_layout;

pub use composite_converter::CompositeConverter;
pub use docx_converter::{DocxConverter, extract_docx_text};
pub use text_converter::TextConverter;
pub use text_layout::{MAX_LINE_CHARS, layout_lines, lines_per_page, render_text_pdf};

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DocumentConverter;

pub const TEXT_EXTENSIONS: [&str; 5] = ["txt", "text", "md", "csv", "log"];

/// The converter set the service runs with: DOCX plus plain-text formats.
pub fn default_converter(timeout: Duration) -> CompositeConverter {
    let docx: Arc<dyn DocumentConverter> = Arc::new(DocxConverter::new(timeout));
    let text: Arc<dyn DocumentConverter> = Arc::new(TextConverter::new());

    let mut converters = vec![("docx", docx)];
    converters.extend(TEXT_EXTENSIONS.iter().map(|ext| (*ext, Arc::clone(&text))));

    CompositeConverter::new(converters)
}
