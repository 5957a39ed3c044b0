mod pdf_text_processor;
mod text_sanitizer;

pub use pdf_text_processor::PdfTextProcessor;
pub use text_sanitizer::sanitize_page_text;
