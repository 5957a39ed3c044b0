use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

/// Content extracted from a PDF. Pages without text are left out of `pages`
/// but still counted in `page_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingResult {
    pub page_count: usize,
    pub pages: Vec<PageText>,
    pub text: String,
}

impl ProcessingResult {
    pub fn from_pages(page_count: usize, pages: Vec<PageText>) -> Self {
        let text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        Self {
            page_count,
            pages,
            text,
        }
    }
}
