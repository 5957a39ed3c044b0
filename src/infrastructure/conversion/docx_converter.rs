use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ConversionError, DocumentConverter, converted_path_for};
use crate::infrastructure::blocking::run_blocking;

use super::text_layout::render_text_pdf;

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Renders the text of WordprocessingML (`.docx`) documents as a PDF.
/// Paragraph, tab and line-break structure is kept; styling is not.
pub struct DocxConverter {
    timeout: Duration,
}

impl DocxConverter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DocumentConverter for DocxConverter {
    #[tracing::instrument(skip(self), fields(source = %source.display()))]
    async fn convert_to_pdf(&self, source: &Path) -> Result<PathBuf, ConversionError> {
        let input = source.to_path_buf();

        // Rendered in memory; the file is written only once the task
        // finished inside the timeout.
        let (bytes, page_count) = run_blocking(self.timeout, move || {
            extract_docx_text(&input).map(|text| render_text_pdf(&text))
        })
        .await??;

        let output = converted_path_for(source);
        tokio::fs::write(&output, bytes).await?;

        tracing::info!(page_count, output = %output.display(), "DOCX conversion complete");

        Ok(output)
    }
}

fn is_wml(node: roxmltree::Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

fn in_run(node: roxmltree::Node) -> bool {
    node.parent().is_some_and(|p| is_wml(p, "r"))
}

/// Body text of a `.docx`, one line per paragraph.
pub fn extract_docx_text(path: &Path) -> Result<String, ConversionError> {
    let file = std::fs::File::open(path)?;
    let mut zip = zip::ZipArchive::new(file)
        .map_err(|e| ConversionError::ConversionFailed(format!("not a DOCX archive: {e}")))?;

    let mut xml_content = String::new();
    zip.by_name(DOCUMENT_PART)
        .map_err(|e| ConversionError::ConversionFailed(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml_content)?;

    let xml = roxmltree::Document::parse(&xml_content)
        .map_err(|e| ConversionError::ConversionFailed(format!("invalid {DOCUMENT_PART}: {e}")))?;

    let body = xml
        .root_element()
        .children()
        .find(|n| is_wml(*n, "body"))
        .ok_or_else(|| ConversionError::ConversionFailed("missing w:body".to_string()))?;

    // Text boxes nest paragraphs inside paragraphs; the outer one carries
    // the inner text already.
    let paragraphs = body
        .descendants()
        .filter(|n| is_wml(*n, "p"))
        .filter(|p| !p.ancestors().skip(1).any(|a| is_wml(a, "p")));

    let mut lines = Vec::new();
    for para in paragraphs {
        let mut line = String::new();
        for node in para.descendants() {
            if !in_run(node) {
                continue;
            }
            if is_wml(node, "t") {
                line.push_str(node.text().unwrap_or_default());
            } else if is_wml(node, "tab") {
                line.push('\t');
            } else if is_wml(node, "br") || is_wml(node, "cr") {
                line.push('\n');
            }
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
