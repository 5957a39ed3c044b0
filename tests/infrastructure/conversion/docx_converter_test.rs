use std::time::Duration;

use pdfgate::application::ports::{ConversionError, DocumentConverter, PdfProcessor};
use pdfgate::infrastructure::conversion::{DocxConverter, default_converter, extract_docx_text};
use pdfgate::infrastructure::pdf::PdfTextProcessor;

use crate::helpers::write_docx;

fn converter() -> DocxConverter {
    DocxConverter::new(Duration::from_secs(10))
}

#[tokio::test]
async fn given_corrupt_docx_when_converting_then_returns_conversion_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("broken.docx");
    std::fs::write(&source, b"this is not a zip archive").unwrap();

    let result = converter().convert_to_pdf(&source).await;

    assert!(matches!(result, Err(ConversionError::ConversionFailed(_))));
    assert!(!dir.path().join("broken.converted.pdf").exists());
}

#[tokio::test]
async fn given_zip_without_document_part_when_converting_then_returns_conversion_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("empty.docx");
    let mut zip = zip::ZipWriter::new(std::fs::File::create(&source).unwrap());
    zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.finish().unwrap();

    let result = converter().convert_to_pdf(&source).await;

    assert!(matches!(result, Err(ConversionError::ConversionFailed(_))));
}

#[test]
fn given_docx_paragraphs_when_extracting_then_one_line_per_paragraph() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("notes.docx");
    write_docx(&source, &["Quarterly report", "Revenue grew"]);

    let text = extract_docx_text(&source).unwrap();

    assert_eq!(text, "Quarterly report\nRevenue grew");
}

#[tokio::test]
async fn given_valid_docx_when_converting_then_writes_pdf_next_to_source() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("notes.docx");
    write_docx(&source, &["Quarterly report"]);

    let output = converter().convert_to_pdf(&source).await.unwrap();

    assert_eq!(output, dir.path().join("notes.converted.pdf"));
    assert!(std::fs::read(&output).unwrap().starts_with(b"%PDF-"));
    assert!(source.exists());
}

#[tokio::test]
async fn given_valid_docx_when_converted_and_processed_then_text_is_extracted() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("notes.docx");
    write_docx(&source, &["Quarterly report", "Revenue grew"]);

    let pdf = default_converter(Duration::from_secs(10))
        .convert_to_pdf(&source)
        .await
        .unwrap();
    let result = PdfTextProcessor::new(Duration::from_secs(30))
        .process(&pdf)
        .await
        .unwrap();

    assert_eq!(result.page_count, 1);
    assert!(result.text.contains("Quarterly report"));
    assert!(result.text.contains("Revenue grew"));
}
