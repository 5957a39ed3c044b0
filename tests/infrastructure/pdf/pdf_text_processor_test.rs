use std::time::Duration;

use pdfgate::application::ports::{DocumentConverter, PdfProcessor, PdfProcessorError};
use pdfgate::infrastructure::conversion::TextConverter;
use pdfgate::infrastructure::pdf::PdfTextProcessor;

fn processor() -> PdfTextProcessor {
    PdfTextProcessor::new(Duration::from_secs(30))
}

#[tokio::test]
async fn given_corrupt_bytes_when_processing_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("corrupt.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();

    let result = processor().process(&path).await;

    assert!(matches!(result, Err(PdfProcessorError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_missing_file_when_processing_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();

    let result = processor().process(&dir.path().join("absent.pdf")).await;

    assert!(matches!(result, Err(PdfProcessorError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_converted_multi_page_text_when_processing_then_counts_every_page() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("long.txt");
    let text: String = (1..=80).map(|i| format!("line number {i}\n")).collect();
    std::fs::write(&source, text).unwrap();

    let pdf = TextConverter::new().convert_to_pdf(&source).await.unwrap();
    let result = processor().process(&pdf).await.unwrap();

    assert_eq!(result.page_count, 2);
}

#[tokio::test]
async fn given_converted_text_when_processing_then_returns_page_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("short.txt");
    std::fs::write(&source, "hello world\nsecond line\n").unwrap();

    let pdf = TextConverter::new().convert_to_pdf(&source).await.unwrap();
    let result = processor().process(&pdf).await.unwrap();

    assert_eq!(result.page_count, 1);
    assert_eq!(result.pages.len(), 1);
    assert_eq!(result.pages[0].page_number, 1);
    assert_eq!(result.text, "hello world\nsecond line");
}
