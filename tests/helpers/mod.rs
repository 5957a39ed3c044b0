use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bytes::Bytes;
use futures::stream::BoxStream;

use pdfgate::application::ports::{
    ConversionError, DocumentConverter, PdfProcessor, PdfProcessorError, StagingStore,
    StagingStoreError, converted_path_for,
};
use pdfgate::domain::{PageText, ProcessingResult, StoragePath};

pub const STUB_TEXT: &str = "stub page text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ConverterBehaviour {
    #[default]
    Succeed,
    Fail,
    /// Leaves its output on disk, then reports a timeout.
    TimeOutAfterWriting,
}

/// Writes a placeholder PDF next to the source and remembers every call.
#[derive(Default)]
pub struct RecordingConverter {
    calls: Mutex<Vec<PathBuf>>,
    behaviour: ConverterBehaviour,
}

impl RecordingConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            behaviour: ConverterBehaviour::Fail,
            ..Self::default()
        }
    }

    pub fn timing_out_after_writing() -> Self {
        Self {
            behaviour: ConverterBehaviour::TimeOutAfterWriting,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentConverter for RecordingConverter {
    async fn convert_to_pdf(&self, source: &Path) -> Result<PathBuf, ConversionError> {
        self.calls.lock().unwrap().push(source.to_path_buf());

        if self.behaviour == ConverterBehaviour::Fail {
            return Err(ConversionError::ConversionFailed("stub failure".to_string()));
        }

        let output = converted_path_for(source);
        tokio::fs::write(&output, b"%PDF-1.7 stub").await?;

        if self.behaviour == ConverterBehaviour::TimeOutAfterWriting {
            return Err(ConversionError::TimedOut(60));
        }
        Ok(output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorCall {
    pub path: PathBuf,
    pub existed: bool,
}

/// Returns a one-page result and remembers which paths it was handed.
#[derive(Default)]
pub struct RecordingProcessor {
    calls: Mutex<Vec<ProcessorCall>>,
    fail: bool,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ProcessorCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.calls().into_iter().map(|c| c.path).collect()
    }
}

#[async_trait::async_trait]
impl PdfProcessor for RecordingProcessor {
    async fn process(&self, pdf: &Path) -> Result<ProcessingResult, PdfProcessorError> {
        self.calls.lock().unwrap().push(ProcessorCall {
            path: pdf.to_path_buf(),
            existed: pdf.exists(),
        });

        if self.fail {
            return Err(PdfProcessorError::ExtractionFailed("stub failure".to_string()));
        }

        Ok(ProcessingResult::from_pages(
            1,
            vec![PageText {
                page_number: 1,
                text: STUB_TEXT.to_string(),
            }],
        ))
    }
}

/// Refuses every write.
pub struct FailingStagingStore;

#[async_trait::async_trait]
impl StagingStore for FailingStagingStore {
    async fn store(
        &self,
        path: &StoragePath,
        _stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        Err(StagingStoreError::UploadFailed(format!("disk full: {path}")))
    }

    async fn delete(&self, _path: &StoragePath) -> Result<(), StagingStoreError> {
        Ok(())
    }

    fn resolve(&self, path: &StoragePath) -> PathBuf {
        PathBuf::from("/nonexistent").join(path.as_str())
    }
}

/// Writes a minimal `.docx` whose body holds one paragraph per entry.
pub fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}<w:sectPr/></w:body></w:document>"
    );

    let mut zip = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
    zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap();
}

pub struct FilePart<'a> {
    pub field: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

pub const BOUNDARY: &str = "pdfgate-test-boundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub fn multipart_body(parts: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.field);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{filename}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}
