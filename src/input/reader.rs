use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::TranslateError;
use crate::translation::{Attachment, DocumentKind};

const MAX_TEXT_SIZE: usize = 1024 * 1024; // 1MB
const MAX_DOCUMENT_SIZE: usize = 32 * 1024 * 1024; // 32MB, the API's document limit

/// Extensions decoded as UTF-8 text.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Content read from a file or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDocument {
    /// Plain text to translate.
    Text(String),
    /// A PDF or DOCX document sent to the API as an attachment.
    Binary(Attachment),
}

impl SourceDocument {
    /// The text fed to the prompt: the content itself, or the placeholder
    /// for a binary document.
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Binary(attachment) => attachment.kind.placeholder(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Binary(attachment) => attachment.data.is_empty(),
        }
    }

    /// Splits into the `raw_text`/`attachment` pair of a translation request.
    pub fn into_parts(self) -> (Option<String>, Option<Attachment>) {
        match self {
            Self::Text(text) => (Some(text), None),
            Self::Binary(attachment) => (
                Some(attachment.kind.placeholder().to_string()),
                Some(attachment),
            ),
        }
    }
}

pub struct InputReader;

impl InputReader {
    /// Reads a document from `file_path`, or text from stdin when no path is given.
    pub fn read(file_path: Option<&str>) -> Result<SourceDocument, TranslateError> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<SourceDocument, TranslateError> {
        let extension = Path::new(path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if TEXT_EXTENSIONS.contains(&extension.as_str()) {
            check_size(path, MAX_TEXT_SIZE)?;
            let text = fs::read_to_string(path).map_err(|e| {
                TranslateError::read(format!("could not decode '{path}' as UTF-8 text: {e}"))
            })?;
            tracing::debug!(path, bytes = text.len(), "read text document");
            return Ok(SourceDocument::Text(text));
        }

        let kind = DocumentKind::from_extension(&extension).ok_or_else(|| {
            TranslateError::read(format!(
                "unsupported file type for '{path}'. Supported types: TXT, MD, PDF, DOCX"
            ))
        })?;

        check_size(path, MAX_DOCUMENT_SIZE)?;
        let data = fs::read(path)
            .map_err(|e| TranslateError::read(format!("could not read '{path}': {e}")))?;
        tracing::debug!(path, bytes = data.len(), media_type = kind.media_type(), "read binary document");

        Ok(SourceDocument::Binary(Attachment::new(kind, data)))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<SourceDocument, TranslateError> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .map_err(|e| TranslateError::read(format!("could not read stdin: {e}")))?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_TEXT_SIZE {
                return Err(size_error("stdin", buffer.len(), MAX_TEXT_SIZE));
            }
        }

        String::from_utf8(buffer)
            .map(SourceDocument::Text)
            .map_err(|_| TranslateError::read("stdin is not valid UTF-8"))
    }
}

fn check_size(path: &str, limit: usize) -> Result<(), TranslateError> {
    let metadata = fs::metadata(path)
        .map_err(|e| TranslateError::read(format!("could not access '{path}': {e}")))?;

    let size = metadata.len() as usize;
    if size > limit {
        return Err(size_error(path, size, limit));
    }
    Ok(())
}

fn size_error(source: &str, size: usize, limit: usize) -> TranslateError {
    TranslateError::read(format!(
        "{source} ({:.1} MB) exceeds the maximum allowed size ({} MB)",
        size as f64 / 1024.0 / 1024.0,
        limit / 1024 / 1024
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{DOCX_PLACEHOLDER, PDF_PLACEHOLDER};
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn temp_file_with(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn read_path(file: &tempfile::NamedTempFile) -> Result<SourceDocument, TranslateError> {
        InputReader::read(Some(file.path().to_str().unwrap()))
    }

    #[test]
    fn test_read_text_file() {
        let file = temp_file_with(".txt", "Καλημέρα κόσμε!\nLine 2".as_bytes());
        let document = read_path(&file).unwrap();
        assert_eq!(
            document,
            SourceDocument::Text("Καλημέρα κόσμε!\nLine 2".to_string())
        );
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let file = temp_file_with(".TXT", b"upper");
        assert_eq!(
            read_path(&file).unwrap(),
            SourceDocument::Text("upper".to_string())
        );
    }

    #[test]
    fn test_read_pdf_file_as_attachment() {
        let file = temp_file_with(".pdf", b"%PDF-1.4 fake");
        let document = read_path(&file).unwrap();

        assert_eq!(document.raw_text(), PDF_PLACEHOLDER);
        let SourceDocument::Binary(attachment) = document else {
            panic!("expected a binary document");
        };
        assert_eq!(attachment.kind, DocumentKind::Pdf);
        assert_eq!(attachment.data, b"%PDF-1.4 fake");
    }

    #[test]
    fn test_read_docx_file_as_attachment() {
        let file = temp_file_with(".docx", b"PK\x03\x04");
        let (raw_text, attachment) = read_path(&file).unwrap().into_parts();

        assert_eq!(raw_text.as_deref(), Some(DOCX_PLACEHOLDER));
        assert_eq!(attachment.unwrap().kind, DocumentKind::Docx);
    }

    #[test]
    fn test_unsupported_extension_is_read_error() {
        let file = temp_file_with(".odt", b"data");
        let err = read_path(&file).unwrap_err();
        assert!(matches!(err, TranslateError::Read(_)));
        assert!(err.to_string().contains("unsupported file type"));
    }

    #[test]
    fn test_missing_extension_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README");
        fs::write(&path, "text").unwrap();

        let result = InputReader::read(Some(path.to_str().unwrap()));
        assert!(matches!(result, Err(TranslateError::Read(_))));
    }

    #[test]
    fn test_invalid_utf8_text_is_read_error() {
        let file = temp_file_with(".txt", &[0xff, 0xfe, 0xfd]);
        let err = read_path(&file).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_nonexistent_file_is_read_error() {
        let result = InputReader::read(Some("/nonexistent/path/to/file.pdf"));
        assert!(matches!(result, Err(TranslateError::Read(_))));
    }

    #[test]
    fn test_text_file_exceeding_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.txt");
        fs::write(&path, "x".repeat(MAX_TEXT_SIZE + 1)).unwrap();

        let err = InputReader::read(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn test_text_file_at_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("max.txt");
        fs::write(&path, "x".repeat(MAX_TEXT_SIZE)).unwrap();

        let document = InputReader::read(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(document.raw_text().len(), MAX_TEXT_SIZE);
    }

    #[test]
    fn test_is_empty() {
        assert!(SourceDocument::Text("  \n".to_string()).is_empty());
        assert!(!SourceDocument::Text("a".to_string()).is_empty());
        assert!(SourceDocument::Binary(Attachment::new(DocumentKind::Pdf, vec![])).is_empty());
    }
}
