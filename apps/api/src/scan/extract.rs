use std::fs;
use std::path::Path;

use crate::scan::ScanError;

/// Extracts the plain text of a CV PDF.
///
/// The whole document is read into memory and handed to `pdf-extract`, which
/// walks the pages in order and concatenates their text. Pages with no
/// extractable text (scanned images, blank pages) contribute nothing, so a
/// readable but image-only document yields an empty string rather than an
/// error. Unreadable paths and corrupt or non-PDF bytes fail with a
/// `ScanError` that callers surface as a processing failure.
pub fn extract_text(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::scan::fixtures::pdf_with_text;

    #[test]
    fn test_extracts_text_from_single_page_pdf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&pdf_with_text(Some("Hello World"))).unwrap();

        let text = extract_text(file.path()).unwrap();
        assert!(text.contains("Hello World"), "extracted: {text:?}");
    }

    #[test]
    fn test_pdf_without_text_yields_empty_string() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&pdf_with_text(None)).unwrap();

        assert_eq!(extract_text(file.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = extract_text(Path::new("/no/such/file.pdf")).unwrap_err();
        assert!(matches!(err, ScanError::Unreadable(_)));
    }

    #[test]
    fn test_non_pdf_bytes_fail_extraction() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is a plain text file, not a PDF")
            .unwrap();

        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::Extraction(_)));
    }
}
