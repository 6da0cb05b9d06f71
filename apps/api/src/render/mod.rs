//! PDF → plain-text input boundary.
//!
//! The extraction engine only ever sees text; this is the one place document
//! bytes are touched. No layout assumptions — whatever text the renderer
//! recovers is handed on as-is.

use crate::errors::AppError;

pub fn text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Render(format!("Failed to extract text from PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        let result = text_from_pdf(b"this is not a pdf");
        assert!(result.is_err());
    }
}
