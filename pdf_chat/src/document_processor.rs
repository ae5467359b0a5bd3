use anyhow::Result;
use async_trait::async_trait;
use pdf_extract::extract_text_from_mem;

/// Turns raw uploaded bytes into plain text, pages in order.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String>;
}

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String> {
        // pdf-extract is CPU bound and may panic on malformed input; a panic
        // surfaces here as a JoinError instead of taking the worker down.
        let text = tokio::task::spawn_blocking(move || extract_text_from_mem(&bytes))
            .await
            .map_err(|e| anyhow::anyhow!("PDF extraction aborted: {}", e))??;

        log::debug!("Extracted {} characters from PDF", text.chars().count());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal PDF with one Helvetica text line per page.
    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let first_page = 4;
        let first_content = first_page + pages.len();
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", first_page + i))
            .collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];
        for i in 0..pages.len() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                first_content + i
            ));
        }
        for text in pages {
            let stream = format!("BT /F1 24 Tf 72 720 Td ({}) Tj ET", text);
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                stream.len(),
                stream
            ));
        }

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
        }

        let xref_offset = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );
        pdf
    }

    #[tokio::test]
    async fn extracts_page_text_in_page_order() {
        let extractor = PdfExtractor::new();
        let text = extractor
            .extract(pdf_with_pages(&["FirstPage", "SecondPage"]))
            .await
            .unwrap();

        let first = text.find("FirstPage").unwrap();
        let second = text.find("SecondPage").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn rejects_bytes_that_are_not_a_pdf() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(b"this is plain text, not a PDF".to_vec()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_empty_input() {
        let extractor = PdfExtractor::new();
        assert!(extractor.extract(Vec::new()).await.is_err());
    }

    #[tokio::test]
    async fn rejects_truncated_header() {
        let extractor = PdfExtractor::new();
        assert!(extractor.extract(b"%PDF-1.4\n%".to_vec()).await.is_err());
    }
}
