//! Best-effort text excerpts from uploaded files.
//!
//! Extraction is advisory: a file that yields no text contributes nothing to
//! the prompt, and no extraction failure ever fails the request. Two caps
//! bound the prompt size: a per-file cap and a cumulative cap across all
//! files, applied in file order.

use base64::Engine as _;
use tracing::debug;

use crate::agents::models::FileDescriptor;

const PDF_MIME: &str = "application/pdf";

/// Tracks the per-file and cumulative excerpt caps while excerpt blocks are
/// built in file order.
#[derive(Debug)]
pub struct ExcerptBudget {
    per_file: usize,
    total: usize,
    used: usize,
}

impl ExcerptBudget {
    pub fn new(per_file: usize, total: usize) -> Self {
        Self {
            per_file,
            total,
            used: 0,
        }
    }

    pub fn exhausted(&self) -> bool {
        self.used >= self.total
    }

    /// Takes up to `per_file` chars from `raw`, bounded by what remains of
    /// the cumulative cap. Char-based so multi-byte text never splits.
    fn take<'a>(&mut self, raw: &'a str) -> &'a str {
        let remaining = self.total.saturating_sub(self.used);
        let limit = self.per_file.min(remaining);
        let end = raw
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(raw.len());
        let slice = &raw[..end];
        self.used += slice.chars().count();
        slice
    }
}

fn is_pdf(file: &FileDescriptor) -> bool {
    file.mime.as_deref() == Some(PDF_MIME) || file.name.to_lowercase().ends_with(".pdf")
}

/// Returns the best-effort text for one file: inline text when present,
/// otherwise extracted from base64 PDF bytes. Empty string when neither
/// applies or extraction fails.
pub async fn extract_text(file: &FileDescriptor) -> String {
    if let Some(content) = &file.content {
        if !content.is_empty() {
            return content.clone();
        }
    }

    if is_pdf(file) {
        if let Some(encoded) = &file.content_base64 {
            return extract_pdf_text(encoded).await;
        }
    }

    String::new()
}

/// Decodes base64 bytes and extracts PDF text on a blocking task.
/// Any failure yields an empty string.
async fn extract_pdf_text(encoded: &str) -> String {
    let bytes = match base64::engine::general_purpose::STANDARD.decode(encoded) {
        Ok(b) => b,
        Err(e) => {
            debug!("base64 decode failed: {e}");
            return String::new();
        }
    };

    let extracted =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match extracted {
        Ok(Ok(text)) => text.trim().to_string(),
        Ok(Err(e)) => {
            debug!("pdf text extraction failed: {e}");
            String::new()
        }
        Err(e) => {
            debug!("pdf extraction task panicked: {e}");
            String::new()
        }
    }
}

/// Builds the labelled excerpt blocks for one file group, consuming the
/// shared budget in file order. Files after the cumulative cap is reached
/// contribute nothing.
pub async fn excerpt_blocks(
    label: &str,
    files: &[FileDescriptor],
    budget: &mut ExcerptBudget,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for file in files {
        if budget.exhausted() {
            break;
        }
        let raw = extract_text(file).await;
        if raw.is_empty() {
            debug!(
                "no text for file {} (mime: {:?}, has_base64: {})",
                file.name,
                file.mime,
                file.content_base64.is_some()
            );
            continue;
        }
        let slice = budget.take(&raw);
        if slice.is_empty() {
            continue;
        }
        parts.push(format!(
            "File: {}\n--- BEGIN {} EXCERPT ---\n{}\n--- END EXCERPT ---",
            file.name, label, slice
        ));
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_file(name: &str, content: &str) -> FileDescriptor {
        FileDescriptor {
            name: name.to_string(),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_per_file_cap_applies() {
        let files = vec![text_file("a.txt", &"x".repeat(100))];
        let mut budget = ExcerptBudget::new(10, 1000);
        let blocks = excerpt_blocks("RFP", &files, &mut budget).await;
        assert!(blocks.contains(&"x".repeat(10)));
        assert!(!blocks.contains(&"x".repeat(11)));
    }

    #[tokio::test]
    async fn test_cumulative_cap_skips_trailing_files() {
        let files = vec![
            text_file("a.txt", &"a".repeat(50)),
            text_file("b.txt", &"b".repeat(50)),
            text_file("c.txt", &"c".repeat(50)),
        ];
        let mut budget = ExcerptBudget::new(50, 80);
        let blocks = excerpt_blocks("RFP", &files, &mut budget).await;
        // First file takes 50, second the remaining 30, third nothing.
        assert!(blocks.contains("File: a.txt"));
        assert!(blocks.contains(&"a".repeat(50)));
        assert!(blocks.contains(&"b".repeat(30)));
        assert!(!blocks.contains(&"b".repeat(31)));
        assert!(!blocks.contains("File: c.txt"));
    }

    #[tokio::test]
    async fn test_budget_spans_groups() {
        let rfp = vec![text_file("a.txt", &"a".repeat(80))];
        let reference = vec![text_file("b.txt", &"b".repeat(80))];
        let mut budget = ExcerptBudget::new(100, 100);
        let first = excerpt_blocks("RFP", &rfp, &mut budget).await;
        let second = excerpt_blocks("REFERENCE", &reference, &mut budget).await;
        assert!(first.contains(&"a".repeat(80)));
        assert!(second.contains(&"b".repeat(20)));
        assert!(!second.contains(&"b".repeat(21)));
    }

    #[tokio::test]
    async fn test_files_without_text_are_skipped() {
        let files = vec![
            FileDescriptor {
                name: "empty.bin".to_string(),
                ..Default::default()
            },
            text_file("b.txt", "usable"),
        ];
        let mut budget = ExcerptBudget::new(100, 100);
        let blocks = excerpt_blocks("RFP", &files, &mut budget).await;
        assert!(!blocks.contains("empty.bin"));
        assert!(blocks.contains("File: b.txt"));
        assert!(blocks.contains("usable"));
    }

    #[tokio::test]
    async fn test_bad_base64_yields_empty_excerpt() {
        let files = vec![FileDescriptor {
            name: "doc.pdf".to_string(),
            mime: Some("application/pdf".to_string()),
            content_base64: Some("%%%not-base64%%%".to_string()),
            ..Default::default()
        }];
        let mut budget = ExcerptBudget::new(100, 100);
        let blocks = excerpt_blocks("RFP", &files, &mut budget).await;
        assert!(blocks.is_empty());
    }

    #[tokio::test]
    async fn test_multibyte_text_slices_on_char_boundary() {
        let files = vec![text_file("notes.txt", &"é".repeat(30))];
        let mut budget = ExcerptBudget::new(10, 1000);
        let blocks = excerpt_blocks("RFP", &files, &mut budget).await;
        assert!(blocks.contains(&"é".repeat(10)));
        assert!(!blocks.contains(&"é".repeat(11)));
    }

    #[test]
    fn test_pdf_recognized_by_suffix_or_mime() {
        let by_name = FileDescriptor {
            name: "Tender.PDF".to_string(),
            ..Default::default()
        };
        let by_mime = FileDescriptor {
            name: "upload".to_string(),
            mime: Some("application/pdf".to_string()),
            ..Default::default()
        };
        let neither = FileDescriptor {
            name: "notes.docx".to_string(),
            ..Default::default()
        };
        assert!(is_pdf(&by_name));
        assert!(is_pdf(&by_mime));
        assert!(!is_pdf(&neither));
    }
}
