use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;

use quill_core::GenerationResult;

use crate::pdf;

/// Pretty-printed JSON of the full result, the exact shape written to the
/// clipboard.
pub fn result_json(result: &GenerationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Output name: the title lower-cased with whitespace collapsed to hyphens.
pub fn pdf_file_name(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "untitled.pdf".to_string()
    } else {
        format!("{slug}.pdf")
    }
}

/// Renders the result and writes it to a user-chosen destination,
/// defaulting to the derived filename. Returns `None` when the dialog is
/// dismissed.
pub fn save_pdf(result: &GenerationResult) -> anyhow::Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(pdf_file_name(&result.title))
        .save_file()
    else {
        return Ok(None);
    };

    let bytes = pdf::render(result)?;
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::samples;

    #[test]
    fn test_file_name_collapses_whitespace_to_hyphens() {
        assert_eq!(pdf_file_name("The Goblin's Tea Party"), "the-goblin's-tea-party.pdf");
        assert_eq!(pdf_file_name("  spaced   out \t title "), "spaced-out-title.pdf");
        assert_eq!(pdf_file_name(""), "untitled.pdf");
    }

    #[test]
    fn test_result_json_matches_export_shape() {
        let sample = samples::gallery().into_iter().next().unwrap();
        let json = result_json(&sample).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], sample.id.as_str());
        assert_eq!(value["metadata"]["tokenUsage"], "N/A");
        assert!(json.contains('\n'), "clipboard copy is pretty-printed");
    }
}
