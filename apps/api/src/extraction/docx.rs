use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use super::ExtractError;

/// Extracts the text of each body paragraph, joined with `\n`.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => {
                let mut text = String::new();
                collect_text(&p.children, &mut text);
                Some(text)
            }
            // tables and section properties are not body paragraphs
            _ => None,
        })
        .collect();

    tracing::debug!(paragraphs = paragraphs.len(), "extracted DOCX text");
    Ok(paragraphs.join("\n"))
}

fn collect_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_text(&link.children, out),
            _ => {}
        }
    }
}
